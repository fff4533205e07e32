use thiserror::Error;

/// Errors raised while turning catalog metrics into chart descriptors.
///
/// All variants indicate a data or configuration defect, never a transient
/// condition: builders surface them synchronously at build time and never
/// hand a malformed descriptor to the renderer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("series '{series}' has {actual} points but the shared axis has {expected}")]
    MisalignedSeries {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("series '{series}' axis entry {position} is '{actual}', expected '{expected}'")]
    MisalignedAxis {
        series: String,
        position: usize,
        expected: String,
        actual: String,
    },

    #[error("{what} value {value} is outside the declared range {min}..={max}")]
    OutOfRange {
        what: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid metric '{name}': {reason}")]
    InvalidMetric { name: String, reason: String },
}

impl ChartError {
    pub(crate) fn invalid(name: &str, reason: &str) -> Self {
        ChartError::InvalidMetric {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type ChartResult<T> = Result<T, ChartError>;
