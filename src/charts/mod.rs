//! Chart descriptor builders, one module per chart kind.
//!
//! Each builder is a pure function: it takes the relevant catalog slice,
//! validates the invariants that make the descriptor renderable (axis
//! co-alignment, value ranges), and returns an immutable
//! [`ChartDescriptor`](crate::descriptor::ChartDescriptor). Builders never
//! suppress a validation failure and never emit a partially-built descriptor.

pub mod bar;
pub mod donut;
pub mod heatmap;
pub mod line;
pub mod radar;

use crate::descriptor::{Legend, LegendPlacement};
use crate::error::{ChartError, ChartResult};

/// Verify that a series lines up with the chart's shared axis: same number
/// of values as axis labels, and (for series carrying their own label list)
/// identical labels in identical order.
pub(crate) fn check_alignment(
    series_name: &str,
    shared_labels: &[String],
    series_labels: &[String],
    value_count: usize,
) -> ChartResult<()> {
    if series_labels.len() != shared_labels.len() {
        return Err(ChartError::MisalignedSeries {
            series: series_name.to_string(),
            expected: shared_labels.len(),
            actual: series_labels.len(),
        });
    }
    for (position, (shared, label)) in shared_labels.iter().zip(series_labels).enumerate() {
        if shared != label {
            return Err(ChartError::MisalignedAxis {
                series: series_name.to_string(),
                position,
                expected: shared.clone(),
                actual: label.clone(),
            });
        }
    }
    if value_count != shared_labels.len() {
        return Err(ChartError::MisalignedSeries {
            series: series_name.to_string(),
            expected: shared_labels.len(),
            actual: value_count,
        });
    }
    Ok(())
}

/// Legend with one entry per series name, placed below the plot area as the
/// reference dashboard does.
pub(crate) fn legend_from_names<'a>(names: impl Iterator<Item = &'a str>) -> Legend {
    Legend {
        entries: names.map(|n| n.to_string()).collect(),
        placement: LegendPlacement::Bottom,
    }
}
