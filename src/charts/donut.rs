//! Donut builder: category share of a whole.

use crate::catalog::CategoryBreakdown;
use crate::descriptor::{
    ChartDescriptor, ChartKind, RenderType, SeriesData, SeriesDescriptor, Slice,
};
use crate::error::{ChartError, ChartResult};
use tracing::debug;

/// Map a parts-of-a-whole breakdown to a single pie series.
///
/// Values are plotted as absolute magnitudes; the renderer computes
/// proportions. A breakdown summing to zero still produces a (degenerate)
/// descriptor rather than an error. Negative or non-finite values are data
/// defects and fail with [`ChartError::InvalidMetric`].
pub fn build(breakdown: &CategoryBreakdown) -> ChartResult<ChartDescriptor> {
    if breakdown.title.is_empty() {
        return Err(ChartError::invalid("breakdown", "empty title"));
    }
    let mut slices = Vec::with_capacity(breakdown.entries.len());
    for entry in &breakdown.entries {
        if entry.label.is_empty() {
            return Err(ChartError::invalid(&breakdown.title, "empty category label"));
        }
        if !entry.value.is_finite() {
            return Err(ChartError::invalid(&entry.label, "value is not finite"));
        }
        if entry.value < 0.0 {
            return Err(ChartError::invalid(&entry.label, "negative share value"));
        }
        slices.push(Slice {
            name: entry.label.clone(),
            value: entry.value,
        });
    }

    let mut descriptor = ChartDescriptor::new(ChartKind::Donut, &breakdown.title);
    descriptor.series.push(SeriesDescriptor {
        name: breakdown.title.clone(),
        render_type: RenderType::Pie,
        data: SeriesData::Slices(slices),
    });
    debug!(title = %descriptor.title, slices = breakdown.entries.len(), "built donut descriptor");
    Ok(descriptor)
}
