//! Radar builder: proficiency across fixed competency axes.

use crate::catalog::ProficiencyVector;
use crate::descriptor::{
    ChartDescriptor, ChartKind, Indicator, RenderType, SeriesData, SeriesDescriptor,
};
use crate::error::{ChartError, ChartResult};
use tracing::debug;

/// Map one or more proficiency vectors onto a radar descriptor.
///
/// Indicators (`name`, `max`) come from the first vector's axis list; every
/// compared vector must list the same axes in the same order, because the
/// correspondence between indicators and series values is positional. Scores
/// outside `[0, max]` fail with [`ChartError::OutOfRange`].
pub fn build(title: &str, vectors: &[ProficiencyVector]) -> ChartResult<ChartDescriptor> {
    let first = vectors
        .first()
        .ok_or_else(|| ChartError::invalid(title, "radar requires at least one series"))?;

    let indicators: Vec<Indicator> = first
        .entries
        .iter()
        .map(|entry| Indicator {
            name: entry.axis.clone(),
            max: entry.max,
        })
        .collect();

    let mut descriptor = ChartDescriptor::new(ChartKind::Radar, title);
    for vector in vectors {
        if vector.entries.len() != indicators.len() {
            return Err(ChartError::MisalignedSeries {
                series: vector.name.clone(),
                expected: indicators.len(),
                actual: vector.entries.len(),
            });
        }
        let mut values = Vec::with_capacity(indicators.len());
        for (position, (entry, indicator)) in vector.entries.iter().zip(&indicators).enumerate() {
            if entry.axis != indicator.name || entry.max != indicator.max {
                return Err(ChartError::MisalignedAxis {
                    series: vector.name.clone(),
                    position,
                    expected: format!("{} (max {})", indicator.name, indicator.max),
                    actual: format!("{} (max {})", entry.axis, entry.max),
                });
            }
            if !entry.score.is_finite() {
                return Err(ChartError::invalid(&entry.axis, "score is not finite"));
            }
            if entry.score < 0.0 || entry.score > entry.max {
                return Err(ChartError::OutOfRange {
                    what: format!("{} score", entry.axis),
                    value: entry.score,
                    min: 0.0,
                    max: entry.max,
                });
            }
            values.push(entry.score);
        }
        descriptor.series.push(SeriesDescriptor {
            name: vector.name.clone(),
            render_type: RenderType::Radar,
            data: SeriesData::Values(values),
        });
    }
    descriptor.indicators = indicators;
    debug!(title = %descriptor.title, series = descriptor.series.len(), "built radar descriptor");
    Ok(descriptor)
}
