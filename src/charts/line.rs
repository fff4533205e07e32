//! Line builder: trends over a shared period axis.

use crate::catalog::TimeSeries;
use crate::charts::{check_alignment, legend_from_names};
use crate::descriptor::{
    CategoryAxis, ChartDescriptor, ChartKind, RenderType, SeriesData, SeriesDescriptor,
};
use crate::error::{ChartError, ChartResult};
use tracing::debug;

/// Map one or more time series sharing one period axis into a line chart.
///
/// The first series defines the shared axis; every other series must carry
/// an identical, identically-ordered period list. A point-count mismatch
/// fails with [`ChartError::MisalignedSeries`], a label mismatch with
/// [`ChartError::MisalignedAxis`]. Legend entries derive one-to-one from
/// series names.
pub fn build(title: &str, series: &[TimeSeries]) -> ChartResult<ChartDescriptor> {
    let first = series
        .first()
        .ok_or_else(|| ChartError::invalid(title, "line chart requires at least one series"))?;

    let mut descriptor = ChartDescriptor::new(ChartKind::Line, title);
    for entry in series {
        check_alignment(&entry.name, &first.periods, &entry.periods, entry.values.len())?;
        descriptor.series.push(SeriesDescriptor {
            name: entry.name.clone(),
            render_type: RenderType::Line,
            data: SeriesData::Values(entry.values.clone()),
        });
    }
    descriptor.x_axis = Some(CategoryAxis {
        labels: first.periods.clone(),
    });
    descriptor.legend = Some(legend_from_names(series.iter().map(|s| s.name.as_str())));
    debug!(title = %descriptor.title, series = descriptor.series.len(), "built line descriptor");
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MetricCatalog, StaticCatalog};

    #[test]
    fn test_two_series_share_six_period_axis() {
        let catalog = StaticCatalog::default();
        let descriptor = build("Learning Hours Trend", catalog.learning_trend()).unwrap();
        assert_eq!(descriptor.series.len(), 2);
        let axis = descriptor.x_axis.as_ref().unwrap();
        assert_eq!(axis.labels.len(), 6);
        assert_eq!(axis.labels[0], "Jan");
        for series in &descriptor.series {
            match &series.data {
                SeriesData::Values(values) => assert_eq!(values.len(), 6),
                other => panic!("expected values, got {:?}", other),
            }
        }
        let legend = descriptor.legend.as_ref().unwrap();
        assert_eq!(legend.entries, vec!["Hours", "Active"]);
    }

    #[test]
    fn test_period_mismatch_rejected() {
        let series = vec![
            TimeSeries {
                name: "Hours".to_string(),
                periods: vec!["Jan".to_string(), "Feb".to_string()],
                values: vec![600.0, 700.0],
            },
            TimeSeries {
                name: "Active".to_string(),
                periods: vec!["Jan".to_string(), "Mar".to_string()],
                values: vec![400.0, 450.0],
            },
        ];
        let err = build("Trend", &series).unwrap_err();
        assert!(matches!(err, ChartError::MisalignedAxis { position: 1, .. }));
    }

    #[test]
    fn test_value_count_mismatch_rejected() {
        let series = vec![TimeSeries {
            name: "Hours".to_string(),
            periods: vec!["Jan".to_string(), "Feb".to_string()],
            values: vec![600.0],
        }];
        let err = build("Trend", &series).unwrap_err();
        assert_eq!(
            err,
            ChartError::MisalignedSeries {
                series: "Hours".to_string(),
                expected: 2,
                actual: 1,
            }
        );
    }
}
