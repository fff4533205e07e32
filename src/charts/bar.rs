//! Bar builder: comparison across discrete categories.

use crate::catalog::CategoricalSeries;
use crate::charts::{check_alignment, legend_from_names};
use crate::descriptor::{
    BarLayout, CategoryAxis, ChartDescriptor, ChartKind, RenderType, SeriesData, SeriesDescriptor,
};
use crate::error::{ChartError, ChartResult};
use tracing::debug;

/// Map one or more categorical series sharing one category axis into a bar
/// chart, one bar group per series.
///
/// The co-alignment rule matches the line builder: the first series defines
/// the axis, every other series must agree on it. `layout` selects grouped
/// (the default everywhere in the dashboard) or stacked rendering.
pub fn build(
    title: &str,
    series: &[CategoricalSeries],
    layout: BarLayout,
) -> ChartResult<ChartDescriptor> {
    let first = series
        .first()
        .ok_or_else(|| ChartError::invalid(title, "bar chart requires at least one series"))?;

    let mut descriptor = ChartDescriptor::new(ChartKind::Bar, title);
    for entry in series {
        check_alignment(
            &entry.name,
            &first.categories,
            &entry.categories,
            entry.values.len(),
        )?;
        descriptor.series.push(SeriesDescriptor {
            name: entry.name.clone(),
            render_type: RenderType::Bar,
            data: SeriesData::Values(entry.values.clone()),
        });
    }
    descriptor.x_axis = Some(CategoryAxis {
        labels: first.categories.clone(),
    });
    descriptor.bar_layout = Some(layout);
    if series.len() > 1 {
        descriptor.legend = Some(legend_from_names(series.iter().map(|s| s.name.as_str())));
    }
    debug!(
        title = %descriptor.title,
        series = descriptor.series.len(),
        ?layout,
        "built bar descriptor"
    );
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MetricCatalog, StaticCatalog};

    #[test]
    fn test_department_bars_share_axis_and_legend() {
        let catalog = StaticCatalog::default();
        let descriptor = build(
            "Completion by Department",
            catalog.department_completion(),
            BarLayout::Grouped,
        )
        .unwrap();
        assert_eq!(descriptor.series.len(), 2);
        assert_eq!(descriptor.bar_layout, Some(BarLayout::Grouped));
        let axis = descriptor.x_axis.as_ref().unwrap();
        assert_eq!(axis.labels.len(), 5);
        assert_eq!(axis.labels[0], "Eng");
        let legend = descriptor.legend.as_ref().unwrap();
        assert_eq!(legend.entries, vec!["Completed", "InProgress"]);
    }

    #[test]
    fn test_single_series_has_no_legend() {
        let catalog = StaticCatalog::default();
        let descriptor = build(
            "Peak Active Hours",
            std::slice::from_ref(catalog.peak_hours()),
            BarLayout::Grouped,
        )
        .unwrap();
        assert_eq!(descriptor.series.len(), 1);
        assert!(descriptor.legend.is_none());
    }

    #[test]
    fn test_category_mismatch_rejected() {
        let series = vec![
            CategoricalSeries {
                name: "Completed".to_string(),
                categories: vec!["Eng".to_string(), "Ops".to_string()],
                values: vec![240.0, 170.0],
            },
            CategoricalSeries {
                name: "InProgress".to_string(),
                categories: vec!["Eng".to_string(), "Sales".to_string()],
                values: vec![80.0, 50.0],
            },
        ];
        let err = build("Completion", &series, BarLayout::Grouped).unwrap_err();
        assert!(matches!(err, ChartError::MisalignedAxis { position: 1, .. }));
    }

    #[test]
    fn test_stacked_layout_is_tagged() {
        let catalog = StaticCatalog::default();
        let descriptor = build(
            "Completion by Department",
            catalog.department_completion(),
            BarLayout::Stacked,
        )
        .unwrap();
        assert_eq!(descriptor.bar_layout, Some(BarLayout::Stacked));
    }
}
