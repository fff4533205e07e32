//! Heatmap builder: engagement intensity over (day, hour-bucket) cells.

use crate::descriptor::{
    CategoryAxis, ChartDescriptor, ChartKind, HeatmapCell, RenderType, SeriesData,
    SeriesDescriptor, VisualMap,
};
use crate::error::{ChartError, ChartResult};
use crate::matrix::EngagementMatrix;
use tracing::debug;

/// Map an engagement matrix plus a color ramp into a heatmap descriptor.
///
/// Every cell becomes `(category_index, bucket_index, intensity)`. Any
/// intensity outside the visual map's `[min, max]` fails with
/// [`ChartError::OutOfRange`]. Out-of-range cells are rejected rather than
/// clamped, so a data defect never renders as a wrong color.
pub fn build(
    title: &str,
    matrix: &EngagementMatrix,
    visual_map: &VisualMap,
) -> ChartResult<ChartDescriptor> {
    if visual_map.color_stops.is_empty() {
        return Err(ChartError::invalid(title, "visual map has no color stops"));
    }
    let bounds_valid =
        visual_map.min.is_finite() && visual_map.max.is_finite() && visual_map.min < visual_map.max;
    if !bounds_valid {
        return Err(ChartError::invalid(title, "visual map bounds are not a valid range"));
    }

    let mut cells = Vec::with_capacity(matrix.len());
    for (category_index, bucket_index, intensity) in matrix.cells() {
        if intensity < visual_map.min || intensity > visual_map.max {
            return Err(ChartError::OutOfRange {
                what: format!("heatmap cell ({category_index}, {bucket_index})"),
                value: intensity,
                min: visual_map.min,
                max: visual_map.max,
            });
        }
        cells.push(HeatmapCell {
            category_index,
            bucket_index,
            intensity,
        });
    }

    let mut descriptor = ChartDescriptor::new(ChartKind::Heatmap, title);
    descriptor.x_axis = Some(CategoryAxis {
        labels: matrix.categories().to_vec(),
    });
    descriptor.y_axis = Some(CategoryAxis {
        labels: matrix.buckets().to_vec(),
    });
    descriptor.series.push(SeriesDescriptor {
        name: title.to_string(),
        render_type: RenderType::Heatmap,
        data: SeriesData::Cells(cells),
    });
    descriptor.visual_map = Some(visual_map.clone());
    debug!(title = %descriptor.title, cells = matrix.len(), "built heatmap descriptor");
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_matrix() -> EngagementMatrix {
        let days: Vec<String> = ["Mon", "Tue", "Wed"].iter().map(|d| d.to_string()).collect();
        let hours: Vec<String> = ["9 AM", "12 PM"].iter().map(|h| h.to_string()).collect();
        EngagementMatrix::from_seed(&days, &hours, 42)
    }

    #[test]
    fn test_every_cell_is_indexed() {
        let matrix = demo_matrix();
        let descriptor = build("Engagement Heatmap", &matrix, &VisualMap::default()).unwrap();
        assert_eq!(descriptor.kind, ChartKind::Heatmap);
        assert_eq!(descriptor.x_axis.as_ref().unwrap().labels.len(), 3);
        assert_eq!(descriptor.y_axis.as_ref().unwrap().labels.len(), 2);
        match &descriptor.series[0].data {
            SeriesData::Cells(cells) => {
                assert_eq!(cells.len(), 6);
                assert_eq!(cells[0].category_index, 0);
                assert_eq!(cells[0].bucket_index, 0);
                assert_eq!(cells[5].category_index, 2);
                assert_eq!(cells[5].bucket_index, 1);
            }
            other => panic!("expected cells, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_intensity_rejected() {
        let matrix = EngagementMatrix::from_intensities(
            vec!["Mon".to_string()],
            vec!["9 AM".to_string(), "12 PM".to_string()],
            vec![50.0, 130.0],
        )
        .unwrap();
        let err = build("Engagement Heatmap", &matrix, &VisualMap::default()).unwrap_err();
        assert_eq!(
            err,
            ChartError::OutOfRange {
                what: "heatmap cell (0, 1)".to_string(),
                value: 130.0,
                min: 0.0,
                max: 100.0,
            }
        );
    }

    #[test]
    fn test_below_min_intensity_rejected() {
        let matrix = EngagementMatrix::from_intensities(
            vec!["Mon".to_string()],
            vec!["9 AM".to_string()],
            vec![-5.0],
        )
        .unwrap();
        assert!(matches!(
            build("Engagement Heatmap", &matrix, &VisualMap::default()),
            Err(ChartError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_empty_color_ramp_rejected() {
        let matrix = demo_matrix();
        let visual_map = VisualMap {
            color_stops: Vec::new(),
            ..VisualMap::default()
        };
        assert!(matches!(
            build("Engagement Heatmap", &matrix, &visual_map),
            Err(ChartError::InvalidMetric { .. })
        ));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let matrix = demo_matrix();
        let visual_map = VisualMap {
            min: 100.0,
            max: 0.0,
            ..VisualMap::default()
        };
        assert!(build("Engagement Heatmap", &matrix, &visual_map).is_err());
    }
}
