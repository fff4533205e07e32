//! Renderer-agnostic chart descriptors.
//!
//! A [`ChartDescriptor`] is the sole output artifact of this crate: a
//! self-contained, fully-resolved specification of one chart's structure and
//! styling. Descriptors serialize to JSON so any rendering engine can consume
//! them; the renderer never mutates a descriptor.

use serde::{Deserialize, Serialize};

/// Chart kinds produced by the builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Donut,
    Radar,
    Line,
    Bar,
    Heatmap,
}

/// Render type tag carried by every series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderType {
    Pie,
    Radar,
    Line,
    Bar,
    Heatmap,
}

/// A labeled category axis shared by every series on a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAxis {
    pub labels: Vec<String>,
}

/// One radar indicator: an axis name and its scale maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub name: String,
    pub max: f64,
}

/// One named slice of a pie/donut series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub name: String,
    pub value: f64,
}

/// One heatmap cell: category index, bucket index, intensity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub category_index: usize,
    pub bucket_index: usize,
    pub intensity: f64,
}

/// Payload of one series, shaped by its render type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesData {
    /// Named parts of a whole (pie/donut).
    Slices(Vec<Slice>),
    /// Values aligned positionally with the chart's category axis or radar
    /// indicators.
    Values(Vec<f64>),
    /// Sparse (category, bucket, intensity) cells.
    Cells(Vec<HeatmapCell>),
}

/// One renderable series within a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub name: String,
    pub render_type: RenderType,
    pub data: SeriesData,
}

/// How multiple bar series are laid out against the shared axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarLayout {
    Grouped,
    Stacked,
}

/// Legend placement and entries, derived one-to-one from series names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub entries: Vec<String>,
    pub placement: LegendPlacement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPlacement {
    Bottom,
    Top,
}

/// Continuous color ramp mapping intensities onto an ordered list of color
/// stops. Intensities outside `min..=max` are rejected at build time, never
/// rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualMap {
    pub min: f64,
    pub max: f64,
    pub color_stops: Vec<String>,
}

impl Default for VisualMap {
    fn default() -> Self {
        // Light blue -> medium blue -> dark blue.
        Self {
            min: 0.0,
            max: 100.0,
            color_stops: vec![
                "#e0f2fe".to_string(),
                "#3b82f6".to_string(),
                "#1e3a8a".to_string(),
            ],
        }
    }
}

/// Fully-resolved specification of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub kind: ChartKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<CategoryAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<CategoryAxis>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub indicators: Vec<Indicator>,
    pub series: Vec<SeriesDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_map: Option<VisualMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_layout: Option<BarLayout>,
}

impl ChartDescriptor {
    /// Descriptor skeleton with no axes, legend, or styling attached.
    pub(crate) fn new(kind: ChartKind, title: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            x_axis: None,
            y_axis: None,
            indicators: Vec::new(),
            series: Vec::new(),
            legend: None,
            visual_map: None,
            bar_layout: None,
        }
    }
}
