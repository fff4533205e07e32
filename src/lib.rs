//! LearnBoard chart descriptor core
//!
//! This crate is the metric-to-visualization transformation layer of the
//! LearnBoard analytics dashboard. It turns raw aggregate learner metrics
//! into fully-resolved, renderer-agnostic chart descriptors:
//! - KPI summaries (passed through to the presentation shell untouched)
//! - Donut, radar, line, bar and heatmap descriptors
//! - A seeded synthetic engagement matrix for the heatmap demo
//!
//! Every builder is pure and synchronous: isolated inputs in, a new immutable
//! descriptor out, with all invariant violations surfacing as typed
//! [`ChartError`]s at build time. Rendering, layout and data fetching live in
//! external collaborators.

pub mod catalog;
pub mod charts;
pub mod dashboard;
pub mod descriptor;
pub mod error;
pub mod matrix;

pub use catalog::{
    CategoricalSeries, CategoryBreakdown, CategoryShare, Metric, MetricCatalog, MetricUnit,
    ProficiencyEntry, ProficiencyVector, StaticCatalog, TimeSeries,
};
pub use dashboard::{build_dashboard, Dashboard, DashboardConfig};
pub use descriptor::{
    BarLayout, CategoryAxis, ChartDescriptor, ChartKind, HeatmapCell, Indicator, Legend,
    LegendPlacement, RenderType, SeriesData, SeriesDescriptor, Slice, VisualMap,
};
pub use error::{ChartError, ChartResult};
pub use matrix::EngagementMatrix;
