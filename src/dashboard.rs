//! Dashboard assembly: one builder call per configured chart.
//!
//! This is the single entry point the presentation shell uses. It validates
//! the catalog once, then builds the descriptor for every chart on the page
//! in render order and passes the KPI metrics through untransformed.

use crate::catalog::{self, Metric, MetricCatalog};
use crate::charts::{bar, donut, heatmap, line, radar};
use crate::descriptor::{BarLayout, ChartDescriptor, VisualMap};
use crate::error::ChartResult;
use crate::matrix::EngagementMatrix;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Assembly configuration: the heatmap seed and color ramp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Seed for the synthetic engagement matrix; a fixed seed makes the
    /// heatmap reproducible across render passes.
    pub heatmap_seed: u64,
    pub visual_map: VisualMap,
    pub bar_layout: BarLayout,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            heatmap_seed: 42,
            visual_map: VisualMap::default(),
            bar_layout: BarLayout::Grouped,
        }
    }
}

/// Everything the presentation shell needs: KPI cards plus the ordered
/// descriptor list handed to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub kpis: Vec<Metric>,
    pub charts: Vec<ChartDescriptor>,
}

/// Build all dashboard descriptors from the catalog, in page order:
/// peak-hours bar, engagement heatmap, learning trend line, department
/// completion bar, skills donut, proficiency radar.
pub fn build_dashboard(
    catalog: &dyn MetricCatalog,
    config: &DashboardConfig,
) -> ChartResult<Dashboard> {
    if let Err(err) = catalog::validate(catalog) {
        warn!(%err, "metric catalog failed validation");
        return Err(err);
    }

    let matrix = EngagementMatrix::from_seed(
        catalog.engagement_days(),
        catalog.engagement_hours(),
        config.heatmap_seed,
    );

    let charts = vec![
        bar::build(
            "Peak Active Hours",
            std::slice::from_ref(catalog.peak_hours()),
            config.bar_layout,
        )?,
        heatmap::build("Engagement Heatmap", &matrix, &config.visual_map)?,
        line::build("Learning Hours Trend", catalog.learning_trend())?,
        bar::build(
            "Completion by Department",
            catalog.department_completion(),
            config.bar_layout,
        )?,
        donut::build(catalog.skills_breakdown())?,
        radar::build("Proficiency Radar", catalog.proficiency())?,
    ];
    debug!(charts = charts.len(), kpis = catalog.kpis().len(), "assembled dashboard");

    Ok(Dashboard {
        kpis: catalog.kpis().to_vec(),
        charts,
    })
}
