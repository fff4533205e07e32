//! Metric catalog: the raw domain metrics behind the dashboard.
//!
//! The catalog holds plain data and performs no computation. It sits behind
//! the [`MetricCatalog`] trait so the static demo data shipped here can later
//! be swapped for a live metrics source without touching any chart builder.

use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// How a KPI value should be formatted by the presentation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricUnit {
    Count,
    Percent,
    Hours,
}

/// A single KPI summary: a named observation with an optional trend delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub title: String,
    pub value: f64,
    pub unit: MetricUnit,
    /// Period-over-period change, in percent (e.g. `8.0` for "+8%").
    pub change_percent: Option<f64>,
}

impl Metric {
    pub fn new(title: &str, value: f64, unit: MetricUnit, change_percent: f64) -> Self {
        Self {
            title: title.to_string(),
            value,
            unit,
            change_percent: Some(change_percent),
        }
    }
}

/// One labeled part of a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub label: String,
    pub value: f64,
}

/// Ordered parts-of-a-whole breakdown (e.g. skills distribution).
///
/// Values are absolute magnitudes, not percentages; the renderer computes
/// proportions. Values must be non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub title: String,
    pub entries: Vec<CategoryShare>,
}

/// One competency axis of a proficiency vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProficiencyEntry {
    pub axis: String,
    pub score: f64,
    pub max: f64,
}

/// A named, fixed-order sequence of per-axis proficiency scores.
///
/// All vectors compared on one radar must list the same axes in the same
/// order; correspondence between axes and values is positional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProficiencyVector {
    pub name: String,
    pub entries: Vec<ProficiencyEntry>,
}

/// A named ordered sequence of (period label, value) observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub name: String,
    pub periods: Vec<String>,
    pub values: Vec<f64>,
}

/// Like [`TimeSeries`] but keyed by a discrete category (department, hour
/// bucket) rather than time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalSeries {
    pub name: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

/// Read-only accessor surface over the raw dashboard metrics.
///
/// Every accessor returns a fully-resolved, immutable snapshot; a builder
/// never observes a partially-updated catalog.
pub trait MetricCatalog {
    fn kpis(&self) -> &[Metric];
    fn skills_breakdown(&self) -> &CategoryBreakdown;
    fn proficiency(&self) -> &[ProficiencyVector];
    fn learning_trend(&self) -> &[TimeSeries];
    fn department_completion(&self) -> &[CategoricalSeries];
    fn peak_hours(&self) -> &CategoricalSeries;
    /// Category axis of the engagement heatmap (days of week).
    fn engagement_days(&self) -> &[String];
    /// Bucket axis of the engagement heatmap (hours of day).
    fn engagement_hours(&self) -> &[String];
}

/// Check the catalog-level invariants: non-empty titles and labels, finite
/// values, non-negative breakdown values and scores.
///
/// Alignment invariants between series are the per-builder's job; this only
/// guards the data itself.
pub fn validate(catalog: &dyn MetricCatalog) -> ChartResult<()> {
    for kpi in catalog.kpis() {
        if kpi.title.is_empty() {
            return Err(ChartError::invalid("kpi", "empty title"));
        }
        check_finite(&kpi.title, kpi.value)?;
        if let Some(change) = kpi.change_percent {
            check_finite(&kpi.title, change)?;
        }
    }

    let breakdown = catalog.skills_breakdown();
    if breakdown.title.is_empty() {
        return Err(ChartError::invalid("breakdown", "empty title"));
    }
    for entry in &breakdown.entries {
        if entry.label.is_empty() {
            return Err(ChartError::invalid(&breakdown.title, "empty category label"));
        }
        check_finite(&entry.label, entry.value)?;
        if entry.value < 0.0 {
            return Err(ChartError::invalid(&entry.label, "negative share value"));
        }
    }

    for vector in catalog.proficiency() {
        if vector.name.is_empty() {
            return Err(ChartError::invalid("proficiency", "empty series name"));
        }
        for entry in &vector.entries {
            if entry.axis.is_empty() {
                return Err(ChartError::invalid(&vector.name, "empty axis label"));
            }
            check_finite(&entry.axis, entry.score)?;
            check_finite(&entry.axis, entry.max)?;
        }
    }

    for series in catalog.learning_trend() {
        check_series_labels("trend", &series.name, &series.periods)?;
        check_series_values(&series.name, &series.values)?;
    }
    for series in catalog.department_completion() {
        check_series_labels("departments", &series.name, &series.categories)?;
        check_series_values(&series.name, &series.values)?;
        if series.values.iter().any(|v| *v < 0.0) {
            return Err(ChartError::invalid(&series.name, "negative completion count"));
        }
    }
    let peak = catalog.peak_hours();
    check_series_labels("peak hours", &peak.name, &peak.categories)?;
    check_series_values(&peak.name, &peak.values)?;

    for label in catalog.engagement_days().iter().chain(catalog.engagement_hours()) {
        if label.is_empty() {
            return Err(ChartError::invalid("engagement axes", "empty axis label"));
        }
    }

    Ok(())
}

fn check_finite(name: &str, value: f64) -> ChartResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ChartError::invalid(name, "value is not finite"))
    }
}

fn check_series_values(name: &str, values: &[f64]) -> ChartResult<()> {
    for value in values {
        check_finite(name, *value)?;
    }
    Ok(())
}

fn check_series_labels(kind: &str, name: &str, labels: &[String]) -> ChartResult<()> {
    if name.is_empty() {
        return Err(ChartError::invalid(kind, "empty series name"));
    }
    if labels.iter().any(|label| label.is_empty()) {
        return Err(ChartError::invalid(name, "empty axis label"));
    }
    Ok(())
}

/// Static catalog carrying the demo dashboard's figures.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    kpis: Vec<Metric>,
    skills: CategoryBreakdown,
    proficiency: Vec<ProficiencyVector>,
    trend: Vec<TimeSeries>,
    departments: Vec<CategoricalSeries>,
    peak_hours: CategoricalSeries,
    days: Vec<String>,
    hours: Vec<String>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        let skill_axes = ["Frontend", "Backend", "Data/AI", "Cloud", "Leadership"];
        let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
        let hour_buckets = ["9 AM", "12 PM", "3 PM", "6 PM", "9 PM", "12 AM"];

        Self {
            kpis: vec![
                Metric::new("Daily Active Learners", 459.0, MetricUnit::Count, 8.0),
                Metric::new("Coding Hours (7d)", 934.0, MetricUnit::Hours, 12.0),
                Metric::new("Assessment Pass Rate", 84.0, MetricUnit::Percent, 3.0),
                Metric::new("Avg Time / Learner", 1.7, MetricUnit::Hours, 5.0),
            ],
            skills: CategoryBreakdown {
                title: "Skills Distribution".to_string(),
                entries: skill_axes
                    .iter()
                    .zip([29.0, 12.0, 14.0, 17.0, 20.0])
                    .map(|(label, value)| CategoryShare {
                        label: label.to_string(),
                        value,
                    })
                    .collect(),
            },
            proficiency: vec![ProficiencyVector {
                name: "Score".to_string(),
                entries: skill_axes
                    .iter()
                    .zip([80.0, 70.0, 65.0, 60.0, 50.0])
                    .map(|(axis, score)| ProficiencyEntry {
                        axis: axis.to_string(),
                        score,
                        max: 100.0,
                    })
                    .collect(),
            }],
            trend: vec![
                TimeSeries {
                    name: "Hours".to_string(),
                    periods: months.iter().map(|m| m.to_string()).collect(),
                    values: vec![600.0, 700.0, 750.0, 800.0, 900.0, 1000.0],
                },
                TimeSeries {
                    name: "Active".to_string(),
                    periods: months.iter().map(|m| m.to_string()).collect(),
                    values: vec![400.0, 450.0, 480.0, 510.0, 550.0, 600.0],
                },
            ],
            departments: vec![
                CategoricalSeries {
                    name: "Completed".to_string(),
                    categories: department_names(),
                    values: vec![240.0, 90.0, 170.0, 120.0, 140.0],
                },
                CategoricalSeries {
                    name: "InProgress".to_string(),
                    categories: department_names(),
                    values: vec![80.0, 90.0, 50.0, 30.0, 50.0],
                },
            ],
            peak_hours: CategoricalSeries {
                name: "Engagement".to_string(),
                categories: hour_buckets.iter().map(|h| h.to_string()).collect(),
                values: vec![70.0, 130.0, 110.0, 145.0, 110.0, 50.0],
            },
            days: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            hours: hour_buckets.iter().map(|h| h.to_string()).collect(),
        }
    }
}

fn department_names() -> Vec<String> {
    ["Eng", "Product", "Ops", "Fin/HR", "Sales"]
        .iter()
        .map(|d| d.to_string())
        .collect()
}

impl MetricCatalog for StaticCatalog {
    fn kpis(&self) -> &[Metric] {
        &self.kpis
    }

    fn skills_breakdown(&self) -> &CategoryBreakdown {
        &self.skills
    }

    fn proficiency(&self) -> &[ProficiencyVector] {
        &self.proficiency
    }

    fn learning_trend(&self) -> &[TimeSeries] {
        &self.trend
    }

    fn department_completion(&self) -> &[CategoricalSeries] {
        &self.departments
    }

    fn peak_hours(&self) -> &CategoricalSeries {
        &self.peak_hours
    }

    fn engagement_days(&self) -> &[String] {
        &self.days
    }

    fn engagement_hours(&self) -> &[String] {
        &self.hours
    }
}
