//! Synthetic engagement matrix generation.
//!
//! The engagement heatmap is fed by a (day, hour-bucket) intensity grid,
//! fabricated per render pass until a live activity source exists. The
//! generator takes explicit RNG state instead of a hidden global generator,
//! so a fixed seed reproduces the exact same matrix in tests and exports.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A 2-D intensity grid indexed by (category, bucket), stored row-major with
/// one row per category. Intensities lie in `[0, 100)`.
#[derive(Debug, Clone, PartialEq)]
pub struct EngagementMatrix {
    categories: Vec<String>,
    buckets: Vec<String>,
    intensities: Vec<f64>,
}

impl EngagementMatrix {
    /// Draw one whole-number intensity per (category, bucket) pair, advancing
    /// the caller's RNG state.
    pub fn generate(categories: &[String], buckets: &[String], rng: &mut StdRng) -> Self {
        let mut intensities = Vec::with_capacity(categories.len() * buckets.len());
        for _ in 0..categories.len() {
            for _ in 0..buckets.len() {
                intensities.push(rng.gen_range(0..100) as f64);
            }
        }
        Self {
            categories: categories.to_vec(),
            buckets: buckets.to_vec(),
            intensities,
        }
    }

    /// Generate from a fixed seed; identical seeds produce identical grids.
    pub fn from_seed(categories: &[String], buckets: &[String], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(categories, buckets, &mut rng)
    }

    /// Build a matrix from pre-computed intensities (row-major, one row per
    /// category). Lengths must agree; this is for callers that source the
    /// grid from real measurements rather than the synthetic generator.
    pub fn from_intensities(
        categories: Vec<String>,
        buckets: Vec<String>,
        intensities: Vec<f64>,
    ) -> Option<Self> {
        if intensities.len() != categories.len() * buckets.len() {
            return None;
        }
        Some(Self {
            categories,
            buckets,
            intensities,
        })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn buckets(&self) -> &[String] {
        &self.buckets
    }

    pub fn intensity(&self, category_index: usize, bucket_index: usize) -> f64 {
        self.intensities[category_index * self.buckets.len() + bucket_index]
    }

    /// Iterate cells as (category_index, bucket_index, intensity).
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let width = self.buckets.len();
        self.intensities
            .iter()
            .enumerate()
            .map(move |(i, v)| (i / width, i % width, *v))
    }

    pub fn len(&self) -> usize {
        self.intensities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intensities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axes() -> (Vec<String>, Vec<String>) {
        let days = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
            .iter()
            .map(|d| d.to_string())
            .collect();
        let hours = ["9 AM", "12 PM", "3 PM", "6 PM", "9 PM", "12 AM"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        (days, hours)
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let (days, hours) = axes();
        let first = EngagementMatrix::from_seed(&days, &hours, 42);
        let second = EngagementMatrix::from_seed(&days, &hours, 42);
        assert_eq!(first.len(), 42);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let (days, hours) = axes();
        let first = EngagementMatrix::from_seed(&days, &hours, 42);
        let second = EngagementMatrix::from_seed(&days, &hours, 43);
        assert_ne!(first, second);
    }

    #[test]
    fn test_intensities_within_bounds() {
        let (days, hours) = axes();
        let matrix = EngagementMatrix::from_seed(&days, &hours, 7);
        for (_, _, intensity) in matrix.cells() {
            assert!((0.0..100.0).contains(&intensity));
            assert_eq!(intensity, intensity.floor());
        }
    }

    #[test]
    fn test_cell_indexing_is_row_major() {
        let categories = vec!["a".to_string(), "b".to_string()];
        let buckets = vec!["x".to_string(), "y".to_string(), "z".to_string()];
        let matrix = EngagementMatrix::from_intensities(
            categories,
            buckets,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        )
        .unwrap();
        assert_eq!(matrix.intensity(0, 2), 3.0);
        assert_eq!(matrix.intensity(1, 0), 4.0);
        let cells: Vec<_> = matrix.cells().collect();
        assert_eq!(cells[4], (1, 1, 5.0));
    }

    #[test]
    fn test_mismatched_intensity_count_rejected() {
        let matrix = EngagementMatrix::from_intensities(
            vec!["a".to_string()],
            vec!["x".to_string(), "y".to_string()],
            vec![1.0],
        );
        assert!(matrix.is_none());
    }
}
