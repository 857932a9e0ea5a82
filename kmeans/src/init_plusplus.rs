//! K-Means++ initialization algorithm
//! Picks initial centroids with probability proportional to their squared
//! distance from the centroids already chosen, spreading them across the data

use rand::{
    distr::{weighted::WeightedIndex, Distribution},
    RngExt,
};
use rand_chacha::ChaCha20Rng;

use crate::types::{distance, Point};

/// Select `k` distinct point indices using K-Means++
///
/// # Arguments
/// * `points` - loaded data points (must hold at least `k` points)
/// * `k` - number of centroids
/// * `rng` - seeded generator, so the same seed gives the same indices
///
/// # Algorithm
/// 1. Choose the first index uniformly at random
/// 2. For each remaining centroid:
///    - Track the distance from each point to its nearest chosen point
///    - Draw the next index with probability proportional to the squared distance
/// 3. If no weight can be drawn (duplicates only, or distances beyond f64),
///    take the lowest unused index
pub fn plusplus_indices(points: &[Point], k: usize, rng: &mut ChaCha20Rng) -> Vec<usize> {
    let mut chosen: Vec<usize> = Vec::with_capacity(k);
    if points.is_empty() || k == 0 {
        return chosen;
    }

    // Step 1: first centroid uniformly at random
    chosen.push(rng.random_range(0..points.len()));

    // nearest[i] = distance of point i to its closest chosen point
    let mut nearest: Vec<f64> = points.iter().map(|p| distance(p, &points[chosen[0]])).collect();

    // Step 2: remaining centroids weighted by squared distance
    while chosen.len() < k {
        let next = match draw_weighted(&nearest, rng) {
            Some(i) => i,
            None => match (0..points.len()).find(|i| !chosen.contains(i)) {
                Some(i) => i,
                None => break,
            },
        };

        chosen.push(next);
        for (i, point) in points.iter().enumerate() {
            let d = distance(point, &points[next]);
            if d < nearest[i] {
                nearest[i] = d;
            }
        }
        // a chosen point can never be drawn again
        nearest[next] = 0.0;
    }

    chosen
}

/// Draw an index with probability proportional to `nearest[i]^2`
///
/// Distances are scaled by their maximum first so squaring cannot overflow.
fn draw_weighted(nearest: &[f64], rng: &mut ChaCha20Rng) -> Option<usize> {
    let max = nearest.iter().copied().fold(0.0_f64, f64::max);
    if !max.is_finite() || max <= 0.0 {
        return None;
    }
    let weights: Vec<f64> = nearest.iter().map(|d| (d / max).powi(2)).collect();
    WeightedIndex::new(&weights).ok().map(|dist| dist.sample(rng))
}
