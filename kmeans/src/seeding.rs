//! Initial centroid selection strategies

use std::{collections::HashSet, fmt};

use rand::{seq::index, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::{
    error::{KMeansError, Result},
    init_plusplus::plusplus_indices,
    types::{Centroid, Point},
};

/// How the first `k` centroids are picked from the loaded points
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Seeding {
    /// Centroid `i` sits on point `indices[i]`
    FixedIndices(Vec<usize>),
    /// `k` distinct points drawn uniformly, reproducible per seed
    UniformRandom { seed: u64 },
    /// K-Means++ spreading, reproducible per seed
    KMeansPlusPlus { seed: u64 },
}

impl Seeding {
    /// Fixed seeding on the first `k` points
    pub fn first_k(k: usize) -> Self {
        Seeding::FixedIndices((0..k).collect())
    }

    /// Pick the point indices the centroids start from
    ///
    /// # Errors
    /// * `InvalidArgument` when `k` is zero, larger than the number of points,
    ///   or fixed indices do not describe `k` distinct loaded points
    pub fn select(&self, points: &[Point], k: usize) -> Result<Vec<usize>> {
        validate_k(k, points.len())?;

        match self {
            Seeding::FixedIndices(indices) => {
                if indices.len() != k {
                    return Err(KMeansError::InvalidArgument(format!(
                        "expected {} seed indices for k = {}, got {}",
                        k,
                        k,
                        indices.len()
                    )));
                }
                let mut seen = HashSet::with_capacity(k);
                for &idx in indices {
                    if idx >= points.len() {
                        return Err(KMeansError::InvalidArgument(format!(
                            "seed index {} out of range for {} points",
                            idx,
                            points.len()
                        )));
                    }
                    if !seen.insert(idx) {
                        return Err(KMeansError::InvalidArgument(format!("seed index {} given twice", idx)));
                    }
                }
                Ok(indices.clone())
            }
            Seeding::UniformRandom { seed } => {
                let mut rng = ChaCha20Rng::seed_from_u64(*seed);
                Ok(index::sample(&mut rng, points.len(), k).into_vec())
            }
            Seeding::KMeansPlusPlus { seed } => {
                let mut rng = ChaCha20Rng::seed_from_u64(*seed);
                Ok(plusplus_indices(points, k, &mut rng))
            }
        }
    }

    /// Build centroids labelled `0..k` on the selected points
    pub fn centroids(&self, points: &[Point], k: usize) -> Result<Vec<Centroid>> {
        Ok(self
            .select(points, k)?
            .into_iter()
            .enumerate()
            .map(|(cluster_id, idx)| Centroid::from_point(&points[idx], cluster_id))
            .collect())
    }
}

impl fmt::Display for Seeding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seeding::FixedIndices(indices) => write!(f, "fixed indices {:?}", indices),
            Seeding::UniformRandom { seed } => write!(f, "uniform random (seed {})", seed),
            Seeding::KMeansPlusPlus { seed } => write!(f, "k-means++ (seed {})", seed),
        }
    }
}

/// Check `1 <= k <= n`
pub fn validate_k(k: usize, n: usize) -> Result<()> {
    if k < 1 {
        return Err(KMeansError::InvalidArgument("k must be at least 1".to_string()));
    }
    if k > n {
        return Err(KMeansError::InvalidArgument(format!(
            "k = {} exceeds the number of loaded points ({})",
            k, n
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: usize) -> Vec<Point> {
        (0..n).map(|i| Point::new(i as f64, (i * i) as f64, i)).collect()
    }

    #[test]
    fn first_k_is_fixed_prefix() {
        assert_eq!(Seeding::first_k(3), Seeding::FixedIndices(vec![0, 1, 2]));
        let centroids = Seeding::first_k(2).centroids(&grid(5), 2).unwrap();
        assert_eq!(centroids, vec![Centroid::new(0.0, 0.0, 0), Centroid::new(1.0, 1.0, 1)]);
    }

    #[test]
    fn fixed_indices_label_in_given_order() {
        let centroids = Seeding::FixedIndices(vec![4, 0, 2]).centroids(&grid(5), 3).unwrap();
        assert_eq!(centroids[0], Centroid::new(4.0, 16.0, 0));
        assert_eq!(centroids[1], Centroid::new(0.0, 0.0, 1));
        assert_eq!(centroids[2], Centroid::new(2.0, 4.0, 2));
    }

    #[test]
    fn k_out_of_range_is_invalid_argument() {
        let points = grid(3);
        for seeding in [Seeding::first_k(4), Seeding::UniformRandom { seed: 1 }, Seeding::KMeansPlusPlus { seed: 1 }] {
            assert!(matches!(seeding.select(&points, 4), Err(KMeansError::InvalidArgument(_))));
            assert!(matches!(seeding.select(&points, 0), Err(KMeansError::InvalidArgument(_))));
        }
    }

    #[test]
    fn bad_fixed_indices_are_rejected() {
        let points = grid(5);
        assert!(matches!(Seeding::FixedIndices(vec![0, 1]).select(&points, 3), Err(KMeansError::InvalidArgument(_))));
        assert!(matches!(Seeding::FixedIndices(vec![0, 1, 5]).select(&points, 3), Err(KMeansError::InvalidArgument(_))));
        assert!(matches!(Seeding::FixedIndices(vec![0, 1, 1]).select(&points, 3), Err(KMeansError::InvalidArgument(_))));
    }

    #[test]
    fn random_seeding_is_distinct_and_reproducible() {
        let points = grid(20);
        let seeding = Seeding::UniformRandom { seed: 55 };
        let first = seeding.select(&points, 6).unwrap();
        let second = seeding.select(&points, 6).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.iter().collect::<HashSet<_>>().len(), 6);
        assert!(first.iter().all(|&i| i < 20));
    }

    #[test]
    fn random_seeding_with_k_equal_n_takes_everything() {
        let points = grid(4);
        let mut picked = Seeding::UniformRandom { seed: 0 }.select(&points, 4).unwrap();
        picked.sort();
        assert_eq!(picked, vec![0, 1, 2, 3]);
    }

    #[test]
    fn display_names_the_strategy() {
        assert_eq!(Seeding::FixedIndices(vec![0, 4, 6]).to_string(), "fixed indices [0, 4, 6]");
        assert_eq!(Seeding::KMeansPlusPlus { seed: 3 }.to_string(), "k-means++ (seed 3)");
    }
}
