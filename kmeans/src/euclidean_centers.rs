//! Euclidean centroid calculation for k-means clustering
//! Recomputes every cluster center as the arithmetic mean of its members

use std::collections::{btree_map::Entry, BTreeMap};

use crate::types::{Centroid, Planar, Point};

/// Running sums for one label
#[derive(Clone, Copy, Debug, Default)]
struct Accumulator {
    sum_x: f64,
    sum_y: f64,
    count: usize,
}

/// Recalculate cluster centroids using the Euclidean mean
///
/// # Arguments
/// * `points` - all points with their current labels
///
/// # Returns
/// * One centroid per label present among `points`, in ascending label order
///
/// # Algorithm
/// 1. Sum coordinates of each label in a single pass
/// 2. Divide by the member count to get the mean
///
/// # Note
/// A label nobody holds anymore is simply absent from the result.
pub fn recompute(points: &[Point]) -> Vec<Centroid> {
    let mut groups: BTreeMap<usize, Accumulator> = BTreeMap::new();

    // Step 1: Sum all points within each cluster
    for point in points {
        match groups.entry(point.cluster_id()) {
            Entry::Occupied(mut e) => {
                let acc = e.get_mut();
                acc.sum_x += point.x();
                acc.sum_y += point.y();
                acc.count += 1;
            }
            Entry::Vacant(e) => {
                e.insert(Accumulator { sum_x: point.x(), sum_y: point.y(), count: 1 });
            }
        }
    }

    // Step 2: Mean per cluster
    groups
        .into_iter()
        .map(|(cluster_id, acc)| {
            let n = acc.count as f64;
            Centroid::new(acc.sum_x / n, acc.sum_y / n, cluster_id)
        })
        .collect()
}
