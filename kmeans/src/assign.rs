//! Nearest-centroid assignment step

use tracing::trace;

use crate::{
    error::{KMeansError, Result},
    types::{Centroid, EuclideanDistance, Planar, Point},
};

/// Find the label of the centroid closest to `point`
///
/// Distances that compare equal keep the centroid that comes first in
/// `centroids`, so the choice is deterministic for a given centroid order.
///
/// # Errors
/// * `InvalidState` if `centroids` is empty
pub fn assign<P: Planar>(point: &P, centroids: &[Centroid]) -> Result<usize> {
    centroids
        .iter()
        .map(|centroid| (centroid.cluster_id, point.euclidean_distance(centroid)))
        // min_by keeps the first of equal elements
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(cluster_id, _)| cluster_id)
        .ok_or_else(|| KMeansError::InvalidState("no centroids to assign points to".to_string()))
}

/// Relabel every point with its nearest centroid
///
/// # Returns
/// * `true` if at least one point changed its label
pub fn reassign_all(points: &mut [Point], centroids: &[Centroid]) -> Result<bool> {
    if centroids.is_empty() {
        return Err(KMeansError::InvalidState("centroid set is empty during assignment".to_string()));
    }

    let mut changed = false;
    for point in points.iter_mut() {
        let nearest = assign(&*point, centroids)?;
        if point.cluster_id != nearest {
            trace!(point = point.original_index(), from = point.cluster_id, to = nearest, "point relabelled");
            point.cluster_id = nearest;
            changed = true;
        }
    }
    Ok(changed)
}
