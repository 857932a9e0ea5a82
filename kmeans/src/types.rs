//! Type definitions for 2-D k-means clustering
//! Includes the point and centroid records and the Euclidean distance used
//! by every step of the algorithm

/// Anything that has a position on the plane
pub trait Planar {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

/// Loaded data point (latitude/longitude pair)
///
/// Coordinates are fixed at creation. The cluster label is only changed by
/// the assignment step, and `original_index` keeps the load position.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
    pub(crate) cluster_id: usize,
    original_index: usize,
}

impl Point {
    /// Create a point labelled with cluster `0`
    pub fn new(x: f64, y: f64, original_index: usize) -> Self {
        Self { x, y, cluster_id: 0, original_index }
    }

    pub fn cluster_id(&self) -> usize {
        self.cluster_id
    }

    pub fn original_index(&self) -> usize {
        self.original_index
    }
}

impl Planar for Point {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

/// Cluster center: mean position of the members carrying `cluster_id`
#[derive(Clone, Debug, PartialEq)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
    pub cluster_id: usize,
}

impl Centroid {
    pub fn new(x: f64, y: f64, cluster_id: usize) -> Self {
        Self { x, y, cluster_id }
    }

    /// Seed a centroid on top of an existing point
    pub fn from_point(point: &Point, cluster_id: usize) -> Self {
        Self { x: point.x, y: point.y, cluster_id }
    }
}

impl Planar for Centroid {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

/// Calculate sqrt((a.x - b.x)^2 + (a.y - b.y)^2)
///
/// `hypot` keeps the result finite when the squares alone would overflow.
pub fn distance<A: Planar + ?Sized, B: Planar + ?Sized>(a: &A, b: &B) -> f64 {
    (a.x() - b.x()).hypot(a.y() - b.y())
}

/// Squared Euclidean distance, used for inertia
pub fn squared_distance<A: Planar + ?Sized, B: Planar + ?Sized>(a: &A, b: &B) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx * dx + dy * dy
}

/// Trait for calculating Euclidean distance between planar values
pub trait EuclideanDistance {
    fn euclidean_distance<R: Planar>(&self, right: &R) -> f64;
}

impl<T: Planar> EuclideanDistance for T {
    fn euclidean_distance<R: Planar>(&self, right: &R) -> f64 {
        distance(self, right)
    }
}
