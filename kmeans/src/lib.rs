//! Lloyd's k-means over 2-D points (latitude/longitude pairs)
//!
//! [`engine::KMeans`] owns the points and centroids of one run and drives
//! seeding, nearest-centroid assignment and mean recomputation until no
//! label changes.

pub mod assign;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod euclidean_centers;
pub mod seeding;
pub mod types;
mod init_plusplus;

pub use engine::{EngineState, FitOutcome, FitReport, IterationStat, KMeans};
pub use error::{KMeansError, Result};
pub use seeding::Seeding;
pub use types::{distance, Centroid, Planar, Point};
