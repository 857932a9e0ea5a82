//! Lloyd iteration driver
//! Owns one clustering run: seeding, the assign/recompute loop and its
//! convergence and iteration-limit outcomes

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::{
    assign::reassign_all,
    error::{KMeansError, Result},
    euclidean_centers::recompute,
    seeding::Seeding,
    types::{squared_distance, Centroid, Point},
};

/// Iteration guard applied by [`KMeans::new`]
pub const DEFAULT_MAX_ITERATION: usize = 300;

/// Lifecycle of a clustering run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Initialized,
    Assigning,
    Recomputing,
    Converged,
}

/// How [`KMeans::fit`] stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitOutcome {
    /// An assignment pass changed no label
    Converged { iterations: usize },
    /// The iteration guard fired before convergence
    IterationLimit { iterations: usize },
}

impl FitOutcome {
    pub fn iterations(&self) -> usize {
        match self {
            FitOutcome::Converged { iterations } | FitOutcome::IterationLimit { iterations } => *iterations,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, FitOutcome::Converged { .. })
    }
}

/// One assign + recompute round
#[derive(Clone, Debug)]
pub struct IterationStat {
    pub iteration: usize,
    pub changed: bool,
    /// Within-cluster squared distance after the recompute
    pub inertia: f64,
    pub elapsed: Duration,
}

#[derive(Clone, Debug)]
pub struct FitReport {
    pub outcome: FitOutcome,
    pub iterations: Vec<IterationStat>,
    pub elapsed: Duration,
}

// The engine owns the points and the current centroid set for the whole run.
// Centroids are replaced wholesale on every recompute.
#[derive(Clone, Debug)]
pub struct KMeans {
    points: Vec<Point>,
    centroids: Vec<Centroid>,
    state: EngineState,
    max_iteration: Option<usize>,
    last_changed: bool,
}

impl KMeans {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            centroids: Vec::new(),
            state: EngineState::Uninitialized,
            max_iteration: Some(DEFAULT_MAX_ITERATION),
            last_changed: false,
        }
    }

    /// Set the iteration guard; `None` loops until convergence
    pub fn with_max_iteration(mut self, max_iteration: Option<usize>) -> Self {
        self.max_iteration = max_iteration;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Seed `k` centroids labelled `0..k` using `seeding`
    pub fn initialize_centroids(&mut self, k: usize, seeding: &Seeding) -> Result<()> {
        if self.state != EngineState::Uninitialized {
            return Err(KMeansError::InvalidState(format!(
                "centroids already initialized (state {:?})",
                self.state
            )));
        }
        self.centroids = seeding.centroids(&self.points, k)?;
        self.state = EngineState::Initialized;
        info!(k, points = self.points.len(), seeding = %seeding, "centroids initialized");
        Ok(())
    }

    /// Relabel every point with its nearest centroid
    ///
    /// Returns whether any label changed.
    pub fn run_assignment(&mut self) -> Result<bool> {
        match self.state {
            EngineState::Initialized | EngineState::Assigning => {}
            state => {
                return Err(KMeansError::InvalidState(format!("cannot assign points in state {:?}", state)));
            }
        }
        self.state = EngineState::Assigning;
        self.last_changed = reassign_all(&mut self.points, &self.centroids)?;
        self.state = EngineState::Recomputing;
        Ok(self.last_changed)
    }

    /// Replace the centroid set with the means of the current labels
    pub fn run_recompute(&mut self) -> Result<()> {
        if self.state != EngineState::Recomputing {
            return Err(KMeansError::InvalidState(format!("cannot recompute centroids in state {:?}", self.state)));
        }
        let before = self.centroids.len();
        self.centroids = recompute(&self.points);
        if self.centroids.len() < before {
            warn!(before, after = self.centroids.len(), "cluster lost all members and was dropped");
        }
        self.state = if self.last_changed { EngineState::Assigning } else { EngineState::Converged };
        Ok(())
    }

    /// Run assign/recompute rounds until no label changes
    ///
    /// The recompute of the final, unchanged pass still runs, so the
    /// centroids always match the final labels.
    pub fn fit(&mut self) -> Result<FitReport> {
        let fit_timer = Instant::now();
        let mut iterations: Vec<IterationStat> = Vec::new();

        let outcome = loop {
            if self.state == EngineState::Converged {
                break FitOutcome::Converged { iterations: iterations.len() };
            }
            if let Some(max) = self.max_iteration {
                if iterations.len() >= max {
                    warn!(max_iteration = max, "k-means stopped before convergence");
                    break FitOutcome::IterationLimit { iterations: iterations.len() };
                }
            }

            let iteration_timer = Instant::now();
            let changed = self.run_assignment()?;
            self.run_recompute()?;
            let stat = IterationStat {
                iteration: iterations.len(),
                changed,
                inertia: self.inertia(),
                elapsed: iteration_timer.elapsed(),
            };
            debug!(
                iteration = stat.iteration,
                changed = stat.changed,
                inertia = stat.inertia,
                clusters = self.centroids.len(),
                elapsed_us = stat.elapsed.as_micros() as u64,
                "iteration done"
            );
            iterations.push(stat);
        };

        if outcome.is_converged() {
            info!(iterations = outcome.iterations(), clusters = self.centroids.len(), "k-means converged");
        }
        Ok(FitReport { outcome, iterations, elapsed: fit_timer.elapsed() })
    }

    /// Sum of squared distances from each point to its label's centroid
    ///
    /// Points whose label has no centroid are skipped.
    pub fn inertia(&self) -> f64 {
        let by_label: BTreeMap<usize, &Centroid> = self.centroids.iter().map(|c| (c.cluster_id, c)).collect();
        self.points
            .iter()
            .filter_map(|p| by_label.get(&p.cluster_id()).map(|c| squared_distance(p, *c)))
            .sum()
    }

    /// Members of every cluster, by ascending label, in load order
    pub fn clusters(&self) -> BTreeMap<usize, Vec<&Point>> {
        let mut clusters: BTreeMap<usize, Vec<&Point>> = BTreeMap::new();
        for point in self.points.iter() {
            clusters.entry(point.cluster_id()).or_default().push(point);
        }
        clusters
    }
}
