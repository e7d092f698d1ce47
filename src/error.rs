//! Errors raised while building a scenario or moving snapshots on and off disk.
//!
//! Frame stepping itself never fails; see the simulation module.

use thiserror::Error;

use crate::simulation::states::SourceId;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario has no gravity sources")]
    NoSources,

    #[error("start source {0} is not in the source list")]
    UnknownStartSource(SourceId),

    #[error("duplicate source id {0}")]
    DuplicateSource(SourceId),

    #[error("{what} radius must be positive, got {radius}")]
    InvalidRadius { what: String, radius: f64 },

    #[error("trail pool needs capacity and max active of at least 1 (got {capacity}, {max_active})")]
    InvalidTrail { capacity: usize, max_active: usize },

    #[error("frame step must be positive, got {0}")]
    InvalidFrameStep(f64),

    #[error("adaptation interval must be positive, got {0}")]
    InvalidInterval(f64),

    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
