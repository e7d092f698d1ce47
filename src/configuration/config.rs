//! Configuration types for loading scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`Engine`]            – frame step, run length, trail sizing, tuner cadence
//! - [`Parameters`]        – tuned physical constants
//! - [`TuningConfig`]      – base values for the adaptive coefficients
//! - [`BodyConfig`]        – the player body and the source it starts on
//! - [`SourceConfig`]      – one entry per gravity source, in evaluation order
//! - [`StaticEnvironment`] – fixed collaborator values for headless runs
//! - [`InputConfig`]       – scripted jump/dash inputs keyed by frame
//!
//! Every section except `body` and `sources` may be omitted.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   frame_dt: 0.0166667
//!   frames: 900
//!   adaptation_interval: 5.0
//!
//! parameters:
//!   gravity_k: 15000.0
//!   max_jump_power: 300.0
//!
//! tuning:
//!   base_drag: 0.99
//!   base_camera_response: 2.0
//!
//! body:
//!   radius: 10.0
//!   start_source: 0
//!
//! sources:
//!   - id: 0
//!     x: [0.0, 0.0]
//!     radius: 50.0
//!     angular_velocity: 0.8
//!   - id: 1
//!     x: [400.0, 0.0]
//!     radius: 80.0
//!     gravity_multiplier: 1.5
//!
//! environment:
//!   time_scale: 1.0
//!   profile:
//!     skill_level: 0.6
//!     risk_tolerance: 0.4
//!     current_mood: focused
//!     movement_style: balanced
//!
//! inputs:
//!   - frame: 60
//!     jump: { power: 60.0, angle: 0.0 }
//!   - frame: 70
//!     dash: true
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ScenarioError;
use crate::simulation::engine::Engine;
use crate::simulation::external::StaticEnvironment;
use crate::simulation::params::Parameters;
use crate::simulation::states::SourceId;
use crate::simulation::tuner::ProfileSnapshot;

/// Base values the adaptive coefficients are derived from
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TuningConfig {
    pub base_drag: f64,
    pub base_camera_response: f64,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            base_drag: 0.99,
            base_camera_response: 2.0,
        }
    }
}

/// The simulated body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub radius: f64,
    pub start_source: SourceId, // source the body spawns on
}

/// One gravity source
#[derive(Deserialize, Debug, Clone)]
pub struct SourceConfig {
    pub id: SourceId,
    pub x: [f64; 2], // center
    pub radius: f64,
    #[serde(default)]
    pub angular_velocity: Option<f64>,
    #[serde(default)]
    pub gravity_multiplier: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct JumpConfig {
    pub power: f64,
    pub angle: f64, // radians
}

/// Input applied at the start of `frame`
#[derive(Deserialize, Debug, Clone)]
pub struct InputConfig {
    pub frame: u64,
    #[serde(default)]
    pub jump: Option<JumpConfig>,
    #[serde(default)]
    pub dash: bool,
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: Engine,
    #[serde(default)]
    pub parameters: Parameters,
    #[serde(default)]
    pub tuning: TuningConfig,
    pub body: BodyConfig,
    pub sources: Vec<SourceConfig>,
    #[serde(default)]
    pub environment: StaticEnvironment,
    #[serde(default)]
    pub inputs: Vec<InputConfig>,
}

/// Write an adaptive profile snapshot as YAML
pub fn save_snapshot(path: &Path, snap: &ProfileSnapshot) -> Result<(), ScenarioError> {
    let text = serde_yaml::to_string(snap)?;
    fs::write(path, text)?;
    Ok(())
}

/// Read a snapshot written by [`save_snapshot`]
pub fn load_snapshot(path: &Path) -> Result<ProfileSnapshot, ScenarioError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}
