//! Build fully-initialized scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it and produces the
//! runtime bundle:
//! - engine settings (`Engine`)
//! - the world's ordered source list
//! - the frame stepper (`Simulation`) with the body spawned on its start source
//! - fixed collaborator values and the scripted input timeline

use std::collections::HashSet;

use tracing::info;

use crate::configuration::config::{InputConfig, ScenarioConfig, SourceConfig};
use crate::error::ScenarioError;
use crate::simulation::engine::{Engine, FrameInput, FrameReport, Simulation};
use crate::simulation::external::StaticEnvironment;
use crate::simulation::motion::{JumpRequest, MotionStateMachine};
use crate::simulation::states::{Body, GravitySource, NVec2};
use crate::simulation::tuner::AdaptivePhysicsProfile;

/// Counts of notable events over a run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub jumps: u32,
    pub dashes: u32,
    pub landings: u32,
    pub bounces: u32,
    pub recalibrations: u32,
}

impl RunSummary {
    fn record(&mut self, r: &FrameReport) {
        self.frames += 1;
        self.jumps += r.jumped as u32;
        self.dashes += r.dashed as u32;
        self.landings += r.landed.is_some() as u32;
        self.bounces += r.bounced as u32;
        self.recalibrations += r.recalibrated as u32;
    }
}

pub struct Scenario {
    pub engine: Engine,
    pub sources: Vec<GravitySource>,
    pub sim: Simulation,
    pub environment: StaticEnvironment,
    inputs: Vec<InputConfig>, // sorted by frame
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        let engine = cfg.engine;
        if !(engine.frame_dt > 0.0) {
            return Err(ScenarioError::InvalidFrameStep(engine.frame_dt));
        }
        if !(engine.adaptation_interval > 0.0) {
            return Err(ScenarioError::InvalidInterval(engine.adaptation_interval));
        }
        if engine.trail_capacity == 0 || engine.trail_max_active == 0 {
            return Err(ScenarioError::InvalidTrail {
                capacity: engine.trail_capacity,
                max_active: engine.trail_max_active,
            });
        }

        let sources = build_sources(&cfg.sources)?;

        if !(cfg.body.radius > 0.0) {
            return Err(ScenarioError::InvalidRadius {
                what: "body".to_string(),
                radius: cfg.body.radius,
            });
        }
        let start = sources
            .iter()
            .find(|s| s.id == cfg.body.start_source)
            .ok_or(ScenarioError::UnknownStartSource(cfg.body.start_source))?;

        // Spawn on the start source, already placed on its ring
        let tuning = AdaptivePhysicsProfile::new(cfg.tuning.base_drag, cfg.tuning.base_camera_response);
        let body = Body::on_surface(start.id, cfg.body.radius);
        let mut motion = MotionStateMachine::new(body, cfg.parameters, tuning.drag_coefficient);
        motion.respawn(start);

        let sim = Simulation::new(motion, &engine, tuning);

        let mut inputs = cfg.inputs;
        inputs.sort_by_key(|i| i.frame);

        info!(
            sources = sources.len(),
            frames = engine.frames,
            start = cfg.body.start_source,
            "scenario built"
        );

        Ok(Self {
            engine,
            sources,
            sim,
            environment: cfg.environment,
            inputs,
        })
    }

    /// Step one frame with the configured frame step and environment
    pub fn step(&mut self, input: &FrameInput) -> FrameReport {
        self.sim.step(self.engine.frame_dt, input, &self.sources, &self.environment)
    }

    /// Run `frames` frames, feeding scripted inputs on their frame numbers
    pub fn run(&mut self, frames: u64) -> RunSummary {
        let mut summary = RunSummary::default();
        let mut next = self.inputs.partition_point(|i| i.frame < self.sim.frame);
        for _ in 0..frames {
            let mut input = FrameInput::default();
            while let Some(cfg) = self.inputs.get(next).filter(|i| i.frame <= self.sim.frame) {
                if let Some(j) = cfg.jump {
                    input.jump = Some(JumpRequest { power: j.power, angle: j.angle });
                }
                input.dash |= cfg.dash;
                next += 1;
            }
            let report = self.step(&input);
            summary.record(&report);
        }
        summary
    }

    pub fn body(&self) -> &Body {
        self.sim.motion.body()
    }

    pub fn position(&self) -> NVec2 {
        self.body().x
    }

    pub fn camera_response(&self) -> f64 {
        self.sim.camera_response()
    }
}

// helpers ==============================================================================

fn build_sources(cfgs: &[SourceConfig]) -> Result<Vec<GravitySource>, ScenarioError> {
    if cfgs.is_empty() {
        return Err(ScenarioError::NoSources);
    }
    let mut seen = HashSet::new();
    cfgs.iter()
        .map(|sc| {
            if !seen.insert(sc.id) {
                return Err(ScenarioError::DuplicateSource(sc.id));
            }
            if !(sc.radius > 0.0) {
                return Err(ScenarioError::InvalidRadius {
                    what: format!("source {}", sc.id),
                    radius: sc.radius,
                });
            }
            Ok(GravitySource {
                id: sc.id,
                x: NVec2::new(sc.x[0], sc.x[1]),
                radius: sc.radius,
                angular_velocity: sc.angular_velocity,
                gravity_multiplier: sc.gravity_multiplier,
            })
        })
        .collect()
}
