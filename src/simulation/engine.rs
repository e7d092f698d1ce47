//! High-level runtime engine settings
//!
//! Frame step, run length, trail pool sizing and adaptive tuner cadence
//! used when building and running a `Scenario`, plus the per-frame
//! [`Simulation`] stepper that consumes them

use serde::Deserialize;

use super::boundary::BoundaryGuard;
use super::external::Environment;
use super::motion::{JumpRequest, MotionStateMachine};
use super::states::{GravitySource, SourceId};
use super::trail::TrailPool;
use super::tuner::{AdaptivePhysicsProfile, AdaptiveTuner, ProfileSnapshot};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Engine {
    pub frame_dt: f64, // seconds per frame
    pub frames: u64, // frames to run headless
    pub trail_capacity: usize, // underlying trail slots
    pub trail_max_active: usize, // simultaneously live trail samples
    pub trail_decay_rate: f64, // life lost per second
    pub adaptation_interval: f64, // seconds between tuner attempts
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            frame_dt: 1.0 / 60.0,
            frames: 600,
            trail_capacity: 100,
            trail_max_active: 50,
            trail_decay_rate: 2.0,
            adaptation_interval: 5.0,
        }
    }
}

/// Player intent for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub jump: Option<JumpRequest>,
    pub dash: bool,
}

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    pub jumped: bool,
    pub dashed: bool,
    pub landed: Option<SourceId>,
    pub bounced: bool,
    pub recalibrated: bool,
}

/// The per-frame core: one body, its trail, the boundary and the tuner.
///
/// Sources are borrowed per step since the world owns them.
pub struct Simulation {
    pub motion: MotionStateMachine,
    pub boundary: BoundaryGuard,
    pub trail: TrailPool,
    pub tuning: AdaptivePhysicsProfile,
    pub tuner: AdaptiveTuner,
    pub elapsed: f64, // game seconds since session start
    pub frame: u64,
}

impl Simulation {
    pub fn new(
        mut motion: MotionStateMachine,
        engine: &Engine,
        tuning: AdaptivePhysicsProfile,
    ) -> Self {
        let boundary = BoundaryGuard::new(motion.params().max_radius, motion.params().boundary_damping);
        motion.set_drag(tuning.drag_coefficient);
        Self {
            motion,
            boundary,
            trail: TrailPool::new(engine.trail_capacity, engine.trail_max_active, engine.trail_decay_rate),
            tuning,
            tuner: AdaptiveTuner::new(engine.adaptation_interval),
            elapsed: 0.0,
            frame: 0,
        }
    }

    /// Run one frame:
    /// input transitions, regime update, landing check, boundary, trail,
    /// then the tuner. Coefficients from a recalibration take effect on the
    /// next frame's update.
    pub fn step<E: Environment>(
        &mut self,
        dt: f64,
        input: &FrameInput,
        sources: &[GravitySource],
        env: &E,
    ) -> FrameReport {
        let mut report = FrameReport::default();

        if let Some(req) = input.jump {
            report.jumped = self.motion.jump(req, env.active_speed_multiplier());
        }
        if input.dash {
            report.dashed = self.motion.start_dash();
        }

        self.motion.update(dt, sources, env.time_scale());
        report.landed = self.motion.try_land(sources);
        report.bounced = self.boundary.enforce(self.motion.body_mut());

        self.trail.decay(dt);
        let body = self.motion.body();
        self.trail.write(body.x, body.is_dashing());

        self.elapsed += dt;
        self.frame += 1;

        let player = env.player_profile();
        report.recalibrated = self.tuner.update(&mut self.tuning, player.as_ref(), self.elapsed);
        if report.recalibrated {
            self.motion.set_drag(self.tuning.drag_coefficient);
        }
        report
    }

    /// Put the body back on `source` and drop its old trail
    pub fn respawn(&mut self, source: &GravitySource) {
        self.motion.respawn(source);
        self.trail.clear();
    }

    pub fn camera_response(&self) -> f64 {
        self.tuning.camera_response
    }

    pub fn snapshot(&self) -> ProfileSnapshot {
        self.tuning.snapshot()
    }

    /// Overwrite live coefficients from a saved snapshot
    pub fn restore(&mut self, snap: &ProfileSnapshot) {
        self.tuning.restore(snap);
        self.motion.set_drag(self.tuning.drag_coefficient);
    }
}
