//! Two-regime motion state machine
//!
//! Owns one [`Body`] and moves it between `OnSurface` (locked orbit on a
//! source) and `InFlight` (free flight through the source field):
//!
//! ```text
//!   OnSurface --jump--> InFlight --land--> OnSurface
//! ```
//!
//! Rejected transitions (jumping mid-flight, landing while already landed,
//! landing out of reach) are silent no-ops reported through a `bool`.

use tracing::{debug, warn};

use super::forces::{orbit_position, AccelSet, SourceGravity};
use super::integrator::{flight_step, orbit_ring, surface_step};
use super::params::Parameters;
use super::states::{Body, GravitySource, MotionState, NVec2, SourceId};

/// Flight time assumed by [`predicted_landing_position`]
pub const PREDICTION_FLIGHT_TIME: f64 = 3.0;

/// A launch request from the input collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpRequest {
    pub power: f64, // pull strength
    pub angle: f64, // launch direction, radians
}

pub struct MotionStateMachine {
    body: Body,
    params: Parameters,
    forces: AccelSet,
    drag: f64,
}

impl MotionStateMachine {
    /// Build a machine with source gravity as the only acceleration term
    pub fn new(body: Body, params: Parameters, drag: f64) -> Self {
        let forces = AccelSet::new().with(SourceGravity { k: params.gravity_k });
        Self {
            body,
            params,
            forces,
            drag,
        }
    }

    /// Replace the acceleration terms used while in flight
    pub fn with_forces(mut self, forces: AccelSet) -> Self {
        self.forces = forces;
        self
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn state(&self) -> MotionState {
        self.body.state
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn drag(&self) -> f64 {
        self.drag
    }

    /// Drag used from the next flight update on
    pub fn set_drag(&mut self, drag: f64) {
        self.drag = drag;
    }

    /// Launch off the current source.
    ///
    /// Speed is `min(power * pull_k, max_jump_power)` scaled by the power-up
    /// multiplier active at jump time. Returns `false` if already in flight.
    pub fn jump(&mut self, req: JumpRequest, speed_multiplier: f64) -> bool {
        if self.body.state.is_in_flight() {
            return false;
        }
        let speed = (req.power * self.params.pull_k).clamp(0.0, self.params.max_jump_power);
        let dir = NVec2::new(req.angle.cos(), req.angle.sin());
        self.body.v = dir * (speed * speed_multiplier);
        self.body.state = MotionState::InFlight;
        debug!(speed, angle = req.angle, speed_multiplier, "jump");
        true
    }

    /// Open the frictionless dash window. Only valid mid-flight and when no
    /// dash is already running.
    pub fn start_dash(&mut self) -> bool {
        if !self.body.state.is_in_flight() || self.body.is_dashing() {
            return false;
        }
        self.body.dash_remaining = self.params.dash_duration;
        debug!(duration = self.params.dash_duration, "dash");
        true
    }

    /// Settle onto `source` if the body touches it.
    ///
    /// Requires `InFlight` and `distance <= source.radius + body.radius`. On
    /// success the body is snapped onto the orbit ring at the contact angle.
    pub fn land(&mut self, source: &GravitySource) -> bool {
        if !self.body.state.is_in_flight() {
            return false;
        }
        let d = self.body.x - source.x;
        if d.norm() > source.radius + self.body.radius {
            return false;
        }
        let angle = d.y.atan2(d.x);
        self.settle(source, angle);
        debug!(source = source.id, angle, "land");
        true
    }

    /// Try each source in order; the first one in reach wins
    pub fn try_land(&mut self, sources: &[GravitySource]) -> Option<SourceId> {
        if !self.body.state.is_in_flight() {
            return None;
        }
        sources.iter().find(|s| self.land(s)).map(|s| s.id)
    }

    /// Advance the body one frame in its current regime
    pub fn update(&mut self, dt: f64, sources: &[GravitySource], time_scale: f64) {
        match self.body.state {
            MotionState::OnSurface { source_id, .. } => {
                match sources.iter().find(|s| s.id == source_id) {
                    Some(source) => surface_step(&mut self.body, source, &self.params, dt),
                    None => {
                        warn!(source = source_id, "bound source missing, detaching");
                        self.body.state = MotionState::InFlight;
                        self.body.v = NVec2::zeros();
                    }
                }
            }
            MotionState::InFlight => {
                flight_step(&mut self.body, &self.forces, sources, self.drag, time_scale, dt);
                if self.body.is_dashing() {
                    self.body.dash_remaining = (self.body.dash_remaining - dt).max(0.0);
                }
            }
        }
    }

    /// Reset the body in place onto `source` at angle 0
    pub fn respawn(&mut self, source: &GravitySource) {
        self.settle(source, 0.0);
        debug!(source = source.id, "respawn");
    }

    fn settle(&mut self, source: &GravitySource, angle: f64) {
        let ring = orbit_ring(source, self.body.radius, &self.params);
        self.body.x = orbit_position(source, angle, ring);
        self.body.v = NVec2::zeros();
        self.body.dash_remaining = 0.0;
        self.body.state = MotionState::OnSurface { source_id: source.id, angle };
    }
}

/// Rough landing estimate for analytics: straight-line drift for a fixed
/// [`PREDICTION_FLIGHT_TIME`], ignoring gravity and drag.
pub fn predicted_landing_position(body: &Body, vx: f64, vy: f64) -> NVec2 {
    body.x + NVec2::new(vx, vy) * PREDICTION_FLIGHT_TIME
}
