//! Core state types for the orbit/flight simulation.
//!
//! Defines the 2D vector alias, the gravity sources supplied by the world,
//! the tagged motion state and the simulated body itself.
//!
//! A body is either locked to a source (`OnSurface`, positional orbit, zero
//! velocity) or free (`InFlight`, integrated under the field of all sources).

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

/// Identifier of a gravity source, stable across frames
pub type SourceId = u32;

/// A gravitating disc supplied fresh by the world every frame
#[derive(Debug, Clone, PartialEq)]
pub struct GravitySource {
    pub id: SourceId,
    pub x: NVec2, // center
    pub radius: f64, // surface radius
    pub angular_velocity: Option<f64>, // rad/s for a body resting on it
    pub gravity_multiplier: Option<f64>, // negative = repulsive
}

impl GravitySource {
    pub fn new(id: SourceId, x: NVec2, radius: f64) -> Self {
        Self {
            id,
            x,
            radius,
            angular_velocity: None,
            gravity_multiplier: None,
        }
    }

    pub fn with_angular_velocity(mut self, w: f64) -> Self {
        self.angular_velocity = Some(w);
        self
    }

    pub fn with_gravity_multiplier(mut self, m: f64) -> Self {
        self.gravity_multiplier = Some(m);
        self
    }

    /// Angular velocity, zero when the source does not spin
    pub fn spin(&self) -> f64 {
        self.angular_velocity.unwrap_or(0.0)
    }

    /// Gravity multiplier, one when unset
    pub fn multiplier(&self) -> f64 {
        self.gravity_multiplier.unwrap_or(1.0)
    }
}

/// Motion regime of a body.
///
/// The orbit angle only exists while the body rests on a source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionState {
    OnSurface { source_id: SourceId, angle: f64 },
    InFlight,
}

impl MotionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, MotionState::InFlight)
    }

    pub fn angle(&self) -> Option<f64> {
        match self {
            MotionState::OnSurface { angle, .. } => Some(*angle),
            MotionState::InFlight => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub radius: f64,
    pub state: MotionState,
    pub dash_remaining: f64, // seconds left in the frictionless window
}

impl Body {
    /// A body resting at angle 0 on `source_id`. Its position is placed on the
    /// orbit ring by the first surface update.
    pub fn on_surface(source_id: SourceId, radius: f64) -> Self {
        Self {
            x: NVec2::zeros(),
            v: NVec2::zeros(),
            radius,
            state: MotionState::OnSurface { source_id, angle: 0.0 },
            dash_remaining: 0.0,
        }
    }

    pub fn is_dashing(&self) -> bool {
        self.dash_remaining > 0.0
    }

    pub fn speed(&self) -> f64 {
        self.v.norm()
    }
}
