//! Fixed-step per-regime integrators
//!
//! `surface_step` is a kinematic constraint (advance the orbit angle and snap
//! onto the ring). `flight_step` is semi-implicit Euler under the summed
//! acceleration field, with per-frame drag and an external time scale.

use super::forces::{orbit_position, AccelSet};
use super::params::Parameters;
use super::states::{Body, GravitySource, MotionState, NVec2};

/// Distance from a source center to a body orbiting it
pub fn orbit_ring(source: &GravitySource, body_radius: f64, params: &Parameters) -> f64 {
    source.radius + body_radius + params.clearance
}

/// Advance a body resting on `source` by `dt`.
/// Velocity is forced to zero: the orbit is positional, not inertial.
pub fn surface_step(body: &mut Body, source: &GravitySource, params: &Parameters, dt: f64) {
    let ring = orbit_ring(source, body.radius, params);
    if let MotionState::OnSurface { angle, .. } = &mut body.state {
        *angle += source.spin() * params.orbit_speed_multiplier * dt;
        body.x = orbit_position(source, *angle, ring);
    }
    body.v = NVec2::zeros();
}

/// Advance a free body by `dt`.
///
/// - Kick: v += a * dt, with `a` summed over `forces`
/// - Drag: v *= drag, skipped while a dash is active
/// - Drift: x += v * dt * time_scale
pub fn flight_step(
    body: &mut Body,
    forces: &AccelSet,
    sources: &[GravitySource],
    drag: f64,
    time_scale: f64,
    dt: f64,
) {
    let a = forces.accumulate(body.x, sources);
    body.v += a * dt;
    if !body.is_dashing() {
        body.v *= drag;
    }
    body.x += body.v * (dt * time_scale);
}
