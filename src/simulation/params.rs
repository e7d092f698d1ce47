//! Tuned physical constants for the motion core
//!
//! `Parameters` holds the values that shape game feel:
//! - gravity strength and jump scaling,
//! - orbit clearance and surface spin multiplier,
//! - dash window length,
//! - world boundary radius and its bounce damping

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub gravity_k: f64, // strength numerator, a = K / d^2
    pub pull_k: f64, // jump speed per unit of pull power
    pub max_jump_power: f64, // cap on launch speed before power-ups
    pub clearance: f64, // gap between source surface and body surface while orbiting
    pub orbit_speed_multiplier: f64, // scales source spin while on surface
    pub dash_duration: f64, // seconds without drag after a dash
    pub max_radius: f64, // world boundary distance from origin
    pub boundary_damping: f64, // velocity factor on boundary bounce
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gravity_k: 15_000.0,
            pull_k: 3.0,
            max_jump_power: 300.0,
            clearance: 5.0,
            orbit_speed_multiplier: 1.0,
            dash_duration: 0.3,
            max_radius: 5_000.0,
            boundary_damping: 0.5,
        }
    }
}
