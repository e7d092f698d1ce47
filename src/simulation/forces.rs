//! Acceleration contributors for the flight regime
//!
//! Gravity from point-radius sources plus the surface-orbit kinematics used
//! while a body rests on a source. Everything here is pure: no state, no
//! allocation per call.

use crate::simulation::states::{GravitySource, NVec2};

/// Collection of acceleration terms (source gravity, extra fields, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector at a point.
///
/// Terms are registered once at scenario build time, so evaluating the set
/// every frame never allocates.
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total acceleration at `x` from every term
    pub fn accumulate(&self, x: NVec2, sources: &[GravitySource]) -> NVec2 {
        self.terms
            .iter()
            .fold(NVec2::zeros(), |acc, term| acc + term.acceleration(x, sources))
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// A field that contributes acceleration at a point given the frame's sources
pub trait Acceleration {
    fn acceleration(&self, x: NVec2, sources: &[GravitySource]) -> NVec2;
}

/// Inverse-square attraction toward every source, `K / d^2`
pub struct SourceGravity {
    pub k: f64,
}

impl Acceleration for SourceGravity {
    fn acceleration(&self, x: NVec2, sources: &[GravitySource]) -> NVec2 {
        acceleration_at(x, sources, self.k)
    }
}

/// Net gravitational acceleration at `x`.
///
/// For each source at distance `d`:
/// - `d <= radius` contributes nothing (the point is inside the body),
/// - otherwise `K / d^2` toward the center, scaled by the source's gravity
///   multiplier (negative pushes away).
pub fn acceleration_at(x: NVec2, sources: &[GravitySource], k: f64) -> NVec2 {
    let mut acc = NVec2::zeros();
    for s in sources {
        // r points from the body toward the source center
        let r = s.x - x;
        let d = r.norm();
        if d <= s.radius {
            continue;
        }
        let strength = k / (d * d) * s.multiplier();
        acc += r * (strength / d);
    }
    acc
}

/// Point on the circle of `radius` around `source` at `angle` (radians)
pub fn orbit_position(source: &GravitySource, angle: f64, radius: f64) -> NVec2 {
    source.x + radius * NVec2::new(angle.cos(), angle.sin())
}
