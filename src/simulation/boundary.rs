//! World boundary containment
//!
//! Keeps a body inside a circle around the origin. Crossing it is not a death
//! condition here: the body is put back on the circle and bounced inward
//! with damped speed.

use tracing::debug;

use super::states::Body;

#[derive(Debug, Clone, Copy)]
pub struct BoundaryGuard {
    pub max_radius: f64,
    pub damping: f64,
}

impl BoundaryGuard {
    pub fn new(max_radius: f64, damping: f64) -> Self {
        Self { max_radius, damping }
    }

    /// Project `body` back onto the boundary if it drifted past it.
    /// Velocity is reversed and scaled by `damping`. Returns whether the
    /// guard fired.
    pub fn enforce(&self, body: &mut Body) -> bool {
        let d = body.x.norm();
        if d <= self.max_radius {
            return false;
        }
        body.x *= self.max_radius / d;
        body.v *= -self.damping;
        debug!(distance = d, max_radius = self.max_radius, "boundary bounce");
        true
    }
}

impl Default for BoundaryGuard {
    fn default() -> Self {
        Self::new(5_000.0, 0.5)
    }
}
