//! Adaptive physics tuning
//!
//! A slow control loop that re-derives the flight drag coefficient and the
//! camera response from an externally computed [`PlayerProfile`]. It runs on
//! game time through an explicit elapsed-seconds argument, at most once per
//! adaptation interval, and never leaves a coefficient outside its band.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Allowed band for the drag coefficient
pub const DRAG_MIN: f64 = 0.985;
pub const DRAG_MAX: f64 = 0.995;

/// Allowed band for the camera response
pub const CAMERA_MIN: f64 = 1.0;
pub const CAMERA_MAX: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Neutral,
    Calm,
    Excited,
    Frustrated,
    Confident,
    Focused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementStyle {
    Balanced,
    Adventurous,
    Methodical,
    Erratic,
}

/// Player statistics computed by the analytics collaborator. Read-only here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub skill_level: f64, // nominally 0..1
    pub risk_tolerance: f64, // nominally 0..1
    pub current_mood: Mood,
    pub movement_style: MovementStyle,
}

/// Live tuning coefficients plus the bases they are derived from
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptivePhysicsProfile {
    pub drag_coefficient: f64,
    pub camera_response: f64,
    pub base_drag: f64,
    pub base_camera_response: f64,
    pub last_recalibration: Option<f64>, // game seconds, None until first cycle
}

/// Flat save/restore form of the live coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub drag_coefficient: f64,
    pub camera_response: f64,
    pub last_recalibration: Option<f64>,
}

impl AdaptivePhysicsProfile {
    /// Start a session at the base values (clamped into their bands)
    pub fn new(base_drag: f64, base_camera_response: f64) -> Self {
        Self {
            drag_coefficient: base_drag.clamp(DRAG_MIN, DRAG_MAX),
            camera_response: base_camera_response.clamp(CAMERA_MIN, CAMERA_MAX),
            base_drag,
            base_camera_response,
            last_recalibration: None,
        }
    }

    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            drag_coefficient: self.drag_coefficient,
            camera_response: self.camera_response,
            last_recalibration: self.last_recalibration,
        }
    }

    /// Overwrite the live values; nothing is recomputed
    pub fn restore(&mut self, snap: &ProfileSnapshot) {
        self.drag_coefficient = snap.drag_coefficient;
        self.camera_response = snap.camera_response;
        self.last_recalibration = snap.last_recalibration;
    }
}

impl Default for AdaptivePhysicsProfile {
    fn default() -> Self {
        Self::new(0.99, 2.0)
    }
}

/// Drag from skill, risk appetite and mood, clamped to `[DRAG_MIN, DRAG_MAX]`.
/// Less skilled or more cautious players get more velocity retention.
pub fn compute_drag(base: f64, p: &PlayerProfile) -> f64 {
    let mood = match p.current_mood {
        Mood::Frustrated => 0.002,
        Mood::Confident => -0.001,
        _ => 0.0,
    };
    let drag = base + (1.0 - p.skill_level) * 0.005 + (1.0 - p.risk_tolerance) * 0.003 + mood;
    drag.clamp(DRAG_MIN, DRAG_MAX)
}

/// Camera response from skill, mood and movement style, clamped to
/// `[CAMERA_MIN, CAMERA_MAX]`.
pub fn compute_camera_response(base: f64, p: &PlayerProfile) -> f64 {
    let mood = match p.current_mood {
        Mood::Frustrated => -0.3,
        Mood::Confident => 0.2,
        Mood::Focused => 0.1,
        _ => 0.0,
    };
    let style = match p.movement_style {
        MovementStyle::Adventurous => 0.3,
        MovementStyle::Methodical => -0.2,
        _ => 0.0,
    };
    (base + p.skill_level * 0.5 + mood + style).clamp(CAMERA_MIN, CAMERA_MAX)
}

/// Derive the next coefficients from `current` and the player profile.
///
/// Without a usable profile (absent, or with non-finite statistics) the
/// current coefficients are returned unchanged.
pub fn recalibrate(
    current: &AdaptivePhysicsProfile,
    player: Option<&PlayerProfile>,
    now: f64,
) -> AdaptivePhysicsProfile {
    let Some(p) = player.filter(|p| is_usable(p)) else {
        return current.clone();
    };
    AdaptivePhysicsProfile {
        drag_coefficient: compute_drag(current.base_drag, p),
        camera_response: compute_camera_response(current.base_camera_response, p),
        last_recalibration: Some(now),
        ..current.clone()
    }
}

fn is_usable(p: &PlayerProfile) -> bool {
    p.skill_level.is_finite() && p.risk_tolerance.is_finite()
}

/// Rate limiter around [`recalibrate`]
#[derive(Debug, Clone)]
pub struct AdaptiveTuner {
    interval: f64,
    last_attempt: f64,
}

impl AdaptiveTuner {
    /// First attempt happens one full `interval` after session start
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            last_attempt: 0.0,
        }
    }

    /// Whether a cycle is due at `elapsed` game seconds
    pub fn is_due(&self, elapsed: f64) -> bool {
        elapsed - self.last_attempt >= self.interval
    }

    /// Run one cycle if due. Returns `true` when the coefficients were
    /// recomputed; a due cycle with no profile is consumed and returns `false`.
    pub fn update(
        &mut self,
        profile: &mut AdaptivePhysicsProfile,
        player: Option<&PlayerProfile>,
        elapsed: f64,
    ) -> bool {
        if !self.is_due(elapsed) {
            return false;
        }
        self.last_attempt = elapsed;
        let Some(player) = player.filter(|p| is_usable(p)) else {
            debug!(elapsed, "no player profile, keeping coefficients");
            return false;
        };
        *profile = recalibrate(profile, Some(player), elapsed);
        info!(
            drag = profile.drag_coefficient,
            camera = profile.camera_response,
            elapsed,
            "recalibrated"
        );
        true
    }
}

impl Default for AdaptiveTuner {
    fn default() -> Self {
        Self::new(5.0)
    }
}
