//! Collaborator seams
//!
//! The core pulls three values from outside every frame: the player profile
//! (for the tuner), the power-up speed multiplier (read at jump time) and the
//! time-dilation scale (read every flight step). Each is a trait so a game
//! can wire in its own systems; [`StaticEnvironment`] serves fixed values for
//! headless runs and tests.

use serde::Deserialize;

use super::tuner::PlayerProfile;

pub trait ProfileProvider {
    /// `None` until analytics has produced a profile
    fn player_profile(&self) -> Option<PlayerProfile>;
}

pub trait PowerUpSource {
    fn active_speed_multiplier(&self) -> f64 {
        1.0
    }
}

pub trait TimeDilation {
    fn time_scale(&self) -> f64 {
        1.0
    }
}

/// Everything a frame step reads from outside the core
pub trait Environment: ProfileProvider + PowerUpSource + TimeDilation {}

impl<T: ProfileProvider + PowerUpSource + TimeDilation> Environment for T {}

/// Fixed collaborator values
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticEnvironment {
    pub profile: Option<PlayerProfile>,
    pub speed_multiplier: f64,
    pub time_scale: f64,
}

impl Default for StaticEnvironment {
    fn default() -> Self {
        Self {
            profile: None,
            speed_multiplier: 1.0,
            time_scale: 1.0,
        }
    }
}

impl ProfileProvider for StaticEnvironment {
    fn player_profile(&self) -> Option<PlayerProfile> {
        self.profile
    }
}

impl PowerUpSource for StaticEnvironment {
    fn active_speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }
}

impl TimeDilation for StaticEnvironment {
    fn time_scale(&self) -> f64 {
        self.time_scale
    }
}
