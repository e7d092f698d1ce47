pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, GravitySource, MotionState, NVec2, SourceId};
pub use simulation::params::Parameters;
pub use simulation::engine::{Engine, FrameInput, FrameReport, Simulation};
pub use simulation::forces::{acceleration_at, orbit_position, Acceleration, AccelSet, SourceGravity};
pub use simulation::motion::{predicted_landing_position, JumpRequest, MotionStateMachine, PREDICTION_FLIGHT_TIME};
pub use simulation::boundary::BoundaryGuard;
pub use simulation::trail::{TrailPool, TrailSample};
pub use simulation::tuner::{
    compute_camera_response, compute_drag, recalibrate, AdaptivePhysicsProfile, AdaptiveTuner, Mood,
    MovementStyle, PlayerProfile, ProfileSnapshot,
};
pub use simulation::external::{Environment, PowerUpSource, ProfileProvider, StaticEnvironment, TimeDilation};
pub use simulation::scenario::{RunSummary, Scenario};

pub use configuration::config::{load_snapshot, save_snapshot, BodyConfig, InputConfig, JumpConfig, ScenarioConfig, SourceConfig, TuningConfig};

pub use error::ScenarioError;

pub use benchmark::benchmark::{bench_frame, bench_gravity, bench_trail};
