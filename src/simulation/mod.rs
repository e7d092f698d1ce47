pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod motion;
pub mod boundary;
pub mod trail;
pub mod tuner;
pub mod external;
pub mod scenario;
