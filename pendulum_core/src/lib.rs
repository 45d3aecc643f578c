//! Energy-conserving pendulum kinematics and the lifecycle state machine that
//! drives them from a host's fixed-timestep loop.

pub mod config;
pub mod error;
pub mod kinematics;
pub mod pendulum;
pub mod state;

pub use config::PendulumConfig;
pub use error::{PendulumError, PendulumResult};
pub use kinematics::{angular_velocity, compute_max_height, try_max_height};
pub use pendulum::{Pendulum, Phase};
pub use state::{Direction, PendulumState, StepOutcome};
