pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::projectile::{flying_mass, Projectile, ProjectileState, SimulationConfig};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::integrator::StepState;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Trajectory;
