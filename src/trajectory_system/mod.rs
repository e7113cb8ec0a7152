pub mod forces;
pub mod integrator;
