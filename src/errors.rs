use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Numerical error: {0}")]
    NumericalError(String),

    #[error("Physics error: {0}")]
    PhysicsError(String),
}
