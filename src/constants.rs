// Physical Constants
pub const GRAVITY: f64 = -9.81; // m/s², negative by convention (downwards)

// Launch Constants (reference scenario)
pub const START_X_VELOCITY: f64 = 10.0; // m/s
pub const START_Y_VELOCITY: f64 = 10.0; // m/s

// Simulation Parameters
pub const TIME_STEP: f64 = 0.1; // s
pub const MAX_SIMULATION_TIME: f64 = 3600.0; // s

// Default Physical Parameters
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.0; // i.e. no air resistance
pub const DEFAULT_MASS: f64 = 1.0; // kg
