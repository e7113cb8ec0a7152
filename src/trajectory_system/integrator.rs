/// State of one motion axis at a discrete time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepState {
    pub time: f64,
    pub position: f64,
    pub velocity: f64,
}

impl StepState {
    pub fn new(time: f64, position: f64, velocity: f64) -> Self {
        StepState {
            time,
            position,
            velocity,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.time.is_finite() && self.position.is_finite() && self.velocity.is_finite()
    }
}

/// Advance one axis by a fixed explicit Euler step.
///
/// The position update carries the 0.5·a·dt² term, so for constant
/// acceleration the scheme reproduces the kinematic equation exactly.
pub fn update_state(state: StepState, acceleration: f64, dt: f64) -> StepState {
    let distance_moved = state.velocity * dt + 0.5 * acceleration * dt.powi(2);

    StepState {
        time: state.time + dt,
        position: state.position + distance_moved,
        velocity: state.velocity + acceleration * dt,
    }
}
