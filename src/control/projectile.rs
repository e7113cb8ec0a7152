use crate::{
    constants::{
        DEFAULT_DRAG_COEFFICIENT, DEFAULT_MASS, GRAVITY, MAX_SIMULATION_TIME, START_X_VELOCITY,
        START_Y_VELOCITY, TIME_STEP,
    },
    errors::SimulationError,
    telemetry_system::telemetry::Trajectory,
    trajectory_system::{forces, integrator, integrator::StepState},
};

/// Physical parameters for one simulation run. Supplied once, never mutated
/// during integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Combined air resistance coefficient, based on F = -kv². Should be positive.
    pub drag_coefficient: f64,
    /// Mass of the object in kg. Only matters if drag_coefficient is not 0.
    pub mass: f64,
    /// Gravitational acceleration in m/s², negative downwards.
    pub gravity: f64,
    /// Time interval for each time step in seconds.
    pub time_step: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            mass: DEFAULT_MASS,
            gravity: GRAVITY,
            time_step: TIME_STEP,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "mass must be finite and positive, got {}",
                self.mass
            )));
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "time_step must be finite and positive, got {}",
                self.time_step
            )));
        }
        if !self.drag_coefficient.is_finite() || self.drag_coefficient < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "drag_coefficient must be finite and non-negative, got {}",
                self.drag_coefficient
            )));
        }
        if !self.gravity.is_finite() {
            return Err(SimulationError::InvalidParameter(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }

        Ok(())
    }
}

#[derive(PartialEq, Debug, Clone)]
pub enum ProjectileState {
    Falling,
    Landed,
}

/// A point mass in 2-D flight. Each axis carries its own velocity; the
/// vertical axis alone feels gravity.
#[derive(Debug)]
pub struct Projectile {
    pub state: ProjectileState,
    pub time: f64,
    pub height: f64,
    pub x_distance: f64,
    pub x_velocity: f64,
    pub y_velocity: f64,
    config: SimulationConfig,
}

impl Projectile {
    pub fn new(
        initial_height: f64,
        x_velocity: f64,
        y_velocity: f64,
        config: SimulationConfig,
    ) -> Result<Self, SimulationError> {
        config.validate()?;

        if !initial_height.is_finite() || !x_velocity.is_finite() || !y_velocity.is_finite() {
            return Err(SimulationError::InvalidParameter(format!(
                "initial state must be finite, got height = {}, v_x = {}, v_y = {}",
                initial_height, x_velocity, y_velocity
            )));
        }

        let state = if initial_height > 0.0 {
            ProjectileState::Falling
        } else {
            ProjectileState::Landed
        };

        Ok(Projectile {
            state,
            time: 0.0,
            height: initial_height,
            x_distance: 0.0,
            x_velocity,
            y_velocity,
            config,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Advance the flight by one time step.
    ///
    /// Accelerations are evaluated per axis from that axis' own velocity,
    /// then both axes advance over the same interval.
    pub fn update(&mut self) -> Result<(), SimulationError> {
        if self.state == ProjectileState::Landed {
            return Ok(());
        }

        let k = self.config.drag_coefficient;
        let mass = self.config.mass;
        let dt = self.config.time_step;

        let a_y = forces::acceleration_y(self.y_velocity, k, mass, self.config.gravity);
        let a_x = forces::acceleration_x(self.x_velocity, k, mass);

        let vertical = integrator::update_state(
            StepState::new(self.time, self.height, self.y_velocity),
            a_y,
            dt,
        );
        let horizontal = integrator::update_state(
            StepState::new(self.time, self.x_distance, self.x_velocity),
            a_x,
            dt,
        );

        if !vertical.is_finite() || !horizontal.is_finite() {
            return Err(SimulationError::NumericalError(format!(
                "state became non-finite at t = {} (height = {}, v_y = {}, v_x = {})",
                vertical.time, vertical.position, vertical.velocity, horizontal.velocity
            )));
        }

        self.time = vertical.time;
        self.height = vertical.position;
        self.y_velocity = vertical.velocity;
        self.x_distance = horizontal.position;
        self.x_velocity = horizontal.velocity;

        if self.height <= 0.0 {
            self.state = ProjectileState::Landed;
        }

        Ok(())
    }
}

/// Model a mass thrown from a given height until it reaches the ground.
///
/// Launch velocities are the fixed reference values (10 m/s on each axis).
/// One sample is recorded per time step for the entire flight; the last
/// recorded height is still above ground, the step after it would land.
pub fn flying_mass(
    initial_height: f64,
    config: SimulationConfig,
) -> Result<Trajectory, SimulationError> {
    let mut projectile =
        Projectile::new(initial_height, START_X_VELOCITY, START_Y_VELOCITY, config)?;
    let mut trajectory = Trajectory::new();

    // Keep looping while the object is still in flight
    while projectile.state == ProjectileState::Falling {
        if projectile.time > MAX_SIMULATION_TIME {
            return Err(SimulationError::PhysicsError(format!(
                "no landing after {} s of simulated time; check gravity and drag parameters",
                MAX_SIMULATION_TIME
            )));
        }

        trajectory.record(&projectile);
        projectile.update()?;
    }

    Ok(trajectory)
}
