use crate::utils::math::sign;

/// Quadratic air-resistance force, F = -sign(v) * k * v², opposing the
/// current direction of motion. Exactly zero at rest.
fn drag_force(velocity: f64, drag_coefficient: f64) -> f64 {
    -sign(velocity) * drag_coefficient * velocity.powi(2)
}

/// Net vertical acceleration from gravity and air resistance.
///
/// The caller is responsible for a nonzero `mass`.
pub fn acceleration_y(velocity: f64, drag_coefficient: f64, mass: f64, gravity: f64) -> f64 {
    let force_gravity = mass * gravity;
    let force_air = drag_force(velocity, drag_coefficient);
    let total_force = force_gravity + force_air;

    total_force / mass
}

/// Net horizontal acceleration. Air resistance is the only horizontal force.
pub fn acceleration_x(velocity: f64, drag_coefficient: f64, mass: f64) -> f64 {
    drag_force(velocity, drag_coefficient) / mass
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_drag_opposes_motion() {
        for v in [-30.0, -1.5, 0.25, 8.0, 100.0] {
            let force = drag_force(v, 0.035);
            assert!(
                force * v <= 0.0,
                "Drag must oppose motion. v = {}, force = {}",
                v,
                force
            );
            assert!(force != 0.0, "Drag should be nonzero for v = {}", v);
        }
    }

    #[test]
    fn test_drag_is_zero_at_rest() {
        assert_eq!(drag_force(0.0, 10.0), 0.0);
        assert_eq!(acceleration_x(0.0, 10.0, 1.0), 0.0);
    }

    #[test]
    fn test_vertical_acceleration_without_drag_is_gravity() {
        assert_relative_eq!(
            acceleration_y(25.0, 0.0, 1.0, -9.81),
            -9.81,
            epsilon = EPSILON
        );
        assert_relative_eq!(
            acceleration_y(-25.0, 0.0, 3.0, -9.81),
            -9.81,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_vertical_acceleration_with_drag() {
        // Rising at 10 m/s: drag pulls down with gravity.
        // a = -9.81 + (-1 * 0.035 * 100) / 1 = -13.31
        assert_relative_eq!(
            acceleration_y(10.0, 0.035, 1.0, -9.81),
            -13.31,
            epsilon = EPSILON
        );

        // Falling at 10 m/s: drag pushes up against gravity.
        // a = -9.81 + (1 * 0.035 * 100) / 1 = -6.31
        assert_relative_eq!(
            acceleration_y(-10.0, 0.035, 1.0, -9.81),
            -6.31,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_horizontal_acceleration_with_drag() {
        // a = (-1 * 0.035 * 100) / 1 = -3.5
        assert_relative_eq!(
            acceleration_x(10.0, 0.035, 1.0),
            -3.5,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_mass_scales_drag_but_not_gravity() {
        let light = acceleration_y(10.0, 0.035, 1.0, -9.81);
        let heavy = acceleration_y(10.0, 0.035, 10.0, -9.81);

        // The heavier object decelerates less from the same drag force.
        assert!(
            heavy > light,
            "Heavier object should feel less drag deceleration. light = {}, heavy = {}",
            light,
            heavy
        );
        assert_relative_eq!(heavy, -9.81 - 3.5 / 10.0, epsilon = EPSILON);
    }
}
