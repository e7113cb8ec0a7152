use projectile_simulation::telemetry_system::plot;
use projectile_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let initial_height = 20.0; // m
    let config = SimulationConfig {
        drag_coefficient: 0.035,
        ..Default::default()
    };

    let trajectory = flying_mass(initial_height, config)?;

    trajectory.display_summary();
    plot::plot_xy(
        &trajectory.x_distance,
        &trajectory.height,
        "2D Projectile: height (m) vs distance (m)",
    );

    Ok(())
}
