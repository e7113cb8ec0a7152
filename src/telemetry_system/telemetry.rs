use crate::control::projectile::Projectile;

/// Per-step flight record: five equal-length sequences in increasing time
/// order, one entry per integration step.
#[derive(Debug, Default)]
pub struct Trajectory {
    pub time: Vec<f64>,
    pub x_velocity: Vec<f64>,
    pub y_velocity: Vec<f64>,
    pub x_distance: Vec<f64>,
    pub height: Vec<f64>,
}

impl Trajectory {
    pub fn new() -> Self {
        Trajectory::default()
    }

    pub fn record(&mut self, projectile: &Projectile) {
        self.time.push(projectile.time);
        self.x_velocity.push(projectile.x_velocity);
        self.y_velocity.push(projectile.y_velocity);
        self.x_distance.push(projectile.x_distance);
        self.height.push(projectile.height);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn last_time(&self) -> Option<f64> {
        self.time.last().copied()
    }

    pub fn max_height(&self) -> Option<f64> {
        self.height.iter().copied().fold(None, |max, h| match max {
            Some(m) if m >= h => Some(m),
            _ => Some(h),
        })
    }

    pub fn ground_range(&self) -> Option<f64> {
        self.x_distance.last().copied()
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    pub fn display_summary(&self) {
        println!("--- Flight Summary ---");
        if self.is_empty() {
            println!("No samples recorded; the object was already on the ground.");
            println!("--- End of Summary ---");
            return;
        }

        println!("Samples: {}", self.len());
        println!(
            "Flight time: {}",
            Self::format_time(self.last_time().unwrap_or(0.0))
        );
        println!("Max height: {:.2} m", self.max_height().unwrap_or(0.0));
        println!(
            "Ground range: {:.2} m",
            self.ground_range().unwrap_or(0.0)
        );
        println!(
            "Final velocity: v_x = {:.2} m/s, v_y = {:.2} m/s",
            self.x_velocity.last().unwrap_or(&0.0),
            self.y_velocity.last().unwrap_or(&0.0)
        );
        println!("--- End of Summary ---");
    }
}
