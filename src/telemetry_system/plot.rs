const PLOT_WIDTH: usize = 72;
const PLOT_HEIGHT: usize = 20;

/// Render two equal-length sequences as a labeled ASCII line chart.
///
/// Mismatched or empty input renders a placeholder rather than failing;
/// plotting is a sink, it never aborts a finished simulation.
pub fn render(x: &[f64], y: &[f64], title: &str) -> String {
    if x.is_empty() || x.len() != y.len() {
        return format!("{}\n(no data to plot)\n", title);
    }

    let (x_min, x_max) = bounds(x);
    let (y_min, y_max) = bounds(y);
    let x_span = span(x_min, x_max);
    let y_span = span(y_min, y_max);

    let mut grid = vec![vec![' '; PLOT_WIDTH]; PLOT_HEIGHT];
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let col = ((xi - x_min) / x_span * (PLOT_WIDTH - 1) as f64).round() as usize;
        let row = ((yi - y_min) / y_span * (PLOT_HEIGHT - 1) as f64).round() as usize;
        // Row 0 is the top of the chart
        grid[PLOT_HEIGHT - 1 - row][col] = '*';
    }

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    for (i, row) in grid.iter().enumerate() {
        let label = if i == 0 {
            format!("{:>8.2} |", y_max)
        } else if i == PLOT_HEIGHT - 1 {
            format!("{:>8.2} |", y_min)
        } else {
            format!("{:>8} |", "")
        };
        out.push_str(&label);
        out.extend(row.iter());
        out.push('\n');
    }
    out.push_str(&format!("{:>8} +{}\n", "", "-".repeat(PLOT_WIDTH)));
    out.push_str(&format!(
        "{:>8}  {:<.2}{:>width$.2}\n",
        "",
        x_min,
        x_max,
        width = PLOT_WIDTH.saturating_sub(format!("{:.2}", x_min).len())
    ));

    out
}

/// Print an x/y line chart to stdout.
pub fn plot_xy(x: &[f64], y: &[f64], title: &str) {
    print!("{}", render(x, y, title));
}

fn bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

fn span(min: f64, max: f64) -> f64 {
    if max > min {
        max - min
    } else {
        1.0 // flat series, avoid dividing by zero
    }
}
