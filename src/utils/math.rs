/// Sign of `v` with the convention sign(0) = 0.
///
/// `f64::signum` returns 1.0 for 0.0, which would make a resting object feel
/// a drag force, so the drag model cannot use it.
pub fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
