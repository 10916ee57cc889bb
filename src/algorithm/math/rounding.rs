/// Round `value` to `decimals` places, ties going towards positive infinity.
///
/// The value is scaled once, rounded on the scaled number and divided back, so
/// `round_half_up(-0.125, 2)` is `-0.12` while `round_half_up(0.125, 2)` is `0.13`.
/// Non-finite values are returned untouched.
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    let floor = scaled.floor();

    // scaled - floor is exact for finite doubles
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };

    rounded / factor
}
