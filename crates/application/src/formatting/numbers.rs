/// Rounds to `precision` decimals by shifting the decimal exponent instead of
/// multiplying, so `round_to(1.005, 2)` is `1.01` and not `1.0`.
///
/// Halves round towards positive infinity: `round_to(-1.005, 2)` is `-1.0`.
pub fn round_to(value: f64, precision: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let shifted = format!("{}e{}", value, precision)
        .parse::<f64>()
        .unwrap_or_else(|_| value * 10f64.powi(precision));
    let rounded = (shifted + 0.5).floor();

    format!("{}e{}", rounded, -precision)
        .parse::<f64>()
        .unwrap_or_else(|_| rounded / 10f64.powi(precision))
}

/// Share of `number` in `amount` as a percentage with two decimals; `0` unless both are positive.
pub fn get_percent(amount: f64, number: f64) -> f64 {
    if amount > 0.0 && number > 0.0 {
        return round_to(100.0 * number / amount, 2);
    }
    0.0
}

pub fn seconds_to_milliseconds(seconds: Option<u64>) -> Option<u64> {
    seconds.map(|s| s.saturating_mul(1000))
}
