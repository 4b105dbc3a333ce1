/// Placeholder for a bucket that was never attempted.
pub const NO_ATTEMPTS: &str = "--";

/// Enough places to hold the full decimal expansion of any `f64`.
const EXACT_PLACES: usize = 1100;

/// One decimal place, the readout used by most gauges.
#[must_use]
pub fn one_decimal(value: f64) -> String {
    fixed(value, 1)
}

/// Two decimals with an explicit `+` for zero and positive values.
#[must_use]
pub fn signed_two_decimals(value: f64) -> String {
    let value = without_negative_zero(value);
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{}", fixed(value, 2))
}

/// Fixed places where an exact tie rounds away from zero, as browsers do,
/// rather than to even.
fn fixed(value: f64, places: usize) -> String {
    let value = without_negative_zero(value);
    if value.is_finite() && is_exact_tie(value, places) {
        // next representable magnitude up, strictly past the tie
        let away = f64::from_bits(value.to_bits() + 1);
        return format!("{away:.places$}");
    }
    format!("{value:.places$}")
}

fn is_exact_tie(value: f64, places: usize) -> bool {
    let exact = format!("{:.*}", EXACT_PLACES, value.abs());
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };
    let rest = &fraction[places..];
    rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0')
}

fn without_negative_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Shortest form of a goal threshold: `32`, `31.8`. Always plain decimal,
/// never exponent form (`0.0000001`, not `1e-7`).
#[must_use]
pub fn goal_number(value: f64) -> String {
    format!("{value}")
}

/// Table cell for one make-percentage: `"66.7%"`, or `--` when nothing was attempted.
/// Plain decimal like [`goal_number`].
#[must_use]
pub fn make_pct_cell(pct: f64, attempts: u32) -> String {
    if attempts > 0 {
        format!("{pct}%")
    } else {
        NO_ATTEMPTS.to_string()
    }
}
