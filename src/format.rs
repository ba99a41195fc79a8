//! Display formatting for axis ticks and tooltips.

const THOUSAND: f64 = 1e3;
const MILLION: f64 = 1e6;
const BILLION: f64 = 1e9;
const TRILLION: f64 = 1e12;

const SUFFIXES: [(f64, &str); 4] = [
    (TRILLION, "T"),
    (BILLION, "B"),
    (MILLION, "MM"),
    (THOUSAND, "K"),
];

/// Abbreviate a number with a magnitude suffix.
///
/// The suffix is chosen by absolute value, the value is divided by the
/// suffix magnitude and then rounded half away from zero. The sign is kept,
/// so `-2_500` renders as `-3K`. Values that round across a suffix boundary
/// keep the smaller suffix (`999_600` renders as `1000K`).
///
/// ```rust
/// use worldstats_plot::format_magnitude;
///
/// assert_eq!(format_magnitude(999.0), "999");
/// assert_eq!(format_magnitude(1_500.0), "2K");
/// assert_eq!(format_magnitude(2_500_000.0), "3MM");
/// assert_eq!(format_magnitude(1e9), "1B");
/// assert_eq!(format_magnitude(1e12), "1T");
/// ```
pub fn format_magnitude(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs();
    let (divisor, suffix) = SUFFIXES
        .iter()
        .copied()
        .find(|(threshold, _)| magnitude >= *threshold)
        .unwrap_or((1.0, ""));
    let rounded = (magnitude / divisor).round();
    let sign = if value < 0.0 && rounded != 0.0 { "-" } else { "" };
    format!("{sign}{rounded:.0}{suffix}")
}

/// Round to the nearest integer, half away from zero.
pub fn format_round(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round();
    // Avoid printing "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.0}")
}

/// Format with at most `digits` fractional digits, trimming trailing zeros.
pub fn format_decimal(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let text = format!("{value:.digits$}");
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    };
    if text == "-0" { "0".to_string() } else { text }
}

/// Plain text of a number, as used when no tick formatter is configured.
pub fn format_plain(value: f64) -> String {
    value.to_string()
}

/// Tooltip text for one data point: label, year and value.
///
/// Missing values render as `no data`.
pub fn format_datum_text(label: &str, year: i32, value: Option<f64>, unit: Option<&str>) -> String {
    match (value, unit) {
        (Some(value), Some(unit)) if !unit.is_empty() => {
            format!("{label} {year}: {} {unit}", format_decimal(value, 2))
        }
        (Some(value), _) => format!("{label} {year}: {}", format_decimal(value, 2)),
        (None, _) => format!("{label} {year}: no data"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_suffixes() {
        assert_eq!(format_magnitude(999.0), "999");
        assert_eq!(format_magnitude(1_500.0), "2K");
        assert_eq!(format_magnitude(2_500_000.0), "3MM");
        assert_eq!(format_magnitude(1_000_000_000.0), "1B");
        assert_eq!(format_magnitude(1_000_000_000_000.0), "1T");
        assert_eq!(format_magnitude(4_321_000_000_000_000.0), "4321T");
    }

    #[test]
    fn magnitude_handles_zero_and_negatives() {
        assert_eq!(format_magnitude(0.0), "0");
        assert_eq!(format_magnitude(-0.4), "0");
        assert_eq!(format_magnitude(-2_500.0), "-3K");
        assert_eq!(format_magnitude(-12.5), "-13");
        assert_eq!(format_magnitude(f64::NAN), "NaN");
    }

    #[test]
    fn magnitude_divides_before_rounding() {
        assert_eq!(format_magnitude(999_600.0), "1000K");
        assert_eq!(format_magnitude(1_449.0), "1K");
        assert_eq!(format_magnitude(999.5), "1000");
    }

    #[test]
    fn round_and_decimal() {
        assert_eq!(format_round(1987.5), "1988");
        assert_eq!(format_round(-0.2), "0");
        assert_eq!(format_decimal(72.5, 2), "72.5");
        assert_eq!(format_decimal(72.0, 2), "72");
        assert_eq!(format_decimal(72.457, 2), "72.46");
        assert_eq!(format_plain(1960.0), "1960");
    }

    #[test]
    fn datum_text() {
        assert_eq!(
            format_datum_text("Germany", 1990, Some(75.26), Some("years")),
            "Germany 1990: 75.26 years"
        );
        assert_eq!(format_datum_text("Chad", 1960, None, Some("years")), "Chad 1960: no data");
        assert_eq!(format_datum_text("Chad", 1961, Some(40.0), None), "Chad 1961: 40");
    }
}
