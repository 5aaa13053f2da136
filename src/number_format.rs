//! Number Formatting
//!
//! Brazilian Portuguese price rendering: `.` groups thousands, `,` separates
//! decimals, always two fractional digits.

const THOUSANDS_SEP: char = '.';
const DECIMAL_SEP: char = ',';

/// Format `value` like `toLocaleString("pt-BR")` with exactly two decimals.
///
/// Rounds half away from zero on the exact binary value, so `0.125` gives
/// `0,13` while `2.675` (stored just below) gives `2,67`.
pub fn format_pt_br(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let magnitude = value.abs();
    let fixed = match half_cent_tie(magnitude) {
        Some(cents) => format!("{}.{:02}", cents / 100, cents % 100),
        None => format!("{:.2}", magnitude),
    };
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };

    format!("{}{}{}{}", sign, group_thousands(int_part), DECIMAL_SEP, frac_part)
}

/// Cents for `x` when it sits exactly halfway between two cents, rounded up.
/// `{:.2}` would send these to the even neighbour.
fn half_cent_tie(x: f64) -> Option<u64> {
    let doubled = x * 200.0;
    // Above 2^53 half-cents no double has a fractional half-cent
    if doubled >= 9_007_199_254_740_992.0 || doubled.fract() != 0.0 {
        return None;
    }
    // The product above may itself have rounded; the fused residual is exact
    if x.mul_add(200.0, -doubled) != 0.0 {
        return None;
    }
    let half_cents = doubled as u64;
    (half_cents % 2 == 1).then(|| (half_cents + 1) / 2)
}

/// Ungrouped rendering with a decimal comma ("1234,56", "1500")
pub fn format_plain(value: f64) -> String {
    value.to_string().replacen('.', ",", 1)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSANDS_SEP);
        }
        out.push(c);
    }
    out
}

/// Extract the numeric value of a price label.
///
/// Keeps only digits and commas, turns the first comma into a decimal point
/// and reads the leading number. Labels without digits yield NaN.
pub fn parse_price(text: &str) -> f64 {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == DECIMAL_SEP)
        .collect();
    leading_number(&kept.replacen(DECIMAL_SEP, ".", 1))
}

fn leading_number(s: &str) -> f64 {
    let bytes = s.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    let candidate = s[..end].trim_end_matches('.');
    if !candidate.bytes().any(|b| b.is_ascii_digit()) {
        return f64::NAN;
    }
    candidate.parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_groups_and_decimals() {
        assert_eq!(format_pt_br(0.0), "0,00");
        assert_eq!(format_pt_br(7.5), "7,50");
        assert_eq!(format_pt_br(999.0), "999,00");
        assert_eq!(format_pt_br(1234.56), "1.234,56");
        assert_eq!(format_pt_br(1234567.891), "1.234.567,89");
        assert_eq!(format_pt_br(999.999), "1.000,00");
        assert_eq!(format_pt_br(-5.5), "-5,50");
    }

    #[test]
    fn test_format_rounds_half_cents_away_from_zero() {
        assert_eq!(format_pt_br(0.125), "0,13");
        assert_eq!(format_pt_br(1234.125), "1.234,13");
        assert_eq!(format_pt_br(-0.125), "-0,13");
        assert_eq!(format_pt_br(0.375), "0,38");
        assert_eq!(format_pt_br(0.5), "0,50");
    }

    #[test]
    fn test_format_near_ties_follow_stored_value() {
        // Stored slightly below the half cent
        assert_eq!(format_pt_br(2.675), "2,67");
        assert_eq!(format_pt_br(1.005), "1,00");
        // Stored slightly above
        assert_eq!(format_pt_br(999.995), "1.000,00");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_pt_br(f64::NAN), "NaN");
        assert_eq!(format_pt_br(f64::INFINITY), "∞");
        assert_eq!(format_pt_br(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(1234.56), "1234,56");
        assert_eq!(format_plain(1500.0), "1500");
    }

    #[test]
    fn test_parse_brazilian_price() {
        assert_eq!(parse_price("R$ 1.234,56"), 1234.56);
        assert_eq!(parse_price("R$ 99"), 99.0);
        assert_eq!(parse_price("por apenas R$ 4.999,00 à vista"), 4999.0);
        assert_eq!(parse_price(",50"), 0.5);
    }

    #[test]
    fn test_parse_only_first_comma_is_decimal() {
        assert_eq!(parse_price("12,34,56"), 12.34);
    }

    #[test]
    fn test_parse_without_digits_is_nan() {
        assert!(parse_price("").is_nan());
        assert!(parse_price("Consulte").is_nan());
        assert!(parse_price(",").is_nan());
    }
}
