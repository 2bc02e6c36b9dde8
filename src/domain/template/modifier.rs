//! Format modifiers applied at substitution time (`{{name:modifier}}`).

/// A parsed modifier name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier<'a> {
    Uppercase,
    Lowercase,
    /// Reparse as a number and print its shortest form
    Number,
    /// `date(<pattern>)`; accepted but not applied yet
    Date(&'a str),
    /// Anything else, passed through unchanged
    Unknown(&'a str),
}

impl<'a> Modifier<'a> {
    pub fn parse(name: &'a str) -> Self {
        match name {
            "uppercase" => Modifier::Uppercase,
            "lowercase" => Modifier::Lowercase,
            "number" => Modifier::Number,
            _ => match name.strip_prefix("date(").and_then(|n| n.strip_suffix(')')) {
                Some(pattern) => Modifier::Date(pattern),
                None => Modifier::Unknown(name),
            },
        }
    }

    pub fn apply(&self, value: String) -> String {
        match self {
            Modifier::Uppercase => value.to_uppercase(),
            Modifier::Lowercase => value.to_lowercase(),
            Modifier::Number => format_number(parse_number_prefix(&value)),
            // TODO: format the current date with the pattern once merchants can pick a locale
            Modifier::Date(_) => value,
            Modifier::Unknown(_) => value,
        }
    }
}

/// Parse the longest numeric prefix of `input`, after leading whitespace.
///
/// Returns NaN when there is no numeric prefix at all, so `"12px"` is 12 and
/// `"$12"` is NaN. `Infinity` (optionally signed) is recognised.
pub fn parse_number_prefix(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Print a number in its shortest form (`25.50` → `"25.5"`, `3.0` → `"3"`).
///
/// Very large and very small magnitudes use exponent notation (`1e+21`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modifier_names() {
        assert_eq!(Modifier::parse("uppercase"), Modifier::Uppercase);
        assert_eq!(Modifier::parse("lowercase"), Modifier::Lowercase);
        assert_eq!(Modifier::parse("number"), Modifier::Number);
        assert_eq!(Modifier::parse("date(YYYY-MM)"), Modifier::Date("YYYY-MM"));
        assert_eq!(Modifier::parse("Uppercase"), Modifier::Unknown("Uppercase"));
        assert_eq!(Modifier::parse("date"), Modifier::Unknown("date"));
    }

    #[test]
    fn test_case_modifiers() {
        assert_eq!(Modifier::Uppercase.apply("Summer Sale".to_string()), "SUMMER SALE");
        assert_eq!(Modifier::Lowercase.apply("Summer Sale".to_string()), "summer sale");
    }

    #[test]
    fn test_passthrough_modifiers() {
        assert_eq!(Modifier::Date("Y").apply("2024".to_string()), "2024");
        assert_eq!(Modifier::Unknown("shout").apply("Hi".to_string()), "Hi");
    }

    #[test]
    fn test_number_modifier() {
        assert_eq!(Modifier::Number.apply("25.50".to_string()), "25.5");
        assert_eq!(Modifier::Number.apply("007".to_string()), "7");
        assert_eq!(Modifier::Number.apply("12px".to_string()), "12");
        assert_eq!(Modifier::Number.apply("$12.00".to_string()), "NaN");
        assert_eq!(Modifier::Number.apply("".to_string()), "NaN");
    }

    #[test]
    fn test_parse_number_prefix() {
        assert_eq!(parse_number_prefix("  42"), 42.0);
        assert_eq!(parse_number_prefix("-3.5abc"), -3.5);
        assert_eq!(parse_number_prefix(".5"), 0.5);
        assert_eq!(parse_number_prefix("5."), 5.0);
        assert_eq!(parse_number_prefix("1e3"), 1000.0);
        assert_eq!(parse_number_prefix("1e"), 1.0);
        assert_eq!(parse_number_prefix("2E-2x"), 0.02);
        assert_eq!(parse_number_prefix("Infinity"), f64::INFINITY);
        assert_eq!(parse_number_prefix("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number_prefix(".").is_nan());
        assert!(parse_number_prefix("-").is_nan());
        assert!(parse_number_prefix("abc").is_nan());
        assert!(parse_number_prefix("").is_nan());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(25.0), "25");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(-12.75), "-12.75");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
