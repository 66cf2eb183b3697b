use crate::error::ConfigError;
use std::str::FromStr;

/// Locales the share figures can be displayed in.
///
/// Only the digit grouping matters here: figures are always whole numbers of shares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    DeDe,
    FrFr,
    EnIn,
}

impl Locale {
    fn separator(self) -> &'static str {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::EnIn => ",",
            Locale::DeDe => ".",
            Locale::FrFr => "\u{202f}",
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en-us" | "en" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "de-de" | "de" => Ok(Locale::DeDe),
            "fr-fr" | "fr" => Ok(Locale::FrFr),
            "en-in" => Ok(Locale::EnIn),
            _ => Err(ConfigError::Locale(s.to_string())),
        }
    }
}

/// Format a share count with thousands separators and no fractional digits.
///
/// Values are rounded half away from zero before grouping.
///
/// ## Example
/// ```rust
/// use sharevolume_spider::format::{format_shares, Locale};
///
/// assert_eq!(format_shares(146_532_901.6, Locale::EnUs), "146,532,902");
/// assert_eq!(format_shares(146_532_901.0, Locale::DeDe), "146.532.901");
/// ```
pub fn format_shares(value: f64, locale: Locale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_digits(&digits, locale);

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

// insert the separator, walking from the least significant digit
fn group_digits(digits: &str, locale: Locale) -> String {
    let sep = locale.separator();
    let mut groups: Vec<&str> = vec![];
    let mut end = digits.len();

    // first group is always 3 digits; en-IN continues in 2s (lakh, crore)
    let mut size = 3;
    while end > size {
        groups.push(&digits[end - size..end]);
        end -= size;
        if locale == Locale::EnIn {
            size = 2;
        }
    }
    groups.push(&digits[..end]);

    groups.reverse();
    groups.join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_shares(0.0, Locale::EnUs), "0");
        assert_eq!(format_shares(999.0, Locale::EnUs), "999");
        assert_eq!(format_shares(1_000.0, Locale::EnUs), "1,000");
        assert_eq!(format_shares(1_545_912_443.0, Locale::EnUs), "1,545,912,443");
        assert_eq!(format_shares(1_545_912_443.0, Locale::FrFr), "1\u{202f}545\u{202f}912\u{202f}443");
    }

    #[test]
    fn groups_lakh_and_crore() {
        assert_eq!(format_shares(1_545_912_443.0, Locale::EnIn), "1,54,59,12,443");
        assert_eq!(format_shares(100_000.0, Locale::EnIn), "1,00,000");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_shares(1_234.5, Locale::EnUs), "1,235");
        assert_eq!(format_shares(-1_234.5, Locale::EnUs), "-1,235");
        assert_eq!(format_shares(-0.4, Locale::EnUs), "0");
    }

    #[test]
    fn parses_locales() {
        assert_eq!("de_DE".parse::<Locale>(), Ok(Locale::DeDe));
        assert_eq!("EN-in".parse::<Locale>(), Ok(Locale::EnIn));
        assert!("xx-YY".parse::<Locale>().is_err());
    }
}
