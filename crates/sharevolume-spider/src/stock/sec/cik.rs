use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// A validated SEC Central Index Key: exactly 10 ASCII digits, leading zeros kept.
///
/// ## Example
/// ```rust
/// use sharevolume_spider::stock::sec::Cik;
///
/// let cik: Cik = " 0000875045 ".parse().unwrap();
/// assert_eq!(cik.as_str(), "0000875045");
/// assert!("875045".parse::<Cik>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cik(String);

impl Cik {
    pub const LEN: usize = 10;

    /// Validate user input; surrounding whitespace is trimmed first.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if is_ten_digit_cik(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ValidationError {
                input: input.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Whether `s` is, as-is, exactly 10 ASCII digits.
pub fn is_ten_digit_cik(s: &str) -> bool {
    s.len() == Cik::LEN && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Cik {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Cik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cik {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ten_digits() {
        assert!(Cik::parse("0000875045").is_ok());
        assert!(Cik::parse("1234567890").is_ok());
    }

    #[test]
    fn rejects_everything_else() {
        for input in ["875045", "00008750450", "abc0008750", "", "000087504５", "0000 75045"] {
            assert_eq!(
                Cik::parse(input),
                Err(ValidationError {
                    input: input.to_string()
                }),
                "{input:?} should fail"
            );
        }
    }

    #[test]
    fn trims_before_validating() {
        assert_eq!(Cik::parse("\t0000875045\n").unwrap().as_str(), "0000875045");
        assert!(!is_ten_digit_cik(" 0000875045"));
    }
}
