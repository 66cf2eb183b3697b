use sharevolume_spider::stock::sec::{is_ten_digit_cik, Cik};
use std::fmt;

/// Query parameter carrying the CIK.
pub const CIK_PARAM: &str = "CIK";

/// Where the viewer is: an ordered set of query parameters, e.g. `?CIK=0000875045`.
///
/// Updated in place as the user looks companies up, so the current view can always be reopened
/// with `sharevolume view --location '<query>'`. Values are kept verbatim; nothing is
/// percent-decoded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    params: Vec<(String, String)>,
}

impl Location {
    /// Parse a query string, with or without its leading `?`.
    ///
    /// ## Example
    /// ```rust
    /// use sharevolume_tui::location::Location;
    ///
    /// let location = Location::parse("?CIK=0000875045&theme=dark");
    /// assert_eq!(location.get("CIK"), Some("0000875045"));
    /// assert_eq!(location.to_string(), "?CIK=0000875045&theme=dark");
    /// ```
    pub fn parse(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, val)) => (key.to_string(), val.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect();
        Self { params }
    }

    /// First value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key` to `val`, replacing the first existing value and dropping any duplicates.
    pub fn set(&mut self, key: &str, val: &str) {
        let mut seen = false;
        self.params.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            *v = val.to_string();
            true
        });
        if !seen {
            self.params.push((key.to_string(), val.to_string()));
        }
    }

    /// The CIK parameter, only when it is exactly 10 digits.
    pub fn cik(&self) -> Option<Cik> {
        self.get(CIK_PARAM)
            .filter(|cik| is_ten_digit_cik(cik))
            .and_then(|cik| Cik::parse(cik).ok())
    }

    pub fn set_cik(&mut self, cik: &Cik) {
        self.set(CIK_PARAM, cik.as_str());
    }

    /// The command that reopens the viewer here.
    pub fn command(&self) -> String {
        if self.params.is_empty() {
            "sharevolume view".to_string()
        } else {
            format!("sharevolume view --location '{self}'")
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, val)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={val}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_cik_only_when_valid() {
        assert_eq!(
            Location::parse("?CIK=0000875045").cik().map(|c| c.to_string()),
            Some("0000875045".to_string())
        );
        assert_eq!(Location::parse("?CIK=875045").cik(), None);
        assert_eq!(Location::parse("?CIK= 0000875045").cik(), None);
        assert_eq!(Location::parse("?cik=0000875045").cik(), None);
        assert_eq!(Location::parse("").cik(), None);
    }

    #[test]
    fn sets_in_place() {
        let mut location = Location::parse("a=1&CIK=123&b=2&CIK=456");
        location.set_cik(&Cik::parse("0000320193").unwrap());
        assert_eq!(location.to_string(), "?a=1&CIK=0000320193&b=2");

        let mut location = Location::default();
        location.set("CIK", "0000875045");
        assert_eq!(location.to_string(), "?CIK=0000875045");
    }

    #[test]
    fn builds_reopen_command() {
        assert_eq!(Location::default().command(), "sharevolume view");
        // `--cik` builds its location the same way
        assert_eq!(
            Location::parse("CIK=0000875045").command(),
            "sharevolume view --location '?CIK=0000875045'"
        );
    }
}
