use super::errors::InquiryError;
use regex::Regex;
use std::{fmt, str::FromStr};

pub const CLIENT_ID_LEN: usize = 10;

/// Exactly ten ASCII digits. Unicode digits are rejected on purpose.
#[must_use]
pub fn validate_client_id(id: &str) -> bool {
    Regex::new(r"^[0-9]{10}$").map_or(false, |re| re.is_match(id))
}

/// Input filter applied while the user types: drop non-digits, keep at most ten.
#[must_use]
pub fn filter_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(CLIENT_ID_LEN)
        .collect()
}

/// A validated client identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(String);

impl ClientId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ClientId {
    type Err = InquiryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if validate_client_id(id) {
            Ok(Self(id.to_string()))
        } else {
            Err(InquiryError::Validation)
        }
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
