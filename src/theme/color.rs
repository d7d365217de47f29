//! `#RRGGBB` color literals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

/// A six-digit hex color literal such as `#1e1e2e`.
///
/// The original spelling (including digit case) is preserved so the installed
/// theme matches what the model produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse a `#RRGGBB` literal.
    pub fn parse(value: &str) -> Result<Self, ThemeError> {
        parse_with_key(value, None)
    }

    /// Parse a literal, naming `key` in the error on failure.
    pub fn parse_for(key: &str, value: &str) -> Result<Self, ThemeError> {
        parse_with_key(value, Some(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn parse_with_key(value: &str, key: Option<&str>) -> Result<HexColor, ThemeError> {
    let trimmed = value.trim();
    let valid = trimmed
        .strip_prefix('#')
        .is_some_and(|digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()));
    if !valid {
        return Err(ThemeError::InvalidColor {
            key: key.map(str::to_string),
            value: value.to_string(),
        });
    }
    Ok(HexColor(trimmed.to_string()))
}

impl FromStr for HexColor {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
