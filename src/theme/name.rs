//! Theme-name validation.

use std::fmt;

use crate::error::ThemeError;

/// Characters that would escape the themes directory or confuse a shell.
const FORBIDDEN_CHARS: &[char] = &['/', '\\', '.', ':', '*', '?', '"', '<', '>', '|'];

/// A single lowercase word used as the theme's file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeName(String);

impl ThemeName {
    /// Normalize user input into a theme name.
    ///
    /// Input is trimmed and lowercased. Whitespace and path characters are
    /// rejected; any other character outside `[a-z0-9_-]` becomes `_`.
    pub fn parse(input: &str) -> Result<Self, ThemeError> {
        let lowered = input.trim().to_lowercase();
        if lowered.is_empty() {
            return Err(ThemeError::InvalidName("name is empty".to_string()));
        }
        if let Some(bad) = lowered
            .chars()
            .find(|c| c.is_whitespace() || FORBIDDEN_CHARS.contains(c))
        {
            return Err(ThemeError::InvalidName(format!(
                "`{lowered}` contains `{bad}`; use a single word of letters, numbers, hyphens, or underscores"
            )));
        }
        let sanitized = lowered
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        Ok(Self(sanitized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the inspection JSON (`<name>.json`).
    pub fn json_file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
