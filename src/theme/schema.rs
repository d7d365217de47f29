//! The Ghostty theme schema enforced on generated themes.

use super::{ThemeSpec, PALETTE_KEY, PALETTE_SIZE};
use crate::error::ThemeError;

/// Top-level color keys every generated theme must define.
pub const REQUIRED_COLOR_KEYS: [&str; 5] = [
    "background",
    "foreground",
    "cursor-color",
    "selection-background",
    "selection-foreground",
];

/// Top-level color keys Ghostty accepts but the generator does not require.
pub const OPTIONAL_COLOR_KEYS: [&str; 1] = ["cursor-text"];

/// Intended role of each palette slot, shown to the model.
pub const PALETTE_ROLES: [&str; PALETTE_SIZE as usize] = [
    "background dark",
    "red - error",
    "green - success",
    "yellow - warning",
    "blue - info",
    "magenta - accent",
    "cyan - alt background",
    "white - foreground light",
    "bright black - UI muted",
    "bright red - highlights",
    "bright green",
    "bright yellow",
    "bright blue",
    "bright magenta",
    "bright cyan",
    "bright white",
];

/// Check that `spec` is a complete Ghostty theme.
///
/// Unknown keys are reported before missing ones; all missing keys are
/// listed together.
pub fn validate(spec: &ThemeSpec) -> Result<(), ThemeError> {
    if let Some((key, _)) = spec.colors().find(|(key, _)| !is_known_color_key(key)) {
        return Err(ThemeError::UnknownKey(key.to_string()));
    }

    let mut missing: Vec<String> = (0..PALETTE_SIZE)
        .filter(|index| spec.palette_slot(*index).is_none())
        .map(|index| format!("{PALETTE_KEY}.{index}"))
        .collect();
    missing.extend(
        REQUIRED_COLOR_KEYS
            .iter()
            .filter(|key| spec.get(key).is_none())
            .map(|key| key.to_string()),
    );

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ThemeError::MissingKeys(missing))
    }
}

fn is_known_color_key(key: &str) -> bool {
    REQUIRED_COLOR_KEYS.contains(&key) || OPTIONAL_COLOR_KEYS.contains(&key)
}

/// JSON skeleton describing the schema, embedded in the generation prompt.
pub fn schema_description() -> String {
    let mut out = String::from("{\n  \"palette\": {\n");
    for (index, role) in PALETTE_ROLES.iter().enumerate() {
        let comma = if index + 1 < PALETTE_ROLES.len() { "," } else { "" };
        out.push_str(&format!(
            "    \"{index}\": \"HEX_COLOR_STRING\"{comma}  // {role}\n"
        ));
    }
    out.push_str("  },\n");
    for (index, key) in REQUIRED_COLOR_KEYS.iter().enumerate() {
        let comma = if index + 1 < REQUIRED_COLOR_KEYS.len() { "," } else { "" };
        out.push_str(&format!("  \"{key}\": \"HEX_COLOR_STRING\"{comma}\n"));
    }
    out.push('}');
    out
}
