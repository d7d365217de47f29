//! Ghostty theme data model.
//!
//! A [`ThemeSpec`] holds the 16 ANSI palette slots plus named top-level colors
//! in the order they were produced. It serializes to the nested JSON shape
//! used for the inspection file and flattens to Ghostty's `key = value`
//! config format via [`to_ghostty_conf`].

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::ThemeError;

mod color;
mod flatten;
mod name;
pub mod schema;

pub use color::HexColor;
pub use flatten::to_ghostty_conf;
pub use name::ThemeName;

/// JSON key holding the palette object.
pub const PALETTE_KEY: &str = "palette";
/// Number of ANSI palette slots.
pub const PALETTE_SIZE: u8 = 16;

/// One generated terminal theme.
///
/// Equality compares contents; use [`ThemeSpec::colors`] to compare ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSpec {
    palette: BTreeMap<u8, HexColor>,
    colors: IndexMap<String, HexColor>,
}

impl ThemeSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set palette slot `index` (0-15).
    pub fn set_palette(&mut self, index: u8, color: HexColor) -> Result<(), ThemeError> {
        if index >= PALETTE_SIZE {
            return Err(ThemeError::InvalidPaletteIndex(index.to_string()));
        }
        if self.palette.contains_key(&index) {
            return Err(ThemeError::DuplicateKey(format!("{PALETTE_KEY}.{index}")));
        }
        self.palette.insert(index, color);
        Ok(())
    }

    /// Append a top-level color key. Keys keep insertion order.
    pub fn insert(&mut self, key: impl Into<String>, color: HexColor) -> Result<(), ThemeError> {
        let key = key.into();
        if key.trim().is_empty() || key == PALETTE_KEY {
            return Err(ThemeError::UnknownKey(key));
        }
        if self.colors.contains_key(&key) {
            return Err(ThemeError::DuplicateKey(key));
        }
        self.colors.insert(key, color);
        Ok(())
    }

    /// Builder form of [`ThemeSpec::insert`] that parses the color literal.
    pub fn with_color(mut self, key: &str, value: &str) -> Result<Self, ThemeError> {
        let color = HexColor::parse_for(key, value)?;
        self.insert(key, color)?;
        Ok(self)
    }

    /// Builder form of [`ThemeSpec::set_palette`].
    pub fn with_palette(mut self, index: u8, value: &str) -> Result<Self, ThemeError> {
        let color = HexColor::parse_for(&format!("{PALETTE_KEY}.{index}"), value)?;
        self.set_palette(index, color)?;
        Ok(self)
    }

    /// Palette slots in index order.
    pub fn palette(&self) -> impl Iterator<Item = (u8, &HexColor)> {
        self.palette.iter().map(|(index, color)| (*index, color))
    }

    /// Top-level colors in insertion order.
    pub fn colors(&self) -> impl Iterator<Item = (&str, &HexColor)> {
        self.colors.iter().map(|(key, color)| (key.as_str(), color))
    }

    pub fn palette_slot(&self, index: u8) -> Option<&HexColor> {
        self.palette.get(&index)
    }

    pub fn get(&self, key: &str) -> Option<&HexColor> {
        self.colors.get(key)
    }

    /// Number of keys: palette slots plus top-level colors.
    pub fn len(&self) -> usize {
        self.palette.len() + self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a theme from parsed JSON.
    ///
    /// The palette may be an object keyed by slot index or an array of 16
    /// entries. Every other member must be a color string.
    pub fn from_json_value(value: Value) -> Result<Self, ThemeError> {
        let Value::Object(map) = value else {
            return Err(ThemeError::NotAnObject(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        };

        let mut spec = Self::new();
        for (key, member) in map {
            if key == PALETTE_KEY {
                spec.read_palette(member)?;
                continue;
            }
            let Value::String(text) = member else {
                return Err(ThemeError::InvalidColor {
                    key: Some(key),
                    value: member.to_string(),
                });
            };
            let color = HexColor::parse_for(&key, &text)?;
            spec.insert(key, color)?;
        }
        Ok(spec)
    }

    fn read_palette(&mut self, palette: Value) -> Result<(), ThemeError> {
        let entries: Vec<(String, Value)> = match palette {
            Value::Object(map) => map.into_iter().collect(),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect(),
            other => {
                return Err(ThemeError::NotAnObject(format!(
                    "`{PALETTE_KEY}` must be an object or array, got {}",
                    json_kind(&other)
                )))
            }
        };

        for (raw_index, member) in entries {
            let index = raw_index
                .trim()
                .parse::<u8>()
                .map_err(|_| ThemeError::InvalidPaletteIndex(raw_index.clone()))?;
            let slot_key = format!("{PALETTE_KEY}.{raw_index}");
            let Value::String(text) = member else {
                return Err(ThemeError::InvalidColor {
                    key: Some(slot_key),
                    value: member.to_string(),
                });
            };
            let color = HexColor::parse_for(&slot_key, &text)?;
            self.set_palette(index, color)?;
        }
        Ok(())
    }

    /// Pretty JSON (two-space indent, trailing newline) for the inspection file.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

struct PaletteView<'a>(&'a BTreeMap<u8, HexColor>);

impl Serialize for PaletteView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (index, color) in self.0 {
            map.serialize_entry(&index.to_string(), color)?;
        }
        map.end()
    }
}

impl Serialize for ThemeSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let palette_entry = usize::from(!self.palette.is_empty());
        let mut map = serializer.serialize_map(Some(palette_entry + self.colors.len()))?;
        if !self.palette.is_empty() {
            map.serialize_entry(PALETTE_KEY, &PaletteView(&self.palette))?;
        }
        for (key, color) in &self.colors {
            map.serialize_entry(key, color)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ThemeSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json_value(value).map_err(D::Error::custom)
    }
}
