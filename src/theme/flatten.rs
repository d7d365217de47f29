//! Conversion to Ghostty's flat `key = value` theme format.

use super::{ThemeSpec, PALETTE_KEY};

/// Render `spec` as a Ghostty theme file.
///
/// Palette slots come first in index order (`palette = N=#hex`), followed by
/// the top-level colors in insertion order. Every line, including the last,
/// ends with `\n`; an empty theme renders as an empty string.
pub fn to_ghostty_conf(spec: &ThemeSpec) -> String {
    let mut out = String::new();
    for (index, color) in spec.palette() {
        out.push_str(&format!("{PALETTE_KEY} = {index}={color}\n"));
    }
    for (key, color) in spec.colors() {
        out.push_str(&format!("{key} = {color}\n"));
    }
    out
}
