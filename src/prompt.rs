//! Theme generation prompt templating.
//!
//! The user prompt lives in one template file and is rendered with the theme
//! keyword and the schema skeleton.

use std::collections::BTreeMap;

use crate::theme::schema::schema_description;
use crate::theme::ThemeName;

const THEME_PROMPT_TEMPLATE: &str = include_str!("templates/theme_prompt.template");

/// System message sent ahead of every theme request.
pub const SYSTEM_PROMPT: &str = "You are an expert JSON generator. You will be given a schema \
description and a theme keyword. You must return a valid JSON object matching the schema, \
inspired by the keyword. Only output the JSON object, with no surrounding text or markdown.";

/// Render the user prompt asking for a theme inspired by `name`.
pub fn render_theme_prompt(name: &ThemeName) -> String {
    let mut vars = BTreeMap::<&str, String>::new();
    vars.insert("THEME_NAME", name.as_str().to_string());
    vars.insert("SCHEMA_DESCRIPTION", schema_description());

    normalize_blank_lines(&render_template(THEME_PROMPT_TEMPLATE, &vars))
}

fn render_template(template: &str, vars: &BTreeMap<&str, String>) -> String {
    let mut rendered = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("{{{{{key}}}}}");
        rendered = rendered.replace(&placeholder, value);
    }
    rendered
}

fn normalize_blank_lines(text: &str) -> String {
    let mut out = String::new();
    let mut previous_blank = false;

    for line in text.lines() {
        let is_blank = line.trim().is_empty();
        if is_blank && previous_blank {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line.trim_end());
        previous_blank = is_blank;
    }

    out.trim().to_string()
}
