//! Rendering contract and the default terminal renderer.
//!
//! Status output goes to stdout; warnings and errors go to stderr so a
//! failed run stays visible when stdout is redirected.

use crossterm::style::Stylize;

use super::progress::{start_progress, ProgressHandle};
use super::settings;

/// Injectable rendering interface used by orchestration code.
///
/// `Renderer` is the terminal implementation; tests substitute a recording
/// sink.
pub trait RenderSink: Send + Sync {
    /// Render the app/model header line.
    fn header(&self, model: &str);
    /// Render a titled section divider.
    fn section(&self, title: &str);
    /// Render activity/lifecycle text.
    fn activity(&self, text: &str);
    /// Render one key/value field row.
    fn field(&self, key: &str, value: &str);
    /// Render a completed step.
    fn success(&self, text: &str);
    /// Render a multi-line text preview.
    fn preview(&self, text: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
    /// Start a liveness indicator for a long-running step.
    fn progress(&self, label: &str) -> ProgressHandle;
}

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn header_line(&self, model: &str) -> String {
        if self.color {
            format!(
                "{} {}",
                settings::LABEL_APP.with(settings::COLOR_APP_LABEL).bold(),
                model.with(settings::COLOR_MODEL_NAME)
            )
        } else {
            format!("{} ({model})", settings::LABEL_APP)
        }
    }

    fn section_line(&self, title: &str) -> String {
        if self.color {
            format!(
                "{} {}",
                settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
                title.with(settings::COLOR_SECTION_TITLE).bold()
            )
        } else {
            format!("{title}:")
        }
    }

    fn activity_line(&self, text: &str) -> String {
        if self.color {
            format!(
                "{} {}",
                settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
                text.with(settings::COLOR_ACTIVITY_TEXT).bold()
            )
        } else {
            text.to_string()
        }
    }

    fn field_line(&self, key: &str, value: &str) -> String {
        if self.color {
            format!(
                "{}{} {}",
                settings::INDENT_1,
                format!("{key}:").with(settings::COLOR_FIELD_KEY),
                value.with(settings::COLOR_FIELD_VALUE),
            )
        } else {
            format!("{}{key}: {value}", settings::INDENT_1)
        }
    }

    fn success_line(&self, text: &str) -> String {
        if self.color {
            format!(
                "{} {text}",
                settings::GLYPH_SUCCESS.with(settings::COLOR_SUCCESS).bold()
            )
        } else {
            format!("{} {text}", settings::GLYPH_SUCCESS_PLAIN)
        }
    }

    fn preview_lines(&self, text: &str) -> Vec<String> {
        text.lines()
            .map(|line| {
                if self.color {
                    format!(
                        "{}{}",
                        settings::INDENT_1,
                        line.with(settings::COLOR_PREVIEW_TEXT)
                    )
                } else {
                    format!("{}{line}", settings::INDENT_1)
                }
            })
            .collect()
    }

    fn labeled_line(&self, label: &str, color: crossterm::style::Color, msg: &str) -> String {
        if self.color {
            format!("{} {msg}", label.with(color).bold())
        } else {
            format!("{label} {msg}")
        }
    }
}

impl RenderSink for Renderer {
    fn header(&self, model: &str) {
        println!("{}", self.header_line(model));
    }

    fn section(&self, title: &str) {
        println!("{}", self.section_line(title));
    }

    fn activity(&self, text: &str) {
        println!("{}", self.activity_line(text));
    }

    fn field(&self, key: &str, value: &str) {
        println!("{}", self.field_line(key, value));
    }

    fn success(&self, text: &str) {
        println!("{}", self.success_line(text));
    }

    fn preview(&self, text: &str) {
        for line in self.preview_lines(text) {
            println!("{line}");
        }
    }

    fn warn(&self, msg: &str) {
        eprintln!(
            "{}",
            self.labeled_line(settings::LABEL_WARNING, settings::COLOR_WARNING, msg)
        );
    }

    fn error(&self, msg: &str) {
        eprintln!(
            "{}",
            self.labeled_line(settings::LABEL_ERROR, settings::COLOR_ERROR, msg)
        );
    }

    fn progress(&self, label: &str) -> ProgressHandle {
        start_progress(label, self.color)
    }
}
