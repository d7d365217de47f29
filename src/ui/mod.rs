//! Terminal-facing UI: rendering, progress, and line input.
//!
//! Orchestration code depends on [`RenderSink`] and the input helpers here
//! rather than writing to the terminal directly.

pub mod input;
pub mod progress;
pub mod render;
pub mod settings;

pub use input::{confirm, read_theme_name, TerminalElevationPrompt};
pub use progress::ProgressHandle;
pub use render::{RenderSink, Renderer};
