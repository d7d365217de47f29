//! vibejam: generate Ghostty terminal themes with an OpenAI-compatible API.
//!
//! A one-word theme name is sent to a chat-completion model, which answers
//! with a JSON theme. The theme is validated, saved as JSON for inspection,
//! flattened to Ghostty's `key = value` format, and installed into the
//! Ghostty themes directory (retrying with sudo when the write is denied).
//!
//! # Quick start
//!
//! ```no_run
//! use std::time::Duration;
//! use vibejam::api::ApiClient;
//! use vibejam::config::load_config;
//! use vibejam::generator::{ModelThemeGenerator, ThemeGenerator};
//! use vibejam::install::{DeclineElevation, Installer};
//! use vibejam::theme::ThemeName;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(None)?;
//! config.validate_for_generation()?;
//! let client = ApiClient::new(&config.api, Duration::from_secs(120));
//! let generator = ModelThemeGenerator::new(client, &config.api);
//! let name = ThemeName::parse("vaporwave")?;
//! let spec = generator.generate(&name).await?;
//! let installer = Installer::new(config.install.clone(), Box::new(DeclineElevation));
//! let report = installer.install(&name, &spec).await?;
//! println!("installed: {:?}", report.installed);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod generator;
pub mod install;
pub mod logging;
pub mod prompt;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
pub mod types;
pub mod ui;
