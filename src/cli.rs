//! CLI argument parsing via clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use vibejam::config::{Config, ElevationPolicy, OverwritePolicy};

/// Generate a Ghostty terminal theme from one word using an
/// OpenAI-compatible API.
#[derive(Debug, Parser)]
#[command(name = "vibejam", version)]
pub struct Args {
    /// Theme name (one word). Prompted for when omitted.
    pub name: Option<String>,

    /// Path to config file (default: ./vibejam.toml or ~/.config/vibejam/vibejam.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override model name.
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,

    /// Override API base URL.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Ghostty themes directory to install into.
    #[arg(long = "install-dir", value_name = "DIR")]
    pub install_dir: Option<PathBuf>,

    /// Directory for the inspection JSON copy.
    #[arg(long = "json-dir", value_name = "DIR")]
    pub json_dir: Option<PathBuf>,

    /// Generate and report, but write nothing.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Refuse to overwrite existing theme files.
    #[arg(long = "keep-existing")]
    pub keep_existing: bool,

    /// Whether to retry a denied install with sudo.
    #[arg(long = "sudo", value_name = "ask|always|never")]
    pub sudo: Option<ElevationPolicy>,

    /// Print the default vibejam.toml and exit.
    #[arg(long = "print-default-config")]
    pub print_default_config: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Layer command-line overrides on top of loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(model) = &self.model {
            config.api.model = model.clone();
        }
        if let Some(url) = &self.base_url {
            config.api.base_url = url.clone();
        }
        if let Some(dir) = &self.install_dir {
            config.install.target_dir = dir.clone();
        }
        if let Some(dir) = &self.json_dir {
            config.install.json_dir = dir.clone();
        }
        if self.dry_run {
            config.install.dry_run = true;
        }
        if self.keep_existing {
            config.install.overwrite = OverwritePolicy::Keep;
        }
        if let Some(policy) = self.sudo {
            config.install.elevation = policy;
        }
        if self.no_color {
            config.display.color = false;
        }
    }
}
