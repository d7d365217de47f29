//! Run orchestration: name, generate, install, report.
//!
//! The binary wires real clients and terminal I/O into these functions; tests
//! drive them with fakes.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::{Error, GenerationError};
use crate::generator::ThemeGenerator;
use crate::install::{InstallReport, Installer};
use crate::theme::ThemeName;
use crate::ui::{read_theme_name, RenderSink};

/// Use the name given on the command line, or prompt for one.
pub fn resolve_theme_name<R, W>(
    arg: Option<&str>,
    input: &mut R,
    output: &mut W,
    color: bool,
) -> Result<ThemeName, Error>
where
    R: BufRead,
    W: Write,
{
    match arg {
        Some(raw) => Ok(ThemeName::parse(raw)?),
        None => read_theme_name(input, output, color).map_err(Error::Input),
    }
}

/// Generate the theme for `name` and install it.
///
/// Configuration is checked first, so a missing API key fails before any
/// request is sent or file is written.
pub async fn run(
    config: &Config,
    name: &ThemeName,
    generator: &dyn ThemeGenerator,
    installer: &Installer,
    renderer: &dyn RenderSink,
) -> Result<InstallReport, Error> {
    config.validate_for_generation()?;

    renderer.activity(&format!(
        "Generating theme '{name}' using {}...",
        config.api.model
    ));
    let spec = {
        let mut progress = renderer.progress("waiting for model");
        let result = generator.generate(name).await;
        progress.finish();
        result?
    };
    tracing::info!(theme = %name, entries = spec.len(), "theme generated");

    let report = installer.install(name, &spec).await?;
    render_report(renderer, &report);
    Ok(report)
}

/// Print what was written (or would be, for a dry run).
pub fn render_report(renderer: &dyn RenderSink, report: &InstallReport) {
    if report.dry_run {
        renderer.section("dry run (nothing written)");
        renderer.field("json", &report.json_path.display().to_string());
        renderer.field("theme", &report.target_path.display().to_string());
        renderer.preview(&report.conf);
        return;
    }

    renderer.success(&format!(
        "Theme JSON saved to {}",
        report.json_path.display()
    ));
    if let Some(installed) = &report.installed {
        let via = if report.elevated { " via sudo" } else { "" };
        renderer.success(&format!(
            "Ghostty theme installed{via} to {}",
            installed.display()
        ));
    }
}

/// Render a fatal error, including the raw model reply when it was not JSON.
pub fn render_failure(renderer: &dyn RenderSink, err: &Error) {
    renderer.error(&err.to_string());
    if let Error::Generation(GenerationError::InvalidJson { raw, .. }) = err {
        renderer.warn("raw model response:");
        renderer.preview(raw);
    }
}
