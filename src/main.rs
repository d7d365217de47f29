//! CLI entry point for vibejam.

mod cli;

use clap::Parser;
use std::io;
use std::time::Duration;

use vibejam::api::ApiClient;
use vibejam::app::{render_failure, resolve_theme_name, run};
use vibejam::config::{load_config_with_source, DEFAULT_CONFIG_TEMPLATE};
use vibejam::error::Error;
use vibejam::generator::ModelThemeGenerator;
use vibejam::install::Installer;
use vibejam::logging;
use vibejam::ui::{RenderSink, Renderer, TerminalElevationPrompt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::Args::parse();

    if args.print_default_config {
        print!("{DEFAULT_CONFIG_TEMPLATE}");
        return;
    }

    logging::init(args.verbose, !args.no_color);

    let loaded = match load_config_with_source(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            Renderer::new(!args.no_color).error(&format!("config: {e}"));
            std::process::exit(1);
        }
    };
    tracing::debug!(source = %loaded.source, "configuration loaded");

    let mut config = loaded.config;
    args.apply_overrides(&mut config);
    let renderer = Renderer::new(config.display.color);

    if let Err(e) = execute(&args, &config, &renderer).await {
        render_failure(&renderer, &e);
        std::process::exit(1);
    }
}

async fn execute(
    args: &cli::Args,
    config: &vibejam::config::Config,
    renderer: &Renderer,
) -> Result<(), Error> {
    // Fail on a missing key before asking the user for anything.
    config.validate_for_generation()?;

    renderer.header(&config.api.model);
    let name = {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        resolve_theme_name(
            args.name.as_deref(),
            &mut stdin.lock(),
            &mut stdout,
            config.display.color,
        )?
    };

    let client = ApiClient::new(
        &config.api,
        Duration::from_secs(config.network.api_timeout_secs),
    );
    let generator = ModelThemeGenerator::new(client, &config.api);
    let installer = Installer::new(
        config.install.clone(),
        Box::new(TerminalElevationPrompt::new(config.display.color)),
    );

    run(config, &name, &generator, &installer, renderer).await?;
    Ok(())
}
