use anyhow::{Context, Result};
use clap::Parser;

use footprint::cli::handlers::{self, CommandContext};
use footprint::cli::{Cli, Commands};
use footprint::config::FootprintConfig;
use footprint::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.clone());

    let ctx = load_context(&cli)?;
    if cli.no_color || !ctx.config.output.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Init { days, precision } => handlers::handle_init(&ctx, days, precision),
        Commands::Categories { json } => handlers::handle_categories(&ctx, json),
        Commands::Types { category, json } => handlers::handle_types(&ctx, category, json),
        Commands::Factor {
            category,
            r#type,
            json,
        } => handlers::handle_factor(&ctx, category, r#type, json),
        Commands::Calc {
            entries,
            days,
            json,
        } => handlers::handle_calc(&ctx, entries, days, json),
        Commands::Report { path, days, json } => {
            handlers::handle_report(&ctx, &path, days, json)
        }
        Commands::Interactive { load } => handlers::handle_interactive(&ctx, load),
    }
}

fn load_context(cli: &Cli) -> Result<CommandContext> {
    let (config, config_path) = match &cli.config {
        Some(path) => {
            let config = FootprintConfig::load_from(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            (config, Some(path.clone()))
        }
        None => {
            let cwd = std::env::current_dir()?;
            FootprintConfig::load(&cwd).context("Failed to load footprint configuration")?
        }
    };

    if let Some(ref path) = config_path {
        tracing::debug!(path = %path.display(), "Using config file");
    }

    Ok(CommandContext::new(config, config_path))
}
