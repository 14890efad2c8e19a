use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};
use zcalc::cli::{Cli, Command, run_eval};
use zcalc::config::Config;
use zcalc::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        None | Some(Command::Gui) => {
            tracing::info!("starting calculator window");
            ui::run(config);
        }
        Some(Command::Eval(args)) => run_eval(&args, &config)?,
    }

    Ok(())
}
