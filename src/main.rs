use clap::Parser;
use shoplist::config::Config;
use shoplist::item::IdScheme;
use shoplist::logging::init_tracing;
use shoplist::ui::runtime;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Keep a shopping list in the terminal.
#[derive(Debug, Parser)]
#[command(name = "shoplist", version, about)]
struct Cli {
    /// Config file (default: <config dir>/shoplist/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter directive, overrides the config file (e.g. "debug")
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Never reuse item ids after deletions
    #[arg(long)]
    monotonic_ids: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(1);
        }
    };

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    init_tracing(&config.logging, cli.log_level.as_deref())?;

    let id_scheme = if cli.monotonic_ids {
        IdScheme::Monotonic
    } else {
        config.list.id_scheme
    };
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    runtime::run(tick_rate, id_scheme)?;
    Ok(())
}
