use clap::Parser;
use guardview_domain::{CliOverrides, Config};
use tracing::debug;

mod bootstrap;
mod commands;

use commands::Command;

#[derive(Parser)]
#[command(name = "guardview")]
#[command(version)]
#[command(about = "GuardView - normalize and validate DNS-filtering console data")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Locale for dates and month names (e.g. en_US, de-DE)
    #[arg(long)]
    locale: Option<String>,

    /// IANA timezone for rendered timestamps
    #[arg(long)]
    timezone: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        locale: cli.locale.clone(),
        timezone: cli.timezone.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        config_path = ?Config::get_config_path(cli.config.as_deref()),
        locale = %config.display.locale,
        timezone = %config.display.timezone,
        "GuardView starting"
    );

    commands::run(cli.command, &config).await
}
