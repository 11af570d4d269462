mod addresses;
mod normalize;
mod redirect;
mod validate;

use clap::Subcommand;
use guardview_domain::Config;
use serde::Serialize;
use std::io::Read;

pub use validate::ValidatorName;

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a query log page (`{"data": [...]}` or a bare list)
    Logs {
        /// JSON file, or `-` for stdin
        input: String,
    },
    /// Normalize the filtering status payload
    Filtering { input: String },
    /// Label a statistics series for charting
    History {
        input: String,
        /// Window length in days (1 and 7 are hourly series)
        #[arg(long, default_value_t = 1)]
        interval: u32,
    },
    /// Convert a top-N table into name/count pairs
    TopStats { input: String },
    /// Fold city and country of a WHOIS record into a location
    Whois { input: String },
    /// Pick the display address of every network interface
    Interfaces { input: String },
    /// Percentage of NUMBER in AMOUNT
    Percent { amount: f64, number: f64 },
    /// Address DNS clients should use
    DnsAddress { ip: String, port: Option<u16> },
    /// URL of the web console
    WebAddress {
        ip: String,
        port: Option<u16>,
        #[arg(long)]
        https: bool,
    },
    /// Validate one form field value
    Validate {
        #[arg(value_enum)]
        validator: ValidatorName,
        /// Field value; omit for an empty field
        value: Option<String>,
    },
    /// Check whether LATEST is newer than CURRENT
    VersionCheck { current: String, latest: String },
    /// Wait until URL answers, as the console does before redirecting
    Redirect { url: String },
    /// Plan (and await) the redirect after the encryption settings changed
    TlsRedirect {
        /// URL the console is currently open at
        #[arg(long)]
        from: String,
        /// TLS enabled in the submitted settings
        #[arg(long)]
        enabled: bool,
        #[arg(long)]
        https_port: Option<u16>,
    },
}

pub async fn run(command: Command, config: &Config) -> anyhow::Result<()> {
    match command {
        Command::Logs { input } => normalize::logs(&read_input(&input)?),
        Command::Filtering { input } => normalize::filtering(&read_input(&input)?, config),
        Command::History { input, interval } => {
            normalize::history(&read_input(&input)?, interval, config)
        }
        Command::TopStats { input } => normalize::top_stats(&read_input(&input)?),
        Command::Whois { input } => normalize::whois(&read_input(&input)?),
        Command::Interfaces { input } => addresses::interfaces(&read_input(&input)?),
        Command::Percent { amount, number } => addresses::percent(amount, number),
        Command::DnsAddress { ip, port } => addresses::dns_address(&ip, port),
        Command::WebAddress { ip, port, https } => addresses::web_address(&ip, port, https),
        Command::Validate { validator, value } => {
            validate::run(validator, value.as_deref(), config)
        }
        Command::VersionCheck { current, latest } => validate::version_check(&current, &latest),
        Command::Redirect { url } => redirect::check(&url, config).await,
        Command::TlsRedirect {
            from,
            enabled,
            https_port,
        } => redirect::after_tls_change(&from, enabled, https_port, config).await,
    }
}

/// Reads a file, or stdin for `-`
fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
