//! Geocoding gateway CLI
//!
//! Runs a single forward or reverse lookup and prints the JSON reply.

#![allow(clippy::print_stdout)]

use std::process::ExitCode;

use clap::Parser;
use domain::{DEFAULT_LIMIT, DEFAULT_LOCALE, GeocodingParams};
use integration_photon::{GeocodingGateway, PhotonConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Geocoding gateway CLI
#[derive(Debug, Parser)]
#[command(name = "geocode-cli")]
#[command(author, version, about = "Forward and reverse geocoding via Photon", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Provider base URL
    #[arg(long, env = "GEOCODING_SERVICE_URL", default_value = "https://photon.komoot.io/api")]
    base_url: String,

    /// Upstream request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// User-Agent sent to the provider
    #[arg(long)]
    user_agent: Option<String>,

    /// Perform a reverse lookup of --point
    #[arg(long)]
    reverse: bool,

    /// Point to look up, as "lat,lon"
    #[arg(long, allow_hyphen_values = true)]
    point: Option<String>,

    /// Maximum number of results (clamped to 1..=50)
    #[arg(long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    limit: i64,

    /// Result language
    #[arg(long, default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Place to look up (forward mode)
    query: Option<String>,
}

impl Cli {
    fn config(&self) -> PhotonConfig {
        let defaults = PhotonConfig::default();
        PhotonConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }

    fn params(&self) -> GeocodingParams {
        GeocodingParams {
            q: self.query.clone(),
            reverse: self.reverse,
            point: self.point.clone(),
            limit: self.limit,
            locale: self.locale.clone(),
        }
    }
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(
            cli.verbose,
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let gateway = GeocodingGateway::from_config(&cli.config())?;
    info!(base_url = gateway.base_url(), "Geocoding gateway ready");

    let reply = gateway.respond(&cli.params()).await;
    println!("{}", serde_json::to_string_pretty(&reply.body)?);

    if reply.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        info!(status = %reply.status, "Lookup failed");
        Ok(ExitCode::FAILURE)
    }
}
