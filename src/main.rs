use anyhow::Result;
use clap::Parser;
use open_meteo_weather::constants::{DEFAULT_CITY, DEFAULT_DAY_OFFSET, DEFAULT_TIMEOUT_SECS};
use open_meteo_weather::{WeatherConfig, WeatherService};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fetch the weather for a city using the Open-Meteo API
#[derive(Parser, Debug)]
#[command(name = "open-meteo-weather")]
#[command(version, about, long_about = None)]
struct Cli {
    /// City name to query
    #[arg(long, default_value = DEFAULT_CITY)]
    city: String,

    /// Days in the future to forecast (0 = today, 1 = tomorrow, ...)
    #[arg(long, default_value_t = DEFAULT_DAY_OFFSET, allow_negative_numbers = true)]
    day_offset: i64,

    /// Show current conditions instead of a daily forecast
    #[arg(long)]
    current: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> WeatherConfig {
        WeatherConfig {
            timeout_secs: self.timeout,
            ..Default::default()
        }
    }

    fn default_filter(&self) -> &'static str {
        match self.verbose {
            0 => "open_meteo_weather=warn",
            1 => "open_meteo_weather=info",
            _ => "open_meteo_weather=debug",
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.default_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(?cli, "Starting weather lookup");

    let service = WeatherService::open_meteo(cli.config())?;
    let result = if cli.current {
        service.current_report(&cli.city).await
    } else {
        service.forecast_report(&cli.city, cli.day_offset).await
    };

    match result {
        Ok(report) => {
            println!("{report}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
