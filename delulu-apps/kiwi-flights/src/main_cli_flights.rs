//!  Delulu Travel Agent
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Interactive CLI for Kiwi flight search.
//!
//! Requires `KIWI_API` (Kiwi Tequila key) and `AIR_LABS_API` (AirLabs key)
//! in the environment or in a `.env` file.
//!
//! ```bash
//! delulu-kiwi-flights
//!
//! Flight from: Warsaw
//! Flight to: Lisbon
//! Date from (dd/mm/yyyy):
//! ...
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use delulu_kiwi_flights::prompt::collect_search_params;
use delulu_kiwi_flights::{Config, KiwiFlightsClient};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "delulu-kiwi-flights")]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Verbose output
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

/// Log filter: `RUST_LOG` when set and valid, else by verbosity level.
fn log_filter(verbose: bool, rust_log: Option<String>) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "warn" };
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}

/// Configure logging. Logs go to stderr so they don't interleave with the
/// itinerary on stdout.
fn setup_logging(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc_3339())
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Before logging setup so a RUST_LOG from .env takes effect.
    let dotenv_path = dotenvy::dotenv().ok();
    setup_logging(log_filter(args.verbose, std::env::var("RUST_LOG").ok()));
    if let Some(path) = dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    tracing::info!("Starting delulu-kiwi-flights CLI");
    let config = Config::from_env().context("Failed to load configuration")?;
    let client = KiwiFlightsClient::new(config)?;

    let today = chrono::Local::now().date_naive();
    let params = {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        collect_search_params(&mut input, &mut output, today)?
    };

    let mut stdout = std::io::stdout();
    client
        .search_and_print(&params, &mut stdout)
        .await
        .context("Search failed")?;

    Ok(())
}
