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

//! # Kiwi Flights Search Client
//!
//! Effectful (network) operations: resolve cities, run the search, and
//! print each itinerary with airport and airline names looked up per segment.

use crate::config::Config;
use crate::flights_query_builder::FlightSearchParams;
use crate::flights_results_parser::{FlightOffer, FlightSearchResult};
use crate::http_transport::{HttpTransport, WreqTransport};
use crate::locations_lookup::{airline_name, airport_name, resolve_city_code};
use anyhow::{Context, Result};
use std::io::Write;

pub struct KiwiFlightsClient<H = WreqTransport> {
    config: Config,
    transport: H,
}

impl KiwiFlightsClient<WreqTransport> {
    pub fn new(config: Config) -> Result<Self> {
        let transport = WreqTransport::new(config.timeout_secs)?;
        Ok(Self { config, transport })
    }
}

impl<H: HttpTransport> KiwiFlightsClient<H> {
    pub fn with_transport(config: Config, transport: H) -> Self {
        Self { config, transport }
    }

    pub fn transport(&self) -> &H {
        &self.transport
    }

    pub async fn search_flights(&self, params: &FlightSearchParams) -> Result<FlightSearchResult> {
        let overall_start = std::time::Instant::now();

        let from_code = resolve_city_code(&self.transport, &self.config, &params.fly_from)
            .await
            .context(format!("Could not resolve origin {:?}", params.fly_from))?;
        let to_code = resolve_city_code(&self.transport, &self.config, &params.fly_to)
            .await
            .context(format!("Could not resolve destination {:?}", params.fly_to))?;

        if params.is_one_way() {
            tracing::debug!("No return date given - searching one-way");
        }
        tracing::info!(
            "Searching {} -> {} from {} (limit {}, max stopovers {})",
            from_code,
            to_code,
            params.date_from,
            params.limit,
            params.max_stopovers
        );

        let request = params.search_request(&self.config, &from_code, &to_code);
        let body = self.transport.get_json(&request).await?;
        let result = FlightSearchResult::from_json(body)?;

        tracing::info!(
            "Search completed in {:?}: {} offers",
            overall_start.elapsed(),
            result.len()
        );
        Ok(result)
    }

    /// Print every offer of `result`. Each segment costs three lookups,
    /// issued one after another.
    pub async fn print_itineraries<W: Write>(
        &self,
        result: &FlightSearchResult,
        params: &FlightSearchParams,
        out: &mut W,
    ) -> Result<()> {
        let Some(first) = result.data.first() else {
            writeln!(
                out,
                "\nNo flights found from {} to {}.",
                params.fly_from, params.fly_to
            )?;
            return Ok(());
        };

        writeln!(out, "\nFlights from {} to {}:", first.city_from, first.city_to)?;
        for offer in &result.data {
            self.print_offer(offer, &result.currency, out).await?;
        }
        Ok(())
    }

    async fn print_offer<W: Write>(
        &self,
        offer: &FlightOffer,
        currency: &str,
        out: &mut W,
    ) -> Result<()> {
        let fly_from = airport_name(&self.transport, &self.config, &offer.fly_from).await?;
        let fly_to = airport_name(&self.transport, &self.config, &offer.fly_to).await?;

        writeln!(out, "\nFlight for {} {}", offer.price, currency)?;
        writeln!(out, "Route from {} to {}:", fly_from, fly_to)?;

        for segment in &offer.route {
            let airport_from = airport_name(&self.transport, &self.config, &segment.fly_from).await?;
            let airport_to = airport_name(&self.transport, &self.config, &segment.fly_to).await?;
            let airline = airline_name(&self.transport, &self.config, &segment.airline).await?;
            let (date, time) = segment.departure_date_time()?;
            writeln!(
                out,
                "From {} to {} by {} at {} in {}",
                airport_from, airport_to, airline, time, date
            )?;
        }
        Ok(())
    }

    pub async fn search_and_print<W: Write>(
        &self,
        params: &FlightSearchParams,
        out: &mut W,
    ) -> Result<()> {
        let result = self.search_flights(params).await?;
        self.print_itineraries(&result, params, out).await
    }
}
