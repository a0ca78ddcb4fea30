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

// Library for delulu-kiwi-flights
// Interactive flight search over Kiwi Tequila, names resolved via AirLabs

pub mod config;
pub mod error;
mod flights_query_builder;
mod flights_results_parser;
mod flights_search;
pub mod http_transport;
mod locations_lookup;
pub mod prompt;

pub use config::Config;
pub use error::LookupError;
pub use http_transport::{ApiRequest, HttpTransport, WreqTransport};

// Re-export commonly used items from flights_search
pub use flights_search::*;

// Re-export flights_query_builder
pub use flights_query_builder::{
    DEFAULT_CURRENCY, DEFAULT_LIMIT, DEFAULT_MAX_STOPOVERS, FlightSearchParams,
    FlightSearchParamsBuilder,
};

// Re-export flights_results_parser
pub use flights_results_parser::{FlightOffer, FlightSearchResult, RouteSegment, parse_departure};

// Re-export locations_lookup
pub use locations_lookup::{airline_name, airport_name, fetch_first, resolve_city_code};
