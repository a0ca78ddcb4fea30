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

//! # Flights Results Parser
//!
//! Side-effect free decoding of Kiwi `v2/search` responses.

use crate::error::LookupError;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;

/// Provider format of `local_departure`, e.g. `2024-05-01T14:30:00.000Z`.
/// `%.f` also accepts timestamps without fractional seconds.
const DEPARTURE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

#[derive(Debug, Clone, Deserialize)]
pub struct FlightSearchResult {
    pub currency: String,
    #[serde(default)]
    pub data: Vec<FlightOffer>,
}

impl FlightSearchResult {
    pub fn from_json(body: serde_json::Value) -> Result<Self> {
        serde_json::from_value(body).context("Unexpected flight search response")
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub price: f64,
    pub city_from: String,
    pub city_to: String,
    pub fly_from: String,
    pub fly_to: String,
    #[serde(default)]
    pub route: Vec<RouteSegment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteSegment {
    #[serde(rename = "flyFrom")]
    pub fly_from: String,
    #[serde(rename = "flyTo")]
    pub fly_to: String,
    pub airline: String,
    pub local_departure: String,
}

impl RouteSegment {
    /// Departure as `("YYYY-MM-DD", "HH:MM:SS")`.
    pub fn departure_date_time(&self) -> Result<(String, String), LookupError> {
        parse_departure(&self.local_departure)
    }
}

pub fn parse_departure(raw: &str) -> Result<(String, String), LookupError> {
    let departure =
        NaiveDateTime::parse_from_str(raw, DEPARTURE_FORMAT).map_err(|source| LookupError::Parse {
            raw: raw.to_string(),
            source,
        })?;
    Ok((
        departure.format("%Y-%m-%d").to_string(),
        departure.format("%H:%M:%S").to_string(),
    ))
}
