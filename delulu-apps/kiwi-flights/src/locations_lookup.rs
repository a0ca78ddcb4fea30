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

//! # Location and Name Lookups
//!
//! City name to Kiwi city code, and IATA code to AirLabs display name.
//! All three lookups go through [`fetch_first`]: take the first element of
//! one result list, or fail with [`LookupError::NotFound`].

use crate::config::Config;
use crate::error::LookupError;
use crate::http_transport::{ApiRequest, HttpTransport};
use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Deserialize)]
struct KiwiLocation {
    city: KiwiCity,
}

#[derive(Debug, Clone, Deserialize)]
struct KiwiCity {
    code: String,
}

#[derive(Debug, Clone, Deserialize)]
struct NamedEntry {
    name: String,
}

/// Fetch `request` from `provider` and decode the first element of the
/// `list_field` array.
pub async fn fetch_first<T, H>(
    transport: &H,
    provider: &'static str,
    request: &ApiRequest,
    list_field: &str,
    kind: &'static str,
    query: &str,
) -> Result<T>
where
    T: DeserializeOwned,
    H: HttpTransport,
{
    let body = transport.get_json(request).await?;

    if let Some(error) = body.get("error").filter(|e| !e.is_null()) {
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(LookupError::Api {
            provider,
            message,
        }
        .into());
    }

    let first = body
        .get(list_field)
        .and_then(|list| list.as_array())
        .and_then(|list| list.first())
        .ok_or_else(|| LookupError::NotFound {
            kind,
            query: query.to_string(),
        })?;

    tracing::trace!("[fetch_first] {} {:?} -> {}", kind, query, first);
    T::deserialize(first).context(format!("Unexpected {} entry for {:?}", kind, query))
}

/// Resolve a free-text city name to the code of the city of its first airport.
pub async fn resolve_city_code<H: HttpTransport>(
    transport: &H,
    config: &Config,
    city_name: &str,
) -> Result<String> {
    let request = ApiRequest::get(&config.kiwi_endpoint, "locations/query")
        .header("apikey", &config.kiwi_api_key)
        .query("term", city_name)
        .query("locale", "en-US")
        .query("location_types", "airport")
        .query("active_only", "true");

    let location: KiwiLocation =
        fetch_first(transport, "Kiwi", &request, "locations", "location", city_name).await?;
    tracing::debug!("Resolved {:?} to city code {}", city_name, location.city.code);
    Ok(location.city.code)
}

/// Display name of an airline from its IATA code.
pub async fn airline_name<H: HttpTransport>(
    transport: &H,
    config: &Config,
    iata_code: &str,
) -> Result<String> {
    airlabs_name(transport, config, "airlines", "airline", iata_code).await
}

/// Display name of an airport from its IATA code.
pub async fn airport_name<H: HttpTransport>(
    transport: &H,
    config: &Config,
    iata_code: &str,
) -> Result<String> {
    airlabs_name(transport, config, "airports", "airport", iata_code).await
}

async fn airlabs_name<H: HttpTransport>(
    transport: &H,
    config: &Config,
    path: &str,
    kind: &'static str,
    iata_code: &str,
) -> Result<String> {
    let request = ApiRequest::get(&config.airlabs_endpoint, path)
        .query("api_key", &config.airlabs_api_key)
        .query("iata_code", iata_code);

    let entry: NamedEntry =
        fetch_first(transport, "AirLabs", &request, "response", kind, iata_code).await?;
    Ok(entry.name)
}
