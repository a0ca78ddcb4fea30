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

//! # Flights Query Builder
//!
//! Side-effect free construction of the Kiwi `v2/search` request.
//! Dates, limit and stopovers are forwarded as typed by the user.

use crate::config::Config;
use crate::http_transport::ApiRequest;

pub const DEFAULT_CURRENCY: &str = "EUR";
pub const DEFAULT_LIMIT: &str = "4";
pub const DEFAULT_MAX_STOPOVERS: &str = "2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightSearchParams {
    /// Origin city name, resolved to a city code before searching.
    pub fly_from: String,
    /// Destination city name.
    pub fly_to: String,
    /// Outbound date, `dd/mm/yyyy`.
    pub date_from: String,
    /// Return date, `dd/mm/yyyy`. `None` searches one-way.
    pub date_to: Option<String>,
    pub currency: String,
    pub limit: String,
    pub max_stopovers: String,
}

impl FlightSearchParams {
    pub fn builder(fly_from: String, fly_to: String, date_from: String) -> FlightSearchParamsBuilder {
        FlightSearchParamsBuilder {
            fly_from,
            fly_to,
            date_from,
            date_to: None,
            currency: DEFAULT_CURRENCY.to_string(),
            limit: DEFAULT_LIMIT.to_string(),
            max_stopovers: DEFAULT_MAX_STOPOVERS.to_string(),
        }
    }

    pub fn is_one_way(&self) -> bool {
        self.date_to.is_none()
    }

    /// Search request for already resolved origin and destination codes.
    pub fn search_request(&self, config: &Config, from_code: &str, to_code: &str) -> ApiRequest {
        let mut request = ApiRequest::get(&config.kiwi_endpoint, "v2/search")
            .header("apikey", &config.kiwi_api_key)
            .query("fly_from", from_code)
            .query("fly_to", to_code)
            .query("date_from", &self.date_from);
        if let Some(date_to) = &self.date_to {
            request = request.query("date_to", date_to);
        }
        request
            .query("curr", &self.currency)
            .query("locale", "en")
            .query("limit", &self.limit)
            .query("max_stopovers", &self.max_stopovers)
    }
}

#[derive(Clone)]
pub struct FlightSearchParamsBuilder {
    fly_from: String,
    fly_to: String,
    date_from: String,
    date_to: Option<String>,
    currency: String,
    limit: String,
    max_stopovers: String,
}

impl FlightSearchParamsBuilder {
    pub fn date_to(mut self, date_to: String) -> Self {
        self.date_to = Some(date_to);
        self
    }

    pub fn currency(mut self, currency: String) -> Self {
        self.currency = currency;
        self
    }

    pub fn limit(mut self, limit: String) -> Self {
        self.limit = limit;
        self
    }

    pub fn max_stopovers(mut self, max_stopovers: String) -> Self {
        self.max_stopovers = max_stopovers;
        self
    }

    pub fn build(self) -> FlightSearchParams {
        FlightSearchParams {
            fly_from: self.fly_from,
            fly_to: self.fly_to,
            date_from: self.date_from,
            date_to: self.date_to,
            currency: self.currency,
            limit: self.limit,
            max_stopovers: self.max_stopovers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::new("kiwi-key".into(), "labs-key".into())
    }

    #[test]
    fn test_builder_defaults() {
        let params =
            FlightSearchParams::builder("Berlin".into(), "Rome".into(), "01/06/2026".into()).build();
        assert_eq!(params.currency, "EUR");
        assert_eq!(params.limit, "4");
        assert_eq!(params.max_stopovers, "2");
        assert!(params.is_one_way());
    }

    #[test]
    fn test_search_request_roundtrip_dates() {
        let params =
            FlightSearchParams::builder("Berlin".into(), "Rome".into(), "01/06/2026".into())
                .date_to("08/06/2026".into())
                .currency("PLN".into())
                .limit("10".into())
                .max_stopovers("0".into())
                .build();
        let request = params.search_request(&config(), "BER", "ROM");

        assert_eq!(request.path, "v2/search");
        assert_eq!(request.query_value("fly_from"), Some("BER"));
        assert_eq!(request.query_value("fly_to"), Some("ROM"));
        assert_eq!(request.query_value("date_from"), Some("01/06/2026"));
        assert_eq!(request.query_value("date_to"), Some("08/06/2026"));
        assert_eq!(request.query_value("curr"), Some("PLN"));
        assert_eq!(request.query_value("locale"), Some("en"));
        assert_eq!(request.query_value("limit"), Some("10"));
        assert_eq!(request.query_value("max_stopovers"), Some("0"));
        assert!(request.headers.contains(&("apikey".into(), "kiwi-key".into())));
    }

    #[test]
    fn test_search_request_one_way_omits_date_to() {
        let params =
            FlightSearchParams::builder("Berlin".into(), "Rome".into(), "01/06/2026".into()).build();
        let request = params.search_request(&config(), "BER", "ROM");
        assert_eq!(request.query_value("date_to"), None);
        assert_eq!(request.query_value("date_from"), Some("01/06/2026"));
    }
}
