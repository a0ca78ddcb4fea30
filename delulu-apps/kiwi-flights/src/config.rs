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

//! # Configuration
//!
//! Credentials and endpoints, read once at startup and passed by reference
//! to every lookup and search.

use crate::error::LookupError;
use anyhow::{Context, Result};

pub const KIWI_ENDPOINT: &str = "https://api.tequila.kiwi.com/";
pub const AIRLABS_ENDPOINT: &str = "https://airlabs.co/api/v9/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const KIWI_API_VAR: &str = "KIWI_API";
pub const AIR_LABS_API_VAR: &str = "AIR_LABS_API";
const KIWI_ENDPOINT_VAR: &str = "KIWI_ENDPOINT";
const AIRLABS_ENDPOINT_VAR: &str = "AIRLABS_ENDPOINT";
const TIMEOUT_VAR: &str = "DELULU_HTTP_TIMEOUT_SECS";

#[derive(Clone)]
pub struct Config {
    pub kiwi_endpoint: String,
    pub kiwi_api_key: String,
    pub airlabs_endpoint: String,
    pub airlabs_api_key: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("kiwi_endpoint", &self.kiwi_endpoint)
            .field("kiwi_api_key", &"<redacted>")
            .field("airlabs_endpoint", &self.airlabs_endpoint)
            .field("airlabs_api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    pub fn new(kiwi_api_key: String, airlabs_api_key: String) -> Self {
        Self {
            kiwi_endpoint: KIWI_ENDPOINT.to_string(),
            kiwi_api_key,
            airlabs_endpoint: AIRLABS_ENDPOINT.to_string(),
            airlabs_api_key,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key/value source. Empty values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let kiwi_api_key = get(KIWI_API_VAR).ok_or(LookupError::MissingCredential(KIWI_API_VAR))?;
        let airlabs_api_key =
            get(AIR_LABS_API_VAR).ok_or(LookupError::MissingCredential(AIR_LABS_API_VAR))?;

        let mut config = Self::new(kiwi_api_key, airlabs_api_key);
        if let Some(endpoint) = get(KIWI_ENDPOINT_VAR) {
            config.kiwi_endpoint = with_trailing_slash(endpoint);
        }
        if let Some(endpoint) = get(AIRLABS_ENDPOINT_VAR) {
            config.airlabs_endpoint = with_trailing_slash(endpoint);
        }
        if let Some(secs) = get(TIMEOUT_VAR) {
            config.timeout_secs = secs
                .trim()
                .parse()
                .context(format!("Invalid {}: {}", TIMEOUT_VAR, secs))?;
        }

        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

fn with_trailing_slash(mut endpoint: String) -> String {
    if !endpoint.ends_with('/') {
        endpoint.push('/');
    }
    endpoint
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_both_keys() {
        let config =
            Config::from_lookup(lookup_from(&[("KIWI_API", "kiwi"), ("AIR_LABS_API", "labs")]))
                .unwrap();
        assert_eq!(config.kiwi_api_key, "kiwi");
        assert_eq!(config.airlabs_api_key, "labs");
        assert_eq!(config.kiwi_endpoint, KIWI_ENDPOINT);
        assert_eq!(config.airlabs_endpoint, AIRLABS_ENDPOINT);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_missing_kiwi_key() {
        let err = Config::from_lookup(lookup_from(&[("AIR_LABS_API", "labs")])).unwrap_err();
        match err.downcast_ref::<LookupError>() {
            Some(LookupError::MissingCredential(var)) => assert_eq!(*var, "KIWI_API"),
            other => panic!("Expected MissingCredential, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_airlabs_key_is_missing() {
        let err = Config::from_lookup(lookup_from(&[("KIWI_API", "kiwi"), ("AIR_LABS_API", "  ")]))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LookupError>(),
            Some(LookupError::MissingCredential("AIR_LABS_API"))
        ));
    }

    #[test]
    fn test_endpoint_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("KIWI_API", "kiwi"),
            ("AIR_LABS_API", "labs"),
            ("KIWI_ENDPOINT", "http://127.0.0.1:9000"),
            ("AIRLABS_ENDPOINT", "http://127.0.0.1:9001/api/"),
            ("DELULU_HTTP_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.kiwi_endpoint, "http://127.0.0.1:9000/");
        assert_eq!(config.airlabs_endpoint, "http://127.0.0.1:9001/api/");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_bad_timeout() {
        let result = Config::from_lookup(lookup_from(&[
            ("KIWI_API", "kiwi"),
            ("AIR_LABS_API", "labs"),
            ("DELULU_HTTP_TIMEOUT_SECS", "soon"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = Config::new("secret-kiwi".into(), "secret-labs".into());
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret"));
        assert!(printed.contains("<redacted>"));
    }
}
