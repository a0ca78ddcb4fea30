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

//! # Lookup Errors
//!
//! Typed failures that callers may want to match on. Transport and decoding
//! failures stay plain `anyhow` errors with context.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    /// A required credential was absent from the environment.
    #[error("missing required environment variable {0}")]
    MissingCredential(&'static str),

    /// The provider answered with an empty result list.
    #[error("no {kind} found for {query:?}")]
    NotFound { kind: &'static str, query: String },

    /// The provider answered with an error payload instead of results.
    #[error("{provider} API error: {message}")]
    Api {
        provider: &'static str,
        message: String,
    },

    /// A departure timestamp did not match the provider format.
    #[error("invalid departure timestamp {raw:?}: {source}")]
    Parse {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
}
