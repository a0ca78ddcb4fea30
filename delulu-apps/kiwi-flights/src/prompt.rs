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

//! # Interactive Prompts
//!
//! Collects the search parameters from a line-oriented reader, applying
//! defaults to blank answers. Nothing is validated here.

use crate::flights_query_builder::{
    DEFAULT_CURRENCY, DEFAULT_LIMIT, DEFAULT_MAX_STOPOVERS, FlightSearchParams,
};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

/// Date format the Kiwi search endpoint expects.
pub const PROMPT_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read answer")?;
    if read == 0 {
        bail!("Unexpected end of input at {:?}", question.trim());
    }
    Ok(line.trim().to_string())
}

fn or_default(answer: String, default: &str) -> String {
    if answer.is_empty() {
        default.to_string()
    } else {
        answer
    }
}

/// Ask the seven search questions. `today` fills a blank outbound date.
pub fn collect_search_params<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    today: NaiveDate,
) -> Result<FlightSearchParams> {
    let fly_from = ask(input, output, "\nFlight from: ")?;
    let fly_to = ask(input, output, "Flight to: ")?;
    let date_from = or_default(
        ask(input, output, "Date from (dd/mm/yyyy): ")?,
        &today.format(PROMPT_DATE_FORMAT).to_string(),
    );
    let date_to = ask(input, output, "Date to (dd/mm/yyyy): ")?;
    let currency = or_default(
        ask(input, output, "Currency (e.g. USD, EUR, PLN): ")?,
        DEFAULT_CURRENCY,
    );
    let limit = or_default(ask(input, output, "Search limit: ")?, DEFAULT_LIMIT);
    let max_stopovers = or_default(
        ask(
            input,
            output,
            "Max number of stopovers (0 for direct flights): ",
        )?,
        DEFAULT_MAX_STOPOVERS,
    );

    let mut builder = FlightSearchParams::builder(fly_from, fly_to, date_from)
        .currency(currency)
        .limit(limit)
        .max_stopovers(max_stopovers);
    if !date_to.is_empty() {
        builder = builder.date_to(date_to);
    }

    let params = builder.build();
    tracing::debug!("Collected search parameters: {:?}", params);
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_blank_answers_use_defaults() {
        let mut input = Cursor::new("Warsaw\nLisbon\n\n\n\n\n\n");
        let mut output = Vec::new();
        let params = collect_search_params(&mut input, &mut output, today()).unwrap();

        assert_eq!(params.fly_from, "Warsaw");
        assert_eq!(params.fly_to, "Lisbon");
        assert_eq!(params.date_from, "18/10/2026");
        assert_eq!(params.date_to, None);
        assert_eq!(params.currency, "EUR");
        assert_eq!(params.limit, "4");
        assert_eq!(params.max_stopovers, "2");
    }

    #[test]
    fn test_answers_are_passed_through() {
        let mut input = Cursor::new("New York\n  Tokyo \n01/12/2026\n15/12/2026\nUSD\n10\n0\n");
        let mut output = Vec::new();
        let params = collect_search_params(&mut input, &mut output, today()).unwrap();

        assert_eq!(params.fly_from, "New York");
        assert_eq!(params.fly_to, "Tokyo");
        assert_eq!(params.date_from, "01/12/2026");
        assert_eq!(params.date_to.as_deref(), Some("15/12/2026"));
        assert_eq!(params.currency, "USD");
        assert_eq!(params.limit, "10");
        assert_eq!(params.max_stopovers, "0");
    }

    #[test]
    fn test_malformed_answers_are_not_validated() {
        let mut input = Cursor::new("x\ny\nnot-a-date\n\nmoney\nmany\nlots\n");
        let mut output = Vec::new();
        let params = collect_search_params(&mut input, &mut output, today()).unwrap();
        assert_eq!(params.date_from, "not-a-date");
        assert_eq!(params.limit, "many");
        assert_eq!(params.max_stopovers, "lots");
    }

    #[test]
    fn test_prompts_in_order() {
        let mut input = Cursor::new("a\nb\n\n\n\n\n\n");
        let mut output = Vec::new();
        collect_search_params(&mut input, &mut output, today()).unwrap();
        let printed = String::from_utf8(output).unwrap();

        let questions = [
            "Flight from: ",
            "Flight to: ",
            "Date from (dd/mm/yyyy): ",
            "Date to (dd/mm/yyyy): ",
            "Currency (e.g. USD, EUR, PLN): ",
            "Search limit: ",
            "Max number of stopovers (0 for direct flights): ",
        ];
        let mut last = 0;
        for q in questions {
            let pos = printed[last..]
                .find(q)
                .unwrap_or_else(|| panic!("Missing prompt {:?} in {:?}", q, printed));
            last += pos + q.len();
        }
    }

    #[test]
    fn test_eof_stops_before_search() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let err = collect_search_params(&mut input, &mut output, today()).unwrap_err();
        assert!(err.to_string().contains("Flight from:"), "{}", err);
    }

    #[test]
    fn test_eof_midway_is_an_error() {
        // Closed after the outbound date: the return date prompt hits EOF.
        let mut input = Cursor::new("Warsaw\nLisbon\n\n");
        let mut output = Vec::new();
        let err = collect_search_params(&mut input, &mut output, today()).unwrap_err();
        assert!(err.to_string().contains("Date to"), "{}", err);
    }
}
