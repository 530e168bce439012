//! Parsing of `--query` arguments
//!
//! A query is written `keyword|location` or `keyword|location|url`.

use anyhow::{Result, bail};
use mapscout_core::dto::job::{JobQuery, StartJob};

/// Parses one `keyword|location[|url]` argument
pub fn parse_query(input: &str) -> Result<JobQuery> {
    let parts: Vec<&str> = input.split('|').map(str::trim).collect();

    let (keyword, location, url) = match parts.as_slice() {
        [keyword, location] => (*keyword, *location, ""),
        [keyword, location, url] => (*keyword, *location, *url),
        _ => bail!(
            "Invalid query '{}': expected 'keyword|location' or 'keyword|location|url'",
            input
        ),
    };

    if keyword.is_empty() || location.is_empty() {
        bail!("Invalid query '{}': keyword and location are required", input);
    }

    Ok(JobQuery::new(keyword, location).with_url(url))
}

/// Parses every `--query` argument into a start request
pub fn parse_queries(inputs: &[String]) -> Result<StartJob> {
    if inputs.is_empty() {
        bail!("Please enter at least one keyword and location");
    }

    let queries = inputs
        .iter()
        .map(|input| parse_query(input))
        .collect::<Result<Vec<_>>>()?;

    Ok(StartJob { queries })
}
