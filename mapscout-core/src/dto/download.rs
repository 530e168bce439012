//! Download format for `GET /download/{format}`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    Csv,
    Json,
}

impl DownloadFormat {
    /// Path segment and file extension
    pub fn as_str(self) -> &'static str {
        match self {
            DownloadFormat::Csv => "csv",
            DownloadFormat::Json => "json",
        }
    }
}

impl fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DownloadFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(DownloadFormat::Csv),
            "json" => Ok(DownloadFormat::Json),
            other => Err(format!("unsupported download format '{}', use csv or json", other)),
        }
    }
}
