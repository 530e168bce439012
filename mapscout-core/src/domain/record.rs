//! Business record domain type

use serde::{Deserialize, Serialize};

use crate::domain::given;

/// One scraped business
///
/// Every field is optional: the backend reports fields it could not extract
/// with a "not given" sentinel, which deserializes to `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BusinessRecord {
    #[serde(default, deserialize_with = "given::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "given::text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "given::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "given::number")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "given::count")]
    pub review_count: Option<u64>,
    #[serde(default, deserialize_with = "given::text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "given::text")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "given::text")]
    pub full_address: Option<String>,
    #[serde(default, deserialize_with = "given::number")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "given::number")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "given::text")]
    pub category: Option<String>,
    /// Google customer id, stable across searches for the same place
    #[serde(default, deserialize_with = "given::text")]
    pub cid: Option<String>,
    #[serde(default, deserialize_with = "given::text")]
    pub keyword: Option<String>,
    #[serde(default, deserialize_with = "given::text")]
    pub zip_code: Option<String>,
}

impl BusinessRecord {
    /// Creates a record with only a name and phone set
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            phone: Some(phone.into()),
            ..Default::default()
        }
    }

    /// Sets the coordinates
    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Name to show when the record has none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed business")
    }

    /// Latitude and longitude, when both are given
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}
