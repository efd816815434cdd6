//! Listing records served by the catalog

use serde::{Deserialize, Serialize};

/// One rental listing. Mirrors the brokerage's fixture record shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: u32,
    pub address: String,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub sqft: u32,
    pub description: String,
    pub features: Vec<String>,
    /// Property category, e.g. "Apartment", "House", "Studio"
    #[serde(rename = "type")]
    pub category: String,
    /// Neighborhood / region label
    pub location: String,
    /// Image keys only; no image data is handled
    pub images: Vec<String>,
    pub featured: bool,
}

impl Listing {
    /// Short one-line label for list rows
    pub fn summary_line(&self) -> String {
        format!(
            "{} — {} bd / {} ba — ${}/mo",
            self.title, self.bedrooms, self.bathrooms, self.price
        )
    }
}
