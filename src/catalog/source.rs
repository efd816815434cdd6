//! Catalog source abstraction and the bundled fixture implementation

use super::listing::Listing;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Listings bundled with the binary
const FIXTURE_JSON: &str = include_str!("../../data/listings.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read listings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed listings data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only supplier of listing records, mockable in tests
#[cfg_attr(test, mockall::automock)]
pub trait ListingSource {
    /// All listings, in catalog order
    fn listings(&self) -> Result<Vec<Listing>, CatalogError>;
}

/// Catalog backed by the embedded fixture, optionally overridden by a JSON
/// file on disk (config key `listings_path`).
#[derive(Debug, Default)]
pub struct FixtureCatalog {
    path: Option<String>,
}

impl FixtureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl ListingSource for FixtureCatalog {
    fn listings(&self) -> Result<Vec<Listing>, CatalogError> {
        match &self.path {
            Some(path) => {
                let content = fs::read_to_string(Path::new(path))?;
                Ok(serde_json::from_str(&content)?)
            }
            None => Ok(serde_json::from_str(FIXTURE_JSON)?),
        }
    }
}

/// Look up one listing by id. A miss is not an error; callers degrade to the
/// generic application form without listing context.
pub fn find_listing<'a>(listings: &'a [Listing], id: &str) -> Option<&'a Listing> {
    listings.iter().find(|l| l.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_fixture_parses() {
        let listings = FixtureCatalog::new().listings().unwrap();
        assert!(!listings.is_empty());
        assert!(listings.iter().any(|l| l.featured));
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        let listings = FixtureCatalog::new().listings().unwrap();
        let mut ids: Vec<_> = listings.iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_find_listing_hit_and_miss() {
        let listings = FixtureCatalog::new().listings().unwrap();
        let first_id = listings[0].id.clone();
        assert!(find_listing(&listings, &first_id).is_some());
        assert!(find_listing(&listings, "no-such-listing").is_none());
    }

    #[test]
    fn test_missing_override_path_is_io_error() {
        let catalog = FixtureCatalog::with_path("/nonexistent/listings.json");
        assert!(matches!(catalog.listings(), Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_mock_source() {
        let mut source = MockListingSource::new();
        source.expect_listings().returning(|| Ok(vec![]));
        assert!(source.listings().unwrap().is_empty());
    }
}
