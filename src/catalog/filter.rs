//! Listing filters: simple predicate chaining over the in-memory catalog

use super::listing::Listing;

/// Active filter criteria. `None` / empty means "any".
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    /// Case-insensitive substring over title and address
    pub search: String,
    pub location: Option<String>,
    pub category: Option<String>,
    pub min_bedrooms: Option<u32>,
    pub max_price: Option<u32>,
    pub min_price: Option<u32>,
}

impl ListingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a listing passes every active criterion
    pub fn matches(&self, listing: &Listing) -> bool {
        if !self.search.is_empty() {
            let query = self.search.to_lowercase();
            if !listing.title.to_lowercase().contains(&query)
                && !listing.address.to_lowercase().contains(&query)
            {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if &listing.location != location {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &listing.category != category {
                return false;
            }
        }
        if let Some(min) = self.min_bedrooms {
            if listing.bedrooms < min {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if listing.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if listing.price > max {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.location.is_none()
            && self.category.is_none()
            && self.min_bedrooms.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// Cycle the location filter through the distinct values present
    pub fn cycle_location(&mut self, listings: &[Listing]) {
        self.location = cycle_distinct(&self.location, distinct(listings, |l| l.location.as_str()));
    }

    /// Cycle the category filter through the distinct values present
    pub fn cycle_category(&mut self, listings: &[Listing]) {
        self.category = cycle_distinct(&self.category, distinct(listings, |l| l.category.as_str()));
    }

    /// Cycle minimum bedrooms: Any, 1+, 2+, 3+, 4+
    pub fn cycle_min_bedrooms(&mut self) {
        self.min_bedrooms = match self.min_bedrooms {
            None => Some(1),
            Some(n) if n < 4 => Some(n + 1),
            Some(_) => None,
        };
    }
}

/// Distinct values of a listing attribute, in first-seen order
fn distinct<'a>(listings: &'a [Listing], key: impl Fn(&'a Listing) -> &'a str) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for listing in listings {
        let value = key(listing);
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

fn cycle_distinct(current: &Option<String>, values: Vec<&str>) -> Option<String> {
    match current {
        None => values.first().map(|s| s.to_string()),
        Some(value) => {
            let pos = values.iter().position(|v| *v == value.as_str());
            match pos {
                Some(i) if i + 1 < values.len() => Some(values[i + 1].to_string()),
                _ => None,
            }
        }
    }
}
