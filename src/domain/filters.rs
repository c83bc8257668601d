// src/domain/filters.rs

use crate::domain::property::{Property, PropertyType};
use serde::{Deserialize, Serialize};

/// Optional constraints applied to a listing query.
///
/// Every present dimension must match (AND). Within `property_type` any listed
/// type matches, and `location` matches if any of city, state, address or zip
/// contains it. Numeric bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub price_min: Option<u64>,
    pub price_max: Option<u64>,
    #[serde(default)]
    pub property_type: Vec<PropertyType>,
    /// Minimum bedrooms; zero means "any".
    pub bedrooms: Option<u32>,
    /// Minimum bathrooms; zero means "any".
    pub bathrooms: Option<u32>,
    pub square_feet_min: Option<u32>,
    pub square_feet_max: Option<u32>,
    pub location: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.price_min.is_none()
            && self.price_max.is_none()
            && self.property_type.is_empty()
            && self.min_bedrooms().is_none()
            && self.min_bathrooms().is_none()
            && self.square_feet_min.is_none()
            && self.square_feet_max.is_none()
            && self.location_term().is_none()
    }

    pub fn min_bedrooms(&self) -> Option<u32> {
        self.bedrooms.filter(|n| *n > 0)
    }

    pub fn min_bathrooms(&self) -> Option<u32> {
        self.bathrooms.filter(|n| *n > 0)
    }

    /// Trimmed, non-empty location text.
    pub fn location_term(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// These criteria with the free-text search merged in as the location.
    pub fn with_search_term(&self, search_term: &str) -> FilterCriteria {
        let term = search_term.trim();
        if term.is_empty() {
            return self.clone();
        }
        FilterCriteria {
            location: Some(term.to_string()),
            ..self.clone()
        }
    }

    pub fn matches(&self, p: &Property) -> bool {
        if let Some(min) = self.price_min {
            if p.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if p.price > max {
                return false;
            }
        }
        if !self.property_type.is_empty() && !self.property_type.contains(&p.property_type) {
            return false;
        }
        if let Some(min) = self.min_bedrooms() {
            if p.bedrooms < min {
                return false;
            }
        }
        if let Some(min) = self.min_bathrooms() {
            if p.bathrooms < min {
                return false;
            }
        }
        if let Some(min) = self.square_feet_min {
            if p.square_feet < min {
                return false;
            }
        }
        if let Some(max) = self.square_feet_max {
            if p.square_feet > max {
                return false;
            }
        }
        if let Some(term) = self.location_term() {
            if !location_matches(p, term) {
                return false;
            }
        }
        true
    }

    /// Listings matching these criteria, in input order.
    pub fn apply(&self, properties: &[Property]) -> Vec<Property> {
        properties
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

fn location_matches(p: &Property, term: &str) -> bool {
    let needle = term.to_lowercase();
    p.city.to_lowercase().contains(&needle)
        || p.state.to_lowercase().contains(&needle)
        || p.address.to_lowercase().contains(&needle)
        || p.zip_code.contains(term)
}
