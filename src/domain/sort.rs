// src/domain/sort.rs

use crate::domain::property::Property;
use std::cmp::Ordering;

/// Orderings offered by the sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    Newest,
    SquareFeet,
    Bedrooms,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Newest,
        SortKey::SquareFeet,
        SortKey::Bedrooms,
    ];

    /// Unrecognized or empty keys yield `None`, which means "keep input order".
    pub fn parse(key: &str) -> Option<SortKey> {
        match key.trim() {
            "price-low" => Some(SortKey::PriceLow),
            "price-high" => Some(SortKey::PriceHigh),
            "newest" => Some(SortKey::Newest),
            "sqft" => Some(SortKey::SquareFeet),
            "bedrooms" => Some(SortKey::Bedrooms),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Newest => "newest",
            SortKey::SquareFeet => "sqft",
            SortKey::Bedrooms => "bedrooms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Newest => "Newest Listed",
            SortKey::SquareFeet => "Square Feet",
            SortKey::Bedrooms => "Most Bedrooms",
        }
    }

    fn compare(&self, a: &Property, b: &Property) -> Ordering {
        match self {
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            SortKey::Newest => b.listed_date.cmp(&a.listed_date),
            SortKey::SquareFeet => b.square_feet.cmp(&a.square_feet),
            SortKey::Bedrooms => b.bedrooms.cmp(&a.bedrooms),
        }
    }
}

/// Sorted copy of `properties`. Equal keys keep their input order.
pub fn sort_properties(properties: &[Property], key: Option<SortKey>) -> Vec<Property> {
    let mut sorted = properties.to_vec();
    if let Some(key) = key {
        sort_in_place(&mut sorted, key);
    }
    sorted
}

/// `slice::sort_by` is stable, which the tie rule relies on.
pub fn sort_in_place(properties: &mut [Property], key: SortKey) {
    properties.sort_by(|a, b| key.compare(a, b));
}
