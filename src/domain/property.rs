// src/domain/property.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of dwelling a listing describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Condo,
    Townhouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [
        PropertyType::House,
        PropertyType::Condo,
        PropertyType::Townhouse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown property type: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single listing, as served to every page.
///
/// Field names serialize in the same camelCase shape as the bundled dataset,
/// with the identifier under `Id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(rename = "Id")]
    pub id: i64,
    pub title: String,
    pub price: u64,

    // Address
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,

    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_feet: u32,
    #[serde(default)]
    pub lot_size: u32,
    pub year_built: i32,
    #[serde(default)]
    pub description: String,

    // Display order matters for these lists.
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    pub status: String,
    pub listed_date: NaiveDate,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Property {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }

    /// First image doubles as the cover.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Copy of this record carrying the given favorite flag.
    pub fn with_favorite(&self, is_favorite: bool) -> Property {
        Property {
            is_favorite,
            ..self.clone()
        }
    }
}

/// `$850K`, as shown on cards and map popups.
pub fn format_price_short(price: u64) -> String {
    format!("${}K", (price as f64 / 1000.0).round() as u64)
}

/// `$1,250,000`, as shown on the detail page.
pub fn format_price_full(price: u64) -> String {
    format!("${}", group_thousands(price))
}

/// `2,450`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `January 15, 2024`
pub fn format_listed_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
