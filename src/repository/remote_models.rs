use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Property, PropertyType};

// request
//  ├── fields
//  ├── where[]          (field, operator, values) AND-combined
//  ├── whereGroups[]    OR-combined sub groups for text search
//  │    └── subGroups[]
//  │         └── conditions[]
//  ├── orderBy[]        (fieldName, sortType)
//  └── pagingInfo       (limit, offset)

/// Columns requested from the remote table.
pub const FIELDS: &[&str] = &[
    "Id",
    "title",
    "price",
    "address",
    "city",
    "state",
    "zip_code",
    "property_type",
    "bedrooms",
    "bathrooms",
    "square_feet",
    "lot_size",
    "year_built",
    "description",
    "features",
    "amenities",
    "images",
    "latitude",
    "longitude",
    "status",
    "listed_date",
    "is_favorite",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Operator {
    GreaterThanOrEqualTo,
    LessThanOrEqualTo,
    ExactMatch,
    Contains,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub field_name: String,
    pub operator: Operator,
    pub values: Vec<Value>,
}

impl Condition {
    pub fn new(field: &str, operator: Operator, values: Vec<Value>) -> Self {
        Self {
            field_name: field.to_string(),
            operator,
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubGroup {
    pub conditions: Vec<Condition>,
    pub operator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhereGroup {
    pub operator: String,
    pub sub_groups: Vec<SubGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBy {
    pub field_name: String,
    pub sort_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PagingInfo {
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub fields: Vec<String>,
    #[serde(rename = "where")]
    pub where_: Vec<Condition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub where_groups: Vec<WhereGroup>,
    pub order_by: Vec<OrderBy>,
    pub paging_info: PagingInfo,
}

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub success: bool,
    /// Absent or `null` when there is nothing to return.
    #[serde(default)]
    pub data: Option<Vec<RemoteRecord>>,
    pub message: Option<String>,
    pub total: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RecordResponse {
    pub success: bool,
    pub data: Option<RemoteRecord>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FavoriteUpdate {
    #[serde(rename = "Id")]
    pub id: i64,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct UpdateRequest {
    pub records: Vec<FavoriteUpdate>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateResponse {
    pub success: bool,
    /// Absent or `null` when there is nothing to return.
    #[serde(default)]
    pub data: Option<Vec<RemoteRecord>>,
    pub message: Option<String>,
}

/// Text lists arrive either as arrays or as one comma-joined string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextList {
    List(Vec<String>),
    Joined(String),
}

impl TextList {
    fn into_vec(self) -> Vec<String> {
        match self {
            TextList::List(items) => items,
            TextList::Joined(joined) => joined
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// One row of the remote `property` table.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteRecord {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(default, alias = "Name")]
    pub title: Option<String>,
    pub price: Option<f64>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub property_type: Option<String>,
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub square_feet: Option<f64>,
    pub lot_size: Option<f64>,
    pub year_built: Option<i32>,
    pub description: Option<String>,
    pub features: Option<TextList>,
    pub amenities: Option<TextList>,
    pub images: Option<TextList>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: Option<String>,
    pub listed_date: Option<String>,
    pub is_favorite: Option<bool>,
}

impl TryFrom<RemoteRecord> for Property {
    type Error = String;

    fn try_from(r: RemoteRecord) -> Result<Self, Self::Error> {
        let property_type: PropertyType = r
            .property_type
            .as_deref()
            .ok_or("missing property_type")?
            .parse()?;

        // Accept both plain dates and full timestamps.
        let listed_date = r
            .listed_date
            .as_deref()
            .and_then(|s| s.get(..10))
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
            .ok_or("missing or malformed listed_date")?;

        let whole = |v: Option<f64>| v.filter(|n| *n >= 0.0).map(|n| n.round() as u32).unwrap_or(0);

        Ok(Property {
            id: r.id,
            title: r.title.unwrap_or_default(),
            price: r.price.filter(|n| *n >= 0.0).ok_or("missing price")?.round() as u64,
            address: r.address.unwrap_or_default(),
            city: r.city.unwrap_or_default(),
            state: r.state.unwrap_or_default(),
            zip_code: r.zip_code.unwrap_or_default(),
            property_type,
            bedrooms: whole(r.bedrooms),
            bathrooms: whole(r.bathrooms),
            square_feet: whole(r.square_feet),
            lot_size: whole(r.lot_size),
            year_built: r.year_built.unwrap_or_default(),
            description: r.description.unwrap_or_default(),
            features: r.features.map(TextList::into_vec).unwrap_or_default(),
            amenities: r.amenities.map(TextList::into_vec).unwrap_or_default(),
            images: r.images.map(TextList::into_vec).unwrap_or_default(),
            latitude: r.latitude,
            longitude: r.longitude,
            status: r.status.unwrap_or_else(|| "For Sale".to_string()),
            listed_date,
            is_favorite: r.is_favorite.unwrap_or(false),
        })
    }
}
