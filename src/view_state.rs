// src/view_state.rs
use url::form_urlencoded;

use crate::domain::{FilterCriteria, PropertyType};
use crate::service::PropertyService;

/// Decoded `key=value` pairs of a query string or form body.
pub type QueryPairs = Vec<(String, String)>;

pub fn parse_pairs(raw: Option<&str>) -> QueryPairs {
    raw.map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Last non-empty value for `key`.
pub fn param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(k, v)| k == key && !v.trim().is_empty())
        .map(|(_, v)| v.trim())
}

/// Parsed value for `key`; malformed values are treated as absent.
fn parsed_param<T: std::str::FromStr>(pairs: &[(String, String)], key: &str) -> Option<T> {
    let raw = param(pairs, key)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::debug!(key, value = raw, "ignoring malformed filter value");
            None
        }
    }
}

/// State shared by every page: the active filters, the header search term,
/// and the two counts shown in the header and filter sidebar.
///
/// Pages are rendered per request: changing a filter, the search term, or
/// clearing both is a new GET whose query `from_query` parses. Both counts
/// are re-derived from the repository each time instead of being cached
/// between toggles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub filters: FilterCriteria,
    pub search_term: String,
    pub favorites_count: usize,
    pub results_count: usize,
}

impl ViewState {
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        let property_type = pairs
            .iter()
            .filter(|(k, _)| k == "type")
            .filter_map(|(_, v)| v.parse::<PropertyType>().ok())
            .fold(Vec::new(), |mut acc, t| {
                if !acc.contains(&t) {
                    acc.push(t);
                }
                acc
            });

        let filters = FilterCriteria {
            price_min: parsed_param(pairs, "price_min"),
            price_max: parsed_param(pairs, "price_max"),
            property_type,
            bedrooms: parsed_param(pairs, "beds"),
            bathrooms: parsed_param(pairs, "baths"),
            square_feet_min: parsed_param(pairs, "sqft_min"),
            square_feet_max: parsed_param(pairs, "sqft_max"),
            location: param(pairs, "location").map(str::to_string),
        };

        Self {
            filters,
            search_term: param(pairs, "q").unwrap_or_default().to_string(),
            ..Default::default()
        }
    }

    /// Filters with `{location: search_term}` merged in when a search is active.
    pub fn effective_criteria(&self) -> FilterCriteria {
        self.filters.with_search_term(&self.search_term)
    }

    pub fn has_active_filters(&self) -> bool {
        !self.effective_criteria().is_empty()
    }

    pub fn recompute_results_count(&mut self, svc: &PropertyService) {
        self.results_count = svc.get_all(&self.effective_criteria()).len();
    }

    /// Called after a favorite toggle.
    pub fn refresh_favorites_count(&mut self, svc: &PropertyService) {
        self.favorites_count = svc.favorites_count();
    }

    /// Query pairs encoding the filters and search term.
    pub fn query_pairs(&self) -> QueryPairs {
        let f = &self.filters;
        let mut pairs: QueryPairs = Vec::new();
        let mut push = |k: &str, v: String| pairs.push((k.to_string(), v));

        if !self.search_term.is_empty() {
            push("q", self.search_term.clone());
        }
        if let Some(v) = f.price_min {
            push("price_min", v.to_string());
        }
        if let Some(v) = f.price_max {
            push("price_max", v.to_string());
        }
        for t in &f.property_type {
            push("type", t.as_str().to_string());
        }
        if let Some(v) = f.min_bedrooms() {
            push("beds", v.to_string());
        }
        if let Some(v) = f.min_bathrooms() {
            push("baths", v.to_string());
        }
        if let Some(v) = f.square_feet_min {
            push("sqft_min", v.to_string());
        }
        if let Some(v) = f.square_feet_max {
            push("sqft_max", v.to_string());
        }
        if let Some(v) = f.location_term() {
            push("location", v.to_string());
        }
        pairs
    }

    /// `to_query` plus extra pairs, e.g. the active sort key.
    pub fn to_query_with(&self, extra: &[(&str, &str)]) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (k, v) in self.query_pairs() {
            ser.append_pair(&k, &v);
        }
        for (k, v) in extra {
            if !v.is_empty() {
                ser.append_pair(k, v);
            }
        }
        ser.finish()
    }

    pub fn to_query(&self) -> String {
        self.to_query_with(&[])
    }

    /// `path` with this state's query string attached.
    pub fn href(&self, path: &str, extra: &[(&str, &str)]) -> String {
        let query = self.to_query_with(extra);
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }
}
