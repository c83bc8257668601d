// src/repository/remote.rs
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::config::RemoteConfig;
use crate::domain::{FilterCriteria, Property};
use crate::errors::StoreError;
use crate::repository::remote_models::{
    Condition, FavoriteUpdate, Operator, OrderBy, PagingInfo, QueryRequest, QueryResponse,
    RecordResponse, RemoteRecord, SubGroup, UpdateRequest, UpdateResponse, WhereGroup, FIELDS,
};
use crate::repository::PropertyRepository;

/// Listings held by a remote tabular record service.
///
/// Filter criteria are pushed down as `where` conditions; the location search
/// becomes an OR group over the four address columns.
pub struct RemoteRepository {
    client: Client,
    cfg: RemoteConfig,
}

impl RemoteRepository {
    pub fn new(cfg: RemoteConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| StoreError::Unavailable(format!("HTTP client init failed: {e}")))?;

        Ok(Self { client, cfg })
    }

    fn records_url(&self) -> String {
        format!("{}/tables/{}/records", self.cfg.base_url, self.cfg.table)
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.cfg.api_key {
            Some(key) => req.bearer_auth(key),
            None => req,
        }
    }

    fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, StoreError> {
        let response = self
            .authorized(req)
            .send()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        decode(response)
    }

    fn query_page(&self, request: &QueryRequest) -> Result<QueryResponse, StoreError> {
        let url = format!("{}/query", self.records_url());
        let page: QueryResponse = self.send(self.client.post(url).json(request))?;
        if !page.success {
            return Err(StoreError::Remote(
                page.message.unwrap_or_else(|| "query failed".to_string()),
            ));
        }
        Ok(page)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().unwrap_or_else(|_| "(no body)".to_string());
        return Err(StoreError::Remote(format!("{status} - {text}")));
    }
    let body = response
        .text()
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;
    Ok(serde_json::from_str(&body)?)
}

/// Records that fail conversion are skipped, not fatal.
fn convert(records: Vec<RemoteRecord>) -> Vec<Property> {
    records
        .into_iter()
        .filter_map(|r| {
            let id = r.id;
            match Property::try_from(r) {
                Ok(p) => Some(p),
                Err(e) => {
                    tracing::warn!(id, error = %e, "skipping malformed remote record");
                    None
                }
            }
        })
        .collect()
}

/// Translate filter criteria into a paged query request.
pub(crate) fn build_query(criteria: &FilterCriteria, paging: PagingInfo) -> QueryRequest {
    let mut conditions = Vec::new();

    if let Some(min) = criteria.price_min {
        conditions.push(Condition::new("price", Operator::GreaterThanOrEqualTo, vec![json!(min)]));
    }
    if let Some(max) = criteria.price_max {
        conditions.push(Condition::new("price", Operator::LessThanOrEqualTo, vec![json!(max)]));
    }
    if !criteria.property_type.is_empty() {
        let values = criteria
            .property_type
            .iter()
            .map(|t| Value::from(t.as_str()))
            .collect();
        conditions.push(Condition::new("property_type", Operator::ExactMatch, values));
    }
    if let Some(min) = criteria.min_bedrooms() {
        conditions.push(Condition::new("bedrooms", Operator::GreaterThanOrEqualTo, vec![json!(min)]));
    }
    if let Some(min) = criteria.min_bathrooms() {
        conditions.push(Condition::new("bathrooms", Operator::GreaterThanOrEqualTo, vec![json!(min)]));
    }
    if let Some(min) = criteria.square_feet_min {
        conditions.push(Condition::new("square_feet", Operator::GreaterThanOrEqualTo, vec![json!(min)]));
    }
    if let Some(max) = criteria.square_feet_max {
        conditions.push(Condition::new("square_feet", Operator::LessThanOrEqualTo, vec![json!(max)]));
    }

    let where_groups = match criteria.location_term() {
        Some(term) => vec![WhereGroup {
            operator: "OR".to_string(),
            sub_groups: ["city", "state", "address", "zip_code"]
                .iter()
                .map(|field| SubGroup {
                    conditions: vec![Condition::new(field, Operator::Contains, vec![json!(term)])],
                    operator: "OR".to_string(),
                })
                .collect(),
        }],
        None => Vec::new(),
    };

    QueryRequest {
        fields: FIELDS.iter().map(|f| f.to_string()).collect(),
        where_: conditions,
        where_groups,
        order_by: vec![OrderBy {
            field_name: "Id".to_string(),
            sort_type: "ASC".to_string(),
        }],
        paging_info: paging,
    }
}

impl PropertyRepository for RemoteRepository {
    fn name(&self) -> &'static str {
        "remote"
    }

    /// Pages through the result set until a short page, the reported total,
    /// or `max_pages` is reached.
    fn load(&self, criteria: &FilterCriteria) -> Result<Vec<Property>, StoreError> {
        let limit = self.cfg.page_size;
        let mut out = Vec::new();

        for page in 0..self.cfg.max_pages {
            let offset = page * limit;
            let request = build_query(criteria, PagingInfo { limit, offset });
            let response = self.query_page(&request)?;

            let records = response.data.unwrap_or_default();
            let fetched = records.len();
            out.extend(convert(records));

            let total_reached = response.total.is_some_and(|total| offset + fetched >= total);
            if fetched < limit || total_reached {
                tracing::debug!(pages = page + 1, records = out.len(), "remote query complete");
                return Ok(out);
            }
        }

        tracing::warn!(
            max_pages = self.cfg.max_pages,
            records = out.len(),
            "remote query truncated at page cap"
        );
        Ok(out)
    }

    fn find(&self, id: i64) -> Result<Option<Property>, StoreError> {
        let url = format!("{}/{id}", self.records_url());
        let response = self
            .authorized(self.client.get(url))
            .send()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body: RecordResponse = decode(response)?;
        if !body.success {
            return Err(StoreError::Remote(
                body.message.unwrap_or_else(|| format!("lookup of {id} failed")),
            ));
        }
        Ok(body.data.and_then(|r| convert(vec![r]).into_iter().next()))
    }

    fn save_favorite(&self, id: i64, is_favorite: bool) -> Result<Option<Property>, StoreError> {
        let request = UpdateRequest {
            records: vec![FavoriteUpdate { id, is_favorite }],
        };
        let body: UpdateResponse = self.send(self.client.patch(self.records_url()).json(&request))?;
        if !body.success {
            return Err(StoreError::Remote(
                body.message.unwrap_or_else(|| format!("update of {id} failed")),
            ));
        }
        let echoed = convert(body.data.unwrap_or_default())
            .into_iter()
            .find(|p| p.id == id);
        match echoed {
            Some(updated) => Ok(Some(updated)),
            // Some stores acknowledge an update without echoing the rows.
            None => {
                tracing::debug!(id, "update not echoed, reading the record back");
                self.find(id)
            }
        }
    }

    fn favorites(&self) -> Result<Vec<Property>, StoreError> {
        // Pushed down rather than scanning every page.
        let limit = self.cfg.page_size;
        let mut request = build_query(&FilterCriteria::default(), PagingInfo { limit, offset: 0 });
        request
            .where_
            .push(Condition::new("is_favorite", Operator::ExactMatch, vec![json!(true)]));

        let mut out = Vec::new();
        for page in 0..self.cfg.max_pages {
            request.paging_info.offset = page * limit;
            let response = self.query_page(&request)?;
            let records = response.data.unwrap_or_default();
            let fetched = records.len();
            out.extend(convert(records).into_iter().filter(|p| p.is_favorite));
            if fetched < limit {
                break;
            }
        }
        Ok(out)
    }
}
