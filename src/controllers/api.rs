// src/controllers/api.rs
use crate::app::App;
use crate::errors::ResultResp;
use crate::responses::json_response;
use crate::service::PropertyService;
use crate::view_state::{param, ViewState};

/// `GET /api/properties`: the browse query as a JSON array. Unlike the HTML
/// pages a store failure surfaces as an error response.
pub fn properties(pairs: &[(String, String)], app: &App) -> ResultResp {
    let svc = &app.svc;
    let view = ViewState::from_query(pairs);
    let found = svc.try_get_all(&view.effective_criteria())?;
    tracing::debug!(count = found.len(), backend = svc.backend_name(), "api query");

    let sort_key = param(pairs, "sort").unwrap_or_default();
    json_response(&PropertyService::sort_properties(&found, sort_key))
}
