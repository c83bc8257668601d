use crate::app::App;
use crate::controllers::{api, pages};
use crate::errors::{ResultResp, ServerError};
use crate::responses::static_asset;
use crate::view_state::{parse_pairs, QueryPairs};
use astra::Request;
use std::io::Read;

/// Form bodies here are a single hidden field; anything past this is dropped.
const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = parse_pairs(req.uri().query());

    tracing::debug!(%method, %path, "request");

    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => pages::browse(&query, app),
        ("GET", ["favorites"]) => pages::favorites(&query, app),
        ("GET", ["map"]) => pages::map(&query, app),
        ("GET", ["property", id]) => pages::detail(id, &query, app),
        ("POST", ["property", id, "favorite"]) => {
            let form = read_form(req)?;
            pages::toggle_favorite(id, &form, app)
        }
        ("GET", ["api", "properties"]) => api::properties(&query, app),
        ("GET", ["static", name]) => static_asset(name),
        _ => Err(ServerError::NotFound),
    }
}

fn read_form(req: Request) -> Result<QueryPairs, ServerError> {
    let mut body = req.into_body();
    let mut raw = String::new();
    body.reader()
        .take(MAX_FORM_BYTES)
        .read_to_string(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    Ok(parse_pairs(Some(&raw)))
}
