use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

const MAIN_CSS: &str = include_str!("../../static/main.css");

/// Compiled-in static files, looked up by their path under `/static/`.
pub fn static_asset(name: &str) -> ResultResp {
    let (content_type, body) = match name {
        "main.css" => (mime::TEXT_CSS_UTF_8, MAIN_CSS),
        _ => return Err(ServerError::NotFound),
    };

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
