use crate::errors::ServerError;
use crate::templates::pages::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let (status, message) = match &err {
        ServerError::NotFound => (404, "Page not found".to_string()),
        ServerError::BadRequest(msg) => (400, msg.clone()),
        ServerError::Store(e) => {
            tracing::error!(error = %e, "record store failure reached the router");
            (503, "Listings are temporarily unavailable. Please try again.".to_string())
        }
        ServerError::InternalError => (500, "Internal Server Error".to_string()),
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
