pub mod assets;
pub mod errors;
pub mod html;
pub mod json;

pub use assets::static_asset;
pub use errors::html_error_response;

// Normal HTML response
pub use html::{html_response, html_response_with_status, redirect_see_other};
pub use json::json_response;
