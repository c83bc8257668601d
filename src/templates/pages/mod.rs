pub mod browse;
pub mod detail;
pub mod error;
pub mod favorites;
pub mod map;

pub use browse::browse_page;
pub use detail::{detail_page, not_found_page};
pub use error::error_page;
pub use favorites::favorites_page;
pub use map::{map_page, MapMarker};
