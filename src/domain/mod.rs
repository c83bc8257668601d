pub mod filters;
pub mod property;
pub mod sort;

pub use filters::FilterCriteria;
pub use property::{Property, PropertyType};
pub use sort::{sort_properties, SortKey};
