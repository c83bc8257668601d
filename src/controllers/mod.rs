pub mod api;
pub mod listing;
pub mod pages;
pub mod registry;
