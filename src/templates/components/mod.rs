use maud::{html, Markup};

pub mod filter_sidebar;
pub mod property_card;
pub mod states;

pub use filter_sidebar::filter_sidebar;
pub use property_card::{favorite_button, property_grid};
pub use states::{empty_state, error_view, loading};

/// `variant` is one of primary, secondary, accent.
pub fn badge(variant: &str, text: &str) -> Markup {
    html! {
        span class={ "badge badge-" (variant) } { (text) }
    }
}
