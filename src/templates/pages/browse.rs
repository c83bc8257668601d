use crate::controllers::listing::{ListingController, PageState};
use crate::templates::components::{
    empty_state, error_view, filter_sidebar, loading, property_grid,
};
use crate::templates::{desktop_layout, Nav};
use crate::view_state::ViewState;
use maud::{html, Markup};

pub fn browse_page(view: &ViewState, listing: &ListingController) -> Markup {
    let sort = listing.sort();
    let retry_href = view.href("/", &[("sort", sort.map(|k| k.as_str()).unwrap_or(""))]);

    desktop_layout(
        "Browse Listings",
        view,
        Nav::Browse,
        html! {
            div class="flex" {
                (filter_sidebar(view, "/"))

                main class="flex-1 p-6" {
                    @match listing.state() {
                        PageState::Loading => (loading()),
                        PageState::Error(message) => (error_view(message, &retry_href)),
                        PageState::Success(items) if items.is_empty() => (empty_state(
                            "No properties found",
                            "We couldn't find any properties matching your current search criteria. Try adjusting your filters or search location to discover more homes.",
                            "Clear All Filters",
                            "/",
                        )),
                        PageState::Success(items) => (property_grid(items, view, "/", sort)),
                    }
                }
            }
        },
    )
}
