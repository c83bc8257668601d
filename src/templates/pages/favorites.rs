use crate::controllers::listing::{ListingController, PageState};
use crate::templates::components::{empty_state, error_view, loading, property_grid};
use crate::templates::{desktop_layout, Nav};
use crate::view_state::ViewState;
use maud::{html, Markup};

pub fn favorites_page(view: &ViewState, listing: &ListingController) -> Markup {
    let sort = listing.sort();
    // Favorites ignore the browse filters; only the sort key carries over.
    let page_view = ViewState {
        favorites_count: view.favorites_count,
        ..ViewState::default()
    };
    let retry_href = page_view.href(
        "/favorites",
        &[("sort", sort.map(|k| k.as_str()).unwrap_or(""))],
    );

    desktop_layout(
        "My Favorites",
        view,
        Nav::Favorites,
        html! {
            main class="p-6 space-y-6" {
                @match listing.state() {
                    PageState::Loading => (loading()),
                    PageState::Error(message) => (error_view(message, &retry_href)),
                    PageState::Success(items) if items.is_empty() => (empty_state(
                        "No favorite properties yet",
                        "Start exploring properties and click the heart icon to save your favorites. This will make it easy to compare and revisit properties you love.",
                        "Browse Properties",
                        "/",
                    )),
                    PageState::Success(items) => {
                        div class="flex items-center justify-between" {
                            div {
                                h1 class="text-2xl font-display font-bold" { "My Favorites" }
                                p class="text-gray-600" id="favorites-summary" {
                                    (items.len()) " saved "
                                    (if items.len() == 1 { "property" } else { "properties" })
                                }
                            }
                            a href="/" class="btn outline" { "Add More" }
                        }
                        (property_grid(items, &page_view, "/favorites", sort))
                    }
                }
            }
        },
    )
}
