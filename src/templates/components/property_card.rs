use crate::domain::property::{format_price_short, group_thousands};
use crate::domain::{Property, SortKey};
use crate::templates::components::badge;
use crate::view_state::ViewState;
use maud::{html, Markup};

/// Heart button posting a toggle, then returning to `return_to`.
pub fn favorite_button(property: &Property, return_to: &str) -> Markup {
    let (class, label) = if property.is_favorite {
        ("favorite-button active", "Remove from favorites")
    } else {
        ("favorite-button", "Add to favorites")
    };

    html! {
        form method="post" action={ "/property/" (property.id) "/favorite" } class="favorite-form" {
            input type="hidden" name="return_to" value=(return_to);
            button type="submit" class=(class) aria-label=(label) aria-pressed=(if property.is_favorite { "true" } else { "false" }) {
                svg xmlns="http://www.w3.org/2000/svg" class="h-4 w-4" viewBox="0 0 24 24"
                    fill=(if property.is_favorite { "currentColor" } else { "none" })
                    stroke="currentColor" stroke-width="2"
                {
                    path d="M19.5 12.572l-7.5 7.428l-7.5 -7.428a5 5 0 1 1 7.5 -6.566a5 5 0 1 1 7.5 6.572" {}
                }
            }
        }
    }
}

pub fn property_card(property: &Property, return_to: &str) -> Markup {
    html! {
        article class="card property-card" data-id=(property.id) {
            div class="relative" {
                a href={ "/property/" (property.id) } {
                    @if let Some(cover) = property.cover_image() {
                        img src=(cover) alt=(property.title) class="w-full h-48 object-cover" loading="lazy";
                    }
                }
                div class="absolute top-3 left-3" {
                    (badge("accent", &format_price_short(property.price)))
                }
                div class="absolute top-3 right-3" {
                    (favorite_button(property, return_to))
                }
                div class="absolute bottom-3 left-3" {
                    (badge("primary", &property.status))
                }
            }

            div class="p-6 space-y-4" {
                h3 class="text-lg font-display font-semibold line-clamp-1" {
                    a href={ "/property/" (property.id) } { (property.title) }
                }
                p class="text-gray-600 text-sm line-clamp-1" {
                    (property.address) ", " (property.city) ", " (property.state)
                }
                div class="flex items-center justify-between text-sm text-gray-600" {
                    span { (property.bedrooms) " beds" }
                    span { (property.bathrooms) " baths" }
                    span { (group_thousands(property.square_feet as u64)) " sqft" }
                }
                div class="pt-2 border-t" {
                    span class="text-sm font-medium text-primary" { (property.property_type.as_str()) }
                }
            }
        }
    }
}

/// Sort form for a listing page. Changing it resubmits the page's own query
/// with the new key.
pub fn sort_dropdown(view: &ViewState, path: &str, sort: Option<SortKey>) -> Markup {
    html! {
        form method="get" action=(path) class="sort-form" {
            @for (k, v) in view.query_pairs() {
                input type="hidden" name=(k) value=(v);
            }
            label class="sr-only" for="sort" { "Sort listings" }
            select id="sort" name="sort" onchange="this.form.requestSubmit()" {
                option value="" selected[sort.is_none()] { "Sort by" }
                @for key in SortKey::ALL {
                    option value=(key.as_str()) selected[sort == Some(key)] { (key.label()) }
                }
            }
            noscript { button type="submit" class="btn" { "Apply" } }
        }
    }
}

pub fn property_grid(
    properties: &[Property],
    view: &ViewState,
    path: &str,
    sort: Option<SortKey>,
) -> Markup {
    let return_to = view.href(path, &[("sort", sort.map(|k| k.as_str()).unwrap_or(""))]);
    let count = properties.len();

    html! {
        section class="property-grid-wrapper" id="listing-results" {
            div class="flex items-center justify-between mb-4" {
                p class="results-count" {
                    strong { (count) } " " (if count == 1 { "property" } else { "properties" })
                }
                (sort_dropdown(view, path, sort))
            }
            div class="property-grid" {
                @for property in properties {
                    (property_card(property, &return_to))
                }
            }
        }
    }
}
