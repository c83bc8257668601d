use crate::domain::property::{format_price_short, group_thousands};
use crate::domain::PropertyType;
use crate::view_state::ViewState;
use maud::{html, Markup};

const PRICE_STEPS: &[u64] = &[
    300_000, 400_000, 500_000, 600_000, 750_000, 1_000_000, 1_500_000, 2_000_000, 3_000_000,
];
const SQFT_STEPS: &[u32] = &[500, 1000, 1500, 2000, 2500, 3000, 4000, 5000];

fn price_select(name: &str, any_label: &str, current: Option<u64>) -> Markup {
    html! {
        select name=(name) id=(name) {
            option value="" selected[current.is_none()] { (any_label) }
            @for step in PRICE_STEPS {
                option value=(step) selected[current == Some(*step)] { (format_price_short(*step)) }
            }
        }
    }
}

fn sqft_select(name: &str, any_label: &str, current: Option<u32>) -> Markup {
    html! {
        select name=(name) id=(name) {
            option value="" selected[current.is_none()] { (any_label) }
            @for step in SQFT_STEPS {
                option value=(step) selected[current == Some(*step)] {
                    (group_thousands(*step as u64)) " sqft"
                }
            }
        }
    }
}

fn minimum_select(name: &str, max: u32, current: Option<u32>) -> Markup {
    html! {
        select name=(name) id=(name) {
            option value="" selected[current.is_none()] { "Any" }
            @for n in 1..=max {
                option value=(n) selected[current == Some(n)] { (n) "+" }
            }
        }
    }
}

/// Filter form for the browse and map pages. Submits to `path`, keeping the
/// search term.
pub fn filter_sidebar(view: &ViewState, path: &str) -> Markup {
    let f = &view.filters;

    html! {
        aside class="filter-sidebar" {
            form method="get" action=(path) class="p-6 space-y-6" {
                h2 class="text-xl font-display font-semibold" { "Filters" }

                div class="results-summary" {
                    p class="text-sm text-gray-600" {
                        span class="font-semibold text-primary" id="results-count" { (view.results_count) }
                        " properties found"
                    }
                }

                @if !view.search_term.is_empty() {
                    input type="hidden" name="q" value=(view.search_term);
                }
                @if let Some(location) = f.location_term() {
                    input type="hidden" name="location" value=(location);
                }

                fieldset {
                    legend { "Price Range" }
                    label for="price_min" class="sr-only" { "Minimum price" }
                    (price_select("price_min", "No min", f.price_min))
                    label for="price_max" class="sr-only" { "Maximum price" }
                    (price_select("price_max", "No max", f.price_max))
                }

                fieldset {
                    legend { "Property Type" }
                    @for kind in PropertyType::ALL {
                        label class="flex items-center" {
                            input
                                type="checkbox"
                                name="type"
                                value=(kind.as_str())
                                checked[f.property_type.contains(&kind)];
                            span class="ml-2 text-sm" { (kind.as_str()) }
                        }
                    }
                }

                div {
                    label for="beds" { "Minimum Bedrooms" }
                    (minimum_select("beds", 5, f.min_bedrooms()))
                }

                div {
                    label for="baths" { "Minimum Bathrooms" }
                    (minimum_select("baths", 4, f.min_bathrooms()))
                }

                fieldset {
                    legend { "Square Feet" }
                    (sqft_select("sqft_min", "No min", f.square_feet_min))
                    (sqft_select("sqft_max", "No max", f.square_feet_max))
                }

                div class="space-y-3 pt-4 border-t" {
                    button type="submit" class="btn primary w-full" {
                        "View " (view.results_count) " Properties"
                    }
                    @if view.has_active_filters() {
                        a href=(path) class="btn outline w-full" { "Clear All Filters" }
                    }
                }
            }
        }
    }
}
