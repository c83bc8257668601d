use crate::domain::property::{format_listed_date, format_price_full, group_thousands};
use crate::domain::Property;
use crate::templates::components::{badge, error_view, favorite_button};
use crate::templates::{desktop_layout, Nav};
use crate::view_state::ViewState;
use maud::{html, Markup};

/// Image index after wrapping `requested` into the gallery.
pub fn gallery_index(requested: i64, image_count: usize) -> usize {
    if image_count == 0 {
        return 0;
    }
    requested.rem_euclid(image_count as i64) as usize
}

fn gallery(property: &Property, index: usize) -> Markup {
    let count = property.images.len();
    let href = |i: i64| format!("/property/{}?image={}", property.id, gallery_index(i, count));

    html! {
        div class="gallery relative" {
            @if let Some(src) = property.images.get(index) {
                img src=(src) alt=(property.title) class="w-full h-full object-cover";
            }
            @if count > 1 {
                a class="gallery-prev" href=(href(index as i64 - 1)) aria-label="Previous image" { "‹" }
                a class="gallery-next" href=(href(index as i64 + 1)) aria-label="Next image" { "›" }
                div class="gallery-dots" {
                    @for i in 0..count {
                        a href=(href(i as i64))
                            class=(if i == index { "dot active" } else { "dot" })
                            aria-label={ "Image " (i + 1) } {}
                    }
                }
                span class="gallery-counter" { (index + 1) " / " (count) }
            }
        }
    }
}

fn stat(label: &str, value: String) -> Markup {
    html! {
        div class="stat" {
            dt class="text-sm text-gray-500" { (label) }
            dd class="font-semibold" { (value) }
        }
    }
}

pub fn detail_page(view: &ViewState, property: &Property, image: i64) -> Markup {
    let index = gallery_index(image, property.images.len());
    let return_to = format!("/property/{}", property.id);

    desktop_layout(
        &property.title,
        view,
        Nav::None,
        html! {
            main class="p-6 space-y-6" {
                a href=(view.href("/", &[])) class="btn ghost" { "← Back to Listings" }

                article class="property-detail max-w-6xl mx-auto card" {
                    (gallery(property, index))

                    div class="p-6 space-y-6" {
                        div class="flex items-center justify-between" {
                            div {
                                h1 class="text-3xl font-display font-bold" { (property.title) }
                                p class="text-gray-600" {
                                    (property.address) ", " (property.city) ", "
                                    (property.state) " " (property.zip_code)
                                }
                            }
                            div class="text-right" {
                                p class="text-3xl font-bold text-accent" id="detail-price" {
                                    (format_price_full(property.price))
                                }
                                (badge("primary", &property.status))
                                (favorite_button(property, &return_to))
                            }
                        }

                        dl class="grid grid-cols-3 gap-4" {
                            (stat("Bedrooms", property.bedrooms.to_string()))
                            (stat("Bathrooms", property.bathrooms.to_string()))
                            (stat("Square Feet", group_thousands(property.square_feet as u64)))
                            (stat("Lot Size", format!("{} sqft", group_thousands(property.lot_size as u64))))
                            (stat("Year Built", property.year_built.to_string()))
                            (stat("Property Type", property.property_type.as_str().to_string()))
                        }

                        section {
                            h2 class="text-xl font-display font-semibold" { "Description" }
                            p { (property.description) }
                        }

                        @if !property.features.is_empty() {
                            section {
                                h2 class="text-xl font-display font-semibold" { "Features" }
                                ul class="features" {
                                    @for feature in &property.features {
                                        li { (feature) }
                                    }
                                }
                            }
                        }

                        @if !property.amenities.is_empty() {
                            section {
                                h2 class="text-xl font-display font-semibold" { "Amenities" }
                                ul class="amenities" {
                                    @for amenity in &property.amenities {
                                        li { (amenity) }
                                    }
                                }
                            }
                        }

                        p class="text-sm text-gray-500" {
                            "Listed on " (format_listed_date(property.listed_date))
                        }
                    }
                }
            }
        },
    )
}

pub fn not_found_page(view: &ViewState) -> Markup {
    desktop_layout(
        "Property not found",
        view,
        Nav::None,
        html! {
            main class="p-6" {
                (error_view("Property not found", "/"))
            }
        },
    )
}
