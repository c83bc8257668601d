use crate::controllers::listing::{ListingController, PageState};
use crate::domain::property::format_price_short;
use crate::domain::Property;
use crate::templates::components::{badge, empty_state, error_view, filter_sidebar, loading};
use crate::templates::{desktop_layout, Nav};
use crate::view_state::ViewState;
use maud::{html, Markup, PreEscaped};
use serde::Serialize;

/// Geographic center of the contiguous United States.
const MAP_CENTER: (f64, f64) = (39.8283, -98.5795);

const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1560518883-ce09059eeffa?auto=format&fit=crop&w=400&h=300&q=80";

/// One map pin with the popup content it needs.
#[derive(Debug, Clone, Serialize)]
pub struct MapMarker {
    pub id: i64,
    pub title: String,
    pub price_label: String,
    pub property_type: String,
    pub city: String,
    pub state: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_feet: u32,
    pub image: String,
    pub lat: f64,
    pub lng: f64,
    /// True when the coordinates were made up for display.
    pub approximate: bool,
}

impl MapMarker {
    pub fn new(p: &Property, lat: f64, lng: f64, approximate: bool) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            price_label: format_price_short(p.price),
            property_type: p.property_type.as_str().to_string(),
            city: p.city.clone(),
            state: p.state.clone(),
            bedrooms: p.bedrooms,
            bathrooms: p.bathrooms,
            square_feet: p.square_feet,
            image: p.cover_image().unwrap_or(FALLBACK_IMAGE).to_string(),
            lat,
            lng,
            approximate,
        }
    }
}

const MAP_SCRIPT: &str = r#"
document.addEventListener("DOMContentLoaded", function () {
  var el = document.getElementById("map");
  var data = document.getElementById("map-markers");
  if (!el || !data || typeof L === "undefined") { return; }
  var map = L.map(el).setView([el.dataset.lat, el.dataset.lng], 4);
  L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
    attribution: '&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors'
  }).addTo(map);
  JSON.parse(data.textContent).forEach(function (m) {
    var popup = document.getElementById("marker-" + m.id);
    L.marker([m.lat, m.lng]).addTo(map).bindPopup(popup ? popup.innerHTML : m.title);
  });
});
"#;

fn marker_json(markers: &[MapMarker]) -> String {
    // Keep the payload from closing its <script> element early.
    serde_json::to_string(markers)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/")
}

fn marker_popup(m: &MapMarker) -> Markup {
    html! {
        li class="map-marker" id={ "marker-" (m.id) } data-lat=(format!("{:.5}", m.lat)) data-lng=(format!("{:.5}", m.lng)) {
            div class="popup p-2 max-w-xs" {
                img src=(m.image) alt=(m.title) class="w-full object-cover";
                h3 class="font-display font-semibold text-sm" { (m.title) }
                div class="flex items-center justify-between" {
                    (badge("accent", &m.price_label))
                    span class="text-xs text-gray-500" { (m.property_type) }
                }
                div class="text-xs text-gray-600" { (m.city) ", " (m.state) }
                div class="flex items-center justify-between text-xs text-gray-500" {
                    span { (m.bedrooms) " bed • " (m.bathrooms) " bath" }
                    span { (m.square_feet) " sqft" }
                }
                a class="btn primary w-full" href={ "/property/" (m.id) } { "View Details" }
            }
        }
    }
}

pub fn map_page(view: &ViewState, listing: &ListingController, markers: &[MapMarker]) -> Markup {
    desktop_layout(
        "Map View",
        view,
        Nav::Map,
        html! {
            link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
            script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" defer {}

            div class="flex" {
                (filter_sidebar(view, "/map"))

                main class="flex-1 flex flex-col" {
                    @match listing.state() {
                        PageState::Loading => (loading()),
                        PageState::Error(message) => (error_view(message, &view.href("/map", &[]))),
                        PageState::Success(items) if items.is_empty() => (empty_state(
                            "No Properties Available",
                            "We couldn't find any properties matching your current search criteria. Try adjusting your filters or search location to discover more homes.",
                            "Clear All Filters",
                            "/map",
                        )),
                        PageState::Success(items) => {
                            div class="map-header p-6 flex items-center" {
                                h1 class="text-2xl font-display font-bold" { "Map View" }
                                " " (badge("secondary", &format!("{} properties", items.len())))
                            }
                            div id="map" class="flex-1 h-full w-full"
                                data-lat=(MAP_CENTER.0.to_string()) data-lng=(MAP_CENTER.1.to_string()) {}
                            ul class="map-marker-list sr-only" {
                                @for m in markers {
                                    (marker_popup(m))
                                }
                            }
                            script type="application/json" id="map-markers" {
                                (PreEscaped(marker_json(markers)))
                            }
                            script { (PreEscaped(MAP_SCRIPT)) }
                        }
                    }
                }
            }
        },
    )
}
