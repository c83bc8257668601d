// src/controllers/pages.rs
use rand::Rng;

use crate::app::App;
use crate::controllers::listing::{ListingController, ListingKind, PageState};
use crate::domain::SortKey;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, html_response_with_status, redirect_see_other};
use crate::service::PropertyService;
use crate::templates::pages::{
    browse_page, detail_page, favorites_page, map_page, not_found_page, MapMarker,
};
use crate::view_state::{param, ViewState};

/// Random fallback pins land inside this box (roughly the lower 48).
const FALLBACK_LAT: std::ops::Range<f64> = 32.0..47.0;
const FALLBACK_LNG: std::ops::Range<f64> = -120.0..-80.0;

pub fn sort_param(pairs: &[(String, String)]) -> Option<SortKey> {
    param(pairs, "sort").and_then(SortKey::parse)
}

pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Filters and search from the query, with the favorites count.
fn page_view(pairs: &[(String, String)], svc: &PropertyService) -> ViewState {
    let mut view = ViewState::from_query(pairs);
    view.refresh_favorites_count(svc);
    view
}

/// A loaded listing already is the result set; only a failed load needs a
/// separate count.
fn settle_results_count(view: &mut ViewState, listing: &ListingController, svc: &PropertyService) {
    match listing.state() {
        PageState::Success(items) => view.results_count = items.len(),
        _ => view.recompute_results_count(svc),
    }
}

/// `GET /`
pub fn browse(pairs: &[(String, String)], app: &App) -> ResultResp {
    let svc = &app.svc;
    let mut view = page_view(pairs, svc);

    let criteria = view.effective_criteria();
    let listing = app.listings.load(
        ListingKind::Browse,
        &view.to_query(),
        sort_param(pairs),
        || svc.try_get_all(&criteria),
    );
    settle_results_count(&mut view, &listing, svc);

    html_response(browse_page(&view, &listing))
}

/// `GET /favorites`
pub fn favorites(pairs: &[(String, String)], app: &App) -> ResultResp {
    let svc = &app.svc;
    let mut view = ViewState::default();
    view.refresh_favorites_count(svc);

    let listing = app.listings.load(ListingKind::Favorites, "", sort_param(pairs), || {
        svc.try_get_favorites()
    });

    html_response(favorites_page(&view, &listing))
}

/// `GET /property/{id}`
pub fn detail(raw_id: &str, pairs: &[(String, String)], app: &App) -> ResultResp {
    let svc = &app.svc;
    let view = page_view(pairs, svc);

    let found = parse_id(raw_id).and_then(|id| svc.get_by_id(id));
    match found {
        Some(property) => {
            let image = param(pairs, "image")
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(0);
            html_response(detail_page(&view, &property, image))
        }
        None => {
            tracing::debug!(id = raw_id, "property not found");
            html_response_with_status(404, not_found_page(&view))
        }
    }
}

/// `GET /map`
pub fn map(pairs: &[(String, String)], app: &App) -> ResultResp {
    let svc = &app.svc;
    let mut view = page_view(pairs, svc);

    let mut listing = ListingController::new(ListingKind::Map, None);
    listing.load_with(|| svc.try_get_all(&view.effective_criteria()));
    settle_results_count(&mut view, &listing, svc);

    let mut rng = rand::thread_rng();
    let markers: Vec<MapMarker> = listing
        .items()
        .iter()
        .map(|p| match p.coordinates() {
            Some(c) => MapMarker::new(p, c.latitude, c.longitude, false),
            None => MapMarker::new(
                p,
                rng.gen_range(FALLBACK_LAT),
                rng.gen_range(FALLBACK_LNG),
                true,
            ),
        })
        .collect();

    html_response(map_page(&view, &listing, &markers))
}

/// Only same-site paths are accepted as redirect targets.
fn safe_return_path(candidate: Option<&str>) -> Option<&str> {
    candidate.filter(|p| p.starts_with('/') && !p.starts_with("//") && !p.contains('\\'))
}

/// `POST /property/{id}/favorite`
pub fn toggle_favorite(
    raw_id: &str,
    form: &[(String, String)],
    app: &App,
) -> ResultResp {
    let id = parse_id(raw_id).ok_or(ServerError::NotFound)?;

    // Absent covers both an unknown id and a store failure; either way the
    // stored flag is unchanged.
    let updated = app.svc.toggle_favorite(id).ok_or(ServerError::NotFound)?;
    app.listings.apply_toggle(&updated);

    let fallback = format!("/property/{}", updated.id);
    let target = safe_return_path(param(form, "return_to")).unwrap_or(&fallback);
    redirect_see_other(target)
}
