// src/tests/router_tests/favorites_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, bundled_app, get, location, post_form};

#[test]
fn toggle_redirects_back_and_updates_favorites() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("fav_toggle");

    let resp = handle(post_form("/property/5/favorite", "return_to=%2Ffavorites"), &app)?;
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/favorites");

    let body = body_string(handle(get("/favorites"), &app)?);
    assert!(body.contains("Hillside Retreat with Views"));
    assert!(body.contains("id=\"favorites-summary\">1 saved property</p>"));
    assert!(body.contains("<span class=\"badge badge-accent\">1</span>"));
    assert!(body.contains("aria-pressed=\"true\""));

    assert!(app.svc.get_by_id(5).unwrap().is_favorite);
    assert_eq!(app.svc.favorites_count(), 1);
    Ok(())
}

#[test]
fn toggling_twice_empties_favorites() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("fav_twice");

    handle(post_form("/property/5/favorite", ""), &app)?;
    handle(post_form("/property/5/favorite", ""), &app)?;

    let body = body_string(handle(get("/favorites"), &app)?);
    assert!(body.contains("No favorite properties yet"));
    assert!(body.contains("Browse Properties"));
    assert!(!app.svc.get_by_id(5).unwrap().is_favorite);
    Ok(())
}

#[test]
fn favorites_are_sorted_on_request() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("fav_sort");
    for id in [6, 11, 2] {
        handle(post_form(&format!("/property/{id}/favorite"), ""), &app)?;
    }

    let body = body_string(handle(get("/favorites?sort=price-high"), &app)?);
    assert!(body.contains("3 saved properties"));

    let estate = body.find("Mountain Modern Estate").unwrap();
    let downtown = body.find("Downtown Luxury Condo").unwrap();
    let starter = body.find("Cozy Starter Condo").unwrap();
    assert!(estate < downtown && downtown < starter);
    Ok(())
}

#[test]
fn offsite_return_paths_fall_back_to_the_detail_page() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("fav_return");

    let resp = handle(
        post_form("/property/3/favorite", "return_to=https%3A%2F%2Fevil.example.com"),
        &app,
    )?;
    assert_eq!(location(&resp), "/property/3");

    let resp = handle(post_form("/property/3/favorite", "return_to=%2F%2Fevil.example.com"), &app)?;
    assert_eq!(location(&resp), "/property/3");
    Ok(())
}

#[test]
fn toggling_an_unknown_property_is_not_found() {
    let app = bundled_app("fav_missing");

    let result = handle(post_form("/property/999/favorite", ""), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
    let result = handle(post_form("/property/abc/favorite", ""), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
    assert_eq!(app.svc.favorites_count(), 0);
}

#[test]
fn toggle_requires_post() {
    let app = bundled_app("fav_get");

    let result = handle(get("/property/5/favorite"), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
    assert_eq!(app.svc.favorites_count(), 0);
}

#[test]
fn resorted_favorites_follow_toggles() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("fav_resort");
    for id in [6, 11, 2] {
        handle(post_form(&format!("/property/{id}/favorite"), ""), &app)?;
    }
    let body = body_string(handle(get("/favorites?sort=price-low"), &app)?);
    assert!(body.contains("3 saved properties"));

    // Removing a favorite drops it from the next sort of the same page.
    handle(post_form("/property/6/favorite", "return_to=%2Ffavorites"), &app)?;
    let body = body_string(handle(get("/favorites?sort=price-high"), &app)?);
    assert!(body.contains("2 saved properties"));
    assert!(!body.contains("Cozy Starter Condo"));

    // A new favorite shows up even though the page never listed it.
    handle(post_form("/property/5/favorite", "return_to=%2Ffavorites"), &app)?;
    let body = body_string(handle(get("/favorites?sort=newest"), &app)?);
    assert!(body.contains("3 saved properties"));
    assert!(body.contains("Hillside Retreat with Views"));
    Ok(())
}
