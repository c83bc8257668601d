// src/tests/router_tests/browse_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, bundled_app, get, post_form};

fn card_count(html: &str) -> usize {
    html.matches("class=\"card property-card\"").count()
}

#[test]
fn home_lists_every_bundled_property() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("browse_all");

    let resp = handle(get("/"), &app)?;
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(card_count(&body), 12);
    assert!(body.contains("<span class=\"font-semibold text-primary\" id=\"results-count\">12</span>"));
    assert!(body.contains("View 12 Properties"));
    assert!(!body.contains("Clear All Filters"));
    Ok(())
}

#[test]
fn price_min_narrows_the_results() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("browse_price");

    let body = body_string(handle(get("/?price_min=500000"), &app)?);
    assert_eq!(card_count(&body), 8);
    assert!(body.contains("id=\"results-count\">8</span>"));
    assert!(!body.contains("Cozy Starter Condo"));
    assert!(body.contains("Mountain Modern Estate"));
    assert!(body.contains("Clear All Filters"));
    Ok(())
}

#[test]
fn search_and_sort_combine() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("browse_sort");

    let body = body_string(handle(get("/?q=austin&sort=price-low"), &app)?);
    assert_eq!(card_count(&body), 2);

    let condo = body.find("Downtown Luxury Condo").unwrap();
    let house = body.find("Modern Family Home with Pool").unwrap();
    assert!(condo < house, "cheaper Austin listing should come first");

    // The sort survives in the favorite buttons' return path.
    assert!(body.contains("value=\"/?q=austin&amp;sort=price-low\""));
    Ok(())
}

#[test]
fn resorting_after_a_toggle_shows_the_new_flag() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("browse_resort");

    let body = body_string(handle(get("/?sort=price-low"), &app)?);
    assert!(!body.contains("aria-pressed=\"true\""));

    let resp = handle(post_form("/property/5/favorite", "return_to=%2F%3Fsort%3Dprice-low"), &app)?;
    assert_eq!(resp.status(), 303);

    let body = body_string(handle(get("/?sort=price-high"), &app)?);
    assert_eq!(card_count(&body), 12);
    assert_eq!(body.matches("aria-pressed=\"true\"").count(), 1);
    assert!(body.contains("<span class=\"badge badge-accent\">1</span>"));

    let estate = body.find("Mountain Modern Estate").unwrap();
    let starter = body.find("Cozy Starter Condo").unwrap();
    assert!(estate < starter, "most expensive listing should come first");
    Ok(())
}

#[test]
fn no_match_shows_the_empty_state() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("browse_empty");

    let body = body_string(handle(get("/?location=Anchorage"), &app)?);
    assert_eq!(card_count(&body), 0);
    assert!(body.contains("No properties found"));
    assert!(body.contains("Clear All Filters"));
    Ok(())
}

#[test]
fn malformed_filters_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("browse_malformed");

    let body = body_string(handle(get("/?price_min=lots&type=Castle&sort=random"), &app)?);
    assert_eq!(card_count(&body), 12);
    Ok(())
}

#[test]
fn map_places_every_listing() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("map");

    let resp = handle(get("/map?type=House"), &app)?;
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(body.matches("class=\"map-marker\"").count(), 5);
    assert!(body.contains("id=\"marker-8\""));
    assert!(body.contains("id=\"map-markers\""));
    assert!(body.contains("5 properties"));
    Ok(())
}

#[test]
fn map_without_results_says_so() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("map_empty");

    let body = body_string(handle(get("/map?price_min=99000000"), &app)?);
    assert!(body.contains("No Properties Available"));
    assert!(!body.contains("id=\"map-markers\""));
    Ok(())
}

#[test]
fn unknown_paths_are_not_found() {
    let app = bundled_app("browse_404");

    let result = handle(get("/nope"), &app);
    assert!(matches!(result, Err(crate::errors::ServerError::NotFound)));

    let result = handle(get("/static/missing.js"), &app);
    assert!(matches!(result, Err(crate::errors::ServerError::NotFound)));
}

#[test]
fn stylesheet_is_served() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("static");

    let resp = handle(get("/static/main.css"), &app)?;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
        Some("text/css; charset=utf-8")
    );
    Ok(())
}
