// src/tests/router_tests/api_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, bundled_app, get, post_form};
use serde_json::Value;

fn ids(body: &str) -> Vec<i64> {
    let value: Value = serde_json::from_str(body).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["Id"].as_i64().unwrap())
        .collect()
}

#[test]
fn api_returns_filtered_sorted_json() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("api");

    let resp = handle(get("/api/properties?type=Condo&sort=price-low"), &app)?;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    assert_eq!(ids(&body_string(resp)), vec![6, 12, 2, 9]);
    Ok(())
}

#[test]
fn api_reflects_favorite_flags() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("api_fav");
    handle(post_form("/property/9/favorite", ""), &app)?;

    let body = body_string(handle(get("/api/properties?location=92101"), &app)?);
    let value: Value = serde_json::from_str(&body)?;
    assert_eq!(value[0]["Id"], 9);
    assert_eq!(value[0]["isFavorite"], true);
    assert_eq!(value[0]["listedDate"], "2024-03-05");
    Ok(())
}

#[test]
fn api_combines_every_filter() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("api_combo");

    let body = body_string(handle(
        get("/api/properties?price_min=400000&price_max=1000000&beds=3&baths=2&sqft_min=1500&sqft_max=3000&sort=newest"),
        &app,
    )?);
    assert_eq!(ids(&body), vec![10, 4, 9, 1, 3, 8]);
    Ok(())
}
