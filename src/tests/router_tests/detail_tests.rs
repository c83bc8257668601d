// src/tests/router_tests/detail_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, bundled_app, get};

#[test]
fn detail_shows_full_price_and_listing_date() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("detail");

    let resp = handle(get("/property/5"), &app)?;
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Hillside Retreat with Views"));
    assert!(body.contains("id=\"detail-price\">$1,250,000</p>"));
    assert!(body.contains("Listed on February 27, 2024"));
    assert!(body.contains("3,900"));
    Ok(())
}

#[test]
fn gallery_index_wraps() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("detail_gallery");

    // Three images: index 3 wraps to the first, -1 to the last.
    let body = body_string(handle(get("/property/1?image=3"), &app)?);
    assert!(body.contains("1 / 3"));

    let body = body_string(handle(get("/property/1?image=-1"), &app)?);
    assert!(body.contains("3 / 3"));
    assert!(body.contains("href=\"/property/1?image=0\" aria-label=\"Next image\""));
    Ok(())
}

#[test]
fn unknown_property_is_a_404_page() -> Result<(), Box<dyn std::error::Error>> {
    let app = bundled_app("detail_missing");

    for uri in ["/property/999", "/property/abc"] {
        let resp = handle(get(uri), &app)?;
        assert_eq!(resp.status(), 404);
        let body = body_string(resp);
        assert!(body.contains("Property not found"));
        assert!(body.contains("Try Again"));
    }

    assert!(app.svc.get_by_id(999).is_none());
    Ok(())
}
