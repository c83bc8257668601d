// src/tests/router_tests/remote_tests.rs
//
// Drives the remote repository against an in-process astra server that
// speaks the record service's wire format.
use crate::app::App;
use crate::config::RemoteConfig;
use crate::domain::FilterCriteria;
use crate::repository::RemoteRepository;
use crate::router::handle;
use crate::service::PropertyService;
use crate::tests::utils::{body_string, get, location, post_form};
use astra::{Body, Request, Response, ResponseBuilder, Server};
use serde_json::{json, Value};
use std::io::Read;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Default)]
struct FakeStore {
    records: Vec<Value>,
    /// `pagingInfo.offset` of every query received, in order.
    offsets: Vec<usize>,
    /// Acknowledge updates with a bare `{"success": true}`.
    silent_updates: bool,
}

fn record(id: i64) -> Value {
    json!({
        "Id": id,
        "Name": format!("Remote Listing {id}"),
        "price": 100_000 * id,
        "address": format!("{id} Lamar Boulevard"),
        "city": "Austin",
        "state": "TX",
        "zip_code": "78704",
        "property_type": "House",
        "bedrooms": 3,
        "bathrooms": 2,
        "square_feet": 1500,
        "images": "a.jpg, b.jpg",
        "listed_date": "2024-01-01T00:00:00Z",
        "is_favorite": false
    })
}

fn reply(status: u16, body: Value) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn route(store: &Mutex<FakeStore>, req: Request) -> Response {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let mut raw = String::new();
    req.into_body().reader().read_to_string(&mut raw).unwrap();
    let payload: Value = serde_json::from_str(&raw).unwrap_or(Value::Null);

    let mut store = store.lock().unwrap();
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("POST", ["tables", "property", "records", "query"]) => {
            let limit = payload["pagingInfo"]["limit"].as_u64().unwrap() as usize;
            let offset = payload["pagingInfo"]["offset"].as_u64().unwrap() as usize;
            store.offsets.push(offset);

            let favorites_only = payload["where"]
                .as_array()
                .is_some_and(|conds| conds.iter().any(|c| c["fieldName"] == "is_favorite"));
            let matching: Vec<Value> = store
                .records
                .iter()
                .filter(|r| !favorites_only || r["is_favorite"] == true)
                .cloned()
                .collect();
            let page: Vec<Value> = matching.iter().skip(offset).take(limit).cloned().collect();

            reply(200, json!({ "success": true, "data": page, "total": matching.len() }))
        }
        ("GET", ["tables", "property", "records", id]) => {
            let found = store.records.iter().find(|r| r["Id"].to_string() == *id);
            match found {
                Some(r) => reply(200, json!({ "success": true, "data": r })),
                None => reply(404, json!({ "success": false, "message": "Record not found" })),
            }
        }
        ("PATCH", ["tables", "property", "records"]) => {
            let mut updated = Vec::new();
            for change in payload["records"].as_array().cloned().unwrap_or_default() {
                if let Some(r) = store.records.iter_mut().find(|r| r["Id"] == change["Id"]) {
                    r["is_favorite"] = change["is_favorite"].clone();
                    updated.push(r.clone());
                }
            }
            if store.silent_updates {
                reply(200, json!({ "success": true }))
            } else {
                reply(200, json!({ "success": true, "data": updated }))
            }
        }
        _ => reply(404, json!({ "success": false, "message": "no such route" })),
    }
}

fn spawn_store(count: i64) -> (String, Arc<Mutex<FakeStore>>) {
    let store = Arc::new(Mutex::new(FakeStore {
        records: (1..=count).map(record).collect(),
        ..Default::default()
    }));

    let addr: SocketAddr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let shared = Arc::clone(&store);
    thread::spawn(move || {
        let _ = Server::bind(&addr)
            .max_workers(2)
            .serve(move |req, _info| route(&shared, req));
    });

    for _ in 0..100 {
        if TcpStream::connect(addr).is_ok() {
            break;
        }
        thread::sleep(Duration::from_millis(20));
    }

    (format!("http://{addr}"), store)
}

fn remote_app(base_url: String, page_size: usize, max_pages: usize) -> App {
    let repo = RemoteRepository::new(RemoteConfig {
        base_url,
        page_size,
        max_pages,
        timeout: Duration::from_secs(5),
        ..RemoteConfig::default()
    })
    .unwrap();
    App::new(PropertyService::new(Box::new(repo)))
}

#[test]
fn remote_load_follows_every_page() {
    let (url, store) = spawn_store(7);
    let app = remote_app(url, 3, 50);

    let ids: Vec<i64> = app.svc
        .get_all(&FilterCriteria::default())
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(store.lock().unwrap().offsets, vec![0, 3, 6]);
}

#[test]
fn remote_load_stops_at_the_page_cap() {
    let (url, store) = spawn_store(7);
    let app = remote_app(url, 2, 2);

    assert_eq!(app.svc.get_all(&FilterCriteria::default()).len(), 4);
    assert_eq!(store.lock().unwrap().offsets, vec![0, 2]);
}

#[test]
fn remote_results_are_filtered_locally() {
    let (url, _store) = spawn_store(7);
    let app = remote_app(url, 100, 50);

    let criteria = FilterCriteria {
        price_min: Some(500_000),
        ..Default::default()
    };
    let ids: Vec<i64> = app.svc.get_all(&criteria).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![5, 6, 7]);
}

#[test]
fn remote_favorite_round_trip_through_the_router() -> Result<(), Box<dyn std::error::Error>> {
    let (url, _store) = spawn_store(6);
    let app = remote_app(url, 100, 50);

    let resp = handle(post_form("/property/5/favorite", "return_to=%2Ffavorites"), &app)?;
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/favorites");

    let favorites: Vec<i64> = app.svc.get_favorites().iter().map(|p| p.id).collect();
    assert_eq!(favorites, vec![5]);

    let body = body_string(handle(get("/favorites"), &app)?);
    assert!(body.contains("Remote Listing 5"));
    assert!(body.contains("1 saved property"));

    assert!(app.svc.get_by_id(999).is_none());
    let resp = handle(get("/property/999"), &app)?;
    assert_eq!(resp.status(), 404);
    Ok(())
}

#[test]
fn unechoed_update_reads_the_record_back() -> Result<(), Box<dyn std::error::Error>> {
    let (url, store) = spawn_store(6);
    store.lock().unwrap().silent_updates = true;
    let app = remote_app(url, 100, 50);

    let updated = app.svc.toggle_favorite(5).expect("listing 5 exists");
    assert_eq!(updated.id, 5);
    assert!(updated.is_favorite);

    let resp = handle(post_form("/property/5/favorite", "return_to=%2Ffavorites"), &app)?;
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/favorites");
    assert!(!app.svc.get_by_id(5).unwrap().is_favorite);

    // Unknown ids still come back absent.
    assert!(app.svc.toggle_favorite(999).is_none());
    Ok(())
}

#[test]
fn unreachable_store_renders_the_error_state() -> Result<(), Box<dyn std::error::Error>> {
    let app = remote_app("http://127.0.0.1:9".to_string(), 100, 50);

    let resp = handle(get("/"), &app)?;
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Failed to load properties. Please try again."));
    assert!(body.contains("Try Again"));

    let body = body_string(handle(get("/favorites"), &app)?);
    assert!(body.contains("Failed to load favorite properties. Please try again."));

    let result = handle(get("/api/properties"), &app);
    assert!(matches!(result, Err(crate::errors::ServerError::Store(_))));
    Ok(())
}
