use crate::app::App;
use crate::db::{init_db, Database};
use crate::repository::LocalRepository;
use crate::service::PropertyService;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique SQLite path under the system temp dir.
pub fn temp_db_path(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir()
        .join(format!("haven_{prefix}_{}_{nanos}_{n}.sqlite3", std::process::id()))
        .to_string_lossy()
        .into_owned()
}

/// Initialize a fresh test DB using the production schema
pub fn init_test_db(prefix: &str) -> Database {
    let db = Database::new(temp_db_path(prefix));
    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

/// Service over the bundled dataset with an empty favorites list.
pub fn bundled_service(prefix: &str) -> PropertyService {
    let repo = LocalRepository::bundled(init_test_db(prefix))
        .unwrap_or_else(|e| panic!("bundled dataset failed to load: {e}"));
    PropertyService::new(Box::new(repo))
}

/// What `main` serves, over the bundled dataset.
pub fn bundled_app(prefix: &str) -> App {
    App::new(bundled_service(prefix))
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn post_form(uri: &str, form: &str) -> Request {
    let mut req = Request::new(Body::from(form.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = uri.parse().unwrap();
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
