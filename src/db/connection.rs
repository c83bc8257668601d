use rusqlite::Connection;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use crate::errors::StoreError;

// Thread-local connection slots, one per database path.
thread_local! {
    static DB_CONNS: RefCell<HashMap<String, Connection>> = RefCell::new(HashMap::new());
}

#[derive(Clone, Debug)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Provides this thread's connection to the closure, opening it on first use.
    ///
    /// Must not be called re-entrantly from inside `f`.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StoreError>,
    {
        DB_CONNS
            .try_with(|cell| {
                let mut slots = cell.borrow_mut();
                if !slots.contains_key(&self.path) {
                    let conn = Connection::open(&self.path)?;
                    conn.busy_timeout(Duration::from_secs(5))?;
                    slots.insert(self.path.clone(), conn);
                }
                match slots.get_mut(&self.path) {
                    Some(conn) => f(conn),
                    None => Err(StoreError::Unavailable(format!(
                        "no connection for {}",
                        self.path
                    ))),
                }
            })
            .map_err(|_| StoreError::Unavailable("connection slot torn down".into()))?
    }
}

/// Initialize database from a SQL schema file
pub fn init_db(db: &Database, schema_path: &str) -> Result<(), StoreError> {
    let schema_sql = fs::read_to_string(schema_path)
        .map_err(|e| StoreError::Dataset(format!("Failed to read schema file: {e}")))?;

    db.with_conn(|conn| {
        conn.execute_batch(&schema_sql)?;
        Ok(())
    })?;

    tracing::info!(schema = schema_path, db = db.path(), "database initialized");
    Ok(())
}
