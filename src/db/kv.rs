// src/db/kv.rs
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::db::connection::Database;
use crate::errors::StoreError;

/// Key under which the favorited listing ids are stored.
pub const FAVORITES_KEY: &str = "haven-browse-favorites";

pub fn get_value(conn: &Connection, key: &str) -> Result<Option<String>, StoreError> {
    conn.query_row(
        "SELECT value FROM kv_store WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(StoreError::from)
}

pub fn set_value(conn: &Connection, key: &str, value: &str) -> Result<(), StoreError> {
    conn.execute(
        r#"
        INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
        params![key, value, Utc::now().naive_utc()],
    )?;
    Ok(())
}

/// Reads the favorite id list. A missing entry is an empty list; an entry
/// that does not parse is logged and treated as empty.
pub fn load_favorite_ids(conn: &Connection) -> Result<Vec<i64>, StoreError> {
    let Some(raw) = get_value(conn, FAVORITES_KEY)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<i64>>(&raw) {
        Ok(ids) => Ok(ids),
        Err(e) => {
            tracing::warn!(error = %e, "stored favorites are not a JSON id list; ignoring");
            Ok(Vec::new())
        }
    }
}

pub fn save_favorite_ids(conn: &Connection, ids: &[i64]) -> Result<(), StoreError> {
    let json = serde_json::to_string(ids)?;
    set_value(conn, FAVORITES_KEY, &json)
}

/// Sets one id's membership in the favorites list inside a single write
/// transaction, so concurrent writers never lose each other's updates.
pub fn set_favorite(db: &Database, id: i64, is_favorite: bool) -> Result<(), StoreError> {
    update_favorites(db, |ids| {
        let present = ids.contains(&id);
        if is_favorite && !present {
            ids.push(id);
        } else if !is_favorite && present {
            ids.retain(|fav| *fav != id);
        }
        is_favorite
    })
    .map(|_| ())
}

/// Flips one id's membership and returns the new flag.
pub fn toggle_favorite(db: &Database, id: i64) -> Result<bool, StoreError> {
    update_favorites(db, |ids| {
        if ids.contains(&id) {
            ids.retain(|fav| *fav != id);
            false
        } else {
            ids.push(id);
            true
        }
    })
}

fn update_favorites<F>(db: &Database, change: F) -> Result<bool, StoreError>
where
    F: FnOnce(&mut Vec<i64>) -> bool,
{
    db.with_conn(|conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut ids = load_favorite_ids(&tx)?;
        let flag = change(&mut ids);
        save_favorite_ids(&tx, &ids)?;

        tx.commit()?;
        Ok(flag)
    })
}
