// src/repository/local.rs
use std::collections::HashSet;
use std::fs;

use crate::db::connection::Database;
use crate::db::kv;
use crate::domain::{FilterCriteria, Property};
use crate::errors::StoreError;
use crate::repository::PropertyRepository;

/// Listing dataset compiled into the binary.
const BUNDLED_DATASET: &str = include_str!("../../data/properties.json");

/// Static dataset plus a favorites list in the local key-value table.
///
/// The records are seeded once and never change; the favorite flag is read
/// back from the key-value entry on every call, so it survives restarts and
/// stays coherent across worker threads.
pub struct LocalRepository {
    records: Vec<Property>,
    db: Database,
}

impl LocalRepository {
    pub fn new(records: Vec<Property>, db: Database) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        if let Some(dup) = records.iter().find(|p| !seen.insert(p.id)) {
            return Err(StoreError::Dataset(format!("duplicate listing id {}", dup.id)));
        }

        // First run: carry the dataset's own favorite flags into the store.
        let flagged: Vec<i64> = records
            .iter()
            .filter(|p| p.is_favorite)
            .map(|p| p.id)
            .collect();
        db.with_conn(|conn| {
            if kv::get_value(conn, kv::FAVORITES_KEY)?.is_none() {
                kv::save_favorite_ids(conn, &flagged)?;
            }
            Ok(())
        })?;

        tracing::info!(records = records.len(), db = db.path(), "local store seeded");
        Ok(Self { records, db })
    }

    pub fn from_json(json: &str, db: Database) -> Result<Self, StoreError> {
        let records: Vec<Property> = serde_json::from_str(json)?;
        Self::new(records, db)
    }

    pub fn bundled(db: Database) -> Result<Self, StoreError> {
        Self::from_json(BUNDLED_DATASET, db)
    }

    pub fn from_dataset_file(path: &str, db: Database) -> Result<Self, StoreError> {
        let json = fs::read_to_string(path)
            .map_err(|e| StoreError::Dataset(format!("Failed to read {path}: {e}")))?;
        Self::from_json(&json, db)
    }

    fn favorite_ids(&self) -> Result<HashSet<i64>, StoreError> {
        let ids = self.db.with_conn(|conn| kv::load_favorite_ids(conn))?;
        Ok(ids.into_iter().collect())
    }

    fn reconciled(&self, record: &Property, favorites: &HashSet<i64>) -> Property {
        record.with_favorite(favorites.contains(&record.id))
    }

    fn record(&self, id: i64) -> Option<&Property> {
        self.records.iter().find(|p| p.id == id)
    }
}

impl PropertyRepository for LocalRepository {
    fn name(&self) -> &'static str {
        "local"
    }

    fn load(&self, criteria: &FilterCriteria) -> Result<Vec<Property>, StoreError> {
        let favorites = self.favorite_ids()?;
        Ok(self
            .records
            .iter()
            .filter(|p| criteria.matches(p))
            .map(|p| self.reconciled(p, &favorites))
            .collect())
    }

    fn find(&self, id: i64) -> Result<Option<Property>, StoreError> {
        let Some(record) = self.record(id) else {
            return Ok(None);
        };
        let favorites = self.favorite_ids()?;
        Ok(Some(self.reconciled(record, &favorites)))
    }

    fn save_favorite(&self, id: i64, is_favorite: bool) -> Result<Option<Property>, StoreError> {
        let Some(record) = self.record(id) else {
            return Ok(None);
        };
        kv::set_favorite(&self.db, id, is_favorite)?;
        Ok(Some(record.with_favorite(is_favorite)))
    }

    /// Read, flip and write happen in one transaction.
    fn toggle(&self, id: i64) -> Result<Option<Property>, StoreError> {
        let Some(record) = self.record(id) else {
            return Ok(None);
        };
        let flag = kv::toggle_favorite(&self.db, id)?;
        Ok(Some(record.with_favorite(flag)))
    }

    fn favorites(&self) -> Result<Vec<Property>, StoreError> {
        let favorites = self.favorite_ids()?;
        Ok(self
            .records
            .iter()
            .filter(|p| favorites.contains(&p.id))
            .map(|p| p.with_favorite(true))
            .collect())
    }
}
