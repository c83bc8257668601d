// src/service.rs
use crate::domain::{sort_properties, FilterCriteria, Property, SortKey};
use crate::errors::StoreError;
use crate::repository::PropertyRepository;

/// Query, sort and favorite operations over whichever repository is configured.
///
/// Constructed once in `main` and shared by reference with every handler.
/// Backend failures never escape the plain methods: reads degrade to empty
/// results and writes to `None`, with the failure logged. `try_get_all` is
/// the one surfacing variant, for pages that must show an error state.
pub struct PropertyService {
    repo: Box<dyn PropertyRepository>,
}

impl PropertyService {
    pub fn new(repo: Box<dyn PropertyRepository>) -> Self {
        Self { repo }
    }

    pub fn backend_name(&self) -> &'static str {
        self.repo.name()
    }

    /// Every listing satisfying all supplied criteria, in store order.
    pub fn try_get_all(&self, criteria: &FilterCriteria) -> Result<Vec<Property>, StoreError> {
        let loaded = self.repo.load(criteria)?;
        // Re-apply locally so the semantics never depend on the backend.
        Ok(criteria.apply(&loaded))
    }

    pub fn get_all(&self, criteria: &FilterCriteria) -> Vec<Property> {
        self.try_get_all(criteria).unwrap_or_else(|e| {
            tracing::warn!(backend = self.backend_name(), error = %e, "listing query failed");
            Vec::new()
        })
    }

    pub fn get_by_id(&self, id: i64) -> Option<Property> {
        self.repo.find(id).unwrap_or_else(|e| {
            tracing::warn!(backend = self.backend_name(), id, error = %e, "listing lookup failed");
            None
        })
    }

    /// Flips the favorite flag and returns the updated listing. On any
    /// failure the stored flag is unchanged and `None` is returned.
    pub fn toggle_favorite(&self, id: i64) -> Option<Property> {
        match self.repo.toggle(id) {
            Ok(Some(updated)) => {
                tracing::info!(id, is_favorite = updated.is_favorite, "favorite toggled");
                Some(updated)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(backend = self.backend_name(), id, error = %e, "favorite toggle failed");
                None
            }
        }
    }

    pub fn try_get_favorites(&self) -> Result<Vec<Property>, StoreError> {
        self.repo.favorites()
    }

    pub fn get_favorites(&self) -> Vec<Property> {
        self.try_get_favorites().unwrap_or_else(|e| {
            tracing::warn!(backend = self.backend_name(), error = %e, "favorites query failed");
            Vec::new()
        })
    }

    pub fn favorites_count(&self) -> usize {
        self.get_favorites().len()
    }

    /// Sorted copy; `sort_key` values that are not recognized keep input order.
    pub fn sort_properties(properties: &[Property], sort_key: &str) -> Vec<Property> {
        sort_properties(properties, SortKey::parse(sort_key))
    }
}
