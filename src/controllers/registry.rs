// src/controllers/registry.rs
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::controllers::listing::{ListingController, ListingKind, PageState};
use crate::domain::{Property, SortKey};
use crate::errors::StoreError;

const MAX_ENTRIES: usize = 32;

/// Cached listings older than this are reloaded even for a sort-only change,
/// so writes made outside this process show up eventually.
const MAX_REUSE_AGE: Duration = Duration::from_secs(60);

struct Entry {
    key: String,
    loaded_at: Instant,
    listing: ListingController,
}

/// Last loaded listing per page and query, shared by every worker.
///
/// A request differing from the cached one only in its sort key re-sorts the
/// cached items instead of going back to the store. Any other request loads.
/// Loads are stamped through the cached controller, so when two workers load
/// the same query only the newest result is kept.
#[derive(Default)]
pub struct ListingRegistry {
    entries: Mutex<Vec<Entry>>,
}

impl ListingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Listing for `kind` and the encoded query `key`, sorted by `sort`.
    pub fn load<F>(
        &self,
        kind: ListingKind,
        key: &str,
        sort: Option<SortKey>,
        fetch: F,
    ) -> ListingController
    where
        F: FnOnce() -> Result<Vec<Property>, StoreError>,
    {
        let token = {
            let mut entries = self.lock();
            let pos = match entries
                .iter()
                .position(|e| e.listing.kind() == kind && e.key == key)
            {
                Some(pos) => pos,
                None => {
                    if entries.len() >= MAX_ENTRIES {
                        entries.remove(0);
                    }
                    entries.push(Entry {
                        key: key.to_string(),
                        loaded_at: Instant::now(),
                        listing: ListingController::new(kind, sort),
                    });
                    entries.len() - 1
                }
            };

            let entry = &mut entries[pos];
            // Clearing the sort means store order, which only a load restores.
            let sort_only = sort.is_some()
                && entry.listing.sort() != sort
                && matches!(entry.listing.state(), PageState::Success(_))
                && entry.loaded_at.elapsed() < MAX_REUSE_AGE;

            entry.listing.change_sort(sort);
            if sort_only {
                tracing::debug!(page = ?kind, "sort-only change, re-sorted cached listing");
                return entry.listing.clone();
            }
            entry.listing.begin_load()
        };

        let mut listing = ListingController::new(kind, sort);
        listing.load_with(fetch);

        let mut entries = self.lock();
        if let Some(pos) = entries
            .iter()
            .position(|e| e.listing.kind() == kind && e.key == key)
        {
            let entry = &mut entries[pos];
            if !entry.listing.is_current(token) {
                tracing::debug!(page = ?kind, token, "newer load in flight, result not cached");
            } else if let PageState::Success(items) = listing.state() {
                entry.listing.finish_load(token, Ok(items.clone()));
                entry.loaded_at = Instant::now();
            } else {
                entries.remove(pos);
            }
        }
        listing
    }

    /// Folds a toggle into every cached listing, dropping the ones that can
    /// no longer reflect it.
    pub fn apply_toggle(&self, updated: &Property) {
        self.lock().retain_mut(|e| e.listing.apply_toggle(updated));
    }
}
