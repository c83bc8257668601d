// src/controllers/listing.rs
use crate::domain::sort::sort_in_place;
use crate::domain::{Property, SortKey};
use crate::errors::StoreError;

/// Which listing page a controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Browse,
    Favorites,
    Map,
}

impl ListingKind {
    fn failure_message(&self) -> &'static str {
        match self {
            ListingKind::Favorites => "Failed to load favorite properties. Please try again.",
            ListingKind::Browse | ListingKind::Map => "Failed to load properties. Please try again.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    /// Zero items is the "empty" sub-state, distinct from `Error`.
    Success(Vec<Property>),
    Error(String),
}

/// Load/sort/toggle state of one listing page.
///
/// `loading -> success | error`, `success -> loading` on a new query, and
/// `success -> success` on a sort-only change. Each load is stamped with a
/// generation token; a completion carrying an older token is dropped so a
/// slow response can never overwrite a newer one.
#[derive(Debug, Clone)]
pub struct ListingController {
    kind: ListingKind,
    state: PageState,
    sort: Option<SortKey>,
    generation: u64,
}

impl ListingController {
    pub fn new(kind: ListingKind, sort: Option<SortKey>) -> Self {
        Self {
            kind,
            state: PageState::Loading,
            sort,
            generation: 0,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn items(&self) -> &[Property] {
        match &self.state {
            PageState::Success(items) => items,
            _ => &[],
        }
    }

    pub fn kind(&self) -> ListingKind {
        self.kind
    }

    /// True while `token` belongs to the most recent load.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }

    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.state = PageState::Loading;
        self.generation
    }

    /// Returns false when the result belonged to a superseded load.
    pub fn finish_load(&mut self, token: u64, result: Result<Vec<Property>, StoreError>) -> bool {
        if !self.is_current(token) {
            tracing::debug!(token, current = self.generation, "dropping stale listing result");
            return false;
        }

        self.state = match result {
            Ok(mut items) => {
                if let Some(key) = self.sort {
                    sort_in_place(&mut items, key);
                }
                PageState::Success(items)
            }
            Err(e) => {
                tracing::warn!(page = ?self.kind, error = %e, "listing load failed");
                PageState::Error(self.kind.failure_message().to_string())
            }
        };
        true
    }

    /// Runs one full load cycle.
    pub fn load_with<F>(&mut self, fetch: F)
    where
        F: FnOnce() -> Result<Vec<Property>, StoreError>,
    {
        let token = self.begin_load();
        self.finish_load(token, fetch());
    }

    /// Re-sorts loaded items in place. Clearing the key keeps the current order.
    pub fn change_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
        if let (PageState::Success(items), Some(key)) = (&mut self.state, sort) {
            sort_in_place(items, key);
        }
    }

    /// Folds a toggled listing back into the page. The favorites page drops
    /// listings that are no longer favorites.
    ///
    /// Returns false when the page can no longer show the store on its own:
    /// a new favorite that the favorites page never loaded.
    pub fn apply_toggle(&mut self, updated: &Property) -> bool {
        let PageState::Success(items) = &mut self.state else {
            return true;
        };

        match items.iter().position(|p| p.id == updated.id) {
            Some(pos) if self.kind == ListingKind::Favorites && !updated.is_favorite => {
                items.remove(pos);
                true
            }
            Some(pos) => {
                items[pos] = updated.clone();
                true
            }
            None => !(self.kind == ListingKind::Favorites && updated.is_favorite),
        }
    }
}
