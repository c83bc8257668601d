mod local;
mod remote;
mod remote_models;

pub use local::LocalRepository;
pub use remote::RemoteRepository;

use crate::domain::{FilterCriteria, Property};
use crate::errors::StoreError;

/// Durable storage of listings and their favorite flag.
///
/// `load` may narrow results on the backend side; callers still re-apply the
/// criteria, so a backend that ignores them is correct, just slower.
pub trait PropertyRepository: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    fn load(&self, criteria: &FilterCriteria) -> Result<Vec<Property>, StoreError>;

    fn find(&self, id: i64) -> Result<Option<Property>, StoreError>;

    /// Persists the flag and returns the updated record, or `None` when the
    /// id does not exist.
    fn save_favorite(&self, id: i64, is_favorite: bool) -> Result<Option<Property>, StoreError>;

    fn toggle(&self, id: i64) -> Result<Option<Property>, StoreError> {
        match self.find(id)? {
            Some(current) => self.save_favorite(id, !current.is_favorite),
            None => Ok(None),
        }
    }

    fn favorites(&self) -> Result<Vec<Property>, StoreError> {
        Ok(self
            .load(&FilterCriteria::default())?
            .into_iter()
            .filter(|p| p.is_favorite)
            .collect())
    }
}
