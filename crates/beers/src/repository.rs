//! Beer storage abstraction.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use thiserror::Error;

use brewery_core::BeerId;

use crate::beer::Beer;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `save` was called with an id the store does not know.
    #[error("beer {0} not found")]
    NotFound(BeerId),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage collaborator for beer records.
///
/// Implementations own the storage-assigned fields: `save` on a record without
/// an id inserts it (fresh id, version 0, both timestamps set to now); `save`
/// on a record with an id replaces the stored one, keeping `created_date`,
/// bumping `version` and refreshing `last_modified_date`.
pub trait BeerRepository: Send + Sync {
    fn find_by_id(&self, id: &BeerId) -> Result<Option<Beer>, StoreError>;
    fn save(&self, beer: Beer) -> Result<Beer, StoreError>;
}

impl<S> BeerRepository for Arc<S>
where
    S: BeerRepository + ?Sized,
{
    fn find_by_id(&self, id: &BeerId) -> Result<Option<Beer>, StoreError> {
        (**self).find_by_id(id)
    }

    fn save(&self, beer: Beer) -> Result<Beer, StoreError> {
        (**self).save(beer)
    }
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryBeerRepository {
    inner: RwLock<HashMap<BeerId, Beer>>,
}

impl InMemoryBeerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

impl BeerRepository for InMemoryBeerRepository {
    fn find_by_id(&self, id: &BeerId) -> Result<Option<Beer>, StoreError> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map.get(id).cloned())
    }

    fn save(&self, beer: Beer) -> Result<Beer, StoreError> {
        let now = Utc::now().fixed_offset();
        let mut map = self.inner.write().map_err(poisoned)?;

        let stored = match beer.id {
            None => {
                let id = BeerId::new();
                tracing::debug!(beer_id = %id, "inserting beer");
                Beer {
                    id: Some(id),
                    version: Some(0),
                    created_date: Some(now),
                    last_modified_date: Some(now),
                    ..beer
                }
            }
            Some(id) => {
                let existing = map.get(&id).ok_or(StoreError::NotFound(id))?;
                Beer {
                    version: Some(existing.version.unwrap_or(0) + 1),
                    created_date: existing.created_date,
                    last_modified_date: Some(now),
                    ..beer
                }
            }
        };

        if let Some(id) = stored.id {
            map.insert(id, stored.clone());
        }
        Ok(stored)
    }
}
