//! In-memory entity store.
//!
//! Stands in for the database layer behind the service seam. Entities are
//! keyed by a sequence-assigned integer id and kept in insertion order.
//! Guarded variants run a check and its write under one lock, so invariants
//! like uniqueness or a stock floor cannot be raced past.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::{Mutex, MutexGuard, RwLock};

use librarium_core::result::AppResult;

/// A concurrent map of entities keyed by their integer id.
#[derive(Debug, Default)]
pub struct MemStore<T> {
    items: RwLock<BTreeMap<i64, T>>,
    next_id: AtomicI64,
}

impl<T: Clone> MemStore<T> {
    /// Create an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Allocate the next id, build the entity with it, and insert it.
    pub async fn insert_with(&self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = build(id);
        self.items.write().await.insert(id, item.clone());
        item
    }

    /// Insert after the guard approves the current contents.
    ///
    /// Guard and insert hold the same write lock, so a uniqueness check
    /// cannot interleave with a concurrent insert of the same value. A
    /// rejected insert consumes no id.
    pub async fn insert_guarded(
        &self,
        guard: impl FnOnce(&[&T]) -> AppResult<()>,
        build: impl FnOnce(i64) -> T,
    ) -> AppResult<T> {
        let mut items = self.items.write().await;
        let snapshot: Vec<&T> = items.values().collect();
        guard(&snapshot)?;
        drop(snapshot);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = build(id);
        items.insert(id, item.clone());
        Ok(item)
    }

    /// Fetch one entity by id.
    pub async fn get(&self, id: i64) -> Option<T> {
        self.items.read().await.get(&id).cloned()
    }

    /// All entities in id order.
    pub async fn all(&self) -> Vec<T> {
        self.items.read().await.values().cloned().collect()
    }

    /// Apply a mutation to one entity, returning the updated value.
    pub async fn update_with(&self, id: i64, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut items = self.items.write().await;
        let item = items.get_mut(&id)?;
        apply(item);
        Some(item.clone())
    }

    /// Apply a fallible mutation to one entity under its write lock.
    ///
    /// When the closure rejects the entity, it is left untouched and the
    /// error propagates. `Ok(None)` means the id does not exist.
    pub async fn try_update_with(
        &self,
        id: i64,
        apply: impl FnOnce(&mut T) -> AppResult<()>,
    ) -> AppResult<Option<T>> {
        let mut items = self.items.write().await;
        let Some(item) = items.get_mut(&id) else {
            return Ok(None);
        };
        let mut updated = item.clone();
        apply(&mut updated)?;
        *item = updated.clone();
        Ok(Some(updated))
    }

    /// Update one entity after the guard approves the current contents.
    ///
    /// The guard sees every stored entity (the target included) under the
    /// same write lock the mutation runs under. `Ok(None)` means the id
    /// does not exist; a missing id is reported before the guard runs.
    pub async fn update_guarded(
        &self,
        id: i64,
        guard: impl FnOnce(&[&T]) -> AppResult<()>,
        apply: impl FnOnce(&mut T),
    ) -> AppResult<Option<T>> {
        let mut items = self.items.write().await;
        if !items.contains_key(&id) {
            return Ok(None);
        }
        let snapshot: Vec<&T> = items.values().collect();
        guard(&snapshot)?;
        drop(snapshot);
        let Some(item) = items.get_mut(&id) else {
            return Ok(None);
        };
        apply(item);
        Ok(Some(item.clone()))
    }

    /// Remove one entity by id.
    pub async fn remove(&self, id: i64) -> Option<T> {
        self.items.write().await.remove(&id)
    }

    /// Whether any entity matches the predicate.
    pub async fn any(&self, pred: impl Fn(&T) -> bool) -> bool {
        self.items.read().await.values().any(|item| pred(item))
    }

    /// Number of stored entities.
    pub async fn count(&self) -> u64 {
        self.items.read().await.len() as u64
    }
}

/// Serializes mutations whose guard reads one store and whose write lands
/// in another.
///
/// Per-store locks cannot cover a reference check against a concurrent
/// delete of the referenced entity, so every operation of that shape takes
/// this lock first and only then touches the stores.
#[derive(Debug, Default, Clone)]
pub struct RelationLock {
    inner: Arc<Mutex<()>>,
}

impl RelationLock {
    /// Create a fresh lock shared by the services of one state graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold the lock for the duration of a cross-store critical section.
    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.inner.lock().await
    }
}
