//! Lock-guarded in-memory table

use super::Record;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// A map of rows keyed by a sequential id
///
/// `C` is extra state that must change together with id assignment (the
/// invoice-number counter); it lives under the same lock as the rows.
pub struct Table<T, C = ()> {
    inner: RwLock<Inner<T, C>>,
}

struct Inner<T, C> {
    rows: BTreeMap<u64, T>,
    /// Next id to hand out. Only ever increases, so deleted ids are never reused.
    next_id: u64,
    extra: C,
}

impl<T: Record, C: Default> Default for Table<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record, C: Default> Table<T, C> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows: BTreeMap::new(),
                next_id: 1,
                extra: C::default(),
            }),
        }
    }

    /// Insert the row built from the next id
    pub fn insert_with(&self, build: impl FnOnce(u64, &mut C) -> T) -> T {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        let row = build(id, &mut inner.extra);
        inner.rows.insert(id, row.clone());
        row
    }

    /// Insert the row built from the next id unless `build` refuses.
    ///
    /// `build` sees the current rows, so uniqueness checks and the insert
    /// happen under one write lock. A refused insert consumes no id.
    pub fn try_insert_with<E>(
        &self,
        build: impl FnOnce(u64, &BTreeMap<u64, T>) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        let row = build(id, &inner.rows)?;
        inner.next_id += 1;
        inner.rows.insert(id, row.clone());
        Ok(row)
    }

    pub fn get(&self, id: u64) -> Option<T> {
        self.inner.read().rows.get(&id).cloned()
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.inner.read().rows.values().find(|&row| pred(row)).cloned()
    }

    /// Every row matching `pred`, newest first
    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        let mut rows: Vec<T> = self
            .inner
            .read()
            .rows
            .values()
            .filter(|&row| pred(row))
            .cloned()
            .collect();
        sort_newest_first(&mut rows);
        rows
    }

    /// Every row, newest first
    pub fn all(&self) -> Vec<T> {
        self.filter(|_| true)
    }

    /// Run `f` over all rows under a single read lock
    pub fn scan<R>(&self, f: impl FnOnce(&mut dyn Iterator<Item = &T>) -> R) -> R {
        let inner = self.inner.read();
        f(&mut inner.rows.values())
    }

    /// Mutate the row in place, returning the updated copy
    pub fn update(&self, id: u64, f: impl FnOnce(&mut T)) -> Option<T> {
        let mut inner = self.inner.write();
        let row = inner.rows.get_mut(&id)?;
        f(row);
        Some(row.clone())
    }

    pub fn remove(&self, id: u64) -> bool {
        self.inner.write().rows.remove(&id).is_some()
    }

    pub fn count(&self) -> usize {
        self.inner.read().rows.len()
    }
}

/// `createdAt` descending, ties broken by id descending
fn sort_newest_first<T: Record>(rows: &mut [T]) {
    rows.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b.id().cmp(&a.id()))
    });
}
