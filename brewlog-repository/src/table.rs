use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// A keyed collection of rows with its own id sequence.
#[derive(Debug)]
pub struct Table<R> {
    rows: DashMap<i64, R>,
    seq: AtomicI64,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: DashMap::new(),
            seq: AtomicI64::new(0),
        }
    }
}

impl<R: Clone> Table<R> {
    /// Reserves the next id; ids start at 1 and are never reused.
    #[inline]
    pub fn next_id(&self) -> i64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    #[inline]
    pub fn insert(&self, id: i64, row: R) {
        self.rows.insert(id, row);
    }

    #[inline]
    pub fn get(&self, id: i64) -> Option<R> {
        self.rows.get(&id).map(|r| r.value().clone())
    }

    #[inline]
    pub fn contains(&self, id: i64) -> bool {
        self.rows.contains_key(&id)
    }

    /// Replaces an existing row, returning `false` when `id` is unknown.
    pub fn replace(&self, id: i64, row: R) -> bool {
        match self.rows.get_mut(&id) {
            Some(mut entry) => {
                *entry = row;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn remove(&self, id: i64) -> Option<R> {
        self.rows.remove(&id).map(|(_, row)| row)
    }

    /// Rows matching `pred`, ordered by id.
    pub fn scan<F>(&self, pred: F) -> Vec<R>
    where
        F: Fn(&R) -> bool,
    {
        let mut hits: Vec<(i64, R)> = self
            .rows
            .iter()
            .filter(|entry| pred(entry.value()))
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        hits.sort_unstable_by_key(|(id, _)| *id);
        hits.into_iter().map(|(_, row)| row).collect()
    }

    pub fn any<F>(&self, pred: F) -> bool
    where
        F: Fn(&R) -> bool,
    {
        self.rows.iter().any(|entry| pred(entry.value()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
