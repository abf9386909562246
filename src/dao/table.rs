//! Ordered in-memory table shared by every entity kind.

use crate::dao::models::{AuthorEntity, GameEntity, ReviewEntity};

/// Largest numeric id a seed may carry. Keeps the counter far from `u64::MAX`.
pub const MAX_SEED_ID: u64 = u32::MAX as u64;

/// Record that can live in a [`Table`].
pub trait Record: Clone {
    /// Entity kind used in logs and error messages.
    const KIND: &'static str;

    /// Identifier compared by string equality on lookups.
    fn id(&self) -> &str;
}

impl Record for GameEntity {
    const KIND: &'static str = "game";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for ReviewEntity {
    const KIND: &'static str = "review";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for AuthorEntity {
    const KIND: &'static str = "author";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Insertion-ordered sequence of records with a monotonic id counter.
///
/// Ids are never reused: removing a row does not rewind the counter, so a
/// later insert cannot collide with a surviving record.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    next_id: u64,
}

impl<T: Record> Table<T> {
    /// Build a table from seed rows, starting the counter past every seeded id.
    ///
    /// Numeric ids above [`MAX_SEED_ID`] are not taken into account.
    pub fn seeded(rows: Vec<T>) -> Self {
        let highest = rows
            .iter()
            .filter_map(|row| row.id().parse::<u64>().ok())
            .filter(|id| *id <= MAX_SEED_ID)
            .max()
            .unwrap_or(0);
        let next_id = highest.max(rows.len() as u64) + 1;
        Self { rows, next_id }
    }

    /// All rows in store order.
    pub fn all(&self) -> &[T] {
        &self.rows
    }

    /// Number of rows currently stored.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row whose id equals `id`.
    pub fn find(&self, id: &str) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Rows matching `predicate`, in store order.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.rows
            .iter()
            .filter(|&row| predicate(row))
            .cloned()
            .collect()
    }

    /// Allocate the next id, build the row with it and append it.
    pub fn insert_with<F>(&mut self, build: F) -> T
    where
        F: FnOnce(String) -> T,
    {
        let id = self.next_id.to_string();
        // Starts at most at MAX_SEED_ID + len + 1, so this cannot overflow.
        self.next_id += 1;
        let row = build(id);
        self.rows.push(row.clone());
        row
    }

    /// Replace the first row matching `id` with `merge(current)` in place.
    pub fn replace_with<F>(&mut self, id: &str, merge: F) -> Option<T>
    where
        F: FnOnce(&T) -> T,
    {
        let index = self.position(id)?;
        let updated = merge(&self.rows[index]);
        self.rows[index] = updated.clone();
        Some(updated)
    }

    /// Remove the first row matching `id`, keeping the order of the others.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.position(id)?;
        Some(self.rows.remove(index))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self::seeded(Vec::new())
    }
}
