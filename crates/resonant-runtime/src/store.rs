//! Category store — the ordered, append-only list of learned categories.
//!
//! Categories are never deleted, merged or reordered, so an index handed
//! out as a label stays valid for the lifetime of the store. The store
//! also keeps the running sum of category counts that the Gaussian prior
//! divides by, so scoring never has to re-sum every category.

use resonant_core::model::CategoryWeight;
use std::ops::Index;

/// Owns every category record of an engine.
#[derive(Debug, Clone)]
pub struct CategoryStore<C> {
    categories: Vec<C>,
    total_count: f64,
}

impl<C> Default for CategoryStore<C> {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            total_count: 0.0,
        }
    }
}

impl<C: CategoryWeight> CategoryStore<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&C> {
        self.categories.get(index)
    }

    pub fn as_slice(&self) -> &[C] {
        &self.categories
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.categories.iter()
    }

    /// Sum of all category counts.
    pub fn total_count(&self) -> f64 {
        self.total_count
    }

    /// Append a category and return its index.
    pub fn push(&mut self, category: C) -> usize {
        self.total_count += category.count();
        self.categories.push(category);
        self.categories.len() - 1
    }

    /// Overwrite the category at `index`, returning the previous record.
    ///
    /// Returns `None` and leaves the store untouched when `index` is out
    /// of range.
    pub fn replace(&mut self, index: usize, category: C) -> Option<C> {
        let slot = self.categories.get_mut(index)?;
        self.total_count += category.count() - slot.count();
        Some(std::mem::replace(slot, category))
    }

    /// Drop every category.
    pub fn clear(&mut self) {
        self.categories.clear();
        self.total_count = 0.0;
    }
}

impl<C> Index<usize> for CategoryStore<C> {
    type Output = C;

    fn index(&self, index: usize) -> &C {
        &self.categories[index]
    }
}

impl<'a, C> IntoIterator for &'a CategoryStore<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Counted(f64);

    impl CategoryWeight for Counted {
        fn count(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn push_returns_sequential_indices() {
        let mut store = CategoryStore::new();
        assert_eq!(store.push(Counted(1.0)), 0);
        assert_eq!(store.push(Counted(1.0)), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.total_count(), 2.0);
    }

    #[test]
    fn replace_keeps_running_total_in_sync() {
        let mut store = CategoryStore::new();
        store.push(Counted(1.0));
        store.push(Counted(3.0));

        let old = store.replace(0, Counted(2.0));
        assert_eq!(old, Some(Counted(1.0)));
        assert_eq!(store.total_count(), 5.0);

        let summed: f64 = store.iter().map(|c| c.count()).sum();
        assert_eq!(store.total_count(), summed);
    }

    #[test]
    fn replace_out_of_range_is_a_no_op() {
        let mut store = CategoryStore::new();
        store.push(Counted(1.0));
        assert_eq!(store.replace(5, Counted(9.0)), None);
        assert_eq!(store.total_count(), 1.0);
        assert_eq!(store[0], Counted(1.0));
    }

    #[test]
    fn clear_resets_total() {
        let mut store = CategoryStore::new();
        store.push(Counted(4.0));
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.total_count(), 0.0);
        assert!(store.get(0).is_none());
    }
}
