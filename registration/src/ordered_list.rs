//! Ordered list value used for the dynamic form fields (additional emails,
//! security questions).
//!
//! Every operation addresses entries by their current index. Removing an entry
//! shifts the ones after it down by one and keeps their relative order.

use serde::{Deserialize, Serialize};

use crate::error::{RegistrationError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> OrderedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Appends an entry and returns its index.
    pub fn push(&mut self, item: T) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Appends an entry unless the list already holds `limit` entries.
    pub fn try_push(&mut self, item: T, limit: usize) -> Result<usize> {
        if self.items.len() >= limit {
            return Err(RegistrationError::ListFull { limit });
        }
        Ok(self.push(item))
    }

    /// Replaces the entry at `index`. Returns the previous value, or `None` when
    /// the index is out of range (the list is left untouched).
    pub fn set(&mut self, index: usize, item: T) -> Option<T> {
        let slot = self.items.get_mut(index)?;
        Some(std::mem::replace(slot, item))
    }

    /// Applies `f` to the entry at `index`. Returns false when out of range.
    pub fn update(&mut self, index: usize, f: impl FnOnce(&mut T)) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }
}

impl<T> From<Vec<T>> for OrderedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> OrderedList<&'static str> {
        OrderedList::from(vec!["a", "b", "c", "d"])
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        for i in 0..4 {
            let mut list = letters();
            let removed = list.remove(i).unwrap();

            let mut expected = vec!["a", "b", "c", "d"];
            expected.remove(i);
            assert_eq!(list.as_slice(), expected.as_slice());
            assert!(!list.iter().any(|item| *item == removed));
        }
    }

    #[test]
    fn test_add_then_remove_restores_list() {
        let mut list = letters();
        let index = list.push("e");
        assert_eq!(index, 4);
        list.remove(index);
        assert_eq!(list, letters());
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut list = letters();
        assert_eq!(list.remove(9), None);
        assert_eq!(list.set(9, "z"), None);
        assert!(!list.update(9, |item| *item = "z"));
        assert_eq!(list, letters());
    }

    #[test]
    fn test_try_push_respects_limit() {
        let mut list = OrderedList::new();
        for n in 0..3 {
            assert_eq!(list.try_push(n, 3).unwrap(), n);
        }
        assert!(matches!(
            list.try_push(3, 3),
            Err(RegistrationError::ListFull { limit: 3 })
        ));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let list = OrderedList::from(vec!["x@y.io".to_string()]);
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["x@y.io"]"#);
    }
}
