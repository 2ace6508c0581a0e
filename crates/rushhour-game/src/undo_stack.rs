use std::{
    collections::{VecDeque, vec_deque},
    num::NonZero,
};

/// A bounded last-in-first-out stack.
///
/// When full, pushing drops the oldest entry. Popped entries are gone: there
/// is no redo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoStack<T> {
    stack: VecDeque<T>,
    capacity: NonZero<usize>,
}

impl<T> UndoStack<T> {
    /// Creates an empty stack holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: NonZero<usize>) -> Self {
        Self {
            stack: VecDeque::new(),
            capacity,
        }
    }

    /// Returns the maximum number of entries kept.
    #[must_use]
    pub fn capacity(&self) -> NonZero<usize> {
        self.capacity
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if there is nothing to pop.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Iterates from the oldest entry to the newest.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.stack.iter()
    }

    /// Pushes an entry, dropping the oldest one if the stack is full.
    pub fn push(&mut self, item: T) {
        if self.stack.len() == self.capacity.get() {
            self.stack.pop_front();
        }
        self.stack.push_back(item);
    }

    /// Removes and returns the newest entry.
    pub fn pop(&mut self) -> Option<T> {
        self.stack.pop_back()
    }

    /// Returns the newest entry.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.stack.back()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Rebuilds a stack from saved entries, keeping the newest ones if there
    /// are more than `capacity`.
    #[must_use]
    pub fn from_entries(capacity: NonZero<usize>, entries: impl IntoIterator<Item = T>) -> Self {
        let mut stack = Self::new(capacity);
        for item in entries {
            stack.push(item);
        }
        stack
    }
}

impl<'a, T> IntoIterator for &'a UndoStack<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use super::UndoStack;

    #[test]
    fn push_pop_roundtrip() {
        let mut history = UndoStack::new(NonZero::new(10).unwrap());
        history.push(1);
        history.push(2);
        history.push(3);

        assert_eq!(history.last(), Some(&3));
        assert_eq!(history.pop(), Some(3));
        assert_eq!(history.pop(), Some(2));
        assert_eq!(history.last(), Some(&1));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut history = UndoStack::new(NonZero::new(3).unwrap());
        history.push(1);
        history.push(2);
        history.push(3);
        history.push(4);

        assert_eq!(history.iter().copied().collect::<Vec<_>>(), [2, 3, 4]);
        assert_eq!(history.pop(), Some(4));
        assert_eq!(history.pop(), Some(3));
        assert_eq!(history.pop(), Some(2));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn empty_history_returns_none() {
        let mut history: UndoStack<i32> = UndoStack::new(NonZero::new(5).unwrap());

        assert!(history.is_empty());
        assert_eq!(history.last(), None);
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn clear_resets_history_state() {
        let mut history = UndoStack::new(NonZero::new(5).unwrap());
        history.push(1);
        history.push(2);

        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.pop(), None);

        history.push(4);
        assert_eq!(history.last(), Some(&4));
    }

    #[test]
    fn from_entries_keeps_newest() {
        let history = UndoStack::from_entries(NonZero::new(2).unwrap(), [1, 2, 3]);
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), [2, 3]);
    }
}
