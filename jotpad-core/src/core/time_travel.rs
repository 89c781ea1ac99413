//! Present/history/future state with undo and redo.
//!
//! Both stacks are kept most-recent-first: `history[0]` is the value `undo`
//! restores next, `future[0]` the value `redo` restores next.

use std::collections::VecDeque;

/// Time-travel state over values of `T`.
///
/// A fresh [`update`](Self::update) clears the redo chain, and
/// [`undo`](Self::undo) moves the undone present onto `future`, so any
/// sequence of undo/redo calls walks back and forth over the same values.
#[derive(Debug, Clone)]
pub struct TimeTravel<T> {
    present: T,
    history: VecDeque<T>,
    future: VecDeque<T>,
    /// Maximum history depth; 0 means unbounded.
    limit: usize,
}

impl<T: Clone + PartialEq> TimeTravel<T> {
    /// Creates state with an unbounded history.
    pub fn new(initial: T) -> Self {
        Self::with_limit(initial, 0)
    }

    /// Creates state whose history keeps at most `limit` entries (0 = unbounded).
    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self {
            present: initial,
            history: VecDeque::new(),
            future: VecDeque::new(),
            limit,
        }
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    /// Past values, most recent first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &T> {
        self.history.iter()
    }

    /// Undone values, most recent first.
    pub fn future(&self) -> impl ExactSizeIterator<Item = &T> {
        self.future.iter()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Replaces the present with `next`, recording the old present in history.
    ///
    /// Returns `false` and records nothing when `next` equals the present.
    pub fn update(&mut self, next: T) -> bool {
        if next == self.present {
            return false;
        }
        let previous = std::mem::replace(&mut self.present, next);
        self.push_history(previous);
        self.future.clear();
        true
    }

    /// Steps back one value. Returns `false` if there is no history.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop_front() else {
            return false;
        };
        let undone = std::mem::replace(&mut self.present, previous);
        self.future.push_front(undone);
        true
    }

    /// Re-applies the most recently undone value. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.push_history(current);
        true
    }

    /// Sets the present to `initial` and clears both stacks.
    pub fn reset(&mut self, initial: T) {
        self.present = initial;
        self.history.clear();
        self.future.clear();
    }

    fn push_history(&mut self, value: T) {
        self.history.push_front(value);
        if self.limit > 0 {
            self.history.truncate(self.limit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(tt: &TimeTravel<&'static str>) -> Vec<&'static str> {
        tt.history().copied().collect()
    }

    fn future_of(tt: &TimeTravel<&'static str>) -> Vec<&'static str> {
        tt.future().copied().collect()
    }

    #[test]
    fn test_update_pushes_previous_present() {
        let mut tt = TimeTravel::new("a");
        assert!(tt.update("b"));
        assert!(tt.update("c"));
        assert_eq!(*tt.present(), "c");
        assert_eq!(history_of(&tt), vec!["b", "a"]);
        assert!(!tt.can_redo());
    }

    #[test]
    fn test_unchanged_update_records_nothing() {
        let mut tt = TimeTravel::new("a");
        assert!(!tt.update("a"));
        assert!(!tt.can_undo());
    }

    #[test]
    fn test_undo_restores_pre_update_value() {
        let mut tt = TimeTravel::new("a");
        tt.update("b");
        assert!(tt.undo());
        assert_eq!(*tt.present(), "a");
        assert!(!tt.can_undo());
        assert_eq!(future_of(&tt), vec!["b"]);
    }

    #[test]
    fn test_redo_after_undo_restores_pre_undo_value() {
        let mut tt = TimeTravel::new("a");
        tt.update("b");
        tt.update("c");
        tt.undo();
        tt.undo();
        assert_eq!(*tt.present(), "a");
        assert_eq!(future_of(&tt), vec!["b", "c"]);

        assert!(tt.redo());
        assert_eq!(*tt.present(), "b");
        assert!(tt.redo());
        assert_eq!(*tt.present(), "c");
        assert_eq!(history_of(&tt), vec!["b", "a"]);
        assert!(!tt.can_redo());
    }

    #[test]
    fn test_fresh_update_after_undo_clears_future() {
        let mut tt = TimeTravel::new("a");
        tt.update("b");
        tt.undo();
        assert!(tt.can_redo());
        tt.update("z");
        assert!(!tt.can_redo());
        assert_eq!(history_of(&tt), vec!["a"]);
    }

    #[test]
    fn test_undo_and_redo_on_empty_stacks_are_noops() {
        let mut tt = TimeTravel::new("a");
        assert!(!tt.undo());
        assert!(!tt.redo());
        assert_eq!(*tt.present(), "a");
    }

    #[test]
    fn test_reset_clears_all_stacks() {
        let mut tt = TimeTravel::new("a");
        tt.update("b");
        tt.update("c");
        tt.undo();
        assert!(tt.can_undo() && tt.can_redo());

        tt.reset("x");
        assert_eq!(*tt.present(), "x");
        assert_eq!(tt.history().len(), 0);
        assert_eq!(tt.future().len(), 0);
    }

    #[test]
    fn test_history_limit_drops_oldest() {
        let mut tt = TimeTravel::with_limit(0, 3);
        for i in 1..=10 {
            tt.update(i);
        }
        let history: Vec<i32> = tt.history().copied().collect();
        assert_eq!(history, vec![9, 8, 7]);

        while tt.undo() {}
        assert_eq!(*tt.present(), 7);
    }
}
