//! Checkbox selection with a derived tri-state "select all".
//!
//! Only the per-item map is stored. The aggregate is recomputed from it on
//! every read, so it cannot desynchronize.

use crate::error::{log_degraded, DashboardError};

/// Rendering state of the "select all" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    /// No item checked
    Unchecked,
    /// Every item checked
    Checked,
    /// Some, but not all, items checked
    Indeterminate,
}

impl TriState {
    /// Checkbox glyph; indeterminate has its own rendering.
    pub fn glyph(&self) -> &'static str {
        match self {
            TriState::Unchecked => "[ ]",
            TriState::Checked => "[x]",
            TriState::Indeterminate => "[-]",
        }
    }
}

/// Aggregate of a set of checkbox states.
pub fn aggregate_of<I>(states: I) -> TriState
where
    I: IntoIterator<Item = bool>,
{
    let mut any_checked = false;
    let mut any_unchecked = false;
    for checked in states {
        if checked {
            any_checked = true;
        } else {
            any_unchecked = true;
        }
    }
    match (any_checked, any_unchecked) {
        (true, false) => TriState::Checked,
        (true, true) => TriState::Indeterminate,
        _ => TriState::Unchecked,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTracker {
    /// Item id → checked, in list order
    entries: Vec<(String, bool)>,
}

impl SelectionTracker {
    /// Create a tracker for the given items, all unchecked.
    ///
    /// Returns `None` when there are no items: the select-all control is
    /// only created if something is selectable.
    pub fn new<I, S>(ids: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<(String, bool)> = ids.into_iter().map(|id| (id.into(), false)).collect();
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    /// Set every item to `checked`.
    pub fn set_all(&mut self, checked: bool) {
        for (_, state) in &mut self.entries {
            *state = checked;
        }
    }

    /// Set one item. Unknown ids are ignored; returns whether the id exists.
    pub fn set_one(&mut self, id: &str, checked: bool) -> bool {
        match self.entries.iter_mut().find(|(entry_id, _)| entry_id == id) {
            Some((_, state)) => {
                *state = checked;
                true
            }
            None => {
                log_degraded("set_one", &DashboardError::missing("checkbox", id));
                false
            }
        }
    }

    /// Flip one item's checkbox.
    pub fn toggle_one(&mut self, id: &str) -> bool {
        let checked = self.is_checked(id);
        self.set_one(id, !checked)
    }

    /// Click on the select-all control.
    ///
    /// A checked control becomes unchecked; unchecked and indeterminate
    /// controls become checked.
    pub fn toggle_all(&mut self) {
        let target = self.aggregate() != TriState::Checked;
        self.set_all(target);
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.entries
            .iter()
            .any(|(entry_id, checked)| entry_id == id && *checked)
    }

    pub fn checked_count(&self) -> usize {
        self.entries.iter().filter(|(_, checked)| *checked).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derived select-all state.
    pub fn aggregate(&self) -> TriState {
        aggregate_of(self.entries.iter().map(|(_, checked)| *checked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> SelectionTracker {
        SelectionTracker::new(["a", "b", "c"]).unwrap()
    }

    #[test]
    fn test_no_items_no_tracker() {
        assert!(SelectionTracker::new(Vec::<String>::new()).is_none());
    }

    #[test]
    fn test_starts_unchecked() {
        assert_eq!(tracker().aggregate(), TriState::Unchecked);
    }

    #[test]
    fn test_set_all_never_indeterminate() {
        let mut t = tracker();
        t.set_one("a", true);
        t.set_all(true);
        assert_eq!(t.aggregate(), TriState::Checked);
        t.set_all(false);
        assert_eq!(t.aggregate(), TriState::Unchecked);
    }

    #[test]
    fn test_partial_is_indeterminate() {
        let mut t = tracker();
        t.set_one("b", true);
        assert_eq!(t.aggregate(), TriState::Indeterminate);
        t.set_one("a", true);
        t.set_one("c", true);
        assert_eq!(t.aggregate(), TriState::Checked);
        t.set_one("a", false);
        assert_eq!(t.aggregate(), TriState::Indeterminate);
    }

    #[test]
    fn test_unknown_id_ignored() {
        let mut t = tracker();
        assert!(!t.set_one("zzz", true));
        assert_eq!(t.aggregate(), TriState::Unchecked);
    }

    #[test]
    fn test_toggle_all_from_indeterminate_checks_everything() {
        let mut t = tracker();
        t.set_one("a", true);
        t.toggle_all();
        assert_eq!(t.aggregate(), TriState::Checked);
        t.toggle_all();
        assert_eq!(t.aggregate(), TriState::Unchecked);
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let glyphs = [
            TriState::Unchecked.glyph(),
            TriState::Checked.glyph(),
            TriState::Indeterminate.glyph(),
        ];
        assert_ne!(glyphs[0], glyphs[1]);
        assert_ne!(glyphs[1], glyphs[2]);
        assert_ne!(glyphs[0], glyphs[2]);
    }

    #[test]
    fn test_aggregate_of_empty() {
        assert_eq!(aggregate_of(std::iter::empty()), TriState::Unchecked);
    }
}
