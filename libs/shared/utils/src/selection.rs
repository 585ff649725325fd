use std::collections::BTreeSet;

/// Row selection for bulk actions. Scoped to the ids currently visible on the page:
/// "select all" never reaches rows on other pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<Id: Ord> {
    selected: BTreeSet<Id>,
}

impl<Id: Ord> Default for Selection<Id> {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }
}

impl<Id: Ord + Clone> Selection<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.selected.contains(id)
    }

    pub fn ids(&self) -> Vec<Id> {
        self.selected.iter().cloned().collect()
    }

    /// Returns whether `id` is selected after the toggle.
    pub fn toggle(&mut self, id: Id) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    pub fn is_all_selected(&self, visible: &[Id]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.selected.contains(id))
    }

    /// Header checkbox: everything visible selected becomes nothing selected, otherwise
    /// exactly the visible ids become selected.
    pub fn toggle_all(&mut self, visible: &[Id]) {
        if self.is_all_selected(visible) {
            self.selected.clear();
        } else {
            self.selected = visible.iter().cloned().collect();
        }
    }

    /// Drops ids that are no longer on screen. Newly revealed rows stay unselected.
    pub fn retain_visible(&mut self, visible: &[Id]) {
        self.selected.retain(|id| visible.contains(id));
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Hands the selection to a bulk action and leaves it empty.
    pub fn take(&mut self) -> Vec<Id> {
        std::mem::take(&mut self.selected).into_iter().collect()
    }
}
