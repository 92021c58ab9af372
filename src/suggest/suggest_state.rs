use crate::api::Suggestion;

/// Navigation direction through the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

/// Query, candidates, selection and dropdown visibility
///
/// Every operation is a plain transition on this struct; no I/O and no
/// clock. `selected == None` means no explicit selection, in which case the
/// first candidate is the implicit default for a commit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestState {
    query: String,
    suggestions: Vec<Suggestion>,
    selected: Option<usize>,
    visible: bool,
}

impl SuggestState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selection as a signed index in `[-1, len - 1]`
    pub fn selection_index(&self) -> isize {
        self.selected.map_or(-1, |i| i as isize)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Candidate a commit would emit right now
    pub fn commit_candidate(&self) -> Option<&Suggestion> {
        if !self.visible {
            return None;
        }
        self.suggestions.get(self.selected.unwrap_or(0))
    }

    /// Replace the query text
    ///
    /// Returns true when the query is long enough to warrant a lookup.
    /// Shorter queries clear the candidates and hide the dropdown at once.
    pub fn set_query(&mut self, text: &str, min_len: usize) -> bool {
        self.query.clear();
        self.query.push_str(text);

        if text.chars().count() < min_len {
            self.suggestions.clear();
            self.selected = None;
            self.visible = false;
            return false;
        }
        true
    }

    /// Install a freshly resolved candidate list
    pub fn resolve(&mut self, suggestions: Vec<Suggestion>) {
        self.visible = !suggestions.is_empty();
        self.suggestions = suggestions;
        self.selected = None;
    }

    /// Move the selection, clamped to `[-1, len - 1]` without wraparound
    pub fn move_selection(&mut self, direction: Direction) {
        if !self.visible || self.suggestions.is_empty() {
            return;
        }

        let last = self.suggestions.len() - 1;
        self.selected = match (direction, self.selected) {
            (Direction::Down, None) => Some(0),
            (Direction::Down, Some(i)) => Some((i + 1).min(last)),
            (Direction::Up, None) | (Direction::Up, Some(0)) => None,
            (Direction::Up, Some(i)) => Some(i - 1),
        };
    }

    /// Commit the selected (or implicit first) candidate
    ///
    /// A successful commit resets the whole state. Returns `None` without
    /// touching anything when the dropdown is hidden or empty.
    pub fn commit(&mut self) -> Option<Suggestion> {
        let committed = self.commit_candidate()?.clone();
        self.reset();
        Some(committed)
    }

    /// Commit the candidate at `index`, e.g. a clicked row
    pub fn commit_index(&mut self, index: usize) -> Option<Suggestion> {
        if !self.visible || index >= self.suggestions.len() {
            return None;
        }
        self.selected = Some(index);
        self.commit()
    }

    /// Hide the dropdown, keeping query and candidates
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Show the dropdown again if there is anything to show
    pub fn reveal(&mut self) {
        self.visible = !self.suggestions.is_empty();
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.suggestions.clear();
        self.selected = None;
        self.visible = false;
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
