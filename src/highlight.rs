//! Per-frame highlight computation
//!
//! Classifies every array index of the current frame against the previous
//! one. Indices that changed this step are "active", indices that changed
//! at some earlier step of the session are "settled", everything else is
//! "baseline". The final pass of a session paints every index "complete".

use std::collections::BTreeSet;

use serde::Serialize;

/// Highlight category of a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Never changed during this session
    Baseline,
    /// Changed between the previous and the current frame
    ActiveChange,
    /// Changed at an earlier step, unchanged now
    Settled,
    /// Sort finished
    Complete,
}

impl Category {
    /// Single-character glyph used in text traces.
    pub fn glyph(self) -> char {
        match self {
            Category::Baseline => '.',
            Category::ActiveChange => '*',
            Category::Settled => '+',
            Category::Complete => '#',
        }
    }
}

/// Indices that changed at least once in the current session.
///
/// Grows monotonically while a session runs and is cleared when a new
/// session starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettledSet(BTreeSet<usize>);

impl SettledSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: usize) -> bool {
        self.0.insert(index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for SettledSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Category assignment for every index of one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HighlightState {
    categories: Vec<Category>,
}

impl HighlightState {
    /// All indices in `Baseline`.
    pub fn baseline(len: usize) -> Self {
        Self {
            categories: vec![Category::Baseline; len],
        }
    }

    /// All indices in `Complete`. Used for the final pass of a session.
    pub fn complete(len: usize) -> Self {
        Self {
            categories: vec![Category::Complete; len],
        }
    }

    pub fn get(&self, index: usize) -> Option<Category> {
        self.categories.get(index).copied()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of indices in `category`.
    pub fn count(&self, category: Category) -> usize {
        self.categories.iter().filter(|&&c| c == category).count()
    }

    /// One glyph per index, e.g. `**.+`.
    pub fn trace(&self) -> String {
        self.categories.iter().map(|c| c.glyph()).collect()
    }
}

/// Compute the highlight state of `current` relative to `previous`.
///
/// Every index that differs is marked active and added to `settled`.
/// Indices already in `settled` that did not change this step are marked
/// settled. `previous` and `current` are expected to have the same length;
/// extra indices in `current` are compared as unchanged.
pub fn compute_highlights(
    previous: &[u64],
    current: &[u64],
    settled: &mut SettledSet,
) -> HighlightState {
    let mut state = HighlightState::baseline(current.len());

    for (i, (prev, cur)) in previous.iter().zip(current).enumerate() {
        if prev != cur {
            state.categories[i] = Category::ActiveChange;
            settled.insert(i);
        }
    }

    for i in settled.iter() {
        if let Some(category) = state.categories.get_mut(i) {
            if *category != Category::ActiveChange {
                *category = Category::Settled;
            }
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use Category::*;

    #[test]
    fn swapped_indices_become_active() {
        let mut settled = SettledSet::new();
        let state = compute_highlights(&[5, 3, 8], &[3, 5, 8], &mut settled);

        assert_eq!(state.categories(), &[ActiveChange, ActiveChange, Baseline]);
        assert_eq!(settled, [0, 1].into_iter().collect());
    }

    #[test]
    fn previously_changed_indices_stay_settled() {
        let mut settled: SettledSet = [0, 1].into_iter().collect();
        let state = compute_highlights(&[3, 5, 8], &[3, 5, 8], &mut settled);

        assert_eq!(state.categories(), &[Settled, Settled, Baseline]);
        assert_eq!(settled.len(), 2);
    }

    #[test]
    fn active_wins_over_settled() {
        let mut settled: SettledSet = [0, 1].into_iter().collect();
        let state = compute_highlights(&[3, 5, 8], &[3, 8, 5], &mut settled);

        assert_eq!(state.categories(), &[Settled, ActiveChange, ActiveChange]);
        assert_eq!(settled, [0, 1, 2].into_iter().collect());
    }

    #[test]
    fn identical_frames_with_empty_settled_are_baseline() {
        let mut settled = SettledSet::new();
        let state = compute_highlights(&[1, 2, 3], &[1, 2, 3], &mut settled);

        assert_eq!(state, HighlightState::baseline(3));
        assert!(settled.is_empty());
    }

    #[test]
    fn settled_set_only_grows() {
        let frames = [vec![3, 2, 1], vec![2, 3, 1], vec![2, 1, 3], vec![1, 2, 3]];
        let mut settled = SettledSet::new();
        let mut sizes = Vec::new();
        for pair in frames.windows(2) {
            compute_highlights(&pair[0], &pair[1], &mut settled);
            sizes.push(settled.len());
        }
        assert_eq!(sizes, vec![2, 3, 3]);
    }

    #[test]
    fn complete_paints_everything() {
        let state = HighlightState::complete(4);
        assert_eq!(state.count(Complete), 4);
        assert_eq!(state.trace(), "####");
    }

    #[test]
    fn trace_uses_one_glyph_per_index() {
        let mut settled: SettledSet = [3].into_iter().collect();
        let state = compute_highlights(&[1, 2, 3, 4], &[2, 1, 3, 4], &mut settled);
        assert_eq!(state.trace(), "**.+");
    }

    #[test]
    fn category_serializes_kebab_case() {
        let json = serde_json::to_string(&vec![ActiveChange, Settled]).unwrap();
        assert_eq!(json, r#"["active-change","settled"]"#);
    }
}
