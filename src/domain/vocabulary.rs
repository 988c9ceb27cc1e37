// ============================================================
// Layer 3 — Vocabulary
// ============================================================
// Every distinct token observed in a corpus gets:
//   - an index, handed out 0, 1, 2, ... the first time the
//     token is observed and never changed afterwards
//   - a count per class label
//
// A class missing from an entry's counts means zero occurrences.
//
// Example (classes A then B):
//   A: [["x", "y"]]   B: [["y"]]
//   → x = { index: 0, A: 1 }
//     y = { index: 1, A: 1, B: 1 }

use std::collections::{BTreeMap, HashMap};

/// One row of the vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabEntry {
    /// Stable feature index of the token
    pub index: usize,

    /// Occurrences of the token in the documents of each class
    pub counts: HashMap<String, u64>,
}

impl VocabEntry {
    pub fn new(index: usize) -> Self {
        Self { index, counts: HashMap::new() }
    }

    /// Occurrences in `class`; zero when the class never saw the token
    pub fn count(&self, class: &str) -> u64 {
        self.counts.get(class).copied().unwrap_or(0)
    }

    /// Occurrences across every class
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    fn bump(&mut self, class: &str) {
        match self.counts.get_mut(class) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(class.to_owned(), 1);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    entries:    HashMap<String, VocabEntry>,
    next_index: usize,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `token` in a document of `class`.
    /// Returns the token's index.
    pub fn observe(&mut self, token: &str, class: &str) -> usize {
        match self.entries.get_mut(token) {
            Some(entry) => {
                entry.bump(class);
                entry.index
            }
            None => {
                let index     = self.next_index;
                let mut entry = VocabEntry::new(index);
                entry.bump(class);
                self.entries.insert(token.to_owned(), entry);
                self.next_index += 1;
                index
            }
        }
    }

    /// Insert a complete entry, replacing any previous entry for the
    /// token. Used when reading a persisted vocabulary back.
    pub fn insert_entry(&mut self, token: String, entry: VocabEntry) {
        self.next_index = self.next_index.max(entry.index.saturating_add(1));
        self.entries.insert(token, entry);
    }

    pub fn get(&self, token: &str) -> Option<&VocabEntry> {
        self.entries.get(token)
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.entries.get(token).map(|e| e.index)
    }

    /// Occurrences of `token` in `class`, zero if either is unknown
    pub fn count(&self, token: &str, class: &str) -> u64 {
        self.entries.get(token).map_or(0, |e| e.count(class))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VocabEntry)> {
        self.entries.iter().map(|(t, e)| (t.as_str(), e))
    }

    /// Entries sorted by index (ties broken by token)
    pub fn iter_by_index(&self) -> Vec<(&str, &VocabEntry)> {
        let mut rows: Vec<_> = self.iter().collect();
        rows.sort_by(|a, b| a.1.index.cmp(&b.1.index).then_with(|| a.0.cmp(b.0)));
        rows
    }

    /// Sum of counts per class label over the whole vocabulary
    pub fn class_totals(&self) -> BTreeMap<String, u64> {
        let mut totals = BTreeMap::new();
        for entry in self.entries.values() {
            for (class, count) in &entry.counts {
                *totals.entry(class.clone()).or_insert(0) += count;
            }
        }
        totals
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_first_occurrence() {
        let mut v = Vocabulary::new();
        assert_eq!(v.observe("x", "A"), 0);
        assert_eq!(v.observe("y", "A"), 1);
        assert_eq!(v.observe("x", "B"), 0);
        assert_eq!(v.observe("z", "B"), 2);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_counts_per_class() {
        let mut v = Vocabulary::new();
        v.observe("x", "A");
        v.observe("x", "A");
        v.observe("x", "B");

        assert_eq!(v.count("x", "A"), 2);
        assert_eq!(v.count("x", "B"), 1);
        // Absent class means zero, not unknown
        assert_eq!(v.count("x", "C"), 0);
        assert_eq!(v.count("missing", "A"), 0);
        assert_eq!(v.get("x").unwrap().total(), 3);
    }

    #[test]
    fn test_insert_entry_moves_next_index_past_it() {
        let mut v = Vocabulary::new();
        v.insert_entry("far".into(), VocabEntry::new(9));
        assert_eq!(v.observe("new", "A"), 10);
    }

    #[test]
    fn test_insert_entry_at_max_index_does_not_overflow() {
        let mut v = Vocabulary::new();
        v.insert_entry("last".into(), VocabEntry::new(usize::MAX));
        assert_eq!(v.index_of("last"), Some(usize::MAX));
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_iter_by_index_is_sorted() {
        let mut v = Vocabulary::new();
        for t in ["c", "a", "b"] {
            v.observe(t, "A");
        }
        let order: Vec<&str> = v.iter_by_index().into_iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_class_totals() {
        let mut v = Vocabulary::new();
        v.observe("x", "A");
        v.observe("y", "A");
        v.observe("y", "B");

        let totals = v.class_totals();
        assert_eq!(totals.get("A"), Some(&2));
        assert_eq!(totals.get("B"), Some(&1));
    }
}
