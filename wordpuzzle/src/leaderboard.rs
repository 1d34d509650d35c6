use std::cmp::Ordering;

use serde::Serialize;

/// Number of words kept on the global leaderboard.
pub const CAPACITY: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub word: String,
    pub score: i32,
}

impl Entry {
    pub fn new(word: impl Into<String>, score: i32) -> Self {
        Entry {
            word: word.into(),
            score,
        }
    }
}

/// Rank order: highest score first, ties alphabetical.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<entity::high_score::Model> for Entry {
    fn from(model: entity::high_score::Model) -> Self {
        Entry::new(model.word, model.score)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Update {
    /// The word was already ranked; its score is left untouched.
    Duplicate,
    Inserted { evicted: Vec<Entry> },
}

/// Bounded top-N of distinct words.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    capacity: usize,
    // kept sorted in rank order
    entries: Vec<Entry>,
}

impl Leaderboard {
    pub fn new(capacity: usize) -> Self {
        Leaderboard {
            capacity,
            entries: Vec::with_capacity(capacity + 1),
        }
    }

    /// Rank existing entries without trimming them. Call [`Leaderboard::trim`]
    /// to find out which ones no longer fit.
    pub fn from_entries<I: IntoIterator<Item = Entry>>(capacity: usize, entries: I) -> Self {
        let mut entries: Vec<Entry> = entries.into_iter().collect();
        entries.sort();
        Leaderboard { capacity, entries }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|entry| entry.word == word)
    }

    pub fn update(&mut self, word: &str, score: i32) -> Update {
        if self.contains(word) {
            return Update::Duplicate;
        }
        let entry = Entry::new(word, score);
        let position = self.entries.partition_point(|ranked| ranked < &entry);
        self.entries.insert(position, entry);
        Update::Inserted {
            evicted: self.trim(),
        }
    }

    /// Drop everything ranked beyond capacity, returning it lowest ranked last.
    pub fn trim(&mut self) -> Vec<Entry> {
        if self.entries.len() > self.capacity {
            self.entries.split_off(self.capacity)
        } else {
            Vec::new()
        }
    }

    pub fn top(&self, k: usize) -> &[Entry] {
        &self.entries[..k.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Leaderboard::new(CAPACITY)
    }
}
