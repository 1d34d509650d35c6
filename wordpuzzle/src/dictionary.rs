use std::path::Path;

use indexmap::IndexSet;
use rayon::prelude::*;

use crate::letters::LetterCounts;

pub type WordSet = IndexSet<String>;

/// Immutable list of accepted words, lowercase, in load order.
#[derive(Debug, Default)]
pub struct Dictionary {
    words: WordSet,
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Dictionary { words }
    }

    /// Load a newline separated word list.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let dictionary = Dictionary::from_words(text.lines());
        if dictionary.is_empty() {
            tracing::warn!(path = %path.display(), "dictionary is empty, no word will be accepted");
        } else {
            tracing::info!(path = %path.display(), "loaded {} words into dictionary", dictionary.len());
        }
        Ok(dictionary)
    }

    pub fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Every word that can be assembled from `letters`, in dictionary order.
    pub fn buildable_from(&self, letters: &str) -> Vec<&str> {
        let available = LetterCounts::new(letters);
        self.words
            .par_iter()
            .filter(|word| available.covers(&LetterCounts::new(word)))
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
