use std::collections::HashMap;

use rand::Rng;

/// Number of letters dealt into every new puzzle.
pub const PUZZLE_LENGTH: usize = 15;

/// Character frequencies of a word or a bag of letters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LetterCounts {
    map: HashMap<char, usize>,
}

impl LetterCounts {
    pub fn new(letters: &str) -> Self {
        let mut map: HashMap<char, usize> = HashMap::with_capacity(26);
        letters.chars().for_each(|c| {
            *map.entry(c).or_default() += 1;
        });
        LetterCounts { map }
    }

    pub fn get(&self, c: char) -> usize {
        self.map.get(&c).copied().unwrap_or(0)
    }

    /// True when every letter of `other` is available here at least as often.
    pub fn covers(&self, other: &LetterCounts) -> bool {
        other
            .map
            .iter()
            .all(|(&c, &count)| self.get(c) >= count)
    }
}

/// Can `word` be assembled from the bag `available`?
pub fn can_build_word(word: &str, available: &str) -> bool {
    LetterCounts::new(available).covers(&LetterCounts::new(word))
}

/// Letters of `bag` left over once every letter of `used` has been taken out.
///
/// Each occurrence in `used` consumes one occurrence from the bag. Letters
/// that are no longer in the bag are skipped. The remainder keeps the bag's
/// order.
pub fn remaining_letters(bag: &str, used: &str) -> String {
    let mut letters: Vec<Option<char>> = bag.chars().map(Some).collect();
    for c in used.chars() {
        if let Some(slot) = letters.iter_mut().find(|slot| **slot == Some(c)) {
            *slot = None;
        }
    }
    letters.into_iter().flatten().collect()
}

pub fn random_letters<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| rng.gen_range('a'..='z')).collect()
}
