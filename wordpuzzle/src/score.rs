/// Points awarded for an accepted word: one per letter.
pub fn score_word(word: &str) -> i32 {
    word.chars().count() as i32
}
