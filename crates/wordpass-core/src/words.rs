//! Unique word extraction
//!
//! Turns free text into the ordered, deduplicated word list the engine
//! consumes.

use std::collections::HashSet;

/// Words are separated by a single space; other whitespace stays part of the word
const WORD_SEPARATOR: char = ' ';

/// Extract the unique ASCII words of at least `min_word_length` characters.
///
/// Order of first occurrence is preserved.
///
/// # Example
/// ```
/// use wordpass_core::extract_unique_words;
/// let words = extract_unique_words("the market and the market of athens", 5);
/// assert_eq!(words, vec!["market", "athens"]);
/// ```
pub fn extract_unique_words(text: &str, min_word_length: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split(WORD_SEPARATOR)
        .filter(|word| word.is_ascii() && word.len() >= min_word_length)
        .filter(|word| seen.insert(*word))
        .map(String::from)
        .collect()
}

/// The first `length` words (all of them if there are fewer)
pub fn take_words(words: &[String], length: usize) -> &[String] {
    &words[..words.len().min(length)]
}
