//! Password derivation engine
//!
//! Maps `(length, special characters, unique words)` to a password of exactly
//! `length` characters, or fails. Stateless: nothing survives between calls
//! and the caller's word list is only read.

use crate::fold::{digit_for_word, is_numeric_word, letter_for_word, word_index};
use crate::password::Password;
use crate::DeriveError;
use zeroize::Zeroizing;

/// Single entry point for password generation
pub trait PasswordGenerator {
    fn generate<S: AsRef<str>>(
        &self,
        length: usize,
        special_chars: &[char],
        words: &[S],
    ) -> Result<Password, DeriveError>;
}

/// The word-seeded generator backed by [`derive`]
#[derive(Debug, Clone, Copy, Default)]
pub struct WordGenerator;

impl PasswordGenerator for WordGenerator {
    fn generate<S: AsRef<str>>(
        &self,
        length: usize,
        special_chars: &[char],
        words: &[S],
    ) -> Result<Password, DeriveError> {
        derive(length, special_chars, words)
    }
}

/// Output buffer; `None` marks an unfilled slot
type Slots = Zeroizing<Vec<Option<char>>>;

/// Derive a password from an ordered list of unique words
///
/// # Arguments
/// * `length` - Exact number of characters to produce
/// * `special_chars` - Special characters, each placed exactly once
/// * `words` - Unique words in text order; the last `special_chars.len()`
///   of them position the special characters
///
/// # Errors
/// * [`DeriveError::InvalidLength`] for a zero length
/// * [`DeriveError::TooManySpecialChars`] if they cannot all fit
/// * [`DeriveError::InsufficientMaterial`] if there are too few words, or
///   more digits than free slots
/// * [`DeriveError::IncompleteOutput`] if the letters run out before every
///   slot is filled
pub fn derive<S: AsRef<str>>(
    length: usize,
    special_chars: &[char],
    words: &[S],
) -> Result<Password, DeriveError> {
    if length == 0 {
        return Err(DeriveError::InvalidLength(length));
    }
    if special_chars.len() > length {
        return Err(DeriveError::TooManySpecialChars {
            special: special_chars.len(),
            length,
        });
    }
    if words.len() < special_chars.len() {
        return Err(DeriveError::InsufficientMaterial(format!(
            "{} special characters need at least as many words, got {}",
            special_chars.len(),
            words.len()
        )));
    }

    let (remaining, special_words) = words.split_at(words.len() - special_chars.len());
    log::debug!(
        "Deriving {} chars: {} special words, {} remaining words",
        length,
        special_words.len(),
        remaining.len()
    );

    let mut slots: Slots = Zeroizing::new(vec![None; length]);
    place_special_chars(&mut slots, special_chars, special_words);
    let letter_words = place_digits(&mut slots, remaining)?;
    place_letters(&mut slots, &letter_words);

    let unfilled = slots.iter().filter(|slot| slot.is_none()).count();
    if unfilled > 0 {
        return Err(DeriveError::IncompleteOutput { unfilled, length });
    }

    Ok(Password::from_chars(slots.iter().flatten().copied()))
}

/// Pass 1: claim one slot per special-character word and write the specials there
fn place_special_chars<S: AsRef<str>>(slots: &mut Slots, special_chars: &[char], words: &[S]) {
    let length = slots.len();
    let mut claimed = vec![false; length];

    for (&special, word) in special_chars.iter().zip(words) {
        let candidate = word_index(word.as_ref(), length);
        // A free slot always exists: fewer specials than slots were claimed so far
        let idx = (0..length)
            .map(|offset| (candidate + offset) % length)
            .find(|&i| !claimed[i])
            .unwrap_or(candidate);
        if idx != candidate {
            log::trace!("Special slot {} taken, probed to {}", candidate, idx);
        }
        claimed[idx] = true;
        slots[idx] = Some(special);
    }
}

/// Pass 2: fill free slots with digits from the numeric subset.
///
/// Returns the words left for the letter pass, in their original order.
fn place_digits<'a, S: AsRef<str>>(
    slots: &mut Slots,
    remaining: &'a [S],
) -> Result<Vec<&'a str>, DeriveError> {
    if remaining.is_empty() {
        return Err(DeriveError::InsufficientMaterial(
            "no words left for the digit pass".into(),
        ));
    }

    // First word always joins; later ones only when their code sum is divisible by 7
    let (numeric, letter_words): (Vec<(usize, &str)>, Vec<(usize, &str)>) = remaining
        .iter()
        .map(|word| word.as_ref())
        .enumerate()
        .partition(|&(i, word)| i == 0 || is_numeric_word(word));

    let mut digits = numeric.iter().map(|&(_, word)| digit_for_word(word));
    let queued = numeric.len();
    let placed = fill_free_slots(slots, &mut digits);
    if placed < queued {
        return Err(DeriveError::InsufficientMaterial(format!(
            "{} digits queued but only {} free slots",
            queued, placed
        )));
    }
    log::debug!("Placed {} digits", placed);

    Ok(letter_words.into_iter().map(|(_, word)| word).collect())
}

/// Pass 3: fill the remaining free slots with letters; surplus letters are dropped
fn place_letters(slots: &mut Slots, words: &[&str]) {
    let mut letters = words.iter().map(|word| letter_for_word(word));
    let placed = fill_free_slots(slots, &mut letters);
    log::debug!(
        "Placed {} letters, {} left over",
        placed,
        words.len() - placed
    );
}

/// Write queued characters into unfilled slots left to right; returns how many were written
fn fill_free_slots(slots: &mut Slots, queue: &mut impl Iterator<Item = char>) -> usize {
    let mut placed = 0;
    for slot in slots.iter_mut().filter(|slot| slot.is_none()) {
        match queue.next() {
            Some(c) => {
                *slot = Some(c);
                placed += 1;
            }
            None => break,
        }
    }
    placed
}
