//! Digit folding and word mapping
//!
//! Every word contributes through the sum of its character codes. That sum is
//! folded into a slot index, a digit or a letter.

/// Highest folded letter value (`a` = 1 ... `z` = 26)
pub const LAST_LETTER_VALUE: u64 = 26;

/// Offset from a folded letter value to its lowercase ASCII code
const LETTER_CODE_OFFSET: u8 = 96;

/// Sum of the character codes of a word.
///
/// Accumulates in `u64`, so arbitrarily long words of any code points fit.
pub fn ascii_sum(word: &str) -> u64 {
    word.chars().map(u64::from).sum()
}

/// Sum of the decimal digits of `n`, applied once
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n != 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Candidate slot for a special character.
///
/// `length` must be non-zero.
pub fn word_index(word: &str, length: usize) -> usize {
    let folded = digit_sum(ascii_sum(word)) as usize;
    if folded >= length {
        folded % length
    } else {
        folded
    }
}

/// Whether a word (other than the first) joins the numeric subset
pub fn is_numeric_word(word: &str) -> bool {
    ascii_sum(word) % 7 == 0
}

/// Digit contributed by a word of the numeric subset
pub fn digit_for_word(word: &str) -> char {
    let digit = (ascii_sum(word) % 10) as u8;
    (b'0' + digit) as char
}

/// Fold `n` by repeated digit sums until it is at most 26.
///
/// Zero (only reachable from an empty word) wraps to 26.
pub fn letter_value(n: u64) -> u64 {
    let mut value = digit_sum(n);
    while value > LAST_LETTER_VALUE {
        value = digit_sum(value);
    }
    if value == 0 {
        LAST_LETTER_VALUE
    } else {
        value
    }
}

/// Letter contributed by a word: even codes stay lowercase, odd codes are uppercased
pub fn letter_for_word(word: &str) -> char {
    let code = letter_value(ascii_sum(word)) as u8 + LETTER_CODE_OFFSET;
    let letter = code as char;
    if code % 2 == 0 {
        letter
    } else {
        letter.to_ascii_uppercase()
    }
}
