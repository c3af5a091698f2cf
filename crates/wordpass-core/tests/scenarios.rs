//! End-to-end derivation scenarios: text in, password out.
//!
//! Each fixture text is reduced to its first `length` unique ASCII words of at
//! least five characters, exactly as a request would do.

use wordpass_core::{
    derive, extract_unique_words, take_words, DeriveError, PasswordRequest, RequestError,
    RequestLimits, WordGenerator,
};

const WORD_MIN_SIZE: usize = 5;
const SPECIALS: [char; 4] = ['$', '#', '@', '!'];

const ATHEX: &str = "In the session of the day retail and tourism led the way but mobile and \
                     the market did not as the economy and energy of athens grew before closing higher";

const MARKETS: &str = "All went higher as losses hit the market in athens and the annual data on \
                       weaker inflation was out with a report on growth in the economy that \
                       investors on the exchange watch";

const STREAMING: &str = "The exchange saw its deficit grow as the playlist services of million \
                         profit bonds show results that investors in the market and consumer \
                         growth watch in the café résumés too";

fn words_for(text: &str, length: usize) -> Vec<String> {
    let words = extract_unique_words(text, WORD_MIN_SIZE);
    take_words(&words, length).to_vec()
}

#[test]
fn generate_valid_password_1() {
    let words = words_for(ATHEX, 8);
    let password = derive(8, &SPECIALS, &words).unwrap();
    assert_eq!(password.as_str(), "2Kv@K!$#");
}

#[test]
fn generate_valid_password_2() {
    let words = words_for(MARKETS, 12);
    let password = derive(12, &SPECIALS, &words).unwrap();
    assert_eq!(password.as_str(), "154#!M@$rrSt");
}

#[test]
fn generate_valid_password_3() {
    let words = words_for(STREAMING, 12);
    let password = derive(12, &SPECIALS, &words).unwrap();
    assert_eq!(password.as_str(), "58#286$!l@lU");
}

#[test]
fn rerun_is_identical() {
    let words = words_for(ATHEX, 8);
    let first = derive(8, &SPECIALS, &words).unwrap();
    let second = derive(8, &SPECIALS, &words).unwrap();
    assert_eq!(first.as_str(), second.as_str());
}

#[test]
fn digit_subset_larger_than_free_slots_fails() {
    // Twelve words for eight slots: eight remain after the special words, and
    // five of them (the first plus four divisible by 7) compete for the four
    // slots the special characters left free.
    let text = "athens market deficit million gained holdings economy energy \
                session growth retail tourism";
    let words = extract_unique_words(text, WORD_MIN_SIZE);
    assert_eq!(words.len(), 12);

    let result = derive(8, &SPECIALS, &words);
    assert!(
        matches!(result, Err(DeriveError::InsufficientMaterial(_))),
        "expected InsufficientMaterial, got {:?}",
        result
    );
}

#[test]
fn five_specials_in_eight_slots_fill_exactly() {
    // With as many words as slots, the remaining words always cover the free slots
    let specials = ['$', '#', '@', '!', '%'];
    let words = words_for(ATHEX, 8);
    let password = derive(8, &specials, &words).unwrap();
    assert_eq!(password.as_str(), "2Kv$!%#@");
}

#[test]
fn request_pipeline_matches_engine() {
    let limits = RequestLimits::default();
    let request = PasswordRequest::new(12, SPECIALS.to_vec(), MARKETS);
    let password = request.generate(&limits, &WordGenerator).unwrap();
    assert_eq!(password.as_str(), "154#!M@$rrSt");
}

#[test]
fn request_with_too_few_words_is_rejected() {
    let limits = RequestLimits::default();
    let request = PasswordRequest::new(20, SPECIALS.to_vec(), ATHEX);
    let err = request.generate(&limits, &WordGenerator).unwrap_err();
    assert!(matches!(err, RequestError::NotAdequateValidWords { .. }));
}
