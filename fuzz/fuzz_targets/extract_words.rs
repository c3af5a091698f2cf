#![no_main]

use libfuzzer_sys::fuzz_target;
use wordpass_core::extract_unique_words;

fuzz_target!(|data: &[u8]| {
    // extract_unique_words must never panic and only return ASCII words
    if let Ok(s) = std::str::from_utf8(data) {
        for word in extract_unique_words(s, 5) {
            assert!(word.is_ascii() && word.len() >= 5);
        }
    }
});
