#![no_main]

use libfuzzer_sys::fuzz_target;
use wordpass_core::{PasswordRequest, RequestLimits, WordGenerator};

fuzz_target!(|data: &[u8]| {
    // A request that passes validation must always yield a password
    if data.len() < 2 {
        return;
    }
    let length = (data[0] % 24) as usize;
    let specials: Vec<char> = "$#@!%-_".chars().take((data[1] % 8) as usize).collect();

    if let Ok(text) = std::str::from_utf8(&data[2..]) {
        let request = PasswordRequest::new(length, specials, text);
        let limits = RequestLimits::default();
        let validated = request.validate_length(&limits).is_ok()
            && request.validate_special_chars(&limits).is_ok()
            && request.validate_text(&limits).is_ok();

        let result = request.generate(&limits, &WordGenerator);
        if validated {
            let password = result.expect("validated request must derive");
            assert_eq!(password.len(), length);
        }
    }
});
