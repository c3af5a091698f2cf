#![no_main]

use libfuzzer_sys::fuzz_target;
use wordpass_core::derive;

fuzz_target!(|data: &[u8]| {
    // First byte picks the length, the next byte the special count, the rest is
    // split into words. derive must never panic and never return a wrong length.
    if data.len() < 2 {
        return;
    }
    let length = (data[0] % 32) as usize;
    let specials: Vec<char> = "$#@!%-_".chars().take((data[1] % 8) as usize).collect();

    if let Ok(s) = std::str::from_utf8(&data[2..]) {
        let words: Vec<&str> = s.split(' ').collect();
        if let Ok(password) = derive(length, &specials, &words) {
            assert_eq!(password.len(), length);
        }
    }
});
