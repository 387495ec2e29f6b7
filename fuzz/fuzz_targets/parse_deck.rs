#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate cardrank;
use cardrank::core::{CardQuery, Deck};
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(d) = s.parse::<Deck>() {
            assert!(d.len() <= Deck::SIZE);
            for (i, c) in d.iter().enumerate() {
                assert!(!d[..i].has_card(c));
            }
        }
    }
});
