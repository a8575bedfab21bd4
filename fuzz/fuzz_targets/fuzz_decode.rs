//! Differential target: the DFA decoder must agree with the standard
//! library's UTF-8 validation on every input, and valid input must round-trip
//! through the encoder byte-for-byte.
#![no_main]

use libfuzzer_sys::fuzz_target;
use utf8modem::{Text, byte_length, decode, encode};

fuzz_target!(|data: &[u8]| {
    match (decode(data), core::str::from_utf8(data)) {
        (Ok(text), Ok(s)) => {
            assert_eq!(text, Text::from(s));
            let mut wire = vec![0u8; byte_length(&text)];
            encode(&text, &mut wire);
            assert_eq!(wire, data);
        }
        (Err(_), Err(_)) => {}
        (ours, theirs) => panic!("validity disagreement: ours={ours:?} std={theirs:?}"),
    }
});
