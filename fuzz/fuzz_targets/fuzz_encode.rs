//! Encoder target over arbitrary code-unit sequences: well-formed sequences
//! must round-trip; sequences holding an unpaired surrogate still encode
//! (passthrough behavior) but must never decode back.
#![no_main]

use libfuzzer_sys::fuzz_target;
use utf8modem::{Text, byte_length, decode, encode};

fuzz_target!(|units: Vec<u16>| {
    let well_formed = String::from_utf16(&units).is_ok();
    let text = Text::from_units(units);

    let mut wire = vec![0u8; byte_length(&text)];
    encode(&text, &mut wire);

    if well_formed {
        assert_eq!(decode(wire.as_slice()), Ok(text));
    } else {
        assert!(decode(wire.as_slice()).is_err());
    }
});
