use alloc::{string::String, vec, vec::Vec};

use quickcheck::{QuickCheck, TestResult};
use quickcheck_macros::quickcheck;

use crate::{Text, byte_length, decode, encode};

/// Property: the length pass agrees with the platform's UTF-8 byte count for
/// every well-formed string.
#[quickcheck]
fn byte_length_matches_utf8_len(s: String) -> bool {
    byte_length(&Text::from(s.as_str())) == s.len()
}

fn test_count() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

/// Property: any well-formed string survives encode → decode unchanged, and
/// the encoder agrees byte-for-byte with the platform's UTF-8 encoding.
#[test]
fn well_formed_roundtrip_quickcheck() {
    fn prop(s: String) -> bool {
        let text = Text::from(s.as_str());
        let mut wire = vec![0u8; byte_length(&text)];
        encode(&text, &mut wire);
        wire == s.as_bytes() && decode(wire.as_slice()) == Ok(text)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: the decoder accepts exactly the byte sequences that
/// `core::str::from_utf8` accepts, and agrees with it on the decoded units.
#[test]
fn decode_matches_core_validation_quickcheck() {
    fn prop(bytes: Vec<u8>) -> bool {
        match (decode(bytes.as_slice()), core::str::from_utf8(&bytes)) {
            (Ok(text), Ok(s)) => text == Text::from(s),
            (Err(_), Err(_)) => true,
            _ => false,
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: any code-unit sequence without unpaired surrogates round-trips
/// through an exactly sized buffer.
#[test]
fn unit_sequence_roundtrip_quickcheck() {
    fn prop(units: Vec<u16>) -> TestResult {
        if String::from_utf16(&units).is_err() {
            return TestResult::discard();
        }

        let text = Text::from_units(units);
        let mut wire = vec![0u8; byte_length(&text)];
        encode(&text, &mut wire);
        TestResult::from_bool(decode(wire.as_slice()) == Ok(text))
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u16>) -> TestResult);
}

/// Property: a sequence holding at least one unpaired surrogate still
/// encodes (passthrough), but the result can never decode back.
#[test]
fn unpaired_surrogate_output_never_decodes_quickcheck() {
    fn prop(units: Vec<u16>) -> TestResult {
        if String::from_utf16(&units).is_ok() {
            return TestResult::discard();
        }

        let text = Text::from_units(units);
        let mut wire = vec![0u8; byte_length(&text)];
        encode(&text, &mut wire);
        TestResult::from_bool(decode(wire.as_slice()).is_err())
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u16>) -> TestResult);
}
