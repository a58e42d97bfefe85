#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8modem::{ErrorMode, TranscodeError, decode, encode, encode_code_points};

#[derive(Debug, Arbitrary)]
struct Input {
    bytes: Vec<u8>,
    code_points: Vec<u32>,
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}

fn check_decode(bytes: &[u8]) {
    let lossy = String::from_utf8_lossy(bytes);
    let replaced = decode(bytes, ErrorMode::Replacement).expect("replacement mode never fails");
    assert_eq!(replaced, strip_bom(&lossy));

    match (std::str::from_utf8(bytes), decode(bytes, ErrorMode::Fatal)) {
        (Ok(expected), Ok(actual)) => {
            assert_eq!(actual, strip_bom(expected));
            assert_eq!(encode(&actual), strip_bom(expected).as_bytes());
        }
        (Err(expected), Err(actual)) => {
            assert_eq!(actual.offset(), Some(expected.valid_up_to()));
            match expected.error_len() {
                None => assert!(matches!(actual, TranscodeError::TruncatedSequence { .. })),
                Some(_) => assert!(matches!(actual, TranscodeError::MalformedSequence { .. })),
            }
        }
        (expected, actual) => panic!("std: {expected:?}, utf8modem: {actual:?}"),
    }
}

fn check_encode(code_points: &[u32]) {
    let expected: Option<String> = code_points
        .iter()
        .map(|&cp| char::from_u32(cp))
        .collect();
    let actual = encode_code_points(code_points);
    if let Some(text) = expected {
        assert_eq!(actual.as_deref(), Ok(text.as_bytes()));
    } else if code_points.iter().all(|&cp| cp <= 0x10_FFFF) {
        // Only surrogates are invalid scalars here; they encode by range.
        assert!(actual.is_ok());
    } else {
        assert!(actual.is_err());
    }
}

fuzz_target!(|input: Input| {
    check_decode(&input.bytes);
    check_encode(&input.code_points);
});
