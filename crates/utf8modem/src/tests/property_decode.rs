use alloc::{borrow::Cow, string::String};

use quickcheck::QuickCheck;

use super::arbitrary::{Utf8ish, test_count};
use crate::{ErrorMode, TranscodeError, decode};

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}

/// Property: replacement mode substitutes exactly the maximal subparts that
/// `String::from_utf8_lossy` substitutes, modulo the leading BOM.
#[test]
fn replacement_matches_lossy() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: Utf8ish) -> bool {
        let lossy: Cow<'_, str> = String::from_utf8_lossy(&input.0);
        decode(&input.0, ErrorMode::Replacement).as_deref() == Ok(strip_bom(&lossy))
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Utf8ish) -> bool);
}

/// Property: fatal mode accepts exactly what `core::str::from_utf8` accepts,
/// and reports the same position for the first error.
#[test]
fn fatal_matches_from_utf8() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: Utf8ish) -> bool {
        match (core::str::from_utf8(&input.0), decode(&input.0, ErrorMode::Fatal)) {
            (Ok(expected), Ok(actual)) => strip_bom(expected) == actual,
            (Err(expected), Err(actual)) => {
                actual.is_malformed() && actual.offset() == Some(expected.valid_up_to())
            }
            _ => false,
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Utf8ish) -> bool);
}

/// Property: when fatal mode fails only because the input ends early, the
/// error is a truncation.
#[test]
fn truncation_is_reported_only_at_end_of_input() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: Utf8ish) -> bool {
        let Err(expected) = core::str::from_utf8(&input.0) else {
            return true;
        };
        let actual = decode(&input.0, ErrorMode::Fatal);
        match expected.error_len() {
            None => matches!(actual, Err(TranscodeError::TruncatedSequence { .. })),
            Some(_) => matches!(actual, Err(TranscodeError::MalformedSequence { .. })),
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Utf8ish) -> bool);
}

/// Property: both modes agree on well-formed input.
#[test]
fn modes_agree_on_well_formed_text() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, mode: ErrorMode) -> bool {
        decode(text.as_bytes(), mode).as_deref() == Ok(strip_bom(&text))
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String, ErrorMode) -> bool);
}
