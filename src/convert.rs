// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! The buffer-driven streaming front end.
//!
//! These functions drive a codec over caller-provided slices, in either
//! direction, stopping cleanly when the output region fills: a unit whose
//! output does not fit completely is not consumed at all, its state change
//! is rolled back, and the caller resumes from the reported offsets with
//! the same state value. No unit is ever half-written.

use crate::all;
use crate::charset::Charset;
use crate::types::{CharsetState, ERROR};

/// How far a `to_unicode` call got.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ToUnicodeResult {
    /// Bytes of input consumed.
    pub consumed: usize,
    /// Scalar values written to the output region.
    pub written: usize,
}

/// How far a `from_unicode` call got.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FromUnicodeResult {
    /// Scalar values of input consumed.
    pub consumed: usize,
    /// Bytes written to the output region.
    pub written: usize,
    /// Whether an unrepresentable scalar was hit. Under
    /// [`Unrepresentable::Stop`] the offender is `input[consumed]`.
    pub unrepresentable: bool,
}

/// What `from_unicode` does with a scalar the charset cannot carry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Unrepresentable {
    /// Stop converting, leaving the input position on the offender.
    Stop,
    /// Drop the scalar and carry on.
    Skip,
}

/// Converts a byte stream in `charset` towards Unicode, writing scalar
/// values into `output` until input or output runs out.
///
/// Decode errors are replaced by the `errors` sequence, U+FFFD when `None`;
/// pass `Some(&[0xFFFF])` to keep the raw in-band mark. The conversion
/// never fails (spec-wise: `to_unicode` is total); feeding a charset this
/// build does not carry decodes every byte to the error sequence.
pub fn to_unicode(
    charset: Charset,
    input: &[u8],
    state: &mut CharsetState,
    output: &mut [u32],
    errors: Option<&[u32]>,
) -> ToUnicodeResult {
    let errors = errors.unwrap_or(&[0xFFFD]);
    let spec = all::find_spec(charset);
    let mut consumed = 0;
    let mut written = 0;

    for &b in input {
        let mut local = *state;
        let before = written;
        let mut stopped = false;
        {
            let mut push = |u: u32| {
                if written < output.len() {
                    output[written] = u;
                    written += 1;
                } else {
                    stopped = true;
                }
            };
            let mut emit = |u: u32| {
                if u == ERROR {
                    for &e in errors {
                        push(e);
                    }
                } else {
                    push(u);
                }
            };
            match spec {
                Some(spec) => spec.read(b, &mut local, &mut emit),
                None => emit(ERROR),
            }
        }
        if stopped {
            // This byte's output did not fit; pretend it never happened.
            written = before;
            break;
        }
        *state = local;
        consumed += 1;
    }

    ToUnicodeResult { consumed, written }
}

/// Converts scalar values towards `charset`, writing bytes into `output`
/// until input or output runs out; under [`Unrepresentable::Stop`] it also
/// stops at the first scalar the charset cannot carry.
pub fn from_unicode(
    charset: Charset,
    input: &[u32],
    state: &mut CharsetState,
    output: &mut [u8],
    mode: Unrepresentable,
) -> FromUnicodeResult {
    let mut consumed = 0;
    let mut written = 0;
    let mut unrepresentable = false;

    for &ch in input {
        let mut local = *state;
        let before = written;
        let mut stopped = false;
        let ok = charset.encode_char(ch, &mut local, &mut |b| {
            if written < output.len() {
                output[written] = b;
                written += 1;
            } else {
                stopped = true;
            }
        });
        if stopped {
            written = before;
            break;
        }
        if !ok {
            unrepresentable = true;
            match mode {
                Unrepresentable::Stop => break,
                Unrepresentable::Skip => {}
            }
        }
        *state = local;
        consumed += 1;
    }

    FromUnicodeResult {
        consumed,
        written,
        unrepresentable,
    }
}

/// Finalises an encoded stream, emitting whatever bytes return the
/// encoding to its default mode and resetting the state. Returns the byte
/// count, or `None` (with the state untouched) when `output` is too small
/// to take the terminators; retry with a larger region.
pub fn finish(charset: Charset, state: &mut CharsetState, output: &mut [u8]) -> Option<usize> {
    let mut local = *state;
    let mut written = 0;
    let mut stopped = false;
    charset.finish_encode(&mut local, &mut |b| {
        if written < output.len() {
            output[written] = b;
            written += 1;
        } else {
            stopped = true;
        }
    });
    if stopped {
        return None;
    }
    *state = local;
    Some(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_into_small_buffer_and_resume() {
        let input = b"\x1b$BF|K\\8l\x1b(B!";
        let mut state = CharsetState::new();
        let mut out = [0u32; 1];
        let mut collected = Vec::new();
        let mut rest: &[u8] = input;
        loop {
            let r = to_unicode(Charset::Iso2022Jp, rest, &mut state, &mut out, None);
            collected.extend_from_slice(&out[..r.written]);
            rest = &rest[r.consumed..];
            if rest.is_empty() {
                break;
            }
            assert!(r.consumed > 0 || r.written > 0, "no progress");
        }
        assert_eq!(collected, [0x65E5, 0x672C, 0x8A9E, 0x21]);
    }

    #[test]
    fn test_decode_error_replacement() {
        let mut state = CharsetState::new();
        let mut out = [0u32; 8];
        let r = to_unicode(Charset::Utf8, &[0x41, 0xFE, 0x42], &mut state, &mut out, None);
        assert_eq!(&out[..r.written], [0x41, 0xFFFD, 0x42]);

        let mut state = CharsetState::new();
        let r = to_unicode(
            Charset::Utf8,
            &[0x41, 0xFE, 0x42],
            &mut state,
            &mut out,
            Some(&[0x3F, 0x3F]),
        );
        assert_eq!(&out[..r.written], [0x41, 0x3F, 0x3F, 0x42]);
    }

    #[test]
    fn test_unconsumed_partial_sequence_stays_in_state() {
        let mut state = CharsetState::new();
        let mut out = [0u32; 4];
        let r = to_unicode(Charset::Utf8, &[0xE6, 0x97], &mut state, &mut out, None);
        assert_eq!((r.consumed, r.written), (2, 0));
        let r = to_unicode(Charset::Utf8, &[0xA5], &mut state, &mut out, None);
        assert_eq!((r.consumed, r.written), (1, 1));
        assert_eq!(out[0], 0x65E5);
    }

    #[test]
    fn test_encode_stop_vs_skip() {
        let input = [0x41, 0x3042, 0x42];
        let mut out = [0u8; 16];

        let mut state = CharsetState::new();
        let r = from_unicode(
            Charset::Ascii,
            &input,
            &mut state,
            &mut out,
            Unrepresentable::Stop,
        );
        assert_eq!((r.consumed, r.written, r.unrepresentable), (1, 1, true));
        assert_eq!(input[r.consumed], 0x3042);

        let mut state = CharsetState::new();
        let r = from_unicode(
            Charset::Ascii,
            &input,
            &mut state,
            &mut out,
            Unrepresentable::Skip,
        );
        assert_eq!((r.consumed, r.written, r.unrepresentable), (3, 2, true));
        assert_eq!(&out[..2], b"AB");
    }

    #[test]
    fn test_encode_never_splits_a_character() {
        // one byte of room, but the next character needs two
        let mut state = CharsetState::new();
        let mut out = [0u8; 3];
        let r = from_unicode(
            Charset::ShiftJis,
            &[0x41, 0x3042, 0x3044],
            &mut state,
            &mut out,
            Unrepresentable::Stop,
        );
        assert_eq!((r.consumed, r.written), (2, 3));
        assert_eq!(&out, b"A\x82\xa0");
    }

    #[test]
    fn test_finish_needs_room() {
        let mut state = CharsetState::new();
        let mut out = [0u8; 8];
        let r = from_unicode(
            Charset::Hz,
            &[0x554A],
            &mut state,
            &mut out,
            Unrepresentable::Stop,
        );
        assert_eq!(r.written, 4); // ~{ 0!
        let saved = state;
        assert_eq!(finish(Charset::Hz, &mut state, &mut []), None);
        assert_eq!(state, saved);
        assert_eq!(finish(Charset::Hz, &mut state, &mut out), Some(2));
        assert_eq!(&out[..2], b"~}");
        assert_eq!(state, CharsetState::new());
    }
}
