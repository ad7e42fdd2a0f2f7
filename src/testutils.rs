// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! Helpers for codec unit tests.

use crate::charset::Charset;
use crate::types::CharsetState;

/// Decodes a whole byte string, collecting every emitted scalar
/// (including U+FFFF error marks).
pub fn decode_to_vec(cs: Charset, input: &[u8]) -> Vec<u32> {
    let mut state = CharsetState::new();
    let mut out = Vec::new();
    for &b in input {
        cs.decode_byte(b, &mut state, &mut |u| out.push(u));
    }
    out
}

/// Encodes a sequence of scalars without finalising. `None` as soon as one
/// of them is unrepresentable.
pub fn encode_to_vec(cs: Charset, input: &[u32]) -> Option<Vec<u8>> {
    let mut state = CharsetState::new();
    let mut out = Vec::new();
    for &ch in input {
        if !cs.encode_char(ch, &mut state, &mut |b| out.push(b)) {
            return None;
        }
    }
    Some(out)
}

/// Encodes a sequence of scalars and finalises the stream.
pub fn encode_finish_to_vec(cs: Charset, input: &[u32]) -> Option<Vec<u8>> {
    let mut state = CharsetState::new();
    let mut out = Vec::new();
    for &ch in input {
        if !cs.encode_char(ch, &mut state, &mut |b| out.push(b)) {
            return None;
        }
    }
    cs.finish_encode(&mut state, &mut |b| out.push(b));
    assert_eq!(state, CharsetState::new(), "finish must reset the state");
    Some(out)
}
