// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! HZ (RFC 1843): ASCII and GB2312 behind `~{` / `~}` escapes.
//!
//! Decode state: `s0` is 0 in ASCII mode, 1 in GB2312 mode; `s1` holds a
//! byte seen but not resolved: only `~` in ASCII mode, any of 21-7E in
//! GB2312 mode. Encode state: `s0` is the current output mode.

use crate::index::gb2312;
use crate::types::{CharsetState, EmitByte, EmitWide, ERROR};

pub(crate) fn read(b: u8, state: &mut CharsetState, emit: &mut EmitWide) {
    if state.s0 == 0 {
        if state.s1 != 0 {
            state.s1 = 0;
            match b {
                b'~' => emit(b as u32),
                b'\n' => {} // ~\n is a line continuation and vanishes
                b'{' => state.s0 = 1,
                // an unknown tilde escape swallows both bytes
                _ => {}
            }
        } else if b == b'~' {
            state.s1 = b'~' as u32;
        } else {
            emit(b as u32);
        }
    } else {
        // GB2312 mode knows nothing outside 21-7E; anything else throws
        // the decoder back into ASCII mode.
        if !(0x21..=0x7E).contains(&b) {
            emit(ERROR);
            state.s0 = 0;
            state.s1 = 0;
            return;
        }

        if state.s1 == 0 {
            state.s1 = b as u32;
            return;
        }

        if state.s1 == b'~' as u32 && b == b'}' {
            state.s0 = 0;
            state.s1 = 0;
            return;
        }

        emit(gb2312::forward(state.s1 - 0x21, b as u32 - 0x21) as u32);
        state.s1 = 0;
    }
}

pub(crate) fn write(ch: u32, state: &mut CharsetState, emit: &mut EmitByte) -> bool {
    let pair;
    let desired = if ch < 0x80 {
        pair = None;
        0
    } else if let Some((r, c)) = gb2312::backward(ch) {
        pair = Some((r, c));
        1
    } else {
        return false;
    };

    if state.s0 != desired {
        emit(b'~');
        emit(if desired == 1 { b'{' } else { b'}' });
        state.s0 = desired;
    }

    match pair {
        Some((r, c)) => {
            emit(0x21 + r);
            emit(0x21 + c);
        }
        // a literal tilde must be doubled to survive decoding
        None if ch == b'~' as u32 => {
            emit(b'~');
            emit(b'~');
        }
        None => emit(ch as u8),
    }
    true
}

pub(crate) fn finish(state: &mut CharsetState, emit: &mut EmitByte) {
    if state.s0 != 0 {
        emit(b'~');
        emit(b'}');
        state.s0 = 0;
    }
}

#[cfg(test)]
mod tests {
    use crate::charset::Charset;
    use crate::testutils::{decode_to_vec, encode_finish_to_vec};

    #[test]
    fn test_decode_modes() {
        // U+554A is GB2312 row 15 column 0, "0!" in GL bytes
        assert_eq!(
            decode_to_vec(Charset::Hz, b"~{0!~}A"),
            [0x554A, 0x41]
        );
        assert_eq!(
            decode_to_vec(Charset::Hz, b"~{;;;;~}"),
            [0x6362, 0x6362]
        );
    }

    #[test]
    fn test_decode_tilde_escapes() {
        assert_eq!(decode_to_vec(Charset::Hz, b"~~"), [0x7E]);
        assert_eq!(decode_to_vec(Charset::Hz, b"a~\nb"), [0x61, 0x62]);
        // unknown tilde escapes vanish entirely
        assert_eq!(decode_to_vec(Charset::Hz, b"a~xb"), [0x61, 0x62]);
    }

    #[test]
    fn test_decode_bad_byte_in_gb_mode() {
        // a high-bit byte is illegal inside ~{ ... ~}; it costs one error
        // and knocks the decoder back to ASCII mode
        assert_eq!(
            decode_to_vec(Charset::Hz, &[b'~', b'{', 0xB0, 0xA1, b'A']),
            [0xFFFF, 0xA1, 0x41]
        );
    }

    #[test]
    fn test_decode_split_everywhere() {
        let input = b"~{0!~}A";
        let mut state = crate::types::CharsetState::new();
        let mut out = Vec::new();
        for &b in input {
            Charset::Hz.decode_byte(b, &mut state, &mut |u| out.push(u));
        }
        assert_eq!(out, [0x554A, 0x41]);
    }

    #[test]
    fn test_encode() {
        assert_eq!(
            encode_finish_to_vec(Charset::Hz, &[0x554A, 0x41]),
            Some(b"~{0!~}A".to_vec())
        );
        // mode closes at finish even with no trailing ASCII
        assert_eq!(
            encode_finish_to_vec(Charset::Hz, &[0x6362]),
            Some(b"~{;;~}".to_vec())
        );
        assert_eq!(encode_finish_to_vec(Charset::Hz, &[0x0E01]), None);
        // the escape character itself
        assert_eq!(
            encode_finish_to_vec(Charset::Hz, &[0x7E]),
            Some(b"~~".to_vec())
        );
    }
}
