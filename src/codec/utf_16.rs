// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! UTF-16 (RFC 2781): big-endian, little-endian, and BOM-detecting.
//!
//! Decode state:
//!
//!  - `s1` assembles bytes into transport-order halfwords: zero between
//!    halfwords, `0x100 | first_byte` in mid-halfword.
//!  - `s0` holds everything above the byte level: bits 15:0 are a held high
//!    surrogate (or zero), bit 17 / bit 16 say big- / little-endianness is
//!    still possible, and bit 18 says the byte-order decision has been
//!    taken (so later U+FEFF halfwords pass through as characters).
//!
//! Encode state: `s0` is zero until the BOM has been written, one after.

use crate::types::{CharsetState, EmitByte, EmitWide, ERROR};

/// The initial endianness possibilities, preloaded into `s0` on the first
/// byte of input.
pub(crate) struct Utf16Params {
    pub s0: u32,
}

pub(crate) static BIG_ENDIAN: Utf16Params = Utf16Params { s0: 0x20000 };
pub(crate) static LITTLE_ENDIAN: Utf16Params = Utf16Params { s0: 0x10000 };
pub(crate) static VARIABLE: Utf16Params = Utf16Params { s0: 0x30000 };

pub(crate) fn read(params: &Utf16Params, b: u8, state: &mut CharsetState, emit: &mut EmitWide) {
    if state.s0 == 0 {
        state.s0 = params.s0;
    }

    // Accumulate a transport-endianness halfword.
    if state.s1 == 0 {
        state.s1 = 0x100 | b as u32;
        return;
    }
    let mut hw = ((state.s1 & 0xFF) << 8) | b as u32;
    state.s1 = 0;

    // Process the BOM and fix the byte order.
    if state.s0 & 0x40000 == 0 {
        state.s0 |= 0x40000;
        if hw == 0xFEFF && state.s0 & 0x20000 != 0 {
            // A big-endian BOM while big-endianness is still possible:
            // settle on it and swallow the BOM.
            state.s0 &= !0x10000;
            return;
        } else if hw == 0xFFFE && state.s0 & 0x10000 != 0 {
            state.s0 &= !0x20000;
            return;
        } else if state.s0 & 0x30000 == 0x30000 {
            // No BOM. RFC 2781 requires assuming big-endian.
            state.s0 &= !0x10000;
        }
    }

    if state.s0 & 0x10000 != 0 {
        hw = ((hw >> 8) | (hw << 8)) & 0xFFFF;
    }

    process_halfword(hw, state, emit);
}

/// Surrogate assembly on the endianness-corrected halfword stream.
fn process_halfword(hw: u32, state: &mut CharsetState, emit: &mut EmitWide) {
    if state.s0 & 0xFFFF != 0 {
        // A high surrogate is waiting for its low half.
        let high = state.s0 & 0x3FF;
        state.s0 &= 0xFFFF0000;
        if (0xDC00..0xE000).contains(&hw) {
            emit(0x10000 + ((high << 10) | (hw & 0x3FF)));
        } else {
            // Not the low half: mark the dead surrogate, then let the
            // offending halfword stand on its own.
            emit(ERROR);
            process_halfword(hw, state, emit);
        }
    } else if (0xDC00..0xE000).contains(&hw) {
        emit(ERROR);
    } else if (0xD800..0xDC00).contains(&hw) {
        state.s0 |= hw;
    } else {
        emit(hw);
    }
}

fn emit_halfword(params: &Utf16Params, hw: u32, emit: &mut EmitByte) {
    let h = (hw >> 8) as u8;
    let l = (hw & 0xFF) as u8;
    if params.s0 & 0x20000 != 0 {
        // Big-endian takes priority over little, if both are allowed.
        emit(h);
        emit(l);
    } else {
        emit(l);
        emit(h);
    }
}

pub(crate) fn write(
    params: &Utf16Params,
    ch: u32,
    state: &mut CharsetState,
    emit: &mut EmitByte,
) -> bool {
    if (0xD800..0xE000).contains(&ch) || ch > 0x10FFFF {
        return false;
    }

    if state.s0 == 0 {
        state.s0 = 1;
        emit_halfword(params, 0xFEFF, emit);
    }

    if ch < 0x10000 {
        emit_halfword(params, ch, emit);
    } else {
        let ch = ch - 0x10000;
        emit_halfword(params, 0xD800 | (ch >> 10), emit);
        emit_halfword(params, 0xDC00 | (ch & 0x3FF), emit);
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::charset::Charset;
    use crate::testutils::{decode_to_vec, encode_finish_to_vec, encode_to_vec};

    #[test]
    fn test_decode_bom_detection() {
        // BE BOM is swallowed and settles the byte order
        assert_eq!(
            decode_to_vec(Charset::Utf16, &[0xFE, 0xFF, 0x00, 0x41]),
            [0x41]
        );
        // LE likewise
        assert_eq!(
            decode_to_vec(Charset::Utf16, &[0xFF, 0xFE, 0x41, 0x00]),
            [0x41]
        );
        // no BOM: big-endian by default, first halfword emitted
        assert_eq!(
            decode_to_vec(Charset::Utf16, &[0x00, 0x41, 0x00, 0x42]),
            [0x41, 0x42]
        );
    }

    #[test]
    fn test_decode_later_bom_passes_through() {
        assert_eq!(
            decode_to_vec(Charset::Utf16, &[0xFE, 0xFF, 0xFE, 0xFF]),
            [0xFEFF]
        );
        assert_eq!(
            decode_to_vec(Charset::Utf16Be, &[0x00, 0x41, 0xFE, 0xFF]),
            [0x41, 0xFEFF]
        );
    }

    #[test]
    fn test_decode_fixed_endianness_ignores_foreign_bom() {
        // FEFF transported little-endian reads as U+FFFE; the LE decoder
        // must not flip to big-endian for it
        assert_eq!(
            decode_to_vec(Charset::Utf16Le, &[0xFE, 0xFF, 0x41, 0x00]),
            [0xFFFE, 0x41]
        );
    }

    #[test]
    fn test_decode_surrogate_pairs() {
        assert_eq!(
            decode_to_vec(Charset::Utf16Be, &[0xD8, 0x3D, 0xDC, 0xA9]),
            [0x1F4A9]
        );
        assert_eq!(
            decode_to_vec(Charset::Utf16Le, &[0x3D, 0xD8, 0xA9, 0xDC]),
            [0x1F4A9]
        );
    }

    #[test]
    fn test_decode_broken_surrogates() {
        // lone low surrogate
        assert_eq!(decode_to_vec(Charset::Utf16Be, &[0xDC, 0x00]), [0xFFFF]);
        // high surrogate followed by a plain character: one error for the
        // dead surrogate, then the halfword stands on its own
        assert_eq!(
            decode_to_vec(Charset::Utf16Be, &[0xD8, 0x3D, 0x00, 0x41]),
            [0xFFFF, 0x41]
        );
        // high surrogate followed by a fresh pair
        assert_eq!(
            decode_to_vec(Charset::Utf16Be, &[0xD8, 0x3D, 0xD8, 0x3D, 0xDC, 0xA9]),
            [0xFFFF, 0x1F4A9]
        );
    }

    #[test]
    fn test_encode_bom_once() {
        assert_eq!(
            encode_to_vec(Charset::Utf16, &[0x41, 0x42]),
            Some(vec![0xFE, 0xFF, 0x00, 0x41, 0x00, 0x42])
        );
        assert_eq!(
            encode_to_vec(Charset::Utf16Le, &[0x41]),
            Some(vec![0xFF, 0xFE, 0x41, 0x00])
        );
        assert_eq!(
            encode_to_vec(Charset::Utf16Be, &[0x1F4A9]),
            Some(vec![0xFE, 0xFF, 0xD8, 0x3D, 0xDC, 0xA9])
        );
    }

    #[test]
    fn test_encode_after_finish_restarts() {
        // finish resets the stream, so the BOM reappears
        assert_eq!(
            encode_finish_to_vec(Charset::Utf16Be, &[0x41]),
            Some(vec![0xFE, 0xFF, 0x00, 0x41])
        );
    }

    #[test]
    fn test_encode_unrepresentable() {
        assert_eq!(encode_to_vec(Charset::Utf16, &[0xD800]), None);
        assert_eq!(encode_to_vec(Charset::Utf16, &[0x110000]), None);
    }
}
