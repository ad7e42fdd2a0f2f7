// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! The ISO 2022 subset encodings: ISO-2022-JP (RFC 1468) and ISO-2022-KR
//! (RFC 1557).
//!
//! One state machine serves every subset, driven by a descriptor whose
//! escape list is sorted in ASCII order. Each recognised escape carries an
//! AND mask and an XOR mask applied to `s1`, which is how container
//! designations and shifts are expressed as pure state updates. A byte that
//! cannot extend any listed escape causes the swallowed prefix to be
//! re-emitted verbatim, so unknown escapes survive for a postprocessor.
//!
//! Decode state:
//!
//!  - `s0` bits 31:27: index of the first escape matching the prefix seen
//!    so far; bits 26:24: its length; zero when no escape is in progress;
//!    bits 23:0 accumulate the bytes of a multibyte character.
//!  - `s1` bit 31: set once initialised (the descriptor's initial `s1` is
//!    loaded on first use). Bits 30:28: the invoked container; bit 28 is
//!    the SI/SO side, values 4..7 encode "inside SS2/SS3, to return to
//!    SI/SO". Bits 27:24: bytes accumulated in the current character. Four
//!    six-bit fields from bit 0: the subcharset in SI, SO, SS2, SS3.

use crate::index::{jis0208, ksx1001};
use crate::types::{CharsetState, EmitByte, EmitWide, ERROR};

const SO: u8 = 0x0E;
const SI: u8 = 0x0F;
const ESC: u8 = 0x1B;

/// Marks a container entry as recognised on input but never chosen for
/// output.
pub(crate) const RO: i32 = 0x80;

pub(crate) struct Iso2022Escape {
    pub sequence: &'static [u8],
    pub and_bits: u32,
    pub xor_bits: u32,
    /// Container the escape designates into (possibly `| RO`), or -1 when
    /// the escape is not usable for choosing an output representation.
    pub container: i32,
    pub subcharset: i32,
}

pub(crate) struct Iso2022Subset {
    /// Sorted in ASCII order, so prefix narrowing works.
    pub escapes: &'static [Iso2022Escape],
    /// Bytes per character, indexed by subcharset.
    pub nbytes: &'static [u8],
    /// Indices-plus-one into `escapes`, emitted in order to reset the
    /// output state (skipping any that would change nothing).
    pub reset: &'static [u8],
    /// Initial `s1`; the top bit must be set.
    pub init_s1: u32,
    /// Escape bytes some subsets must emit before any output.
    pub initial_sequence: &'static [u8],
    /// Whether GR bytes carry the SO container's characters.
    pub eightbit: bool,
    pub to_ucs: fn(usize, u32) -> u32,
    pub from_ucs: fn(u32) -> Option<(usize, u32)>,
}

pub(crate) fn read(iso: &Iso2022Subset, b: u8, state: &mut CharsetState, emit: &mut EmitWide) {
    if state.s1 & 0x8000_0000 == 0 {
        state.s1 = iso.init_s1;
    }

    // Escape sequences, in progress or starting with SI/SO/ESC.
    if state.s0 >> 24 != 0 || b == SO || b == SI || b == ESC {
        let n = ((state.s0 >> 24) & 7) as usize;
        let oi = (state.s0 >> 27) as usize;
        let mut i = oi;

        // An escape introducer in mid-character kills the character.
        if state.s1 & 0x0F00_0000 != 0 {
            state.s1 &= !0x0F00_0000;
            state.s0 &= 0xFF00_0000;
            if state.s1 & 0x6000_0000 != 0 {
                state.s1 &= 0x9FFF_FFFF;
            }
            emit(ERROR);
        }

        let prefix = &iso.escapes[oi].sequence[..n];
        let mut j = i;
        while j < iso.escapes.len() && iso.escapes[j].sequence.get(..n) == Some(prefix) {
            if iso.escapes[j].sequence.get(n).copied().unwrap_or(0) < b {
                j += 1;
                i = j;
            } else {
                break;
            }
        }
        let matched = i < iso.escapes.len()
            && iso.escapes[i].sequence.get(..n) == Some(prefix)
            && iso.escapes[i].sequence.get(n) == Some(&b);
        if !matched {
            // Not a prefix of any recognised escape: flush what was
            // swallowed and pass the byte through.
            for &swallowed in &iso.escapes[oi].sequence[..n] {
                emit(swallowed as u32);
            }
            emit(b as u32);
            state.s0 = 0;
            return;
        }

        let n = n + 1;
        if iso.escapes[i].sequence.len() == n {
            state.s0 = 0;
            state.s1 &= iso.escapes[i].and_bits;
            state.s1 ^= iso.escapes[i].xor_bits;
            return;
        }

        debug_assert!(i < 32 && n < 8);
        state.s0 = ((i as u32) << 27) | ((n as u32) << 24);
        return;
    }

    // Control characters are output verbatim. In a seven-bit subset the
    // whole top half counts as controls too.
    if b < 0x21 || (b > 0x7E && (!iso.eightbit || b < 0xA0)) {
        if state.s1 & 0x0F00_0000 != 0 {
            state.s1 &= !0x0F00_0000;
            state.s0 &= 0xFF00_0000;
            emit(ERROR);
            if state.s1 & 0x6000_0000 != 0 {
                state.s1 &= 0x9FFF_FFFF;
            }
        }
        emit(b as u32);
        return;
    }

    // Character data.
    if iso.eightbit {
        let cont = (state.s1 >> 28) & 7;
        // cont 0 accepts either half and latches onto GR when it sees
        // it; cont 2 means mid-GR-character; anything else expects GL.
        if (cont == 2 && b & 0x80 == 0) || (cont != 0 && cont != 2 && b & 0x80 != 0) {
            state.s1 &= !0x0F00_0000;
            state.s0 &= 0xFF00_0000;
            emit(ERROR);
            if state.s1 & 0x6000_0000 != 0 {
                state.s1 &= 0x9FFF_FFFF;
            }
        }
        if (state.s1 >> 28) & 7 == 0 && b & 0x80 != 0 {
            state.s1 |= 0x2000_0000;
        }
    }

    let chr = ((state.s0 & 0x00FF_FFFF) << 8) | (b as u32 & 0x7F);
    let mut chrlen = ((state.s1 >> 24) & 0xF) + 1;
    let mut cont = (state.s1 >> 28) & 7;
    if cont > 1 {
        cont >>= 1;
    }
    let subcharset = ((state.s1 >> (6 * cont)) & 0x3F) as usize;
    let bytes = iso.nbytes[subcharset] as u32;

    if chrlen >= bytes {
        emit((iso.to_ucs)(subcharset, chr));
        chrlen = 0;
        state.s0 &= 0xFF00_0000;
        if state.s1 & 0x6000_0000 != 0 {
            state.s1 &= 0x9FFF_FFFF;
        }
    } else {
        state.s0 = (state.s0 & 0xFF00_0000) | chr;
    }
    state.s1 = (state.s1 & 0xF0FF_FFFF) | (chrlen << 24);
}

pub(crate) fn write(
    iso: &Iso2022Subset,
    ch: u32,
    state: &mut CharsetState,
    emit: &mut EmitByte,
) -> bool {
    let (subcharset, bytes) = match (iso.from_ucs)(ch) {
        Some(found) => found,
        None => return false,
    };

    init_output(iso, state, emit);

    // Find the preferred escape designating this subcharset, emit it if
    // the target container does not already hold the subcharset, then
    // select the container itself.
    let i = iso
        .escapes
        .iter()
        .position(|e| e.subcharset == subcharset as i32 && e.container & RO == 0)
        .expect("subcharset with no designation escape");

    let cont = (iso.escapes[i].container & !RO) as u32;
    let mut topbit = 0u8;
    if (state.s1 >> (6 * cont)) & 0x3F != subcharset as u32 {
        for &e in iso.escapes[i].sequence {
            emit(e);
        }
        state.s1 &= iso.escapes[i].and_bits;
        state.s1 ^= iso.escapes[i].xor_bits;
    }

    if cont > 1 {
        // SS2 or SS3 stands before every character.
        emit(ESC);
        emit(b'L' + cont as u8); // 'N' or 'O'
    } else if iso.eightbit && cont == 1 && (state.s1 >> 28) & 7 == 0 {
        topbit = 0x80;
    } else if (state.s1 >> 28) & 7 != cont {
        emit(if cont != 0 { SO } else { SI });
        state.s1 = (state.s1 & 0x8FFF_FFFF) | (cont << 28);
    }

    let mut len = iso.nbytes[subcharset] as u32;
    while len > 0 {
        len -= 1;
        emit((((bytes >> (8 * len)) & 0xFF) as u8) | topbit);
    }
    true
}

pub(crate) fn finish(iso: &Iso2022Subset, state: &mut CharsetState, emit: &mut EmitByte) {
    init_output(iso, state, emit);
    for &r in iso.reset {
        let e = &iso.escapes[(r - 1) as usize];
        let old = state.s1;
        state.s1 &= e.and_bits;
        state.s1 ^= e.xor_bits;
        if state.s1 != old {
            for &byte in e.sequence {
                emit(byte);
            }
        }
    }
}

fn init_output(iso: &Iso2022Subset, state: &mut CharsetState, emit: &mut EmitByte) {
    if state.s1 & 0x8000_0000 == 0 {
        state.s1 = iso.init_s1;
        for &b in iso.initial_sequence {
            emit(b);
        }
    }
}

// ISO-2022-JP, RFC 1468: ASCII and JIS X 0201 lower half in one-byte mode,
// JIS X 0208 in two-byte mode, all in G0.

fn iso2022jp_to_ucs(subcharset: usize, bytes: u32) -> u32 {
    match subcharset {
        1 if bytes == 0x5C => 0xA5,
        1 if bytes == 0x7E => 0x203E,
        0 | 1 => bytes,
        2 => jis0208::forward(((bytes >> 8) & 0xFF) - 0x21, (bytes & 0xFF) - 0x21) as u32,
        _ => ERROR,
    }
}

fn iso2022jp_from_ucs(ch: u32) -> Option<(usize, u32)> {
    if ch < 0x80 {
        Some((0, ch))
    } else if ch == 0xA5 {
        Some((1, 0x5C))
    } else if ch == 0x203E {
        Some((1, 0x7E))
    } else {
        jis0208::backward(ch)
            .map(|(r, c)| (2, ((r as u32 + 0x21) << 8) | (c as u32 + 0x21)))
    }
}

static ISO2022JP_ESCAPES: [Iso2022Escape; 4] = [
    // ESC $ @ designates the 1978 revision; decode it like the 1983 set
    // but never choose it for output.
    Iso2022Escape {
        sequence: b"\x1b$@",
        and_bits: 0xFFFF_FFC0,
        xor_bits: 0x0000_0002,
        container: -1,
        subcharset: -1,
    },
    Iso2022Escape {
        sequence: b"\x1b$B",
        and_bits: 0xFFFF_FFC0,
        xor_bits: 0x0000_0002,
        container: 0,
        subcharset: 2,
    },
    Iso2022Escape {
        sequence: b"\x1b(B",
        and_bits: 0xFFFF_FFC0,
        xor_bits: 0x0000_0000,
        container: 0,
        subcharset: 0,
    },
    Iso2022Escape {
        sequence: b"\x1b(J",
        and_bits: 0xFFFF_FFC0,
        xor_bits: 0x0000_0001,
        container: 0,
        subcharset: 1,
    },
];

pub(crate) static ISO2022_JP: Iso2022Subset = Iso2022Subset {
    escapes: &ISO2022JP_ESCAPES,
    nbytes: &[1, 1, 2],
    reset: &[3],
    init_s1: 0x8000_0000,
    initial_sequence: b"",
    eightbit: false,
    to_ucs: iso2022jp_to_ucs,
    from_ucs: iso2022jp_from_ucs,
};

// ISO-2022-KR, RFC 1557: KS X 1001 designated into G1 up front by the
// mandatory ESC $ ) C, selected by SO/SI.

fn iso2022kr_to_ucs(subcharset: usize, bytes: u32) -> u32 {
    match subcharset {
        0 => bytes,
        1 => ksx1001::forward(((bytes >> 8) & 0xFF) - 0x21, (bytes & 0xFF) - 0x21) as u32,
        _ => ERROR,
    }
}

fn iso2022kr_from_ucs(ch: u32) -> Option<(usize, u32)> {
    if ch < 0x80 {
        Some((0, ch))
    } else {
        ksx1001::backward(ch)
            .map(|(r, c)| (1, ((r as u32 + 0x21) << 8) | (c as u32 + 0x21)))
    }
}

static ISO2022KR_ESCAPES: [Iso2022Escape; 3] = [
    Iso2022Escape {
        sequence: b"\x0e",
        and_bits: 0x8FFF_FFFF,
        xor_bits: 0x1000_0000,
        container: -1,
        subcharset: -1,
    },
    Iso2022Escape {
        sequence: b"\x0f",
        and_bits: 0x8FFF_FFFF,
        xor_bits: 0x0000_0000,
        container: 0,
        subcharset: 0,
    },
    // bits 11:6 (the SO container's subcharset) <- 1
    Iso2022Escape {
        sequence: b"\x1b$)C",
        and_bits: 0xFFFF_F03F,
        xor_bits: 0x0000_0040,
        container: 1,
        subcharset: 1,
    },
];

pub(crate) static ISO2022_KR: Iso2022Subset = Iso2022Subset {
    escapes: &ISO2022KR_ESCAPES,
    nbytes: &[1, 2],
    reset: &[2],
    init_s1: 0x8000_0040,
    initial_sequence: b"\x1b$)C",
    eightbit: false,
    to_ucs: iso2022kr_to_ucs,
    from_ucs: iso2022kr_from_ucs,
};

#[cfg(test)]
mod tests {
    use crate::charset::Charset;
    use crate::testutils::{decode_to_vec, encode_finish_to_vec};

    #[test]
    fn test_jp_decode() {
        // "Japanese (日本語)" in RFC 1468 form
        let input = b"Japanese (\x1b$BF|K\\8l\x1b(B)";
        let mut expected: Vec<u32> = b"Japanese (".iter().map(|&b| b as u32).collect();
        expected.extend([0x65E5, 0x672C, 0x8A9E, 0x29]);
        assert_eq!(decode_to_vec(Charset::Iso2022Jp, input), expected);
    }

    #[test]
    fn test_jp_decode_jisx0201() {
        assert_eq!(
            decode_to_vec(Charset::Iso2022Jp, b"\x1b(J\\~\x1b(B\\"),
            [0xA5, 0x203E, 0x5C]
        );
    }

    #[test]
    fn test_jp_decode_1978_designation() {
        assert_eq!(
            decode_to_vec(Charset::Iso2022Jp, b"\x1b$@F|\x1b(B"),
            [0x65E5]
        );
    }

    #[test]
    fn test_jp_unknown_escape_passes_through() {
        assert_eq!(
            decode_to_vec(Charset::Iso2022Jp, b"\x1b(Ix"),
            [0x1B, 0x28, 0x49, 0x78]
        );
    }

    #[test]
    fn test_jp_escape_kills_partial_character() {
        assert_eq!(
            decode_to_vec(Charset::Iso2022Jp, b"\x1b$BF\x1b(BA"),
            [0xFFFF, 0x41]
        );
    }

    #[test]
    fn test_jp_encode() {
        assert_eq!(
            encode_finish_to_vec(Charset::Iso2022Jp, &[0x4A, 0x65E5, 0x672C, 0x8A9E, 0x29]),
            Some(b"J\x1b$BF|K\\8l\x1b(B)".to_vec())
        );
        // plain ASCII needs no designations at all
        assert_eq!(
            encode_finish_to_vec(Charset::Iso2022Jp, &[0x41]),
            Some(b"A".to_vec())
        );
        assert_eq!(encode_finish_to_vec(Charset::Iso2022Jp, &[0xAC00]), None);
    }

    #[test]
    fn test_kr_decode() {
        // RFC 1557 mandatory designation, then SO/SI shifting
        assert_eq!(
            decode_to_vec(Charset::Iso2022Kr, b"\x1b$)C\x0eGQ19\x0fA"),
            [0xD55C, 0xAD6D, 0x41]
        );
    }

    #[test]
    fn test_kr_encode() {
        assert_eq!(
            encode_finish_to_vec(Charset::Iso2022Kr, &[0xD55C, 0xAD6D, 0x41]),
            Some(b"\x1b$)C\x0eGQ19\x0fA".to_vec())
        );
        // the preamble reappears after finish, per piece of text
        assert_eq!(
            encode_finish_to_vec(Charset::Iso2022Kr, &[0x41]),
            Some(b"\x1b$)CA".to_vec())
        );
    }
}
