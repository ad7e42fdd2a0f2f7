// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! Full ISO/IEC 2022 (ECMA-35), which is also the codec for X11
//! COMPOUND_TEXT.
//!
//! This is not a complete implementation of ISO/IEC 2022, but it is close.
//! It decodes 8-bit and 7-bit streams, with single-byte and multi-byte
//! character sets in all four containers (G0–G3) via both single-shift and
//! locking-shift sequences. Any valid sequence is either decoded or marked
//! with an error; the C0 and C1 sets are fixed as those of ISO/IEC 6429,
//! and escape sequences designating control sets are passed through so a
//! postprocessor can pick them up. DOCS switches to UTF-8 and to
//! COMPOUND_TEXT length-prefixed extended segments are decoded; other DOCS
//! targets are swallowed.
//!
//! Decode state:
//!
//!  - `s0` bits 31:29: the mode (idle, single-shifted character, escape
//!    accumulation/pass/drop, or one of the two DOCS modes); bits 24:0
//!    accumulate escape or character bytes. After DOCS the low 29 bits
//!    belong to the DOCS sub-machine; UTF-8 keeps its own state in bits
//!    25:0 and recognises `ESC % @` with bits 27:26.
//!  - `s1` bits 31:30 and 29:28: the containers invoked into GL and GR;
//!    four seven-bit fields from bit 0: the subcharset designated into
//!    G0, G1, G2 and G3.
//!
//! Encode state (the Compound Text output restrictions make this simpler:
//! G0 is always GL and G1 always GR):
//!
//!  - `s1` bit 31: initialised; bits 30:24 / 23:17: the subcharsets in
//!    G1 / G0; bits 16:14: the active DOCS target plus two; bits 13:11:
//!    buffered extended-segment bytes; bits 7:0 plus all of `s0`: the
//!    buffer itself.

use crate::all;
use crate::charset::Charset;
use crate::codec::utf_8;
use crate::index::singlebyte::{self, SbcsTable};
use crate::index::{big5, cns11643, gb2312, jis0208, jis0212, ksx1001};
use crate::types::{CharsetState, CodecSpec, EmitByte, EmitWide, ERROR};

const LS1: u8 = 0x0E;
const LS0: u8 = 0x0F;
const ESC: u8 = 0x1B;
const SS2: u8 = 0x8E;
const SS3: u8 = 0x8F;

/// Set-size classes: single- or multi-byte, 94 or 96 positions per byte.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum SetClass {
    S4,
    S6,
    M4,
    M6,
}
use SetClass::{M4, M6, S4, S6};

// Enablement classes. Checked on output only; for input, any ISO 2022 we
// can comprehend at all is considered acceptable.
const CCS: u8 = 1; // COMPOUND_TEXT standard
const COS: u8 = 2; // other standard
const CPU: u8 = 3; // private use
const CDC: u8 = 4; // DOCS, COMPOUND_TEXT extended segment
const CDU: u8 = 5; // DOCS, UTF-8
const CNU: u8 = 31; // never used on output

/// What a decoder or encoder in this mode may designate: the enabled
/// subcharset classes and the initial contents of GL and GR.
pub(crate) struct Iso2022Mode {
    pub enable_mask: u32,
    pub left: (SetClass, u8, u8),
    pub right: (SetClass, u8, u8),
}

/// Full ISO 2022 with everything switched on; ASCII in all containers.
pub(crate) static ISO2022_ALL: Iso2022Mode = Iso2022Mode {
    enable_mask: (1 << CCS) | (1 << COS) | (1 << CPU) | (1 << CDC) | (1 << CDU),
    left: (S4, 0, b'B'),
    right: (S4, 0, b'B'),
};

/// X11 COMPOUND_TEXT: the ctext-standard subset only, ISO 8859-1 in GR.
pub(crate) static CTEXT: Iso2022Mode = Iso2022Mode {
    enable_mask: (1 << CCS) | (1 << CDC),
    left: (S4, 0, b'B'),
    right: (S6, 0, b'A'),
};

enum ToDbcs {
    Plain(fn(u32) -> Option<(u8, u8)>),
    /// The lookup serves several plane-designating subcharsets; the entry
    /// only matches when the returned plane equals the second field.
    Planar(fn(u32) -> Option<(u8, u8, u8)>, u8),
}

struct Subcharset {
    class: SetClass,
    i: u8,
    f: u8,
    enable: u8,
    /// Added to raw byte values before table lookup.
    offset: i32,
    sbcs: Option<&'static SbcsTable>,
    from_dbcs: Option<fn(i32, i32) -> u32>,
    to_dbcs: Option<ToDbcs>,
}

const fn sbcs_entry(
    class: SetClass,
    f: u8,
    enable: u8,
    offset: i32,
    table: &'static SbcsTable,
) -> Subcharset {
    Subcharset {
        class,
        i: 0,
        f,
        enable,
        offset,
        sbcs: Some(table),
        from_dbcs: None,
        to_dbcs: None,
    }
}

const fn dbcs_entry(
    class: SetClass,
    f: u8,
    enable: u8,
    from_dbcs: fn(i32, i32) -> u32,
    to_dbcs: ToDbcs,
) -> Subcharset {
    Subcharset {
        class,
        i: 0,
        f,
        enable,
        offset: -0x21,
        sbcs: None,
        from_dbcs: Some(from_dbcs),
        to_dbcs: Some(to_dbcs),
    }
}

const fn null_entry(class: SetClass) -> Subcharset {
    Subcharset {
        class,
        i: 0,
        f: b'~',
        enable: CNU,
        offset: 0,
        sbcs: None,
        from_dbcs: match class {
            M4 | M6 => Some(null_dbcs),
            _ => None,
        },
        to_dbcs: None,
    }
}

fn null_dbcs(_r: i32, _c: i32) -> u32 {
    ERROR
}

macro_rules! dbcs_fwd {
    ($name:ident, $module:ident) => {
        fn $name(r: i32, c: i32) -> u32 {
            crate::index::$module::forward(r as u32, c as u32) as u32
        }
    };
}

dbcs_fwd!(gb2312_fwd, gb2312);
dbcs_fwd!(jis0208_fwd, jis0208);
dbcs_fwd!(jis0212_fwd, jis0212);
dbcs_fwd!(ksx1001_fwd, ksx1001);

macro_rules! cns_fwd {
    ($name:ident, $plane:expr) => {
        fn $name(r: i32, c: i32) -> u32 {
            cns11643::forward($plane, r as u32, c as u32) as u32
        }
    };
}

cns_fwd!(cns11643_1_fwd, 0);
cns_fwd!(cns11643_2_fwd, 1);
cns_fwd!(cns11643_3_fwd, 2);
cns_fwd!(cns11643_4_fwd, 3);
cns_fwd!(cns11643_5_fwd, 4);
cns_fwd!(cns11643_6_fwd, 5);
cns_fwd!(cns11643_7_fwd, 6);

// Emacs encodes Big5 in COMPOUND_TEXT as two 94×94 character sets. We
// treat Big5 as a 94×191 set with a gap in the middle of each row, so the
// two views need a little arithmetic to line up.

fn emacs_big5_row_col(plane_base: u32, r: i32, c: i32) -> u32 {
    if r < 0 || c < 0 {
        return ERROR;
    }
    let s = plane_base + r as u32 * 94 + c as u32;
    let r = s / 157;
    let mut c = s % 157;
    if c >= 64 {
        c += 34; // skip over the gap
    }
    big5::forward(r, c) as u32
}

fn emacs_big5_1_fwd(r: i32, c: i32) -> u32 {
    emacs_big5_row_col(0, r, c)
}

fn emacs_big5_2_fwd(r: i32, c: i32) -> u32 {
    emacs_big5_row_col(40 * 157, r, c)
}

fn emacs_big5_back(ch: u32) -> Option<(u8, u8, u8)> {
    let (r, c) = big5::backward(ch)?;
    let mut c = c as u32;
    if c >= 64 {
        c -= 34;
    }
    let mut s = r as u32 * 157 + c;
    let p = if s >= 40 * 157 {
        s -= 40 * 157;
        2
    } else {
        1
    };
    Some((p, (s / 94) as u8, (s % 94) as u8))
}

/// The pivot table of the whole machine. Listed in preference order for
/// output, which follows the COMPOUND_TEXT spec: its standard charsets
/// first, then other standards, then private-use designations, then
/// fallbacks for null sets so that an unknown designation decodes to
/// errors rather than garbage.
static SUBCHARSETS: [Subcharset; 38] = [
    sbcs_entry(S4, b'B', CCS, 0x00, &singlebyte::ascii::TABLE),
    sbcs_entry(S6, b'A', CCS, 0x80, &singlebyte::iso_8859_1::TABLE),
    sbcs_entry(S6, b'B', CCS, 0x80, &singlebyte::iso_8859_2::TABLE),
    sbcs_entry(S6, b'C', CCS, 0x80, &singlebyte::iso_8859_3::TABLE),
    sbcs_entry(S6, b'D', CCS, 0x80, &singlebyte::iso_8859_4::TABLE),
    sbcs_entry(S6, b'F', CCS, 0x80, &singlebyte::iso_8859_7::TABLE),
    sbcs_entry(S6, b'G', CCS, 0x80, &singlebyte::iso_8859_6::TABLE),
    sbcs_entry(S6, b'H', CCS, 0x80, &singlebyte::iso_8859_8::TABLE),
    sbcs_entry(S6, b'L', CCS, 0x80, &singlebyte::iso_8859_5::TABLE),
    sbcs_entry(S6, b'M', CCS, 0x80, &singlebyte::iso_8859_9::TABLE),
    sbcs_entry(S4, b'I', CCS, 0x80, &singlebyte::jisx0201::TABLE),
    sbcs_entry(S4, b'J', CCS, 0x00, &singlebyte::jisx0201::TABLE),
    dbcs_entry(M4, b'A', CCS, gb2312_fwd, ToDbcs::Plain(gb2312::backward)),
    dbcs_entry(M4, b'B', CCS, jis0208_fwd, ToDbcs::Plain(jis0208::backward)),
    dbcs_entry(M4, b'C', CCS, ksx1001_fwd, ToDbcs::Plain(ksx1001::backward)),
    dbcs_entry(M4, b'D', CCS, jis0212_fwd, ToDbcs::Plain(jis0212::backward)),
    sbcs_entry(S6, b'T', COS, 0x80, &singlebyte::iso_8859_11::TABLE),
    sbcs_entry(S6, b'V', COS, 0x80, &singlebyte::iso_8859_10::TABLE),
    sbcs_entry(S6, b'Y', COS, 0x80, &singlebyte::iso_8859_13::TABLE),
    sbcs_entry(S6, b'_', COS, 0x80, &singlebyte::iso_8859_14::TABLE),
    sbcs_entry(S6, b'b', COS, 0x80, &singlebyte::iso_8859_15::TABLE),
    sbcs_entry(S6, b'f', COS, 0x80, &singlebyte::iso_8859_16::TABLE),
    sbcs_entry(S4, b'A', COS, 0x00, &singlebyte::bs4730::TABLE),
    dbcs_entry(M4, b'G', COS, cns11643_1_fwd, ToDbcs::Planar(cns11643::backward, 0)),
    dbcs_entry(M4, b'H', COS, cns11643_2_fwd, ToDbcs::Planar(cns11643::backward, 1)),
    dbcs_entry(M4, b'I', COS, cns11643_3_fwd, ToDbcs::Planar(cns11643::backward, 2)),
    dbcs_entry(M4, b'J', COS, cns11643_4_fwd, ToDbcs::Planar(cns11643::backward, 3)),
    dbcs_entry(M4, b'K', COS, cns11643_5_fwd, ToDbcs::Planar(cns11643::backward, 4)),
    dbcs_entry(M4, b'L', COS, cns11643_6_fwd, ToDbcs::Planar(cns11643::backward, 5)),
    dbcs_entry(M4, b'M', COS, cns11643_7_fwd, ToDbcs::Planar(cns11643::backward, 6)),
    sbcs_entry(S4, b'0', CPU, 0x00, &singlebyte::dec_graphics::TABLE),
    sbcs_entry(S4, b'<', CPU, 0x80, &singlebyte::dec_mcs::TABLE),
    dbcs_entry(M4, b'0', CPU, emacs_big5_1_fwd, ToDbcs::Planar(emacs_big5_back, 1)),
    dbcs_entry(M4, b'1', CPU, emacs_big5_2_fwd, ToDbcs::Planar(emacs_big5_back, 2)),
    null_entry(S4),
    null_entry(S6),
    null_entry(M4),
    null_entry(M6),
];

// Decoder modes, in s0 bits 31:29.
const IDLE: u32 = 0;
const SS2CHAR: u32 = 1;
const SS3CHAR: u32 = 2;
const ESCSEQ: u32 = 3;
const ESCDROP: u32 = 4;
const ESCPASS: u32 = 5;
const DOCSUTF8: u32 = 6;
const DOCSCTEXT: u32 = 7;

const LEFT: u32 = 30;
const RIGHT: u32 = 28;

fn mode_of(s0: u32) -> u32 {
    s0 >> 29
}

fn enter_mode(state: &mut CharsetState, m: u32) {
    state.s0 = (state.s0 & !0xE000_0000) | (m << 29);
}

fn locking_shift(state: &mut CharsetState, n: u32, side: u32) {
    state.s1 = (state.s1 & !(3 << side)) | (n << side);
}

fn single_shift(state: &mut CharsetState, n: u32) {
    enter_mode(state, SS2CHAR + n - 2);
}

fn assert_idle(state: &mut CharsetState, emit: &mut EmitWide) {
    if state.s0 != 0 {
        emit(ERROR);
    }
    state.s0 = 0;
}

fn designate(state: &mut CharsetState, container: u32, class: SetClass, ibyte: u8, fbyte: u8) {
    debug_assert!(container <= 3);
    for (idx, sc) in SUBCHARSETS.iter().enumerate() {
        if sc.class == class && sc.i == ibyte && sc.f == fbyte {
            state.s1 &= !(0x7F << (container * 7));
            state.s1 |= (idx as u32) << (container * 7);
            return;
        }
    }
    // Unknown charset: invoke the empty one, so we decode to errors
    // rather than garbage.
    designate(state, container, class, 0, b'~');
}

fn do_utf8(b: u8, state: &mut CharsetState, emit: &mut EmitWide) {
    let mut ustate = CharsetState {
        s0: state.s0 & 0x03FF_FFFF,
        s1: 0,
    };
    utf_8::read(b, &mut ustate, emit);
    state.s0 = (state.s0 & !0x03FF_FFFF) | (ustate.s0 & 0x03FF_FFFF);
}

fn docs_utf8(b: u8, state: &mut CharsetState, emit: &mut EmitWide) {
    // Bits 25:0 of s0 belong to the UTF-8 decoder; bits 27:26 are a tiny
    // machine recognising ESC % @.
    let mut retstate = (state.s0 & 0x0C00_0000) >> 26;
    if retstate == 1 && b == b'%' {
        retstate = 2;
    } else if retstate == 2 && b == b'@' {
        // A partial UTF-8 sequence must not cross the exit.
        if state.s0 & 0x03FF_FFFF != 0 {
            emit(ERROR);
        }
        state.s0 = 0;
        return;
    } else {
        if retstate >= 1 {
            do_utf8(ESC, state, emit);
        }
        if retstate >= 2 {
            do_utf8(b'%', state, emit);
        }
        retstate = 0;
        if b == ESC {
            retstate = 1;
        } else {
            do_utf8(b, state, emit);
        }
    }
    state.s0 = (state.s0 & !0x0C00_0000) | (retstate << 26);
}

struct CtextEncoding {
    /// The registered name, including the STX terminator.
    name: &'static [u8],
    octets_per_char: u8,
    enable: u8,
    charset: Charset,
}

/// The extended-segment encodings XLib itself emits (as of X11R6.8.2),
/// whatever the registry may say. Sorted by name for prefix narrowing.
static CTEXT_ENCODINGS: [CtextEncoding; 3] = [
    CtextEncoding {
        name: b"big5-0\x02",
        octets_per_char: 0, // variable
        enable: CDC,
        charset: Charset::Big5,
    },
    CtextEncoding {
        name: b"iso8859-14\x02",
        octets_per_char: 1,
        enable: CDC,
        charset: Charset::Iso8859_14,
    },
    CtextEncoding {
        name: b"iso8859-15\x02",
        octets_per_char: 1,
        enable: CDC,
        charset: Charset::Iso8859_15,
    },
];

fn ctext_spec(i: usize) -> &'static CodecSpec {
    all::find_spec(CTEXT_ENCODINGS[i].charset).expect("extended-segment charset missing")
}

fn docs_ctext(b: u8, state: &mut CharsetState, emit: &mut EmitWide) {
    // s0[27:26]: first entry in CTEXT_ENCODINGS matching so far
    // s0[25:22]: characters of the name matched; 0xF once all matched,
    //            0xE while skipping an unknown encoding
    // s0[21:8]:  octets left in the segment
    // s0[7:0]:   sub-charset state
    let mut n = (state.s0 >> 22) & 0xF;
    let oi = ((state.s0 >> 26) & 3) as usize;
    let mut i = oi;
    let mut length = (state.s0 >> 8) & 0x3FFF;

    if length == 0 {
        // Still reading the two length bytes.
        if state.s0 & 0xFF == 0 {
            state.s0 |= b as u32;
        } else {
            length = (state.s0 & 0x7F) * 0x80 + (b as u32 & 0x7F);
            if length == 0 {
                state.s0 = 0;
            } else {
                state.s0 = (state.s0 & 0xF000_0000) | (length << 8);
            }
        }
        return;
    }

    if n == 0xE {
        // Skipping an unknown encoding name; look out for STX.
        if b == 2 {
            state.s0 = (state.s0 & 0xF000_0000) | ((i as u32) << 26) | (0xF << 22);
        }
    } else if n != 0xF {
        let nn = n as usize;
        let prefix = &CTEXT_ENCODINGS[oi].name[..nn];
        let mut j = i;
        while j < CTEXT_ENCODINGS.len() && CTEXT_ENCODINGS[j].name.get(..nn) == Some(prefix) {
            if CTEXT_ENCODINGS[j].name.get(nn).copied().unwrap_or(0) < b {
                j += 1;
                i = j;
            } else {
                break;
            }
        }
        let matched = i < CTEXT_ENCODINGS.len()
            && CTEXT_ENCODINGS[i].name.get(..nn) == Some(prefix)
            && CTEXT_ENCODINGS[i].name.get(nn) == Some(&b);
        if !matched {
            // No such encoding; skip to the STX and then error out.
            i = CTEXT_ENCODINGS.len();
            n = 0xE;
        } else {
            n += 1;
            if CTEXT_ENCODINGS[i].name.len() == n as usize {
                n = 0xF;
            }
        }
        debug_assert!(i < 4 && n < 16);
        state.s0 = (state.s0 & 0xF000_0000) | ((i as u32) << 26) | (n << 22);
    } else if i >= CTEXT_ENCODINGS.len() {
        emit(ERROR);
    } else {
        let mut sub = CharsetState {
            s0: state.s0 & 0xFF,
            s1: 0,
        };
        ctext_spec(i).read(b, &mut sub, emit);
        state.s0 = (state.s0 & !0xFF) | (sub.s0 & 0xFF);
    }

    length -= 1;
    if length == 0 {
        state.s0 = 0;
    } else {
        state.s0 = (state.s0 & !0x003F_FF00) | (length << 8);
    }
}

pub(crate) fn read(mode: &Iso2022Mode, b: u8, state: &mut CharsetState, emit: &mut EmitWide) {
    if state.s1 == 0 {
        // No LS0R exists, so a zero s1 means we just started: set up LS0,
        // LS1R, and the mode's initial designations (ASCII in G2/G3).
        locking_shift(state, 0, LEFT);
        locking_shift(state, 1, RIGHT);
        let (lc, li, lf) = mode.left;
        let (rc, ri, rf) = mode.right;
        designate(state, 0, lc, li, lf);
        designate(state, 1, rc, ri, rf);
        designate(state, 2, S4, 0, b'B');
        designate(state, 3, S4, 0, b'B');
    }

    match mode_of(state.s0) {
        DOCSUTF8 => return docs_utf8(b, state, emit),
        DOCSCTEXT => return docs_ctext(b, state, emit),
        _ => {}
    }

    if b & 0x60 == 0x00 {
        // C0 or C1 control.
        assert_idle(state, emit);
        match b {
            ESC => enter_mode(state, ESCSEQ),
            LS0 => locking_shift(state, 0, LEFT),
            LS1 => locking_shift(state, 1, LEFT),
            SS2 => single_shift(state, 2),
            SS3 => single_shift(state, 3),
            _ => emit(b as u32),
        }
    } else if b & 0x80 != 0 || mode_of(state.s0) < ESCSEQ {
        // Actual data. Force idle state if we are in mid escape sequence,
        // or in a multibyte character with a different top bit.
        if mode_of(state.s0) >= ESCSEQ
            || (state.s0 & 0x00FF_0000 != 0 && ((state.s0 >> 16) ^ b as u32) & 0x80 != 0)
        {
            assert_idle(state, emit);
        }
        let mut is_gl = false;
        let container = match mode_of(state.s0) {
            SS2CHAR | SS3CHAR => mode_of(state.s0) - SS2CHAR + 2,
            _ if b & 0x80 != 0 => (state.s1 >> RIGHT) & 3,
            _ => {
                is_gl = true;
                state.s1 >> LEFT
            }
        };
        let b7 = (b & 0x7F) as u32;
        let subcs = &SUBCHARSETS[((state.s1 >> (container * 7)) & 0x7F) as usize];

        if matches!(subcs.class, S4 | M4) && (b7 == 0x20 || b7 == 0x7F) {
            // Positions 02/00 and 07/15 fall outside a 94-set.
            if is_gl {
                emit(b7);
            } else {
                emit(ERROR);
            }
        } else if matches!(subcs.class, M4 | M6) {
            if state.s0 & 0x00FF_0000 == 0 {
                state.s0 |= (b as u32) << 16;
                return;
            }
            let from_dbcs = subcs.from_dbcs.expect("multibyte set without a table");
            emit(from_dbcs(
                (((state.s0 >> 16) & 0x7F) as i32) + subcs.offset,
                b7 as i32 + subcs.offset,
            ));
        } else {
            if state.s0 & 0x00FF_0000 != 0 {
                emit(ERROR);
            }
            emit(match subcs.sbcs {
                Some(table) => table.forward((b7 as i32 + subcs.offset) as u8) as u32,
                None => ERROR,
            });
        }
        state.s0 = 0;
    } else {
        // An escape sequence in progress.
        if mode_of(state.s0) == ESCPASS {
            emit(b as u32);
            if b & 0xF0 != 0x20 {
                enter_mode(state, IDLE);
            }
            return;
        }

        if b & 0xF0 == 0x20 {
            // An intermediate byte (column 02).
            if (state.s0 >> 16) & 0xFF == 0 {
                state.s0 |= (b as u32) << 16;
            } else if (state.s0 >> 8) & 0xFF == 0 {
                state.s0 |= (b as u32) << 8;
            } else {
                // Three intermediates: a long escape sequence. Swallow
                // designations, pass anything else through.
                let i1 = ((state.s0 >> 16) & 0xFF) as u8;
                let i2 = ((state.s0 >> 8) & 0xFF) as u8;
                match i1 {
                    b'(' | b')' | b'*' | b'+' | b'-' | b'.' | b'/' | b'$' => {
                        enter_mode(state, ESCDROP);
                    }
                    _ => {
                        emit(ESC as u32);
                        emit(i1 as u32);
                        emit(i2 as u32);
                        emit(b as u32);
                        state.s0 = 0;
                        enter_mode(state, ESCPASS);
                    }
                }
            }
            return;
        }

        // A final byte (columns 03 to 07).
        let i1 = ((state.s0 >> 16) & 0xFF) as u8;
        let i2 = ((state.s0 >> 8) & 0xFF) as u8;
        let f = if mode_of(state.s0) == ESCDROP { 0 } else { b };
        state.s0 = 0;
        match i1 {
            0 => match f {
                b'N' => single_shift(state, 2),
                b'O' => single_shift(state, 3),
                b'n' => locking_shift(state, 2, LEFT),
                b'o' => locking_shift(state, 3, LEFT),
                b'|' => locking_shift(state, 3, RIGHT),
                b'}' => locking_shift(state, 2, RIGHT),
                b'~' => locking_shift(state, 1, RIGHT),
                _ => {
                    // Unsupported escape sequence; spit it back out.
                    emit(ESC as u32);
                    emit(f as u32);
                }
            },
            b' ' => {
                // ACS. The coding structure facilities that designate a
                // code element also invoke it, and they ban locking
                // shifts, so invoking here has the same practical effect.
                match f {
                    b'A' => locking_shift(state, 0, LEFT),
                    b'C' | b'D' | b'L' | b'M' => {
                        locking_shift(state, 0, LEFT);
                        locking_shift(state, 1, RIGHT);
                    }
                    _ => {}
                }
            }
            // IRR: a revised registration must be upward-compatible with
            // the old one, so there is nothing to do with it.
            b'&' => {}
            b'(' | b')' | b'*' | b'+' => designate(state, (i1 - b'(') as u32, S4, i2, f),
            b'-' | b'.' | b'/' => designate(state, (i1 - b',') as u32, S6, i2, f),
            b'$' => {
                // An absent second intermediate is the obsolete form of
                // GZDM4.
                let i2 = if i2 == 0 { b'(' } else { i2 };
                match i2 {
                    b'(' | b')' | b'*' | b'+' => designate(state, (i2 - b'(') as u32, M4, 0, f),
                    b'-' | b'.' | b'/' => designate(state, (i2 - b',') as u32, M6, 0, f),
                    _ => emit(ERROR),
                }
            }
            b'%' => match (i2, f) {
                // DOCS. Unrecognised targets are swallowed, which will
                // produce surprising results.
                (0, b'G') => enter_mode(state, DOCSUTF8),
                (b'/', b'0' | b'1' | b'2') => enter_mode(state, DOCSCTEXT),
                _ => {}
            },
            _ => {
                // Unsupported nF escape sequence; re-emit it.
                emit(ESC as u32);
                emit(i1 as u32);
                if i2 != 0 {
                    emit(i2 as u32);
                }
                emit(f as u32);
            }
        }
    }
}

fn oselect(state: &mut CharsetState, i: usize, right: bool, emit: Option<&mut EmitByte>) {
    let shift = if right { 24 } else { 17 };
    let sc = &SUBCHARSETS[i];

    if (state.s1 >> shift) & 0x7F != i as u32 {
        state.s1 &= !(0x7F << shift);
        state.s1 |= (i as u32) << shift;

        if let Some(emit) = emit {
            emit(ESC);
            if matches!(sc.class, M4 | M6) {
                emit(b'$');
            }
            if matches!(sc.class, S6 | M6) {
                debug_assert!(right);
                emit(b'-');
            } else if right {
                emit(b')');
            } else {
                emit(b'(');
            }
            if sc.i != 0 {
                emit(sc.i);
            }
            emit(sc.f);
        }
    }
}

/// Moves the output between DOCS targets, buffering and flushing the
/// length-prefixed extended segments. `cset` indexes `CTEXT_ENCODINGS`,
/// with -1 meaning DOCS UTF-8 and -2 meaning plain ISO 2022.
fn docs_char(state: &mut CharsetState, emit: &mut EmitByte, cset: i32, data: &[u8]) {
    let mut curr = (((state.s1 >> 14) & 7) as i32) - 2;
    let mut currlen = ((state.s1 >> 11) & 7) as usize;

    // Terminate the active segment when switching targets, or when a
    // length-prefixed segment has no room for the incoming bytes.
    if (curr != -2 && curr != cset) || (curr >= 0 && currlen + data.len() > 5) {
        if curr == -1 {
            emit(ESC);
            emit(b'%');
            emit(b'@');
        } else {
            // A length-prefixed segment is all preamble, so terminating
            // one means finally writing the whole thing out.
            let enc = &CTEXT_ENCODINGS[curr as usize];
            let len = currlen + enc.name.len();
            emit(ESC);
            emit(b'%');
            emit(b'/');
            emit(b'0' + enc.octets_per_char);
            debug_assert!(len < (1 << 14));
            emit(0x80 | ((len >> 7) & 0x7F) as u8);
            emit(0x80 | (len & 0x7F) as u8);
            for &nb in enc.name {
                emit(nb);
            }
            for k in 0..currlen {
                emit(if k == 0 {
                    (state.s1 & 0xFF) as u8
                } else {
                    ((state.s0 >> (8 * (4 - k))) & 0xFF) as u8
                });
            }
        }
        curr = -2;
    }

    // Start the new segment if necessary.
    if curr != cset {
        debug_assert!(cset != -2);
        if cset == -1 {
            emit(ESC);
            emit(b'%');
            emit(b'G');
        } else {
            currlen = 0;
            state.s1 &= !(7 << 11);
            state.s1 &= !0xFF;
            state.s0 = 0;
        }
    }
    state.s1 &= !(7 << 14);
    debug_assert!((-2..6).contains(&cset));
    state.s1 |= ((cset + 2) as u32) << 14;

    if !data.is_empty() {
        debug_assert!(cset != -2);
        if cset == -1 {
            // DOCS UTF-8 output needs no buffering.
            for &d in data {
                emit(d);
            }
        } else {
            debug_assert!(currlen + data.len() <= 5);
            for (k, &d) in data.iter().enumerate() {
                if currlen + k == 0 {
                    state.s1 |= d as u32;
                } else {
                    state.s0 |= (d as u32) << (8 * (4 - (currlen + k)));
                }
            }
            currlen += data.len();
            state.s1 &= !(7 << 11);
            state.s1 |= (currlen as u32) << 11;
        }
    }
}

fn init_output(mode: &Iso2022Mode, state: &mut CharsetState) {
    if state.s1 == 0 {
        state.s0 = 0;
        state.s1 = 0x8000_0000;
        for i in 0..SUBCHARSETS.len() {
            let sc = &SUBCHARSETS[i];
            if (sc.class, sc.i, sc.f) == mode.left {
                oselect(state, i, false, None);
            }
            if (sc.class, sc.i, sc.f) == mode.right {
                oselect(state, i, true, None);
            }
        }
    }
}

/// Writing full ISO 2022 is not useful in many circumstances; the one
/// place it really matters is generating X11 COMPOUND_TEXT, so this
/// encoder obeys the compound text restrictions and emits the subset of
/// ISO 2022 usable in that context: G0 stays in GL and G1 in GR, the only
/// escapes produced (besides DOCS) designate subcharsets into those two
/// containers, and everything 96-position or multibyte goes to GR.
pub(crate) fn write(mode: &Iso2022Mode, ch: u32, state: &mut CharsetState, emit: &mut EmitByte) -> bool {
    init_output(mode, state);

    // Space, Delete, and the C0/C1 controls are output unchanged (after
    // closing any extended segment, which must not swallow them).
    if ch <= 0x20 || (0x7F..0xA0).contains(&ch) {
        docs_char(state, emit, -2, &[]);
        emit(ch as u8);
        return true;
    }

    // Work out which subcharset can carry the character, in table
    // preference order.
    let mut found = None;
    for (i, sc) in SUBCHARSETS.iter().enumerate() {
        if mode.enable_mask & (1 << sc.enable) == 0 {
            continue;
        }
        if let Some(table) = sc.sbcs {
            if let Some(byte) = table.backward(ch) {
                let c1 = byte as i32 - sc.offset;
                if (0x20..=0x7F).contains(&c1) {
                    found = Some((i, c1, 0));
                    break;
                }
            }
        } else if let Some(to_dbcs) = &sc.to_dbcs {
            let pair = match *to_dbcs {
                ToDbcs::Plain(back) => back(ch),
                ToDbcs::Planar(back, plane) => match back(ch) {
                    Some((p, r, c)) if p == plane => Some((r, c)),
                    _ => None,
                },
            };
            if let Some((r, c)) = pair {
                found = Some((i, r as i32 - sc.offset, c as i32 - sc.offset));
                break;
            }
        }
    }

    if let Some((i, c1, c2)) = found {
        let sc = &SUBCHARSETS[i];

        // 96-sets and multibyte sets cannot fit in GL, and the compound
        // text rules put the right-hand half of any SBCS in GR; M4 sets
        // could go either way, but GR for them too is a simple policy
        // that keeps ASCII available in GL alongside.
        let right = matches!(sc.class, S6 | M6 | M4) || (sc.sbcs.is_some() && sc.offset == 0x80);

        docs_char(state, emit, -2, &[]);
        oselect(state, i, right, Some(&mut *emit));

        let top = if right { 0x80 } else { 0 };
        debug_assert!((0x20..=0x7F).contains(&c1));
        emit((c1 | top) as u8);
        if c2 != 0 {
            debug_assert!((0x20..=0x7F).contains(&c2));
            emit((c2 | top) as u8);
        }
        return true;
    }

    // Fall back to a DOCS segment. All the character sets DOCS reaches
    // are stateless for output purposes.
    let mut buf = [0u8; 8];
    for (i, enc) in CTEXT_ENCODINGS.iter().enumerate() {
        if mode.enable_mask & (1 << enc.enable) == 0 {
            continue;
        }
        let mut sub = CharsetState::new();
        let mut len = 0;
        if ctext_spec(i).write(ch, &mut sub, &mut |b| {
            buf[len] = b;
            len += 1;
        }) {
            docs_char(state, emit, i as i32, &buf[..len]);
            return true;
        }
    }
    if mode.enable_mask & (1 << CDU) != 0 {
        let mut len = 0;
        if utf_8::write(ch, &mut |b| {
            buf[len] = b;
            len += 1;
        }) {
            docs_char(state, emit, -1, &buf[..len]);
            return true;
        }
    }

    false
}

pub(crate) fn finish(mode: &Iso2022Mode, state: &mut CharsetState, emit: &mut EmitByte) {
    init_output(mode, state);
    docs_char(state, emit, -2, &[]);
    for i in 0..SUBCHARSETS.len() {
        let sc = &SUBCHARSETS[i];
        if (sc.class, sc.i, sc.f) == mode.left {
            oselect(state, i, false, Some(&mut *emit));
        }
        if (sc.class, sc.i, sc.f) == mode.right {
            oselect(state, i, true, Some(&mut *emit));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::charset::Charset;
    use crate::testutils::{decode_to_vec, encode_finish_to_vec};

    const ERROR: u32 = 0xFFFF;

    fn wide(s: &[u8]) -> Vec<u32> {
        s.iter().map(|&b| b as u32).collect()
    }

    #[test]
    fn test_decode_iso2022jp_form() {
        // the Emacs sample text for Japanese, in ISO-2022-JP form
        let mut expected = wide(b"Japanese (");
        expected.extend([0x65E5, 0x672C, 0x8A9E]);
        expected.extend(wide(b")\t"));
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"Japanese (\x1b$BF|K\\8l\x1b(B)\t"),
            expected
        );
    }

    #[test]
    fn test_decode_euc_jp_form_with_designations() {
        // the same text as 8-bit EUC-JP after suitable designations,
        // including half-width katakana via SS2
        let input = b"\x1b$)B\x1b*I\x1b$+D\xa4\xb3\xa4\xf3 \x8e\xba\x8e\xdd\n";
        assert_eq!(
            decode_to_vec(Charset::Iso2022, input),
            [0x3053, 0x3093, 0x20, 0xFF7A, 0xFF9D, 0x0A]
        );
    }

    #[test]
    fn test_decode_multibyte_single_shift() {
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b$)B\x1b*I\x1b$+D\x8f\"/!"),
            [0x02D8, 0x21]
        );
    }

    #[test]
    fn test_decode_nonexistent_sbcs() {
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b(!Zfnord\n"),
            [ERROR, ERROR, ERROR, ERROR, ERROR, 0x0A]
        );
    }

    #[test]
    fn test_decode_escape_passthrough() {
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1bb\x1b#5\x1b#!!!5"),
            [0x1B, 0x62, 0x1B, 0x23, 0x35, 0x1B, 0x23, 0x21, 0x21, 0x21, 0x35]
        );
    }

    #[test]
    fn test_decode_nonexistent_dbcs() {
        // also a five-byte escape sequence, dropped as a designation
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b$(!Bfnord!"),
            [ERROR, ERROR, ERROR]
        );
    }

    #[test]
    fn test_decode_incomplete_double_byte() {
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b$B(,(\x1b(BHi\x1b$B(,(\n"),
            [0x2501, ERROR, 0x48, 0x69, 0x2501, ERROR, 0x0A]
        );
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b$)B\x1b*I\x1b$+D\xa4\x42"),
            [ERROR, 0x42]
        );
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b$)B\x1b*I\x1b$+D\x0e\x1b|$\xa2\xaf"),
            [ERROR, 0x02D8]
        );
    }

    #[test]
    fn test_decode_incomplete_escape() {
        assert_eq!(decode_to_vec(Charset::Iso2022, b"\x1b\n"), [ERROR, 0x0A]);
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b-A\x1b~\x1b\xa1"),
            [ERROR, 0xA1]
        );
    }

    #[test]
    fn test_decode_incomplete_single_shift() {
        assert_eq!(decode_to_vec(Charset::Iso2022, b"\x8e\n"), [ERROR, 0x0A]);
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b$*B\x8e(\n"),
            [ERROR, 0x0A]
        );
    }

    #[test]
    fn test_decode_corner_positions() {
        // 02/00 and 07/15 inside and outside 94-sets
        assert_eq!(decode_to_vec(Charset::Iso2022, b"\x1b(B\x20\x7f"), [0x20, 0x7F]);
        assert_eq!(decode_to_vec(Charset::Iso2022, b"\x1b(I\x20\x7f"), [0x20, 0x7F]);
        assert_eq!(decode_to_vec(Charset::Iso2022, b"\x1b$B\x20\x7f"), [0x20, 0x7F]);
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b-A\x0e\x20\x7f"),
            [0xA0, 0xFF]
        );
        assert_eq!(decode_to_vec(Charset::Iso2022, b"\x1b$-~\x0e\x20\x7f"), [ERROR]);
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b)B\xa0\xff"),
            [ERROR, ERROR]
        );
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b)I\xa0\xff"),
            [ERROR, ERROR]
        );
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b$)B\xa0\xff"),
            [ERROR, ERROR]
        );
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b-A\x1b~\xa0\xff"),
            [0xA0, 0xFF]
        );
        assert_eq!(decode_to_vec(Charset::Iso2022, b"\x1b$-~\x1b~\xa0\xff"), [ERROR]);
    }

    #[test]
    fn test_decode_control_set_designation_passes_through() {
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b!@"),
            [0x1B, 0x21, 0x40]
        );
    }

    #[test]
    fn test_decode_docs_utf8() {
        assert_eq!(
            decode_to_vec(
                Charset::Iso2022,
                b"\x1b%G\xCE\xBA\xE1\xBD\xB9\xCF\x83\xCE\xBC\xCE\xB5"
            ),
            [0x03BA, 0x1F79, 0x03C3, 0x03BC, 0x03B5]
        );
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b-A\x1b%G\xCE\xBA\x1b%@\xa0"),
            [0x03BA, 0xA0]
        );
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b%G\xCE\x1b%@"),
            [ERROR]
        );
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b%G\xCE\xBA\x1b%\x1b%@"),
            [0x03BA, 0x1B, 0x25]
        );
    }

    #[test]
    fn test_decode_docs_extended_segment() {
        // zero-length segment
        assert_eq!(decode_to_vec(Charset::Iso2022, b"\x1b%/1\x80\x80"), []);
        // unknown encoding name: skip to STX, then error per character
        assert_eq!(
            decode_to_vec(
                Charset::Iso2022,
                b"\x1b%/1\x80\x8fiso-8859-15\x02xyz\x1b(B"
            ),
            [ERROR, ERROR, ERROR]
        );
        assert_eq!(
            decode_to_vec(
                Charset::Iso2022,
                b"\x1b%/1\x80\x8eiso8859-15\x02xyz\x1b(B"
            ),
            wide(b"xyz")
        );
        assert_eq!(
            decode_to_vec(
                Charset::Iso2022,
                b"\x1b-A\x1b%/2\x80\x89big5-0\x02\xa1\x40\xa1\x40"
            ),
            [0x3000, 0xA1, 0x40]
        );
    }

    #[test]
    fn test_decode_emacs_big5() {
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b$(0&x86\x1b(B  \x1b$(0DeBv"),
            [0x5143, 0x6C23, 0x20, 0x20, 0x958B, 0x767C]
        );
    }

    #[test]
    fn test_decode_iso2022cn_form() {
        // the example from RFC 1922
        assert_eq!(
            decode_to_vec(Charset::Iso2022, b"\x1b$)A\x0e=;;;\x1b$)GG(_P\x0f"),
            [0x4EA4, 0x6362, 0x4EA4, 0x63DB]
        );
    }

    #[test]
    fn test_encode_ctext_gr_designation() {
        // U+00A0 lives in the default GR set; U+5143 designates GB2312
        // into GR (its first hit in the preference order); finish restores
        // the default ISO 8859-1 designation
        assert_eq!(
            encode_finish_to_vec(Charset::Ctext, &[0xA0, 0x5143]),
            Some(b"\xa0\x1b$)A\xd4\xaa\x1b-A".to_vec())
        );
    }

    #[test]
    fn test_encode_ctext_ascii_stays_plain() {
        assert_eq!(
            encode_finish_to_vec(Charset::Ctext, &[0x41, 0x20, 0x42]),
            Some(b"A B".to_vec())
        );
    }

    #[test]
    fn test_encode_ctext_docs_segment() {
        // U+1E82 exists only in ISO 8859-14, which ctext mode can reach
        // only through an extended segment; the segment flushes at finish
        assert_eq!(
            encode_finish_to_vec(Charset::Ctext, &[0x1E82]),
            Some(b"\x1b%/1\x80\x8ciso8859-14\x02\xaa".to_vec())
        );
    }

    #[test]
    fn test_encode_ctext_docs_closes_before_control() {
        let out = encode_finish_to_vec(Charset::Ctext, &[0x1E82, 0x0A, 0x1E82]).unwrap();
        assert_eq!(
            out,
            b"\x1b%/1\x80\x8ciso8859-14\x02\xaa\n\x1b%/1\x80\x8ciso8859-14\x02\xaa".to_vec()
        );
    }

    #[test]
    fn test_encode_iso2022_designates_other_standards() {
        // Thai is only in ISO 8859-11, which the full profile designates
        // as a 96-set; finish restores the default GR contents
        assert_eq!(
            encode_finish_to_vec(Charset::Iso2022, &[0x0E01]),
            Some(b"\x1b-T\xa1\x1b)B".to_vec())
        );
    }

    #[test]
    fn test_encode_iso2022_utf8_fallback() {
        // Hangul syllables outside KS X 1001 need the UTF-8 escape hatch
        let out = encode_finish_to_vec(Charset::Iso2022, &[0xAC02]).unwrap();
        assert_eq!(out, b"\x1b%G\xea\xb0\x82\x1b%@".to_vec());
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let scalars = [
            0x41u32, 0xA0, 0x5143, 0x65E5, 0xD55C, 0x2501, 0x20, 0x7E, 0xE9, 0x1E82,
        ];
        for cs in [Charset::Ctext, Charset::Iso2022] {
            let bytes = encode_finish_to_vec(cs, &scalars).unwrap();
            assert_eq!(decode_to_vec(cs, &bytes), scalars, "{:?}", cs);
        }
    }
}
