// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! Literal wire-format scenarios, pinned byte for byte.

use charsets::{finish, from_unicode, to_unicode, Charset, CharsetState, Unrepresentable};

const ERROR: u32 = 0xFFFF;

fn decode(cs: Charset, input: &[u8]) -> Vec<u32> {
    let mut state = CharsetState::new();
    let mut out = vec![0u32; input.len() * 2 + 8];
    let r = to_unicode(cs, input, &mut state, &mut out, Some(&[ERROR]));
    assert_eq!(r.consumed, input.len());
    out.truncate(r.written);
    out
}

fn encode(cs: Charset, scalars: &[u32]) -> Vec<u8> {
    let mut state = CharsetState::new();
    let mut out = vec![0u8; scalars.len() * 16 + 32];
    let r = from_unicode(cs, scalars, &mut state, &mut out, Unrepresentable::Stop);
    assert!(!r.unrepresentable);
    let mut n = r.written;
    n += finish(cs, &mut state, &mut out[n..]).unwrap();
    out.truncate(n);
    out
}

#[test]
fn utf8_truncated_sequence_then_invalid_byte() {
    // E1 80 fed first, FE on the same state afterwards: one error for the
    // truncated sequence, one for the impossible byte
    let mut state = CharsetState::new();
    let mut out = [0u32; 8];
    let r = to_unicode(Charset::Utf8, &[0xE1, 0x80], &mut state, &mut out, Some(&[ERROR]));
    assert_eq!((r.consumed, r.written), (2, 0));
    let r = to_unicode(Charset::Utf8, &[0xFE], &mut state, &mut out, Some(&[ERROR]));
    assert_eq!(r.consumed, 1);
    assert_eq!(&out[..r.written], [ERROR, ERROR]);
}

#[test]
fn utf16_autodetect_consumes_bom() {
    assert_eq!(decode(Charset::Utf16, &[0xFE, 0xFF, 0x00, 0x41]), [0x41]);
}

#[test]
fn utf7_quoted_text() {
    assert_eq!(
        decode(Charset::Utf7, b"+ACI-Hi+ACI-"),
        [0x22, 0x48, 0x69, 0x22]
    );
}

#[test]
fn shift_jis_pair_and_yen() {
    assert_eq!(decode(Charset::ShiftJis, &[0x82, 0xA0]), [0x3042]);
    assert_eq!(decode(Charset::ShiftJis, &[0x5C]), [0xA5]);
}

#[test]
fn hz_gb_mode_and_back() {
    // U+554A's GL bytes are 30 21 (RFC 1843 carries GB2312 in GL)
    assert_eq!(decode(Charset::Hz, b"~{0!~}A"), [0x554A, 0x41]);
    // the high-bit EUC form of the same character is not legal inside
    // ~{ .. ~}: one error, back to ASCII mode
    assert_eq!(
        decode(Charset::Hz, &[b'~', b'{', 0xB0, 0xA1, b'~', b'}', b'A']),
        [ERROR, 0xA1, 0x41]
    );
}

#[test]
fn euc_jp_half_width_katakana() {
    assert_eq!(decode(Charset::EucJp, &[0x8E, 0xA1]), [0xFF61]);
}

#[test]
fn iso2022jp_interleaved_text() {
    let mut expected: Vec<u32> = b"Japanese (".iter().map(|&b| b as u32).collect();
    expected.extend([0x65E5, 0x672C, 0x8A9E, 0x29]);
    assert_eq!(
        decode(Charset::Iso2022Jp, b"Japanese (\x1b$BF|K\\8l\x1b(B)"),
        expected
    );
}

#[test]
fn iso2022_extended_segment() {
    assert_eq!(
        decode(Charset::Iso2022, b"\x1b%/1\x80\x8eiso8859-15\x02xyz\x1b(B"),
        [0x78, 0x79, 0x7A]
    );
}

#[test]
fn compound_text_encodes_nbsp_then_han() {
    // NBSP sits in the default GR set; the ideograph designates a CJK set
    // into GR and uses its high-half bytes
    assert_eq!(
        encode(Charset::Ctext, &[0xA0, 0x5143]),
        b"\xa0\x1b$)A\xd4\xaa\x1b-A".to_vec()
    );
}

#[test]
fn iso2022kr_mandatory_preamble() {
    assert_eq!(
        encode(Charset::Iso2022Kr, &[0xD55C]),
        b"\x1b$)C\x0eGQ\x0f".to_vec()
    );
}

#[test]
fn recoding_between_charsets() {
    // Shift-JIS in, ISO-2022-JP out, via the scalar stream
    let scalars = decode(Charset::ShiftJis, &[0x93, 0xFA, 0x96, 0x7B, 0x8C, 0xEA]);
    assert_eq!(scalars, [0x65E5, 0x672C, 0x8A9E]);
    assert_eq!(
        encode(Charset::Iso2022Jp, &scalars),
        b"\x1b$BF|K\\8l\x1b(B".to_vec()
    );
}
