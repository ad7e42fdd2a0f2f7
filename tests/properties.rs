// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! Cross-codec properties that every charset must satisfy: decoding is
//! insensitive to input partitioning, total on all byte values, and closed
//! under encode-then-decode; finalising an encoder really does reset it.

use charsets::{
    finish, from_unicode, to_unicode, Charset, CharsetState, Unrepresentable,
};

fn decode_all(cs: Charset, input: &[u8]) -> Vec<u32> {
    let mut state = CharsetState::new();
    let mut out = vec![0u32; input.len() * 4 + 16];
    let r = to_unicode(cs, input, &mut state, &mut out, Some(&[0xFFFF]));
    assert_eq!(r.consumed, input.len());
    out.truncate(r.written);
    out
}

fn decode_split(cs: Charset, parts: &[&[u8]]) -> Vec<u32> {
    let mut state = CharsetState::new();
    let mut collected = Vec::new();
    let mut out = [0u32; 1024];
    for part in parts {
        let r = to_unicode(cs, part, &mut state, &mut out, Some(&[0xFFFF]));
        assert_eq!(r.consumed, part.len());
        collected.extend_from_slice(&out[..r.written]);
    }
    collected
}

fn encode_all(cs: Charset, scalars: &[u32]) -> Option<Vec<u8>> {
    let mut state = CharsetState::new();
    let mut out = vec![0u8; scalars.len() * 8 + 64];
    let r = from_unicode(cs, scalars, &mut state, &mut out, Unrepresentable::Stop);
    if r.unrepresentable {
        return None;
    }
    assert_eq!(r.consumed, scalars.len());
    let mut n = r.written;
    n += finish(cs, &mut state, &mut out[n..]).expect("finish needs more room");
    assert_eq!(state, CharsetState::new());
    out.truncate(n);
    Some(out)
}

fn sample_streams(cs: Charset) -> Vec<Vec<u8>> {
    match cs {
        Charset::Utf8 => vec![
            vec![0x41, 0xE6, 0x97, 0xA5, 0xFE, 0xC3, 0xA9, 0x80, 0x42],
            vec![0xF0, 0x9F, 0x92, 0xA9, 0xE1, 0x80, 0x41],
        ],
        Charset::Utf16 | Charset::Utf16Be => vec![
            vec![0xFE, 0xFF, 0x00, 0x41, 0xD8, 0x3D, 0xDC, 0xA9, 0x00, 0x42],
            vec![0x00, 0x41, 0xDC, 0x00, 0x00, 0x42],
        ],
        Charset::Utf16Le => vec![vec![0xFF, 0xFE, 0x41, 0x00, 0x3D, 0xD8, 0xA9, 0xDC]],
        Charset::Utf7 => vec![
            b"Hi +ZeVnLIqe- +-!".to_vec(),
            b"+2D3cqQ-x+Jj!".to_vec(),
        ],
        Charset::EucJp => vec![
            vec![0xC6, 0xFC, 0x8E, 0xA1, 0x8F, 0xA2, 0xAF, 0x41, 0xC6, 0x41],
        ],
        Charset::EucCn => vec![vec![0xBA, 0xBA, 0xD7, 0xD6, 0x41, 0xBA, 0x20]],
        Charset::EucKr => vec![vec![0xC7, 0xD1, 0xB1, 0xB9, 0x41]],
        Charset::EucTw => vec![vec![0xC7, 0xA8, 0x8E, 0xA2, 0xA1, 0xA1, 0x41]],
        Charset::ShiftJis => vec![vec![0x93, 0xFA, 0x5C, 0xB1, 0x82, 0xA0, 0x82, 0x3F]],
        Charset::Big5 => vec![vec![0xA4, 0x40, 0x41, 0xA4, 0xB8, 0xA4, 0x39]],
        Charset::Cp949 => vec![vec![0xB0, 0xA1, 0x81, 0x41, 0x41, 0xB0, 0x20]],
        Charset::Hz => vec![b"a~{0!;;~}b~~c~\nd~{x".to_vec()],
        Charset::Iso2022Jp => vec![b"Japanese (\x1b$BF|K\\8l\x1b(B)".to_vec()],
        Charset::Iso2022Kr => vec![b"\x1b$)C\x0eGQ19\x0fA".to_vec()],
        Charset::Ctext | Charset::Iso2022 => vec![
            b"\x1b$)B\x1b*I\x1b$+D\xa4\xb3\x8e\xba\x8f\"/A".to_vec(),
            b"\x1b%G\xCE\xBA\xE1\xBD\xB9\x1b%@A".to_vec(),
            b"\x1b%/1\x80\x8eiso8859-15\x02xyz\x1b(BA".to_vec(),
        ],
        // single-byte charsets: every byte value once
        _ => vec![(0u8..=255).collect()],
    }
}

#[test]
fn test_partitioning_invariance() {
    for cs in Charset::all() {
        for stream in sample_streams(cs) {
            let whole = decode_all(cs, &stream);

            // one byte at a time
            let bytes: Vec<&[u8]> = stream.chunks(1).collect();
            assert_eq!(decode_split(cs, &bytes), whole, "{:?} bytewise", cs);

            // every two-way split
            for k in 0..=stream.len() {
                let parts = [&stream[..k], &stream[k..]];
                assert_eq!(decode_split(cs, &parts), whole, "{:?} split at {}", cs, k);
            }

            // a few uneven chunkings
            for chunk in [3usize, 5, 7] {
                let parts: Vec<&[u8]> = stream.chunks(chunk).collect();
                assert_eq!(decode_split(cs, &parts), whole, "{:?} chunks of {}", cs, chunk);
            }
        }
    }
}

#[test]
fn test_decoding_is_total() {
    let soup: Vec<u8> = (0u8..=255).chain((0u8..=255).rev()).collect();
    for cs in Charset::all() {
        let mut state = CharsetState::new();
        let mut out = [0u32; 64];
        let mut rest: &[u8] = &soup;
        while !rest.is_empty() {
            let r = to_unicode(cs, rest, &mut state, &mut out, None);
            assert!(r.consumed > 0, "{:?} made no progress", cs);
            rest = &rest[r.consumed..];
        }
    }
}

/// The ISO 2022 family necessarily reads raw ESC/SO/SI bytes as shift
/// machinery rather than as characters, so those three scalars cannot
/// survive a byte-level round trip there.
fn is_shift_byte_in(cs: Charset, ch: u32) -> bool {
    matches!(
        cs,
        Charset::Iso2022Jp | Charset::Iso2022Kr | Charset::Ctext | Charset::Iso2022
    ) && matches!(ch, 0x0E | 0x0F | 0x1B)
}

#[test]
fn test_ascii_round_trips() {
    // Charsets that redefine some ASCII positions: those scalars simply
    // fail to encode, which the conditional check below covers.
    for cs in Charset::all().filter(|cs| cs.contains_ascii()) {
        for ch in 0u32..0x80 {
            if is_shift_byte_in(cs, ch) {
                continue;
            }
            if let Some(bytes) = encode_all(cs, &[ch]) {
                assert_eq!(decode_all(cs, &bytes), [ch], "{:?} U+{:04X}", cs, ch);
            }
        }
    }

    // The mainstream charsets must accept all of ASCII outright.
    for cs in [
        Charset::Ascii,
        Charset::Iso8859_1,
        Charset::Cp1252,
        Charset::Koi8R,
        Charset::MacRoman,
        Charset::Utf8,
        Charset::Utf16,
        Charset::EucJp,
        Charset::EucCn,
        Charset::EucKr,
        Charset::EucTw,
        Charset::Big5,
        Charset::Cp949,
        Charset::Iso2022Jp,
        Charset::Iso2022Kr,
        Charset::Ctext,
        Charset::Iso2022,
    ] {
        for ch in 0u32..0x80 {
            if is_shift_byte_in(cs, ch) {
                continue;
            }
            let bytes = encode_all(cs, &[ch])
                .unwrap_or_else(|| panic!("{:?} cannot encode U+{:04X}", cs, ch));
            assert_eq!(decode_all(cs, &bytes), [ch], "{:?} U+{:04X}", cs, ch);
        }
    }
}

#[test]
fn test_representable_scalars_round_trip() {
    let samples = [
        0x41u32, 0x7E, 0xA0, 0xE9, 0x2019, 0x20AC, 0x0430, 0x0E01, 0x1E82, 0x2501, 0x3042,
        0x4E00, 0x5143, 0x554A, 0x65E5, 0xAC00, 0xAC02, 0xD55C, 0xFF61, 0x1F4A9,
    ];
    for cs in Charset::all() {
        for &ch in &samples {
            if let Some(bytes) = encode_all(cs, &[ch]) {
                assert_eq!(decode_all(cs, &bytes), [ch], "{:?} U+{:04X}", cs, ch);
            }
        }
    }
}

#[test]
fn test_finish_resets_encoders() {
    let per_charset_scalar = |cs: Charset| -> u32 {
        match cs {
            Charset::EucCn | Charset::Hz => 0x554A,
            Charset::EucKr | Charset::Cp949 | Charset::Iso2022Kr => 0xD55C,
            Charset::EucTw | Charset::Big5 => 0x5143,
            Charset::EucJp | Charset::ShiftJis | Charset::Iso2022Jp => 0x65E5,
            _ => 0x41,
        }
    };
    for cs in Charset::all() {
        let ch = per_charset_scalar(cs);
        let fresh = encode_all(cs, &[ch]).unwrap();

        let mut state = CharsetState::new();
        let mut out = Vec::new();
        assert!(cs.encode_char(ch, &mut state, &mut |b| out.push(b)));
        cs.finish_encode(&mut state, &mut |b| out.push(b));
        assert_eq!(state, CharsetState::new(), "{:?} state after finish", cs);

        let mut again = Vec::new();
        assert!(cs.encode_char(ch, &mut state, &mut |b| again.push(b)));
        cs.finish_encode(&mut state, &mut |b| again.push(b));
        assert_eq!(again, fresh, "{:?} second piece differs", cs);
    }
}

#[test]
fn test_unrepresentable_is_clean() {
    // an encoder that fails must not have emitted anything
    for cs in Charset::all() {
        let mut state = CharsetState::new();
        let mut out = Vec::new();
        // a scalar value no charset here carries
        let ok = cs.encode_char(0x10FF00, &mut state, &mut |b| out.push(b));
        // the full ISO 2022 profile reaches any scalar through DOCS UTF-8
        if cs == Charset::Utf8 || cs == Charset::Utf16 || cs == Charset::Utf16Be
            || cs == Charset::Utf16Le || cs == Charset::Utf7 || cs == Charset::Iso2022
        {
            assert!(ok, "{:?} should carry any scalar", cs);
        } else {
            assert!(!ok, "{:?} claims to carry U+10FF00", cs);
            assert!(out.is_empty(), "{:?} emitted before failing", cs);
        }
    }
}

#[test]
fn test_state_snapshot_resumes() {
    // a state copied mid-character carries the partial character with it
    let input = b"\x1b$BF|K\\8l\x1b(B";
    let cs = Charset::Iso2022Jp;
    let mut state = CharsetState::new();
    let mut head = Vec::new();
    for &b in &input[..5] {
        cs.decode_byte(b, &mut state, &mut |u| head.push(u));
    }
    let snapshot = state;

    let mut tail_a = Vec::new();
    let mut state_a = snapshot;
    for &b in &input[5..] {
        cs.decode_byte(b, &mut state_a, &mut |u| tail_a.push(u));
    }
    let mut tail_b = Vec::new();
    let mut state_b = snapshot;
    for &b in &input[5..] {
        cs.decode_byte(b, &mut state_b, &mut |u| tail_b.push(u));
    }
    assert_eq!(tail_a, tail_b);
    let mut all = head;
    all.extend(&tail_a);
    assert_eq!(all, [0x65E5, 0x672C, 0x8A9E]);
}
