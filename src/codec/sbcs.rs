// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! The common codec for single-byte character sets.
//!
//! Every SBCS is driven by one [`SbcsTable`]: decoding is a single lookup in
//! the 256-entry forward table, encoding a binary search on the inverse
//! table (the defined byte values sorted by the scalar they translate to).
//! No state is used in either direction.

use crate::index::singlebyte::SbcsTable;
use crate::types::{EmitByte, EmitWide, ERROR};

pub(crate) fn read(table: &SbcsTable, b: u8, emit: &mut EmitWide) {
    emit(table.forward(b) as u32);
}

pub(crate) fn write(table: &SbcsTable, ch: u32, emit: &mut EmitByte) -> bool {
    match table.backward(ch) {
        Some(b) => {
            emit(b);
            true
        }
        None => false,
    }
}

// The ERROR mark is a u16, so an undefined position decodes to it with no
// special casing; this is worth pinning down.
const _: () = assert!(ERROR == 0xFFFF);

#[cfg(test)]
mod tests {
    use crate::charset::Charset;
    use crate::testutils::{decode_to_vec, encode_to_vec};

    #[test]
    fn test_decode() {
        assert_eq!(
            decode_to_vec(Charset::Iso8859_1, &[0x63, 0x61, 0x66, 0xE9]),
            [0x63, 0x61, 0x66, 0xE9]
        );
        assert_eq!(
            decode_to_vec(Charset::Iso8859_15, &[0xA4]),
            [0x20AC] // the euro replaces the currency sign in Latin-9
        );
        assert_eq!(decode_to_vec(Charset::Koi8R, &[0xC1]), [0x0430]);
        assert_eq!(decode_to_vec(Charset::JisX0201, &[0x5C]), [0xA5]);
        assert_eq!(decode_to_vec(Charset::JisX0201, &[0xB1]), [0xFF71]);
    }

    #[test]
    fn test_decode_undefined_position() {
        assert_eq!(decode_to_vec(Charset::Ascii, &[0x80]), [0xFFFF]);
        assert_eq!(decode_to_vec(Charset::Cp1252, &[0x81]), [0xFFFF]);
        assert_eq!(decode_to_vec(Charset::JisX0201, &[0xE0]), [0xFFFF]);
    }

    #[test]
    fn test_encode() {
        assert_eq!(
            encode_to_vec(Charset::Iso8859_1, &[0x63, 0xE9]),
            Some(vec![0x63, 0xE9])
        );
        assert_eq!(encode_to_vec(Charset::Iso8859_15, &[0x20AC]), Some(vec![0xA4]));
        assert_eq!(encode_to_vec(Charset::Cp1252, &[0x20AC]), Some(vec![0x80]));
        assert_eq!(encode_to_vec(Charset::JisX0201, &[0xA5]), Some(vec![0x5C]));
    }

    #[test]
    fn test_encode_unrepresentable() {
        assert_eq!(encode_to_vec(Charset::Ascii, &[0xE9]), None);
        assert_eq!(encode_to_vec(Charset::Iso8859_1, &[0x20AC]), None);
        assert_eq!(encode_to_vec(Charset::Iso8859_1, &[0x1F600]), None);
        assert_eq!(encode_to_vec(Charset::Iso8859_1, &[0xFFFF]), None);
    }
}
