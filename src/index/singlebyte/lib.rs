// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! Single-byte translation tables for
//! [rust-charsets](https://github.com/rust-charsets/rust-charsets).
//!
//! Each table module is generated by `scripts/gen_index.py` and carries one
//! [`SbcsTable`]: a 256-entry forward mapping to the BMP (0xFFFF marks an
//! undefined position) and the list of defined byte values sorted by the
//! scalar they map to, which is what the encoder binary-searches.

/// A single-byte character set translation table.
pub struct SbcsTable {
    /// Byte value to scalar value; 0xFFFF for undefined positions.
    pub forward: [u16; 256],
    /// The defined byte values, sorted by their forward translation.
    pub backward: &'static [u8],
}

impl SbcsTable {
    /// Decodes one byte. Returns 0xFFFF for undefined positions.
    #[inline]
    pub fn forward(&self, b: u8) -> u16 {
        self.forward[b as usize]
    }

    /// Finds the byte encoding a scalar value, if any.
    pub fn backward(&self, code: u32) -> Option<u8> {
        if code > 0xFFFF {
            return None;
        }
        self.backward
            .binary_search_by_key(&(code as u16), |&b| self.forward[b as usize])
            .ok()
            .map(|i| self.backward[i])
    }
}

pub mod ascii;
pub mod bs4730;
pub mod iso_8859_1;
pub mod iso_8859_1_x11;
pub mod iso_8859_2;
pub mod iso_8859_3;
pub mod iso_8859_4;
pub mod iso_8859_5;
pub mod iso_8859_6;
pub mod iso_8859_7;
pub mod iso_8859_8;
pub mod iso_8859_9;
pub mod iso_8859_10;
pub mod iso_8859_11;
pub mod iso_8859_13;
pub mod iso_8859_14;
pub mod iso_8859_15;
pub mod iso_8859_16;
pub mod cp437;
pub mod cp850;
pub mod cp866;
pub mod cp1250;
pub mod cp1251;
pub mod cp1252;
pub mod cp1253;
pub mod cp1254;
pub mod cp1255;
pub mod cp1256;
pub mod cp1257;
pub mod cp1258;
pub mod koi8_r;
pub mod koi8_ru;
pub mod koi8_u;
pub mod jisx0201;
pub mod mac_centeuro;
pub mod mac_croatian;
pub mod mac_croatian_old;
pub mod mac_cyrillic;
pub mod mac_cyrillic_old;
pub mod mac_greek;
pub mod mac_greek_old;
pub mod mac_iceland;
pub mod mac_iceland_old;
pub mod mac_roman;
pub mod mac_roman_old;
pub mod mac_romanian;
pub mod mac_romanian_old;
pub mod mac_turkish;
pub mod mac_ukraine;
pub mod viscii;
pub mod hp_roman8;
pub mod dec_mcs;
pub mod dec_graphics;
pub mod pdf_doc;
pub mod ps_std;

#[cfg(test)]
#[macro_use]
#[path = "../index_tests.rs"]
mod index_tests;

#[cfg(test)]
mod tests {
    sbcs_consistency_test!(ascii, crate::ascii::TABLE);
    sbcs_consistency_test!(bs4730, crate::bs4730::TABLE);
    sbcs_consistency_test!(iso_8859_1, crate::iso_8859_1::TABLE);
    sbcs_consistency_test!(iso_8859_1_x11, crate::iso_8859_1_x11::TABLE);
    sbcs_consistency_test!(iso_8859_2, crate::iso_8859_2::TABLE);
    sbcs_consistency_test!(iso_8859_3, crate::iso_8859_3::TABLE);
    sbcs_consistency_test!(iso_8859_4, crate::iso_8859_4::TABLE);
    sbcs_consistency_test!(iso_8859_5, crate::iso_8859_5::TABLE);
    sbcs_consistency_test!(iso_8859_6, crate::iso_8859_6::TABLE);
    sbcs_consistency_test!(iso_8859_7, crate::iso_8859_7::TABLE);
    sbcs_consistency_test!(iso_8859_8, crate::iso_8859_8::TABLE);
    sbcs_consistency_test!(iso_8859_9, crate::iso_8859_9::TABLE);
    sbcs_consistency_test!(iso_8859_10, crate::iso_8859_10::TABLE);
    sbcs_consistency_test!(iso_8859_11, crate::iso_8859_11::TABLE);
    sbcs_consistency_test!(iso_8859_13, crate::iso_8859_13::TABLE);
    sbcs_consistency_test!(iso_8859_14, crate::iso_8859_14::TABLE);
    sbcs_consistency_test!(iso_8859_15, crate::iso_8859_15::TABLE);
    sbcs_consistency_test!(iso_8859_16, crate::iso_8859_16::TABLE);
    sbcs_consistency_test!(cp437, crate::cp437::TABLE);
    sbcs_consistency_test!(cp850, crate::cp850::TABLE);
    sbcs_consistency_test!(cp866, crate::cp866::TABLE);
    sbcs_consistency_test!(cp1250, crate::cp1250::TABLE);
    sbcs_consistency_test!(cp1251, crate::cp1251::TABLE);
    sbcs_consistency_test!(cp1252, crate::cp1252::TABLE);
    sbcs_consistency_test!(cp1253, crate::cp1253::TABLE);
    sbcs_consistency_test!(cp1254, crate::cp1254::TABLE);
    sbcs_consistency_test!(cp1255, crate::cp1255::TABLE);
    sbcs_consistency_test!(cp1256, crate::cp1256::TABLE);
    sbcs_consistency_test!(cp1257, crate::cp1257::TABLE);
    sbcs_consistency_test!(cp1258, crate::cp1258::TABLE);
    sbcs_consistency_test!(koi8_r, crate::koi8_r::TABLE);
    sbcs_consistency_test!(koi8_ru, crate::koi8_ru::TABLE);
    sbcs_consistency_test!(koi8_u, crate::koi8_u::TABLE);
    sbcs_consistency_test!(jisx0201, crate::jisx0201::TABLE);
    sbcs_consistency_test!(mac_centeuro, crate::mac_centeuro::TABLE);
    sbcs_consistency_test!(mac_croatian, crate::mac_croatian::TABLE);
    sbcs_consistency_test!(mac_croatian_old, crate::mac_croatian_old::TABLE);
    sbcs_consistency_test!(mac_cyrillic, crate::mac_cyrillic::TABLE);
    sbcs_consistency_test!(mac_cyrillic_old, crate::mac_cyrillic_old::TABLE);
    sbcs_consistency_test!(mac_greek, crate::mac_greek::TABLE);
    sbcs_consistency_test!(mac_greek_old, crate::mac_greek_old::TABLE);
    sbcs_consistency_test!(mac_iceland, crate::mac_iceland::TABLE);
    sbcs_consistency_test!(mac_iceland_old, crate::mac_iceland_old::TABLE);
    sbcs_consistency_test!(mac_roman, crate::mac_roman::TABLE);
    sbcs_consistency_test!(mac_roman_old, crate::mac_roman_old::TABLE);
    sbcs_consistency_test!(mac_romanian, crate::mac_romanian::TABLE);
    sbcs_consistency_test!(mac_romanian_old, crate::mac_romanian_old::TABLE);
    sbcs_consistency_test!(mac_turkish, crate::mac_turkish::TABLE);
    sbcs_consistency_test!(mac_ukraine, crate::mac_ukraine::TABLE);
    sbcs_consistency_test!(viscii, crate::viscii::TABLE);
    sbcs_consistency_test!(hp_roman8, crate::hp_roman8::TABLE);
    sbcs_consistency_test!(dec_mcs, crate::dec_mcs::TABLE);
    sbcs_consistency_test!(dec_graphics, crate::dec_graphics::TABLE);
    sbcs_consistency_test!(pdf_doc, crate::pdf_doc::TABLE);
    sbcs_consistency_test!(ps_std, crate::ps_std::TABLE);

    #[test]
    fn ascii_is_identity() {
        for b in 0..0x80u16 {
            assert_eq!(crate::ascii::TABLE.forward(b as u8), b);
        }
        for b in 0x80..0x100usize {
            assert_eq!(crate::ascii::TABLE.forward[b], 0xFFFF);
        }
    }
}
