// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! The static codec descriptor for every compiled-in charset.
//!
//! Identifiers absent from this table (a few Mac sets without a usable
//! mapping source) simply do not `exists()`; everything else here lives in
//! read-only memory for the life of the process.

use crate::charset::Charset;
use crate::codec::{euc, iso2022, iso2022_subset, utf_16};
use crate::index::singlebyte;
use crate::types::{CodecKind, CodecSpec};

macro_rules! sbcs_spec {
    ($name:ident, $charset:ident, $table:ident) => {
        pub(crate) static $name: CodecSpec = CodecSpec {
            charset: Charset::$charset,
            kind: CodecKind::Sbcs(&singlebyte::$table::TABLE),
        };
    };
}

sbcs_spec!(ASCII, Ascii, ascii);
sbcs_spec!(BS4730, Bs4730, bs4730);
sbcs_spec!(ISO_8859_1, Iso8859_1, iso_8859_1);
sbcs_spec!(ISO_8859_1_X11, Iso8859_1X11, iso_8859_1_x11);
sbcs_spec!(ISO_8859_2, Iso8859_2, iso_8859_2);
sbcs_spec!(ISO_8859_3, Iso8859_3, iso_8859_3);
sbcs_spec!(ISO_8859_4, Iso8859_4, iso_8859_4);
sbcs_spec!(ISO_8859_5, Iso8859_5, iso_8859_5);
sbcs_spec!(ISO_8859_6, Iso8859_6, iso_8859_6);
sbcs_spec!(ISO_8859_7, Iso8859_7, iso_8859_7);
sbcs_spec!(ISO_8859_8, Iso8859_8, iso_8859_8);
sbcs_spec!(ISO_8859_9, Iso8859_9, iso_8859_9);
sbcs_spec!(ISO_8859_10, Iso8859_10, iso_8859_10);
sbcs_spec!(ISO_8859_11, Iso8859_11, iso_8859_11);
sbcs_spec!(ISO_8859_13, Iso8859_13, iso_8859_13);
sbcs_spec!(ISO_8859_14, Iso8859_14, iso_8859_14);
sbcs_spec!(ISO_8859_15, Iso8859_15, iso_8859_15);
sbcs_spec!(ISO_8859_16, Iso8859_16, iso_8859_16);
sbcs_spec!(CP437, Cp437, cp437);
sbcs_spec!(CP850, Cp850, cp850);
sbcs_spec!(CP866, Cp866, cp866);
sbcs_spec!(CP1250, Cp1250, cp1250);
sbcs_spec!(CP1251, Cp1251, cp1251);
sbcs_spec!(CP1252, Cp1252, cp1252);
sbcs_spec!(CP1253, Cp1253, cp1253);
sbcs_spec!(CP1254, Cp1254, cp1254);
sbcs_spec!(CP1255, Cp1255, cp1255);
sbcs_spec!(CP1256, Cp1256, cp1256);
sbcs_spec!(CP1257, Cp1257, cp1257);
sbcs_spec!(CP1258, Cp1258, cp1258);
sbcs_spec!(KOI8_R, Koi8R, koi8_r);
sbcs_spec!(KOI8_U, Koi8U, koi8_u);
sbcs_spec!(KOI8_RU, Koi8Ru, koi8_ru);
sbcs_spec!(JISX0201, JisX0201, jisx0201);
sbcs_spec!(MAC_ROMAN, MacRoman, mac_roman);
sbcs_spec!(MAC_TURKISH, MacTurkish, mac_turkish);
sbcs_spec!(MAC_CROATIAN, MacCroatian, mac_croatian);
sbcs_spec!(MAC_ICELAND, MacIceland, mac_iceland);
sbcs_spec!(MAC_ROMANIAN, MacRomanian, mac_romanian);
sbcs_spec!(MAC_GREEK, MacGreek, mac_greek);
sbcs_spec!(MAC_CYRILLIC, MacCyrillic, mac_cyrillic);
sbcs_spec!(MAC_CENTEURO, MacCentEuro, mac_centeuro);
sbcs_spec!(MAC_UKRAINE, MacUkraine, mac_ukraine);
sbcs_spec!(MAC_ROMAN_OLD, MacRomanOld, mac_roman_old);
sbcs_spec!(MAC_CROATIAN_OLD, MacCroatianOld, mac_croatian_old);
sbcs_spec!(MAC_ICELAND_OLD, MacIcelandOld, mac_iceland_old);
sbcs_spec!(MAC_ROMANIAN_OLD, MacRomanianOld, mac_romanian_old);
sbcs_spec!(MAC_GREEK_OLD, MacGreekOld, mac_greek_old);
sbcs_spec!(MAC_CYRILLIC_OLD, MacCyrillicOld, mac_cyrillic_old);
sbcs_spec!(VISCII, Viscii, viscii);
sbcs_spec!(HP_ROMAN8, HpRoman8, hp_roman8);
sbcs_spec!(DEC_MCS, DecMcs, dec_mcs);
sbcs_spec!(DEC_GRAPHICS, DecGraphics, dec_graphics);
sbcs_spec!(PDF, Pdf, pdf_doc);
sbcs_spec!(PSSTD, PsStd, ps_std);

pub(crate) static UTF8: CodecSpec = CodecSpec {
    charset: Charset::Utf8,
    kind: CodecKind::Utf8,
};

pub(crate) static UTF7: CodecSpec = CodecSpec {
    charset: Charset::Utf7,
    kind: CodecKind::Utf7 { conservative: false },
};

pub(crate) static UTF7_CONSERVATIVE: CodecSpec = CodecSpec {
    charset: Charset::Utf7Conservative,
    kind: CodecKind::Utf7 { conservative: true },
};

pub(crate) static UTF16: CodecSpec = CodecSpec {
    charset: Charset::Utf16,
    kind: CodecKind::Utf16(&utf_16::VARIABLE),
};

pub(crate) static UTF16BE: CodecSpec = CodecSpec {
    charset: Charset::Utf16Be,
    kind: CodecKind::Utf16(&utf_16::BIG_ENDIAN),
};

pub(crate) static UTF16LE: CodecSpec = CodecSpec {
    charset: Charset::Utf16Le,
    kind: CodecKind::Utf16(&utf_16::LITTLE_ENDIAN),
};

pub(crate) static EUC_CN: CodecSpec = CodecSpec {
    charset: Charset::EucCn,
    kind: CodecKind::Euc(&euc::EUC_CN),
};

pub(crate) static EUC_KR: CodecSpec = CodecSpec {
    charset: Charset::EucKr,
    kind: CodecKind::Euc(&euc::EUC_KR),
};

pub(crate) static EUC_JP: CodecSpec = CodecSpec {
    charset: Charset::EucJp,
    kind: CodecKind::Euc(&euc::EUC_JP),
};

pub(crate) static EUC_TW: CodecSpec = CodecSpec {
    charset: Charset::EucTw,
    kind: CodecKind::Euc(&euc::EUC_TW),
};

pub(crate) static ISO2022_JP: CodecSpec = CodecSpec {
    charset: Charset::Iso2022Jp,
    kind: CodecKind::Iso2022Subset(&iso2022_subset::ISO2022_JP),
};

pub(crate) static ISO2022_KR: CodecSpec = CodecSpec {
    charset: Charset::Iso2022Kr,
    kind: CodecKind::Iso2022Subset(&iso2022_subset::ISO2022_KR),
};

pub(crate) static BIG5: CodecSpec = CodecSpec {
    charset: Charset::Big5,
    kind: CodecKind::Big5,
};

pub(crate) static SHIFT_JIS: CodecSpec = CodecSpec {
    charset: Charset::ShiftJis,
    kind: CodecKind::ShiftJis,
};

pub(crate) static HZ: CodecSpec = CodecSpec {
    charset: Charset::Hz,
    kind: CodecKind::Hz,
};

pub(crate) static CP949: CodecSpec = CodecSpec {
    charset: Charset::Cp949,
    kind: CodecKind::Cp949,
};

pub(crate) static CTEXT: CodecSpec = CodecSpec {
    charset: Charset::Ctext,
    kind: CodecKind::Iso2022(&iso2022::CTEXT),
};

pub(crate) static ISO2022: CodecSpec = CodecSpec {
    charset: Charset::Iso2022,
    kind: CodecKind::Iso2022(&iso2022::ISO2022_ALL),
};

static SPECS: &[&CodecSpec] = &[
    &ASCII,
    &BS4730,
    &ISO_8859_1,
    &ISO_8859_1_X11,
    &ISO_8859_2,
    &ISO_8859_3,
    &ISO_8859_4,
    &ISO_8859_5,
    &ISO_8859_6,
    &ISO_8859_7,
    &ISO_8859_8,
    &ISO_8859_9,
    &ISO_8859_10,
    &ISO_8859_11,
    &ISO_8859_13,
    &ISO_8859_14,
    &ISO_8859_15,
    &ISO_8859_16,
    &CP437,
    &CP850,
    &CP866,
    &CP1250,
    &CP1251,
    &CP1252,
    &CP1253,
    &CP1254,
    &CP1255,
    &CP1256,
    &CP1257,
    &CP1258,
    &KOI8_R,
    &KOI8_U,
    &KOI8_RU,
    &JISX0201,
    &MAC_ROMAN,
    &MAC_TURKISH,
    &MAC_CROATIAN,
    &MAC_ICELAND,
    &MAC_ROMANIAN,
    &MAC_GREEK,
    &MAC_CYRILLIC,
    &MAC_CENTEURO,
    &MAC_UKRAINE,
    &MAC_ROMAN_OLD,
    &MAC_CROATIAN_OLD,
    &MAC_ICELAND_OLD,
    &MAC_ROMANIAN_OLD,
    &MAC_GREEK_OLD,
    &MAC_CYRILLIC_OLD,
    &VISCII,
    &HP_ROMAN8,
    &DEC_MCS,
    &DEC_GRAPHICS,
    &PDF,
    &PSSTD,
    &UTF8,
    &UTF7,
    &UTF7_CONSERVATIVE,
    &UTF16,
    &UTF16BE,
    &UTF16LE,
    &EUC_CN,
    &EUC_KR,
    &EUC_JP,
    &EUC_TW,
    &ISO2022_JP,
    &ISO2022_KR,
    &BIG5,
    &SHIFT_JIS,
    &HZ,
    &CP949,
    &CTEXT,
    &ISO2022,
];

pub(crate) fn find_spec(charset: Charset) -> Option<&'static CodecSpec> {
    SPECS.iter().find(|spec| spec.charset == charset).copied()
}

#[cfg(test)]
mod tests {
    use super::{find_spec, SPECS};
    use crate::charset::Charset;

    #[test]
    fn test_specs_are_consistent() {
        for (i, spec) in SPECS.iter().enumerate() {
            for other in &SPECS[i + 1..] {
                assert!(spec.charset != other.charset, "{:?} twice", spec.charset);
            }
        }
    }

    #[test]
    fn test_optional_charsets() {
        assert!(find_spec(Charset::Utf8).is_some());
        assert!(find_spec(Charset::Ctext).is_some());
        // no mapping source for these in this build
        assert!(find_spec(Charset::MacSymbol).is_none());
        assert!(find_spec(Charset::MacDingbats).is_none());
        assert!(find_spec(Charset::MacThai).is_none());
        assert!(find_spec(Charset::MacVt100).is_none());
        assert!(find_spec(Charset::MacVt100Old).is_none());
    }
}
