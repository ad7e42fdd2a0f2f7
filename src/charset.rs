// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! The charset identifier enumeration and the per-charset entry points.

use crate::all;
use crate::label;
use crate::types::{CharsetState, EmitByte, EmitWide, ERROR};

/// Every multibyte or single-byte character set known to this library.
///
/// An identifier is not a guarantee that the codec is compiled in: a few
/// tables are optional, so callers enumerating or receiving identifiers
/// from name lookup should consult [`Charset::exists`]. There is no
/// "unknown" variant; operations that can fail to name a charset return
/// `Option<Charset>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Charset {
    Ascii,
    Bs4730,
    Iso8859_1,
    /// X font encoding: ISO 8859-1 with the VT100 glyphs in the C0 area.
    Iso8859_1X11,
    Iso8859_2,
    Iso8859_3,
    Iso8859_4,
    Iso8859_5,
    Iso8859_6,
    Iso8859_7,
    Iso8859_8,
    Iso8859_9,
    Iso8859_10,
    Iso8859_11,
    Iso8859_13,
    Iso8859_14,
    Iso8859_15,
    Iso8859_16,
    Cp437,
    Cp850,
    Cp866,
    Cp1250,
    Cp1251,
    Cp1252,
    Cp1253,
    Cp1254,
    Cp1255,
    Cp1256,
    Cp1257,
    Cp1258,
    Koi8R,
    Koi8U,
    Koi8Ru,
    JisX0201,
    MacRoman,
    MacTurkish,
    MacCroatian,
    MacIceland,
    MacRomanian,
    MacGreek,
    MacCyrillic,
    MacThai,
    MacCentEuro,
    MacSymbol,
    MacDingbats,
    MacRomanOld,
    MacCroatianOld,
    MacIcelandOld,
    MacRomanianOld,
    MacGreekOld,
    MacCyrillicOld,
    MacUkraine,
    MacVt100,
    MacVt100Old,
    Viscii,
    HpRoman8,
    DecMcs,
    DecGraphics,
    Utf8,
    Utf7,
    Utf7Conservative,
    Utf16,
    Utf16Be,
    Utf16Le,
    EucJp,
    EucCn,
    EucKr,
    EucTw,
    Iso2022Jp,
    Iso2022Kr,
    Big5,
    ShiftJis,
    Hz,
    Cp949,
    /// PDFDocEncoding.
    Pdf,
    /// Adobe PostScript StandardEncoding.
    PsStd,
    /// X11 COMPOUND_TEXT.
    Ctext,
    /// Full ISO/IEC 2022 with every designation this library knows.
    Iso2022,
}

impl Charset {
    /// True when this build carries a codec for the identifier.
    pub fn exists(self) -> bool {
        all::find_spec(self).is_some()
    }

    /// Upgrades a charset to a superset it is habitually confused with.
    ///
    /// People whose software reports ASCII or ISO 8859-1 frequently turn
    /// out to be producing CP1252 quote characters, so when parsing
    /// incoming text it is prudent to read those labels as CP1252; being a
    /// superset of both, this mis-parses no genuinely correct text. The
    /// same applies to ISO 8859-4 under CP1254 and to EUC-KR under CP949.
    pub fn upgrade(self) -> Charset {
        match self {
            Charset::Ascii | Charset::Iso8859_1 => Charset::Cp1252,
            Charset::Iso8859_4 => Charset::Cp1254,
            Charset::EucKr => Charset::Cp949,
            other => other,
        }
    }

    /// True when the charset is a plausible superset of ASCII, i.e. false
    /// for the 7-bit stateful formats (HZ and both UTF-7 variants).
    pub fn contains_ascii(self) -> bool {
        !matches!(
            self,
            Charset::Hz | Charset::Utf7 | Charset::Utf7Conservative
        )
    }

    /// Enumerates the advertised charsets, in the local registry's order.
    /// Alias-only identifiers and charsets missing from this build are
    /// skipped.
    pub fn all() -> impl Iterator<Item = Charset> {
        label::advertised().filter(|cs| cs.exists())
    }

    /// Decodes one byte of a stream in this charset, pushing zero or more
    /// scalar values. Malformed input emits U+FFFF in place; an identifier
    /// without a compiled-in codec decodes every byte to U+FFFF.
    pub fn decode_byte(self, b: u8, state: &mut CharsetState, emit: &mut EmitWide) {
        match all::find_spec(self) {
            Some(spec) => spec.read(b, state, emit),
            None => emit(ERROR),
        }
    }

    /// Encodes one scalar value into this charset. Returns false, with
    /// nothing emitted, when the scalar is not representable (or the codec
    /// is not compiled in).
    pub fn encode_char(self, ch: u32, state: &mut CharsetState, emit: &mut EmitByte) -> bool {
        match all::find_spec(self) {
            Some(spec) => spec.write(ch, state, emit),
            None => false,
        }
    }

    /// Finalises an encoded stream: emits whatever bytes are needed to
    /// return the encoding to its default mode (HZ closes `~}`, UTF-7
    /// flushes pending base64 bits, ISO 2022 re-designates its defaults)
    /// and resets the state, so the next scalar encodes as if fresh.
    pub fn finish_encode(self, state: &mut CharsetState, emit: &mut EmitByte) {
        if let Some(spec) = all::find_spec(self) {
            spec.finish(state, emit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Charset;

    #[test]
    fn test_upgrade() {
        assert_eq!(Charset::Ascii.upgrade(), Charset::Cp1252);
        assert_eq!(Charset::Iso8859_1.upgrade(), Charset::Cp1252);
        assert_eq!(Charset::Iso8859_4.upgrade(), Charset::Cp1254);
        assert_eq!(Charset::EucKr.upgrade(), Charset::Cp949);
        assert_eq!(Charset::Utf8.upgrade(), Charset::Utf8);
    }

    #[test]
    fn test_contains_ascii() {
        assert!(Charset::Ascii.contains_ascii());
        assert!(Charset::Big5.contains_ascii());
        assert!(Charset::Utf8.contains_ascii());
        assert!(!Charset::Hz.contains_ascii());
        assert!(!Charset::Utf7.contains_ascii());
        assert!(!Charset::Utf7Conservative.contains_ascii());
    }

    #[test]
    fn test_enumeration_is_usable() {
        for cs in Charset::all() {
            assert!(cs.exists(), "{:?} advertised but not compiled in", cs);
        }
        assert!(Charset::all().any(|cs| cs == Charset::Utf8));
        assert!(Charset::all().any(|cs| cs == Charset::Iso2022Jp));
        // alias-only identifiers stay out of the enumeration
        assert!(Charset::all().all(|cs| cs != Charset::Utf7Conservative));
    }
}
