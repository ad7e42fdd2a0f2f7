// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! Charset name registries: bidirectional, case-insensitive translation
//! between [`Charset`] identifiers and the names used by four naming
//! communities (this library's own legible names, MIME, X11 font
//! encodings, and GNU Emacs coding-system symbols), plus the Mac OS
//! script/region lookup.
//!
//! Where several names map to one identifier, the first listed is the
//! canonical one returned by [`canonical_name`]. The local table also
//! carries other ways people plausibly refer to a charset (Win1252 next
//! to CP1252, say), and local lookup tries the other registries first, to
//! maximise the number of ways a supported charset can be selected.

use crate::charset::Charset;

/// The naming communities understood by [`lookup`] and [`canonical_name`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Namespace {
    /// This library's own names, plus common informal aliases.
    Local,
    /// MIME names, mostly from the IANA character set registry.
    Mime,
    /// X11 font encoding names.
    X11,
    /// GNU Emacs coding system symbols.
    Emacs,
}

struct LocalEntry {
    name: &'static str,
    charset: Charset,
    /// Enumeration skips alias entries and a few duplicates.
    in_enum: bool,
}

const fn e(name: &'static str, charset: Charset, in_enum: bool) -> LocalEntry {
    LocalEntry {
        name,
        charset,
        in_enum,
    }
}

static LOCALENCS: &[LocalEntry] = &[
    e("ASCII", Charset::Ascii, true),
    e("BS 4730", Charset::Bs4730, true),
    e("ISO-8859-1", Charset::Iso8859_1, true),
    e("ISO-8859-1 with X11 line drawing", Charset::Iso8859_1X11, false),
    e("ISO-8859-2", Charset::Iso8859_2, true),
    e("ISO-8859-3", Charset::Iso8859_3, true),
    e("ISO-8859-4", Charset::Iso8859_4, true),
    e("ISO-8859-5", Charset::Iso8859_5, true),
    e("ISO-8859-6", Charset::Iso8859_6, true),
    e("ISO-8859-7", Charset::Iso8859_7, true),
    e("ISO-8859-8", Charset::Iso8859_8, true),
    e("ISO-8859-9", Charset::Iso8859_9, true),
    e("ISO-8859-10", Charset::Iso8859_10, true),
    e("ISO-8859-11", Charset::Iso8859_11, true),
    e("ISO-8859-13", Charset::Iso8859_13, true),
    e("ISO-8859-14", Charset::Iso8859_14, true),
    e("ISO-8859-15", Charset::Iso8859_15, true),
    e("ISO-8859-16", Charset::Iso8859_16, true),
    e("CP437", Charset::Cp437, true),
    e("CP850", Charset::Cp850, true),
    e("CP866", Charset::Cp866, true),
    e("CP1250", Charset::Cp1250, true),
    e("Win1250", Charset::Cp1250, false),
    e("CP1251", Charset::Cp1251, true),
    e("Win1251", Charset::Cp1251, false),
    e("CP1252", Charset::Cp1252, true),
    e("Win1252", Charset::Cp1252, false),
    e("CP1253", Charset::Cp1253, true),
    e("Win1253", Charset::Cp1253, false),
    e("CP1254", Charset::Cp1254, true),
    e("Win1254", Charset::Cp1254, false),
    e("CP1255", Charset::Cp1255, true),
    e("Win1255", Charset::Cp1255, false),
    e("CP1256", Charset::Cp1256, true),
    e("Win1256", Charset::Cp1256, false),
    e("CP1257", Charset::Cp1257, true),
    e("Win1257", Charset::Cp1257, false),
    e("CP1258", Charset::Cp1258, true),
    e("Win1258", Charset::Cp1258, false),
    e("KOI8-R", Charset::Koi8R, true),
    e("KOI8-U", Charset::Koi8U, true),
    e("KOI8-RU", Charset::Koi8Ru, true),
    e("JIS X 0201", Charset::JisX0201, true),
    e("JIS-X-0201", Charset::JisX0201, false),
    e("JIS_X_0201", Charset::JisX0201, false),
    e("JISX0201", Charset::JisX0201, false),
    e("Mac Roman", Charset::MacRoman, true),
    e("Mac Turkish", Charset::MacTurkish, true),
    e("Mac Croatian", Charset::MacCroatian, true),
    e("Mac Iceland", Charset::MacIceland, true),
    e("Mac Romanian", Charset::MacRomanian, true),
    e("Mac Greek", Charset::MacGreek, true),
    e("Mac Cyrillic", Charset::MacCyrillic, true),
    e("Mac Thai", Charset::MacThai, true),
    e("Mac Centeuro", Charset::MacCentEuro, true),
    e("Mac Symbol", Charset::MacSymbol, true),
    e("Mac Dingbats", Charset::MacDingbats, true),
    e("Mac Roman (old)", Charset::MacRomanOld, false),
    e("Mac Croatian (old)", Charset::MacCroatianOld, false),
    e("Mac Iceland (old)", Charset::MacIcelandOld, false),
    e("Mac Romanian (old)", Charset::MacRomanianOld, false),
    e("Mac Greek (old)", Charset::MacGreekOld, false),
    e("Mac Cyrillic (old)", Charset::MacCyrillicOld, false),
    e("Mac Ukraine", Charset::MacUkraine, true),
    e("Mac VT100", Charset::MacVt100, true),
    e("Mac VT100 (old)", Charset::MacVt100Old, false),
    e("VISCII", Charset::Viscii, true),
    e("HP ROMAN8", Charset::HpRoman8, true),
    e("DEC MCS", Charset::DecMcs, true),
    e("DEC graphics", Charset::DecGraphics, true),
    e("DEC-graphics", Charset::DecGraphics, false),
    e("DECgraphics", Charset::DecGraphics, false),
    e("UTF-8", Charset::Utf8, true),
    e("UTF-7", Charset::Utf7, true),
    e("UTF-7-conservative", Charset::Utf7Conservative, false),
    e("EUC-CN", Charset::EucCn, true),
    e("EUC-KR", Charset::EucKr, true),
    e("EUC-JP", Charset::EucJp, true),
    e("EUC-TW", Charset::EucTw, true),
    e("ISO-2022-JP", Charset::Iso2022Jp, true),
    e("ISO-2022-KR", Charset::Iso2022Kr, true),
    e("Big5", Charset::Big5, true),
    e("Shift-JIS", Charset::ShiftJis, true),
    e("HZ", Charset::Hz, true),
    e("UTF-16BE", Charset::Utf16Be, true),
    e("UTF-16LE", Charset::Utf16Le, true),
    e("UTF-16", Charset::Utf16, true),
    e("CP949", Charset::Cp949, true),
    e("PDFDocEncoding", Charset::Pdf, true),
    e("StandardEncoding", Charset::PsStd, true),
    e("COMPOUND_TEXT", Charset::Ctext, true),
    e("COMPOUND-TEXT", Charset::Ctext, false),
    e("COMPOUND TEXT", Charset::Ctext, false),
    e("COMPOUNDTEXT", Charset::Ctext, false),
    e("CTEXT", Charset::Ctext, false),
    e("ISO-2022", Charset::Iso2022, true),
    e("ISO2022", Charset::Iso2022, false),
];

// Most of the MIME names are from the IANA character-set registry; a few
// have only ever been seen in the wild in real mail, and are included on
// the same terms as the registry ones.
static MIMEENCS: &[(&str, Charset)] = &[
    ("US-ASCII", Charset::Ascii),
    ("ANSI_X3.4-1968", Charset::Ascii),
    ("iso-ir-6", Charset::Ascii),
    ("ANSI_X3.4-1986", Charset::Ascii),
    ("ISO_646.irv:1991", Charset::Ascii),
    ("ASCII", Charset::Ascii),
    ("ISO646-US", Charset::Ascii),
    ("us", Charset::Ascii),
    ("IBM367", Charset::Ascii),
    ("cp367", Charset::Ascii),
    ("csASCII", Charset::Ascii),
    ("646", Charset::Ascii),
    ("BS_4730", Charset::Bs4730),
    ("iso-ir-4", Charset::Bs4730),
    ("ISO646-GB", Charset::Bs4730),
    ("gb", Charset::Bs4730),
    ("uk", Charset::Bs4730),
    ("csISO4UnitedKingdom", Charset::Bs4730),
    ("ISO-8859-1", Charset::Iso8859_1),
    ("ISO8859-1", Charset::Iso8859_1),
    ("iso-ir-100", Charset::Iso8859_1),
    ("ISO_8859-1", Charset::Iso8859_1),
    ("ISO_8859-1:1987", Charset::Iso8859_1),
    ("latin1", Charset::Iso8859_1),
    ("l1", Charset::Iso8859_1),
    ("IBM819", Charset::Iso8859_1),
    ("CP819", Charset::Iso8859_1),
    ("csISOLatin1", Charset::Iso8859_1),
    ("ISO-8859-2", Charset::Iso8859_2),
    ("ISO8859-2", Charset::Iso8859_2),
    ("ISO_8859-2:1987", Charset::Iso8859_2),
    ("iso-ir-101", Charset::Iso8859_2),
    ("ISO_8859-2", Charset::Iso8859_2),
    ("latin2", Charset::Iso8859_2),
    ("l2", Charset::Iso8859_2),
    ("csISOLatin2", Charset::Iso8859_2),
    ("ISO-8859-3", Charset::Iso8859_3),
    ("ISO8859-3", Charset::Iso8859_3),
    ("ISO_8859-3:1988", Charset::Iso8859_3),
    ("iso-ir-109", Charset::Iso8859_3),
    ("ISO_8859-3", Charset::Iso8859_3),
    ("latin3", Charset::Iso8859_3),
    ("l3", Charset::Iso8859_3),
    ("csISOLatin3", Charset::Iso8859_3),
    ("ISO-8859-4", Charset::Iso8859_4),
    ("ISO8859-4", Charset::Iso8859_4),
    ("ISO_8859-4:1988", Charset::Iso8859_4),
    ("iso-ir-110", Charset::Iso8859_4),
    ("ISO_8859-4", Charset::Iso8859_4),
    ("latin4", Charset::Iso8859_4),
    ("l4", Charset::Iso8859_4),
    ("csISOLatin4", Charset::Iso8859_4),
    ("ISO-8859-5", Charset::Iso8859_5),
    ("ISO8859-5", Charset::Iso8859_5),
    ("ISO_8859-5:1988", Charset::Iso8859_5),
    ("iso-ir-144", Charset::Iso8859_5),
    ("ISO_8859-5", Charset::Iso8859_5),
    ("cyrillic", Charset::Iso8859_5),
    ("csISOLatinCyrillic", Charset::Iso8859_5),
    ("ISO-8859-6", Charset::Iso8859_6),
    ("ISO8859-6", Charset::Iso8859_6),
    ("ISO_8859-6:1987", Charset::Iso8859_6),
    ("iso-ir-127", Charset::Iso8859_6),
    ("ISO_8859-6", Charset::Iso8859_6),
    ("ECMA-114", Charset::Iso8859_6),
    ("ASMO-708", Charset::Iso8859_6),
    ("arabic", Charset::Iso8859_6),
    ("csISOLatinArabic", Charset::Iso8859_6),
    ("ISO-8859-7", Charset::Iso8859_7),
    ("ISO8859-7", Charset::Iso8859_7),
    ("ISO_8859-7:1987", Charset::Iso8859_7),
    ("iso-ir-126", Charset::Iso8859_7),
    ("ISO_8859-7", Charset::Iso8859_7),
    ("ELOT_928", Charset::Iso8859_7),
    ("ECMA-118", Charset::Iso8859_7),
    ("greek", Charset::Iso8859_7),
    ("greek8", Charset::Iso8859_7),
    ("csISOLatinGreek", Charset::Iso8859_7),
    ("ISO-8859-8", Charset::Iso8859_8),
    ("ISO8859-8", Charset::Iso8859_8),
    ("ISO_8859-8:1988", Charset::Iso8859_8),
    ("iso-ir-138", Charset::Iso8859_8),
    ("ISO_8859-8", Charset::Iso8859_8),
    ("hebrew", Charset::Iso8859_8),
    ("csISOLatinHebrew", Charset::Iso8859_8),
    ("ISO-8859-9", Charset::Iso8859_9),
    ("ISO8859-9", Charset::Iso8859_9),
    ("ISO_8859-9:1989", Charset::Iso8859_9),
    ("iso-ir-148", Charset::Iso8859_9),
    ("ISO_8859-9", Charset::Iso8859_9),
    ("latin5", Charset::Iso8859_9),
    ("l5", Charset::Iso8859_9),
    ("csISOLatin5", Charset::Iso8859_9),
    ("ISO-8859-10", Charset::Iso8859_10),
    ("ISO8859-10", Charset::Iso8859_10),
    ("iso-ir-157", Charset::Iso8859_10),
    ("l6", Charset::Iso8859_10),
    ("ISO_8859-10:1992", Charset::Iso8859_10),
    ("csISOLatin6", Charset::Iso8859_10),
    ("latin6", Charset::Iso8859_10),
    ("TIS-620", Charset::Iso8859_11),
    ("ISO-8859-13", Charset::Iso8859_13),
    ("ISO8859-13", Charset::Iso8859_13),
    ("ISO-8859-14", Charset::Iso8859_14),
    ("ISO8859-14", Charset::Iso8859_14),
    ("iso-ir-199", Charset::Iso8859_14),
    ("ISO_8859-14:1998", Charset::Iso8859_14),
    ("ISO_8859-14", Charset::Iso8859_14),
    ("latin8", Charset::Iso8859_14),
    ("iso-celtic", Charset::Iso8859_14),
    ("l8", Charset::Iso8859_14),
    ("ISO-8859-15", Charset::Iso8859_15),
    ("ISO8859-15", Charset::Iso8859_15),
    ("ISO_8859-15", Charset::Iso8859_15),
    ("Latin-9", Charset::Iso8859_15),
    ("ISO-8859-16", Charset::Iso8859_16),
    ("ISO8859-16", Charset::Iso8859_16),
    ("iso-ir-226", Charset::Iso8859_16),
    ("ISO_8859-16", Charset::Iso8859_16),
    ("ISO_8859-16:2001", Charset::Iso8859_16),
    ("latin10", Charset::Iso8859_16),
    ("l10", Charset::Iso8859_16),
    ("IBM437", Charset::Cp437),
    ("cp437", Charset::Cp437),
    ("437", Charset::Cp437),
    ("csPC8CodePage437", Charset::Cp437),
    ("IBM850", Charset::Cp850),
    ("cp850", Charset::Cp850),
    ("850", Charset::Cp850),
    ("csPC850Multilingual", Charset::Cp850),
    ("IBM866", Charset::Cp866),
    ("cp866", Charset::Cp866),
    ("866", Charset::Cp866),
    ("csIBM866", Charset::Cp866),
    ("windows-1250", Charset::Cp1250),
    ("win-1250", Charset::Cp1250),
    ("windows-1251", Charset::Cp1251),
    ("win-1251", Charset::Cp1251),
    ("windows-1252", Charset::Cp1252),
    ("win-1252", Charset::Cp1252),
    ("windows-1253", Charset::Cp1253),
    ("win-1253", Charset::Cp1253),
    ("windows-1254", Charset::Cp1254),
    ("win-1254", Charset::Cp1254),
    ("windows-1255", Charset::Cp1255),
    ("win-1255", Charset::Cp1255),
    ("windows-1256", Charset::Cp1256),
    ("win-1256", Charset::Cp1256),
    ("windows-1257", Charset::Cp1257),
    ("win-1257", Charset::Cp1257),
    ("windows-1258", Charset::Cp1258),
    ("win-1258", Charset::Cp1258),
    ("KOI8-R", Charset::Koi8R),
    ("csKOI8R", Charset::Koi8R),
    ("KOI8-U", Charset::Koi8U),
    ("KOI8-RU", Charset::Koi8Ru),
    ("JIS_X0201", Charset::JisX0201),
    ("X0201", Charset::JisX0201),
    ("csHalfWidthKatakana", Charset::JisX0201),
    ("macintosh", Charset::MacRomanOld),
    ("mac", Charset::MacRomanOld),
    ("csMacintosh", Charset::MacRomanOld),
    ("VISCII", Charset::Viscii),
    ("csVISCII", Charset::Viscii),
    ("hp-roman8", Charset::HpRoman8),
    ("roman8", Charset::HpRoman8),
    ("r8", Charset::HpRoman8),
    ("csHPRoman8", Charset::HpRoman8),
    ("DEC-MCS", Charset::DecMcs),
    ("dec", Charset::DecMcs),
    ("csDECMCS", Charset::DecMcs),
    ("UTF-8", Charset::Utf8),
    ("UTF-7", Charset::Utf7),
    ("UNICODE-1-1-UTF-7", Charset::Utf7),
    ("csUnicode11UTF7", Charset::Utf7),
    // MIME knows the EUC-CN encoding by the name of its underlying
    // character set.
    ("GB2312", Charset::EucCn),
    ("csGB2312", Charset::EucCn),
    ("EUC-KR", Charset::EucKr),
    ("csEUCKR", Charset::EucKr),
    ("EUC-JP", Charset::EucJp),
    ("csEUCPkdFmtJapanese", Charset::EucJp),
    ("Extended_UNIX_Code_Packed_Format_for_Japanese", Charset::EucJp),
    ("ISO-2022-JP", Charset::Iso2022Jp),
    ("csISO2022JP", Charset::Iso2022Jp),
    ("ISO-2022-KR", Charset::Iso2022Kr),
    ("csISO2022KR", Charset::Iso2022Kr),
    ("Big5", Charset::Big5),
    ("csBig5", Charset::Big5),
    ("Big-5", Charset::Big5),
    ("ChineseBig5", Charset::Big5),
    ("Shift_JIS", Charset::ShiftJis),
    ("MS_Kanji", Charset::ShiftJis),
    ("csShiftJIS", Charset::ShiftJis),
    ("HZ-GB-2312", Charset::Hz),
    ("UTF-16BE", Charset::Utf16Be),
    ("UTF-16LE", Charset::Utf16Le),
    ("UTF-16", Charset::Utf16),
    // Rumour has it that MS products announce CP949 as KS C 5601 in much
    // the same way they announce CP1252 as its subset ISO 8859-1, so the
    // KSC names map to the superset.
    ("KS_C_5601-1987", Charset::Cp949),
    ("iso-ir-149", Charset::Cp949),
    ("KS_C_5601-1989", Charset::Cp949),
    ("KSC_5601", Charset::Cp949),
    ("korean", Charset::Cp949),
    ("csKSC56011987", Charset::Cp949),
    ("KSC5601", Charset::Cp949),
    // ISO-2022-JP-2 intentionally absent: the codec carries only the
    // -JP and -KR subsets.
];

static XENCS: &[(&str, Charset)] = &[
    ("iso8859-1", Charset::Iso8859_1),
    ("iso8859-2", Charset::Iso8859_2),
    ("iso8859-3", Charset::Iso8859_3),
    ("iso8859-4", Charset::Iso8859_4),
    ("iso8859-5", Charset::Iso8859_5),
    ("iso8859-6", Charset::Iso8859_6),
    ("iso8859-7", Charset::Iso8859_7),
    ("iso8859-8", Charset::Iso8859_8),
    ("iso8859-9", Charset::Iso8859_9),
    ("iso8859-10", Charset::Iso8859_10),
    ("iso8859-11", Charset::Iso8859_11),
    ("iso8859-13", Charset::Iso8859_13),
    ("iso8859-14", Charset::Iso8859_14),
    ("iso8859-15", Charset::Iso8859_15),
    ("iso8859-16", Charset::Iso8859_16),
    ("koi8-r", Charset::Koi8R),
    ("koi8-u", Charset::Koi8U),
    ("koi8-ru", Charset::Koi8Ru),
    ("jisx0201.1976-0", Charset::JisX0201),
    ("gb2312.1980-0", Charset::EucCn),
    ("ksc5601.1987-0", Charset::EucKr),
    ("big5-0", Charset::Big5),
    ("big5.eten-0", Charset::Big5),
    ("tis620-0", Charset::Iso8859_11),
    ("viscii1.1-1", Charset::Viscii),
    ("hp-roman8", Charset::HpRoman8),
    ("apple-roman", Charset::MacRoman),
    ("microsoft-cp1250", Charset::Cp1250),
    ("microsoft-cp1251", Charset::Cp1251),
    ("microsoft-cp1252", Charset::Cp1252),
    ("microsoft-cp1253", Charset::Cp1253),
    ("microsoft-cp1254", Charset::Cp1254),
    ("microsoft-cp1255", Charset::Cp1255),
    ("microsoft-cp1256", Charset::Cp1256),
    ("microsoft-cp1257", Charset::Cp1257),
    ("microsoft-cp1258", Charset::Cp1258),
    ("ibm-cp437", Charset::Cp437),
    ("ibm-cp850", Charset::Cp850),
    ("ibm-cp866", Charset::Cp866),
];

// Derived from running M-x list-coding-systems in Emacs 21.3.
static EMACSENCS: &[(&str, Charset)] = &[
    ("us-ascii", Charset::Ascii),
    ("iso-latin-9", Charset::Iso8859_15),
    ("iso-8859-15", Charset::Iso8859_15),
    ("latin-9", Charset::Iso8859_15),
    ("latin-0", Charset::Iso8859_15),
    ("iso-latin-1", Charset::Iso8859_1),
    ("iso-8859-1", Charset::Iso8859_1),
    ("latin-1", Charset::Iso8859_1),
    ("iso-latin-2", Charset::Iso8859_2),
    ("iso-8859-2", Charset::Iso8859_2),
    ("latin-2", Charset::Iso8859_2),
    ("iso-latin-3", Charset::Iso8859_3),
    ("iso-8859-3", Charset::Iso8859_3),
    ("latin-3", Charset::Iso8859_3),
    ("iso-latin-4", Charset::Iso8859_4),
    ("iso-8859-4", Charset::Iso8859_4),
    ("latin-4", Charset::Iso8859_4),
    ("cyrillic-iso-8bit", Charset::Iso8859_5),
    ("iso-8859-5", Charset::Iso8859_5),
    ("greek-iso-8bit", Charset::Iso8859_7),
    ("iso-8859-7", Charset::Iso8859_7),
    ("hebrew-iso-8bit", Charset::Iso8859_8),
    ("iso-8859-8", Charset::Iso8859_8),
    ("iso-8859-8-e", Charset::Iso8859_8),
    ("iso-8859-8-i", Charset::Iso8859_8),
    ("iso-latin-5", Charset::Iso8859_9),
    ("iso-8859-9", Charset::Iso8859_9),
    ("latin-5", Charset::Iso8859_9),
    ("chinese-big5", Charset::Big5),
    ("big5", Charset::Big5),
    ("cn-big5", Charset::Big5),
    ("cp437", Charset::Cp437),
    ("cp850", Charset::Cp850),
    ("cp866", Charset::Cp866),
    ("cp1250", Charset::Cp1250),
    ("cp1251", Charset::Cp1251),
    ("cp1253", Charset::Cp1253),
    ("cp1257", Charset::Cp1257),
    ("japanese-iso-8bit", Charset::EucJp),
    ("euc-japan-1990", Charset::EucJp),
    ("euc-japan", Charset::EucJp),
    ("euc-jp", Charset::EucJp),
    ("iso-2022-jp", Charset::Iso2022Jp),
    ("junet", Charset::Iso2022Jp),
    ("korean-iso-8bit", Charset::EucKr),
    ("euc-kr", Charset::EucKr),
    ("euc-korea", Charset::EucKr),
    ("iso-2022-kr", Charset::Iso2022Kr),
    ("korean-iso-7bit-lock", Charset::Iso2022Kr),
    ("mac-roman", Charset::MacRoman),
    ("cyrillic-koi8", Charset::Koi8R),
    ("koi8-r", Charset::Koi8R),
    ("koi8", Charset::Koi8R),
    ("japanese-shift-jis", Charset::ShiftJis),
    ("shift_jis", Charset::ShiftJis),
    ("sjis", Charset::ShiftJis),
    ("thai-tis620", Charset::Iso8859_11),
    ("th-tis620", Charset::Iso8859_11),
    ("tis620", Charset::Iso8859_11),
    ("tis-620", Charset::Iso8859_11),
    ("mule-utf-16-be", Charset::Utf16Be),
    ("utf-16-be", Charset::Utf16Be),
    ("mule-utf-16-le", Charset::Utf16Le),
    ("utf-16-le", Charset::Utf16Le),
    ("mule-utf-8", Charset::Utf8),
    ("utf-8", Charset::Utf8),
    ("vietnamese-viscii", Charset::Viscii),
    ("viscii", Charset::Viscii),
    ("iso-latin-8", Charset::Iso8859_14),
    ("iso-8859-14", Charset::Iso8859_14),
    ("latin-8", Charset::Iso8859_14),
    ("compound-text", Charset::Ctext),
    ("x-ctext", Charset::Ctext),
    ("ctext", Charset::Ctext),
    ("chinese-hz", Charset::Hz),
    ("hz-gb-2312", Charset::Hz),
    ("hz", Charset::Hz),
];

fn scan(table: &[(&'static str, Charset)], name: &str) -> Option<Charset> {
    table
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, cs)| cs)
}

fn scan_back(table: &[(&'static str, Charset)], charset: Charset) -> Option<&'static str> {
    table
        .iter()
        .find(|&&(_, cs)| cs == charset)
        .map(|&(n, _)| n)
}

/// Finds the charset a name denotes in the given namespace, if any.
///
/// The local namespace additionally accepts every name the other three
/// understand.
pub fn lookup(namespace: Namespace, name: &str) -> Option<Charset> {
    match namespace {
        Namespace::Mime => scan(MIMEENCS, name),
        Namespace::X11 => scan(XENCS, name),
        Namespace::Emacs => scan(EMACSENCS, name),
        Namespace::Local => scan(MIMEENCS, name)
            .or_else(|| scan(XENCS, name))
            .or_else(|| scan(EMACSENCS, name))
            .or_else(|| {
                LOCALENCS
                    .iter()
                    .find(|e| e.name.eq_ignore_ascii_case(name))
                    .map(|e| e.charset)
            }),
    }
}

/// The canonical name of a charset in the given namespace, if it has one
/// there. Useful for software announcing what charset it is producing.
pub fn canonical_name(namespace: Namespace, charset: Charset) -> Option<&'static str> {
    match namespace {
        Namespace::Mime => scan_back(MIMEENCS, charset),
        Namespace::X11 => scan_back(XENCS, charset),
        Namespace::Emacs => scan_back(EMACSENCS, charset),
        Namespace::Local => LOCALENCS
            .iter()
            .find(|e| e.charset == charset)
            .map(|e| e.name),
    }
}

/// The advertised charsets, in local registry order, aliases skipped.
pub(crate) fn advertised() -> impl Iterator<Item = Charset> {
    LOCALENCS.iter().filter(|e| e.in_enum).map(|e| e.charset)
}

// Mac OS script and region codes, as far as the tables here go.
const SM_ROMAN: i32 = 0;
const SM_GREEK: i32 = 6;
const SM_CYRILLIC: i32 = 7;
const SM_THAI: i32 = 21;
const SM_CENTEURO: i32 = 29;

const VER_ICELAND: i32 = 21;
const VER_TURKEY: i32 = 24;
const VER_CROATIA: i32 = 25;
const VER_ROMANIA: i32 = 39;
const VER_UKRAINE: i32 = 62;

/// Finds the charset for a Mac OS script/region pair, using the old
/// (pre-8.5, currency sign rather than euro) tables when `sysvers` is
/// below 0x0850, and the VT100 variants for the fonts carrying terminal
/// line-drawing glyphs.
pub fn from_mac_script(
    script: i32,
    region: i32,
    sysvers: i32,
    fontname: Option<&str>,
) -> Option<Charset> {
    let new = sysvers >= 0x0850;
    match script {
        SM_ROMAN => {
            if fontname.is_some_and(|f| f.eq_ignore_ascii_case("VT100")) {
                return Some(if new {
                    Charset::MacVt100
                } else {
                    Charset::MacVt100Old
                });
            }
            Some(match region {
                VER_ICELAND if new => Charset::MacIceland,
                VER_ICELAND => Charset::MacIcelandOld,
                VER_TURKEY => Charset::MacTurkish,
                VER_CROATIA if new => Charset::MacCroatian,
                VER_CROATIA => Charset::MacCroatianOld,
                VER_ROMANIA if new => Charset::MacRomanian,
                VER_ROMANIA => Charset::MacRomanianOld,
                _ if new => Charset::MacRoman,
                _ => Charset::MacRomanOld,
            })
        }
        SM_GREEK => Some(if new {
            Charset::MacGreek
        } else {
            Charset::MacGreekOld
        }),
        SM_CYRILLIC => Some(if region == VER_UKRAINE {
            Charset::MacUkraine
        } else if new {
            Charset::MacCyrillic
        } else {
            Charset::MacCyrillicOld
        }),
        SM_THAI => Some(Charset::MacThai),
        SM_CENTEURO => Some(Charset::MacCentEuro),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup(Namespace::Mime, "us-ascii"), Some(Charset::Ascii));
        assert_eq!(lookup(Namespace::Mime, "US-ASCII"), Some(Charset::Ascii));
        assert_eq!(lookup(Namespace::Mime, "Shift_JIS"), Some(Charset::ShiftJis));
        assert_eq!(lookup(Namespace::Mime, "shift_jis"), Some(Charset::ShiftJis));
        assert_eq!(lookup(Namespace::Mime, "no-such-charset"), None);
    }

    #[test]
    fn test_local_lookup_searches_everywhere() {
        assert_eq!(lookup(Namespace::Local, "Win1252"), Some(Charset::Cp1252));
        assert_eq!(lookup(Namespace::Local, "latin1"), Some(Charset::Iso8859_1));
        assert_eq!(lookup(Namespace::Local, "junet"), Some(Charset::Iso2022Jp));
        assert_eq!(lookup(Namespace::Local, "big5.eten-0"), Some(Charset::Big5));
        assert_eq!(lookup(Namespace::Local, "CTEXT"), Some(Charset::Ctext));
    }

    #[test]
    fn test_mime_superset_cheats() {
        assert_eq!(lookup(Namespace::Mime, "KS_C_5601-1987"), Some(Charset::Cp949));
        assert_eq!(lookup(Namespace::Mime, "GB2312"), Some(Charset::EucCn));
        assert_eq!(lookup(Namespace::Mime, "macintosh"), Some(Charset::MacRomanOld));
    }

    #[test]
    fn test_canonical_names() {
        assert_eq!(
            canonical_name(Namespace::Mime, Charset::Ascii),
            Some("US-ASCII")
        );
        assert_eq!(
            canonical_name(Namespace::Local, Charset::Cp1252),
            Some("CP1252")
        );
        assert_eq!(
            canonical_name(Namespace::Emacs, Charset::Iso2022Jp),
            Some("iso-2022-jp")
        );
        assert_eq!(
            canonical_name(Namespace::X11, Charset::Koi8R),
            Some("koi8-r")
        );
        assert_eq!(canonical_name(Namespace::Mime, Charset::DecGraphics), None);
    }

    #[test]
    fn test_round_trip_canonical_names() {
        for entry in super::LOCALENCS {
            assert_eq!(
                lookup(Namespace::Local, entry.name),
                Some(entry.charset),
                "{}",
                entry.name
            );
        }
    }

    #[test]
    fn test_mac_script_lookup() {
        assert_eq!(
            from_mac_script(0, 0, 0x0850, None),
            Some(Charset::MacRoman)
        );
        assert_eq!(
            from_mac_script(0, 0, 0x0750, None),
            Some(Charset::MacRomanOld)
        );
        assert_eq!(
            from_mac_script(0, 24, 0x0850, None),
            Some(Charset::MacTurkish)
        );
        assert_eq!(
            from_mac_script(7, 62, 0x0850, None),
            Some(Charset::MacUkraine)
        );
        assert_eq!(
            from_mac_script(0, 0, 0x0850, Some("VT100")),
            Some(Charset::MacVt100)
        );
        assert_eq!(from_mac_script(99, 0, 0x0850, None), None);
    }
}
