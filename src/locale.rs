// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! Deducing the charset of the current locale.
//!
//! This works from the standard locale environment (`LC_ALL`, `LC_CTYPE`,
//! `LANG`, in that order): the codeset suffix of the locale name is looked
//! up in the name registries first, and failing that a set of fragment
//! heuristics adapted from Markus Kuhn's public-domain
//! `nl_langinfo(CODESET)` emulation takes over. The answer is always a
//! valid charset; ASCII is the fallback of last resort.

use crate::charset::Charset;
use crate::label::{lookup, Namespace};

/// Deduces the charset used by the current locale, as configured in the
/// environment.
pub fn from_locale() -> Charset {
    let l = std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_CTYPE"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_default();
    from_locale_name(&l)
}

/// The deduction itself, split out for testing and for callers who carry
/// a locale name of their own.
pub fn from_locale_name(l: &str) -> Charset {
    if l.is_empty() {
        return Charset::Ascii;
    }
    if l == "C" || l == "POSIX" {
        return Charset::Ascii;
    }

    // "language_REGION.codeset@modifier": the codeset part is frequently
    // a name some registry knows outright.
    if let Some(dot) = l.find('.') {
        let codeset = &l[dot + 1..];
        let codeset = codeset.split('@').next().unwrap_or(codeset);
        if let Some(cs) = lookup(Namespace::Local, codeset) {
            return cs;
        }
    }

    // Encoding-name fragments.
    if l.contains("UTF") || l.contains("utf") {
        return Charset::Utf8;
    }
    if let Some(pos) = l.find("8859-") {
        let digits: String = l[pos + 5..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .take(2)
            .collect();
        if !digits.is_empty() {
            if let Some(cs) = lookup(Namespace::Local, &format!("ISO-8859-{}", digits)) {
                return cs;
            }
        }
    }
    if l.contains("KOI8-RU") {
        return Charset::Koi8Ru;
    }
    if l.contains("KOI8-R") {
        return Charset::Koi8R;
    }
    if l.contains("KOI8-U") {
        return Charset::Koi8U;
    }
    if l.contains("2312") {
        return Charset::EucCn;
    }
    if l.contains("Big5") || l.contains("BIG5") {
        return Charset::Big5;
    }
    if l.contains("Shift_JIS") || l.contains("SJIS") {
        return Charset::ShiftJis;
    }
    // A conclusive modifier.
    if l.contains("euro") {
        return Charset::Iso8859_15;
    }
    // Language (and perhaps country) codes.
    if l.contains("zh_TW") {
        return Charset::Big5;
    }
    if l.contains("zh") {
        return Charset::EucCn;
    }
    if l.contains("ja") {
        return Charset::EucJp;
    }
    if l.contains("ko") {
        return Charset::EucKr;
    }
    if l.contains("ru") {
        return Charset::Koi8R;
    }
    if l.contains("uk") {
        return Charset::Koi8U;
    }
    if ["pl", "hr", "hu", "cs", "sk", "sl"].iter().any(|c| l.contains(c)) {
        return Charset::Iso8859_2;
    }
    if l.contains("eo") || l.contains("mt") {
        return Charset::Iso8859_3;
    }
    if l.contains("el") {
        return Charset::Iso8859_7;
    }
    if l.contains("he") {
        return Charset::Iso8859_8;
    }
    if l.contains("tr") {
        return Charset::Iso8859_9;
    }
    if l.contains("lt") {
        return Charset::Iso8859_13;
    }
    if l.contains("cy") {
        return Charset::Iso8859_14;
    }
    if l.contains("ro") {
        return Charset::Iso8859_2; // arguably ISO 8859-16
    }
    if l.contains("am") || l.contains("vi") {
        return Charset::Utf8;
    }
    Charset::Iso8859_1
}

#[cfg(test)]
mod tests {
    use super::from_locale_name;
    use crate::charset::Charset;

    #[test]
    fn test_locale_names() {
        assert_eq!(from_locale_name(""), Charset::Ascii);
        assert_eq!(from_locale_name("C"), Charset::Ascii);
        assert_eq!(from_locale_name("POSIX"), Charset::Ascii);
        assert_eq!(from_locale_name("en_US.UTF-8"), Charset::Utf8);
        assert_eq!(from_locale_name("de_DE.ISO-8859-15"), Charset::Iso8859_15);
        assert_eq!(from_locale_name("de_DE@euro"), Charset::Iso8859_15);
        assert_eq!(from_locale_name("fr_FR.ISO8859-1"), Charset::Iso8859_1);
        assert_eq!(from_locale_name("ru_RU.KOI8-R"), Charset::Koi8R);
        assert_eq!(from_locale_name("ja_JP.eucJP"), Charset::EucJp);
        assert_eq!(from_locale_name("zh_TW.Big5"), Charset::Big5);
        assert_eq!(from_locale_name("zh_CN"), Charset::EucCn);
        assert_eq!(from_locale_name("ko_KR"), Charset::EucKr);
        assert_eq!(from_locale_name("pl_PL"), Charset::Iso8859_2);
        assert_eq!(from_locale_name("en_GB"), Charset::Iso8859_1);
    }
}
