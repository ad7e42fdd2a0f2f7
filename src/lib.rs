// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

/*!

# Rust-charsets

Streaming conversion between a wide family of legacy, regional and Unicode
character encodings and a canonical Unicode code-point stream.

The library is built for incremental use: feed any number of input units at
any time, collect all output determinable so far, and resume later. The
entire resumable position of a conversion lives in a [`CharsetState`], two
`u32` words owned by the caller, so conversions are trivially snapshotted,
interleaved, and run concurrently on independent states. Nothing allocates
on the conversion path, all codec tables are immutable process data, and
decoding is total: malformed input turns into replacement characters, never
into an error return.

## Converting whole buffers

```rust
use charsets::{Charset, CharsetState, to_unicode, from_unicode, finish, Unrepresentable};

// Shift-JIS for "日本語" plus some ASCII
let input = [0x93, 0xFA, 0x96, 0x7B, 0x8C, 0xEA, 0x21];
let mut state = CharsetState::new();
let mut scalars = [0u32; 16];
let r = to_unicode(Charset::ShiftJis, &input, &mut state, &mut scalars, None);
assert_eq!(&scalars[..r.written], &[0x65E5, 0x672C, 0x8A9E, 0x21]);

// ... and back out as ISO-2022-JP
let mut state = CharsetState::new();
let mut bytes = [0u8; 32];
let r = from_unicode(Charset::Iso2022Jp, &scalars[..4], &mut state,
                     &mut bytes, Unrepresentable::Stop);
let mut n = r.written;
n += finish(Charset::Iso2022Jp, &mut state, &mut bytes[n..]).unwrap();
assert_eq!(&bytes[..n], b"\x1b$BF|K\\8l\x1b(B!");
```

## Streaming a byte at a time

The split points of the input never matter: a multibyte character or escape
sequence interrupted by the end of one buffer finishes at the start of the
next, because the pending partial unit rides along in the state words.

```rust
use charsets::{Charset, CharsetState};

let mut state = CharsetState::new();
let mut out = Vec::new();
for b in [0xE6, 0x97, 0xA5] {
    Charset::Utf8.decode_byte(b, &mut state, &mut |u| out.push(u));
}
assert_eq!(out, [0x65E5]);
```

## Finding charsets by name

```rust
use charsets::{Charset, Namespace, lookup, canonical_name};

assert_eq!(lookup(Namespace::Mime, "shift_jis"), Some(Charset::ShiftJis));
assert_eq!(lookup(Namespace::Local, "Win1252"), Some(Charset::Cp1252));
assert_eq!(canonical_name(Namespace::Mime, Charset::EucCn), Some("GB2312"));
assert_eq!(Charset::Iso8859_1.upgrade(), Charset::Cp1252);
```

## Error handling

There are exactly two error conditions. Malformed *input bytes* surface as
the in-band mark U+FFFF from the byte-level codecs (replaced with U+FFFD or
a caller-chosen sequence by [`to_unicode`]); decoding itself never fails.
Scalars a charset cannot *represent* make [`Charset::encode_char`] return
false with nothing emitted, which [`from_unicode`] reports or skips as the
caller prefers.

*/

pub use crate::charset::Charset;
pub use crate::convert::{
    finish, from_unicode, to_unicode, FromUnicodeResult, ToUnicodeResult, Unrepresentable,
};
pub use crate::label::{canonical_name, from_mac_script, lookup, Namespace};
pub use crate::locale::{from_locale, from_locale_name};
pub use crate::types::{CharsetState, ERROR};

mod all;
pub mod charset;
pub mod convert;
pub mod label;
pub mod locale;
pub mod types;

/// Codec implementations, one module per encoding family.
mod codec {
    pub(crate) mod big5;
    pub(crate) mod cp949;
    pub(crate) mod euc;
    pub(crate) mod hz;
    pub(crate) mod iso2022;
    pub(crate) mod iso2022_subset;
    pub(crate) mod sbcs;
    pub(crate) mod shift_jis;
    pub(crate) mod utf_16;
    pub(crate) mod utf_7;
    pub(crate) mod utf_8;
}

/// Translation tables, re-exported from the index sub-crates.
/// Semi-internal: the layout is stable only within a release.
pub mod index {
    pub use charsets_index_japanese::{jis0208, jis0212};
    pub use charsets_index_korean::{cp949, ksx1001};
    pub use charsets_index_simpchinese::gb2312;
    pub use charsets_index_singlebyte as singlebyte;
    pub use charsets_index_tradchinese::{big5, cns11643};
}

#[cfg(test)]
mod testutils;
