// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! Simplified Chinese index tables for
//! [rust-charsets](https://github.com/rust-charsets/rust-charsets).

/// GB 2312-80, the primary simplified Chinese 94×94 graphic character set.
pub mod gb2312;

#[cfg(test)]
#[macro_use]
#[path = "../index_tests.rs"]
mod index_tests;

#[cfg(test)]
mod tests {
    dbcs_consistency_test!(gb2312, gb2312, 94, 94);
}
