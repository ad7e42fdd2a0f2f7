// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! Korean index tables for
//! [rust-charsets](https://github.com/rust-charsets/rust-charsets).

/// KS X 1001, the Korean 94×94 graphic character set.
pub mod ksx1001;

/// Windows code page 949, the Unified Hangul Code superset of KS X 1001.
pub mod cp949;

#[cfg(test)]
#[macro_use]
#[path = "../index_tests.rs"]
mod index_tests;

#[cfg(test)]
mod tests {
    dbcs_consistency_test!(ksx1001, ksx1001, 94, 94);
    dbcs_consistency_test!(cp949, cp949, 126, 192);
}
