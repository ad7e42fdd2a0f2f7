// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! Japanese index tables for
//! [rust-charsets](https://github.com/rust-charsets/rust-charsets).

/// JIS X 0208, the primary Japanese 94×94 graphic character set.
pub mod jis0208;

/// JIS X 0212, the supplementary Japanese 94×94 graphic character set.
pub mod jis0212;

#[cfg(test)]
#[macro_use]
#[path = "../index_tests.rs"]
mod index_tests;

#[cfg(test)]
mod tests {
    dbcs_consistency_test!(jis0208, jis0208, 94, 94);
    dbcs_consistency_test!(jis0212, jis0212, 94, 94);
}
