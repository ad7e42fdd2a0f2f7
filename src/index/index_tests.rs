// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! Macros for index-table consistency tests, shared by every index crate.

#![allow(unused_macros)]

/// Checks that a single-byte table's inverse is sorted by scalar value and
/// agrees with the forward table in both directions.
macro_rules! sbcs_consistency_test {
    ($name:ident, $table:path) => {
        #[test]
        fn $name() {
            let t: &crate::SbcsTable = &$table;
            let mut prev = None;
            for &b in t.backward {
                let u = t.forward[b as usize];
                assert!(u != 0xFFFF, "backward entry {:#04x} is undefined", b);
                if let Some(p) = prev {
                    assert!(p <= u, "backward table out of order at {:#04x}", b);
                }
                prev = Some(u);
            }
            for b in 0..256 {
                if t.forward[b] != 0xFFFF {
                    assert!(
                        t.backward.contains(&(b as u8)),
                        "byte {:#04x} missing from backward table",
                        b
                    );
                }
            }
        }
    };
}

/// Checks that every mapped (row, column) pair survives a round trip
/// through `backward` and back.
macro_rules! dbcs_consistency_test {
    ($name:ident, $module:ident, $rows:expr, $cols:expr) => {
        #[test]
        fn $name() {
            for r in 0..$rows {
                for c in 0..$cols {
                    let u = crate::$module::forward(r, c);
                    if u == 0xFFFF {
                        continue;
                    }
                    let (br, bc) = crate::$module::backward(u as u32)
                        .expect("mapped scalar missing from backward table");
                    assert_eq!(crate::$module::forward(br as u32, bc as u32), u);
                }
            }
        }
    };
}

/// The planar variant of `dbcs_consistency_test`.
macro_rules! planar_consistency_test {
    ($name:ident, $module:ident, $planes:expr, $rows:expr, $cols:expr) => {
        #[test]
        fn $name() {
            for p in 0..$planes {
                for r in 0..$rows {
                    for c in 0..$cols {
                        let u = crate::$module::forward(p, r, c);
                        if u == 0xFFFF {
                            continue;
                        }
                        let (bp, br, bc) = crate::$module::backward(u as u32)
                            .expect("mapped scalar missing from backward table");
                        assert_eq!(
                            crate::$module::forward(bp as u32, br as u32, bc as u32),
                            u
                        );
                    }
                }
            }
        }
    };
}
