// This is a part of rust-charsets.
// Copyright (c) 2026, The rust-charsets developers.
// See README.md and LICENSE.txt for details.

//! A general test/demo client which recodes stdin to stdout between two
//! arbitrary charsets, selected by any name the registries know.

use std::io::{Read, Write};
use std::process::exit;

use charsets::{
    finish, from_unicode, lookup, to_unicode, CharsetState, Namespace, Unrepresentable,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: recode <from-charset> <to-charset>");
        exit(1);
    }
    let srcset = match lookup(Namespace::Local, &args[1]) {
        Some(cs) if cs.exists() => cs,
        _ => {
            eprintln!("recode: unknown source charset '{}'", args[1]);
            exit(1);
        }
    };
    let dstset = match lookup(Namespace::Local, &args[2]) {
        Some(cs) if cs.exists() => cs,
        _ => {
            eprintln!("recode: unknown destination charset '{}'", args[2]);
            exit(1);
        }
    };

    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let mut instate = CharsetState::new();
    let mut outstate = CharsetState::new();
    let mut inbuf = [0u8; 256];
    let mut midbuf = [0u32; 256];
    let mut outbuf = [0u8; 1024];

    loop {
        let n = match stdin.read(&mut inbuf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                eprintln!("recode: stdin: {}", e);
                exit(1);
            }
        };

        let mut pending = &inbuf[..n];
        while !pending.is_empty() {
            let r = to_unicode(srcset, pending, &mut instate, &mut midbuf, None);
            pending = &pending[r.consumed..];

            let mut scalars = &midbuf[..r.written];
            while !scalars.is_empty() {
                let w = from_unicode(
                    dstset,
                    scalars,
                    &mut outstate,
                    &mut outbuf,
                    Unrepresentable::Skip,
                );
                scalars = &scalars[w.consumed..];
                stdout.write_all(&outbuf[..w.written]).unwrap();
            }
        }
    }

    // Reset the output encoding state.
    let n = finish(dstset, &mut outstate, &mut outbuf).expect("terminator buffer too small");
    stdout.write_all(&outbuf[..n]).unwrap();
}
