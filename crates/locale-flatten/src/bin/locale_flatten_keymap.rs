//! `locale-flatten-keymap` — emit the key map for a locale message document
//! read from stdin.
//!
//! Usage:
//!   locale-flatten-keymap < messages.json
//!
//! The key map records, for every leaf path in the original document, the
//! dot-path key holding its value in the flattened output. Callers use it to
//! rewrite message lookups after deduplication.

use locale_flatten::flatten_cli::flatten_key_map;
use std::io::{self, Read, Write};

fn main() {
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match flatten_key_map(buf.trim()) {
        Ok(out) => {
            io::stdout().write_all(out.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
