//! `locale-flatten` — flatten a locale message document read from stdin.
//!
//! Usage:
//!   locale-flatten < messages.json
//!
//! Writes the flattened dot-path mapping to stdout as pretty JSON, and a
//! one-line deduplication summary to stderr.

use locale_flatten::flatten_cli::flatten_document;
use std::io::{self, Read, Write};

fn main() {
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match flatten_document(buf.trim()) {
        Ok(doc) => {
            io::stdout().write_all(doc.flat_json.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
            eprintln!("{} duplicate value(s) redirected to common keys", doc.redirects);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
