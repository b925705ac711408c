//! # notez binary
//!
//! Thin entry point: all terminal behavior lives in `cli/`, which drives the
//! `notez` library through its API facade. This file only maps a top-level
//! error to stderr and exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
