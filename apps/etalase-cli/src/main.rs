//! # etalase
//!
//! Entry point. Setup and dispatch live in `lib.rs` for testability.
//!
//! ```text
//! $ etalase quote --length 1.2 --width 0.5 --height 1 --sections 2 --wheels
//! $ etalase quote --input case.json --format json
//! $ etalase prices
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    etalase_cli::run()
}
