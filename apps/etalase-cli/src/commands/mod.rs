//! # Commands Module
//!
//! One module per subcommand. Every command returns the text to print, so
//! the dispatcher in `lib.rs` owns stdout/stderr and exit codes.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── quote.rs    ◄─── etalase quote
//! ├── prices.rs   ◄─── etalase prices
//! └── config.rs   ◄─── etalase config show|path
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  etalase quote -l 1.2 -w 0.5 -H 1 -s 2 --wheels                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Settings::load()           ◄── defaults, config.toml, ETALASE_*       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  quote::execute(&settings, &args) -> Result<String, CliError>          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  stdout: table or JSON                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod prices;
pub mod quote;
