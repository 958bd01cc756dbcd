//! # okdata
//!
//! Command-line front end for the okdata output renderer. The binary reads JSON rows (from a
//! file or stdin), looks up the output schema for the command being emulated, and prints the
//! rows as a table, JSON or CSV.
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │  main.rs / args.rs                                 │
//! │  - argument parsing, stdout/stderr, exit codes     │
//! └────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌────────────────────────────────────────────────────┐
//! │  this crate: config, input, print, logging         │
//! └────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌────────────────────────────────────────────────────┐
//! │  okdata-output: schemas, projection, renderers     │
//! └────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod print;
