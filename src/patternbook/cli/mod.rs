//! # CLI Behavior
//!
//! This is **one possible UI client** for patternbook. It is the only place
//! that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Naked Execution (`patternbook`)
//!
//! Running with no subcommand runs every demonstration, top to bottom, in
//! catalog order. That is what the catalog is for.
//!
//! ## Output
//!
//! Human output is coloured and grouped per pattern. `--json` prints the same
//! `CmdResult` values as JSON instead, one document per invocation.
//!
//! ## Logging
//!
//! `tracing` events go to stderr. The default level is `warn`; `--verbose`
//! raises it to `debug`, which shows holder reuse and factory dispatch
//! decisions. `RUST_LOG` overrides both.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch from parsed arguments to API calls
//! - `render`: Output formatting (colours, tables, JSON)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
