//! # Patternbook Architecture
//!
//! Patternbook is a **catalog of classic design patterns**, each one a small
//! runnable demonstration with a short commentary. It is a library first; the
//! `patternbook` binary is one client that runs demonstrations and prints
//! what they built.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders results, sets up logging       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the demonstrations                      │
//! │  - Owns the instance registry and configuration             │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per pattern: routine + example invocations    │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Demonstrations Are Independent
//!
//! No demonstration calls another one. The abstract factory reuses the
//! factory *types*, but never the factory demonstration itself. The only
//! state that outlives a call is the [`registry::Registry`] holding the
//! singleton and flyweight instances.
//!
//! ## Historical Behavior
//!
//! A few demonstrations keep behavior that looks like a bug on purpose:
//!
//! - The singleton silently discards the room count of every request after
//!   the first.
//! - The sales factory, in its default `literal` dispatch mode, always falls
//!   through to `junior`. `comparison` mode implements the intended rule and
//!   is selected through configuration.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One demonstration per pattern
//! - [`catalog`]: Pattern ids, families and commentary
//! - [`registry`]: Lazily initialised holders for shared instances
//! - [`model`]: Entities shared across demonstrations
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod registry;
