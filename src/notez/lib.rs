//! # Notez Architecture
//!
//! Notez is a **UI-agnostic note board**: a session's worth of short notes
//! held in memory, plus the create/edit/delete/share actions a shell offers
//! on them. The terminal session in the `notez` binary is one shell; the
//! library knows nothing about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (binary: cli/)                                       │
//! │  - Reads session commands, renders cards and messages       │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (positions / ranges / ids → NoteIds)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per user action, returns CmdResult          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  NoteStore (store/)                                         │
//! │  - Ordered notes + edit target, injected Clock/IdGenerator  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code takes plain arguments and returns plain
//! values. Nothing prints, nothing exits. The one call that leaves the
//! process is the clipboard write during sharing, and its failure only
//! changes which message comes back.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user action
//! - [`store`]: The note collection and its invariants
//! - [`model`]: `Note` and `NoteId`
//! - [`index`]: Display positions and selector parsing
//! - [`clock`] / [`ids`]: Injectable time and id sources
//! - [`share`] / [`clipboard`]: Share links and where they are copied
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod index;
pub mod model;
pub mod share;
pub mod store;
