//! # Adboard Architecture
//!
//! Adboard is a single-board classified-ads library: people publish short
//! listings (title, description, optional price, phone) for a flat fee and
//! browse or search everything published so far. The terminal client in
//! `cli/` is one UI on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, formats cards                 │
//! │  - The ONLY place that touches stdin/stdout/exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes selectors (display index or id → id)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) over the Board (board.rs)    │
//! │  - Board holds query, open form and pending delete          │
//! │  - Wizard (wizard.rs) is the details → payment → done FSM   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - AdStore mirrors one persistent slot                      │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never prints, never prompts and never exits.
//! Confirmations (paying, deleting) are explicit states on the board that a
//! client settles however it likes. Persistence failures are logged through
//! `tracing` and otherwise ignored: the in-memory board stays authoritative.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each command
//! - [`board`]: View model with display indexes and confirmations
//! - [`wizard`]: The add-ad form state machine
//! - [`store`]: Slot abstraction and the ad store
//! - [`model`]: `Ad` and `AdDraft`
//! - [`validate`]: Draft validation rules
//! - [`search`]: Ordering and query filtering
//! - [`id`]: Ad identifier generation
//! - [`index`]: Selectors (display index or id)
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and wiring
//! - [`error`]: Error types

pub mod api;
pub mod board;
pub mod commands;
pub mod config;
pub mod error;
pub mod id;
pub mod index;
pub mod init;
pub mod model;
pub mod search;
pub mod store;
pub mod validate;
pub mod wizard;
