//! # Storage Layer
//!
//! The board keeps all of its ads in a single persistent key-value slot. The
//! [`SlotBackend`] trait abstracts that slot so the application can run
//! against the filesystem in production and against memory in tests.
//!
//! ## Mirror Model
//!
//! [`AdStore`] owns the ad list for the session:
//!
//! 1. **Load once**: the slot is read when the store is created. An absent or
//!    malformed slot is treated as an empty board, never as an error.
//! 2. **Save on change**: every `add`/`remove` rewrites the whole slot.
//! 3. **Memory wins**: if a write fails the in-memory list stays
//!    authoritative; the failure is only logged.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: `AdStore` over [`fs_backend::FsBackend`].
//! - [`memory::InMemoryStore`]: `AdStore` over [`mem_backend::MemBackend`].
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── classified_ads_v1.json   # JSON array of ads
//! └── config.json              # Board configuration
//! ```

pub mod ad_store;
pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

pub use ad_store::AdStore;
pub use backend::SlotBackend;

/// Slot key used when the configuration does not override it.
pub const STORAGE_KEY: &str = "classified_ads_v1";
