//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! board operation, whatever UI sits on top.
//!
//! The facade dispatches to `commands/*.rs`, normalizes inputs (selectors to
//! ids) and returns `Result<CmdResult>`. It does no terminal I/O and formats
//! nothing: confirmations are split into a request and a settle call so the
//! client decides how to ask.
//!
//! `AdBoardApi<B: SlotBackend>` is generic over the slot backend:
//! - Production: `AdBoardApi<FsBackend>`
//! - Testing: `AdBoardApi<MemBackend>`

use crate::board::Board;
use crate::commands;
use crate::error::Result;
use crate::index::parse_selectors;
use crate::model::{AdDraft, DraftField};
use crate::store::SlotBackend;
use crate::wizard::Wizard;
use std::path::PathBuf;

pub struct AdBoardApi<B: SlotBackend> {
    board: Board<B>,
    data_dir: PathBuf,
}

impl<B: SlotBackend> AdBoardApi<B> {
    pub fn new(board: Board<B>, data_dir: PathBuf) -> Self {
        Self { board, data_dir }
    }

    pub fn board(&self) -> &Board<B> {
        &self.board
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn list_ads(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.board, "")
    }

    pub fn search_ads(&mut self, query: &str) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.board, query)
    }

    // --- Publishing ---

    pub fn open_form(&mut self, draft: AdDraft) -> &Wizard {
        self.board.open_wizard(draft)
    }

    pub fn form(&self) -> Option<&Wizard> {
        self.board.wizard()
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) -> Result<()> {
        self.board.wizard_mut()?.set_field(field, value)
    }

    pub fn submit_details(&mut self) -> Result<commands::CmdResult> {
        commands::publish::submit(&mut self.board)
    }

    pub fn back_to_details(&mut self) -> Result<commands::CmdResult> {
        commands::publish::back(&mut self.board)
    }

    pub fn confirm_payment(&mut self) -> Result<commands::CmdResult> {
        commands::publish::confirm(&mut self.board)
    }

    pub fn cancel_form(&mut self) -> commands::CmdResult {
        commands::publish::cancel(&mut self.board)
    }

    pub fn publish_ad(&mut self, draft: AdDraft) -> Result<commands::CmdResult> {
        commands::publish::run(&mut self.board, draft)
    }

    // --- Deleting ---

    /// Resolves display indexes or ids to ad ids against the current board.
    pub fn resolve_ads<I: AsRef<str>>(&self, selectors: &[I]) -> Result<Vec<String>> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::resolve(&self.board, &selectors)
    }

    pub fn request_delete(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::request(&mut self.board, id)
    }

    pub fn settle_delete(&mut self, confirmed: bool) -> commands::CmdResult {
        commands::delete::settle(&mut self.board, confirmed)
    }

    pub fn delete_ads<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.board, &selectors)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}

pub use commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
