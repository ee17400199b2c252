//! Publishing runs the board's form through details → payment → done.
//!
//! The interactive client drives the steps one at a time (`submit`, `back`,
//! `confirm`, `cancel`); `run` does the whole flow at once for callers that
//! already have every field.

use crate::board::Board;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AdDraft;
use crate::store::SlotBackend;
use crate::wizard::Step;

/// Details → Payment. Validation errors are returned and the form stays open.
pub fn submit<B: SlotBackend>(board: &mut Board<B>) -> Result<CmdResult> {
    board.submit_details()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Payment: {}", board.fee())));
    result.add_message(CmdMessage::info(
        "Demo mode: confirming simulates a successful payment.",
    ));
    Ok(result)
}

pub fn back<B: SlotBackend>(board: &mut Board<B>) -> Result<CmdResult> {
    board.back_to_details()?;
    Ok(CmdResult::default())
}

pub fn confirm<B: SlotBackend>(board: &mut Board<B>) -> Result<CmdResult> {
    let ad = board.confirm_payment()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Done! Ad published: {}",
        ad.title
    )));
    Ok(result.with_affected_ads(vec![ad]))
}

pub fn cancel<B: SlotBackend>(board: &mut Board<B>) -> CmdResult {
    let mut result = CmdResult::default();
    if let Some(wizard) = board.close_wizard() {
        if wizard.step() != Step::Done {
            result.add_message(CmdMessage::info("Cancelled. Nothing was published."));
        }
    }
    result
}

/// Runs the whole form with a complete draft and closes it afterwards.
pub fn run<B: SlotBackend>(board: &mut Board<B>, draft: AdDraft) -> Result<CmdResult> {
    board.open_wizard(draft);
    let outcome = submit(board).and_then(|_| confirm(board));
    board.close_wizard();
    outcome
}
