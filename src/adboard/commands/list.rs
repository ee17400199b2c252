use crate::board::Board;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SlotBackend;

pub fn run<B: SlotBackend>(board: &mut Board<B>, query: &str) -> Result<CmdResult> {
    board.set_query(query);
    let cards = board.cards();
    let mut result = CmdResult::default();

    if cards.is_empty() {
        if board.store().is_empty() {
            result.add_message(CmdMessage::info(board.empty_message()));
        } else {
            result.add_message(CmdMessage::info(format!(
                "No ads match \"{}\".",
                query.trim()
            )));
        }
    }

    Ok(result.with_listed_ads(cards))
}
