use crate::board::Board;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AdBoardError, Result};
use crate::index::AdSelector;
use crate::store::SlotBackend;

/// Resolves every selector up front so later deletions cannot shift indexes.
pub fn resolve<B: SlotBackend>(board: &Board<B>, selectors: &[AdSelector]) -> Result<Vec<String>> {
    let mut ids: Vec<String> = Vec::new();
    for selector in selectors {
        let id = selector.resolve(board)?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Puts one ad up for confirmation. The card to show is the single listed ad.
pub fn request<B: SlotBackend>(board: &mut Board<B>, id: &str) -> Result<CmdResult> {
    board.request_delete(id)?;
    let card = board
        .card_for(id)
        .ok_or_else(|| AdBoardError::AdNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_ads(vec![card]))
}

pub fn settle<B: SlotBackend>(board: &mut Board<B>, confirmed: bool) -> CmdResult {
    let pending_title = board.pending_delete().map(|ad| ad.title.clone());
    let mut result = CmdResult::default();

    match (board.resolve_delete(confirmed), pending_title) {
        (Some(ad), _) => {
            result.add_message(CmdMessage::success(format!("Ad deleted: {}", ad.title)));
            result.affected_ads.push(ad);
        }
        (None, Some(title)) => {
            result.add_message(CmdMessage::info(format!("Kept: {}", title)));
        }
        (None, None) => {}
    }
    result
}

/// Deletes without asking.
pub fn run<B: SlotBackend>(board: &mut Board<B>, selectors: &[AdSelector]) -> Result<CmdResult> {
    let ids = resolve(board, selectors)?;
    let mut result = CmdResult::default();
    for id in ids {
        request(board, &id)?;
        let settled = settle(board, true);
        result.affected_ads.extend(settled.affected_ads);
        result.messages.extend(settled.messages);
    }
    Ok(result)
}
