use crate::board::Board;
use crate::error::{AdBoardError, Result};
use crate::store::SlotBackend;
use std::str::FromStr;

/// A user input naming one ad, either by display index or by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdSelector {
    Index(usize),
    Id(String),
}

impl std::fmt::Display for AdSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdSelector::Index(i) => write!(f, "{}", i),
            AdSelector::Id(id) => write!(f, "\"{}\"", id),
        }
    }
}

impl FromStr for AdSelector {
    type Err = AdBoardError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AdBoardError::Api("Empty ad selector".to_string()));
        }
        match s.parse::<usize>() {
            Ok(n) => Ok(AdSelector::Index(n)),
            Err(_) => Ok(AdSelector::Id(s.to_string())),
        }
    }
}

impl AdSelector {
    /// Resolves to the id of an ad currently on the board.
    ///
    /// A numeric selector that is out of range is retried as an id, so an ad
    /// whose id happens to be all digits can still be addressed.
    pub fn resolve<B: SlotBackend>(&self, board: &Board<B>) -> Result<String> {
        match self {
            AdSelector::Index(n) => board
                .ad_at(*n)
                .map(|ad| ad.id)
                .or_else(|| {
                    let id = n.to_string();
                    board.store().get(&id).map(|ad| ad.id.clone())
                })
                .ok_or_else(|| AdBoardError::AdNotFound(self.to_string())),
            AdSelector::Id(id) => board
                .store()
                .get(id)
                .map(|ad| ad.id.clone())
                .ok_or_else(|| AdBoardError::AdNotFound(self.to_string())),
        }
    }
}

pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<AdSelector>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}
