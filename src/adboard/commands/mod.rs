//! # Command Layer
//!
//! The operations of adboard, one submodule per command, working on a
//! [`Board`](crate::board::Board) and its store.
//!
//! Commands do no I/O: nothing is printed, no arguments are parsed and no one
//! is prompted. Confirmations come back as data (a pending card) and the UI
//! decides what to ask.
//!
//! Every command returns a [`CmdResult`] carrying the affected and listed
//! ads, config data when asked for, and leveled messages for the client to
//! render.

use crate::board::AdCard;
use crate::config::BoardConfig;
use crate::model::Ad;

pub mod config;
pub mod delete;
pub mod list;
pub mod publish;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_ads: Vec<Ad>,
    pub listed_ads: Vec<AdCard>,
    pub config: Option<BoardConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_ads(mut self, ads: Vec<Ad>) -> Self {
        self.affected_ads = ads;
        self
    }

    pub fn with_listed_ads(mut self, ads: Vec<AdCard>) -> Self {
        self.listed_ads = ads;
        self
    }

    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = Some(config);
        self
    }
}
