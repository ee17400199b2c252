//! # Board View Model
//!
//! The board is what a UI renders: the current search query, the ads that
//! survive it, the add-ad form when one is open and a delete awaiting
//! confirmation. It owns the [`AdStore`] and is the only thing that mutates it.
//!
//! ## Display Indexes
//!
//! Every ad gets a 1-based index from its position in the unfiltered,
//! newest-first order. Filtering never renumbers, so `3` names the same ad
//! whether or not a query is active.
//!
//! ## Confirmations
//!
//! Destructive and paid actions are explicit two-step states instead of
//! blocking prompts:
//!
//! - delete: [`Board::request_delete`] → [`Board::resolve_delete`]
//! - publish: the wizard's payment step → [`Board::confirm_payment`]

use crate::error::{AdBoardError, Result};
use crate::id::generate_id;
use crate::model::{now_millis, Ad, AdDraft};
use crate::search::{filter_ads, sorted_newest_first};
use crate::store::{AdStore, SlotBackend};
use crate::wizard::{Fee, Wizard};
use serde::Serialize;
use tracing::debug;

/// One rendered ad, as a UI would show it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdCard {
    pub index: usize,
    pub id: String,
    pub title: String,
    pub description: String,
    pub phone: String,
    /// Price with currency, absent when the ad has no price.
    pub price: Option<String>,
    pub created_at: i64,
}

pub struct Board<B: SlotBackend> {
    store: AdStore<B>,
    fee: Fee,
    query: String,
    wizard: Option<Wizard>,
    pending_delete: Option<String>,
}

impl<B: SlotBackend> Board<B> {
    pub fn new(store: AdStore<B>, fee: Fee) -> Self {
        Self {
            store,
            fee,
            query: String::new(),
            wizard: None,
            pending_delete: None,
        }
    }

    pub fn store(&self) -> &AdStore<B> {
        &self.store
    }

    pub fn fee(&self) -> &Fee {
        &self.fee
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Ads matching the current query, newest first.
    pub fn visible(&self) -> Vec<Ad> {
        filter_ads(self.store.ads(), &self.query)
    }

    pub fn cards(&self) -> Vec<AdCard> {
        let order = sorted_newest_first(self.store.ads());
        self.visible()
            .into_iter()
            .map(|ad| {
                let index = order
                    .iter()
                    .position(|o| o.id == ad.id)
                    .map(|p| p + 1)
                    .unwrap_or(0);
                self.card(index, ad)
            })
            .collect()
    }

    /// Looks up an ad by its display index.
    pub fn ad_at(&self, index: usize) -> Option<Ad> {
        if index == 0 {
            return None;
        }
        sorted_newest_first(self.store.ads())
            .into_iter()
            .nth(index - 1)
    }

    pub fn card_for(&self, id: &str) -> Option<AdCard> {
        let index = sorted_newest_first(self.store.ads())
            .iter()
            .position(|ad| ad.id == id)?
            + 1;
        self.store.get(id).cloned().map(|ad| self.card(index, ad))
    }

    pub fn empty_message(&self) -> String {
        format!("No ads yet. Add yours for {}.", self.fee)
    }

    pub fn format_price(&self, price: f64) -> String {
        format!("{} {}", price, self.fee.currency)
    }

    fn card(&self, index: usize, ad: Ad) -> AdCard {
        AdCard {
            index,
            price: ad.price.map(|p| self.format_price(p)),
            id: ad.id,
            title: ad.title,
            description: ad.description,
            phone: ad.phone,
            created_at: ad.created_at,
        }
    }

    // --- Add-ad form ---

    /// Opens a fresh form, discarding any form that was already open.
    pub fn open_wizard(&mut self, draft: AdDraft) -> &mut Wizard {
        self.wizard.insert(Wizard::with_draft(draft, self.fee.clone()))
    }

    /// Closes the form. Nothing is committed unless payment was confirmed.
    pub fn close_wizard(&mut self) -> Option<Wizard> {
        self.wizard.take()
    }

    pub fn wizard(&self) -> Option<&Wizard> {
        self.wizard.as_ref()
    }

    pub fn wizard_mut(&mut self) -> Result<&mut Wizard> {
        self.wizard
            .as_mut()
            .ok_or_else(|| AdBoardError::Api("No ad form is open".to_string()))
    }

    pub fn submit_details(&mut self) -> Result<()> {
        self.wizard_mut()?.next()
    }

    pub fn back_to_details(&mut self) -> Result<()> {
        self.wizard_mut()?.back()
    }

    /// Simulates a successful payment and publishes the ad.
    pub fn confirm_payment(&mut self) -> Result<Ad> {
        self.confirm_payment_with(generate_id(), now_millis())
    }

    pub fn confirm_payment_with(&mut self, id: String, created_at: i64) -> Result<Ad> {
        let ad = self.wizard_mut()?.pay(id, created_at)?;
        debug!(id = %ad.id, "payment confirmed, publishing ad");
        self.store.add(ad.clone());
        Ok(ad)
    }

    // --- Delete confirmation ---

    /// Marks an ad as awaiting delete confirmation.
    pub fn request_delete(&mut self, id: &str) -> Result<&Ad> {
        let ad = self
            .store
            .get(id)
            .ok_or_else(|| AdBoardError::AdNotFound(id.to_string()))?;
        self.pending_delete = Some(ad.id.clone());
        Ok(ad)
    }

    pub fn pending_delete(&self) -> Option<&Ad> {
        self.pending_delete
            .as_deref()
            .and_then(|id| self.store.get(id))
    }

    /// Settles the pending delete. Returns the removed ad only when confirmed.
    pub fn resolve_delete(&mut self, confirmed: bool) -> Option<Ad> {
        let id = self.pending_delete.take()?;
        if !confirmed {
            debug!(id = %id, "delete declined");
            return None;
        }
        self.store.remove(&id)
    }
}
