use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A published classified listing, as persisted in the store slot.
///
/// Field names serialize in camelCase (`createdAt`) so the slot stays
/// compatible with boards saved by the browser version. A record missing a
/// field loads with it empty (or 0) instead of failing the whole slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub phone: String,
    /// Milliseconds since the Unix epoch. Only used for ordering.
    #[serde(default)]
    pub created_at: i64,
}

/// Raw form input for an ad that has not been published yet.
///
/// Values are kept exactly as typed; trimming and price parsing happen when
/// the draft is turned into an [`Ad`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub phone: String,
}

/// A single editable field of an [`AdDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Price,
    Phone,
}

impl DraftField {
    pub fn all() -> &'static [DraftField] {
        &[
            DraftField::Title,
            DraftField::Description,
            DraftField::Price,
            DraftField::Phone,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Title => "Title",
            DraftField::Description => "Description",
            DraftField::Price => "Price",
            DraftField::Phone => "Phone",
        }
    }

    /// Example input shown next to the prompt.
    pub fn hint(&self) -> &'static str {
        match self {
            DraftField::Title => "e.g. iPhone 12, like new",
            DraftField::Description => "condition, accessories, city...",
            DraftField::Price => "e.g. 3500, optional",
            DraftField::Phone => "+380 67 123 45 67",
        }
    }
}

impl AdDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price: price.into(),
            phone: phone.into(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::Price => &self.price,
            DraftField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Description => self.description = value,
            DraftField::Price => self.price = value,
            DraftField::Phone => self.phone = value,
        }
    }

    /// Parsed price, `None` when the field was left blank or is not a finite number.
    ///
    /// Whitespace-only input counts as blank (no price rather than 0), and
    /// only decimal notation parses: `0x10` is not a number here.
    pub fn parsed_price(&self) -> Option<f64> {
        let raw = self.price.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<f64>().ok().filter(|p| p.is_finite())
    }

    /// Builds the finished record. Callers validate first.
    pub fn into_ad(self, id: String, created_at: i64) -> Ad {
        let price = self.parsed_price();
        Ad {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            phone: self.phone.trim().to_string(),
            created_at,
        }
    }
}

/// Current time in epoch milliseconds, the unit stored in `createdAt`.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
