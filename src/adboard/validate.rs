//! Draft validation.
//!
//! Rules run in a fixed order and the first failure is reported:
//!
//! 1. title must be non-empty after trimming
//! 2. description must be non-empty after trimming
//! 3. price, when given, must be a finite number
//! 4. phone must contain a loose phone shape: optional `+`, a digit, then at
//!    least seven more digits, spaces, hyphens or parentheses

use crate::model::AdDraft;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?[0-9][0-9\s\-()]{7,}").expect("valid phone regex"));

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Description is required")]
    DescriptionRequired,

    #[error("Price must be a number")]
    PriceNotNumeric,

    #[error("Phone number looks invalid")]
    PhoneInvalid,
}

pub fn validate_draft(draft: &AdDraft) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if draft.description.trim().is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }
    if !draft.price.trim().is_empty() && draft.parsed_price().is_none() {
        return Err(ValidationError::PriceNotNumeric);
    }
    if !is_phone_like(&draft.phone) {
        return Err(ValidationError::PhoneInvalid);
    }
    Ok(())
}

pub fn is_phone_like(phone: &str) -> bool {
    PHONE_RE.is_match(phone.trim())
}
