//! # Ad Form Wizard
//!
//! Publishing an ad is a three-step flow modeled as a plain state machine:
//!
//! ```text
//!   Details ──next (valid)──▶ Payment ──pay──▶ Done
//!      ▲                         │
//!      └──────────back───────────┘
//! ```
//!
//! - **Details** collects the draft fields. `next` runs the validator; a
//!   failure keeps the wizard here and records the error for display.
//! - **Payment** shows the flat fee. `pay` simulates a successful charge,
//!   stamps the draft and yields the finished [`Ad`]. `back` returns to
//!   Details with every field intact.
//! - **Done** is terminal.
//!
//! The wizard never touches the store. The caller receives the ad from `pay`
//! and hands it over, so exactly one ad comes out of a successful run.
//! Cancelling is simply dropping the wizard.

use crate::error::{AdBoardError, Result};
use crate::model::{Ad, AdDraft, DraftField};
use crate::validate::{validate_draft, ValidationError};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Details,
    Payment,
    Done,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Details => "details",
            Step::Payment => "payment",
            Step::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// The flat publication fee shown on the payment step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fee {
    pub amount: u32,
    pub currency: String,
}

impl Fee {
    pub fn new(amount: u32, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

impl Default for Fee {
    fn default() -> Self {
        Self::new(20, "₴")
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    draft: AdDraft,
    error: Option<ValidationError>,
    fee: Fee,
}

impl Wizard {
    pub fn new(fee: Fee) -> Self {
        Self::with_draft(AdDraft::default(), fee)
    }

    /// Starts at the details step with pre-filled fields.
    pub fn with_draft(draft: AdDraft, fee: Fee) -> Self {
        Self {
            step: Step::Details,
            draft,
            error: None,
            fee,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &AdDraft {
        &self.draft
    }

    /// The error from the last failed `next`, cleared once details pass.
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn fee(&self) -> &Fee {
        &self.fee
    }

    pub fn is_done(&self) -> bool {
        self.step == Step::Done
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) -> Result<()> {
        self.require(Step::Details, "edit fields")?;
        self.draft.set(field, value);
        Ok(())
    }

    /// Details → Payment, gated by the validator.
    pub fn next(&mut self) -> Result<()> {
        self.require(Step::Details, "continue to payment")?;
        match validate_draft(&self.draft) {
            Ok(()) => {
                self.error = None;
                self.step = Step::Payment;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e);
                Err(AdBoardError::Validation(e))
            }
        }
    }

    /// Payment → Details, keeping the entered values.
    pub fn back(&mut self) -> Result<()> {
        self.require(Step::Payment, "go back")?;
        self.step = Step::Details;
        Ok(())
    }

    /// Payment → Done. Simulates a successful charge and returns the finished ad.
    pub fn pay(&mut self, id: String, created_at: i64) -> Result<Ad> {
        self.require(Step::Payment, "pay")?;
        let ad = self.draft.clone().into_ad(id, created_at);
        self.step = Step::Done;
        Ok(ad)
    }

    fn require(&self, step: Step, action: &'static str) -> Result<()> {
        if self.step != step {
            return Err(AdBoardError::InvalidTransition {
                step: self.step,
                action,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Wizard {
        Wizard::with_draft(
            AdDraft::new("Bike", "Red bike, great shape", "1500", "+380671234567"),
            Fee::default(),
        )
    }

    #[test]
    fn starts_at_details_without_error() {
        let wizard = Wizard::new(Fee::default());
        assert_eq!(wizard.step(), Step::Details);
        assert!(wizard.error().is_none());
        assert_eq!(wizard.draft(), &AdDraft::default());
    }

    #[test]
    fn invalid_details_stay_put_and_record_error() {
        let mut wizard = Wizard::new(Fee::default());
        let result = wizard.next();

        assert!(matches!(
            result,
            Err(AdBoardError::Validation(ValidationError::TitleRequired))
        ));
        assert_eq!(wizard.step(), Step::Details);
        assert_eq!(wizard.error(), Some(ValidationError::TitleRequired));
    }

    #[test]
    fn fixing_input_clears_error_and_advances() {
        let mut wizard = Wizard::new(Fee::default());
        let _ = wizard.next();

        wizard.set_field(DraftField::Title, "Bike").unwrap();
        wizard.set_field(DraftField::Description, "Red").unwrap();
        wizard.set_field(DraftField::Phone, "+380671234567").unwrap();
        wizard.next().unwrap();

        assert_eq!(wizard.step(), Step::Payment);
        assert!(wizard.error().is_none());
    }

    #[test]
    fn back_keeps_field_values() {
        let mut wizard = filled();
        wizard.next().unwrap();
        wizard.back().unwrap();

        assert_eq!(wizard.step(), Step::Details);
        assert_eq!(wizard.draft().title, "Bike");
        assert_eq!(wizard.draft().price, "1500");
    }

    #[test]
    fn pay_builds_trimmed_ad_and_finishes() {
        let mut wizard = Wizard::with_draft(
            AdDraft::new(" Bike ", " Red ", "", " +380671234567 "),
            Fee::default(),
        );
        wizard.next().unwrap();
        let ad = wizard.pay("id1".into(), 99).unwrap();

        assert_eq!(ad.id, "id1");
        assert_eq!(ad.title, "Bike");
        assert_eq!(ad.price, None);
        assert_eq!(ad.created_at, 99);
        assert!(wizard.is_done());
    }

    #[test]
    fn pay_requires_payment_step() {
        let mut wizard = filled();
        let result = wizard.pay("id".into(), 1);
        assert!(matches!(
            result,
            Err(AdBoardError::InvalidTransition {
                step: Step::Details,
                ..
            })
        ));
        assert_eq!(wizard.step(), Step::Details);
    }

    #[test]
    fn done_is_terminal() {
        let mut wizard = filled();
        wizard.next().unwrap();
        wizard.pay("id".into(), 1).unwrap();

        assert!(wizard.pay("again".into(), 2).is_err());
        assert!(wizard.back().is_err());
        assert!(wizard.next().is_err());
        assert!(wizard.set_field(DraftField::Title, "x").is_err());
        assert_eq!(wizard.step(), Step::Done);
    }

    #[test]
    fn fields_are_locked_during_payment() {
        let mut wizard = filled();
        wizard.next().unwrap();
        assert!(wizard.set_field(DraftField::Price, "1").is_err());
        assert_eq!(wizard.draft().price, "1500");
    }

    #[test]
    fn transition_error_names_step_and_action() {
        let mut wizard = filled();
        let err = wizard.back().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot go back while the form is at the details step"
        );
    }

    #[test]
    fn fee_display() {
        assert_eq!(Fee::default().to_string(), "20 ₴");
        assert_eq!(Fee::new(5, "USD").to_string(), "5 USD");
    }
}
