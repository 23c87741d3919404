use tracing::debug;

use crate::domain::{CheckoutDraft, CheckoutStage, ValidatedCheckout, ValidationErrors};
use super::error::CheckoutError;

/// State of one checkout wizard: `Address → Payment → Review → Submitted`.
///
/// Entered values live in a single draft, so moving between stages never
/// loses data. Validation failures keep the wizard on the failing stage.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    stage: CheckoutStage,
    draft: CheckoutDraft,
    errors: ValidationErrors,
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutSession {
    pub fn new() -> Self {
        Self {
            stage: CheckoutStage::Address,
            draft: CheckoutDraft::default(),
            errors: ValidationErrors::default(),
        }
    }

    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    pub fn draft(&self) -> &CheckoutDraft {
        &self.draft
    }

    /// Field errors from the most recent validation.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Edits the draft. Rejected once the form has been submitted.
    pub fn edit(&mut self, update: impl FnOnce(&mut CheckoutDraft)) -> Result<(), CheckoutError> {
        if self.stage == CheckoutStage::Submitted {
            return Err(CheckoutError::AlreadySubmitted);
        }
        update(&mut self.draft);
        Ok(())
    }

    /// Validates the current stage and moves to the next one.
    ///
    /// `Review` is the last stage reachable this way; use [`submit`](Self::submit) from there.
    pub fn advance(&mut self) -> Result<CheckoutStage, CheckoutError> {
        let next = match self.stage {
            CheckoutStage::Address => CheckoutStage::Payment,
            CheckoutStage::Payment => CheckoutStage::Review,
            CheckoutStage::Review => return Ok(CheckoutStage::Review),
            CheckoutStage::Submitted => return Err(CheckoutError::AlreadySubmitted),
        };

        if let Err(errors) = self.draft.validate_stage(self.stage) {
            debug!(stage = ?self.stage, errors = errors.0.len(), "Stage validation failed");
            self.errors = errors.clone();
            return Err(CheckoutError::Validation(errors));
        }

        self.errors = ValidationErrors::default();
        self.stage = next;
        Ok(next)
    }

    /// Returns to the previous stage, keeping every entered value.
    pub fn back(&mut self) -> CheckoutStage {
        self.stage = match self.stage {
            CheckoutStage::Payment => CheckoutStage::Address,
            CheckoutStage::Review => CheckoutStage::Payment,
            other => other,
        };
        self.stage
    }

    /// Validates the whole form. All or nothing.
    ///
    /// On failure the wizard moves back to the earliest failing stage (it
    /// never moves forward) and records the field errors.
    pub fn submit(&mut self) -> Result<ValidatedCheckout, CheckoutError> {
        if self.stage == CheckoutStage::Submitted {
            return Err(CheckoutError::AlreadySubmitted);
        }

        match self.draft.validate() {
            Ok(checkout) => {
                self.errors = ValidationErrors::default();
                self.stage = CheckoutStage::Submitted;
                Ok(checkout)
            }
            Err(errors) => {
                if let Some(failing) = errors.earliest_stage() {
                    self.stage = self.stage.min(failing);
                }
                self.errors = errors.clone();
                Err(CheckoutError::Validation(errors))
            }
        }
    }

    /// Unlocks a submitted form whose submission was cancelled.
    pub fn reopen(&mut self) {
        if self.stage == CheckoutStage::Submitted {
            self.stage = CheckoutStage::Review;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::tests::{valid_address, valid_draft};
    use crate::domain::{Field, PaymentMethodKind};

    #[test]
    fn blank_address_blocks_advance_and_submit() {
        let mut session = CheckoutSession::new();

        let err = session.advance().unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(_)));
        assert_eq!(session.stage(), CheckoutStage::Address);
        assert!(session.errors().has(Field::FullName));

        assert!(session.submit().is_err());
        assert_eq!(session.stage(), CheckoutStage::Address);
    }

    #[test]
    fn walks_all_stages_to_submitted() {
        let mut session = CheckoutSession::new();
        session.edit(|d| d.address = valid_address()).unwrap();
        assert_eq!(session.advance().unwrap(), CheckoutStage::Payment);

        session.edit(|d| d.payment.method = Some(PaymentMethodKind::CashOnDelivery)).unwrap();
        assert_eq!(session.advance().unwrap(), CheckoutStage::Review);
        assert_eq!(session.advance().unwrap(), CheckoutStage::Review);

        session.edit(|d| d.terms_accepted = true).unwrap();
        let checkout = session.submit().unwrap();
        assert_eq!(checkout.payment.kind(), PaymentMethodKind::CashOnDelivery);
        assert_eq!(session.stage(), CheckoutStage::Submitted);

        assert_eq!(session.edit(|d| d.terms_accepted = false), Err(CheckoutError::AlreadySubmitted));
        assert_eq!(session.submit(), Err(CheckoutError::AlreadySubmitted));
    }

    #[test]
    fn back_preserves_entered_values() {
        let mut session = CheckoutSession::new();
        session.edit(|d| d.address = valid_address()).unwrap();
        session.advance().unwrap();
        session.edit(|d| d.payment.card_number = "4111".into()).unwrap();

        assert_eq!(session.back(), CheckoutStage::Address);
        assert_eq!(session.back(), CheckoutStage::Address);
        assert_eq!(session.draft().address, valid_address());
        assert_eq!(session.draft().payment.card_number, "4111");
    }

    #[test]
    fn submit_from_review_with_bad_card_returns_to_payment() {
        let mut session = CheckoutSession::new();
        session.edit(|d| *d = valid_draft(PaymentMethodKind::CashOnDelivery)).unwrap();
        session.advance().unwrap();
        session.advance().unwrap();
        assert_eq!(session.stage(), CheckoutStage::Review);

        session
            .edit(|d| {
                d.payment.method = Some(PaymentMethodKind::CreditCard);
                d.payment.card_number = "411111111111111".into();
                d.payment.expiry_date = "12/27".into();
                d.payment.cvv = "123".into();
            })
            .unwrap();
        assert!(session.submit().is_err());
        assert_eq!(session.stage(), CheckoutStage::Payment);
        assert!(session.errors().has(Field::CardNumber));
    }

    #[test]
    fn submit_from_address_with_later_errors_does_not_advance() {
        let mut session = CheckoutSession::new();
        session.edit(|d| d.address = valid_address()).unwrap();

        assert!(session.submit().is_err());
        assert_eq!(session.stage(), CheckoutStage::Address);
        assert!(session.errors().has(Field::PaymentMethod));
        assert!(session.errors().has(Field::TermsAccepted));
    }

    #[test]
    fn reopen_after_submission() {
        let mut session = CheckoutSession::new();
        session.edit(|d| *d = valid_draft(PaymentMethodKind::PayPal)).unwrap();
        session.submit().unwrap();

        session.reopen();
        assert_eq!(session.stage(), CheckoutStage::Review);
        assert!(session.edit(|d| d.special_instructions = "ring twice".into()).is_ok());
    }
}
