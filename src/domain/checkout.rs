use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static ZIP_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("ZIP pattern compiles"));
static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(?(\d{3})\)?[-. ]?(\d{3})[-. ]?(\d{4})$").expect("phone pattern compiles"));
static CARD_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{16}$").expect("card pattern compiles"));
static EXPIRY_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").expect("expiry pattern compiles"));
static CVV: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3,4}$").expect("cvv pattern compiles"));

/// Stages of the checkout wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckoutStage {
    Address,
    Payment,
    Review,
    Submitted,
}

/// Form fields that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    StreetAddress,
    City,
    State,
    ZipCode,
    PhoneNumber,
    PaymentMethod,
    CardNumber,
    ExpiryDate,
    Cvv,
    TermsAccepted,
}

impl Field {
    /// The wizard stage on which this field is entered.
    pub fn stage(self) -> CheckoutStage {
        match self {
            Field::FullName | Field::StreetAddress | Field::City | Field::State | Field::ZipCode | Field::PhoneNumber => {
                CheckoutStage::Address
            }
            Field::PaymentMethod | Field::CardNumber | Field::ExpiryDate | Field::Cvv => CheckoutStage::Payment,
            Field::TermsAccepted => CheckoutStage::Review,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::FullName => "address.full_name",
            Field::StreetAddress => "address.street_address",
            Field::City => "address.city",
            Field::State => "address.state",
            Field::ZipCode => "address.zip_code",
            Field::PhoneNumber => "address.phone_number",
            Field::PaymentMethod => "payment.method",
            Field::CardNumber => "payment.card_number",
            Field::ExpiryDate => "payment.expiry_date",
            Field::Cvv => "payment.cvv",
            Field::TermsAccepted => "terms_accepted",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Every field-level violation found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, field: Field, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    fn extend(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn has(&self, field: Field) -> bool {
        self.message_for(field).is_some()
    }

    /// The first wizard stage that holds an error.
    pub fn earliest_stage(&self) -> Option<CheckoutStage> {
        self.0.iter().map(|e| e.field.stage()).min()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

// =============================================================================
// RAW INPUT (what the user has typed so far)
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressInput {
    pub full_name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethodKind {
    CreditCard,
    PayPal,
    CashOnDelivery,
}

impl FromStr for PaymentMethodKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creditCard" => Ok(Self::CreditCard),
            "paypal" => Ok(Self::PayPal),
            "cod" => Ok(Self::CashOnDelivery),
            other => Err(format!("Unknown payment method: {}", other)),
        }
    }
}

impl fmt::Display for PaymentMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::CreditCard => "Credit / Debit Card",
            Self::PayPal => "PayPal",
            Self::CashOnDelivery => "Cash on Delivery",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentInput {
    pub method: Option<PaymentMethodKind>,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

/// Everything entered on the checkout form, valid or not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutDraft {
    pub address: AddressInput,
    pub payment: PaymentInput,
    pub special_instructions: String,
    pub terms_accepted: bool,
}

// =============================================================================
// VALIDATED OUTPUT
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub full_name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardDetails {
    pub number: String,
    pub expiry_date: String,
    pub cvv: String,
}

/// A payment method carrying only the fields that method requires.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentDetails {
    CreditCard(CardDetails),
    PayPal,
    CashOnDelivery,
}

impl PaymentDetails {
    pub fn kind(&self) -> PaymentMethodKind {
        match self {
            PaymentDetails::CreditCard(_) => PaymentMethodKind::CreditCard,
            PaymentDetails::PayPal => PaymentMethodKind::PayPal,
            PaymentDetails::CashOnDelivery => PaymentMethodKind::CashOnDelivery,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCheckout {
    pub address: Address,
    pub payment: PaymentDetails,
    pub special_instructions: Option<String>,
}

// =============================================================================
// VALIDATION
// =============================================================================

fn require_len(errors: &mut ValidationErrors, field: Field, value: &str, min: usize, message: &'static str) {
    if value.trim().chars().count() < min {
        errors.push(field, message);
    }
}

fn require_match(errors: &mut ValidationErrors, field: Field, value: &str, pattern: &Regex, message: &'static str) {
    if !pattern.is_match(value.trim()) {
        errors.push(field, message);
    }
}

impl AddressInput {
    pub fn validate(&self) -> Result<Address, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        require_len(&mut errors, Field::FullName, &self.full_name, 2, "Full name is required");
        require_len(&mut errors, Field::StreetAddress, &self.street_address, 5, "Street address is required");
        require_len(&mut errors, Field::City, &self.city, 2, "City is required");
        require_len(&mut errors, Field::State, &self.state, 2, "State is required");
        require_match(&mut errors, Field::ZipCode, &self.zip_code, &ZIP_CODE, "Invalid ZIP code");
        require_match(&mut errors, Field::PhoneNumber, &self.phone_number, &PHONE_NUMBER, "Invalid phone number");

        errors.into_result(|| Address {
            full_name: self.full_name.trim().to_string(),
            street_address: self.street_address.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            zip_code: self.zip_code.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
        })
    }
}

impl PaymentInput {
    /// Card fields are only checked when the method is a credit card.
    pub fn validate(&self) -> Result<PaymentDetails, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let Some(method) = self.method else {
            errors.push(Field::PaymentMethod, "Please select a payment method");
            return Err(errors);
        };

        match method {
            PaymentMethodKind::PayPal => Ok(PaymentDetails::PayPal),
            PaymentMethodKind::CashOnDelivery => Ok(PaymentDetails::CashOnDelivery),
            PaymentMethodKind::CreditCard => {
                let number: String = self.card_number.chars().filter(|c| !c.is_whitespace()).collect();
                require_match(&mut errors, Field::CardNumber, &number, &CARD_NUMBER, "Card number must be 16 digits");
                require_match(&mut errors, Field::ExpiryDate, &self.expiry_date, &EXPIRY_DATE, "Expiry date must be MM/YY");
                require_match(&mut errors, Field::Cvv, &self.cvv, &CVV, "CVV must be 3 or 4 digits");
                errors.into_result(|| {
                    PaymentDetails::CreditCard(CardDetails {
                        number,
                        expiry_date: self.expiry_date.trim().to_string(),
                        cvv: self.cvv.trim().to_string(),
                    })
                })
            }
        }
    }
}

pub fn validate_terms(accepted: bool) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if !accepted {
        errors.push(Field::TermsAccepted, "You must accept the terms and conditions");
    }
    errors.into_result(|| ())
}

impl CheckoutDraft {
    /// Validates the whole form. Either every field passes or nothing is returned.
    pub fn validate(&self) -> Result<ValidatedCheckout, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let address = self.address.validate().map_err(|e| errors.extend(e)).ok();
        let payment = self.payment.validate().map_err(|e| errors.extend(e)).ok();
        if let Err(e) = validate_terms(self.terms_accepted) {
            errors.extend(e);
        }

        match (address, payment) {
            (Some(address), Some(payment)) if errors.is_empty() => {
                let instructions = self.special_instructions.trim();
                Ok(ValidatedCheckout {
                    address,
                    payment,
                    special_instructions: (!instructions.is_empty()).then(|| instructions.to_string()),
                })
            }
            _ => Err(errors),
        }
    }

    /// Validates only the section entered on `stage`.
    pub fn validate_stage(&self, stage: CheckoutStage) -> Result<(), ValidationErrors> {
        match stage {
            CheckoutStage::Address => self.address.validate().map(|_| ()),
            CheckoutStage::Payment => self.payment.validate().map(|_| ()),
            CheckoutStage::Review => validate_terms(self.terms_accepted),
            CheckoutStage::Submitted => Ok(()),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn valid_address() -> AddressInput {
        AddressInput {
            full_name: "John Doe".into(),
            street_address: "123 Main St".into(),
            city: "Anytown".into(),
            state: "NY".into(),
            zip_code: "12345".into(),
            phone_number: "(555) 123-4567".into(),
        }
    }

    pub(crate) fn valid_draft(method: PaymentMethodKind) -> CheckoutDraft {
        CheckoutDraft {
            address: valid_address(),
            payment: PaymentInput { method: Some(method), ..Default::default() },
            special_instructions: String::new(),
            terms_accepted: true,
        }
    }

    #[test]
    fn blank_address_reports_every_field() {
        let errors = AddressInput::default().validate().unwrap_err();
        for field in [Field::FullName, Field::StreetAddress, Field::City, Field::State, Field::ZipCode, Field::PhoneNumber] {
            assert!(errors.has(field), "missing error for {}", field);
        }
        assert_eq!(errors.earliest_stage(), Some(CheckoutStage::Address));

        let padded = AddressInput {
            full_name: "    ".into(),
            street_address: "  \t  ".into(),
            city: " a ".into(),
            ..valid_address()
        };
        let errors = padded.validate().unwrap_err();
        assert_eq!(errors.message_for(Field::FullName), Some("Full name is required"));
        assert!(errors.has(Field::StreetAddress));
        assert!(errors.has(Field::City));
        assert!(!errors.has(Field::State));
    }

    #[test]
    fn zip_and_phone_formats() {
        let mut address = valid_address();
        for zip in ["12345", "12345-6789"] {
            address.zip_code = zip.into();
            assert!(address.validate().is_ok(), "{} should pass", zip);
        }
        address.zip_code = "1234".into();
        assert_eq!(address.validate().unwrap_err().message_for(Field::ZipCode), Some("Invalid ZIP code"));

        let mut address = valid_address();
        for phone in ["555-123-4567", "555.123.4567", "5551234567", "(555)123-4567"] {
            address.phone_number = phone.into();
            assert!(address.validate().is_ok(), "{} should pass", phone);
        }
        address.phone_number = "555-1234".into();
        assert!(address.validate().unwrap_err().has(Field::PhoneNumber));
    }

    #[test]
    fn cash_on_delivery_needs_no_card() {
        let checkout = valid_draft(PaymentMethodKind::CashOnDelivery).validate().unwrap();
        assert_eq!(checkout.payment, PaymentDetails::CashOnDelivery);

        let checkout = valid_draft(PaymentMethodKind::PayPal).validate().unwrap();
        assert_eq!(checkout.payment.kind(), PaymentMethodKind::PayPal);
    }

    #[test]
    fn fifteen_digit_card_is_rejected_on_card_field() {
        let mut draft = valid_draft(PaymentMethodKind::CreditCard);
        draft.payment.card_number = "411111111111111".into();
        draft.payment.expiry_date = "12/27".into();
        draft.payment.cvv = "123".into();

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.message_for(Field::CardNumber), Some("Card number must be 16 digits"));
        assert!(!errors.has(Field::ExpiryDate));
        assert!(!errors.has(Field::Cvv));
    }

    #[test]
    fn valid_card_is_accepted() {
        let mut draft = valid_draft(PaymentMethodKind::CreditCard);
        draft.payment.card_number = "4111 1111 1111 1111".into();
        draft.payment.expiry_date = "09/28".into();
        draft.payment.cvv = "1234".into();

        match draft.validate().unwrap().payment {
            PaymentDetails::CreditCard(card) => assert_eq!(card.number, "4111111111111111"),
            other => panic!("unexpected payment: {:?}", other),
        }
    }

    #[test]
    fn bad_expiry_and_cvv() {
        let mut payment = PaymentInput {
            method: Some(PaymentMethodKind::CreditCard),
            card_number: "4111111111111111".into(),
            expiry_date: "13/27".into(),
            cvv: "12".into(),
        };
        let errors = payment.validate().unwrap_err();
        assert!(errors.has(Field::ExpiryDate));
        assert!(errors.has(Field::Cvv));

        payment.expiry_date = "00/27".into();
        assert!(payment.validate().unwrap_err().has(Field::ExpiryDate));
    }

    #[test]
    fn missing_method_and_terms() {
        let mut draft = valid_draft(PaymentMethodKind::PayPal);
        draft.payment.method = None;
        draft.terms_accepted = false;

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.message_for(Field::PaymentMethod), Some("Please select a payment method"));
        assert_eq!(errors.message_for(Field::TermsAccepted), Some("You must accept the terms and conditions"));
        assert_eq!(errors.earliest_stage(), Some(CheckoutStage::Payment));
    }

    #[test]
    fn instructions_are_optional_and_trimmed() {
        let mut draft = valid_draft(PaymentMethodKind::CashOnDelivery);
        assert_eq!(draft.validate().unwrap().special_instructions, None);

        draft.special_instructions = "  call upon arrival ".into();
        assert_eq!(draft.validate().unwrap().special_instructions.as_deref(), Some("call upon arrival"));
    }

    #[test]
    fn payment_method_parses_form_values() {
        assert_eq!("cod".parse::<PaymentMethodKind>(), Ok(PaymentMethodKind::CashOnDelivery));
        assert_eq!("creditCard".parse::<PaymentMethodKind>(), Ok(PaymentMethodKind::CreditCard));
        assert!("bitcoin".parse::<PaymentMethodKind>().is_err());
    }
}
