//! Client-side validation for the booking and site-visit forms.
//!
//! Forms hold the raw text exactly as typed; converting one into a wire
//! payload runs the checks and produces the payload only when all pass.

use chrono::{DateTime, Utc};

use crate::gateway::{RemoteCause, RemoteError};
use crate::models::{BookingRequest, SiteVisitRequest, UserSession};

/// A form field failed validation. Display strings are the exact sentences
/// shown under the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Initial payment must be a valid number")]
    InvalidPayment,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Guest users must provide Name and Email")]
    MissingGuestContact,
    #[error("Date must be in future")]
    VisitDateNotFuture,
}

impl From<ValidationError> for RemoteError {
    fn from(err: ValidationError) -> Self {
        RemoteError::new(RemoteCause::Message(err.to_string()))
    }
}

/// Raw purchase-booking form state, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    /// Payment amount as typed; parsed and checked on submit.
    pub initial_payment: String,
}

impl BookingForm {
    /// Validate and convert into the wire payload.
    ///
    /// With a session the guest contact fields are ignored and the booking
    /// is tied to the account. Without one, name and email are required and
    /// the email must look like an address. The payment must parse to a
    /// finite number greater than zero in both cases.
    pub fn into_request(
        self,
        session: Option<&UserSession>,
        property_id: &str,
    ) -> Result<BookingRequest, ValidationError> {
        let (user_id, name, email) = split_identity(session, self.name, self.email)?;
        let initial_payment = parse_payment(&self.initial_payment)?;

        Ok(BookingRequest {
            user_id,
            name,
            email,
            property_id: property_id.to_string(),
            initial_payment: Some(initial_payment),
        })
    }
}

/// Raw site-visit form state.
#[derive(Debug, Clone)]
pub struct VisitForm {
    pub name: String,
    pub email: String,
    /// Requested slot; must lie in the future at submit time.
    pub visit_date: DateTime<Utc>,
}

impl VisitForm {
    /// Validate and convert into the wire payload.
    ///
    /// Identity rules match [`BookingForm::into_request`]; additionally the
    /// visit date has to be strictly in the future at the time of the call.
    pub fn into_request(
        self,
        session: Option<&UserSession>,
        property_id: &str,
    ) -> Result<SiteVisitRequest, ValidationError> {
        let (user_id, name, email) = split_identity(session, self.name, self.email)?;

        if self.visit_date <= Utc::now() {
            return Err(ValidationError::VisitDateNotFuture);
        }

        Ok(SiteVisitRequest {
            user_id,
            name,
            email,
            property_id: property_id.to_string(),
            visit_date: self.visit_date,
        })
    }
}

/// Split a submission into account and guest identity fields.
///
/// Checks run in a fixed order: guest contact presence, then email shape.
/// Sessions short-circuit both.
fn split_identity(
    session: Option<&UserSession>,
    name: String,
    email: String,
) -> Result<(Option<String>, Option<String>, Option<String>), ValidationError> {
    if let Some(user) = session {
        return Ok((Some(user.user_id.clone()), None, None));
    }

    if name.is_empty() || email.is_empty() {
        return Err(ValidationError::MissingGuestContact);
    }
    if !looks_like_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok((None, Some(name), Some(email)))
}

fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn parse_payment(raw: &str) -> Result<f64, ValidationError> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidPayment)?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::InvalidPayment);
    }

    Ok(amount)
}
