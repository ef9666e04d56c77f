//! Guest detail validation for the booking form.
//!
//! All violations are collected into one field→message map and the
//! submission is rejected whole; there is no partial acceptance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

/// Raw guest-supplied form fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestDetailsInput {
    /// Guest full name.
    pub guest_name: String,
    /// Guest email address.
    pub guest_email: String,
    /// Guest phone / WhatsApp number.
    pub guest_phone: String,
    /// Optional free-text special request.
    pub special_requests: Option<String>,
}

/// Validated, trimmed guest details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestDetails {
    /// Trimmed guest name.
    pub guest_name: String,
    /// Trimmed guest email.
    pub guest_email: String,
    /// Trimmed guest phone.
    pub guest_phone: String,
    /// Trimmed special request, `None` when blank.
    pub special_requests: Option<String>,
}

/// Field→message map surfaced next to the offending inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Record an error for a field. The first message per field wins.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    /// Whether any field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the message for a field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Validate and normalize the guest details.
pub fn validate_details(input: &GuestDetailsInput) -> Result<GuestDetails, FieldErrors> {
    let mut errors = FieldErrors::default();

    let guest_name = input.guest_name.trim();
    if guest_name.chars().count() < 2 {
        errors.insert("guest_name", "Name must be at least 2 characters");
    } else if guest_name.chars().count() > 100 {
        errors.insert("guest_name", "Name must be less than 100 characters");
    }

    let guest_email = input.guest_email.trim();
    if guest_email.chars().count() > 255 {
        errors.insert("guest_email", "Email must be less than 255 characters");
    } else if !guest_email.validate_email() {
        errors.insert("guest_email", "Invalid email address");
    }

    let guest_phone = input.guest_phone.trim();
    if guest_phone.chars().count() < 10 {
        errors.insert("guest_phone", "Phone must be at least 10 digits");
    } else if guest_phone.chars().count() > 20 {
        errors.insert("guest_phone", "Phone must be less than 20 characters");
    }

    let special_requests = input
        .special_requests
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    if let Some(requests) = special_requests
        && requests.chars().count() > 500
    {
        errors.insert(
            "special_requests",
            "Special requests must be less than 500 characters",
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(GuestDetails {
        guest_name: guest_name.to_string(),
        guest_email: guest_email.to_string(),
        guest_phone: guest_phone.to_string(),
        special_requests: special_requests.map(String::from),
    })
}
