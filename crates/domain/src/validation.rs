// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::FacilityConfig;

/// Validates and normalizes a customer name.
///
/// # Returns
///
/// The trimmed name.
///
/// # Errors
///
/// Returns an error if the name is empty after trimming.
pub fn validate_customer_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidCustomerName(String::from(
            "Name is required",
        )));
    }
    Ok(trimmed.to_string())
}

/// Validates and normalizes a customer email.
///
/// Enforces a basic `local@domain` shape: exactly one `@`, a non-empty
/// local part, a domain containing a dot, and no whitespace. Full RFC
/// validation belongs to the backend.
///
/// # Returns
///
/// The trimmed email.
///
/// # Errors
///
/// Returns an error if the email does not have the basic shape.
pub fn validate_customer_email(email: &str) -> Result<String, DomainError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidCustomerEmail(String::from(
            "Email is required",
        )));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidCustomerEmail(format!(
            "Email may not contain whitespace: '{trimmed}'"
        )));
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(DomainError::InvalidCustomerEmail(format!(
            "Email must contain '@': '{trimmed}'"
        )));
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err(DomainError::InvalidCustomerEmail(format!(
            "Email must look like local@domain: '{trimmed}'"
        )));
    }
    Ok(trimmed.to_string())
}

/// Normalizes an optional customer phone number.
///
/// The phone is optional; a blank value is treated as absent. No format
/// validation is applied.
#[must_use]
pub fn validate_customer_phone(phone: Option<&str>) -> Option<String> {
    phone
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
}

/// Validates a loaded facility configuration snapshot.
///
/// Deserialized snapshots bypass the smart constructors, so every invariant
/// is re-checked here before a session is allowed to start.
///
/// # Errors
///
/// Returns an error if:
/// - The slug is empty
/// - The facility has no courts, or a court number is zero
/// - The pricing configuration is malformed
///
/// Operating hours are not rejected here: a missing or inverted window
/// degrades to the hardcoded defaults at slot derivation instead.
pub fn validate_facility_config(config: &FacilityConfig) -> Result<(), DomainError> {
    if config.slug().trim().is_empty() {
        return Err(DomainError::InvalidSlug(String::from("slug is empty")));
    }
    if config.courts.is_empty() {
        return Err(DomainError::NoCourtsConfigured {
            slug: config.slug().to_string(),
        });
    }
    for court in &config.courts {
        if court.court_number() == 0 {
            return Err(DomainError::InvalidCourtNumber(0));
        }
    }
    config.pricing.validate()?;
    Ok(())
}
