// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::{CoreError, FieldError};
pub use state::{
    BookingOrder, BookingSession, BookingStep, CustomerDetails, DiscountState, SessionEvent,
    TransitionResult,
};

/// Validates a discount application attempt before any network call.
///
/// This is a read-only guard: once a code has been successfully applied the
/// code field is immutable, and a second attempt must be rejected
/// client-side without reaching the validation endpoint (the backend may
/// not be idempotent for repeated application of the same code).
///
/// # Arguments
///
/// * `session` - The current booking session
/// * `code` - The raw code as entered
///
/// # Returns
///
/// The trimmed code, ready to send to the validation endpoint.
///
/// # Errors
///
/// Returns an error if:
/// - The code is empty after trimming
/// - A discount has already been applied in this session
pub fn validate_discount_attempt(
    session: &BookingSession,
    code: &str,
) -> Result<String, CoreError> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyDiscountCode);
    }
    if session.discount.is_applied() {
        return Err(CoreError::DiscountAlreadyApplied);
    }
    Ok(trimmed.to_string())
}
