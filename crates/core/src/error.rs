// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::BookingStep;
use court_book_domain::DomainError;

/// A local validation failure on one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field key (e.g., "customerName", "customerEmail", "submit").
    pub field: String,
    /// The user-facing message.
    pub message: String,
}

impl FieldError {
    /// Creates a new `FieldError`.
    #[must_use]
    pub const fn new(field: String, message: String) -> Self {
        Self { field, message }
    }
}

/// Errors that can occur during session state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The command is not valid in the session's current step.
    InvalidTransition {
        /// The step the session was in.
        from: BookingStep,
        /// The command that was attempted.
        command: &'static str,
    },
    /// The picked slot is not bookable on the current grid snapshot.
    SlotUnavailable {
        /// The court number.
        court_number: u32,
        /// The 24-hour start time.
        start_24: String,
    },
    /// The picked slot starts within the past buffer.
    SlotInPast {
        /// The 24-hour start time.
        start_24: String,
    },
    /// A discount has already been applied in this session.
    DiscountAlreadyApplied,
    /// The discount code is empty after trimming.
    EmptyDiscountCode,
    /// Required form fields failed local validation.
    InvalidDetails {
        /// The failing fields, keyed for the session error map.
        errors: Vec<FieldError>,
    },
    /// No slot has been selected yet.
    MissingSlotSelection,
    /// No booking identifier is stored on the session.
    MissingBookingId,
    /// No payment intent is stored on the session.
    MissingPaymentIntent,
    /// A payment intent was already requested for this session.
    PaymentIntentExists,
    /// The session's price breakdown failed its consistency check.
    InconsistentBreakdown,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidTransition { from, command } => {
                write!(f, "Cannot apply {command} from step {from}")
            }
            Self::SlotUnavailable {
                court_number,
                start_24,
            } => {
                write!(
                    f,
                    "This slot is not available: court {court_number} at {start_24}"
                )
            }
            Self::SlotInPast { start_24 } => {
                write!(f, "This time slot has already passed: {start_24}")
            }
            Self::DiscountAlreadyApplied => {
                write!(f, "A discount code has already been applied")
            }
            Self::EmptyDiscountCode => write!(f, "Please enter a discount code"),
            Self::InvalidDetails { errors } => {
                write!(f, "Invalid booking details ({} field(s))", errors.len())
            }
            Self::MissingSlotSelection => write!(f, "No time slot has been selected"),
            Self::MissingBookingId => write!(f, "No booking has been created yet"),
            Self::MissingPaymentIntent => write!(f, "No payment intent has been created yet"),
            Self::PaymentIntentExists => {
                write!(f, "A payment intent was already created for this session")
            }
            Self::InconsistentBreakdown => {
                write!(f, "The price breakdown failed its consistency check")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
