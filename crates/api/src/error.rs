// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error taxonomy for the API boundary.

use crate::backend::BackendError;
use court_book::CoreError;
use court_book_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent how a failure
/// is surfaced to the customer:
/// - Validation errors resolve in place and never reach the network
/// - Network and conflict errors keep the user on the same step with a
///   retry path
/// - Config errors are fatal to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A local form or selection check failed.
    Validation {
        /// The field the error is keyed under.
        field: String,
        /// A user-facing description.
        message: String,
    },
    /// The transport failed or the server refused the request.
    Network {
        /// The message surfaced to the user, as supplied or a fallback.
        message: String,
    },
    /// The slot was taken between the availability read and the booking
    /// request.
    Conflict {
        /// The server's conflict message.
        message: String,
    },
    /// The facility configuration is missing or malformed. Fatal: blocks
    /// progress past slot selection.
    Config {
        /// A description of the configuration problem.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal invariant was violated.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Network { message } => write!(f, "Network error: {message}"),
            Self::Conflict { message } => write!(f, "Booking conflict: {message}"),
            Self::Config { message } => write!(f, "Facility configuration error: {message}"),
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into the API taxonomy.
#[must_use]
pub fn translate_domain_error(error: DomainError) -> ApiError {
    match error {
        DomainError::InvalidPricingConfig { .. } => ApiError::Config {
            message: error.to_string(),
        },
        DomainError::InvalidCustomerName(_) => ApiError::Validation {
            field: String::from("customerName"),
            message: error.to_string(),
        },
        DomainError::InvalidCustomerEmail(_) => ApiError::Validation {
            field: String::from("customerEmail"),
            message: error.to_string(),
        },
        DomainError::CourtNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Court"),
            message: error.to_string(),
        },
        _ => ApiError::Internal {
            message: error.to_string(),
        },
    }
}

/// Translates a core state-machine error into the API taxonomy.
#[must_use]
pub fn translate_core_error(error: CoreError) -> ApiError {
    match error {
        CoreError::DomainViolation(domain_error) => translate_domain_error(domain_error),
        CoreError::SlotUnavailable { .. } | CoreError::SlotInPast { .. } => ApiError::Validation {
            field: String::from("slot"),
            message: error.to_string(),
        },
        CoreError::DiscountAlreadyApplied | CoreError::EmptyDiscountCode => ApiError::Validation {
            field: String::from("discount"),
            message: error.to_string(),
        },
        CoreError::InvalidDetails { ref errors } => {
            let message = errors
                .first()
                .map_or_else(|| error.to_string(), |e| e.message.clone());
            ApiError::Validation {
                field: errors
                    .first()
                    .map_or_else(|| String::from("form"), |e| e.field.clone()),
                message,
            }
        }
        CoreError::InvalidTransition { .. }
        | CoreError::MissingSlotSelection
        | CoreError::MissingBookingId
        | CoreError::MissingPaymentIntent
        | CoreError::PaymentIntentExists
        | CoreError::InconsistentBreakdown => ApiError::Internal {
            message: error.to_string(),
        },
    }
}

/// Translates a backend transport failure into the API taxonomy.
///
/// Every rejected future is recoverable; conflicts keep their identity so
/// the caller can suggest a refresh.
#[must_use]
pub fn translate_backend_error(error: BackendError) -> ApiError {
    match error {
        BackendError::Network { message } | BackendError::Rejected { message } => {
            ApiError::Network { message }
        }
        BackendError::Conflict { message } => ApiError::Conflict { message },
    }
}
