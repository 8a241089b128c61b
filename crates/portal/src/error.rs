// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use court_book::CoreError;
use court_book_api::{ApiError, translate_core_error};
use court_book_domain::DomainError;

/// Errors surfaced by the booking portal driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalError {
    /// An API-boundary error (validation, network, conflict, config).
    Api(ApiError),
    /// The action is already in flight and was rejected locally.
    Busy {
        /// The guarded action.
        action: &'static str,
    },
}

impl std::fmt::Display for PortalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api(err) => write!(f, "{err}"),
            Self::Busy { action } => {
                write!(f, "A {action} request is already in progress")
            }
        }
    }
}

impl std::error::Error for PortalError {}

impl From<ApiError> for PortalError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

impl From<CoreError> for PortalError {
    fn from(err: CoreError) -> Self {
        Self::Api(translate_core_error(err))
    }
}

impl From<DomainError> for PortalError {
    fn from(err: DomainError) -> Self {
        Self::Api(court_book_api::translate_domain_error(err))
    }
}
