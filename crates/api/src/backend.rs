// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The consumed backend contract.
//!
//! All availability truth and booking persistence live server-side. This
//! trait is the seam the transport layer implements; the portal consumes it
//! and never talks to the network directly. Test doubles implement it with
//! scripted responses.

use crate::request_response::{
    CancellationDetails, CreateBookingRequest, CreateBookingResponse, DiscountValidation,
    PaymentIntent,
};
use court_book_domain::{AvailabilityGrid, FacilityConfig};
use rust_decimal::Decimal;
use thiserror::Error;

/// Transport-level failures reported by a backend implementation.
///
/// Timeouts and retries belong to the transport; the portal treats every
/// variant uniformly as a recoverable error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The request never completed (connection failure, timeout).
    #[error("Network error: {message}")]
    Network {
        /// The transport's failure message.
        message: String,
    },
    /// The server processed and refused the request.
    #[error("{message}")]
    Rejected {
        /// The server's refusal message.
        message: String,
    },
    /// The slot was taken between the availability read and this request.
    #[error("Slot conflict: {message}")]
    Conflict {
        /// The server's conflict message.
        message: String,
    },
}

/// The external operations this core consumes.
///
/// The `date` argument of [`BookingBackend::get_availability`] is the
/// **local** calendar date formatted "YYYY-MM-DD" — the same wall clock
/// that drives weekday selection and the past rule. Deriving it from a
/// UTC-shifted timestamp would fetch the wrong day near midnight.
#[allow(async_fn_in_trait)]
pub trait BookingBackend {
    /// Loads the tenant configuration. Called once per slug.
    async fn get_facility(&self, slug: &str) -> Result<FacilityConfig, BackendError>;

    /// Fetches the authoritative availability snapshot for one day.
    async fn get_availability(
        &self,
        slug: &str,
        date: &str,
    ) -> Result<AvailabilityGrid, BackendError>;

    /// Validates a discount code against the current rental amount.
    async fn apply_discount(
        &self,
        slug: &str,
        code: &str,
        base_amount: Decimal,
    ) -> Result<DiscountValidation, BackendError>;

    /// Creates the booking. The server rejects conflicting requests; no
    /// client-side double-booking prevention exists.
    async fn create_booking(
        &self,
        slug: &str,
        request: CreateBookingRequest,
    ) -> Result<CreateBookingResponse, BackendError>;

    /// Requests a payment intent sized in minor units.
    async fn create_payment_intent(
        &self,
        amount_minor_units: i64,
        currency: &str,
    ) -> Result<PaymentIntent, BackendError>;

    /// Confirms the charge against a created booking. Triggers the
    /// server-side receipt email; an email failure must not be treated as
    /// booking loss by callers.
    async fn confirm_payment(
        &self,
        booking_id: &str,
        payment_intent_id: &str,
    ) -> Result<(), BackendError>;

    /// Loads cancellation eligibility for a booking. The 24-hour rule is
    /// enforced server-side; `can_cancel` is display data here.
    async fn get_cancellation_details(
        &self,
        booking_id: &str,
    ) -> Result<CancellationDetails, BackendError>;

    /// Cancels a booking.
    async fn cancel_booking(&self, booking_id: &str) -> Result<(), BackendError>;
}
