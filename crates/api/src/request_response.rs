// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the backend
//! contract; field names serialize in the backend's camelCase convention.

use court_book::BookingOrder;
use court_book_domain::{DomainError, date_key};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The booking-creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// The backend facility identifier, when known.
    pub facility_id: Option<i64>,
    /// The stable court number (server join key).
    pub court_number: u32,
    /// The booking date, local "YYYY-MM-DD".
    pub booking_date: String,
    /// Start time, 24-hour "HH:MM".
    pub start_time: String,
    /// End time, 24-hour "HH:MM".
    pub end_time: String,
    /// Duration in minutes. Always 60.
    pub duration: u32,
    /// The charged total.
    pub total_amount: Decimal,
    /// The applied discount code, if any.
    pub discount_code: Option<String>,
    /// The applied discount amount (zero when no code).
    pub discount_amount: Decimal,
    /// Customer name.
    pub customer_name: String,
    /// Customer email.
    pub customer_email: String,
    /// Customer phone, if provided.
    pub customer_phone: Option<String>,
    /// External user identifier from an embedding app, if provided.
    pub user_id: Option<String>,
    /// Booking channel. Always "web".
    pub source: String,
}

impl CreateBookingRequest {
    /// The booking channel this client reports.
    pub const SOURCE_WEB: &'static str = "web";

    /// Maps an assembled [`BookingOrder`] onto the wire payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking date cannot be formatted.
    pub fn from_order(order: &BookingOrder) -> Result<Self, DomainError> {
        Ok(Self {
            facility_id: order.facility_id,
            court_number: order.court_number,
            booking_date: date_key(order.booking_date)?,
            start_time: order.start_time.clone(),
            end_time: order.end_time.clone(),
            duration: order.duration_minutes,
            total_amount: order.total_amount,
            discount_code: order.discount_code.clone(),
            discount_amount: order.discount_amount,
            customer_name: order.customer.name.clone(),
            customer_email: order.customer.email.clone(),
            customer_phone: order.customer.phone.clone(),
            user_id: order.customer.external_user_id.clone(),
            source: String::from(Self::SOURCE_WEB),
        })
    }
}

/// The booking-creation acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    /// The server-assigned booking identifier.
    pub booking_id: String,
}

/// A validated discount, priced by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountValidation {
    /// The concrete discount amount for the given rental.
    pub discount_amount: Decimal,
}

/// A payment intent issued by the payment collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    /// The client secret handed to the card-collection UI.
    pub client_secret: String,
    /// The intent identifier used to confirm the charge.
    pub payment_intent_id: String,
}

/// Display data for one booking in the cancellation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    /// The booking identifier.
    pub booking_id: String,
    /// The court number.
    pub court_number: u32,
    /// The booking date, "YYYY-MM-DD".
    pub booking_date: String,
    /// Start time, 24-hour "HH:MM".
    pub start_time: String,
    /// Customer name on the booking.
    pub customer_name: String,
}

/// Cancellation eligibility for one booking.
///
/// `can_cancel` is false within 24 hours of the slot start; the rule is
/// enforced server-side and merely displayed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationDetails {
    /// The booking being cancelled.
    pub booking: BookingSummary,
    /// Whether the server will accept a cancellation.
    pub can_cancel: bool,
    /// Hours until the slot starts.
    pub hours_until_booking: i64,
}
