// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::CustomerDetails;
use court_book_domain::TimeSlot;
use rust_decimal::Decimal;
use time::Date;

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request session changes. Network outcomes
/// (booking created, discount validated, payment confirmed) re-enter the
/// machine as commands so every mutation flows through [`crate::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick a (court, date, time) slot.
    SelectSlot {
        /// The court number.
        court_number: u32,
        /// The booking date (local calendar date).
        date: Date,
        /// The derived slot as shown to the user.
        slot: TimeSlot,
    },
    /// Submit the customer detail form.
    SubmitDetails {
        /// The raw customer fields; validated during application.
        customer: CustomerDetails,
    },
    /// A discount code passed backend validation.
    DiscountValidated {
        /// The trimmed, validated code.
        code: String,
        /// The concrete discount amount returned by the backend.
        amount: Decimal,
    },
    /// The backend created the booking.
    BookingCreated {
        /// The server-assigned booking identifier.
        booking_id: String,
    },
    /// The payment collaborator issued a payment intent.
    PaymentIntentCreated {
        /// The payment intent reference.
        payment_intent_id: String,
    },
    /// The payment collaborator confirmed the charge.
    PaymentConfirmed,
    /// Step back one step (Details → `SlotSelect`, Payment → Details).
    GoBack,
    /// Reset to a fresh session with facility-default pricing.
    Reset,
}
