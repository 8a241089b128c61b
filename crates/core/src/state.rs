// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use court_book_domain::{FacilityConfig, PricingBreakdown, TimeSlot, price, validate_facility_config};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use time::Date;

/// The step a booking session is in.
///
/// The flow is irreversible once payment confirms; before that, Back moves
/// one step toward slot selection and Reset returns to the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingStep {
    /// Step 1: picking (court, date, time).
    #[default]
    SlotSelect,
    /// Step 2: customer details and optional discount.
    Details,
    /// Step 3: payment intent and confirmation.
    Payment,
    /// Terminal: booking paid, receipt rendered from the frozen session.
    Confirmed,
}

impl BookingStep {
    /// Converts this step to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SlotSelect => "SlotSelect",
            Self::Details => "Details",
            Self::Payment => "Payment",
            Self::Confirmed => "Confirmed",
        }
    }

    /// Returns the 1-based step number shown in the progress indicator.
    #[must_use]
    pub const fn step_number(&self) -> u8 {
        match self {
            Self::SlotSelect => 1,
            Self::Details => 2,
            Self::Payment => 3,
            Self::Confirmed => 4,
        }
    }

    /// Checks if a transition from this step to another is valid.
    ///
    /// Forward: `SlotSelect` → Details → Payment → Confirmed.
    /// Back: Details → `SlotSelect`, Payment → Details.
    /// Reset (any step → `SlotSelect`) is always allowed and not listed here.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::SlotSelect, Self::Details)
                | (Self::Details, Self::Payment | Self::SlotSelect)
                | (Self::Payment, Self::Confirmed | Self::Details)
        )
    }
}

impl std::fmt::Display for BookingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Customer contact fields collected at the Details step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDetails {
    /// Customer name (required, trimmed).
    pub name: String,
    /// Customer email (required, basic `local@domain` shape).
    pub email: String,
    /// Customer phone (optional).
    pub phone: Option<String>,
    /// External user identifier from an embedding app (optional).
    pub external_user_id: Option<String>,
}

/// Discount application state.
///
/// Once applied, the code is immutable for the rest of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DiscountState {
    /// No code applied.
    #[default]
    None,
    /// A code was validated by the backend and priced in.
    Applied {
        /// The validated code.
        code: String,
        /// The concrete discount amount returned by the backend.
        amount: Decimal,
    },
}

impl DiscountState {
    /// Returns whether a code has been applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// Returns the applied code, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Applied { code, .. } => Some(code),
        }
    }

    /// Returns the applied amount, or zero.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        match self {
            Self::None => Decimal::ZERO,
            Self::Applied { amount, .. } => *amount,
        }
    }
}

/// The assembled booking order handed to the booking-creation operation.
///
/// Built by the Details submission transition; the API layer maps it onto
/// the wire payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingOrder {
    /// The backend facility identifier, when known.
    pub facility_id: Option<i64>,
    /// The tenant slug.
    pub slug: String,
    /// The stable court number (server join key).
    pub court_number: u32,
    /// The booking date (local calendar date).
    pub booking_date: Date,
    /// Start time, 24-hour "HH:MM".
    pub start_time: String,
    /// End time, start plus 60 minutes with rollover.
    pub end_time: String,
    /// Duration in minutes. Always 60.
    pub duration_minutes: u32,
    /// The charged total, from the frozen breakdown.
    pub total_amount: Decimal,
    /// The applied discount code, if any.
    pub discount_code: Option<String>,
    /// The applied discount amount (zero when no code).
    pub discount_amount: Decimal,
    /// Customer contact fields.
    pub customer: CustomerDetails,
}

/// The in-progress booking attempt by one customer.
///
/// Created on portal mount, reset after successful payment or explicit
/// reset. The breakdown always holds the facility-default pricing until a
/// slot pick or discount recomputes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSession {
    /// The current step.
    pub step: BookingStep,
    /// The date being viewed/booked. Survives Back from Details.
    pub selected_date: Option<Date>,
    /// The picked court number.
    pub selected_court: Option<u32>,
    /// The picked slot.
    pub selected_slot: Option<TimeSlot>,
    /// Customer contact fields.
    pub customer: CustomerDetails,
    /// Discount application state.
    pub discount: DiscountState,
    /// The current price breakdown. Never internally inconsistent.
    pub breakdown: PricingBreakdown,
    /// The server-assigned booking identifier. Absent until the Details →
    /// Payment transition succeeds; never stored on a failed creation.
    pub booking_id: Option<String>,
    /// The payment intent reference, once requested.
    pub payment_intent_id: Option<String>,
    /// Field-keyed user-facing errors, resolved in place.
    pub errors: BTreeMap<String, String>,
}

impl BookingSession {
    /// Creates a fresh session with the facility's default pricing.
    ///
    /// # Errors
    ///
    /// Returns an error if the facility configuration is malformed — a
    /// session must not start with a garbage price.
    pub fn new(config: &FacilityConfig) -> Result<Self, CoreError> {
        validate_facility_config(config)?;
        let breakdown = price(
            &config.pricing,
            court_book_domain::SLOT_DURATION_MINUTES,
            Decimal::ZERO,
        )?;
        Ok(Self {
            step: BookingStep::SlotSelect,
            selected_date: None,
            selected_court: None,
            selected_slot: None,
            customer: CustomerDetails::default(),
            discount: DiscountState::default(),
            breakdown,
            booking_id: None,
            payment_intent_id: None,
            errors: BTreeMap::new(),
        })
    }

    /// Records a user-facing error against a field key.
    pub fn set_field_error(&mut self, field: &str, message: String) {
        self.errors.insert(field.to_string(), message);
    }

    /// Clears all field errors.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}

/// A fact about a completed session transition.
///
/// Events are informational: the session itself is the source of truth,
/// and the portal forwards these to its broadcast bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A slot was picked and the breakdown reinitialized.
    SlotSelected {
        /// The picked court number.
        court_number: u32,
        /// The booking date.
        date: Date,
        /// The 24-hour start time.
        start_24: String,
    },
    /// Details passed local validation and an order was assembled.
    DetailsSubmitted {
        /// The order to hand to the booking-creation operation.
        order: BookingOrder,
    },
    /// A validated discount was priced into the breakdown.
    DiscountApplied {
        /// The validated code.
        code: String,
        /// The discount amount.
        amount: Decimal,
    },
    /// The backend created the booking.
    BookingCreated {
        /// The server-assigned booking identifier.
        booking_id: String,
    },
    /// A payment intent reference was stored.
    PaymentIntentCreated {
        /// The payment intent reference.
        payment_intent_id: String,
    },
    /// Payment was confirmed; the session is complete.
    PaymentConfirmed {
        /// The booking identifier.
        booking_id: String,
    },
    /// The session stepped back one step.
    SteppedBack {
        /// The step returned to.
        to: BookingStep,
    },
    /// The session was reset to a fresh slot selection.
    SessionReset,
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new session after the transition.
    pub new_session: BookingSession,
    /// The fact describing this transition.
    pub event: SessionEvent,
}
