// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.
//!
//! `ScriptedBackend` answers each operation from a queue of scripted
//! results, falling back to a sensible success when the queue is empty,
//! and records every call so tests can assert what did (or did not) reach
//! the network.

use court_book::CustomerDetails;
use court_book_api::{
    BackendError, BookingBackend, BookingSummary, CancellationDetails, CreateBookingRequest,
    CreateBookingResponse, DiscountValidation, PaymentIntent,
};
use court_book_domain::{
    AvailabilityGrid, Court, FacilityConfig, PricingConfig, Sport, TimeSlot,
    SLOT_DURATION_MINUTES,
};
use rust_decimal::{Decimal, dec};
use std::collections::VecDeque;
use std::sync::Mutex;
use time::Date;

pub fn create_test_pricing() -> PricingConfig {
    PricingConfig {
        court_rental: dec!(25),
        service_fee_percentage: dec!(1),
        tax_percentage: dec!(13),
        currency: String::from("CAD"),
    }
}

pub fn create_test_facility() -> FacilityConfig {
    FacilityConfig::with_id(
        42,
        "maple-ridge",
        String::from("Maple Ridge Sports"),
        vec![
            Court::new(1, String::from("Court 1"), Sport::Badminton).unwrap(),
            Court::new(2, String::from("Court 2"), Sport::Pickleball).unwrap(),
        ],
        create_test_pricing(),
        None,
        Vec::new(),
    )
}

pub fn create_test_grid() -> AvailabilityGrid {
    let mut grid = AvailabilityGrid::new();
    grid.set(1, "10:00", true);
    grid.set(1, "11:00", true);
    grid.set(2, "10:00", true);
    grid
}

pub fn create_test_date() -> Date {
    Date::from_calendar_date(2027, time::Month::June, 15).unwrap()
}

pub fn create_test_slot(start_24: &str) -> TimeSlot {
    TimeSlot {
        label: court_book_domain::to_12h(start_24).unwrap(),
        start_24: start_24.to_string(),
        duration_minutes: SLOT_DURATION_MINUTES,
        is_past: false,
    }
}

pub fn create_test_customer() -> CustomerDetails {
    CustomerDetails {
        name: String::from("Jane Doe"),
        email: String::from("jane@example.com"),
        phone: None,
        external_user_id: None,
    }
}

/// A backend double answering from scripted queues.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    pub facility: Option<FacilityConfig>,
    pub availability: Mutex<VecDeque<Result<AvailabilityGrid, BackendError>>>,
    pub availability_dates: Mutex<Vec<String>>,
    pub discounts: Mutex<VecDeque<Result<DiscountValidation, BackendError>>>,
    pub discount_calls: Mutex<u32>,
    pub bookings: Mutex<VecDeque<Result<CreateBookingResponse, BackendError>>>,
    pub booking_requests: Mutex<Vec<CreateBookingRequest>>,
    pub payment_intents: Mutex<VecDeque<Result<PaymentIntent, BackendError>>>,
    pub intent_calls: Mutex<u32>,
    pub confirmations: Mutex<VecDeque<Result<(), BackendError>>>,
    pub cancelled: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            facility: Some(create_test_facility()),
            ..Self::default()
        }
    }

    pub fn script_availability(&self, result: Result<AvailabilityGrid, BackendError>) {
        self.availability.lock().unwrap().push_back(result);
    }

    pub fn script_discount(&self, result: Result<DiscountValidation, BackendError>) {
        self.discounts.lock().unwrap().push_back(result);
    }

    pub fn script_booking(&self, result: Result<CreateBookingResponse, BackendError>) {
        self.bookings.lock().unwrap().push_back(result);
    }

    pub fn script_confirmation(&self, result: Result<(), BackendError>) {
        self.confirmations.lock().unwrap().push_back(result);
    }
}

impl BookingBackend for ScriptedBackend {
    async fn get_facility(&self, slug: &str) -> Result<FacilityConfig, BackendError> {
        self.facility
            .clone()
            .ok_or_else(|| BackendError::Rejected {
                message: format!("Unknown facility: {slug}"),
            })
    }

    async fn get_availability(
        &self,
        _slug: &str,
        date: &str,
    ) -> Result<AvailabilityGrid, BackendError> {
        self.availability_dates.lock().unwrap().push(date.to_string());
        self.availability
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(create_test_grid()))
    }

    async fn apply_discount(
        &self,
        _slug: &str,
        _code: &str,
        _base_amount: Decimal,
    ) -> Result<DiscountValidation, BackendError> {
        *self.discount_calls.lock().unwrap() += 1;
        self.discounts.lock().unwrap().pop_front().unwrap_or(Ok(
            DiscountValidation {
                discount_amount: dec!(10.00),
            },
        ))
    }

    async fn create_booking(
        &self,
        _slug: &str,
        request: CreateBookingRequest,
    ) -> Result<CreateBookingResponse, BackendError> {
        self.booking_requests.lock().unwrap().push(request);
        self.bookings.lock().unwrap().pop_front().unwrap_or(Ok(
            CreateBookingResponse {
                booking_id: String::from("bk-1001"),
            },
        ))
    }

    async fn create_payment_intent(
        &self,
        _amount_minor_units: i64,
        _currency: &str,
    ) -> Result<PaymentIntent, BackendError> {
        *self.intent_calls.lock().unwrap() += 1;
        self.payment_intents.lock().unwrap().pop_front().unwrap_or(Ok(
            PaymentIntent {
                client_secret: String::from("pi_1_secret_2"),
                payment_intent_id: String::from("pi_1"),
            },
        ))
    }

    async fn confirm_payment(
        &self,
        _booking_id: &str,
        _payment_intent_id: &str,
    ) -> Result<(), BackendError> {
        self.confirmations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn get_cancellation_details(
        &self,
        booking_id: &str,
    ) -> Result<CancellationDetails, BackendError> {
        Ok(CancellationDetails {
            booking: BookingSummary {
                booking_id: booking_id.to_string(),
                court_number: 1,
                booking_date: String::from("2027-06-15"),
                start_time: String::from("10:00"),
                customer_name: String::from("Jane Doe"),
            },
            can_cancel: true,
            hours_until_booking: 48,
        })
    }

    async fn cancel_booking(&self, booking_id: &str) -> Result<(), BackendError> {
        self.cancelled.lock().unwrap().push(booking_id.to_string());
        Ok(())
    }
}
