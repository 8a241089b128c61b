// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{BookingSession, Command, CustomerDetails, apply};
use court_book_domain::{
    AvailabilityGrid, Court, FacilityConfig, PricingConfig, Sport, TimeSlot,
    SLOT_DURATION_MINUTES,
};
use rust_decimal::dec;
use time::Date;

pub fn create_test_pricing() -> PricingConfig {
    PricingConfig {
        court_rental: dec!(25),
        service_fee_percentage: dec!(1),
        tax_percentage: dec!(13),
        currency: String::from("CAD"),
    }
}

pub fn create_test_config() -> FacilityConfig {
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
    grid.set(1, "11:00", false);
    grid.set(2, "10:00", true);
    grid
}

pub fn create_test_date() -> Date {
    Date::from_calendar_date(2026, time::Month::March, 10).unwrap()
}

pub fn create_test_slot(start_24: &str, is_past: bool) -> TimeSlot {
    TimeSlot {
        label: court_book_domain::to_12h(start_24).unwrap(),
        start_24: start_24.to_string(),
        duration_minutes: SLOT_DURATION_MINUTES,
        is_past,
    }
}

pub fn create_test_customer() -> CustomerDetails {
    CustomerDetails {
        name: String::from("Jane Doe"),
        email: String::from("jane@example.com"),
        phone: Some(String::from("555-0100")),
        external_user_id: None,
    }
}

/// A fresh session advanced to the Details step via a valid slot pick.
pub fn session_at_details() -> BookingSession {
    let config = create_test_config();
    let grid = create_test_grid();
    let session = BookingSession::new(&config).unwrap();
    apply(
        &config,
        &grid,
        &session,
        Command::SelectSlot {
            court_number: 1,
            date: create_test_date(),
            slot: create_test_slot("10:00", false),
        },
    )
    .unwrap()
    .new_session
}

/// A session advanced to the Payment step with a stored booking id.
pub fn session_at_payment() -> BookingSession {
    let config = create_test_config();
    let grid = create_test_grid();
    let session = session_at_details();
    let session = apply(
        &config,
        &grid,
        &session,
        Command::SubmitDetails {
            customer: create_test_customer(),
        },
    )
    .unwrap()
    .new_session;
    apply(
        &config,
        &grid,
        &session,
        Command::BookingCreated {
            booking_id: String::from("bk-1001"),
        },
    )
    .unwrap()
    .new_session
}
