// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_config, create_test_date, create_test_grid, session_at_details,
    session_at_payment,
};
use crate::{BookingSession, BookingStep, Command, CoreError, SessionEvent, apply};
use rust_decimal::{Decimal, dec};

#[test]
fn test_step_transition_table() {
    assert!(BookingStep::SlotSelect.can_transition_to(BookingStep::Details));
    assert!(BookingStep::Details.can_transition_to(BookingStep::Payment));
    assert!(BookingStep::Details.can_transition_to(BookingStep::SlotSelect));
    assert!(BookingStep::Payment.can_transition_to(BookingStep::Confirmed));
    assert!(BookingStep::Payment.can_transition_to(BookingStep::Details));

    assert!(!BookingStep::SlotSelect.can_transition_to(BookingStep::Payment));
    assert!(!BookingStep::Confirmed.can_transition_to(BookingStep::Payment));
    assert!(!BookingStep::SlotSelect.can_transition_to(BookingStep::Confirmed));
}

#[test]
fn test_booking_created_moves_to_payment() {
    let config = create_test_config();
    let grid = create_test_grid();
    let session = session_at_details();

    let transition = apply(
        &config,
        &grid,
        &session,
        Command::BookingCreated {
            booking_id: String::from("bk-1001"),
        },
    )
    .unwrap();

    assert_eq!(transition.new_session.step, BookingStep::Payment);
    assert_eq!(
        transition.new_session.booking_id,
        Some(String::from("bk-1001"))
    );
}

#[test]
fn test_back_from_details_preserves_date() {
    let config = create_test_config();
    let grid = create_test_grid();
    let session = session_at_details();

    let transition = apply(&config, &grid, &session, Command::GoBack).unwrap();

    assert_eq!(transition.new_session.step, BookingStep::SlotSelect);
    assert_eq!(
        transition.new_session.selected_date,
        Some(create_test_date())
    );
    assert!(matches!(
        transition.event,
        SessionEvent::SteppedBack {
            to: BookingStep::SlotSelect
        }
    ));
}

#[test]
fn test_back_from_payment_returns_to_details() {
    let config = create_test_config();
    let grid = create_test_grid();
    let session = session_at_payment();

    let transition = apply(&config, &grid, &session, Command::GoBack).unwrap();

    assert_eq!(transition.new_session.step, BookingStep::Details);
    // The created booking survives back-navigation.
    assert_eq!(
        transition.new_session.booking_id,
        Some(String::from("bk-1001"))
    );
}

#[test]
fn test_back_from_slot_select_is_rejected() {
    let config = create_test_config();
    let grid = create_test_grid();
    let session = BookingSession::new(&config).unwrap();

    let result = apply(&config, &grid, &session, Command::GoBack);
    assert!(matches!(result, Err(CoreError::InvalidTransition { .. })));
}

#[test]
fn test_payment_intent_stored_once() {
    let config = create_test_config();
    let grid = create_test_grid();
    let session = session_at_payment();

    let session = apply(
        &config,
        &grid,
        &session,
        Command::PaymentIntentCreated {
            payment_intent_id: String::from("pi-55"),
        },
    )
    .unwrap()
    .new_session;
    assert_eq!(session.payment_intent_id, Some(String::from("pi-55")));

    let result = apply(
        &config,
        &grid,
        &session,
        Command::PaymentIntentCreated {
            payment_intent_id: String::from("pi-56"),
        },
    );
    assert!(matches!(result, Err(CoreError::PaymentIntentExists)));
}

#[test]
fn test_payment_confirmed_completes_session() {
    let config = create_test_config();
    let grid = create_test_grid();
    let session = session_at_payment();
    let session = apply(
        &config,
        &grid,
        &session,
        Command::PaymentIntentCreated {
            payment_intent_id: String::from("pi-55"),
        },
    )
    .unwrap()
    .new_session;

    let transition = apply(&config, &grid, &session, Command::PaymentConfirmed).unwrap();

    assert_eq!(transition.new_session.step, BookingStep::Confirmed);
    assert!(matches!(
        transition.event,
        SessionEvent::PaymentConfirmed { .. }
    ));
}

#[test]
fn test_payment_confirmed_requires_intent() {
    let config = create_test_config();
    let grid = create_test_grid();
    let session = session_at_payment();

    let result = apply(&config, &grid, &session, Command::PaymentConfirmed);
    assert!(matches!(result, Err(CoreError::MissingPaymentIntent)));
}

#[test]
fn test_reset_restores_default_breakdown() {
    let config = create_test_config();
    let grid = create_test_grid();
    let session = session_at_payment();

    // Complete the flow, then reset.
    let session = apply(
        &config,
        &grid,
        &session,
        Command::PaymentIntentCreated {
            payment_intent_id: String::from("pi-55"),
        },
    )
    .unwrap()
    .new_session;
    let session = apply(&config, &grid, &session, Command::PaymentConfirmed)
        .unwrap()
        .new_session;

    let transition = apply(&config, &grid, &session, Command::Reset).unwrap();
    let fresh = transition.new_session;

    assert_eq!(fresh.step, BookingStep::SlotSelect);
    assert_eq!(fresh.selected_date, None);
    assert_eq!(fresh.selected_court, None);
    assert_eq!(fresh.booking_id, None);
    assert_eq!(fresh.customer.name, "");
    assert_eq!(fresh.breakdown.discount_amount, Decimal::ZERO);
    assert_eq!(fresh.breakdown.final_total, dec!(28.53));
}
