// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::{CoreError, FieldError};
use crate::state::{
    BookingOrder, BookingSession, BookingStep, DiscountState, SessionEvent, TransitionResult,
};
use court_book_domain::{
    AvailabilityGrid, DomainError, FacilityConfig, SLOT_DURATION_MINUTES, price, slot_end_time,
    validate_breakdown, validate_customer_email, validate_customer_name, validate_customer_phone,
    validate_facility_config,
};
use rust_decimal::Decimal;

/// Applies a command to the session, producing a new session and event.
///
/// The function is pure: the existing session is never mutated, and a
/// failed command has no side effects. Network side effects live in the
/// portal driver; their outcomes re-enter here as commands.
///
/// # Arguments
///
/// * `config` - The loaded facility snapshot
/// * `grid` - The current availability snapshot
/// * `session` - The current session (immutable)
/// * `command` - The command to apply
///
/// # Errors
///
/// Returns an error if the command is invalid in the current step, a
/// domain rule is violated, or required fields fail validation.
#[allow(clippy::too_many_lines)]
pub fn apply(
    config: &FacilityConfig,
    grid: &AvailabilityGrid,
    session: &BookingSession,
    command: Command,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::SelectSlot {
            court_number,
            date,
            slot,
        } => {
            if session.step != BookingStep::SlotSelect {
                return Err(CoreError::InvalidTransition {
                    from: session.step,
                    command: "SelectSlot",
                });
            }

            // A malformed pricing config must block progress here rather
            // than compute a garbage price at the payment step.
            validate_facility_config(config)?;

            if config.court(court_number).is_none() {
                return Err(CoreError::DomainViolation(DomainError::CourtNotFound {
                    slug: config.slug().to_string(),
                    court_number,
                }));
            }
            if slot.is_past {
                return Err(CoreError::SlotInPast {
                    start_24: slot.start_24.clone(),
                });
            }
            if !grid.is_available(court_number, &slot.start_24) {
                return Err(CoreError::SlotUnavailable {
                    court_number,
                    start_24: slot.start_24.clone(),
                });
            }

            // Reinitialize the breakdown from facility defaults. Any
            // previously applied discount belongs to the old breakdown's
            // lifecycle and is dropped with it.
            let breakdown = price(&config.pricing, SLOT_DURATION_MINUTES, Decimal::ZERO)?;

            let mut new_session = session.clone();
            new_session.step = BookingStep::Details;
            new_session.selected_date = Some(date);
            new_session.selected_court = Some(court_number);
            new_session.selected_slot = Some(slot.clone());
            new_session.discount = DiscountState::None;
            new_session.breakdown = breakdown;
            new_session.clear_errors();

            Ok(TransitionResult {
                new_session,
                event: SessionEvent::SlotSelected {
                    court_number,
                    date,
                    start_24: slot.start_24,
                },
            })
        }
        Command::SubmitDetails { customer } => {
            if session.step != BookingStep::Details {
                return Err(CoreError::InvalidTransition {
                    from: session.step,
                    command: "SubmitDetails",
                });
            }

            let mut errors: Vec<FieldError> = Vec::new();
            let name = match validate_customer_name(&customer.name) {
                Ok(name) => name,
                Err(e) => {
                    errors.push(FieldError::new(
                        String::from("customerName"),
                        e.to_string(),
                    ));
                    String::new()
                }
            };
            let email = match validate_customer_email(&customer.email) {
                Ok(email) => email,
                Err(e) => {
                    errors.push(FieldError::new(
                        String::from("customerEmail"),
                        e.to_string(),
                    ));
                    String::new()
                }
            };
            if !errors.is_empty() {
                return Err(CoreError::InvalidDetails { errors });
            }

            let (Some(date), Some(court_number), Some(slot)) = (
                session.selected_date,
                session.selected_court,
                session.selected_slot.as_ref(),
            ) else {
                return Err(CoreError::MissingSlotSelection);
            };

            // Sanity assertion: the frozen breakdown must still be
            // internally consistent before its total is charged.
            if !validate_breakdown(&session.breakdown, &config.pricing) {
                return Err(CoreError::InconsistentBreakdown);
            }

            let end_time = slot_end_time(&slot.start_24)?;
            let normalized = crate::state::CustomerDetails {
                name,
                email,
                phone: validate_customer_phone(customer.phone.as_deref()),
                external_user_id: customer
                    .external_user_id
                    .as_deref()
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string),
            };

            let order = BookingOrder {
                facility_id: config.facility_id(),
                slug: config.slug().to_string(),
                court_number,
                booking_date: date,
                start_time: slot.start_24.clone(),
                end_time,
                duration_minutes: SLOT_DURATION_MINUTES,
                total_amount: session.breakdown.final_total,
                discount_code: session.discount.code().map(str::to_string),
                discount_amount: session.discount.amount(),
                customer: normalized.clone(),
            };

            let mut new_session = session.clone();
            new_session.customer = normalized;
            new_session.clear_errors();

            Ok(TransitionResult {
                new_session,
                event: SessionEvent::DetailsSubmitted { order },
            })
        }
        Command::DiscountValidated { code, amount } => {
            if session.step != BookingStep::Details {
                return Err(CoreError::InvalidTransition {
                    from: session.step,
                    command: "DiscountValidated",
                });
            }
            if session.discount.is_applied() {
                return Err(CoreError::DiscountAlreadyApplied);
            }

            // The one permitted recomputation of the breakdown.
            let breakdown = price(&config.pricing, SLOT_DURATION_MINUTES, amount)?;

            let mut new_session = session.clone();
            new_session.breakdown = breakdown;
            new_session.discount = DiscountState::Applied {
                code: code.clone(),
                amount,
            };
            new_session.errors.remove("discount");

            Ok(TransitionResult {
                new_session,
                event: SessionEvent::DiscountApplied { code, amount },
            })
        }
        Command::BookingCreated { booking_id } => {
            if !session.step.can_transition_to(BookingStep::Payment) {
                return Err(CoreError::InvalidTransition {
                    from: session.step,
                    command: "BookingCreated",
                });
            }

            let mut new_session = session.clone();
            new_session.step = BookingStep::Payment;
            new_session.booking_id = Some(booking_id.clone());
            new_session.clear_errors();

            Ok(TransitionResult {
                new_session,
                event: SessionEvent::BookingCreated { booking_id },
            })
        }
        Command::PaymentIntentCreated { payment_intent_id } => {
            if session.step != BookingStep::Payment {
                return Err(CoreError::InvalidTransition {
                    from: session.step,
                    command: "PaymentIntentCreated",
                });
            }
            if session.payment_intent_id.is_some() {
                return Err(CoreError::PaymentIntentExists);
            }

            let mut new_session = session.clone();
            new_session.payment_intent_id = Some(payment_intent_id.clone());

            Ok(TransitionResult {
                new_session,
                event: SessionEvent::PaymentIntentCreated { payment_intent_id },
            })
        }
        Command::PaymentConfirmed => {
            if !session.step.can_transition_to(BookingStep::Confirmed) {
                return Err(CoreError::InvalidTransition {
                    from: session.step,
                    command: "PaymentConfirmed",
                });
            }
            let Some(booking_id) = session.booking_id.clone() else {
                return Err(CoreError::MissingBookingId);
            };
            if session.payment_intent_id.is_none() {
                return Err(CoreError::MissingPaymentIntent);
            }

            let mut new_session = session.clone();
            new_session.step = BookingStep::Confirmed;
            new_session.clear_errors();

            Ok(TransitionResult {
                new_session,
                event: SessionEvent::PaymentConfirmed { booking_id },
            })
        }
        Command::GoBack => {
            let to = match session.step {
                BookingStep::Details => BookingStep::SlotSelect,
                BookingStep::Payment => BookingStep::Details,
                BookingStep::SlotSelect | BookingStep::Confirmed => {
                    return Err(CoreError::InvalidTransition {
                        from: session.step,
                        command: "GoBack",
                    });
                }
            };

            // Back from Details keeps the selected date (and the rest of
            // the selection; a re-pick overwrites it).
            let mut new_session = session.clone();
            new_session.step = to;
            new_session.clear_errors();

            Ok(TransitionResult {
                new_session,
                event: SessionEvent::SteppedBack { to },
            })
        }
        Command::Reset => {
            let new_session = BookingSession::new(config)?;

            Ok(TransitionResult {
                new_session,
                event: SessionEvent::SessionReset,
            })
        }
    }
}
