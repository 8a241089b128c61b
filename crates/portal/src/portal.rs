// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking portal driver.
//!
//! Owns the loaded facility snapshot, the live session, and the
//! availability view, and sequences the network side effects around the
//! pure state machine: every outcome re-enters the machine as a command,
//! so no mutation bypasses [`court_book::apply`].
//!
//! Execution is single-threaded and cooperative. The in-flight flags guard
//! duplicate submissions at the UI boundary; staleness is handled by the
//! availability view's ticketing.

use crate::availability::AvailabilityView;
use crate::error::PortalError;
use crate::events::{PortalEvent, PortalEventBus};
use chrono::{Datelike, Timelike};
use court_book::{
    BookingSession, BookingStep, Command, CoreError, CustomerDetails, SessionEvent, apply,
    validate_discount_attempt,
};
use court_book_api::{
    ApiError, BackendError, BookingBackend, CancellationDetails, CreateBookingRequest,
    translate_backend_error,
};
use court_book_domain::{
    FacilityConfig, TimeSlot, date_key, day_slots, final_total_minor_units,
};
use time::{Date, Time};
use tracing::{debug, info, warn};

/// Fallback message when discount validation fails without a specific
/// reason from the transport.
const INVALID_DISCOUNT_MESSAGE: &str = "Invalid discount code";

/// How the slot-selection step is rendered.
///
/// Presentation state only: switching modes must not touch the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Time-by-court grid.
    #[default]
    Grid,
    /// Physical court layout.
    Layout,
}

/// The booking portal: one facility, one customer session.
#[derive(Debug)]
pub struct BookingPortal<B: BookingBackend> {
    /// The backend implementation.
    backend: B,
    /// The loaded facility snapshot. Replaced only by a tenant switch.
    config: FacilityConfig,
    /// The live session.
    session: BookingSession,
    /// The availability snapshot for the viewed date.
    availability: AvailabilityView,
    /// The portal event bus.
    events: PortalEventBus,
    /// Presentation mode for the slot-selection step.
    view_mode: ViewMode,
    /// Booking submission in flight.
    pub(crate) submitting: bool,
    /// Payment confirmation in flight.
    pub(crate) paying: bool,
    /// Availability fetch in flight.
    pub(crate) loading_availability: bool,
}

impl<B: BookingBackend> BookingPortal<B> {
    /// Loads the facility and mounts a fresh session.
    ///
    /// # Errors
    ///
    /// Returns an error if the facility cannot be loaded or its
    /// configuration is malformed.
    pub async fn mount(backend: B, slug: &str) -> Result<Self, PortalError> {
        let config = backend
            .get_facility(slug)
            .await
            .map_err(translate_backend_error)?;
        let session = BookingSession::new(&config)?;
        info!(slug = config.slug(), name = %config.name, "Mounted booking portal");
        Ok(Self {
            backend,
            config,
            session,
            availability: AvailabilityView::new(),
            events: PortalEventBus::new(),
            view_mode: ViewMode::default(),
            submitting: false,
            paying: false,
            loading_availability: false,
        })
    }

    /// Returns the loaded facility snapshot.
    #[must_use]
    pub const fn config(&self) -> &FacilityConfig {
        &self.config
    }

    /// Returns the backend implementation.
    pub(crate) const fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the live session.
    #[must_use]
    pub const fn session(&self) -> &BookingSession {
        &self.session
    }

    /// Returns the availability view.
    #[must_use]
    pub const fn availability(&self) -> &AvailabilityView {
        &self.availability
    }

    /// Returns the portal event bus.
    #[must_use]
    pub const fn events(&self) -> &PortalEventBus {
        &self.events
    }

    /// Returns the current presentation mode.
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Whether a booking submission is in flight (submit disabled).
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether a payment confirmation is in flight (pay disabled).
    #[must_use]
    pub const fn is_paying(&self) -> bool {
        self.paying
    }

    /// Whether an availability fetch is in flight.
    #[must_use]
    pub const fn is_loading_availability(&self) -> bool {
        self.loading_availability
    }

    /// Switches the slot-selection presentation mode.
    ///
    /// Presentation only; the session is untouched.
    pub const fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Derives the display slots for a date from the facility's hours and
    /// the local wall clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the local clock cannot be read into a calendar
    /// date.
    pub fn slots_for(&self, date: Date) -> Result<Vec<TimeSlot>, PortalError> {
        let (today, now) = local_now()?;
        Ok(day_slots(&self.config.effective_hours(), date, today, now))
    }

    /// Selects the date being viewed and fetches its availability.
    ///
    /// Selection state other than the date is untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the date cannot be formatted for the backend;
    /// fetch failures land in the availability view's retryable error
    /// state instead.
    pub async fn select_date(&mut self, date: Date) -> Result<(), PortalError> {
        self.session.selected_date = Some(date);
        debug!(%date, "Viewing date changed");
        self.refresh_availability().await
    }

    /// Re-fetches the availability snapshot for the viewed date.
    ///
    /// Does not reset step or selection state. A response superseded by a
    /// newer fetch is discarded; a failed fetch clears the snapshot and
    /// records a retryable error on the view.
    ///
    /// # Errors
    ///
    /// Returns an error only if the date cannot be formatted for the
    /// backend.
    pub async fn refresh_availability(&mut self) -> Result<(), PortalError> {
        let Some(date) = self.session.selected_date else {
            return Ok(());
        };
        let key = date_key(date)?;
        let ticket = self.availability.begin_fetch();
        self.loading_availability = true;
        let result = self
            .backend
            .get_availability(self.config.slug(), &key)
            .await
            .map_err(translate_backend_error);
        self.loading_availability = false;
        let installed = self.availability.install(ticket, date, result);
        debug!(ticket, installed, date = %key, "Availability fetch settled");
        Ok(())
    }

    /// Reacts to a bus event.
    ///
    /// Cancellation and refresh signals re-fetch the grid for the current
    /// (facility, date) without resetting session state; everything else
    /// is informational.
    ///
    /// # Errors
    ///
    /// Propagates [`BookingPortal::refresh_availability`] errors.
    pub async fn handle_event(&mut self, event: &PortalEvent) -> Result<(), PortalError> {
        match event {
            PortalEvent::RefreshRequested | PortalEvent::BookingCancelled { .. } => {
                self.refresh_availability().await
            }
            PortalEvent::BookingCreated { .. } | PortalEvent::PaymentCompleted { .. } => Ok(()),
        }
    }

    /// Picks a slot, initializing the breakdown and moving to Details.
    ///
    /// # Errors
    ///
    /// Returns an error (and records it on the session) if the slot is
    /// past, unavailable, or the facility configuration is malformed. No
    /// transition happens on rejection.
    pub fn select_slot(&mut self, court_number: u32, slot: TimeSlot) -> Result<(), PortalError> {
        let Some(date) = self.session.selected_date else {
            let message = String::from("Select a date first");
            self.session.set_field_error("slot", message.clone());
            return Err(PortalError::Api(ApiError::Validation {
                field: String::from("slot"),
                message,
            }));
        };
        let command = Command::SelectSlot {
            court_number,
            date,
            slot,
        };
        match apply(&self.config, self.availability.grid(), &self.session, command) {
            Ok(transition) => {
                self.session = transition.new_session;
                debug!(court_number, "Slot selected");
                Ok(())
            }
            Err(err) => {
                self.session.set_field_error("slot", err.to_string());
                Err(err.into())
            }
        }
    }

    /// Applies a discount code to the current breakdown.
    ///
    /// Once a code has been applied, further attempts are rejected here
    /// without a network call. On any failure the existing breakdown is
    /// left untouched and the error is recorded under the "discount"
    /// field, with a generic fallback message unless the transport
    /// supplied a more specific one.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is empty, a code was already applied,
    /// or validation fails.
    pub async fn apply_discount(&mut self, code: &str) -> Result<(), PortalError> {
        let trimmed = match validate_discount_attempt(&self.session, code) {
            Ok(trimmed) => trimmed,
            Err(err) => {
                self.session.set_field_error("discount", err.to_string());
                return Err(err.into());
            }
        };

        let outcome = self
            .backend
            .apply_discount(
                self.config.slug(),
                &trimmed,
                self.session.breakdown.court_rental,
            )
            .await;

        let validation = match outcome {
            Ok(validation) => validation,
            Err(err) => {
                let message = discount_failure_message(&err);
                self.session.set_field_error("discount", message.clone());
                debug!(code = %trimmed, %err, "Discount validation failed");
                return Err(PortalError::Api(ApiError::Network { message }));
            }
        };

        let command = Command::DiscountValidated {
            code: trimmed,
            amount: validation.discount_amount,
        };
        match apply(&self.config, self.availability.grid(), &self.session, command) {
            Ok(transition) => {
                self.session = transition.new_session;
                info!(amount = %validation.discount_amount, "Discount applied");
                Ok(())
            }
            Err(err) => {
                self.session
                    .set_field_error("discount", INVALID_DISCOUNT_MESSAGE.to_string());
                Err(err.into())
            }
        }
    }

    /// Validates the detail form, creates the booking, and moves to
    /// Payment.
    ///
    /// Local validation failures land in the session's field error map
    /// without a transition or a network call. A backend failure keeps the
    /// session at Details with the error under "submit"; no partial
    /// booking identifier is ever stored.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, a submission is already in
    /// flight, or the backend rejects the booking.
    pub async fn submit_details(&mut self, customer: CustomerDetails) -> Result<(), PortalError> {
        if self.submitting {
            return Err(PortalError::Busy { action: "booking" });
        }

        let submit = Command::SubmitDetails { customer };
        let order = match apply(&self.config, self.availability.grid(), &self.session, submit) {
            Ok(transition) => {
                let SessionEvent::DetailsSubmitted { order } = transition.event else {
                    return Err(PortalError::Api(ApiError::Internal {
                        message: String::from("SubmitDetails produced an unexpected event"),
                    }));
                };
                self.session = transition.new_session;
                order
            }
            Err(err) => {
                if let CoreError::InvalidDetails { ref errors } = err {
                    for field_error in errors {
                        self.session
                            .set_field_error(&field_error.field, field_error.message.clone());
                    }
                }
                return Err(err.into());
            }
        };

        let request = CreateBookingRequest::from_order(&order)?;
        self.submitting = true;
        let outcome = self
            .backend
            .create_booking(self.config.slug(), request)
            .await;
        self.submitting = false;

        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                let api = translate_backend_error(err);
                self.session.set_field_error("submit", api.to_string());
                warn!(%api, "Booking creation failed");
                return Err(PortalError::Api(api));
            }
        };

        let created = Command::BookingCreated {
            booking_id: response.booking_id.clone(),
        };
        let transition = apply(&self.config, self.availability.grid(), &self.session, created)?;
        self.session = transition.new_session;
        info!(booking_id = %response.booking_id, "Booking created");
        self.events.broadcast(&PortalEvent::BookingCreated {
            booking_id: response.booking_id,
        });
        Ok(())
    }

    /// Requests a payment intent on entry to the Payment step.
    ///
    /// Idempotent: if an intent already exists for this session, nothing
    /// is requested.
    ///
    /// # Errors
    ///
    /// Returns an error if the intent request fails; the session stays at
    /// Payment with a retry path.
    pub async fn enter_payment(&mut self) -> Result<(), PortalError> {
        if self.session.step != BookingStep::Payment {
            return Err(CoreError::InvalidTransition {
                from: self.session.step,
                command: "PaymentIntentCreated",
            }
            .into());
        }
        if self.session.payment_intent_id.is_some() {
            return Ok(());
        }

        let amount = final_total_minor_units(&self.session.breakdown)?;
        let outcome = self
            .backend
            .create_payment_intent(amount, &self.config.pricing.currency)
            .await;

        let intent = match outcome {
            Ok(intent) => intent,
            Err(err) => {
                let api = translate_backend_error(err);
                self.session.set_field_error("payment", api.to_string());
                warn!(%api, "Payment intent request failed");
                return Err(PortalError::Api(api));
            }
        };

        let command = Command::PaymentIntentCreated {
            payment_intent_id: intent.payment_intent_id,
        };
        let transition = apply(&self.config, self.availability.grid(), &self.session, command)?;
        self.session = transition.new_session;
        debug!(amount, "Payment intent created");
        Ok(())
    }

    /// Confirms the charge after the payment collaborator reports success.
    ///
    /// A failed confirmation keeps the session at Payment and keeps the
    /// stored booking identifier: the created-but-unpaid booking is the
    /// backend's to reconcile, never rolled back here. The server-side
    /// receipt email is best-effort and not surfaced.
    ///
    /// # Errors
    ///
    /// Returns an error if a confirmation is already in flight or the
    /// backend call fails.
    pub async fn confirm_payment(&mut self) -> Result<(), PortalError> {
        if self.paying {
            return Err(PortalError::Busy { action: "payment" });
        }
        let Some(booking_id) = self.session.booking_id.clone() else {
            return Err(CoreError::MissingBookingId.into());
        };
        let Some(payment_intent_id) = self.session.payment_intent_id.clone() else {
            return Err(CoreError::MissingPaymentIntent.into());
        };

        self.paying = true;
        let outcome = self
            .backend
            .confirm_payment(&booking_id, &payment_intent_id)
            .await;
        self.paying = false;

        if let Err(err) = outcome {
            let api = translate_backend_error(err);
            self.session.set_field_error("payment", api.to_string());
            warn!(%booking_id, %api, "Payment confirmation failed");
            return Err(PortalError::Api(api));
        }

        let transition = apply(
            &self.config,
            self.availability.grid(),
            &self.session,
            Command::PaymentConfirmed,
        )?;
        self.session = transition.new_session;
        info!(%booking_id, "Payment confirmed; receipt email is sent server-side");
        self.events.broadcast(&PortalEvent::PaymentCompleted { booking_id });
        Ok(())
    }

    /// Steps back one step, preserving the selected date.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no step to go back to.
    pub fn back(&mut self) -> Result<(), PortalError> {
        let transition = apply(
            &self.config,
            self.availability.grid(),
            &self.session,
            Command::GoBack,
        )?;
        self.session = transition.new_session;
        Ok(())
    }

    /// Resets to a fresh session with facility-default pricing.
    ///
    /// # Errors
    ///
    /// Returns an error if the facility configuration has become
    /// malformed.
    pub fn reset(&mut self) -> Result<(), PortalError> {
        let transition = apply(
            &self.config,
            self.availability.grid(),
            &self.session,
            Command::Reset,
        )?;
        self.session = transition.new_session;
        info!("Session reset");
        Ok(())
    }

    /// Switches to another tenant, forcing a full reset.
    ///
    /// Mid-session tenant switches are unsupported; the session and the
    /// availability snapshot are rebuilt so pricing from two tenants can
    /// never mix.
    ///
    /// # Errors
    ///
    /// Returns an error if the new facility cannot be loaded or its
    /// configuration is malformed. The previous tenant's state is kept in
    /// that case.
    pub async fn switch_facility(&mut self, slug: &str) -> Result<(), PortalError> {
        let config = self
            .backend
            .get_facility(slug)
            .await
            .map_err(translate_backend_error)?;
        let session = BookingSession::new(&config)?;
        info!(from = self.config.slug(), to = config.slug(), "Switched facility");
        self.config = config;
        self.session = session;
        self.availability = AvailabilityView::new();
        Ok(())
    }

    /// Loads cancellation eligibility for a booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails.
    pub async fn cancellation_details(
        &self,
        booking_id: &str,
    ) -> Result<CancellationDetails, PortalError> {
        self.backend
            .get_cancellation_details(booking_id)
            .await
            .map_err(|e| PortalError::Api(translate_backend_error(e)))
    }

    /// Cancels a booking and refreshes availability.
    ///
    /// The 24-hour eligibility rule is enforced server-side; an ineligible
    /// cancellation comes back as a rejection.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the cancellation.
    pub async fn cancel_booking(&mut self, booking_id: &str) -> Result<(), PortalError> {
        self.backend
            .cancel_booking(booking_id)
            .await
            .map_err(translate_backend_error)?;
        info!(%booking_id, "Booking cancelled");
        let event = PortalEvent::BookingCancelled {
            booking_id: booking_id.to_string(),
        };
        self.events.broadcast(&event);
        self.handle_event(&event).await
    }
}

/// Picks the discount failure message: the transport's own message when it
/// has one, the generic fallback otherwise.
fn discount_failure_message(error: &BackendError) -> String {
    match error {
        BackendError::Rejected { message } | BackendError::Conflict { message }
            if !message.trim().is_empty() =>
        {
            message.clone()
        }
        _ => String::from(INVALID_DISCOUNT_MESSAGE),
    }
}

/// Reads the local wall clock as a calendar date and time of day.
///
/// The same local date drives weekday selection, the past rule, and the
/// backend date key.
fn local_now() -> Result<(Date, Time), PortalError> {
    let now = chrono::Local::now().naive_local();
    let month = u8::try_from(now.month())
        .ok()
        .and_then(|m| time::Month::try_from(m).ok())
        .ok_or_else(|| internal("local clock produced an invalid month"))?;
    let date = u8::try_from(now.day())
        .ok()
        .and_then(|day| Date::from_calendar_date(now.year(), month, day).ok())
        .ok_or_else(|| internal("local clock produced an invalid date"))?;
    let time = u8::try_from(now.hour())
        .ok()
        .zip(u8::try_from(now.minute()).ok())
        .zip(u8::try_from(now.second()).ok())
        .and_then(|((h, m), s)| Time::from_hms(h, m, s).ok())
        .ok_or_else(|| internal("local clock produced an invalid time"))?;
    Ok((date, time))
}

fn internal(message: &str) -> PortalError {
    PortalError::Api(ApiError::Internal {
        message: message.to_string(),
    })
}
