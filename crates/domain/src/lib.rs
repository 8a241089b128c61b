// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod error;
mod pricing;
mod slots;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use availability::AvailabilityGrid;
pub use error::DomainError;
pub use pricing::{
    PricingBreakdown, final_total_minor_units, price, validate_breakdown,
};
pub use slots::{
    PAST_BUFFER_MINUTES, SLOT_DURATION_MINUTES, TimeSlot, date_key, day_slots, slot_end_time,
    to_12h, to_24h,
};
pub use types::{
    Court, CourtLayout, DailyHours, FacilityConfig, OperatingHours, PricingConfig, Sport,
};
pub use validation::{
    validate_customer_email, validate_customer_name, validate_customer_phone,
    validate_facility_config,
};
