// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deterministic multi-stage price computation.
//!
//! The breakdown is computed rental → service fee → discount → tax → total,
//! with every stage rounded to two decimals at the point of computation and
//! never re-derived by subtraction elsewhere. The same inputs always produce
//! the same breakdown: it is rendered twice (summary, then receipt) and must
//! not visibly change between renders, and it must match the backend's
//! authoritative computation.
//!
//! ## Invariants
//!
//! - The service fee is computed from the **unrounded** rental to avoid
//!   compounding rounding error, then rounded itself.
//! - The discount is a concrete money amount by the time it reaches this
//!   module, and may not exceed rental plus service fee.
//! - [`validate_breakdown`] recomputes each stage within a one-cent
//!   tolerance and is runnable as a sanity assertion after every mutation.

use crate::error::DomainError;
use crate::types::PricingConfig;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The itemized price for one booking.
///
/// All values are rounded to two decimals at the point of computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// Court rental for the booked duration.
    pub court_rental: Decimal,
    /// Service fee on the rental.
    pub service_fee: Decimal,
    /// Applied discount amount (zero when no code is applied).
    pub discount_amount: Decimal,
    /// Rental plus service fee minus discount.
    pub subtotal: Decimal,
    /// Tax on the subtotal.
    pub tax: Decimal,
    /// Subtotal plus tax.
    pub final_total: Decimal,
}

/// Rounds a money value to two decimals, half away from zero.
fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// One cent, the per-stage drift tolerance of [`validate_breakdown`].
fn cent() -> Decimal {
    Decimal::new(1, 2)
}

/// Computes the full price breakdown for a booking.
///
/// # Arguments
///
/// * `pricing` - The facility pricing configuration
/// * `duration_minutes` - The booked duration (60 for every real booking)
/// * `discount_amount` - A concrete discount amount, zero when none applies
///
/// # Errors
///
/// Returns an error if:
/// - The pricing configuration is malformed
/// - The duration is zero
/// - The discount is negative or exceeds rental plus service fee
pub fn price(
    pricing: &PricingConfig,
    duration_minutes: u32,
    discount_amount: Decimal,
) -> Result<PricingBreakdown, DomainError> {
    pricing.validate()?;
    if duration_minutes == 0 {
        return Err(DomainError::InvalidDuration {
            minutes: duration_minutes,
        });
    }
    if discount_amount < Decimal::ZERO {
        return Err(DomainError::NegativeDiscount {
            discount: discount_amount,
        });
    }

    let hundred = Decimal::ONE_HUNDRED;
    let raw_rental =
        pricing.court_rental * Decimal::from(duration_minutes) / Decimal::from(60_u32);

    // Fee from the unrounded rental, then each stage rounded on its own.
    let service_fee = round_money(raw_rental * pricing.service_fee_percentage / hundred);
    let court_rental = round_money(raw_rental);

    let charges = court_rental + service_fee;
    if discount_amount > charges {
        return Err(DomainError::DiscountExceedsCharges {
            discount: discount_amount,
            charges,
        });
    }

    let subtotal = round_money(charges - discount_amount);
    let tax = round_money(subtotal * pricing.tax_percentage / hundred);
    let final_total = round_money(subtotal + tax);

    Ok(PricingBreakdown {
        court_rental,
        service_fee,
        discount_amount,
        subtotal,
        tax,
        final_total,
    })
}

/// Checks a breakdown for drift against a recomputation of each stage.
///
/// Accepts up to one cent of difference per stage, detecting divergence
/// between client and server pricing without failing on representation
/// noise.
#[must_use]
pub fn validate_breakdown(breakdown: &PricingBreakdown, pricing: &PricingConfig) -> bool {
    let hundred = Decimal::ONE_HUNDRED;

    let expected_subtotal =
        breakdown.court_rental + breakdown.service_fee - breakdown.discount_amount;
    if (breakdown.subtotal - expected_subtotal).abs() > cent() {
        return false;
    }

    let expected_tax = round_money(breakdown.subtotal * pricing.tax_percentage / hundred);
    if (breakdown.tax - expected_tax).abs() > cent() {
        return false;
    }

    let expected_total = breakdown.subtotal + breakdown.tax;
    (breakdown.final_total - expected_total).abs() <= cent()
}

/// Converts the final total to minor units for the payment intent.
///
/// # Errors
///
/// Returns an error if the amount does not fit in an `i64`.
pub fn final_total_minor_units(breakdown: &PricingBreakdown) -> Result<i64, DomainError> {
    let minor = round_money(breakdown.final_total) * Decimal::ONE_HUNDRED;
    minor
        .round()
        .to_i64()
        .ok_or(DomainError::AmountOutOfRange {
            amount: breakdown.final_total,
        })
}
