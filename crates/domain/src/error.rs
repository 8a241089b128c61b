// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Facility slug is empty or invalid.
    InvalidSlug(String),
    /// Facility has no courts configured.
    NoCourtsConfigured {
        /// The facility slug.
        slug: String,
    },
    /// Court number must be 1 or greater.
    InvalidCourtNumber(u32),
    /// The requested court does not exist in the facility.
    CourtNotFound {
        /// The facility slug.
        slug: String,
        /// The requested court number.
        court_number: u32,
    },
    /// Sport tag is not recognized.
    InvalidSport(String),
    /// Court layout must have at least one row and one column.
    InvalidLayout {
        /// The row count.
        rows: u8,
        /// The column count.
        columns: u8,
    },
    /// Operating hours window is invalid.
    InvalidOperatingHours {
        /// The opening hour.
        open: u8,
        /// The closing hour.
        close: u8,
    },
    /// Facility pricing configuration is missing or malformed.
    ///
    /// This is fatal to a booking session: progress past slot selection
    /// must be blocked rather than computing a garbage price.
    InvalidPricingConfig {
        /// Description of the configuration problem.
        reason: String,
    },
    /// A time label could not be parsed.
    InvalidTimeLabel(String),
    /// Booking duration must be a positive number of minutes.
    InvalidDuration {
        /// The invalid duration in minutes.
        minutes: u32,
    },
    /// Discount amount may not be negative.
    NegativeDiscount {
        /// The invalid discount amount.
        discount: Decimal,
    },
    /// Discount amount exceeds the rental plus service fee.
    DiscountExceedsCharges {
        /// The discount amount.
        discount: Decimal,
        /// The rental plus service fee it was applied against.
        charges: Decimal,
    },
    /// A money amount could not be represented in minor units.
    AmountOutOfRange {
        /// The amount that failed conversion.
        amount: Decimal,
    },
    /// Customer name is empty or invalid.
    InvalidCustomerName(String),
    /// Customer email does not have a basic `local@domain` shape.
    InvalidCustomerEmail(String),
    /// Failed to format a date for the backend.
    DateFormatError {
        /// The formatting error message.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSlug(msg) => write!(f, "Invalid facility slug: {msg}"),
            Self::NoCourtsConfigured { slug } => {
                write!(f, "Facility '{slug}' has no courts configured")
            }
            Self::InvalidCourtNumber(number) => {
                write!(f, "Invalid court number: {number}. Must be 1 or greater")
            }
            Self::CourtNotFound { slug, court_number } => {
                write!(f, "Court {court_number} not found in facility '{slug}'")
            }
            Self::InvalidSport(msg) => write!(f, "Invalid sport: {msg}"),
            Self::InvalidLayout { rows, columns } => {
                write!(
                    f,
                    "Invalid court layout: {rows}x{columns}. Rows and columns must be at least 1"
                )
            }
            Self::InvalidOperatingHours { open, close } => {
                write!(
                    f,
                    "Invalid operating hours: open {open} must be before close {close} within 0-24"
                )
            }
            Self::InvalidPricingConfig { reason } => {
                write!(f, "Invalid pricing configuration: {reason}")
            }
            Self::InvalidTimeLabel(label) => write!(f, "Invalid time label: '{label}'"),
            Self::InvalidDuration { minutes } => {
                write!(f, "Invalid booking duration: {minutes} minutes")
            }
            Self::NegativeDiscount { discount } => {
                write!(f, "Discount amount may not be negative: {discount}")
            }
            Self::DiscountExceedsCharges { discount, charges } => {
                write!(
                    f,
                    "Discount {discount} exceeds the rental and service fee total {charges}"
                )
            }
            Self::AmountOutOfRange { amount } => {
                write!(f, "Amount {amount} cannot be represented in minor units")
            }
            Self::InvalidCustomerName(msg) => write!(f, "Invalid customer name: {msg}"),
            Self::InvalidCustomerEmail(msg) => write!(f, "Invalid customer email: {msg}"),
            Self::DateFormatError { reason } => {
                write!(f, "Failed to format date: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
