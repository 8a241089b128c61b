// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The sport a court is configured for.
///
/// Sports are fixed domain constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    /// Badminton court.
    Badminton,
    /// Pickleball court.
    Pickleball,
    /// Cricket net/lane.
    Cricket,
}

impl Sport {
    /// Parses a sport from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known sport.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Badminton" => Ok(Self::Badminton),
            "Pickleball" => Ok(Self::Pickleball),
            "Cricket" => Ok(Self::Cricket),
            _ => Err(DomainError::InvalidSport(format!("Unknown sport: {s}"))),
        }
    }

    /// Returns the string representation of this sport.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Badminton => "Badminton",
            Self::Pickleball => "Pickleball",
            Self::Cricket => "Cricket",
        }
    }

    /// Returns the base hourly rate shown for this sport before a slot is
    /// selected.
    ///
    /// Display only. Every charged amount comes from
    /// [`PricingConfig::court_rental`].
    #[must_use]
    pub fn display_hourly_rate(&self) -> Decimal {
        match self {
            Self::Badminton => Decimal::new(25, 0),
            Self::Pickleball => Decimal::new(30, 0),
            Self::Cricket => Decimal::new(45, 0),
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A physical court within a facility.
///
/// The court number is the stable identifier used as the server join key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    /// The stable numeric identifier (server join key).
    court_number: u32,
    /// The display name (e.g., "Court 3").
    name: String,
    /// The sport this court is configured for.
    sport: Sport,
}

impl Court {
    /// Creates a new `Court`.
    ///
    /// # Errors
    ///
    /// Returns an error if the court number is zero.
    pub fn new(court_number: u32, name: String, sport: Sport) -> Result<Self, DomainError> {
        if court_number == 0 {
            return Err(DomainError::InvalidCourtNumber(court_number));
        }
        Ok(Self {
            court_number,
            name,
            sport,
        })
    }

    /// Returns the stable court number.
    #[must_use]
    pub const fn court_number(&self) -> u32 {
        self.court_number
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sport this court is configured for.
    #[must_use]
    pub const fn sport(&self) -> Sport {
        self.sport
    }
}

/// Court topology for one sport, in rows and columns.
///
/// Topology is data-driven from the facility configuration; render code must
/// not hardcode per-court positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtLayout {
    /// Number of rows.
    rows: u8,
    /// Number of columns.
    columns: u8,
}

impl CourtLayout {
    /// Creates a new `CourtLayout`.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub const fn new(rows: u8, columns: u8) -> Result<Self, DomainError> {
        if rows == 0 || columns == 0 {
            return Err(DomainError::InvalidLayout { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    /// Returns the row count.
    #[must_use]
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Returns the column count.
    #[must_use]
    pub const fn columns(&self) -> u8 {
        self.columns
    }
}

/// A whole-hour operating window, `[open, close)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHours {
    /// Opening hour (0-23).
    pub(crate) open: u8,
    /// Closing hour (1-24, exclusive).
    pub(crate) close: u8,
}

impl DailyHours {
    /// Creates a new `DailyHours` window.
    ///
    /// # Errors
    ///
    /// Returns an error unless `open < close` and both fall within 0-24.
    pub const fn new(open: u8, close: u8) -> Result<Self, DomainError> {
        if open < close && close <= 24 {
            Ok(Self { open, close })
        } else {
            Err(DomainError::InvalidOperatingHours { open, close })
        }
    }

    /// Returns the opening hour.
    #[must_use]
    pub const fn open(&self) -> u8 {
        self.open
    }

    /// Returns the closing hour (exclusive).
    #[must_use]
    pub const fn close(&self) -> u8 {
        self.close
    }

    /// Checks the window invariant.
    ///
    /// Deserialized values bypass [`DailyHours::new`], so configuration
    /// loaded from the backend must be re-validated.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.open < self.close && self.close <= 24
    }
}

/// Weekday and weekend operating windows for a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingHours {
    /// Monday through Friday window.
    pub weekday: DailyHours,
    /// Saturday and Sunday window.
    pub weekend: DailyHours,
}

impl OperatingHours {
    /// Fallback weekday window (8:00-20:00) used when a facility supplies
    /// no hours, so the system degrades rather than crashes.
    pub const DEFAULT_WEEKDAY: DailyHours = DailyHours { open: 8, close: 20 };

    /// Fallback weekend window (6:00-22:00).
    pub const DEFAULT_WEEKEND: DailyHours = DailyHours { open: 6, close: 22 };

    /// Returns the window for the given day kind.
    #[must_use]
    pub const fn window_for(&self, is_weekend: bool) -> DailyHours {
        if is_weekend { self.weekend } else { self.weekday }
    }
}

impl Default for OperatingHours {
    fn default() -> Self {
        Self {
            weekday: Self::DEFAULT_WEEKDAY,
            weekend: Self::DEFAULT_WEEKEND,
        }
    }
}

/// Per-hour pricing for a facility.
///
/// Percentages are expressed as whole numbers (1 = 1%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Hourly court rental rate.
    pub court_rental: Decimal,
    /// Service fee percentage applied to the rental.
    pub service_fee_percentage: Decimal,
    /// Tax percentage applied to the subtotal.
    pub tax_percentage: Decimal,
    /// ISO currency code (e.g., "CAD").
    pub currency: String,
}

impl PricingConfig {
    /// Validates the pricing configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPricingConfig`] if the rental rate is
    /// not positive, a percentage falls outside 0-100, or the currency code
    /// is empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.court_rental <= Decimal::ZERO {
            return Err(DomainError::InvalidPricingConfig {
                reason: format!("court rental must be positive, got {}", self.court_rental),
            });
        }
        let hundred = Decimal::ONE_HUNDRED;
        if self.service_fee_percentage < Decimal::ZERO || self.service_fee_percentage > hundred {
            return Err(DomainError::InvalidPricingConfig {
                reason: format!(
                    "service fee percentage must be within 0-100, got {}",
                    self.service_fee_percentage
                ),
            });
        }
        if self.tax_percentage < Decimal::ZERO || self.tax_percentage > hundred {
            return Err(DomainError::InvalidPricingConfig {
                reason: format!(
                    "tax percentage must be within 0-100, got {}",
                    self.tax_percentage
                ),
            });
        }
        if self.currency.trim().is_empty() {
            return Err(DomainError::InvalidPricingConfig {
                reason: String::from("currency code is empty"),
            });
        }
        Ok(())
    }
}

/// One tenant of the multi-tenant system.
///
/// A facility snapshot is immutable once loaded and replaced wholesale only
/// on tenant switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityConfig {
    /// The canonical numeric identifier assigned by the backend.
    /// `None` indicates a facility constructed locally (tests, fixtures).
    facility_id: Option<i64>,
    /// The URL slug identifying the tenant. Normalized to lowercase.
    slug: String,
    /// The facility display name.
    pub name: String,
    /// All courts at this facility.
    pub courts: Vec<Court>,
    /// Pricing for this facility.
    pub pricing: PricingConfig,
    /// Weekday and weekend operating windows. Facilities that declare none
    /// get the hardcoded default windows.
    #[serde(default)]
    pub hours: Option<OperatingHours>,
    /// Court topology per sport.
    pub layouts: Vec<(Sport, CourtLayout)>,
}

impl FacilityConfig {
    /// Fallback topology when a facility declares none for a sport.
    const DEFAULT_LAYOUT: CourtLayout = CourtLayout { rows: 1, columns: 4 };

    /// Creates a new `FacilityConfig` without a backend-assigned ID.
    ///
    /// Slugs are normalized to lowercase.
    #[must_use]
    pub fn new(
        slug: &str,
        name: String,
        courts: Vec<Court>,
        pricing: PricingConfig,
        hours: Option<OperatingHours>,
        layouts: Vec<(Sport, CourtLayout)>,
    ) -> Self {
        Self {
            facility_id: None,
            slug: slug.to_lowercase(),
            name,
            courts,
            pricing,
            hours,
            layouts,
        }
    }

    /// Creates a `FacilityConfig` with a backend-assigned ID.
    #[must_use]
    pub fn with_id(
        facility_id: i64,
        slug: &str,
        name: String,
        courts: Vec<Court>,
        pricing: PricingConfig,
        hours: Option<OperatingHours>,
        layouts: Vec<(Sport, CourtLayout)>,
    ) -> Self {
        Self {
            facility_id: Some(facility_id),
            slug: slug.to_lowercase(),
            name,
            courts,
            pricing,
            hours,
            layouts,
        }
    }

    /// Returns the backend-assigned identifier if present.
    #[must_use]
    pub const fn facility_id(&self) -> Option<i64> {
        self.facility_id
    }

    /// Returns the tenant slug.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the operating windows, falling back to the defaults when the
    /// facility declares none.
    #[must_use]
    pub fn effective_hours(&self) -> OperatingHours {
        self.hours.unwrap_or_default()
    }

    /// Looks up a court by its stable number.
    #[must_use]
    pub fn court(&self, court_number: u32) -> Option<&Court> {
        self.courts
            .iter()
            .find(|c| c.court_number() == court_number)
    }

    /// Returns the declared topology for a sport, or the fallback layout.
    #[must_use]
    pub fn layout_for(&self, sport: Sport) -> CourtLayout {
        self.layouts
            .iter()
            .find(|(s, _)| *s == sport)
            .map_or(Self::DEFAULT_LAYOUT, |(_, layout)| *layout)
    }

    /// Returns the courts configured for a sport, in declaration order.
    #[must_use]
    pub fn courts_for(&self, sport: Sport) -> Vec<&Court> {
        self.courts.iter().filter(|c| c.sport() == sport).collect()
    }
}
