// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::slots::to_24h;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The per-date, per-court, per-slot bookability table.
///
/// Sourced wholesale from the backend for one (facility, date) pair. The
/// client never mutates it optimistically: after a booking is created the
/// grid stays as-is until an explicit refresh (cancellation event or user
/// action) replaces the whole snapshot.
///
/// Keys are present only for times within that date's operating window. An
/// absent key means unavailable, never available and never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityGrid {
    /// Court number to 24-hour time ("HH:MM") to bookable flag.
    courts: HashMap<u32, HashMap<String, bool>>,
}

impl AvailabilityGrid {
    /// Creates an empty grid (everything unavailable).
    #[must_use]
    pub fn new() -> Self {
        Self {
            courts: HashMap::new(),
        }
    }

    /// Looks up whether a slot is bookable.
    ///
    /// An absent court or time key is unavailable.
    #[must_use]
    pub fn is_available(&self, court_number: u32, time_24: &str) -> bool {
        self.courts
            .get(&court_number)
            .and_then(|times| times.get(time_24))
            .copied()
            .unwrap_or(false)
    }

    /// Looks up a slot by its 12-hour display label.
    ///
    /// The label goes through the reversible 12h→24h conversion before the
    /// grid lookup; grid keys are always 24-hour.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is not a valid 12-hour time.
    pub fn is_available_label(
        &self,
        court_number: u32,
        label: &str,
    ) -> Result<bool, DomainError> {
        let time_24 = to_24h(label)?;
        Ok(self.is_available(court_number, &time_24))
    }

    /// Sets a single slot's bookable flag.
    ///
    /// Used to build snapshots in fixtures and backend fakes; production
    /// grids arrive whole from the backend.
    pub fn set(&mut self, court_number: u32, time_24: &str, available: bool) {
        self.courts
            .entry(court_number)
            .or_default()
            .insert(time_24.to_string(), available);
    }

    /// Returns whether the snapshot carries no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courts.is_empty()
    }
}
