// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The availability snapshot with staleness protection.
//!
//! In-flight fetches cannot be cancelled. Rapid date changes can therefore
//! leave several responses in flight at once, and an older response landing
//! last must not overwrite newer state. Every fetch takes a monotonically
//! increasing ticket; only the latest ticket may install its result. The
//! begin/install split keeps the rule testable without real concurrency.

use court_book_api::ApiError;
use court_book_domain::AvailabilityGrid;
use time::Date;
use tracing::{debug, warn};

/// The current availability snapshot for one (facility, date).
#[derive(Debug, Default)]
pub struct AvailabilityView {
    /// The installed snapshot. Empty until the first successful fetch.
    grid: AvailabilityGrid,
    /// The date the installed snapshot belongs to.
    date: Option<Date>,
    /// Ticket of the most recently issued fetch.
    latest_ticket: u64,
    /// Retryable fetch failure, cleared by the next successful install.
    error: Option<ApiError>,
}

impl AvailabilityView {
    /// Creates an empty view (everything unavailable, no error).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new fetch and returns its ticket.
    ///
    /// Issuing a new ticket supersedes every fetch still in flight.
    pub const fn begin_fetch(&mut self) -> u64 {
        self.latest_ticket += 1;
        self.latest_ticket
    }

    /// Installs a fetch result if its ticket is still the latest.
    ///
    /// Returns whether the result was installed. A superseded response is
    /// discarded without touching the snapshot. A failed fetch clears the
    /// snapshot to empty — a failed fetch must never leave stale
    /// "available" answers behind — and records a retryable error.
    pub fn install(
        &mut self,
        ticket: u64,
        date: Date,
        result: Result<AvailabilityGrid, ApiError>,
    ) -> bool {
        if ticket < self.latest_ticket {
            debug!(
                ticket,
                latest = self.latest_ticket,
                "Discarding superseded availability response"
            );
            return false;
        }
        match result {
            Ok(grid) => {
                self.grid = grid;
                self.date = Some(date);
                self.error = None;
            }
            Err(err) => {
                warn!(%err, %date, "Availability fetch failed; clearing snapshot");
                self.grid = AvailabilityGrid::new();
                self.date = Some(date);
                self.error = Some(err);
            }
        }
        true
    }

    /// Returns the installed snapshot.
    #[must_use]
    pub const fn grid(&self) -> &AvailabilityGrid {
        &self.grid
    }

    /// Returns the date the snapshot belongs to.
    #[must_use]
    pub const fn date(&self) -> Option<Date> {
        self.date
    }

    /// Returns the retryable fetch error, if the last fetch failed.
    #[must_use]
    pub const fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }
}
