//! Booking status enumeration and transition rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use guesthouse_core::error::AppError;

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Created by the guest flow, awaiting admin review.
    Pending,
    /// Confirmed by the admin.
    Confirmed,
    /// Cancelled by the admin. The dates become available again.
    Cancelled,
}

impl BookingStatus {
    /// Check if the status is in a terminal state for the review flow.
    ///
    /// The exposed admin surface offers no transition out of `confirmed`
    /// or `cancelled`; only the raw store call could do that.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Cancelled)
    }

    /// Whether a booking in this status occupies its dates.
    pub fn occupies_dates(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    /// Whether the review flow permits moving to `next` from here.
    pub fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed) | (Self::Pending, Self::Cancelled)
        )
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(AppError::validation(format!(
                "Invalid booking status: {other}"
            ))),
        }
    }
}
