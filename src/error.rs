// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for day parsing, period construction, and partition checks.

use crate::Day;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while reading a calendar-day identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DayError {
    #[error("`{0}` is not a YYYY-MM-DD calendar date")]
    Malformed(String),

    #[error("{0} lies outside the inception/current axis")]
    OutOfRange(NaiveDate),
}

/// Errors raised while building a [`Period`](crate::Period).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("period starts on {from} but ends earlier, on {to}")]
    Inverted { from: Day, to: Day },
}

/// Invariant violations reported by [`Partition::validate`](crate::Partition::validate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("partition holds no periods")]
    Empty,

    #[error("partition spans {from} to {to} instead of the whole axis")]
    Unanchored { from: Day, to: Day },

    #[error("periods overlap between {from} and {to}")]
    Overlap { from: Day, to: Day },

    #[error("no period covers {from} to {to}")]
    Gap { from: Day, to: Day },
}

/// Errors raised while validating a user-submitted period.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error(transparent)]
    Day(#[from] DayError),

    #[error("from date {from} must precede to date {to} by at least one day")]
    TooShort { from: Day, to: Day },

    #[error("from date {from} is after the latest selectable day {latest}")]
    FromTooLate { from: Day, latest: Day },
}
