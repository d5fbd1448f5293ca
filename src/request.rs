// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Submitted-form validation.
//!
//! The engine trusts its inputs.  [`PeriodRequest`] is the gate a front end
//! runs a user's `from`/`to` choice through before building the candidate.

use crate::error::RequestError;
use crate::{Day, Period};
use chrono::{Local, NaiveDate};

/// A `from`/`to` pair as entered by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRequest {
    pub from: Day,
    pub to: Day,
}

impl PeriodRequest {
    /// Wrap an already parsed pair.
    pub fn new(from: Day, to: Day) -> Self {
        Self { from, to }
    }

    /// Reads both ends from `YYYY-MM-DD` strings.
    pub fn parse(from: &str, to: &str) -> Result<Self, RequestError> {
        Ok(Self::new(from.parse()?, to.parse()?))
    }

    /// The last day a user may pick as `from` for the given `to`.
    ///
    /// An open-ended period must start before `today`; any other period must
    /// start at least one day before it ends.
    ///
    /// ```
    /// use daypart::{Day, PeriodRequest};
    ///
    /// let today = Day::ymd(2026, 10, 17).unwrap();
    /// assert_eq!(
    ///     PeriodRequest::latest_from(Day::Current, today),
    ///     Day::ymd(2026, 10, 16).unwrap(),
    /// );
    /// ```
    pub fn latest_from(to: Day, today: Day) -> Day {
        match to {
            Day::Current => today.pred(),
            _ => to.pred(),
        }
    }

    /// Checks the request against `today` and builds the candidate period.
    pub fn validate(&self, today: Day) -> Result<Period, RequestError> {
        if self.from >= self.to {
            return Err(RequestError::TooShort {
                from: self.from,
                to: self.to,
            });
        }
        let latest = Self::latest_from(self.to, today);
        if self.from > latest {
            return Err(RequestError::FromTooLate {
                from: self.from,
                latest,
            });
        }
        Ok(Period::between(self.from, self.to))
    }

    /// [`validate`](Self::validate) against the local calendar date.
    pub fn validate_today(&self) -> Result<Period, RequestError> {
        self.validate(local_today()?)
    }
}

fn local_today() -> Result<Day, RequestError> {
    let today: NaiveDate = Local::now().date_naive();
    Ok(Day::date(today)?)
}
