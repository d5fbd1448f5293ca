// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Inclusive calendar-day periods.
//!
//! This module provides:
//! - [`Period`]: a `(from, to)` pair of [`Day`]s, both ends inclusive
//! - [`gaps_within`]: the days of an outer period left uncovered by a sorted list
//! - [`overlaps_between`]: the days claimed twice in a sorted list

use crate::error::PeriodError;
use crate::Day;
use qtty::Days;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{de::Error as _, ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// A run of consecutive calendar days.
///
/// Both `from` and `to` belong to the period, and `from <= to` always holds:
/// the only public constructor checks it.
///
/// # Examples
///
/// ```
/// use daypart::{Day, Period};
/// use qtty::Days;
///
/// let from = Day::ymd(2020, 1, 1).unwrap();
/// let to = Day::ymd(2020, 1, 31).unwrap();
/// let january = Period::new(from, to).unwrap();
///
/// assert_eq!(january.duration_days(), Days::new(31.0));
/// assert!(Period::new(to, from).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    from: Day,
    to: Day,
}

impl Period {
    /// Creates a new period, rejecting `to` earlier than `from`.
    pub fn new(from: Day, to: Day) -> Result<Self, PeriodError> {
        if from > to {
            return Err(PeriodError::Inverted { from, to });
        }
        Ok(Self { from, to })
    }

    /// The whole axis, `Inception` to `Current`.
    #[inline]
    pub const fn axis() -> Self {
        Self {
            from: Day::Inception,
            to: Day::Current,
        }
    }

    /// Internal constructor for bounds already known to be ordered.
    #[inline]
    pub(crate) fn between(from: Day, to: Day) -> Self {
        debug_assert!(from <= to, "period {from}..{to} is inverted");
        Self { from, to }
    }

    /// First day, inclusive.
    #[inline]
    pub const fn from(&self) -> Day {
        self.from
    }

    /// Last day, inclusive.
    #[inline]
    pub const fn to(&self) -> Day {
        self.to
    }

    /// `true` for the default `(Inception, Current)` period.
    #[inline]
    pub fn is_axis(&self) -> bool {
        *self == Self::axis()
    }

    /// Number of days covered, both ends included.
    pub fn duration_days(&self) -> Days {
        Days::new((self.from.days_until(&self.to) + 1) as f64)
    }

    /// Whether `day` falls inside the period.
    #[inline]
    pub fn contains(&self, day: Day) -> bool {
        self.from <= day && day <= self.to
    }

    /// Whether the two periods share a day or sit back to back with no day
    /// between them.
    ///
    /// Checked from `self`'s side: `self.from <= other.to + 1` and
    /// `self.to >= other.from`.
    #[inline]
    pub fn touches(&self, other: &Self) -> bool {
        self.from <= other.to.succ() && self.to >= other.from
    }

    /// Returns the days shared by `self` and `other`.
    ///
    /// Ends are inclusive, so periods meeting on a single day intersect on
    /// that day; back-to-back periods do not intersect.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let from = self.from.max(other.from);
        let to = self.to.min(other.to);
        (from <= to).then(|| Self::between(from, to))
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::axis()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

// Serde support uses the `fromDate` / `toDate` field names of the JSON
// exchanged with front ends.
#[cfg(feature = "serde")]
impl Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Period", 2)?;
        s.serialize_field("fromDate", &self.from)?;
        s.serialize_field("toDate", &self.to)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            from_date: Day,
            to_date: Day,
        }

        let raw = Raw::deserialize(deserializer)?;
        Period::new(raw.from_date, raw.to_date).map_err(D::Error::custom)
    }
}

/// Returns the days of `outer` not covered by any of `periods`.
///
/// `periods` must be sorted by `from`; they may overlap each other.  Runs in
/// O(n) with a single pass.
///
/// # Arguments
/// * `outer` - The bounding period
/// * `periods` - Sub-periods sorted by `from`
///
/// # Returns
/// The uncovered runs in chronological order.
pub fn gaps_within(outer: Period, periods: &[Period]) -> Vec<Period> {
    let mut gaps = Vec::new();
    // First day not yet known to be covered; `None` once `Current` is covered.
    let mut cursor = Some(outer.from);
    for p in periods {
        let Some(next) = cursor else { break };
        if p.from > next {
            let end = p.from.pred().min(outer.to);
            if next <= end {
                gaps.push(Period::between(next, end));
            }
        }
        if p.to >= next {
            cursor = (p.to < Day::Current).then(|| p.to.succ());
        }
    }
    if let Some(next) = cursor {
        if next <= outer.to {
            gaps.push(Period::between(next, outer.to));
        }
    }
    gaps
}

/// Returns every run of days claimed by more than one of `periods`.
///
/// `periods` must be sorted by `from`.  Each period is compared against the
/// furthest-reaching period seen so far, so runs shared by three or more
/// periods are reported once per extra claimant.
pub fn overlaps_between(periods: &[Period]) -> Vec<Period> {
    let mut overlaps = Vec::new();
    let mut reach: Option<Period> = None;
    for p in periods {
        if let Some(r) = reach {
            if let Some(shared) = r.intersection(p) {
                overlaps.push(shared);
            }
            if p.to > r.to {
                reach = Some(*p);
            }
        } else {
            reach = Some(*p);
        }
    }
    overlaps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> Day {
        s.parse().unwrap()
    }

    fn period(from: &str, to: &str) -> Period {
        Period::new(day(from), day(to)).unwrap()
    }

    #[test]
    fn test_period_creation() {
        let p = period("2020-01-01", "2020-06-30");
        assert_eq!(p.from(), day("2020-01-01"));
        assert_eq!(p.to(), day("2020-06-30"));
    }

    #[test]
    fn test_single_day_period_is_valid() {
        let p = period("2020-01-01", "2020-01-01");
        assert_eq!(p.duration_days(), Days::new(1.0));
    }

    #[test]
    fn test_inverted_period_is_rejected() {
        let err = Period::new(day("2020-02-01"), day("2020-01-01")).unwrap_err();
        assert_eq!(
            err,
            PeriodError::Inverted {
                from: day("2020-02-01"),
                to: day("2020-01-01"),
            }
        );
    }

    #[test]
    fn test_axis_is_default() {
        assert_eq!(Period::default(), Period::axis());
        assert!(Period::axis().is_axis());
        assert!(!period("1111-11-11", "2020-01-01").is_axis());
    }

    #[test]
    fn test_period_display() {
        let p = Period::new(Day::Inception, day("2019-12-31")).unwrap();
        assert_eq!(p.to_string(), "1111-11-11 to 2019-12-31");
    }

    #[test]
    fn test_contains_is_inclusive() {
        let p = period("2020-01-01", "2020-06-30");
        assert!(p.contains(day("2020-01-01")));
        assert!(p.contains(day("2020-06-30")));
        assert!(!p.contains(day("2019-12-31")));
        assert!(!p.contains(day("2020-07-01")));
    }

    #[test]
    fn test_touches_counts_adjacency() {
        let a = period("2020-01-01", "2020-06-30");
        let next = period("2020-07-01", "2020-12-31");
        let later = period("2020-07-02", "2020-12-31");
        assert!(next.touches(&a));
        assert!(!later.touches(&a));
    }

    #[test]
    fn test_intersection_overlap() {
        let a = period("2020-01-01", "2020-06-30");
        let b = period("2020-05-01", "2020-12-31");
        assert_eq!(a.intersection(&b), Some(period("2020-05-01", "2020-06-30")));
    }

    #[test]
    fn test_intersection_single_shared_day() {
        let a = period("2020-01-01", "2020-06-30");
        let b = period("2020-06-30", "2020-12-31");
        assert_eq!(a.intersection(&b), Some(period("2020-06-30", "2020-06-30")));
    }

    #[test]
    fn test_intersection_back_to_back() {
        let a = period("2020-01-01", "2020-06-30");
        let b = period("2020-07-01", "2020-12-31");
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_gaps_within_reports_uncovered_runs() {
        let periods = vec![
            period("2020-01-01", "2020-03-31"),
            period("2020-05-01", "2020-06-30"),
        ];
        let gaps = gaps_within(Period::axis(), &periods);
        assert_eq!(
            gaps,
            vec![
                Period::new(Day::Inception, day("2019-12-31")).unwrap(),
                period("2020-04-01", "2020-04-30"),
                Period::new(day("2020-07-01"), Day::Current).unwrap(),
            ]
        );
    }

    #[test]
    fn test_gaps_within_empty() {
        assert_eq!(gaps_within(Period::axis(), &[]), vec![Period::axis()]);
    }

    #[test]
    fn test_gaps_within_full() {
        let periods = vec![
            Period::new(Day::Inception, day("2019-12-31")).unwrap(),
            Period::new(day("2020-01-01"), Day::Current).unwrap(),
        ];
        assert!(gaps_within(Period::axis(), &periods).is_empty());
    }

    #[test]
    fn test_overlaps_between_sorted_periods() {
        let periods = vec![
            period("2020-01-01", "2020-06-30"),
            period("2020-06-01", "2020-07-31"),
            period("2020-08-01", "2020-12-31"),
        ];
        assert_eq!(
            overlaps_between(&periods),
            vec![period("2020-06-01", "2020-06-30")]
        );
    }

    #[test]
    fn test_overlaps_between_nested_period() {
        let periods = vec![
            period("2020-01-01", "2020-12-31"),
            period("2020-03-01", "2020-03-31"),
            period("2020-06-01", "2020-06-30"),
        ];
        assert_eq!(
            overlaps_between(&periods),
            vec![
                period("2020-03-01", "2020-03-31"),
                period("2020-06-01", "2020-06-30"),
            ]
        );
    }
}
