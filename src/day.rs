// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-day identifiers.
//!
//! [`Day`] is the only place where dates are compared or stepped.  A day is
//! either one of the two axis sentinels or an [`AxisDate`] lying strictly
//! between them.  An [`AxisDate`] can only be obtained through [`Day::date`]
//! (or [`Day::ymd`], parsing, stepping), so a sentinel date can never hide
//! inside the `Date` variant:
//!
//! | Variant | Wire literal | Label |
//! |---------|--------------|-------|
//! | [`Day::Inception`] | `1111-11-11` | `Inception Date` |
//! | [`Day::Date`] | `YYYY-MM-DD` | `MM/DD/YYYY` |
//! | [`Day::Current`] | `9999-12-31` | `Cur Date` |
//!
//! The ordering is the variant order, so the sentinels bound every concrete
//! date no matter how their literals compare as text.  Arithmetic works on
//! whole days and saturates at the sentinels.

use crate::error::DayError;
use chrono::NaiveDate;
use qtty::Days;
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

/// Wire literal of the inception sentinel.
pub const INCEPTION_LITERAL: &str = "1111-11-11";

/// Wire literal of the open-ended current sentinel.
pub const CURRENT_LITERAL: &str = "9999-12-31";

const WIRE_FORMAT: &str = "%Y-%m-%d";
const LABEL_FORMAT: &str = "%m/%d/%Y";

const INCEPTION_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1111, 11, 11) {
    Some(date) => date,
    None => panic!("inception date is a valid calendar day"),
};

const CURRENT_DATE: NaiveDate = match NaiveDate::from_ymd_opt(9999, 12, 31) {
    Some(date) => date,
    None => panic!("current date is a valid calendar day"),
};

// ═══════════════════════════════════════════════════════════════════════════
// Day
// ═══════════════════════════════════════════════════════════════════════════

/// A concrete date strictly between the two sentinels.
///
/// The field is private; values come only from [`Day`] constructors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AxisDate(NaiveDate);

impl AxisDate {
    /// The underlying calendar date.
    #[inline]
    pub const fn get(&self) -> NaiveDate {
        self.0
    }
}

impl From<AxisDate> for NaiveDate {
    #[inline]
    fn from(date: AxisDate) -> Self {
        date.0
    }
}

/// A calendar day on the partition axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    /// The first day of the axis.
    Inception,
    /// A concrete date strictly between the two sentinels.
    Date(AxisDate),
    /// The open-ended present/future marker, last day of the axis.
    Current,
}

impl Day {
    // ── constructors ──────────────────────────────────────────────────

    /// Classify a calendar date.
    ///
    /// The sentinel dates map onto their sentinels; anything outside the
    /// axis is rejected.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use daypart::Day;
    ///
    /// let d = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    /// assert_eq!(Day::date(d).unwrap().calendar_date(), d);
    /// assert!(!Day::date(d).unwrap().is_sentinel());
    ///
    /// let cur = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
    /// assert_eq!(Day::date(cur), Ok(Day::Current));
    /// ```
    pub fn date(date: NaiveDate) -> Result<Self, DayError> {
        if date < INCEPTION_DATE || date > CURRENT_DATE {
            return Err(DayError::OutOfRange(date));
        }
        Ok(Self::on_axis(date))
    }

    /// Build a day from year, month and day numbers.
    pub fn ymd(year: i32, month: u32, day: u32) -> Result<Self, DayError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| DayError::Malformed(format!("{year:04}-{month:02}-{day:02}")))?;
        Self::date(date)
    }

    /// Classify a date already known to lie on the axis.
    #[inline]
    fn on_axis(date: NaiveDate) -> Self {
        if date == INCEPTION_DATE {
            Day::Inception
        } else if date == CURRENT_DATE {
            Day::Current
        } else {
            Day::Date(AxisDate(date))
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The calendar date this day stands for, sentinels included.
    #[inline]
    pub const fn calendar_date(&self) -> NaiveDate {
        match self {
            Day::Inception => INCEPTION_DATE,
            Day::Date(date) => date.0,
            Day::Current => CURRENT_DATE,
        }
    }

    /// `true` for `Inception` and `Current`.
    #[inline]
    pub const fn is_sentinel(&self) -> bool {
        !matches!(self, Day::Date(_))
    }

    /// Human-facing label: sentinel names, otherwise `MM/DD/YYYY`.
    pub fn label(&self) -> String {
        match self {
            Day::Inception => "Inception Date".to_owned(),
            Day::Current => "Cur Date".to_owned(),
            Day::Date(date) => date.0.format(LABEL_FORMAT).to_string(),
        }
    }

    // ── day arithmetic ────────────────────────────────────────────────

    /// The following day; `Current` is its own successor.
    #[inline]
    pub fn succ(self) -> Self {
        match self {
            Day::Current => Day::Current,
            _ => self
                .calendar_date()
                .succ_opt()
                .map_or(Day::Current, Self::on_axis),
        }
    }

    /// The preceding day; `Inception` is its own predecessor.
    #[inline]
    pub fn pred(self) -> Self {
        match self {
            Day::Inception => Day::Inception,
            _ => self
                .calendar_date()
                .pred_opt()
                .map_or(Day::Inception, Self::on_axis),
        }
    }

    /// Signed number of days from `self` to `other`.
    #[inline]
    pub fn days_until(&self, other: &Self) -> i64 {
        other
            .calendar_date()
            .signed_duration_since(self.calendar_date())
            .num_days()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display / FromStr ─────────────────────────────────────────────────────

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Day::Inception => f.write_str(INCEPTION_LITERAL),
            Day::Current => f.write_str(CURRENT_LITERAL),
            Day::Date(date) => write!(f, "{}", date.0.format(WIRE_FORMAT)),
        }
    }
}

impl FromStr for Day {
    type Err = DayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            INCEPTION_LITERAL => Ok(Day::Inception),
            CURRENT_LITERAL => Ok(Day::Current),
            _ => {
                let date = NaiveDate::parse_from_str(s, WIRE_FORMAT)
                    .map_err(|_| DayError::Malformed(s.to_owned()))?;
                // chrono accepts unpadded fields; the wire form does not.
                if date.format(WIRE_FORMAT).to_string() != s {
                    return Err(DayError::Malformed(s.to_owned()));
                }
                Self::date(date)
            }
        }
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Sub for Day {
    type Output = Days;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Days::new(rhs.days_until(&self) as f64)
    }
}

impl From<Day> for NaiveDate {
    #[inline]
    fn from(day: Day) -> Self {
        day.calendar_date()
    }
}

impl TryFrom<NaiveDate> for Day {
    type Error = DayError;

    #[inline]
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::date(date)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Day {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Day {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sentinels_bound_every_date() {
        let early = Day::ymd(1200, 1, 1).unwrap();
        let late = Day::ymd(9000, 1, 1).unwrap();
        assert!(Day::Inception < early);
        assert!(early < late);
        assert!(late < Day::Current);
    }

    #[test]
    fn test_parse_sentinel_literals() {
        assert_eq!("1111-11-11".parse::<Day>(), Ok(Day::Inception));
        assert_eq!("9999-12-31".parse::<Day>(), Ok(Day::Current));
        assert_eq!(
            "2020-02-29".parse::<Day>().map(|d| d.calendar_date()),
            Ok(date(2020, 2, 29))
        );
    }

    #[test]
    fn test_parse_rejects_garbage_and_out_of_axis() {
        assert_eq!(
            "2021-02-29".parse::<Day>(),
            Err(DayError::Malformed("2021-02-29".into()))
        );
        assert_eq!(
            "yesterday".parse::<Day>(),
            Err(DayError::Malformed("yesterday".into()))
        );
        assert_eq!(
            "1000-01-01".parse::<Day>(),
            Err(DayError::OutOfRange(date(1000, 1, 1)))
        );
    }

    #[test]
    fn test_parse_rejects_unpadded_fields() {
        for s in ["2020-1-1", "2020-01-1", "2020-1-01", "+2020-01-01"] {
            assert_eq!(s.parse::<Day>(), Err(DayError::Malformed(s.into())), "{s}");
        }
    }

    #[test]
    fn test_sentinel_dates_never_become_concrete_days() {
        assert_eq!(Day::date(INCEPTION_DATE), Ok(Day::Inception));
        assert_eq!(Day::date(CURRENT_DATE), Ok(Day::Current));
        assert_eq!(Day::try_from(date(1111, 11, 11)), Ok(Day::Inception));

        let before = date(1111, 11, 10);
        assert_eq!(Day::date(before), Err(DayError::OutOfRange(before)));
        let ancient = date(1, 1, 1);
        assert_eq!(Day::date(ancient), Err(DayError::OutOfRange(ancient)));

        // Stepping off either sentinel lands on a concrete day, never a
        // disguised sentinel.
        match Day::Inception.succ() {
            Day::Date(inner) => assert_eq!(inner.get(), date(1111, 11, 12)),
            other => panic!("expected a concrete day, got {other:?}"),
        }
        assert!(Day::ymd(1111, 11, 12).unwrap().pred().is_sentinel());
    }

    #[test]
    fn test_display_roundtrips_wire_form() {
        for s in ["1111-11-11", "2020-01-01", "9999-12-31", "2000-02-29"] {
            assert_eq!(s.parse::<Day>().unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_succ_and_pred_cross_month_and_leap_day() {
        let feb28 = Day::ymd(2020, 2, 28).unwrap();
        assert_eq!(feb28.succ(), Day::ymd(2020, 2, 29).unwrap());
        assert_eq!(feb28.succ().succ(), Day::ymd(2020, 3, 1).unwrap());
        assert_eq!(Day::ymd(2021, 1, 1).unwrap().pred(), Day::ymd(2020, 12, 31).unwrap());
    }

    #[test]
    fn test_arithmetic_steps_onto_and_saturates_at_sentinels() {
        assert_eq!(Day::ymd(9999, 12, 30).unwrap().succ(), Day::Current);
        assert_eq!(Day::Current.succ(), Day::Current);
        assert_eq!(Day::Current.pred(), Day::ymd(9999, 12, 30).unwrap());

        assert_eq!(Day::ymd(1111, 11, 12).unwrap().pred(), Day::Inception);
        assert_eq!(Day::Inception.pred(), Day::Inception);
        assert_eq!(Day::Inception.succ(), Day::ymd(1111, 11, 12).unwrap());
    }

    #[test]
    fn test_days_until_and_sub() {
        let a = Day::ymd(2020, 1, 1).unwrap();
        let b = Day::ymd(2020, 12, 31).unwrap();
        assert_eq!(a.days_until(&b), 365);
        assert_eq!(b.days_until(&a), -365);
        assert_eq!(b - a, Days::new(365.0));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Day::Inception.label(), "Inception Date");
        assert_eq!(Day::Current.label(), "Cur Date");
        assert_eq!(Day::ymd(2020, 7, 4).unwrap().label(), "07/04/2020");
    }

    #[test]
    fn test_sentinel_flag() {
        let d = Day::ymd(2020, 7, 4).unwrap();
        assert!(Day::Inception.is_sentinel());
        assert!(!d.is_sentinel());
    }
}
