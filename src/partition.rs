// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Owned partition state.
//!
//! [`Partition`] is what a caller keeps between edits.  It starts as the
//! single default period and is replaced wholesale by [`Partition::apply`];
//! nothing mutates it in place.

use crate::engine::{self, Operation};
use crate::error::PartitionError;
use crate::period::{gaps_within, overlaps_between};
use crate::{Day, Period};
use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A gapless, non-overlapping cover of the axis by [`Period`]s.
///
/// The periods keep the order the engine returned them in, which is also
/// the display order.
///
/// # Examples
///
/// ```
/// use daypart::{Day, Operation, Partition, Period};
///
/// let partition = Partition::default();
/// assert!(partition.is_default());
///
/// let h1 = Period::new(Day::ymd(2020, 1, 1).unwrap(), Day::ymd(2020, 6, 30).unwrap()).unwrap();
/// let partition = partition.apply(Operation::Add { candidate: h1 });
///
/// assert_eq!(partition.len(), 3);
/// assert!(partition.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Period>", into = "Vec<Period>")
)]
pub struct Partition {
    periods: Vec<Period>,
}

impl Partition {
    /// Borrow the periods in display order.
    #[inline]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Number of periods.
    #[inline]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Always `false` for a partition that passed validation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Iterate the periods in display order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Period> {
        self.periods.iter()
    }

    /// The periods in canonical (`from`) order.
    pub fn sorted(&self) -> Vec<Period> {
        engine::sorted(&self.periods)
    }

    /// `true` while only the default `(Inception, Current)` period exists.
    #[inline]
    pub fn is_default(&self) -> bool {
        engine::is_default_only(&self.periods)
    }

    /// Whether editing or deleting periods is meaningful yet.
    #[inline]
    pub fn is_editable(&self) -> bool {
        !self.is_default()
    }

    /// Advisory overlap check for `candidate`, see [`check_overlap`](crate::check_overlap).
    pub fn check_overlap(&self, candidate: &Period) -> bool {
        engine::check_overlap(candidate, &self.periods)
    }

    /// Advisory overlap check for replacing the period at `index`.
    ///
    /// The period being edited is left out, so a candidate only reports an
    /// overlap with the other periods.
    pub fn check_edit_overlap(&self, index: usize, candidate: &Period) -> bool {
        let others: Vec<Period> = self
            .periods
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, period)| *period)
            .collect();
        engine::check_overlap(candidate, &others)
    }

    /// Returns the partition produced by `op`.
    pub fn apply(&self, op: Operation) -> Self {
        Self {
            periods: engine::compute_partition(op, &self.periods),
        }
    }

    /// The "to" values a form may offer: `Current` first, then every
    /// distinct concrete period end in ascending order.
    pub fn to_options(&self) -> Vec<Day> {
        let ends: BTreeSet<Day> = self
            .periods
            .iter()
            .map(Period::to)
            .filter(|day| !day.is_sentinel())
            .collect();
        std::iter::once(Day::Current).chain(ends).collect()
    }

    /// Checks the covering and non-overlap invariants.
    pub fn validate(&self) -> Result<(), PartitionError> {
        validate_periods(&self.periods)
    }
}

impl Default for Partition {
    fn default() -> Self {
        Self {
            periods: vec![Period::axis()],
        }
    }
}

impl TryFrom<Vec<Period>> for Partition {
    type Error = PartitionError;

    fn try_from(periods: Vec<Period>) -> Result<Self, Self::Error> {
        validate_periods(&periods)?;
        Ok(Self { periods })
    }
}

impl From<Partition> for Vec<Period> {
    fn from(partition: Partition) -> Self {
        partition.periods
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Period;
    type IntoIter = std::slice::Iter<'a, Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}

/// One period per line, with human labels.
impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, period) in self.periods.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} to {}", period.from().label(), period.to().label())?;
        }
        Ok(())
    }
}

fn validate_periods(periods: &[Period]) -> Result<(), PartitionError> {
    let sorted = engine::sorted(periods);
    let (Some(first), Some(last)) = (sorted.first(), sorted.iter().map(Period::to).max()) else {
        return Err(PartitionError::Empty);
    };
    if first.from() != Day::Inception || last != Day::Current {
        return Err(PartitionError::Unanchored {
            from: first.from(),
            to: last,
        });
    }
    if let Some(shared) = overlaps_between(&sorted).first() {
        return Err(PartitionError::Overlap {
            from: shared.from(),
            to: shared.to(),
        });
    }
    if let Some(gap) = gaps_within(Period::axis(), &sorted).first() {
        return Err(PartitionError::Gap {
            from: gap.from(),
            to: gap.to(),
        });
    }
    Ok(())
}
