// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Partition reconciliation.
//!
//! Every function here is pure: it borrows the current periods, builds a new
//! sequence and never touches its input.  The public operations all finish
//! with [`normalize`], which is what guarantees the result covers the axis
//! from `Inception` to `Current` with no gap and no overlap.
//!
//! # Placement of a new period
//!
//! | Candidate start | Candidate end | Placement |
//! |-----------------|---------------|-----------|
//! | inside period `w` | at or before `w.to` | split `w` around it |
//! | inside period `w` | after `w.to` | merge from `w` onwards |
//! | in a gap, nothing after | any | append |
//! | in a gap before `b` | a full day before `b` | insert before `b` |
//! | in a gap before `b` | reaching `b` | merge from `b` onwards |
//!
//! Merges absorb every following period that starts no later than the day
//! after the candidate ends.  Absorbed periods are clipped at the
//! candidate's end; a period reaching past it keeps its remainder.

use crate::{Day, Period};
use std::iter;
use tracing::{debug, trace, warn};

/// A requested change to a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Introduce a new period.
    Add { candidate: Period },
    /// Replace the period at `index` (caller order) with `candidate`.
    Edit { index: usize, candidate: Period },
    /// Remove the period at `index` (caller order) and heal the gap.
    Delete { index: usize },
}

/// How [`add`] fits a candidate into the sorted periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Append,
    Insert(usize),
    Split(usize),
    Merge(usize),
}

/// Applies `op` to `current` and returns the reconciled partition.
pub fn compute_partition(op: Operation, current: &[Period]) -> Vec<Period> {
    match op {
        Operation::Add { candidate } => add(candidate, current),
        Operation::Edit { index, candidate } => edit(index, candidate, current),
        Operation::Delete { index } => delete(index, current),
    }
}

/// Advisory check run before submitting `candidate`.
///
/// Returns `true` when the candidate would merge with at least one existing
/// period, counting periods it merely sits next to.  The default single
/// period never reports an overlap, so the first real period can always be
/// added without confirmation.
///
/// ```
/// use daypart::{check_overlap, Day, Period};
///
/// let candidate = Period::new(
///     Day::ymd(2020, 1, 1).unwrap(),
///     Day::ymd(2020, 6, 30).unwrap(),
/// ).unwrap();
/// assert!(!check_overlap(&candidate, &[Period::axis()]));
/// ```
pub fn check_overlap(candidate: &Period, existing: &[Period]) -> bool {
    if is_default_only(existing) {
        return false;
    }
    existing.iter().any(|period| candidate.touches(period))
}

/// Adds `candidate`, splitting or merging neighbours as needed.
///
/// Against an empty partition the candidate is returned on its own.
pub fn add(candidate: Period, existing: &[Period]) -> Vec<Period> {
    if existing.is_empty() {
        return vec![candidate];
    }
    normalize(&place(candidate, existing))
}

/// Replaces the period at `index` with `candidate`.
///
/// The old period is dropped first and `candidate` is then placed as if it
/// were new.  An `index` past the end leaves the partition unchanged.
pub fn edit(index: usize, candidate: Period, existing: &[Period]) -> Vec<Period> {
    if existing.is_empty() {
        return vec![candidate];
    }
    let Some(replaced) = existing.get(index) else {
        warn!(index, len = existing.len(), "edit index out of range, partition unchanged");
        return existing.to_vec();
    };
    debug!(index, %replaced, %candidate, "editing period");

    let remaining: Vec<Period> = existing
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, period)| *period)
        .collect();
    normalize(&place(candidate, &remaining))
}

/// Removes the period at `index`, letting a neighbour take over its days.
///
/// The preceding period (in date order) absorbs the removed days; when the
/// first period is removed its successor reaches back instead.  The last
/// remaining period can never be removed.
pub fn delete(index: usize, existing: &[Period]) -> Vec<Period> {
    if existing.len() <= 1 {
        warn!(index, "refusing to delete the only period");
        return existing.to_vec();
    }
    let Some(&target) = existing.get(index) else {
        warn!(index, len = existing.len(), "delete index out of range, partition unchanged");
        return existing.to_vec();
    };

    let sorted = sorted(existing);
    let Some(pos) = sorted.iter().position(|period| *period == target) else {
        warn!(%target, "deleted period not found, partition unchanged");
        return existing.to_vec();
    };
    debug!(index, sorted_index = pos, %target, "deleting period");

    let mut healed = Vec::with_capacity(sorted.len() - 1);
    match pos {
        0 => {
            let successor = sorted[1];
            healed.push(Period::between(target.from(), successor.to()));
            healed.extend_from_slice(&sorted[2..]);
        }
        _ => {
            let predecessor = sorted[pos - 1];
            healed.extend_from_slice(&sorted[..pos - 1]);
            healed.push(Period::between(
                predecessor.from(),
                predecessor.to().max(target.to()),
            ));
            healed.extend_from_slice(&sorted[pos + 1..]);
        }
    }
    normalize(&healed)
}

/// Sorts by `from` and repairs the sequence into a gapless, non-overlapping
/// cover of the axis.
///
/// - A gap after a period is closed by stretching that period up to the day
///   before the next one starts.
/// - A period starting inside the one before it is absorbed into it.
/// - The first period is pulled back to `Inception` and the last one out to
///   `Current`.
///
/// Idempotent: normalizing a normalized partition returns it unchanged.
pub fn normalize(periods: &[Period]) -> Vec<Period> {
    let mut iter = sorted(periods).into_iter();
    let Some(mut acc) = iter.next() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(periods.len());
    for next in iter {
        if next.from() <= acc.to() {
            trace!(%acc, %next, "absorbing overlapping period");
            acc = Period::between(acc.from(), acc.to().max(next.to()));
            continue;
        }
        if next.from() > acc.to().succ() {
            trace!(%acc, %next, "closing gap");
            acc = Period::between(acc.from(), next.from().pred());
        }
        out.push(acc);
        acc = next;
    }
    out.push(acc);

    if let Some(first) = out.first_mut() {
        *first = Period::between(Day::Inception, first.to());
    }
    if let Some(last) = out.last_mut() {
        *last = Period::between(last.from(), Day::Current);
    }
    out
}

/// `true` when `periods` is exactly the untouched default partition.
pub(crate) fn is_default_only(periods: &[Period]) -> bool {
    matches!(periods, [only] if only.is_axis())
}

/// Copy of `periods` in canonical (`from`) order.
pub(crate) fn sorted(periods: &[Period]) -> Vec<Period> {
    let mut sorted = periods.to_vec();
    sorted.sort_by_key(Period::from);
    sorted
}

/// Builds the un-normalized sequence with `candidate` placed into it.
fn place(candidate: Period, existing: &[Period]) -> Vec<Period> {
    if existing.is_empty() {
        return vec![candidate];
    }
    let sorted = sorted(existing);
    let placement = classify(&candidate, &sorted);
    debug!(?placement, %candidate, "placing period");

    match placement {
        Placement::Append => sorted.into_iter().chain(iter::once(candidate)).collect(),
        Placement::Insert(i) => sorted[..i]
            .iter()
            .copied()
            .chain(iter::once(candidate))
            .chain(sorted[i..].iter().copied())
            .collect(),
        Placement::Split(i) => sorted[..i]
            .iter()
            .copied()
            .chain(split(sorted[i], candidate))
            .chain(sorted[i + 1..].iter().copied())
            .collect(),
        Placement::Merge(i) => merge(candidate, &sorted, i),
    }
}

fn classify(candidate: &Period, sorted: &[Period]) -> Placement {
    let within = sorted
        .iter()
        .position(|period| period.contains(candidate.from()));
    if let Some(w) = within {
        return if candidate.to() <= sorted[w].to() {
            Placement::Split(w)
        } else {
            Placement::Merge(w)
        };
    }

    // The candidate starts in a gap.
    match sorted
        .iter()
        .position(|period| period.from() > candidate.from())
    {
        None => Placement::Append,
        Some(b) if candidate.to() < sorted[b].from().pred() => Placement::Insert(b),
        Some(b) => Placement::Merge(b),
    }
}

/// Cuts `candidate` out of `within`, keeping whatever is left on either side.
fn split(within: Period, candidate: Period) -> Vec<Period> {
    let mut parts = Vec::with_capacity(3);
    if within.from() < candidate.from() {
        parts.push(Period::between(within.from(), candidate.from().pred()));
    }
    parts.push(candidate);
    if candidate.to() < within.to() {
        parts.push(Period::between(candidate.to().succ(), within.to()));
    }
    parts
}

/// Folds `candidate` together with the periods from `start` onwards that
/// overlap it or begin the day after it ends.
fn merge(candidate: Period, sorted: &[Period], start: usize) -> Vec<Period> {
    let reach = candidate.to().succ();
    let mut from = candidate.from();
    let mut remainder = None;
    let mut end = start;

    for period in &sorted[start..] {
        if period.from() > reach {
            break;
        }
        end += 1;
        from = from.min(period.from());
        if period.to() > candidate.to() {
            remainder = Some(Period::between(reach, period.to()));
            break;
        }
    }
    trace!(absorbed = end - start, ?remainder, "merged periods");

    // Members are clipped at the candidate's end, so it bounds the merge.
    let merged = Period::between(from, candidate.to());
    sorted[..start]
        .iter()
        .copied()
        .chain(iter::once(merged))
        .chain(remainder)
        .chain(sorted[end..].iter().copied())
        .collect()
}
