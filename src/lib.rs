// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-day partitions.
//!
//! This crate keeps a date axis, from a fixed inception day to an open-ended
//! "current" marker, cut into a gapless and non-overlapping sequence of
//! periods.  Adding, editing or deleting a period yields a new partition in
//! which neighbours have been split, merged or stretched as needed.
//!
//! # Core types
//!
//! - [`Day`] — a calendar day, or one of the two axis sentinels.
//! - [`AxisDate`] — the concrete date inside [`Day::Date`], always strictly
//!   between the sentinels.
//! - [`Period`] — an inclusive `(from, to)` run of days.
//! - [`Partition`] — owned, validated partition state.
//! - [`Operation`] — an add / edit / delete request.
//! - [`PeriodRequest`] — a user-entered `from`/`to` pair awaiting validation.
//!
//! # Engine
//!
//! The reconciliation functions are pure and work on borrowed slices:
//!
//! | Function | Effect |
//! |----------|--------|
//! | [`compute_partition`] | dispatch an [`Operation`] |
//! | [`add`] | place a period, splitting or merging neighbours |
//! | [`edit`] | drop a period, then place its replacement |
//! | [`delete`] | drop a period and let a neighbour take its days |
//! | [`normalize`] | sort, close gaps, absorb overlaps, anchor both ends |
//! | [`check_overlap`] | advisory test for the merge confirmation prompt |
//!
//! ```
//! use daypart::{Day, Operation, Partition, Period};
//!
//! let h1 = Period::new(Day::ymd(2020, 1, 1)?, Day::ymd(2020, 6, 30)?)?;
//! let partition = Partition::default().apply(Operation::Add { candidate: h1 });
//!
//! assert_eq!(partition.to_string(), "\
//! Inception Date to 12/31/2019
//! 01/01/2020 to 06/30/2020
//! 07/01/2020 to Cur Date");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod day;
mod engine;
mod error;
mod partition;
mod period;
mod request;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use day::{AxisDate, Day, CURRENT_LITERAL, INCEPTION_LITERAL};
pub use engine::{add, check_overlap, compute_partition, delete, edit, normalize, Operation};
pub use error::{DayError, PartitionError, PeriodError, RequestError};
pub use partition::Partition;
pub use period::{gaps_within, overlaps_between, Period};
pub use request::PeriodRequest;
