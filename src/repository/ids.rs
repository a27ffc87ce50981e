//! Manual primary-key allocation.
//!
//! The schema defines its integer primary keys without database-generated
//! identity columns, so allocation is an explicit application responsibility.
//! Two strategies exist; which entity uses which is decided where the
//! [`crate::repository::DieselRepository`] is constructed, so a rewrite can
//! swap in a real sequence without touching materialization logic.
//!
//! `MaxPlusOne` races under concurrent writers. The deployment model is one
//! writer at a time per conversation, which is why the race is accepted.

use chrono::Utc;

use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Epoch anchor for time-based candidates (2023-11-14T22:13:20Z). Keeps
/// seconds-since-anchor comfortably inside `i32` for decades.
const EPOCH_ANCHOR_SECS: i64 = 1_700_000_000;

/// How the next primary key for a table is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// `max(id) + 1`, starting from 1 on an empty table.
    MaxPlusOne,
    /// Seconds since a fixed anchor, linearly probed past collisions.
    TimeBased,
}

/// Injectable id-allocation strategy.
#[derive(Debug, Clone, Copy)]
pub struct IdAllocator {
    strategy: IdStrategy,
    max_attempts: u32,
}

impl IdAllocator {
    /// Default probe bound for the time-based strategy.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

    pub fn max_plus_one() -> Self {
        Self {
            strategy: IdStrategy::MaxPlusOne,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn time_based(max_attempts: u32) -> Self {
        Self {
            strategy: IdStrategy::TimeBased,
            max_attempts,
        }
    }

    /// Allocate the next id for `table`.
    ///
    /// `current_max` is the largest id currently stored (only consulted by
    /// `MaxPlusOne`); `exists` answers whether a candidate id is already
    /// taken (only consulted by `TimeBased`). Both are supplied by the
    /// caller so the allocator itself stays free of table-specific SQL.
    pub fn allocate<F>(
        &self,
        table: &'static str,
        current_max: Option<i32>,
        mut exists: F,
    ) -> RepositoryResult<i32>
    where
        F: FnMut(i32) -> RepositoryResult<bool>,
    {
        match self.strategy {
            IdStrategy::MaxPlusOne => Ok(current_max.unwrap_or(0) + 1),
            IdStrategy::TimeBased => {
                let mut candidate = time_based_candidate(Utc::now().timestamp());
                for _ in 0..self.max_attempts {
                    if !exists(candidate)? {
                        return Ok(candidate);
                    }
                    candidate += 1;
                }
                Err(RepositoryError::AllocationExhausted {
                    table,
                    attempts: self.max_attempts,
                })
            }
        }
    }
}

fn time_based_candidate(now_secs: i64) -> i32 {
    // Saturates rather than wraps if the clock is wildly off.
    (now_secs - EPOCH_ANCHOR_SECS).clamp(1, i64::from(i32::MAX)) as i32
}
