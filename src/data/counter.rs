//! Integer counter with a hard floor at zero.

use crate::error::{ExtError, Result};
use std::fmt;
use tracing::{debug, warn};

/// Why a counter update was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The update would have taken the value below zero.
    BelowFloor,
    /// The update would have exceeded `u64::MAX`.
    Overflow,
}

/// Outcome of an `increase` or `decrease`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankUpdate {
    /// The counter now holds `value`.
    Applied { value: u64 },
    /// The counter was left at `value`; `attempted` is the refused result.
    Rejected {
        value: u64,
        attempted: i128,
        reason: RejectReason,
    },
}

impl RankUpdate {
    /// Counter value after the operation.
    pub fn value(&self) -> u64 {
        match *self {
            RankUpdate::Applied { value } | RankUpdate::Rejected { value, .. } => value,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, RankUpdate::Applied { .. })
    }
}

/// Non-negative integer value.
///
/// `decrease` refuses, rather than clamps, any update that would go below
/// zero. A negative `increase` is a decrease and is refused the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoundedCounter {
    value: u64,
}

impl BoundedCounter {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// Build from a signed host integer, refusing negatives.
    pub fn try_from_signed(value: i64) -> Result<Self> {
        u64::try_from(value)
            .map(Self::new)
            .map_err(|_| ExtError::invalid_field("rank", "rank must be unsigned long."))
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Add `amount` (default 1 at the host boundary) to the value.
    ///
    /// Returns `Rejected` for a negative amount that would pass the floor,
    /// or a result above `u64::MAX`.
    pub fn increase(&mut self, amount: i64) -> RankUpdate {
        self.apply(i128::from(amount))
    }

    /// Subtract `amount` (default 1 at the host boundary) from the value.
    pub fn decrease(&mut self, amount: i64) -> RankUpdate {
        self.apply(-i128::from(amount))
    }

    fn apply(&mut self, delta: i128) -> RankUpdate {
        let candidate = i128::from(self.value) + delta;

        match u64::try_from(candidate) {
            Ok(value) => {
                debug!(from = self.value, to = value, "counter updated");
                self.value = value;
                RankUpdate::Applied { value }
            }
            Err(_) => {
                let reason = if candidate < 0 {
                    RejectReason::BelowFloor
                } else {
                    RejectReason::Overflow
                };
                warn!(
                    value = self.value,
                    attempted = %candidate,
                    ?reason,
                    "counter update rejected"
                );
                RankUpdate::Rejected {
                    value: self.value,
                    attempted: candidate,
                    reason,
                }
            }
        }
    }
}

impl fmt::Display for BoundedCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<u64> for BoundedCounter {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}
