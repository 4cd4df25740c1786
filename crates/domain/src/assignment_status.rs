// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment status tracking.
//!
//! An assignment is either occupying its slot (assigned, done, delinquent)
//! or has been vacated (canceled). Only vacated slots are eligible for
//! reassignment, and only occupied slots count towards fairness.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Status of one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// The person is expected to carry out the duty.
    #[default]
    Assigned,
    /// The duty was carried out.
    Done,
    /// The slot was vacated and may be reassigned.
    Canceled,
    /// The person did not show up.
    Delinquent,
}

impl AssignmentStatus {
    /// All statuses, in declaration order.
    pub const ALL: [Self; 4] = [Self::Assigned, Self::Done, Self::Canceled, Self::Delinquent];

    /// Returns the string representation used for persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Done => "done",
            Self::Canceled => "canceled",
            Self::Delinquent => "delinquent",
        }
    }

    /// Returns true if the assignment still holds its slot.
    ///
    /// Everything except `Canceled` is active: it blocks double-booking the
    /// same person on the same schedule and counts towards fairness.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Canceled)
    }
}

impl FromStr for AssignmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assigned" => Ok(Self::Assigned),
            "done" => Ok(Self::Done),
            "canceled" => Ok(Self::Canceled),
            "delinquent" => Ok(Self::Delinquent),
            _ => Err(DomainError::InvalidAssignmentStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
