// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ids::{AreaId, AssignmentId};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Assignment status string is not one of the known statuses.
    InvalidAssignmentStatus(String),
    /// Trade status string is not one of the known statuses.
    InvalidTradeStatus(String),
    /// Enrollment status string is not one of the known statuses.
    InvalidEnrollmentStatus(String),
    /// A status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was refused.
        reason: String,
    },
    /// An area must require at least one person.
    InvalidHeadcount {
        /// The area.
        area_id: AreaId,
        /// The rejected headcount.
        headcount: u32,
    },
    /// An area must admit at least one grade.
    NoEligibleGrades(AreaId),
    /// A trade pair referenced the same assignment twice.
    SameAssignment(AssignmentId),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAssignmentStatus(status) => {
                write!(f, "Invalid assignment status: '{status}'")
            }
            Self::InvalidTradeStatus(status) => write!(f, "Invalid trade status: '{status}'"),
            Self::InvalidEnrollmentStatus(status) => {
                write!(f, "Invalid enrollment status: '{status}'")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition from '{from}' to '{to}': {reason}")
            }
            Self::InvalidHeadcount { area_id, headcount } => {
                write!(
                    f,
                    "Invalid headcount {headcount} for {area_id}. Must be at least 1"
                )
            }
            Self::NoEligibleGrades(area_id) => {
                write!(f, "{area_id} must admit at least one grade")
            }
            Self::SameAssignment(assignment_id) => {
                write!(f, "Cannot trade {assignment_id} with itself")
            }
        }
    }
}

impl std::error::Error for DomainError {}
