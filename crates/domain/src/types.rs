// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::assignment_status::AssignmentStatus;
use crate::error::DomainError;
use crate::ids::{AreaId, AssignmentId, PersonId, ScheduleId, TradeRequestId};
use crate::trade_status::TradeStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use time::Date;

time::serde::format_description!(duty_date_format, Date, "[year]-[month]-[day]");

/// Whether a person currently takes part in the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    /// Enrolled and available for duty.
    #[default]
    Active,
    /// On leave or otherwise excluded from the rotation.
    Inactive,
}

impl EnrollmentStatus {
    /// Returns the string representation used for persistence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl FromStr for EnrollmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidEnrollmentStatus(s.to_string())),
        }
    }
}

/// A person on the roster.
///
/// Owned by the roster collaborator; the engines only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Store identity.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Grade tier matched against an area's eligible grades.
    pub grade: u8,
    /// Enrollment status.
    #[serde(default)]
    pub status: EnrollmentStatus,
    /// Free-form role label. Carried through, never interpreted.
    #[serde(default)]
    pub role: String,
}

impl Person {
    /// Creates an active person with an empty role.
    #[must_use]
    pub fn new(id: PersonId, name: &str, grade: u8) -> Self {
        Self {
            id,
            name: name.to_string(),
            grade,
            status: EnrollmentStatus::Active,
            role: String::new(),
        }
    }

    /// Returns this person with the given enrollment status.
    #[must_use]
    pub fn with_status(mut self, status: EnrollmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns true if the person is enrolled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == EnrollmentStatus::Active
    }
}

/// A duty area that needs a fixed number of people per schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    /// Store identity.
    pub id: AreaId,
    /// Display name.
    pub name: String,
    /// Number of slots to fill on every schedule.
    pub required_headcount: u32,
    /// Grades allowed to fill this area.
    pub eligible_grades: BTreeSet<u8>,
}

impl Area {
    /// Creates a new area.
    #[must_use]
    pub fn new(
        id: AreaId,
        name: &str,
        required_headcount: u32,
        eligible_grades: impl IntoIterator<Item = u8>,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            required_headcount,
            eligible_grades: eligible_grades.into_iter().collect(),
        }
    }

    /// Returns true if a person of `grade` may fill this area.
    #[must_use]
    pub fn admits(&self, grade: u8) -> bool {
        self.eligible_grades.contains(&grade)
    }
}

/// One duty date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Store identity.
    pub id: ScheduleId,
    /// The date the duty takes place.
    #[serde(with = "duty_date_format")]
    pub duty_date: Date,
}

impl Schedule {
    /// Creates a new schedule.
    #[must_use]
    pub const fn new(id: ScheduleId, duty_date: Date) -> Self {
        Self { id, duty_date }
    }
}

/// A person occupying one slot of an area on one schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Store identity.
    pub id: AssignmentId,
    /// The schedule this slot belongs to.
    pub schedule_id: ScheduleId,
    /// The current occupant.
    pub person_id: PersonId,
    /// The area this slot belongs to.
    pub area_id: AreaId,
    /// Current status.
    pub status: AssignmentStatus,
}

impl Assignment {
    /// Returns true if the assignment still holds its slot.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns a copy occupied by `person_id` with the status reset to assigned.
    #[must_use]
    pub const fn reassigned_to(&self, person_id: PersonId) -> Self {
        Self {
            person_id,
            status: AssignmentStatus::Assigned,
            ..*self
        }
    }

    /// Returns a copy occupied by `person_id`, keeping the status.
    #[must_use]
    pub const fn with_person(&self, person_id: PersonId) -> Self {
        Self { person_id, ..*self }
    }

    /// Returns a copy with a new status.
    #[must_use]
    pub const fn with_status(&self, status: AssignmentStatus) -> Self {
        Self { status, ..*self }
    }
}

/// An assignment that has not been stored yet.
///
/// New assignments always start out as `Assigned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewAssignment {
    /// The schedule.
    pub schedule_id: ScheduleId,
    /// The occupant.
    pub person_id: PersonId,
    /// The area.
    pub area_id: AreaId,
}

/// A request to exchange the occupants of two assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRequest {
    /// Store identity.
    pub id: TradeRequestId,
    /// The assignment whose occupant asked for the exchange.
    pub requester_assignment_id: AssignmentId,
    /// The assignment the requester wants to take over.
    pub target_assignment_id: AssignmentId,
    /// Current status.
    pub status: TradeStatus,
}

impl TradeRequest {
    /// Returns true if this request covers the pair `a`/`b` in either order.
    #[must_use]
    pub fn involves_pair(&self, a: AssignmentId, b: AssignmentId) -> bool {
        (self.requester_assignment_id == a && self.target_assignment_id == b)
            || (self.requester_assignment_id == b && self.target_assignment_id == a)
    }

    /// Returns a copy with a new status.
    #[must_use]
    pub const fn with_status(&self, status: TradeStatus) -> Self {
        Self { status, ..*self }
    }
}

/// A trade request that has not been stored yet. Always pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewTradeRequest {
    /// The requesting assignment.
    pub requester_assignment_id: AssignmentId,
    /// The target assignment.
    pub target_assignment_id: AssignmentId,
}
