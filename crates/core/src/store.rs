// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store abstractions consumed by the engines.
//!
//! The engines never own records. They read people, areas and schedules
//! from read-only providers and read/write assignments and trade requests
//! through replace-by-id updates. All methods take `&mut self` so a
//! connection-backed store can implement them without interior mutability.

use crate::error::StoreError;
use duty_roster_domain::{
    Area, AreaId, Assignment, AssignmentId, AssignmentStatus, NewAssignment, NewTradeRequest,
    Person, PersonId, Schedule, ScheduleId, TradeRequest, TradeRequestId, TradeStatus,
};

/// Optional filters for listing assignments. Unset fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentFilter {
    /// Only assignments on this schedule.
    pub schedule_id: Option<ScheduleId>,
    /// Only assignments held by this person.
    pub person_id: Option<PersonId>,
    /// Only assignments in this area.
    pub area_id: Option<AreaId>,
    /// Only assignments with this status.
    pub status: Option<AssignmentStatus>,
}

impl AssignmentFilter {
    /// Matches every assignment on `schedule_id`.
    #[must_use]
    pub fn for_schedule(schedule_id: ScheduleId) -> Self {
        Self {
            schedule_id: Some(schedule_id),
            ..Self::default()
        }
    }

    /// Returns true if `assignment` passes every set filter.
    #[must_use]
    pub fn matches(&self, assignment: &Assignment) -> bool {
        self.schedule_id
            .is_none_or(|id| assignment.schedule_id == id)
            && self.person_id.is_none_or(|id| assignment.person_id == id)
            && self.area_id.is_none_or(|id| assignment.area_id == id)
            && self.status.is_none_or(|status| assignment.status == status)
    }
}

/// Optional filters for listing trade requests. Unset fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TradeFilter {
    /// Only requests filed from this assignment.
    pub requester_assignment_id: Option<AssignmentId>,
    /// Only requests aimed at this assignment.
    pub target_assignment_id: Option<AssignmentId>,
    /// Only requests with this status.
    pub status: Option<TradeStatus>,
}

impl TradeFilter {
    /// Matches every pending request.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            status: Some(TradeStatus::Pending),
            ..Self::default()
        }
    }

    /// Returns true if `trade` passes every set filter.
    #[must_use]
    pub fn matches(&self, trade: &TradeRequest) -> bool {
        self.requester_assignment_id
            .is_none_or(|id| trade.requester_assignment_id == id)
            && self
                .target_assignment_id
                .is_none_or(|id| trade.target_assignment_id == id)
            && self.status.is_none_or(|status| trade.status == status)
    }
}

/// Read access to the roster.
pub trait RosterProvider {
    /// Lists every person whose enrollment status is active.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_active_persons(&mut self) -> Result<Vec<Person>, StoreError>;
}

/// Read access to duty areas.
pub trait AreaProvider {
    /// Lists every area.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_areas(&mut self) -> Result<Vec<Area>, StoreError>;

    /// Looks up one area.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn get_area(&mut self, area_id: AreaId) -> Result<Option<Area>, StoreError> {
        Ok(self.list_areas()?.into_iter().find(|a| a.id == area_id))
    }
}

/// Read access to schedules.
pub trait ScheduleProvider {
    /// Lists every schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_schedules(&mut self) -> Result<Vec<Schedule>, StoreError>;

    /// Looks up one schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn get_schedule(&mut self, schedule_id: ScheduleId) -> Result<Option<Schedule>, StoreError> {
        Ok(self
            .list_schedules()?
            .into_iter()
            .find(|s| s.id == schedule_id))
    }
}

/// Read/write access to assignments.
pub trait AssignmentStore {
    /// Stores a new assignment with status `Assigned` and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn create_assignment(&mut self, new: NewAssignment) -> Result<Assignment, StoreError>;

    /// Lists assignments passing `filter`, ordered by identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_assignments(&mut self, filter: &AssignmentFilter)
    -> Result<Vec<Assignment>, StoreError>;

    /// Looks up one assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn get_assignment(
        &mut self,
        assignment_id: AssignmentId,
    ) -> Result<Option<Assignment>, StoreError>;

    /// Replaces the stored assignment with the same identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the assignment does not exist or the backend fails.
    fn update_assignment(&mut self, assignment: &Assignment) -> Result<(), StoreError>;

    /// Lists the assignments on `schedule_id` that are not canceled.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_active_for_schedule(
        &mut self,
        schedule_id: ScheduleId,
    ) -> Result<Vec<Assignment>, StoreError> {
        let mut assignments: Vec<Assignment> =
            self.list_assignments(&AssignmentFilter::for_schedule(schedule_id))?;
        assignments.retain(Assignment::is_active);
        Ok(assignments)
    }
}

/// Read/write access to trade requests.
pub trait TradeStore {
    /// Stores a new pending trade request and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn create_trade(&mut self, new: NewTradeRequest) -> Result<TradeRequest, StoreError>;

    /// Lists trade requests passing `filter`, ordered by identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_trades(&mut self, filter: &TradeFilter) -> Result<Vec<TradeRequest>, StoreError>;

    /// Looks up one trade request.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn get_trade(&mut self, trade_id: TradeRequestId) -> Result<Option<TradeRequest>, StoreError>;

    /// Replaces the stored trade request with the same identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the request does not exist or the backend fails.
    fn update_trade(&mut self, trade: &TradeRequest) -> Result<(), StoreError>;
}

/// Everything the engines need, plus all-or-nothing execution.
pub trait Store: RosterProvider + AreaProvider + ScheduleProvider + AssignmentStore + TradeStore {
    /// Runs `f` so that either every write it made is kept or none is.
    ///
    /// When `f` returns `Err` the store must look exactly as it did before
    /// the call.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or a store error if the backend could
    /// not begin, commit or roll back.
    fn atomically<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<StoreError>;
}
