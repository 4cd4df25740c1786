// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory store.
//!
//! Backs tests and embedders that keep the roster in process. Records live
//! in ordered maps so listing is always by ascending identity.

use std::collections::BTreeMap;

use duty_roster_domain::{
    Area, AreaId, Assignment, AssignmentId, AssignmentStatus, NewAssignment, NewTradeRequest,
    Person, PersonId, Schedule, ScheduleId, TradeRequest, TradeRequestId, TradeStatus,
};

use crate::error::StoreError;
use crate::store::{
    AreaProvider, AssignmentFilter, AssignmentStore, RosterProvider, ScheduleProvider, Store,
    TradeFilter, TradeStore,
};

/// A store that keeps every record in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryStore {
    persons: BTreeMap<PersonId, Person>,
    areas: BTreeMap<AreaId, Area>,
    schedules: BTreeMap<ScheduleId, Schedule>,
    assignments: BTreeMap<AssignmentId, Assignment>,
    trades: BTreeMap<TradeRequestId, TradeRequest>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a person.
    pub fn insert_person(&mut self, person: Person) {
        self.persons.insert(person.id, person);
    }

    /// Adds or replaces an area.
    pub fn insert_area(&mut self, area: Area) {
        self.areas.insert(area.id, area);
    }

    /// Adds or replaces a schedule.
    pub fn insert_schedule(&mut self, schedule: Schedule) {
        self.schedules.insert(schedule.id, schedule);
    }

    /// Removes an area, leaving any assignments that reference it in place.
    pub fn remove_area(&mut self, area_id: AreaId) -> Option<Area> {
        self.areas.remove(&area_id)
    }

    /// Removes a schedule, leaving any assignments that reference it in place.
    pub fn remove_schedule(&mut self, schedule_id: ScheduleId) -> Option<Schedule> {
        self.schedules.remove(&schedule_id)
    }

    /// Returns every person, active or not.
    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    /// Returns every assignment in identity order.
    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.values()
    }

    /// Returns every trade request in identity order.
    pub fn trades(&self) -> impl Iterator<Item = &TradeRequest> {
        self.trades.values()
    }

    fn next_assignment_id(&self) -> AssignmentId {
        AssignmentId::new(
            self.assignments
                .keys()
                .next_back()
                .map_or(1, |id| id.value() + 1),
        )
    }

    fn next_trade_id(&self) -> TradeRequestId {
        TradeRequestId::new(
            self.trades
                .keys()
                .next_back()
                .map_or(1, |id| id.value() + 1),
        )
    }
}

impl RosterProvider for InMemoryStore {
    fn list_active_persons(&mut self) -> Result<Vec<Person>, StoreError> {
        Ok(self
            .persons
            .values()
            .filter(|p| p.is_active())
            .cloned()
            .collect())
    }
}

impl AreaProvider for InMemoryStore {
    fn list_areas(&mut self) -> Result<Vec<Area>, StoreError> {
        Ok(self.areas.values().cloned().collect())
    }

    fn get_area(&mut self, area_id: AreaId) -> Result<Option<Area>, StoreError> {
        Ok(self.areas.get(&area_id).cloned())
    }
}

impl ScheduleProvider for InMemoryStore {
    fn list_schedules(&mut self) -> Result<Vec<Schedule>, StoreError> {
        Ok(self.schedules.values().copied().collect())
    }

    fn get_schedule(&mut self, schedule_id: ScheduleId) -> Result<Option<Schedule>, StoreError> {
        Ok(self.schedules.get(&schedule_id).copied())
    }
}

impl AssignmentStore for InMemoryStore {
    fn create_assignment(&mut self, new: NewAssignment) -> Result<Assignment, StoreError> {
        let assignment: Assignment = Assignment {
            id: self.next_assignment_id(),
            schedule_id: new.schedule_id,
            person_id: new.person_id,
            area_id: new.area_id,
            status: AssignmentStatus::Assigned,
        };
        self.assignments.insert(assignment.id, assignment);
        Ok(assignment)
    }

    fn list_assignments(
        &mut self,
        filter: &AssignmentFilter,
    ) -> Result<Vec<Assignment>, StoreError> {
        Ok(self
            .assignments
            .values()
            .filter(|a| filter.matches(a))
            .copied()
            .collect())
    }

    fn get_assignment(
        &mut self,
        assignment_id: AssignmentId,
    ) -> Result<Option<Assignment>, StoreError> {
        Ok(self.assignments.get(&assignment_id).copied())
    }

    fn update_assignment(&mut self, assignment: &Assignment) -> Result<(), StoreError> {
        let Some(slot) = self.assignments.get_mut(&assignment.id) else {
            return Err(StoreError::new(format!("{} does not exist", assignment.id)));
        };
        *slot = *assignment;
        Ok(())
    }
}

impl TradeStore for InMemoryStore {
    fn create_trade(&mut self, new: NewTradeRequest) -> Result<TradeRequest, StoreError> {
        let trade: TradeRequest = TradeRequest {
            id: self.next_trade_id(),
            requester_assignment_id: new.requester_assignment_id,
            target_assignment_id: new.target_assignment_id,
            status: TradeStatus::Pending,
        };
        self.trades.insert(trade.id, trade);
        Ok(trade)
    }

    fn list_trades(&mut self, filter: &TradeFilter) -> Result<Vec<TradeRequest>, StoreError> {
        Ok(self
            .trades
            .values()
            .filter(|t| filter.matches(t))
            .copied()
            .collect())
    }

    fn get_trade(&mut self, trade_id: TradeRequestId) -> Result<Option<TradeRequest>, StoreError> {
        Ok(self.trades.get(&trade_id).copied())
    }

    fn update_trade(&mut self, trade: &TradeRequest) -> Result<(), StoreError> {
        let Some(slot) = self.trades.get_mut(&trade.id) else {
            return Err(StoreError::new(format!("{} does not exist", trade.id)));
        };
        *slot = *trade;
        Ok(())
    }
}

impl Store for InMemoryStore {
    fn atomically<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<StoreError>,
    {
        // Only the mutable tables need restoring; providers are never written.
        let assignments: BTreeMap<AssignmentId, Assignment> = self.assignments.clone();
        let trades: BTreeMap<TradeRequestId, TradeRequest> = self.trades.clone();

        let result: Result<T, E> = f(self);
        if result.is_err() {
            self.assignments = assignments;
            self.trades = trades;
        }
        result
    }
}
