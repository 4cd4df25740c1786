// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store trait implementations.

use diesel::connection::{AnsiTransactionManager, TransactionManager};
use duty_roster::{
    AreaProvider, AssignmentFilter, AssignmentStore, RosterProvider, ScheduleProvider, Store,
    StoreError, TradeFilter, TradeStore,
};
use duty_roster_domain::{
    Area, AreaId, Assignment, AssignmentId, NewAssignment, NewTradeRequest, Person, Schedule,
    ScheduleId, TradeRequest, TradeRequestId,
};
use tracing::warn;

use crate::Persistence;
use crate::{mutations, queries};

impl RosterProvider for Persistence {
    fn list_active_persons(&mut self) -> Result<Vec<Person>, StoreError> {
        queries::roster::list_active_persons(&mut self.conn).map_err(StoreError::from)
    }
}

impl AreaProvider for Persistence {
    fn list_areas(&mut self) -> Result<Vec<Area>, StoreError> {
        queries::roster::list_areas(&mut self.conn).map_err(StoreError::from)
    }

    fn get_area(&mut self, area_id: AreaId) -> Result<Option<Area>, StoreError> {
        queries::roster::get_area(&mut self.conn, area_id).map_err(StoreError::from)
    }
}

impl ScheduleProvider for Persistence {
    fn list_schedules(&mut self) -> Result<Vec<Schedule>, StoreError> {
        queries::roster::list_schedules(&mut self.conn).map_err(StoreError::from)
    }

    fn get_schedule(&mut self, schedule_id: ScheduleId) -> Result<Option<Schedule>, StoreError> {
        queries::roster::get_schedule(&mut self.conn, schedule_id).map_err(StoreError::from)
    }
}

impl AssignmentStore for Persistence {
    fn create_assignment(&mut self, new: NewAssignment) -> Result<Assignment, StoreError> {
        mutations::assignments::insert_assignment(&mut self.conn, new).map_err(StoreError::from)
    }

    fn list_assignments(
        &mut self,
        filter: &AssignmentFilter,
    ) -> Result<Vec<Assignment>, StoreError> {
        queries::assignments::list_assignments(&mut self.conn, filter).map_err(StoreError::from)
    }

    fn get_assignment(
        &mut self,
        assignment_id: AssignmentId,
    ) -> Result<Option<Assignment>, StoreError> {
        queries::assignments::get_assignment(&mut self.conn, assignment_id)
            .map_err(StoreError::from)
    }

    fn update_assignment(&mut self, assignment: &Assignment) -> Result<(), StoreError> {
        mutations::assignments::update_assignment(&mut self.conn, assignment)
            .map_err(StoreError::from)
    }
}

impl TradeStore for Persistence {
    fn create_trade(&mut self, new: NewTradeRequest) -> Result<TradeRequest, StoreError> {
        mutations::trades::insert_trade(&mut self.conn, new).map_err(StoreError::from)
    }

    fn list_trades(&mut self, filter: &TradeFilter) -> Result<Vec<TradeRequest>, StoreError> {
        queries::trades::list_trades(&mut self.conn, filter).map_err(StoreError::from)
    }

    fn get_trade(&mut self, trade_id: TradeRequestId) -> Result<Option<TradeRequest>, StoreError> {
        queries::trades::get_trade(&mut self.conn, trade_id).map_err(StoreError::from)
    }

    fn update_trade(&mut self, trade: &TradeRequest) -> Result<(), StoreError> {
        mutations::trades::update_trade(&mut self.conn, trade).map_err(StoreError::from)
    }
}

impl Store for Persistence {
    fn atomically<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<StoreError>,
    {
        AnsiTransactionManager::begin_transaction(&mut self.conn)
            .map_err(|e| E::from(StoreError::new(e)))?;

        match f(self) {
            Ok(value) => {
                AnsiTransactionManager::commit_transaction(&mut self.conn)
                    .map_err(|e| E::from(StoreError::new(e)))?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) =
                    AnsiTransactionManager::rollback_transaction(&mut self.conn)
                {
                    warn!(error = %rollback_err, "Transaction rollback failed");
                }
                Err(err)
            }
        }
    }
}
