// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Serialized access to the engines.
//!
//! Every engine operation reads the store and then writes based on what it
//! read, so two operations must never interleave. `DutyRoster` owns the
//! store and the tie-breaker behind a single mutex and holds it for the
//! whole of each operation.

use std::sync::{Mutex, MutexGuard};

use duty_roster_domain::{
    Assignment, AssignmentId, AssignmentStatus, ScheduleId, TradeRequest, TradeRequestId,
    TradeStatus,
};

use crate::allocation::{self, AllocationSummary, ScheduleAllocation};
use crate::error::{CoreError, StoreError};
use crate::reassignment::{self, Reassignment};
use crate::status;
use crate::store::Store;
use crate::tie_break::{RandomTieBreaker, TieBreaker};
use crate::trade;

struct Inner<S, T> {
    store: S,
    tie_breaker: T,
}

/// A store plus tie-breaker, shared safely between threads.
pub struct DutyRoster<S, T = RandomTieBreaker> {
    inner: Mutex<Inner<S, T>>,
}

impl<S: Store> DutyRoster<S, RandomTieBreaker> {
    /// Wraps `store` with a randomly seeded tie-breaker.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_tie_breaker(store, RandomTieBreaker::new())
    }
}

impl<S: Store, T: TieBreaker> DutyRoster<S, T> {
    /// Wraps `store` with the given tie-breaker.
    #[must_use]
    pub const fn with_tie_breaker(store: S, tie_breaker: T) -> Self {
        Self {
            inner: Mutex::new(Inner { store, tie_breaker }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner<S, T>>, CoreError> {
        self.inner
            .lock()
            .map_err(|_| CoreError::Store(StoreError::new("roster lock poisoned")))
    }

    /// See [`allocation::allocate`].
    ///
    /// # Errors
    ///
    /// Returns an error if the allocation fails.
    pub fn allocate(&self, schedule_id: ScheduleId) -> Result<ScheduleAllocation, CoreError> {
        let mut guard = self.lock()?;
        let Inner { store, tie_breaker } = &mut *guard;
        allocation::allocate(store, tie_breaker, schedule_id)
    }

    /// See [`allocation::allocate_all`].
    ///
    /// # Errors
    ///
    /// Returns an error if the batch places nobody.
    pub fn allocate_all(&self) -> Result<AllocationSummary, CoreError> {
        let mut guard = self.lock()?;
        let Inner { store, tie_breaker } = &mut *guard;
        allocation::allocate_all(store, tie_breaker)
    }

    /// See [`reassignment::reassign`].
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be refilled.
    pub fn reassign(&self, assignment_id: AssignmentId) -> Result<Reassignment, CoreError> {
        let mut guard = self.lock()?;
        reassignment::reassign(&mut guard.store, assignment_id)
    }

    /// See [`status::set_assignment_status`].
    ///
    /// # Errors
    ///
    /// Returns an error if the status cannot be set.
    pub fn set_assignment_status(
        &self,
        assignment_id: AssignmentId,
        new_status: AssignmentStatus,
    ) -> Result<Assignment, CoreError> {
        let mut guard = self.lock()?;
        status::set_assignment_status(&mut guard.store, assignment_id, new_status)
    }

    /// See [`trade::propose`].
    ///
    /// # Errors
    ///
    /// Returns an error if the pair cannot be traded.
    pub fn propose_trade(
        &self,
        requester_assignment_id: AssignmentId,
        target_assignment_id: AssignmentId,
    ) -> Result<TradeRequest, CoreError> {
        let mut guard = self.lock()?;
        trade::propose(
            &mut guard.store,
            requester_assignment_id,
            target_assignment_id,
        )
    }

    /// See [`trade::resolve`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be resolved.
    pub fn resolve_trade(
        &self,
        trade_id: TradeRequestId,
        next_status: TradeStatus,
    ) -> Result<TradeRequest, CoreError> {
        let mut guard = self.lock()?;
        trade::resolve(&mut guard.store, trade_id, next_status)
    }

    /// Runs `f` against the store while holding the lock.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn inspect<R>(&self, f: impl FnOnce(&mut S) -> R) -> Result<R, CoreError> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard.store))
    }

    /// Releases the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn into_store(self) -> Result<S, CoreError> {
        self.inner
            .into_inner()
            .map(|inner| inner.store)
            .map_err(|_| CoreError::Store(StoreError::new("roster lock poisoned")))
    }
}
