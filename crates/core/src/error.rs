// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use duty_roster_domain::{
    AreaId, AssignmentId, DomainError, PersonId, ScheduleId, TradeRequestId, TradeStatus,
};
use thiserror::Error;

/// A failure reported by a store backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Store error: {0}")]
pub struct StoreError(pub String);

impl StoreError {
    /// Creates a store error from any displayable cause.
    pub fn new(message: impl std::fmt::Display) -> Self {
        Self(message.to_string())
    }
}

/// The broad category of a [`CoreError`].
///
/// Callers map these onto their transport's status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced record does not exist.
    NotFound,
    /// The record's current status forbids the operation.
    InvalidState,
    /// The operation would double-book a person or duplicate a pending trade.
    Conflict,
    /// No eligible candidate is left.
    Exhausted,
    /// The input itself is malformed.
    InvalidArgument,
    /// The backing store failed.
    Store,
}

/// Errors returned by the allocation, reassignment and trade engines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The assignment does not exist.
    #[error("{0} not found")]
    AssignmentNotFound(AssignmentId),
    /// The schedule does not exist.
    #[error("{0} not found")]
    ScheduleNotFound(ScheduleId),
    /// The area does not exist.
    #[error("{0} not found")]
    AreaNotFound(AreaId),
    /// The trade request does not exist.
    #[error("{0} not found")]
    TradeNotFound(TradeRequestId),
    /// Only canceled assignments can be reassigned.
    #[error("{0} is not canceled and cannot be reassigned")]
    AssignmentNotCanceled(AssignmentId),
    /// Canceled assignments cannot take part in a trade.
    #[error("{0} is canceled and cannot be traded")]
    AssignmentCanceled(AssignmentId),
    /// The schedule already has assignments.
    #[error("{0} has already been allocated")]
    ScheduleAlreadyAllocated(ScheduleId),
    /// The trade request has already been resolved.
    #[error("{trade_id} is already {status}")]
    TradeNotPending {
        /// The trade request.
        trade_id: TradeRequestId,
        /// Its current, terminal status.
        status: TradeStatus,
    },
    /// The person would hold two active assignments on one schedule.
    #[error("{person_id} already holds an active assignment on {schedule_id}")]
    DuplicateCoverage {
        /// The schedule that would be double-booked.
        schedule_id: ScheduleId,
        /// The person who would be double-booked.
        person_id: PersonId,
    },
    /// A pending request for the same pair already exists.
    #[error("{existing} is already pending for {requester} and {target}")]
    DuplicatePendingTrade {
        /// The pending request.
        existing: TradeRequestId,
        /// The requesting assignment.
        requester: AssignmentId,
        /// The target assignment.
        target: AssignmentId,
    },
    /// Nobody is eligible to fill the slot.
    #[error("No eligible person is left to fill {assignment_id} in {area_id}")]
    NoEligibleCandidate {
        /// The slot being filled.
        assignment_id: AssignmentId,
        /// Its area.
        area_id: AreaId,
    },
    /// A batch allocation placed nobody.
    #[error("Nothing to allocate: {0}")]
    NothingToAllocate(String),
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CoreError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::AssignmentNotFound(_)
            | Self::ScheduleNotFound(_)
            | Self::AreaNotFound(_)
            | Self::TradeNotFound(_) => ErrorKind::NotFound,
            Self::AssignmentNotCanceled(_)
            | Self::AssignmentCanceled(_)
            | Self::ScheduleAlreadyAllocated(_)
            | Self::TradeNotPending { .. } => ErrorKind::InvalidState,
            Self::DuplicateCoverage { .. } | Self::DuplicatePendingTrade { .. } => {
                ErrorKind::Conflict
            }
            Self::NoEligibleCandidate { .. } | Self::NothingToAllocate(_) => ErrorKind::Exhausted,
            Self::DomainViolation(_) => ErrorKind::InvalidArgument,
            Self::Store(_) => ErrorKind::Store,
        }
    }
}
