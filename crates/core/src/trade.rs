// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Exchanging the occupants of two assignments.
//!
//! A trade request is proposed against two active assignments and later
//! resolved. Acceptance re-validates the pair against the store as it is at
//! that moment, since either assignment may have been canceled or
//! reassigned in between, and only then swaps the two occupants.

use duty_roster_domain::{
    Assignment, AssignmentId, NewTradeRequest, TradeRequest, TradeRequestId, TradeStatus,
    validate_trade_pair_ids,
};
use tracing::{info, warn};

use crate::coverage::ensure_not_double_booked;
use crate::error::CoreError;
use crate::store::{AssignmentStore, Store, TradeFilter};

/// Files a pending trade request between two assignments.
///
/// # Errors
///
/// Returns an error if:
/// - Both ids name the same assignment
/// - Either assignment does not exist or is canceled
/// - A pending request already covers the same pair, in either order
/// - The swap would leave either person on the same schedule twice
/// - The store fails
pub fn propose<S: Store>(
    store: &mut S,
    requester_assignment_id: AssignmentId,
    target_assignment_id: AssignmentId,
) -> Result<TradeRequest, CoreError> {
    store.atomically(|store: &mut S| {
        validate_trade_pair_ids(requester_assignment_id, target_assignment_id)?;
        let requester: Assignment = load_tradeable(store, requester_assignment_id)?;
        let target: Assignment = load_tradeable(store, target_assignment_id)?;

        if let Some(existing) = store
            .list_trades(&TradeFilter::pending())?
            .iter()
            .find(|t| t.involves_pair(requester.id, target.id))
        {
            return Err(CoreError::DuplicatePendingTrade {
                existing: existing.id,
                requester: requester.id,
                target: target.id,
            });
        }

        ensure_swap_keeps_coverage(store, &requester, &target)?;

        let trade: TradeRequest = store.create_trade(NewTradeRequest {
            requester_assignment_id,
            target_assignment_id,
        })?;

        info!(
            trade_id = trade.id.value(),
            requester_assignment_id = requester_assignment_id.value(),
            target_assignment_id = target_assignment_id.value(),
            "Trade proposed"
        );
        Ok(trade)
    })
}

/// Moves a pending trade request to a terminal status.
///
/// Accepting swaps the two occupants after re-running every check from
/// [`propose`]. Rejecting or canceling touches only the request.
///
/// # Errors
///
/// Returns an error if:
/// - The request does not exist
/// - The request is no longer pending
/// - `next_status` is `Pending`
/// - Acceptance fails re-validation; the request then stays pending
/// - The store fails
pub fn resolve<S: Store>(
    store: &mut S,
    trade_id: TradeRequestId,
    next_status: TradeStatus,
) -> Result<TradeRequest, CoreError> {
    store.atomically(|store: &mut S| {
        let trade: TradeRequest = store
            .get_trade(trade_id)?
            .ok_or(CoreError::TradeNotFound(trade_id))?;

        if trade.status.is_terminal() {
            return Err(CoreError::TradeNotPending {
                trade_id,
                status: trade.status,
            });
        }
        trade.status.validate_transition(next_status)?;

        if next_status == TradeStatus::Accepted {
            let (requester, target) = revalidate(store, &trade).inspect_err(|err| {
                warn!(
                    trade_id = trade_id.value(),
                    error = %err,
                    "Trade no longer valid; left pending"
                );
            })?;

            store.update_assignment(&requester.with_person(target.person_id))?;
            store.update_assignment(&target.with_person(requester.person_id))?;
        }

        let resolved: TradeRequest = trade.with_status(next_status);
        store.update_trade(&resolved)?;

        info!(
            trade_id = trade_id.value(),
            status = %next_status,
            "Trade resolved"
        );
        Ok(resolved)
    })
}

fn revalidate<S: AssignmentStore>(
    store: &mut S,
    trade: &TradeRequest,
) -> Result<(Assignment, Assignment), CoreError> {
    validate_trade_pair_ids(trade.requester_assignment_id, trade.target_assignment_id)?;
    let requester: Assignment = load_tradeable(store, trade.requester_assignment_id)?;
    let target: Assignment = load_tradeable(store, trade.target_assignment_id)?;
    ensure_swap_keeps_coverage(store, &requester, &target)?;
    Ok((requester, target))
}

fn load_tradeable<S: AssignmentStore>(
    store: &mut S,
    assignment_id: AssignmentId,
) -> Result<Assignment, CoreError> {
    let assignment: Assignment = store
        .get_assignment(assignment_id)?
        .ok_or(CoreError::AssignmentNotFound(assignment_id))?;

    if !assignment.is_active() {
        return Err(CoreError::AssignmentCanceled(assignment_id));
    }
    Ok(assignment)
}

/// Checks both sides of the swap: the target's occupant moving onto the
/// requester's schedule, and the requester's occupant onto the target's.
fn ensure_swap_keeps_coverage<S: AssignmentStore>(
    store: &mut S,
    requester: &Assignment,
    target: &Assignment,
) -> Result<(), CoreError> {
    let excluded: [AssignmentId; 2] = [requester.id, target.id];
    ensure_not_double_booked(store, requester.schedule_id, target.person_id, &excluded)?;
    ensure_not_double_booked(store, target.schedule_id, requester.person_id, &excluded)
}
