// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use duty_roster_domain::{NewTradeRequest, TradeRequest, TradeRequestId, TradeStatus};
use tracing::debug;

use crate::backend::last_insert_rowid;
use crate::data_models::NewTradeRequestRow;
use crate::diesel_schema::trade_requests;
use crate::error::PersistenceError;

/// Inserts a pending trade request.
///
/// # Errors
///
/// Returns an error if the insert fails, including when either assignment
/// does not exist.
pub fn insert_trade(
    conn: &mut SqliteConnection,
    new: NewTradeRequest,
) -> Result<TradeRequest, PersistenceError> {
    let status: TradeStatus = TradeStatus::Pending;
    diesel::insert_into(trade_requests::table)
        .values(NewTradeRequestRow {
            requester_assignment_id: new.requester_assignment_id.value(),
            target_assignment_id: new.target_assignment_id.value(),
            status: status.as_str(),
        })
        .execute(conn)?;

    let trade_id: i64 = last_insert_rowid(conn)?;
    debug!(trade_id, "Inserted trade request");

    Ok(TradeRequest {
        id: TradeRequestId::new(trade_id),
        requester_assignment_id: new.requester_assignment_id,
        target_assignment_id: new.target_assignment_id,
        status,
    })
}

/// Replaces the status of an existing trade request.
///
/// The pair is immutable once filed; only the status is written.
///
/// # Errors
///
/// Returns an error if the request does not exist or the update fails.
pub fn update_trade(
    conn: &mut SqliteConnection,
    trade: &TradeRequest,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(
        trade_requests::table.filter(trade_requests::trade_request_id.eq(trade.id.value())),
    )
    .set(trade_requests::status.eq(trade.status.as_str()))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(trade.id.to_string()));
    }
    Ok(())
}
