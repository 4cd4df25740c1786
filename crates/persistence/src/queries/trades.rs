// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use duty_roster::TradeFilter;
use duty_roster_domain::{TradeRequest, TradeRequestId};

use crate::data_models::TradeRequestRow;
use crate::diesel_schema::trade_requests;
use crate::error::PersistenceError;

/// Lists trade requests matching every set field of `filter`.
///
/// # Errors
///
/// Returns an error if the query fails or a row is malformed.
pub fn list_trades(
    conn: &mut SqliteConnection,
    filter: &TradeFilter,
) -> Result<Vec<TradeRequest>, PersistenceError> {
    let mut query = trade_requests::table
        .select(TradeRequestRow::as_select())
        .into_boxed();

    if let Some(id) = filter.requester_assignment_id {
        query = query.filter(trade_requests::requester_assignment_id.eq(id.value()));
    }
    if let Some(id) = filter.target_assignment_id {
        query = query.filter(trade_requests::target_assignment_id.eq(id.value()));
    }
    if let Some(status) = filter.status {
        query = query.filter(trade_requests::status.eq(status.as_str()));
    }

    let rows: Vec<TradeRequestRow> = query
        .order(trade_requests::trade_request_id.asc())
        .load(conn)?;
    rows.into_iter().map(TradeRequestRow::into_domain).collect()
}

/// Retrieves a trade request by identity.
///
/// # Errors
///
/// Returns an error if the query fails or the row is malformed.
/// Returns `Ok(None)` if the request is not found.
pub fn get_trade(
    conn: &mut SqliteConnection,
    trade_id: TradeRequestId,
) -> Result<Option<TradeRequest>, PersistenceError> {
    trade_requests::table
        .filter(trade_requests::trade_request_id.eq(trade_id.value()))
        .select(TradeRequestRow::as_select())
        .first(conn)
        .optional()?
        .map(TradeRequestRow::into_domain)
        .transpose()
}
