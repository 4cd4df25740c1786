// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod assignment_status;
mod error;
mod ids;
mod trade_status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use assignment_status::AssignmentStatus;
pub use error::DomainError;
pub use ids::{AreaId, AssignmentId, PersonId, ScheduleId, TradeRequestId};
pub use trade_status::TradeStatus;
pub use types::{
    Area, Assignment, EnrollmentStatus, NewAssignment, NewTradeRequest, Person, Schedule,
    TradeRequest,
};
pub use validation::{validate_area, validate_trade_pair_ids};
