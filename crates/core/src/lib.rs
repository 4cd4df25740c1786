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

pub mod allocation;
mod coverage;
mod eligibility;
mod error;
pub mod fairness;
mod memory;
pub mod reassignment;
mod roster;
pub mod status;
mod store;
mod tie_break;
pub mod trade;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use allocation::{AllocationSummary, ScheduleAllocation, Shortfall, allocate, allocate_all};
pub use eligibility::eligible;
pub use error::{CoreError, ErrorKind, StoreError};
pub use fairness::FairnessLedger;
pub use memory::InMemoryStore;
pub use reassignment::{Reassignment, reassign};
pub use roster::DutyRoster;
pub use status::set_assignment_status;
pub use store::{
    AreaProvider, AssignmentFilter, AssignmentStore, RosterProvider, ScheduleProvider, Store,
    TradeFilter, TradeStore,
};
pub use tie_break::{RandomTieBreaker, TieBreaker};
pub use trade::{propose, resolve};
