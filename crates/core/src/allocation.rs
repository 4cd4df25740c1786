// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Initial allocation of people to duty slots.
//!
//! Areas are filled in ascending identity order, one slot at a time. Each
//! slot goes to the eligible person with the lowest fairness count; ties are
//! broken by the injected [`TieBreaker`]. A person is used at most once per
//! schedule. Slots nobody can fill are reported as shortfalls, not errors.

use std::collections::HashSet;

use duty_roster_domain::{
    Area, AreaId, Assignment, NewAssignment, Person, PersonId, Schedule, ScheduleId,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::eligibility::eligible;
use crate::error::{CoreError, StoreError};
use crate::fairness::FairnessLedger;
use crate::store::{AssignmentFilter, AssignmentStore, Store};
use crate::tie_break::TieBreaker;

/// Slots of one area that could not be filled on one schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shortfall {
    /// The under-staffed area.
    pub area_id: AreaId,
    /// The area's required headcount.
    pub required: u32,
    /// How many slots were filled.
    pub placed: u32,
    /// `required - placed`.
    pub missing: u32,
}

/// Outcome of allocating one schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleAllocation {
    /// The schedule.
    pub schedule_id: ScheduleId,
    /// Assignments created, in creation order.
    pub placed: Vec<Assignment>,
    /// One entry per area left short.
    pub shortfalls: Vec<Shortfall>,
}

/// Outcome of a batch allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationSummary {
    /// Every schedule the batch processed, in ascending identity order,
    /// including those where nobody could be placed.
    pub allocations: Vec<ScheduleAllocation>,
    /// Schedules left alone because they already had assignments.
    pub skipped_schedule_ids: Vec<ScheduleId>,
    /// Number of assignments created across the batch.
    pub total_placed: usize,
}

impl AllocationSummary {
    /// Number of schedules that received at least one assignment.
    #[must_use]
    pub fn allocated_schedule_count(&self) -> usize {
        self.allocations
            .iter()
            .filter(|a| !a.placed.is_empty())
            .count()
    }
}

/// Allocates a single schedule.
///
/// Fairness is seeded from the store at call time.
///
/// # Errors
///
/// Returns an error if:
/// - The schedule does not exist
/// - The schedule already has assignments
/// - The store fails
pub fn allocate<S: Store, T: TieBreaker>(
    store: &mut S,
    tie_breaker: &mut T,
    schedule_id: ScheduleId,
) -> Result<ScheduleAllocation, CoreError> {
    store.atomically(|store: &mut S| {
        if store.get_schedule(schedule_id)?.is_none() {
            return Err(CoreError::ScheduleNotFound(schedule_id));
        }

        if !store
            .list_assignments(&AssignmentFilter::for_schedule(schedule_id))?
            .is_empty()
        {
            warn!(
                schedule_id = schedule_id.value(),
                "Refusing to allocate a schedule twice"
            );
            return Err(CoreError::ScheduleAlreadyAllocated(schedule_id));
        }

        let (roster, areas, mut ledger) = load_inputs(store)?;
        let allocation: ScheduleAllocation = fill_schedule(
            store,
            &roster,
            &areas,
            &mut ledger,
            tie_breaker,
            schedule_id,
        )?;

        info!(
            schedule_id = schedule_id.value(),
            placed = allocation.placed.len(),
            shortfalls = allocation.shortfalls.len(),
            "Allocated schedule"
        );
        Ok(allocation)
    })
}

/// Allocates every schedule that has no assignments yet.
///
/// One fairness ledger is shared across the whole batch so load balances
/// across schedules as well as within each one.
///
/// # Errors
///
/// Returns `CoreError::NothingToAllocate` if no schedule exists or if the
/// batch placed nobody, or a store error.
pub fn allocate_all<S: Store, T: TieBreaker>(
    store: &mut S,
    tie_breaker: &mut T,
) -> Result<AllocationSummary, CoreError> {
    store.atomically(|store: &mut S| {
        let mut schedules: Vec<Schedule> = store.list_schedules()?;
        if schedules.is_empty() {
            return Err(CoreError::NothingToAllocate(String::from(
                "no schedules exist",
            )));
        }
        schedules.sort_by_key(|s| s.id);

        let history: Vec<Assignment> = store.list_assignments(&AssignmentFilter::default())?;
        let allocated: HashSet<ScheduleId> = history.iter().map(|a| a.schedule_id).collect();
        let (roster, areas, mut ledger) = load_inputs(store)?;

        let mut summary: AllocationSummary = AllocationSummary {
            allocations: Vec::new(),
            skipped_schedule_ids: Vec::new(),
            total_placed: 0,
        };

        for schedule in &schedules {
            if allocated.contains(&schedule.id) {
                debug!(
                    schedule_id = schedule.id.value(),
                    "Skipping schedule with existing assignments"
                );
                summary.skipped_schedule_ids.push(schedule.id);
                continue;
            }

            let allocation: ScheduleAllocation = fill_schedule(
                store,
                &roster,
                &areas,
                &mut ledger,
                tie_breaker,
                schedule.id,
            )?;
            summary.total_placed += allocation.placed.len();
            summary.allocations.push(allocation);
        }

        if summary.total_placed == 0 {
            warn!(
                skipped = summary.skipped_schedule_ids.len(),
                "Batch allocation placed nobody"
            );
            return Err(CoreError::NothingToAllocate(String::from(
                "every schedule is already allocated or has no eligible people",
            )));
        }

        info!(
            schedules = summary.allocated_schedule_count(),
            skipped = summary.skipped_schedule_ids.len(),
            placed = summary.total_placed,
            "Batch allocation complete"
        );
        Ok(summary)
    })
}

/// Loads the roster and areas in identity order plus a fairness ledger
/// seeded from every assignment in the store.
fn load_inputs<S: Store>(
    store: &mut S,
) -> Result<(Vec<Person>, Vec<Area>, FairnessLedger), StoreError> {
    let mut roster: Vec<Person> = store.list_active_persons()?;
    roster.sort_by_key(|p| p.id);

    let mut areas: Vec<Area> = store.list_areas()?;
    areas.sort_by_key(|a| a.id);

    let history: Vec<Assignment> = store.list_assignments(&AssignmentFilter::default())?;
    let ledger: FairnessLedger = FairnessLedger::seed(&roster, &history);

    Ok((roster, areas, ledger))
}

fn fill_schedule<S: AssignmentStore, T: TieBreaker>(
    store: &mut S,
    roster: &[Person],
    areas: &[Area],
    ledger: &mut FairnessLedger,
    tie_breaker: &mut T,
    schedule_id: ScheduleId,
) -> Result<ScheduleAllocation, StoreError> {
    let mut used: HashSet<PersonId> = HashSet::new();
    let mut placed: Vec<Assignment> = Vec::new();
    let mut shortfalls: Vec<Shortfall> = Vec::new();

    for area in areas {
        let mut filled: u32 = 0;

        while filled < area.required_headcount {
            let candidates: Vec<&Person> = eligible(roster, area, &used);
            let Some(person_id) = pick_least_loaded(&candidates, ledger, tie_breaker) else {
                break;
            };

            let assignment: Assignment = store.create_assignment(NewAssignment {
                schedule_id,
                person_id,
                area_id: area.id,
            })?;
            debug!(
                schedule_id = schedule_id.value(),
                area_id = area.id.value(),
                person_id = person_id.value(),
                fairness = ledger.count_for(person_id),
                "Placed person"
            );

            used.insert(person_id);
            ledger.record(person_id);
            placed.push(assignment);
            filled += 1;
        }

        if filled < area.required_headcount {
            let shortfall: Shortfall = Shortfall {
                area_id: area.id,
                required: area.required_headcount,
                placed: filled,
                missing: area.required_headcount - filled,
            };
            warn!(
                schedule_id = schedule_id.value(),
                area_id = area.id.value(),
                missing = shortfall.missing,
                "Area left short"
            );
            shortfalls.push(shortfall);
        }
    }

    Ok(ScheduleAllocation {
        schedule_id,
        placed,
        shortfalls,
    })
}

/// Picks the candidate with the lowest fairness count.
///
/// Tied candidates are ordered by identity before the tie-break so a seeded
/// tie-breaker always yields the same person.
fn pick_least_loaded<T: TieBreaker>(
    candidates: &[&Person],
    ledger: &FairnessLedger,
    tie_breaker: &mut T,
) -> Option<PersonId> {
    let lowest: u32 = candidates.iter().map(|p| ledger.count_for(p.id)).min()?;

    let mut tied: Vec<PersonId> = candidates
        .iter()
        .filter(|p| ledger.count_for(p.id) == lowest)
        .map(|p| p.id)
        .collect();
    tied.sort_unstable();

    tied.get(tie_breaker.choose_index(tied.len())).copied()
}
