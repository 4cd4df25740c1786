// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fairness counts.
//!
//! A person's fairness count is the number of non-canceled assignments they
//! have ever held. Allocation and reassignment both prefer the lowest count.

use std::collections::HashMap;

use duty_roster_domain::{Assignment, Person, PersonId};

use crate::error::StoreError;
use crate::store::{AssignmentFilter, AssignmentStore};

/// Returns the fairness count of `person_id` over the current store.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn count_for<S: AssignmentStore>(
    store: &mut S,
    person_id: PersonId,
) -> Result<u32, StoreError> {
    let filter: AssignmentFilter = AssignmentFilter {
        person_id: Some(person_id),
        ..AssignmentFilter::default()
    };
    let held: usize = store
        .list_assignments(&filter)?
        .iter()
        .filter(|a| a.is_active())
        .count();
    Ok(u32::try_from(held).unwrap_or(u32::MAX))
}

/// Working copy of fairness counts.
///
/// Seeded once per batch and bumped locally as the batch places people, so
/// later placements in the same run see earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FairnessLedger {
    counts: HashMap<PersonId, u32>,
}

impl FairnessLedger {
    /// Seeds a ledger with a zero entry for every person in `roster`, then
    /// adds every non-canceled assignment in `history`.
    #[must_use]
    pub fn seed(roster: &[Person], history: &[Assignment]) -> Self {
        let mut counts: HashMap<PersonId, u32> = roster.iter().map(|p| (p.id, 0)).collect();
        for assignment in history.iter().filter(|a| a.is_active()) {
            let count: &mut u32 = counts.entry(assignment.person_id).or_default();
            *count = count.saturating_add(1);
        }
        Self { counts }
    }

    /// Returns the count for `person_id`, zero if unknown.
    #[must_use]
    pub fn count_for(&self, person_id: PersonId) -> u32 {
        self.counts.get(&person_id).copied().unwrap_or_default()
    }

    /// Records one more placement for `person_id`.
    pub fn record(&mut self, person_id: PersonId) {
        let count: &mut u32 = self.counts.entry(person_id).or_default();
        *count = count.saturating_add(1);
    }
}
