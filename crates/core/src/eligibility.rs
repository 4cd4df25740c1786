// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;

use duty_roster_domain::{Area, Person, PersonId};

/// Returns the people in `roster` who may fill a slot in `area`.
///
/// A candidate is enrolled, has a grade the area admits and is not in
/// `used`. The result keeps roster order; an empty result is not an error.
#[must_use]
pub fn eligible<'a>(
    roster: &'a [Person],
    area: &Area,
    used: &HashSet<PersonId>,
) -> Vec<&'a Person> {
    roster
        .iter()
        .filter(|p| p.is_active() && area.admits(p.grade) && !used.contains(&p.id))
        .collect()
}
