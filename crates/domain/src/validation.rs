// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::AssignmentId;
use crate::types::Area;

/// Validates the fields of an area record.
///
/// # Errors
///
/// Returns an error if:
/// - The area requires zero people
/// - The area admits no grade at all
pub fn validate_area(area: &Area) -> Result<(), DomainError> {
    if area.required_headcount == 0 {
        return Err(DomainError::InvalidHeadcount {
            area_id: area.id,
            headcount: area.required_headcount,
        });
    }

    if area.eligible_grades.is_empty() {
        return Err(DomainError::NoEligibleGrades(area.id));
    }

    Ok(())
}

/// Validates that a trade pair references two distinct assignments.
///
/// # Errors
///
/// Returns `DomainError::SameAssignment` if both ids are equal.
pub fn validate_trade_pair_ids(
    requester: AssignmentId,
    target: AssignmentId,
) -> Result<(), DomainError> {
    if requester == target {
        return Err(DomainError::SameAssignment(requester));
    }
    Ok(())
}
