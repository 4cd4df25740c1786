// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AreaId, AssignmentId, DomainError};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidAssignmentStatus(String::from("gone"));
    assert_eq!(format!("{err}"), "Invalid assignment status: 'gone'");

    let err: DomainError = DomainError::InvalidTradeStatus(String::from("maybe"));
    assert_eq!(format!("{err}"), "Invalid trade status: 'maybe'");

    let err: DomainError = DomainError::InvalidHeadcount {
        area_id: AreaId::new(4),
        headcount: 0,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid headcount 0 for area 4. Must be at least 1"
    );

    let err: DomainError = DomainError::NoEligibleGrades(AreaId::new(2));
    assert_eq!(format!("{err}"), "area 2 must admit at least one grade");

    let err: DomainError = DomainError::SameAssignment(AssignmentId::new(7));
    assert_eq!(format!("{err}"), "Cannot trade assignment 7 with itself");

    let err: DomainError = DomainError::InvalidStatusTransition {
        from: String::from("accepted"),
        to: String::from("rejected"),
        reason: String::from("cannot transition from terminal state"),
    };
    assert_eq!(
        format!("{err}"),
        "Cannot transition from 'accepted' to 'rejected': cannot transition from terminal state"
    );
}
