// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Area, AreaId, AssignmentId, DomainError, validate_area, validate_trade_pair_ids};

#[test]
fn test_validate_area_accepts_valid_area() {
    let area: Area = Area::new(AreaId::new(1), "Room 301", 2, [3]);
    assert!(validate_area(&area).is_ok());
}

#[test]
fn test_validate_area_rejects_zero_headcount() {
    let area: Area = Area::new(AreaId::new(1), "Room 301", 0, [3]);
    assert_eq!(
        validate_area(&area),
        Err(DomainError::InvalidHeadcount {
            area_id: AreaId::new(1),
            headcount: 0,
        })
    );
}

#[test]
fn test_validate_area_rejects_empty_grade_set() {
    let area: Area = Area::new(AreaId::new(6), "Humidifier", 1, []);
    assert_eq!(
        validate_area(&area),
        Err(DomainError::NoEligibleGrades(AreaId::new(6)))
    );
}

#[test]
fn test_validate_trade_pair_rejects_same_assignment() {
    assert_eq!(
        validate_trade_pair_ids(AssignmentId::new(3), AssignmentId::new(3)),
        Err(DomainError::SameAssignment(AssignmentId::new(3)))
    );
    let distinct: Result<(), DomainError> =
        validate_trade_pair_ids(AssignmentId::new(3), AssignmentId::new(4));
    assert!(distinct.is_ok());
}
