// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs and their conversion to domain records.

use std::collections::BTreeSet;

use diesel::prelude::*;
use duty_roster_domain::{
    Area, AreaId, Assignment, AssignmentId, AssignmentStatus, EnrollmentStatus, Person, PersonId,
    Schedule, ScheduleId, TradeRequest, TradeRequestId, TradeStatus,
};
use num_traits::ToPrimitive;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::diesel_schema::{area_grades, areas, assignments, persons, schedules, trade_requests};
use crate::error::PersistenceError;

/// Storage format of `schedules.duty_date`.
const DUTY_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Formats a duty date for storage.
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub fn format_duty_date(date: Date) -> Result<String, PersistenceError> {
    date.format(DUTY_DATE_FORMAT)
        .map_err(|e| PersistenceError::CorruptRecord(format!("duty date {date}: {e}")))
}

fn parse_duty_date(text: &str) -> Result<Date, PersistenceError> {
    Date::parse(text, DUTY_DATE_FORMAT)
        .map_err(|e| PersistenceError::CorruptRecord(format!("duty date '{text}': {e}")))
}

fn grade_from_column(grade: i32) -> Result<u8, PersistenceError> {
    grade
        .to_u8()
        .ok_or_else(|| PersistenceError::CorruptRecord(format!("grade {grade} out of range")))
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = persons)]
pub struct PersonRow {
    pub person_id: i64,
    pub name: String,
    pub grade: i32,
    pub status: String,
    pub role: String,
}

impl PersonRow {
    pub fn into_domain(self) -> Result<Person, PersistenceError> {
        let status: EnrollmentStatus = self
            .status
            .parse::<EnrollmentStatus>()
            .map_err(|e| PersistenceError::CorruptRecord(e.to_string()))?;
        Ok(Person {
            id: PersonId::new(self.person_id),
            name: self.name,
            grade: grade_from_column(self.grade)?,
            status,
            role: self.role,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = persons)]
pub struct NewPersonRow<'a> {
    pub person_id: i64,
    pub name: &'a str,
    pub grade: i32,
    pub status: &'a str,
    pub role: &'a str,
}

impl<'a> From<&'a Person> for NewPersonRow<'a> {
    fn from(person: &'a Person) -> Self {
        Self {
            person_id: person.id.value(),
            name: &person.name,
            grade: i32::from(person.grade),
            status: person.status.as_str(),
            role: &person.role,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = areas)]
pub struct AreaRow {
    pub area_id: i64,
    pub name: String,
    pub required_headcount: i32,
}

impl AreaRow {
    /// Combines the area with its grade rows.
    pub fn into_domain(self, grades: &[i32]) -> Result<Area, PersistenceError> {
        let required_headcount: u32 = self.required_headcount.to_u32().ok_or_else(|| {
            PersistenceError::CorruptRecord(format!(
                "area {} headcount {} out of range",
                self.area_id, self.required_headcount
            ))
        })?;
        let eligible_grades: BTreeSet<u8> = grades
            .iter()
            .map(|g| grade_from_column(*g))
            .collect::<Result<_, _>>()?;
        Ok(Area {
            id: AreaId::new(self.area_id),
            name: self.name,
            required_headcount,
            eligible_grades,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = areas)]
pub struct NewAreaRow<'a> {
    pub area_id: i64,
    pub name: &'a str,
    pub required_headcount: i32,
}

#[derive(Queryable, Selectable, Insertable)]
#[diesel(table_name = area_grades)]
pub struct AreaGradeRow {
    pub area_id: i64,
    pub grade: i32,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = schedules)]
pub struct ScheduleRow {
    pub schedule_id: i64,
    pub duty_date: String,
}

impl ScheduleRow {
    pub fn into_domain(self) -> Result<Schedule, PersistenceError> {
        Ok(Schedule {
            id: ScheduleId::new(self.schedule_id),
            duty_date: parse_duty_date(&self.duty_date)?,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = schedules)]
pub struct NewScheduleRow {
    pub schedule_id: i64,
    pub duty_date: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = assignments)]
pub struct AssignmentRow {
    pub assignment_id: i64,
    pub schedule_id: i64,
    pub person_id: i64,
    pub area_id: i64,
    pub status: String,
}

impl AssignmentRow {
    pub fn into_domain(self) -> Result<Assignment, PersistenceError> {
        let status: AssignmentStatus = self
            .status
            .parse::<AssignmentStatus>()
            .map_err(|e| PersistenceError::CorruptRecord(e.to_string()))?;
        Ok(Assignment {
            id: AssignmentId::new(self.assignment_id),
            schedule_id: ScheduleId::new(self.schedule_id),
            person_id: PersonId::new(self.person_id),
            area_id: AreaId::new(self.area_id),
            status,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = assignments)]
pub struct NewAssignmentRow<'a> {
    pub schedule_id: i64,
    pub person_id: i64,
    pub area_id: i64,
    pub status: &'a str,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = trade_requests)]
pub struct TradeRequestRow {
    pub trade_request_id: i64,
    pub requester_assignment_id: i64,
    pub target_assignment_id: i64,
    pub status: String,
}

impl TradeRequestRow {
    pub fn into_domain(self) -> Result<TradeRequest, PersistenceError> {
        let status: TradeStatus = self
            .status
            .parse::<TradeStatus>()
            .map_err(|e| PersistenceError::CorruptRecord(e.to_string()))?;
        Ok(TradeRequest {
            id: TradeRequestId::new(self.trade_request_id),
            requester_assignment_id: AssignmentId::new(self.requester_assignment_id),
            target_assignment_id: AssignmentId::new(self.target_assignment_id),
            status,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = trade_requests)]
pub struct NewTradeRequestRow<'a> {
    pub requester_assignment_id: i64,
    pub target_assignment_id: i64,
    pub status: &'a str,
}
