//! Join of enrollments to students for the roster table.

use crate::api::{Enrollment, Student};

/// One rendered row in the enrollment modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub name: String,
    pub email: String,
    pub percent_complete: i64,
}

/// Join each enrollment to the student with the matching `user_id`.
///
/// Enrollments with no matching student are dropped silently — upstream
/// data about departed or renamed students may legitimately be
/// inconsistent, so a miss is not an error. When `show_completed` is set,
/// only fully-completed enrollments survive the filter. Output preserves
/// enrollment order.
pub fn joined_rows(
    students: &[Student],
    enrollments: &[Enrollment],
    show_completed: bool,
) -> Vec<RosterRow> {
    enrollments
        .iter()
        .filter(|enrollment| !show_completed || enrollment.percent_complete == 100)
        .filter_map(|enrollment| {
            let student = students.iter().find(|s| s.id == enrollment.user_id)?;
            Some(RosterRow {
                name: student.name.clone(),
                email: student.email.clone(),
                percent_complete: enrollment.percent_complete,
            })
        })
        .collect()
}
