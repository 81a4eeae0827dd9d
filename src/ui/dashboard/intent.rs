use crate::api::{Course, Enrollment, Student};
use crate::ui::mvi::Intent;

/// User actions and fetch results feeding the dashboard reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardIntent {
    CoursesRequested,
    CoursesLoaded(Vec<Course>),
    CoursesFailed(String),

    StudentsRequested,
    StudentsLoaded(Vec<Student>),
    StudentsFailed(String),

    /// Move the course-list highlight by a signed offset.
    MoveCursor(i32),
    /// Select the course under the cursor (opens the roster modal).
    CourseSelected,
    /// Clear the selection (closes the modal). Does not cancel an
    /// in-flight enrollment request.
    SelectionCleared,

    EnrollmentsRequested {
        course_id: String,
    },
    EnrollmentsLoaded {
        course_id: String,
        enrollments: Vec<Enrollment>,
    },
    EnrollmentsFailed {
        course_id: String,
        message: String,
    },

    /// Flip the "show only completed" filter. No refetch.
    CompletedToggled,
}

impl Intent for DashboardIntent {}
