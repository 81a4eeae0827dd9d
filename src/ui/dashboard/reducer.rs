use crate::ui::dashboard::intent::DashboardIntent;
use crate::ui::dashboard::state::{DashboardState, EnrollmentsFetch, Remote};
use crate::ui::mvi::Reducer;

pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Intent = DashboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::CoursesRequested => DashboardState {
                courses: Remote::Loading,
                ..state
            },
            DashboardIntent::CoursesLoaded(courses) => {
                let cursor = if courses.is_empty() {
                    0
                } else {
                    state.cursor.min(courses.len() - 1)
                };
                DashboardState {
                    courses: Remote::Ready(courses),
                    cursor,
                    ..state
                }
            }
            DashboardIntent::CoursesFailed(message) => DashboardState {
                courses: Remote::Failed(message),
                ..state
            },

            DashboardIntent::StudentsRequested => DashboardState {
                students: Remote::Loading,
                ..state
            },
            DashboardIntent::StudentsLoaded(students) => DashboardState {
                students: Remote::Ready(students),
                ..state
            },
            DashboardIntent::StudentsFailed(message) => DashboardState {
                students: Remote::Failed(message),
                ..state
            },

            DashboardIntent::MoveCursor(delta) => {
                let Some(courses) = state.courses.ready() else {
                    return state;
                };
                if courses.is_empty() {
                    return state;
                }
                let len = courses.len();
                let cursor = if delta.is_negative() {
                    if state.cursor == 0 {
                        len - 1
                    } else {
                        state.cursor - 1
                    }
                } else if state.cursor + 1 >= len {
                    0
                } else {
                    state.cursor + 1
                };
                DashboardState { cursor, ..state }
            }

            DashboardIntent::CourseSelected => {
                let Some(course) = state.course_under_cursor().cloned() else {
                    return state;
                };
                DashboardState {
                    selected: Some(course),
                    ..state
                }
            }
            DashboardIntent::SelectionCleared => DashboardState {
                selected: None,
                enrollments: EnrollmentsFetch::Idle,
                ..state
            },

            DashboardIntent::EnrollmentsRequested { course_id } => DashboardState {
                enrollments: EnrollmentsFetch::Loading { course_id },
                ..state
            },
            DashboardIntent::EnrollmentsLoaded {
                course_id,
                enrollments,
            } => {
                if !selection_matches(&state, &course_id) {
                    // Stale response for a course no longer selected.
                    return state;
                }
                DashboardState {
                    enrollments: EnrollmentsFetch::Ready {
                        course_id,
                        enrollments,
                    },
                    ..state
                }
            }
            DashboardIntent::EnrollmentsFailed { course_id, message } => {
                if !selection_matches(&state, &course_id) {
                    return state;
                }
                DashboardState {
                    enrollments: EnrollmentsFetch::Failed { course_id, message },
                    ..state
                }
            }

            DashboardIntent::CompletedToggled => DashboardState {
                show_completed: !state.show_completed,
                ..state
            },
        }
    }
}

/// A fetch result is applied only when it carries the id of the course that
/// is still selected. Everything else arrived too late.
fn selection_matches(state: &DashboardState, course_id: &str) -> bool {
    state
        .selected
        .as_ref()
        .is_some_and(|course| course.id == course_id)
}
