use crate::api::{Course, Enrollment, Student};
use crate::ui::mvi::UiState;

/// Status of one independent fetch. Each fetch tracks its own loading flag
/// and error value; they are never aggregated into a combined status.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Remote<T> {
    /// No request has been issued yet. Distinct from an empty result.
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Enrollments fetch state, keyed by the course id the request was issued
/// for. Late responses for a different key are discarded by the reducer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EnrollmentsFetch {
    #[default]
    Idle,
    Loading {
        course_id: String,
    },
    Ready {
        course_id: String,
        enrollments: Vec<Enrollment>,
    },
    Failed {
        course_id: String,
        message: String,
    },
}

impl EnrollmentsFetch {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub courses: Remote<Vec<Course>>,
    pub students: Remote<Vec<Student>>,
    /// Highlighted card in the course list.
    pub cursor: usize,
    /// At most one course is selected at a time, or none.
    pub selected: Option<Course>,
    pub enrollments: EnrollmentsFetch,
    /// "Show only completed" filter. Persists across modal opens.
    pub show_completed: bool,
}

impl UiState for DashboardState {}

impl DashboardState {
    /// Course under the cursor, if the course list is ready and non-empty.
    pub fn course_under_cursor(&self) -> Option<&Course> {
        self.courses.ready().and_then(|courses| courses.get(self.cursor))
    }

    pub fn modal_open(&self) -> bool {
        self.selected.is_some()
    }
}
