//! Dashboard view state (MVI pattern).
//!
//! Coordinates three independent fetches — courses, students, and
//! enrollments for the selected course — plus the selection and the
//! completion-filter flag. Side effects (issuing the fetches) live in
//! [`crate::ui::app::App`]; the reducer here is pure.

mod intent;
mod reducer;
mod state;

pub use intent::DashboardIntent;
pub use reducer::DashboardReducer;
pub use state::{DashboardState, EnrollmentsFetch, Remote};
