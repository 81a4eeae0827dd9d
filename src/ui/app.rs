use tokio::sync::mpsc;

use crate::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;

/// Side-effect requests sent from the UI thread to the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    FetchCourses,
    FetchStudents,
    FetchEnrollments { course_id: String },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    dashboard: DashboardState,
    commands: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            dashboard: DashboardState::default(),
            commands: None,
            last_command_error: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn on_tick(&mut self) {}

    /// Issue the two unconditional fetches. They are independent; neither
    /// waits for the other.
    pub fn refresh(&mut self) {
        self.dispatch(DashboardIntent::CoursesRequested);
        self.send_command(UiCommand::FetchCourses);
        self.dispatch(DashboardIntent::StudentsRequested);
        self.send_command(UiCommand::FetchStudents);
    }

    pub fn move_cursor(&mut self, delta: i32) {
        self.dispatch(DashboardIntent::MoveCursor(delta));
    }

    /// Select the course under the cursor and request its enrollments.
    pub fn open_roster(&mut self) {
        let Some(course_id) = self
            .dashboard
            .course_under_cursor()
            .map(|course| course.id.clone())
        else {
            return;
        };
        self.dispatch(DashboardIntent::CourseSelected);
        self.dispatch(DashboardIntent::EnrollmentsRequested {
            course_id: course_id.clone(),
        });
        self.send_command(UiCommand::FetchEnrollments { course_id });
    }

    /// Clear the selection. The in-flight enrollment request, if any, is
    /// left running; its result will fail the reducer's key check.
    pub fn close_roster(&mut self) {
        self.dispatch(DashboardIntent::SelectionCleared);
    }

    pub fn toggle_completed(&mut self) {
        if self.dashboard.modal_open() {
            self.dispatch(DashboardIntent::CompletedToggled);
        }
    }

    /// Fold a fetch result into the dashboard state.
    pub fn on_fetch_event(&mut self, event: AppEvent) {
        let intent = match event {
            AppEvent::CoursesLoaded(courses) => DashboardIntent::CoursesLoaded(courses),
            AppEvent::CoursesFailed(message) => DashboardIntent::CoursesFailed(message),
            AppEvent::StudentsLoaded(students) => DashboardIntent::StudentsLoaded(students),
            AppEvent::StudentsFailed(message) => DashboardIntent::StudentsFailed(message),
            AppEvent::EnrollmentsLoaded {
                course_id,
                enrollments,
            } => DashboardIntent::EnrollmentsLoaded {
                course_id,
                enrollments,
            },
            AppEvent::EnrollmentsFailed { course_id, message } => {
                DashboardIntent::EnrollmentsFailed { course_id, message }
            }
            AppEvent::Input(_) | AppEvent::Tick | AppEvent::Resize(_, _) => return,
        };
        self.dispatch(intent);
    }

    fn dispatch(&mut self, intent: DashboardIntent) {
        dispatch_mvi!(self, dashboard, DashboardReducer, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.commands else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                self.last_command_error = Some(format!("Fetch dispatch failed: {}", err));
                false
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
