//! Executes fetch commands off the UI thread.
//!
//! One task per command; the three fetch kinds are independent and may be
//! in flight concurrently. Nothing is cancelled: a superseded enrollment
//! request runs to completion and its tagged result is discarded by the
//! reducer's key check.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::sync::mpsc::Receiver;

use crate::api::ApiClient;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

pub async fn run(client: Arc<ApiClient>, mut commands: Receiver<UiCommand>, events: Sender<AppEvent>) {
    while let Some(command) = commands.recv().await {
        let client = Arc::clone(&client);
        let events = events.clone();
        tokio::spawn(async move {
            let event = execute(&client, command).await;
            // Receiver gone means the UI loop has exited.
            let _ = events.send(event);
        });
    }
}

async fn execute(client: &ApiClient, command: UiCommand) -> AppEvent {
    match command {
        UiCommand::FetchCourses => match client.fetch_courses().await {
            Ok(response) => AppEvent::CoursesLoaded(response.courses),
            Err(err) => {
                tracing::warn!(error = %err, "courses fetch failed");
                AppEvent::CoursesFailed(err.to_string())
            }
        },
        UiCommand::FetchStudents => match client.fetch_students().await {
            Ok(response) => AppEvent::StudentsLoaded(response.users),
            Err(err) => {
                tracing::warn!(error = %err, "students fetch failed");
                AppEvent::StudentsFailed(err.to_string())
            }
        },
        UiCommand::FetchEnrollments { course_id } => {
            match client.fetch_students_in_course(&course_id).await {
                Ok(response) => AppEvent::EnrollmentsLoaded {
                    course_id,
                    enrollments: response.enrollments,
                },
                Err(err) => {
                    tracing::warn!(error = %err, %course_id, "enrollments fetch failed");
                    AppEvent::EnrollmentsFailed {
                        course_id,
                        message: err.to_string(),
                    }
                }
            }
        }
    }
}
