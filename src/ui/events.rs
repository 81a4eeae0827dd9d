use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent};

use crate::api::{Course, Enrollment, Student};

/// Everything the UI loop reacts to: terminal input, ticks, and fetch
/// results injected by the fetcher on the same channel.
#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    CoursesLoaded(Vec<Course>),
    CoursesFailed(String),
    StudentsLoaded(Vec<Student>),
    StudentsFailed(String),
    /// Tagged with the course id the request was issued for so stale
    /// results can be discarded after a selection change.
    EnrollmentsLoaded {
        course_id: String,
        enrollments: Vec<Enrollment>,
    },
    EnrollmentsFailed {
        course_id: String,
        message: String,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match crossterm::event::poll(timeout) {
                    Ok(true) => match crossterm::event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::warn!(error = %err, "terminal event read failed");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::warn!(error = %err, "terminal event poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
