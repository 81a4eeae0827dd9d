//! Enrollment modal: popup overlay showing the joined roster table.

use crate::ui::dashboard::{DashboardState, EnrollmentsFetch};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::roster::{joined_rows, RosterRow};
use crate::ui::text::decode_html;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const MIN_DIALOG_WIDTH: u16 = 56;
const NAME_COL: usize = 20;
const EMAIL_COL: usize = 28;

pub fn render_roster_dialog(frame: &mut Frame<'_>, state: &DashboardState) {
    // Renders nothing while no course is selected.
    let Some(course) = &state.selected else {
        return;
    };

    let title = format!("Students in {}", decode_html(&course.name));
    let lines = dialog_lines(state);

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(4).max(MIN_DIALOG_WIDTH);
    let height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect_by_size(frame.area(), width, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn dialog_lines(state: &DashboardState) -> Vec<Line<'static>> {
    match &state.enrollments {
        EnrollmentsFetch::Idle | EnrollmentsFetch::Loading { .. } => {
            vec![Line::from(Span::styled(
                " Loading students...",
                Style::default().fg(MUTED_TEXT),
            ))]
        }
        EnrollmentsFetch::Failed { message, .. } => {
            vec![Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(STATUS_ERROR),
            ))]
        }
        EnrollmentsFetch::Ready { enrollments, .. } => {
            if enrollments.is_empty() {
                return vec![Line::from(Span::styled(
                    " No students enrolled in this course.",
                    Style::default().fg(MUTED_TEXT),
                ))];
            }

            let students = state.students.ready().map(Vec::as_slice).unwrap_or(&[]);
            let rows = joined_rows(students, enrollments, state.show_completed);

            let mut lines = Vec::with_capacity(rows.len() + 3);
            lines.push(filter_line(state.show_completed));
            lines.push(header_line());
            for row in &rows {
                lines.push(row_line(row));
            }
            lines
        }
    }
}

fn filter_line(show_completed: bool) -> Line<'static> {
    let marker = if show_completed { "[x]" } else { "[ ]" };
    Line::from(vec![
        Span::raw(" "),
        Span::styled(marker, Style::default().fg(ACCENT)),
        Span::styled(" Completed", Style::default().fg(HEADER_TEXT)),
        Span::styled("  (c to toggle)", Style::default().fg(MUTED_TEXT)),
    ])
}

fn header_line() -> Line<'static> {
    let style = Style::default()
        .fg(MUTED_TEXT)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("{:<width$}", "NAME", width = NAME_COL), style),
        Span::styled(format!("{:<width$}", "EMAIL", width = EMAIL_COL), style),
        Span::styled("PROGRESS", style),
    ])
}

fn row_line(row: &RosterRow) -> Line<'static> {
    let text = Style::default().fg(HEADER_TEXT);
    Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("{:<width$}", truncate(&row.name, NAME_COL - 1), width = NAME_COL),
            text,
        ),
        Span::styled(
            format!("{:<width$}", truncate(&row.email, EMAIL_COL - 1), width = EMAIL_COL),
            text,
        ),
        Span::styled(format!("{}%", row.percent_complete), text),
    ])
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Course, Enrollment, Student};
    use crate::ui::dashboard::Remote;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn base_state() -> DashboardState {
        DashboardState {
            selected: Some(Course {
                id: "c1".to_string(),
                name: "Rust Basics".to_string(),
                image_url: String::new(),
                heading: String::new(),
                is_published: true,
                description: None,
            }),
            students: Remote::Ready(vec![
                Student {
                    id: 1,
                    name: "John Doe".to_string(),
                    email: "john@example.com".to_string(),
                },
                Student {
                    id: 2,
                    name: "Jane Smith".to_string(),
                    email: "jane@example.com".to_string(),
                },
            ]),
            ..Default::default()
        }
    }

    fn with_enrollments(enrollments: Vec<Enrollment>) -> DashboardState {
        DashboardState {
            enrollments: EnrollmentsFetch::Ready {
                course_id: "c1".to_string(),
                enrollments,
            },
            ..base_state()
        }
    }

    #[test]
    fn loading_state_shows_loading_message() {
        let state = DashboardState {
            enrollments: EnrollmentsFetch::Loading {
                course_id: "c1".to_string(),
            },
            ..base_state()
        };
        let lines = dialog_lines(&state);
        assert_eq!(lines.len(), 1);
        assert!(line_text(&lines[0]).contains("Loading students..."));
    }

    #[test]
    fn empty_enrollments_show_no_students_message() {
        let lines = dialog_lines(&with_enrollments(Vec::new()));
        assert_eq!(lines.len(), 1);
        assert!(line_text(&lines[0]).contains("No students enrolled in this course."));
    }

    #[test]
    fn table_shows_one_row_per_joined_pair() {
        let lines = dialog_lines(&with_enrollments(vec![
            Enrollment {
                user_id: 1,
                percent_complete: 75,
            },
            Enrollment {
                user_id: 2,
                percent_complete: 100,
            },
        ]));
        // filter line + header + 2 rows
        assert_eq!(lines.len(), 4);
        assert!(line_text(&lines[2]).contains("John Doe"));
        assert!(line_text(&lines[2]).contains("75%"));
        assert!(line_text(&lines[3]).contains("jane@example.com"));
        assert!(line_text(&lines[3]).contains("100%"));
    }

    #[test]
    fn completed_filter_hides_partial_progress_rows() {
        let state = DashboardState {
            show_completed: true,
            ..with_enrollments(vec![
                Enrollment {
                    user_id: 1,
                    percent_complete: 75,
                },
                Enrollment {
                    user_id: 2,
                    percent_complete: 100,
                },
            ])
        };
        let lines = dialog_lines(&state);
        assert_eq!(lines.len(), 3);
        assert!(line_text(&lines[2]).contains("Jane Smith"));
    }

    #[test]
    fn unmatched_enrollment_produces_no_row() {
        let lines = dialog_lines(&with_enrollments(vec![Enrollment {
            user_id: 99,
            percent_complete: 100,
        }]));
        // filter line + header, no rows, no error
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn failed_fetch_shows_the_fixed_message() {
        let state = DashboardState {
            enrollments: EnrollmentsFetch::Failed {
                course_id: "c1".to_string(),
                message: "Failed to fetch course enrollments".to_string(),
            },
            ..base_state()
        };
        let lines = dialog_lines(&state);
        assert!(line_text(&lines[0]).contains("Failed to fetch course enrollments"));
    }
}
