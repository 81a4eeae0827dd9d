//! Course list rendering: one card per course.

use crate::api::Course;
use crate::ui::dashboard::{DashboardState, Remote};
use crate::ui::text::decode_html;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_courses(frame: &mut Frame<'_>, area: Rect, state: &DashboardState) {
    match &state.courses {
        Remote::Idle => {}
        Remote::Loading => {
            let widget = Paragraph::new("Loading courses...")
                .style(Style::default().fg(MUTED_TEXT))
                .alignment(Alignment::Center);
            frame.render_widget(widget, vertically_centered_line(area));
        }
        Remote::Failed(message) => render_error_alert(frame, area, message),
        Remote::Ready(courses) if courses.is_empty() => {
            let widget = Paragraph::new("No courses found")
                .style(Style::default().fg(MUTED_TEXT))
                .alignment(Alignment::Center);
            frame.render_widget(widget, vertically_centered_line(area));
        }
        Remote::Ready(courses) => {
            let mut lines: Vec<Line> = Vec::new();
            let mut cursor_range = (0usize, 0usize);

            for (idx, course) in courses.iter().enumerate() {
                let highlighted = idx == state.cursor;
                let card_start = lines.len();
                let mut card = course_card_lines(course);
                if highlighted {
                    let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
                    card = card.into_iter().map(|line| line.style(highlight)).collect();
                }
                lines.extend(card);
                if highlighted {
                    cursor_range = (card_start, lines.len());
                }
                lines.push(Line::from(""));
            }

            // Keep the highlighted card inside the viewport.
            let height = area.height as usize;
            let scroll = if cursor_range.1 > height {
                (cursor_range.1 - height) as u16
            } else {
                0
            };

            let widget = Paragraph::new(lines).scroll((scroll, 0));
            frame.render_widget(widget, area);
        }
    }
}

fn course_card_lines(course: &Course) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let (tag, tag_color) = if course.is_published {
        ("published", STATUS_OK)
    } else {
        ("draft", MUTED_TEXT)
    };
    lines.push(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(
            decode_html(&course.name).into_owned(),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("[{}]", tag), Style::default().fg(tag_color)),
    ]));

    // A terminal cannot show the thumbnail; surface the URL instead, and
    // only when the course has one.
    if !course.image_url.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(
                course.image_url.clone(),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
            ),
        ]));
    }

    if !course.heading.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(
                decode_html(&course.heading).into_owned(),
                Style::default().fg(MUTED_TEXT),
            ),
        ]));
    }

    lines
}

/// Inline alert block for a failed courses fetch.
fn render_error_alert(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let line = Line::from(vec![
        Span::styled(
            "Error:",
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", message), Style::default().fg(STATUS_ERROR)),
    ]);
    let height = 3.min(area.height);
    let alert_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height,
    };
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_ERROR)),
    );
    frame.render_widget(widget, alert_area);
}

fn vertically_centered_line(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1.min(area.height),
    }
}
