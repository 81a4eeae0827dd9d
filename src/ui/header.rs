use crate::ui::dashboard::{DashboardState, Remote};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &DashboardState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (status_icon, status_style) = match &state.courses {
            Remote::Failed(_) => ("🔴", Style::default().fg(STATUS_ERROR)),
            _ => ("🟢", Style::default().fg(STATUS_OK)),
        };

        let course_count = match state.courses.ready() {
            Some(courses) => format!("{} courses", courses.len()),
            None => "loading".to_string(),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(status_icon, status_style),
            Span::styled("  ", text_style),
            Span::styled(
                "Teachable Courses",
                text_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(course_count, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
