use crate::ui::app::App;
use crate::ui::courses::render_courses;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::roster_dialog::render_roster_dialog;
use crate::ui::theme::STATUS_ERROR;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let state = app.dashboard();
    frame.render_widget(Header::new().widget(state), header);
    render_courses(frame, body, state);
    frame.render_widget(Footer::new().widget(footer, state.modal_open()), footer);

    if let Some(error) = app.last_command_error() {
        let last_line = Rect {
            x: body.x,
            y: body.y + body.height.saturating_sub(1),
            width: body.width,
            height: 1.min(body.height),
        };
        let widget =
            Paragraph::new(error.to_string()).style(Style::default().fg(STATUS_ERROR));
        frame.render_widget(widget, last_line);
    }

    render_roster_dialog(frame, state);
}
