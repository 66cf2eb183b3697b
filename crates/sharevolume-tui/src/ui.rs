use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::surface::StatusKind;

/// Shown in place of a field that hasn't been rendered yet.
const BLANK: &str = "—";

/// Renders the user interface widgets.
pub fn render(app: &mut App, frame: &mut Frame) {
    let vertical = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ]);
    let [header, figures, form, status, help] = vertical.areas(frame.area());

    header_bar(app, frame, header);
    figures_panel(app, frame, figures);
    cik_form(app, frame, form);
    status_line(app, frame, status);

    let hint = if app.form.focused {
        "<Enter> look up  <Esc> leave input  <Ctrl-C> quit"
    } else {
        "</> or <Tab> edit CIK  <Enter> look up  <q> quit"
    };
    frame.render_widget(Paragraph::new(hint).dark_gray(), help);
}

fn header_bar(app: &App, frame: &mut Frame, area: Rect) {
    let [title, location] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(app.display.title.as_str())
            .bold()
            .block(Block::bordered().border_type(BorderType::Rounded)),
        title,
    );
    frame.render_widget(
        Paragraph::new(app.location.command())
            .right_aligned()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title("Location"),
            ),
        location,
    );
}

fn figures_panel(app: &App, frame: &mut Frame, area: Rect) {
    let display = &app.display;
    let field = |val: &Option<String>| val.as_deref().unwrap_or(BLANK).to_string();

    let text = Text::from(vec![
        Line::from(vec![
            Span::raw("Entity        "),
            Span::raw(field(&display.entity_name)).bold(),
        ]),
        Line::default(),
        Line::from(vec![
            Span::raw("Max shares    "),
            Span::raw(field(&display.max_val)).green().bold(),
            Span::raw("   FY "),
            Span::raw(field(&display.max_fy)),
        ]),
        Line::from(vec![
            Span::raw("Min shares    "),
            Span::raw(field(&display.min_val)).red().bold(),
            Span::raw("   FY "),
            Span::raw(field(&display.min_fy)),
        ]),
    ]);

    frame.render_widget(
        Paragraph::new(text).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title("Common stock shares outstanding"),
        ),
        area,
    );
}

fn cik_form(app: &App, frame: &mut Frame, area: Rect) {
    let style = if app.form.focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    frame.render_widget(
        Paragraph::new(app.form.input.as_str()).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(style)
                .title("CIK (10 digits)"),
        ),
        area,
    );

    if app.form.focused {
        let typed = u16::try_from(app.form.input.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(typed);
        frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn status_line(app: &App, frame: &mut Frame, area: Rect) {
    let color = match app.status.kind {
        StatusKind::Info => Color::Cyan,
        StatusKind::Warn => Color::Yellow,
        StatusKind::Error => Color::Red,
    };
    frame.render_widget(
        Paragraph::new(app.status.message.as_str()).style(Style::default().fg(color)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use ratatui::{backend::TestBackend, Terminal};
    use sharevolume_spider::format::Locale;

    #[test]
    fn cursor_stays_inside_the_input() {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let mut app = App::new(Location::default(), Locale::EnUs);
        app.focus_input();

        app.form.input = "0000875045".to_string();
        terminal.draw(|frame| render(&mut app, frame)).unwrap();
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(11, 16));

        app.form.input = "9".repeat(70_000);
        terminal.draw(|frame| render(&mut app, frame)).unwrap();
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(78, 16));
    }
}
