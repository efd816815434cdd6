//! Layout scaffolding: header, content area, status bar

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the frame into header, content, and status bar rows
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Draw the brand header with the current section title
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let section = match app.state.current_view {
        View::Listings => "Properties",
        View::ListingDetail => "Property Details",
        View::Apply => "Rental Application",
        View::Submitted => "Application Received",
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Choice Properties ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(section, Style::default().fg(Color::Cyan)),
    ]));
    frame.render_widget(header, area);
}

/// Draw the status bar: key hints on the left, the live toast on the right
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = get_view_hints(app);
    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::Gray))];

    if let Some(toast) = app.state.current_toast() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{}: {}", toast.title, toast.description),
            Style::default().fg(Color::Green),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Listings if app.state.search_active => " type to search  Enter/Esc:done".to_string(),
        View::Listings => {
            " j/k:nav  Enter:view  a:apply  /:search  l/c/b:filters  x:clear  f:featured  q:quit"
                .to_string()
        }
        View::ListingDetail => " a/Enter:apply  j/k:scroll  Esc:back".to_string(),
        View::Apply if app.is_submitting() => " submitting…  Esc:cancel".to_string(),
        View::Apply => {
            " Tab:next field  Space:toggle  Enter:continue  PgDn:back  Esc:cancel".to_string()
        }
        View::Submitted => " Enter:return home".to_string(),
    }
}
