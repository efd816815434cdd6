//! Shared input widgets for form rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by a bordered field plus its error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a bordered text field with its label, cursor, and inline error.
///
/// The error line renders below the field and only when the caller passes
/// one, so untouched fields stay quiet.
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(value.to_string(), text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .title(format!(" {label} "))
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    let field_area = Rect {
        height: area.height.min(3),
        ..area
    };
    frame.render_widget(content, field_area);

    if let Some(message) = error {
        if area.height >= FIELD_HEIGHT {
            let error_area = Rect {
                y: area.y + 3,
                height: 1,
                ..area
            };
            let error_line = Paragraph::new(Line::from(Span::styled(
                format!("  {message}"),
                Style::default().fg(Color::Red),
            )));
            frame.render_widget(error_line, error_area);
        }
    }
}

/// Draw a checkbox row: `[x] label`, with the error inline after the label
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    checked: bool,
    is_active: bool,
    error: Option<&str>,
) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(format!("{mark} "), style),
        Span::styled(label.to_string(), style),
    ];
    if let Some(message) = error {
        spans.push(Span::styled(
            format!("  {message}"),
            Style::default().fg(Color::Red),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw a full-width action button
pub fn draw_button(frame: &mut Frame, area: Rect, label: &str, is_enabled: bool) {
    let (border, text) = if is_enabled {
        (
            Style::default().fg(Color::Green),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let button = Paragraph::new(format!(" {label} "))
        .style(text)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(button, area);
}
