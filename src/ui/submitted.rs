//! Terminal confirmation screen after a successful submission

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Center a fixed-size card
    let card_width = 60u16.min(area.width);
    let card_height = 9u16.min(area.height);
    let card = Rect {
        x: area.x + (area.width.saturating_sub(card_width)) / 2,
        y: area.y + (area.height.saturating_sub(card_height)) / 2,
        width: card_width,
        height: card_height,
    };

    let applicant = app
        .state
        .wizard
        .as_ref()
        .map(|w| w.summary().full_name)
        .unwrap_or_default();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✔ Application Received!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
        Line::from(format!("Thank you for applying, {applicant}.")).centered(),
        Line::from("Our team will review your information and contact").centered(),
        Line::from("you within 24-48 hours.").centered(),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to return home",
            Style::default().fg(Color::Gray),
        ))
        .centered(),
    ];

    let dialog = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(dialog, card);
}
