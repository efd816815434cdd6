//! Detail view for a single listing

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(listing) = app.state.selected_listing() else {
        let missing = Paragraph::new("Listing no longer available. Esc to go back.")
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(missing, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            listing.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            listing.address.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("${}/mo", listing.price),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "   {} bd / {} ba   {} sqft   {} · {}",
                listing.bedrooms, listing.bathrooms, listing.sqft, listing.category, listing.location
            )),
        ]),
        Line::from(""),
    ];

    for chunk in listing.description.split('\n') {
        lines.push(Line::from(chunk.to_string()));
    }
    lines.push(Line::from(""));

    if !listing.features.is_empty() {
        lines.push(Line::from(Span::styled(
            "Amenities",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for feature in &listing.features {
            lines.push(Line::from(format!("  • {feature}")));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!("{} photos available", listing.images.len()),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press a to apply for this property",
        Style::default().fg(Color::Green),
    )));

    let block = Block::default()
        .title(format!(" {} ", listing.id))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset as u16, 0))
        .block(block);
    frame.render_widget(detail, area);
}
