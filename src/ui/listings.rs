//! Browse view: filter summary and the listing list

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter bar
            Constraint::Min(0),    // Results
        ])
        .split(area);

    draw_filter_bar(frame, chunks[0], app);
    draw_results(frame, chunks[1], app);
}

fn draw_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let filter = &app.state.filter;
    let mut spans = vec![Span::styled("Search: ", Style::default().fg(Color::Gray))];

    let search_style = if app.state.search_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    spans.push(Span::styled(filter.search.clone(), search_style));
    if app.state.search_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let any = |v: &Option<String>| v.clone().unwrap_or_else(|| "Any".to_string());
    spans.push(Span::styled(
        format!(
            "   Location: {}   Type: {}   Beds: {}",
            any(&filter.location),
            any(&filter.category),
            filter
                .min_bedrooms
                .map(|n| format!("{n}+"))
                .unwrap_or_else(|| "Any".to_string()),
        ),
        Style::default().fg(Color::Gray),
    ));

    let block = Block::default()
        .title(" Filter Properties ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App) {
    let listings = app.state.visible_listings();

    let block = Block::default()
        .title(format!(" Showing {} properties ", listings.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if listings.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No properties found",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "  Try adjusting your filters to see more results (x clears them).",
                Style::default().fg(Color::Gray),
            )),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = listings
        .iter()
        .map(|listing| {
            let mut spans = vec![Span::raw(listing.summary_line())];
            if listing.featured {
                spans.push(Span::styled(
                    "  ★ featured",
                    Style::default().fg(Color::Yellow),
                ));
            }
            spans.push(Span::styled(
                format!("  ({})", listing.location),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(app.state.selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}
