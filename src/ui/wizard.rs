//! Application wizard view: one render function per step

use crate::app::App;
use crate::state::{ApplicationWizard, FieldId, WizardStep};
use crate::ui::widgets::{draw_button, draw_checkbox, draw_text_field, FIELD_HEIGHT};
use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(wizard) = app.state.wizard.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Context line
            Constraint::Length(2), // Progress
            Constraint::Min(0),    // Step body
        ])
        .split(area);

    draw_context(frame, chunks[0], app);
    draw_progress(frame, chunks[1], wizard);

    match wizard.step() {
        WizardStep::Personal | WizardStep::Employment => {
            draw_field_step(frame, chunks[2], wizard)
        }
        WizardStep::Documents => draw_documents(frame, chunks[2], app, wizard),
        WizardStep::Review => draw_review(frame, chunks[2], app, wizard),
    }
}

/// "Applying for" banner, degrading to generic copy when the listing is gone
fn draw_context(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.state.applying_for_listing() {
        Some(listing) => format!("Applying for: {} at {}", listing.title, listing.address),
        None => "Complete the form below to apply for a property.".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            line,
            Style::default().fg(Color::Gray),
        ))),
        area,
    );
}

fn draw_progress(frame: &mut Frame, area: Rect, wizard: &ApplicationWizard) {
    let current = wizard.step().index();
    let mut spans = Vec::new();
    for (i, title) in ["Personal", "Employment", "Documents", "Review"]
        .iter()
        .enumerate()
    {
        let n = i + 1;
        let style = if n == current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if n < current {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {n}.{title} "), style));
        if n < WizardStep::COUNT {
            spans.push(Span::styled("→", Style::default().fg(Color::DarkGray)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Generic renderer for the two pure-field steps
fn draw_field_step(frame: &mut Frame, area: Rect, wizard: &ApplicationWizard) {
    let fields = wizard.visible_fields();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| {
            if f.is_flag() {
                Constraint::Length(2)
            } else {
                Constraint::Length(FIELD_HEIGHT)
            }
        })
        .collect();
    constraints.push(Constraint::Min(0));

    let block = Block::default()
        .title(format!(" {} ", wizard.step().title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in fields.iter().enumerate() {
        let is_active = wizard.active_field() == Some(*field);
        if field.is_flag() {
            draw_checkbox(
                frame,
                rows[i],
                field.label(),
                wizard.form.value(*field).as_flag(),
                is_active,
                wizard.form.visible_error(*field),
            );
        } else {
            draw_text_field(
                frame,
                rows[i],
                field.label(),
                wizard.form.value(*field).as_text(),
                is_active,
                wizard.form.visible_error(*field),
            );
        }
    }
}

fn draw_documents(frame: &mut Frame, area: Rect, app: &App, wizard: &ApplicationWizard) {
    let block = Block::default()
        .title(format!(" {} ", WizardStep::Documents.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Hint
            Constraint::Length(FIELD_HEIGHT), // File name input
            Constraint::Min(0),               // Staged list
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Optional: stage proof of income, references, or ID (PDF or images suggested).",
            Style::default().fg(Color::Gray),
        )),
        rows[0],
    );

    draw_text_field(
        frame,
        rows[1],
        "File name (Enter to add)",
        &app.attachment_input,
        true,
        None,
    );

    let items: Vec<ListItem> = wizard
        .attachments
        .iter()
        .map(|a| {
            ListItem::new(Line::from(vec![
                Span::raw(a.display_name.clone()),
                Span::styled(
                    format!("  {}", a.media_type),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let title = format!(" Staged ({}) — ↑/↓ select, Del remove ", wizard.attachments.len());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().fg(Color::Cyan));

    let mut list_state = ListState::default();
    if !wizard.attachments.is_empty() {
        list_state.select(Some(wizard.selected_attachment));
    }
    frame.render_stateful_widget(list, rows[2], &mut list_state);
}

fn draw_review(frame: &mut Frame, area: Rect, app: &App, wizard: &ApplicationWizard) {
    let block = Block::default()
        .title(format!(" {} ", WizardStep::Review.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Summary
            Constraint::Length(2), // Consent
            Constraint::Length(3), // Submit button
        ])
        .split(inner);

    // Projected fresh on every frame, never a cached snapshot
    let summary = wizard.summary();
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<16}"), Style::default().fg(Color::Gray)),
            Span::raw(value),
        ])
    };
    // Pretty-print the move-in date when it parses; echo raw input otherwise
    let move_in = NaiveDate::parse_from_str(&summary.move_in_date, "%Y-%m-%d")
        .map(|d| d.format("%B %e, %Y").to_string())
        .unwrap_or_else(|_| summary.move_in_date.clone());
    let mut lines = vec![
        row("Name", summary.full_name),
        row("Email", summary.email),
        row("Phone", summary.phone),
        row("Move-in date", move_in),
        row("Annual income", format!("${}", summary.income)),
    ];
    if let Some(co_applicant) = summary.co_applicant {
        lines.push(row("Co-applicant", co_applicant));
    }
    lines.push(row(
        "Attachments",
        format!("{} staged", summary.attachment_count),
    ));
    frame.render_widget(Paragraph::new(lines), rows[0]);

    draw_checkbox(
        frame,
        rows[1],
        FieldId::Consent.label(),
        wizard.form.consent,
        wizard.active_field() == Some(FieldId::Consent),
        wizard.form.visible_error(FieldId::Consent),
    );

    let label = if app.is_submitting() {
        "Submitting application…"
    } else {
        "Submit Application (Enter)"
    };
    draw_button(frame, rows[2], label, wizard.can_submit() || app.is_submitting());
}
