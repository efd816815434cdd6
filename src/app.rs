//! Application state and core logic

use crate::catalog::{FixtureCatalog, Listing, ListingSource};
use crate::config::TuiConfig;
use crate::state::{
    media_type_for, AppState, ApplicationWizard, FieldId, StepOutcome, View, WizardStep,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Scheduled completion of the mock submission delay. Cleared when the
    /// wizard is dismissed so an unmounted wizard is never mutated.
    pending_submit: Option<Instant>,
    /// File name being typed on the Documents step
    pub attachment_input: String,
}

impl App {
    /// Create a new App instance, loading config and the listing catalog
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_default();
        let source: Box<dyn ListingSource> = match &config.listings_path {
            Some(path) => Box::new(FixtureCatalog::with_path(path.clone())),
            None => Box::new(FixtureCatalog::new()),
        };
        let listings = source.listings()?;
        tracing::info!(count = listings.len(), "catalog loaded");
        Ok(Self::with_listings(listings, config))
    }

    /// Build an App over an already-loaded catalog
    pub fn with_listings(listings: Vec<Listing>, config: TuiConfig) -> Self {
        let mut state = AppState {
            listings,
            featured_first: config.featured_first.unwrap_or(false),
            ..Default::default()
        };
        state.current_view = View::Listings;
        Self {
            state,
            config,
            quit: false,
            pending_submit: None,
            attachment_input: String::new(),
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a mock submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.pending_submit.is_some()
    }

    /// Periodic housekeeping: expire toasts and complete a due submission
    pub fn tick(&mut self) {
        self.state.prune_toasts();

        if let Some(deadline) = self.pending_submit {
            if Instant::now() >= deadline {
                self.pending_submit = None;
                self.complete_submission();
            }
        }
    }

    fn complete_submission(&mut self) {
        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };
        if wizard.submit() {
            self.state.current_view = View::Submitted;
            self.state.push_toast(
                "Application Submitted",
                "We have received your application and will review it shortly.",
            );
        }
    }

    /// Mount a fresh wizard for the given listing (or the generic form)
    fn start_application(&mut self, listing_id: Option<String>) {
        self.state.applying_for = listing_id;
        self.state.wizard = Some(ApplicationWizard::new());
        self.attachment_input.clear();
        self.state.current_view = View::Apply;
    }

    /// Unmount the wizard, cancelling any in-flight mock submission
    fn dismiss_wizard(&mut self) {
        self.pending_submit = None;
        self.state.wizard = None;
        self.attachment_input.clear();
        self.state.current_view = if self.state.selected_listing().is_some() {
            View::ListingDetail
        } else {
            View::Listings
        };
        self.state.applying_for = None;
    }

    /// Leave the Submitted screen and return home with a clean slate
    fn return_home(&mut self) {
        self.state.wizard = None;
        self.state.applying_for = None;
        self.state.selected_listing_id = None;
        self.state.reset_selection();
        self.state.current_view = View::Listings;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Listings => self.handle_listings_key(key),
            View::ListingDetail => self.handle_detail_key(key),
            View::Apply => self.handle_apply_key(key),
            View::Submitted => self.handle_submitted_key(key),
        }
        Ok(())
    }

    fn handle_listings_key(&mut self, key: KeyEvent) {
        if self.state.search_active {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.state.search_active = false,
                KeyCode::Backspace => {
                    self.state.filter.search.pop();
                    self.state.clamp_selection();
                }
                KeyCode::Char(c) => {
                    self.state.filter.search.push(c);
                    self.state.clamp_selection();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                let count = self.state.visible_listings().len();
                self.state.move_selection_down(count);
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('/') => self.state.search_active = true,
            KeyCode::Char('l') => {
                self.state.filter.cycle_location(&self.state.listings);
                self.state.clamp_selection();
            }
            KeyCode::Char('c') => {
                self.state.filter.cycle_category(&self.state.listings);
                self.state.clamp_selection();
            }
            KeyCode::Char('b') => {
                self.state.filter.cycle_min_bedrooms();
                self.state.clamp_selection();
            }
            KeyCode::Char('x') => {
                self.state.filter.clear();
                self.state.reset_selection();
            }
            KeyCode::Char('f') => {
                self.state.featured_first = !self.state.featured_first;
                self.state.clamp_selection();
            }
            KeyCode::Char('a') => {
                let id = self.state.highlighted_listing().map(|l| l.id.clone());
                self.start_application(id);
            }
            KeyCode::Enter => {
                if let Some(id) = self.state.highlighted_listing().map(|l| l.id.clone()) {
                    self.state.selected_listing_id = Some(id);
                    self.state.scroll_offset = 0;
                    self.state.current_view = View::ListingDetail;
                }
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.selected_listing_id = None;
                self.state.current_view = View::Listings;
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Char('a') | KeyCode::Enter => {
                let id = self.state.selected_listing_id.clone();
                self.start_application(id);
            }
            _ => {}
        }
    }

    fn handle_apply_key(&mut self, key: KeyEvent) {
        // While the mock submission is in flight only dismissal is honored
        if self.is_submitting() {
            if key.code == KeyCode::Esc {
                self.dismiss_wizard();
            }
            return;
        }

        if key.code == KeyCode::Esc {
            self.dismiss_wizard();
            return;
        }

        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };

        let on_documents = wizard.step() == WizardStep::Documents;
        match key.code {
            KeyCode::Tab => wizard.next_field(),
            KeyCode::BackTab => wizard.prev_field(),
            KeyCode::Down if !on_documents => wizard.next_field(),
            KeyCode::Up if !on_documents => wizard.prev_field(),
            KeyCode::Down if on_documents => {
                let count = wizard.attachments.len();
                if count > 0 && wizard.selected_attachment < count - 1 {
                    wizard.selected_attachment += 1;
                }
            }
            KeyCode::Up if on_documents => {
                wizard.selected_attachment = wizard.selected_attachment.saturating_sub(1);
            }
            KeyCode::PageDown | KeyCode::Left => {
                wizard.back();
                self.attachment_input.clear();
            }
            KeyCode::Backspace => {
                if on_documents {
                    self.attachment_input.pop();
                } else {
                    wizard.backspace();
                }
            }
            KeyCode::Delete if on_documents => self.remove_selected_attachment(),
            KeyCode::Char(' ') if wizard.active_field().is_some_and(|f| f.is_flag()) => {
                wizard.toggle_active();
            }
            KeyCode::Char(c) => {
                if on_documents {
                    self.attachment_input.push(c);
                } else {
                    wizard.input_char(c);
                }
            }
            KeyCode::Enter => self.handle_apply_enter(),
            _ => {}
        }
    }

    /// Enter is contextual: stage a typed attachment on Documents, attempt
    /// submission on Review, otherwise attempt a forward transition.
    fn handle_apply_enter(&mut self) {
        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };
        match wizard.step() {
            WizardStep::Documents if !self.attachment_input.trim().is_empty() => {
                let name = self.attachment_input.trim().to_string();
                let media_type = media_type_for(&name);
                wizard.attachments.add(name.clone(), media_type);
                self.attachment_input.clear();
                self.state
                    .push_toast("Attachment Added", format!("{name} staged for upload"));
            }
            WizardStep::Review => {
                if wizard.can_submit() {
                    let delay = Duration::from_millis(self.config.submit_delay_ms());
                    self.pending_submit = Some(Instant::now() + delay);
                    tracing::debug!(?delay, "submission scheduled");
                } else {
                    wizard.form.mark_touched(&[FieldId::Consent]);
                }
            }
            _ => {
                if wizard.try_next() == StepOutcome::Refused {
                    tracing::debug!(step = wizard.step().index(), "step gate refused");
                }
            }
        }
    }

    fn remove_selected_attachment(&mut self) {
        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };
        let index = wizard.selected_attachment;
        if let Some(id) = wizard.attachments.get(index).map(|a| a.id) {
            wizard.attachments.remove(id);
            let count = wizard.attachments.len();
            if count > 0 {
                wizard.selected_attachment = index.min(count - 1);
            } else {
                wizard.selected_attachment = 0;
            }
        }
    }

    fn handle_submitted_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char('h')) {
            self.return_home();
        }
    }
}
