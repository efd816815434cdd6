//! Application state definitions

use crate::catalog::{find_listing, Listing, ListingFilter};
use crate::state::wizard::ApplicationWizard;
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Listings,
    ListingDetail,
    Apply,
    Submitted,
}

/// Transient notification shown in the status area, fire-and-forget
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    shown_at: Instant,
}

impl Toast {
    const TTL: Duration = Duration::from_secs(4);

    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= Self::TTL
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Catalog
    pub listings: Vec<Listing>,
    pub filter: ListingFilter,
    /// Order featured listings first in the browse list
    pub featured_first: bool,
    /// Typing goes into the search box instead of shortcuts
    pub search_active: bool,

    // Selection
    pub selected_index: usize,
    pub selected_listing_id: Option<String>,
    pub scroll_offset: usize,

    // Wizard (mounted only while the Apply view is open)
    pub wizard: Option<ApplicationWizard>,
    /// Listing the application is for, if entered from a detail view
    pub applying_for: Option<String>,

    // Notifications
    pub toasts: Vec<Toast>,
}

impl AppState {
    /// Listings passing the current filter, featured first when configured
    pub fn visible_listings(&self) -> Vec<&Listing> {
        let mut listings = self.filter.apply(&self.listings);
        if self.featured_first {
            listings.sort_by(|a, b| b.featured.cmp(&a.featured));
        }
        listings
    }

    /// The listing currently highlighted in the browse list
    pub fn highlighted_listing(&self) -> Option<&Listing> {
        self.visible_listings().get(self.selected_index).copied()
    }

    /// The listing opened in the detail view
    pub fn selected_listing(&self) -> Option<&Listing> {
        let id = self.selected_listing_id.as_deref()?;
        find_listing(&self.listings, id)
    }

    /// The listing the open application is for, when it still exists. A miss
    /// degrades to the generic form.
    pub fn applying_for_listing(&self) -> Option<&Listing> {
        let id = self.applying_for.as_deref()?;
        find_listing(&self.listings, id)
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection after the visible set changes
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Clamp selection into the current visible range
    pub fn clamp_selection(&mut self) {
        let count = self.visible_listings().len();
        if count == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(count - 1);
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Queue a transient notification
    pub fn push_toast(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.toasts.push(Toast::new(title, description));
    }

    /// Drop expired notifications
    pub fn prune_toasts(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    /// The most recent live notification
    pub fn current_toast(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}
