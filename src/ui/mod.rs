//! UI module for rendering the TUI

mod layout;
mod listing_detail;
mod listings;
mod submitted;
mod widgets;
mod wizard;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, content_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Listings => listings::draw(frame, content_area, app),
        View::ListingDetail => listing_detail::draw(frame, content_area, app),
        View::Apply => wizard::draw(frame, content_area, app),
        View::Submitted => submitted::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
