//! TUI views
//!
//! The history table, the balance chart, the view tabs and the status bar.

pub mod chart;
pub mod history;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_view {
        ActiveView::History => history::render(frame, app, layout.main),
        ActiveView::Chart => chart::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        dialogs::amount::render(frame, app);
    }
}

/// Render the view switcher tabs
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let tab = |label: &str, active: bool| {
        let style = if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!(" {} ", label), style)
    };

    let line = Line::from(vec![
        tab("[1] History", app.active_view == ActiveView::History),
        tab("[2] Graph", app.active_view == ActiveView::Chart),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
