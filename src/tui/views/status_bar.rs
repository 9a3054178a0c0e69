//! Status bar
//!
//! Bottom line of the screen: warnings/confirmations on the left,
//! the current balance and keybinding hints on the right.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let hints = "d:Deposit  w:Withdraw  h:History  g:Graph  q:Quit";
    let balance = format!(
        "Balance: {}",
        app.balance.format_with_symbol(&app.settings.currency_symbol)
    );

    let message = match &app.status_message {
        Some(msg) => {
            let style = if msg.starts_with("Warning") {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Green)
            };
            Span::styled(msg.clone(), style)
        }
        None => Span::styled(hints, Style::default().fg(Color::DarkGray)),
    };

    let line = Line::from(vec![
        message,
        Span::raw("  "),
        Span::styled(balance, Style::default().fg(Color::Cyan)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
