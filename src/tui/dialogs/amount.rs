//! Amount entry dialog
//!
//! A centered modal asking for a decimal amount: the opening balance on
//! first run, or a deposit/withdrawal amount. Enter submits, Esc declines.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::MovementKind;
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect;

/// Render the active amount dialog
pub fn render(frame: &mut Frame, app: &App) {
    let (title, prompt) = match app.active_dialog {
        ActiveDialog::OpeningBalance => (" Opening balance ", "Enter the starting balance:"),
        ActiveDialog::Amount(MovementKind::Deposit) => (" Deposit ", "Enter deposit amount:"),
        ActiveDialog::Amount(MovementKind::Withdrawal) => {
            (" Withdrawal ", "Enter withdrawal amount:")
        }
        ActiveDialog::None => return,
    };

    let area = centered_rect(44, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(prompt).style(Style::default().fg(Color::White)),
        chunks[0],
    );
    frame.render_widget(&app.amount_input, chunks[1]);
    frame.render_widget(
        Paragraph::new("Enter: confirm   Esc: cancel")
            .style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}
