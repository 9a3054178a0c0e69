//! History table view
//!
//! Shows the full ledger ordered by date and time, with the running
//! balance in the last column. Mirrors the table view of the original
//! desktop app.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::tui::app::App;

/// Render the history table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" History ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.transactions.is_empty() {
        let text = Paragraph::new("No transactions. Press 'd' to record a deposit.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let symbol = &app.settings.currency_symbol;

    let widths = [
        Constraint::Length(16), // Type
        Constraint::Length(14), // Amount
        Constraint::Length(12), // Date
        Constraint::Length(10), // Time
        Constraint::Min(14),    // Balance
    ];

    let header = Row::new(vec![
        Cell::from("Type"),
        Cell::from("Amount"),
        Cell::from("Date"),
        Cell::from("Time"),
        Cell::from("Balance"),
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .height(1);

    let rows: Vec<Row> = app
        .transactions
        .iter()
        .map(|txn| {
            Row::new(vec![
                Cell::from(txn.kind.label()),
                Cell::from(txn.amount.format_with_symbol(symbol)),
                Cell::from(txn.date_str()),
                Cell::from(txn.time_str()),
                Cell::from(txn.balance.format_with_symbol(symbol)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(table, area);
}
