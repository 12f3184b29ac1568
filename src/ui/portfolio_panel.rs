use super::icons::glyph_for_card_type;
use crate::core::game_state::GameState;
use crate::portfolio::{LedgerAction, LedgerEntry};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Sparkline},
    Frame,
};

/// Draws the balance chart above the portfolio ledger
pub fn draw_portfolio_panel(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Balance chart
            Constraint::Min(3),    // Ledger
        ])
        .split(area);

    draw_balance_chart(frame, chunks[0], game_state);
    draw_ledger(frame, chunks[1], game_state);
}

/// Scale balances into sparkline bars, lowest sample at zero.
pub fn chart_points(history: impl Iterator<Item = f64> + Clone) -> Vec<u64> {
    let min = history.clone().fold(f64::INFINITY, f64::min);
    let max = history.clone().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    history
        .map(|value| {
            if span > 0.0 {
                (((value - min) / span) * 100.0).round() as u64 + 1
            } else {
                1
            }
        })
        .collect()
}

fn draw_balance_chart(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let points = chart_points(game_state.balance_history.iter().copied());
    let trend_up = match (
        game_state.balance_history.front(),
        game_state.balance_history.back(),
    ) {
        (Some(first), Some(last)) => last >= first,
        _ => true,
    };

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Balance (last {}) ", points.len())),
        )
        .data(&points)
        .style(Style::default().fg(if trend_up { Color::Green } else { Color::Red }));

    frame.render_widget(sparkline, area);
}

fn ledger_line(entry: &LedgerEntry) -> Line<'static> {
    let (verb, color) = match entry.action {
        LedgerAction::Buy => ("Bought", Color::Cyan),
        LedgerAction::Sell => ("Sold", Color::Yellow),
    };
    let quantity = entry
        .quantity
        .map(|q| format!("{} × ", q))
        .unwrap_or_default();
    let flow_color = if entry.monthly_income >= 0.0 {
        Color::Green
    } else {
        Color::Red
    };

    let mut spans = vec![
        Span::raw(format!("{} ", glyph_for_card_type(entry.kind))),
        Span::styled(format!("{:<7}", verb), Style::default().fg(color)),
        Span::raw(format!("{}{} ", quantity, entry.name)),
        Span::styled(
            format!("${:.2}", entry.price),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("  {:+.2}/mo", entry.monthly_income),
            Style::default().fg(flow_color),
        ),
    ];
    if let Some(payment) = entry.loan_payment {
        spans.push(Span::styled(
            format!("  loan -{:.2}/mo", payment),
            Style::default().fg(Color::Magenta),
        ));
    }
    Line::from(spans)
}

fn draw_ledger(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let entries = game_state.ledger.entries();
    let visible = area.height.saturating_sub(2) as usize;

    // Newest first
    let items: Vec<ListItem> = entries
        .iter()
        .rev()
        .take(visible)
        .map(|entry| ListItem::new(ledger_line(entry)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Portfolio ({}) ", entries.len())),
    );

    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_points_span_range() {
        let points = chart_points([100.0, 150.0, 200.0].into_iter());
        assert_eq!(points, vec![1, 51, 101]);
    }

    #[test]
    fn test_flat_history() {
        let points = chart_points([5.0, 5.0].into_iter());
        assert_eq!(points, vec![1, 1]);
    }
}
