use crate::core::game_state::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the four stat cards and the level progress bar
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Stat cards
            Constraint::Length(3), // Level progress
        ])
        .split(area);

    draw_stat_cards(frame, chunks[0], game_state);
    draw_progress(frame, chunks[1], game_state);
}

fn draw_stat_cards(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let cash_flow = game_state.cash_flow();
    let cash_flow_color = if cash_flow >= 0.0 {
        Color::Green
    } else {
        Color::Red
    };

    draw_stat_card(
        frame,
        cards[0],
        "Balance",
        format!("${:.2}", game_state.balance),
        Color::Cyan,
    );
    draw_stat_card(
        frame,
        cards[1],
        "Monthly Income",
        format!("${:.2}", game_state.monthly_income),
        Color::Green,
    );
    draw_stat_card(
        frame,
        cards[2],
        "Monthly Expenses",
        format!("${:.2}", game_state.monthly_expenses),
        Color::Red,
    );
    draw_stat_card(
        frame,
        cards[3],
        "Cash Flow",
        format!("{:+.2}/mo", cash_flow),
        cash_flow_color,
    );
}

fn draw_stat_card(frame: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let text = vec![Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];

    let card = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .alignment(Alignment::Center);

    frame.render_widget(card, area);
}

/// Draws the level and XP bar
fn draw_progress(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let progress = &game_state.progress;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Level {}", progress.level)),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .ratio(progress.fraction().clamp(0.0, 1.0))
        .label(format!(
            "XP: {}/{}",
            progress.experience,
            progress.xp_needed()
        ));

    frame.render_widget(gauge, area);
}
