mod card_panel;
mod icons;
mod portfolio_panel;
mod stats_panel;

pub use portfolio_panel::chart_points;

use crate::core::config::EngineConfig;
use crate::core::game_state::GameState;
use crate::core::notify::{NotificationLevel, NotificationLog};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main UI drawing function
pub fn draw_ui(
    frame: &mut Frame,
    game_state: &GameState,
    config: &EngineConfig,
    notifications: &NotificationLog,
) {
    let size = frame.size();

    // Split vertically: stats, main content, notification line, footer
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Stat cards + level bar
            Constraint::Min(0),    // Card + portfolio
            Constraint::Length(3), // Latest notification
            Constraint::Length(3), // Footer
        ])
        .split(size);

    stats_panel::draw_stats_panel(frame, v_chunks[0], game_state);

    // Current card on the left, chart and portfolio on the right
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(v_chunks[1]);

    card_panel::draw_card_panel(frame, chunks[0], game_state, config);
    portfolio_panel::draw_portfolio_panel(frame, chunks[1], game_state);

    draw_notification(frame, v_chunks[2], notifications);
    draw_footer(frame, v_chunks[3]);
}

fn draw_notification(frame: &mut Frame, area: Rect, notifications: &NotificationLog) {
    let line = match notifications.latest() {
        Some(notification) => {
            let (prefix, color) = match notification.level {
                NotificationLevel::Success => ("✓", Color::Green),
                NotificationLevel::Error => ("✗", Color::Red),
                NotificationLevel::Info => ("ℹ", Color::Cyan),
            };
            Line::from(vec![
                Span::styled(
                    format!("{} ", prefix),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(notification.message.clone(), Style::default().fg(color)),
            ])
        }
        None => Line::from(Span::styled(
            "Make your first move",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let paragraph = Paragraph::new(vec![line])
        .block(Block::default().borders(Borders::ALL).title("Activity"));
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let controls = Line::from(vec![
        Span::styled("c", Style::default().fg(Color::Yellow)),
        Span::raw(" cash  "),
        Span::styled("l", Style::default().fg(Color::Yellow)),
        Span::raw(" loan  "),
        Span::styled("s", Style::default().fg(Color::Yellow)),
        Span::raw(" sell  "),
        Span::styled("k/Space", Style::default().fg(Color::Yellow)),
        Span::raw(" skip  "),
        Span::styled("+/-", Style::default().fg(Color::Yellow)),
        Span::raw(" quantity  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]);

    let footer = Paragraph::new(vec![controls])
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
