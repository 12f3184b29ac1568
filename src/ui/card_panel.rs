//! The current card: offer details, owned badge, quantity selector and the
//! action hints, dimmed when an action would be rejected.

use super::icons::glyph_for_offer;
use crate::cards::Offer;
use crate::core::config::EngineConfig;
use crate::core::game_state::GameState;
use crate::core::transactions::{can_afford_cash, can_afford_with_loan, purchase_cost};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_card_panel(
    frame: &mut Frame,
    area: Rect,
    game_state: &GameState,
    config: &EngineConfig,
) {
    let offer = &game_state.current_offer;
    let card_type = offer.card_type();
    let title = format!(" {} · {} ", card_type.name(), card_type.badge());

    let border_color = if card_type.is_mandatory() {
        Color::Red
    } else {
        Color::Cyan
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", glyph_for_offer(offer)),
                Style::default().fg(border_color),
            ),
            Span::styled(
                offer.display_name(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    lines.extend(offer_details(offer));

    let owned = game_state.owned_quantity_of_current();
    if owned > 0 {
        lines.push(Line::from(Span::styled(
            format!("Owned: {}", owned),
            Style::default().fg(Color::Magenta),
        )));
    }

    if let Offer::Stock(_) = offer {
        lines.push(Line::from(vec![
            Span::raw("Quantity: "),
            Span::styled(
                format!("[-] {} [+]", game_state.stock_quantity),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("  Total ${:.2}", purchase_cost(game_state, None)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(action_hints(game_state, config, owned));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(title),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn offer_details(offer: &Offer) -> Vec<Line<'static>> {
    match offer {
        Offer::Stock(stock) => {
            let change_color = if stock.percent_change >= 0.0 {
                Color::Green
            } else {
                Color::Red
            };
            vec![
                Line::from(vec![
                    Span::raw(format!("Price: ${:.2} ", stock.price)),
                    Span::styled(
                        format!("({:+.1}%)", stock.percent_change),
                        Style::default().fg(change_color),
                    ),
                ]),
                Line::from(format!("Dividend: ${:.2}/mo per share", stock.dividend)),
            ]
        }
        Offer::Asset(asset) => vec![
            Line::from(format!("Cost: ${:.2}", asset.cost)),
            Line::from(Span::styled(
                format!("Income: +${:.2}/mo", asset.income),
                Style::default().fg(Color::Green),
            )),
        ],
        Offer::Expense(expense) => vec![
            Line::from(format!("Cost: ${:.2}", expense.cost)),
            Line::from(Span::styled(
                format!("Expense: -${:.2}/mo", expense.monthly_expense),
                Style::default().fg(Color::Red),
            )),
        ],
    }
}

fn hint(key: &str, label: &str, enabled: bool) -> Vec<Span<'static>> {
    let style = if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    };
    vec![
        Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}  ", label), style),
    ]
}

fn action_hints(game_state: &GameState, config: &EngineConfig, owned: u32) -> Line<'static> {
    let card_type = game_state.current_card_type;
    let mut spans = Vec::new();
    spans.extend(hint("c", "Buy cash", can_afford_cash(game_state, None)));
    spans.extend(hint(
        "l",
        "Buy on credit",
        can_afford_with_loan(game_state, config, None),
    ));
    if !card_type.is_mandatory() {
        spans.extend(hint("s", "Sell", owned > 0));
        spans.extend(hint("k", "Skip", true));
    }
    Line::from(spans)
}
