//! Terminal glyphs for card icons.

use crate::cards::{CardType, Offer};

/// Map an offer's icon name to a glyph that renders in most terminals.
pub fn glyph_for_icon(icon: &str) -> &'static str {
    match icon {
        "Home" => "⌂",
        "Store" => "▣",
        "Car" => "◒",
        "UtensilsCrossed" => "✕",
        "Ship" => "⛵",
        "Plane" => "✈",
        _ => "•",
    }
}

pub fn glyph_for_offer(offer: &Offer) -> &'static str {
    match offer {
        Offer::Stock(_) => "▲",
        Offer::Asset(asset) => glyph_for_icon(&asset.icon),
        Offer::Expense(expense) => glyph_for_icon(&expense.icon),
    }
}

pub fn glyph_for_card_type(card_type: CardType) -> &'static str {
    match card_type {
        CardType::Stock => "▲",
        CardType::Asset => "⌂",
        CardType::Expense => "⚠",
    }
}
