use super::templates::{ASSET_TEMPLATES, EXPENSE_TEMPLATES, STOCK_TEMPLATES};
use super::types::{AssetOffer, CardType, ExpenseOffer, Offer, StockOffer};
use crate::core::constants::{
    PROPERTY_MIN_COST, PROPERTY_MIN_MONTHLY, PROPERTY_VARIANCE_SPAN, STOCK_CHANGE_SPAN_PERCENT,
    STOCK_MIN_DIVIDEND, STOCK_MIN_PRICE,
};
use rand::Rng;

/// Draw a fresh offer of the given type from the catalog.
pub fn generate_offer(card_type: CardType, rng: &mut impl Rng) -> Offer {
    let offer = match card_type {
        CardType::Stock => Offer::Stock(generate_stock(rng)),
        CardType::Asset => Offer::Asset(generate_asset(rng)),
        CardType::Expense => Offer::Expense(generate_expense(rng)),
    };
    tracing::debug!(
        card = card_type.name(),
        name = offer.name(),
        price = offer.unit_price(),
        "offer drawn"
    );
    offer
}

pub fn generate_stock(rng: &mut impl Rng) -> StockOffer {
    let template = &STOCK_TEMPLATES[rng.gen_range(0..STOCK_TEMPLATES.len())];
    let change_percent = (rng.gen::<f64>() - 0.5) * STOCK_CHANGE_SPAN_PERCENT;
    let factor = 1.0 + change_percent / 100.0;

    let price = (template.base_price * factor).max(STOCK_MIN_PRICE);
    let dividend = (template.base_dividend * factor).max(STOCK_MIN_DIVIDEND);

    StockOffer {
        id: template.id.to_string(),
        name: template.name.to_string(),
        symbol: template.symbol.to_string(),
        price: round_cents(price),
        percent_change: change_percent,
        dividend: round_cents(dividend),
    }
}

pub fn generate_asset(rng: &mut impl Rng) -> AssetOffer {
    let template = &ASSET_TEMPLATES[rng.gen_range(0..ASSET_TEMPLATES.len())];
    let (cost, income) = apply_property_variance(template.base_cost, template.base_income, rng);

    AssetOffer {
        id: template.id.to_string(),
        name: template.name.to_string(),
        icon: template.icon.to_string(),
        cost,
        income,
    }
}

pub fn generate_expense(rng: &mut impl Rng) -> ExpenseOffer {
    let template = &EXPENSE_TEMPLATES[rng.gen_range(0..EXPENSE_TEMPLATES.len())];
    let (cost, monthly_expense) =
        apply_property_variance(template.base_cost, template.base_expense, rng);

    ExpenseOffer {
        id: template.id.to_string(),
        name: template.name.to_string(),
        icon: template.icon.to_string(),
        cost,
        monthly_expense,
    }
}

/// One variance draw shared by cost and the monthly figure, so a cheaper
/// property also yields (or costs) proportionally less.
fn apply_property_variance(base_cost: f64, base_monthly: f64, rng: &mut impl Rng) -> (f64, f64) {
    let variance = (rng.gen::<f64>() - 0.5) * PROPERTY_VARIANCE_SPAN;
    let cost = (base_cost * (1.0 + variance)).max(PROPERTY_MIN_COST);
    let monthly = (base_monthly * (1.0 + variance)).max(PROPERTY_MIN_MONTHLY);
    (round_cents(cost), round_cents(monthly))
}

/// Round to two decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::templates::{find_asset, find_stock};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn is_cents(value: f64) -> bool {
        ((value * 100.0).round() - value * 100.0).abs() < 1e-6
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(1.005_1), 1.01);
        assert_eq!(round_cents(149.994), 149.99);
        assert_eq!(round_cents(10.0), 10.0);
    }

    #[test]
    fn test_generate_offer_matches_requested_type() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for card_type in [CardType::Stock, CardType::Asset, CardType::Expense] {
            assert_eq!(generate_offer(card_type, &mut rng).card_type(), card_type);
        }
    }

    #[test]
    fn test_stock_within_ten_percent_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            let stock = generate_stock(&mut rng);
            let template = find_stock(&stock.id).unwrap();
            assert!(stock.percent_change >= -10.0 && stock.percent_change < 10.0);
            assert!(stock.price >= template.base_price * 0.9 - 0.01);
            assert!(stock.price <= template.base_price * 1.1 + 0.01);
            assert!(stock.price >= STOCK_MIN_PRICE);
            assert!(stock.dividend >= STOCK_MIN_DIVIDEND);
            assert!(is_cents(stock.price));
            assert!(is_cents(stock.dividend));
        }
    }

    #[test]
    fn test_asset_within_fifteen_percent_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            let asset = generate_asset(&mut rng);
            let template = find_asset(&asset.id).unwrap();
            assert!(asset.cost >= template.base_cost * 0.85 - 0.01);
            assert!(asset.cost <= template.base_cost * 1.15 + 0.01);
            assert!(asset.income >= template.base_income * 0.85 - 0.01);
            assert!(asset.income <= template.base_income * 1.15 + 0.01);
            assert!(is_cents(asset.cost));
        }
    }

    #[test]
    fn test_expense_respects_floors() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            let expense = generate_expense(&mut rng);
            assert!(expense.cost >= PROPERTY_MIN_COST);
            assert!(expense.monthly_expense >= PROPERTY_MIN_MONTHLY);
        }
    }

    #[test]
    fn test_same_seed_same_offer() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for card_type in [CardType::Stock, CardType::Asset, CardType::Expense] {
            assert_eq!(
                generate_offer(card_type, &mut a),
                generate_offer(card_type, &mut b)
            );
        }
    }

    #[test]
    fn test_every_stock_template_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(generate_stock(&mut rng).id);
        }
        assert_eq!(seen.len(), STOCK_TEMPLATES.len());
    }
}
