use crate::core::error::TransactionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated ownership of one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub quantity: u32,
    /// Quantity-weighted average acquisition price
    pub avg_price: f64,
    /// Monthly income these units currently contribute
    pub total_yield: f64,
}

/// What a sale removed from the registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disposal {
    pub quantity: u32,
    pub released_yield: f64,
    pub avg_price: f64,
    /// True when the sale emptied the position and the entry was removed
    pub closed: bool,
}

/// Per-id holdings. Entries exist only while quantity > 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoldingsRegistry {
    entries: BTreeMap<String, Holding>,
}

impl HoldingsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Holding> {
        self.entries.get(id)
    }

    /// Units owned of `id`, 0 when there is no entry.
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.entries.get(id).map_or(0, |h| h.quantity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Holding)> {
        self.entries.iter().map(|(id, h)| (id.as_str(), h))
    }

    /// Sum of the monthly yield of every position.
    pub fn total_yield(&self) -> f64 {
        self.entries.values().map(|h| h.total_yield).sum()
    }

    /// Record a purchase of `quantity` units at `unit_price`, each yielding
    /// `unit_yield` per month.
    pub fn apply_purchase(&mut self, id: &str, quantity: u32, unit_price: f64, unit_yield: f64) {
        if quantity == 0 {
            return;
        }
        let added_yield = quantity as f64 * unit_yield;
        match self.entries.get_mut(id) {
            Some(holding) => {
                let old_qty = holding.quantity as f64;
                let new_qty = holding.quantity + quantity;
                holding.avg_price = (holding.avg_price * old_qty + unit_price * quantity as f64)
                    / new_qty as f64;
                holding.quantity = new_qty;
                holding.total_yield += added_yield;
            }
            None => {
                self.entries.insert(
                    id.to_string(),
                    Holding {
                        quantity,
                        avg_price: unit_price,
                        total_yield: added_yield,
                    },
                );
            }
        }
    }

    /// Remove `quantity` units of `id`. With `unit_yield` the position's
    /// yield drops by `quantity × unit_yield` (floored at 0); without it the
    /// yield is released proportionally. An emptied position is removed
    /// entirely.
    pub fn apply_sale(
        &mut self,
        id: &str,
        quantity: u32,
        unit_yield: Option<f64>,
    ) -> Result<Disposal, TransactionError> {
        if quantity == 0 {
            return Err(TransactionError::InvalidQuantity);
        }
        let owned = self.quantity_of(id);
        if owned < quantity {
            return Err(TransactionError::InsufficientHoldings {
                requested: quantity,
                owned,
            });
        }

        let holding = match self.entries.get_mut(id) {
            Some(h) => h,
            None => {
                return Err(TransactionError::InsufficientHoldings {
                    requested: quantity,
                    owned: 0,
                })
            }
        };
        let avg_price = holding.avg_price;

        let released_yield = match unit_yield {
            Some(unit) => (unit * quantity as f64).min(holding.total_yield).max(0.0),
            None => holding.total_yield * quantity as f64 / holding.quantity as f64,
        };

        if holding.quantity == quantity {
            self.entries.remove(id);
            return Ok(Disposal {
                quantity,
                released_yield,
                avg_price,
                closed: true,
            });
        }

        holding.quantity -= quantity;
        holding.total_yield = (holding.total_yield - released_yield).max(0.0);
        Ok(Disposal {
            quantity,
            released_yield,
            avg_price,
            closed: false,
        })
    }
}
