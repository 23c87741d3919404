use serde::Deserialize;

use super::cart::Cart;

/// Fixed rates used by the pricing calculator.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PricingRates {
    pub delivery_fee: f64,
    pub tax_rate: f64,
}

impl Default for PricingRates {
    fn default() -> Self {
        Self { delivery_fee: 5.00, tax_rate: 0.08 }
    }
}

/// Derived cart totals. Values are unrounded; use [`round_cents`] for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub tax: f64,
    pub total: f64,
}

/// Prices a cart. Defined for every cart, including an empty one.
pub fn price(cart: &Cart, rates: &PricingRates) -> PriceBreakdown {
    let subtotal: f64 = cart.lines.iter().map(|line| line.line_total()).sum();
    let delivery_fee = if cart.is_empty() { 0.0 } else { rates.delivery_fee };
    let tax = subtotal * rates.tax_rate;
    PriceBreakdown {
        subtotal,
        delivery_fee,
        tax,
        total: subtotal + delivery_fee + tax,
    }
}

pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
