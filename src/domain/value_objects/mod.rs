//! Value Objects for the inventory ledger

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Money value object
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: String,
}

impl Money {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
    pub fn usd(amount: Decimal) -> Self {
        Self::new(amount, "USD")
    }
    pub fn zero(currency: &str) -> Self {
        Self::new(Decimal::ZERO, currency)
    }
    pub fn amount(&self) -> Decimal {
        self.amount
    }
    pub fn currency(&self) -> &str {
        &self.currency
    }
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero("USD")
    }
}

/// Quantity value object
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Self {
        Self(value)
    }
    pub fn value(&self) -> u32 {
        self.0
    }
    pub fn add(&self, other: u32) -> Self {
        Self(self.0.saturating_add(other))
    }
    pub fn subtract(&self, other: u32) -> Option<Self> {
        if other > self.0 {
            None
        } else {
            Some(Self(self.0 - other))
        }
    }
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_sign() {
        assert!(Money::usd(Decimal::new(-100, 2)).is_negative());
        assert!(!Money::usd(Decimal::ZERO).is_negative());
        assert!(!Money::usd(Decimal::new(1999, 2)).is_negative());
    }

    #[test]
    fn test_quantity_subtract() {
        let q = Quantity::new(10);
        assert_eq!(q.subtract(4), Some(Quantity::new(6)));
        assert_eq!(q.subtract(10), Some(Quantity::new(0)));
        assert_eq!(q.subtract(11), None);
    }

    #[test]
    fn test_quantity_add_saturates() {
        let q = Quantity::new(u32::MAX);
        assert_eq!(q.add(1).value(), u32::MAX);
    }
}
