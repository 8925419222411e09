//! Money arithmetic for cart and order totals.
//!
//! The backend has a single implicit currency and serializes every amount as
//! a JSON number, so money is a bare [`Decimal`] rather than an
//! amount-plus-currency pair. Totals must be computed in `Decimal`; float
//! arithmetic on prices is not acceptable.

use rust_decimal::Decimal;

/// A monetary amount in the store's currency.
pub type Money = Decimal;

/// Line total for a quantity of items at a unit price.
#[must_use]
pub fn line_total(unit_price: Money, quantity: i32) -> Money {
    unit_price * Money::from(quantity)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn line_total_keeps_decimal_precision() {
        let price = Money::from_str("19.99").unwrap();
        assert_eq!(line_total(price, 3), Money::from_str("59.97").unwrap());
    }

    #[test]
    fn zero_quantity_is_free() {
        let price = Money::from_str("4.50").unwrap();
        assert_eq!(line_total(price, 0), Money::ZERO);
    }
}
