use serde::{Deserialize, Serialize};

use marketplace_core::{DomainError, DomainResult, ValueObject};

/// Amount in the smallest currency unit (whole FCFA on the storefront).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl ValueObject for Price {}

impl Price {
    /// A price accepted from seller input: strictly positive.
    pub fn new(amount: i64) -> DomainResult<Self> {
        if amount <= 0 {
            return Err(DomainError::invalid_price(format!(
                "price must be greater than zero (got {amount})"
            )));
        }
        Ok(Self(amount.unsigned_abs()))
    }

    /// Wraps a stored amount without validation (snapshot rows, tests).
    pub const fn from_units(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn units(self) -> u64 {
        self.0
    }
}

/// Validates an initial price and an optional sale price.
///
/// The sale price defaults to the initial price and must stay within
/// `1..=initial`.
pub(crate) fn price_pair(initial: i64, sale: Option<i64>) -> DomainResult<(Price, Price)> {
    let initial = Price::new(initial)?;
    let sale = match sale {
        None => initial,
        Some(amount) => {
            let sale = Price::new(amount).map_err(|_| {
                DomainError::invalid_price(format!(
                    "sale price must be greater than zero (got {amount})"
                ))
            })?;
            if sale > initial {
                return Err(DomainError::invalid_price(format!(
                    "sale price {sale} exceeds initial price {initial}"
                )));
            }
            sale
        }
    };
    Ok((initial, sale))
}

/// French grouping: `15000` → `15 000`, separated by U+202F (narrow no-break
/// space) as browsers render `fr-FR` numbers.
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let digits = self.0.to_string();
        let len = digits.len();
        for (i, d) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                f.write_str("\u{202f}")?;
            }
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_negative_amounts() {
        assert!(matches!(Price::new(0), Err(DomainError::InvalidPrice(_))));
        assert!(matches!(Price::new(-5), Err(DomainError::InvalidPrice(_))));
        assert_eq!(Price::new(7000).unwrap().units(), 7000);
    }

    #[test]
    fn sale_price_defaults_to_initial() {
        let (initial, sale) = price_pair(10_000, None).unwrap();
        assert_eq!(initial, sale);
    }

    #[test]
    fn sale_price_must_stay_within_initial() {
        assert!(price_pair(10_000, Some(10_000)).is_ok());
        assert!(matches!(price_pair(10_000, Some(10_001)), Err(DomainError::InvalidPrice(_))));
        assert!(matches!(price_pair(10_000, Some(0)), Err(DomainError::InvalidPrice(_))));
        assert!(matches!(price_pair(0, Some(5)), Err(DomainError::InvalidPrice(_))));
    }

    #[test]
    fn display_groups_thousands_french_style() {
        assert_eq!(Price::from_units(0).to_string(), "0");
        assert_eq!(Price::from_units(950).to_string(), "950");
        assert_eq!(Price::from_units(15000).to_string(), "15\u{202f}000");
        assert_eq!(Price::from_units(1234567).to_string(), "1\u{202f}234\u{202f}567");
    }
}
