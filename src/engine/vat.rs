//! VAT estimator
//!
//! A simplified output-less-input VAT estimate from revenue and expense
//! aggregates. Not zero-rated/exempt aware; it is the local fallback when a
//! richer supply-by-supply computation is unavailable.

use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Result of a VAT estimate for a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatEstimate {
    /// Output VAT on revenue
    pub output_vat: Money,
    /// Input VAT on expenses
    pub input_vat: Money,
    /// Net VAT due: output less input (negative means a refund position)
    pub vat_due: Money,
}

/// Estimate VAT due from revenue and expense aggregates at a flat rate
pub fn estimate_vat(revenue: Money, expenses: Money, vat_rate: f64) -> VatEstimate {
    let output_vat = revenue.mul_rate(vat_rate);
    let input_vat = expenses.mul_rate(vat_rate);

    VatEstimate {
        output_vat,
        input_vat,
        vat_due: output_vat - input_vat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vat_due() {
        let estimate = estimate_vat(Money::from_rands(100_000), Money::from_rands(40_000), 0.15);

        assert_eq!(estimate.output_vat, Money::from_rands(15_000));
        assert_eq!(estimate.input_vat, Money::from_rands(6_000));
        assert_eq!(estimate.vat_due, Money::from_rands(9_000));
    }

    #[test]
    fn test_refund_position() {
        let estimate = estimate_vat(Money::from_rands(10_000), Money::from_rands(25_000), 0.15);
        assert!(estimate.vat_due.is_negative());
        assert_eq!(estimate.vat_due, Money::from_rands(-2_250));
    }

    #[test]
    fn test_zero_rate() {
        let estimate = estimate_vat(Money::from_rands(100_000), Money::from_rands(40_000), 0.0);
        assert_eq!(estimate.vat_due, Money::zero());
    }
}
