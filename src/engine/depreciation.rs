//! Fixed-asset depreciation
//!
//! Straight-line and declining-balance monthly schedules. Straight-line
//! writes (cost - residual) off evenly with the final period absorbing
//! rounding; declining balance applies a fixed annual percentage to the
//! opening book value, never depreciating below the residual.

use chrono::Months;

use crate::error::{RigelError, RigelResult};
use crate::models::{Asset, DepreciationEntry, DepreciationMethod, Money};

/// Validate an asset before building a schedule
pub fn validate_asset(asset: &Asset) -> RigelResult<()> {
    if asset.useful_life_months == 0 {
        return Err(RigelError::validation(
            "asset useful life must be at least 1 month",
        ));
    }
    if !asset.cost.is_positive() {
        return Err(RigelError::validation("asset cost must be positive"));
    }
    if asset.residual_value.is_negative() {
        return Err(RigelError::validation(
            "residual value must not be negative",
        ));
    }
    if asset.residual_value > asset.cost {
        return Err(RigelError::validation("residual value exceeds cost"));
    }
    if let DepreciationMethod::DecliningBalance { rate_pct } = asset.method {
        if rate_pct < 0.0 || !rate_pct.is_finite() {
            return Err(RigelError::validation(
                "declining-balance rate must be non-negative",
            ));
        }
    }
    Ok(())
}

/// Build the monthly depreciation schedule for an asset
pub fn build_schedule(asset: &Asset) -> RigelResult<Vec<DepreciationEntry>> {
    validate_asset(asset)?;

    let life = asset.useful_life_months;
    let depreciable = asset.cost - asset.residual_value;
    let straight_line_monthly = depreciable.div_round(life as i64);

    let mut entries = Vec::with_capacity(life as usize);
    let mut accumulated = Money::zero();
    let mut book_value = asset.cost;

    for period in 1..=life {
        let mut depreciation = match asset.method {
            DepreciationMethod::StraightLine => {
                if period == life {
                    // Final period absorbs rounding so the book value lands
                    // exactly on the residual
                    depreciable - accumulated
                } else {
                    straight_line_monthly
                }
            }
            DepreciationMethod::DecliningBalance { rate_pct } => {
                book_value.mul_rate(rate_pct / 100.0 / 12.0)
            }
        };

        // Never depreciate below the residual value
        let floor = book_value - asset.residual_value;
        if depreciation > floor {
            depreciation = floor;
        }

        accumulated += depreciation;
        book_value -= depreciation;

        let period_date = asset
            .start_date
            .checked_add_months(Months::new(period - 1))
            .ok_or_else(|| RigelError::validation("period date out of range"))?;

        entries.push(DepreciationEntry {
            period,
            period_date,
            depreciation,
            accumulated,
            closing_book_value: book_value,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn asset(cost: i64, residual: i64, life: u32, method: DepreciationMethod) -> Asset {
        Asset {
            description: "Delivery vehicle".into(),
            cost: Money::from_rands(cost),
            residual_value: Money::from_rands(residual),
            useful_life_months: life,
            method,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_straight_line_even_write_off() {
        let schedule =
            build_schedule(&asset(120_000, 0, 12, DepreciationMethod::StraightLine)).unwrap();

        assert_eq!(schedule.len(), 12);
        assert!(schedule
            .iter()
            .all(|e| e.depreciation == Money::from_rands(10_000)));
        assert_eq!(schedule.last().unwrap().closing_book_value, Money::zero());
    }

    #[test]
    fn test_straight_line_lands_on_residual() {
        // 100,000 - 10,000 over 7 months does not divide evenly
        let schedule =
            build_schedule(&asset(100_000, 10_000, 7, DepreciationMethod::StraightLine)).unwrap();

        assert_eq!(
            schedule.last().unwrap().closing_book_value,
            Money::from_rands(10_000)
        );
        let total: Money = schedule.iter().map(|e| e.depreciation).sum();
        assert_eq!(total, Money::from_rands(90_000));
    }

    #[test]
    fn test_declining_balance_first_period() {
        // 120,000 at 20% p.a. -> first month 120,000 * 0.2 / 12 = 2,000
        let schedule = build_schedule(&asset(
            120_000,
            0,
            24,
            DepreciationMethod::DecliningBalance { rate_pct: 20.0 },
        ))
        .unwrap();

        assert_eq!(schedule[0].depreciation, Money::from_rands(2_000));
        // Charge declines with the book value
        assert!(schedule[1].depreciation < schedule[0].depreciation);
    }

    #[test]
    fn test_declining_balance_floors_at_residual() {
        let schedule = build_schedule(&asset(
            50_000,
            45_000,
            60,
            DepreciationMethod::DecliningBalance { rate_pct: 40.0 },
        ))
        .unwrap();

        assert!(schedule
            .iter()
            .all(|e| e.closing_book_value >= Money::from_rands(45_000)));
        assert_eq!(
            schedule.last().unwrap().closing_book_value,
            Money::from_rands(45_000)
        );
    }

    #[test]
    fn test_zero_life_rejected() {
        let err =
            build_schedule(&asset(100_000, 0, 0, DepreciationMethod::StraightLine)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_residual_above_cost_rejected() {
        assert!(
            build_schedule(&asset(10_000, 20_000, 12, DepreciationMethod::StraightLine)).is_err()
        );
    }
}
