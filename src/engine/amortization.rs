//! Loan amortization
//!
//! Fixed-payment annuity schedules: payment calculation with an explicit
//! zero-rate branch, and period-by-period principal/interest splits. The
//! schedule is fully recomputable from the loan record; there is no hidden
//! state.

use chrono::Months;

use crate::error::{RigelError, RigelResult};
use crate::models::{AmortizationEntry, Loan, Money};

/// Validate a loan before any formula runs
///
/// A zero term would push the annuity formula into non-finite territory, so
/// it is rejected here rather than guarded downstream.
pub fn validate_loan(loan: &Loan) -> RigelResult<()> {
    if loan.term_months == 0 {
        return Err(RigelError::validation("loan term must be at least 1 month"));
    }
    if !loan.principal.is_positive() {
        return Err(RigelError::validation("loan principal must be positive"));
    }
    if loan.annual_rate_pct < 0.0 || !loan.annual_rate_pct.is_finite() {
        return Err(RigelError::validation(
            "annual interest rate must be non-negative",
        ));
    }
    Ok(())
}

/// Fixed monthly payment for a loan
///
/// Zero-rate loans divide the principal evenly over the term; otherwise the
/// standard annuity formula `P * r * (1+r)^n / ((1+r)^n - 1)` applies with
/// r the monthly rate.
pub fn monthly_payment(loan: &Loan) -> RigelResult<Money> {
    validate_loan(loan)?;

    if loan.annual_rate_pct == 0.0 {
        return Ok(loan.principal.div_round(loan.term_months as i64));
    }

    let principal = loan.principal.to_rands_f64();
    let r = monthly_rate(loan);
    let n = loan.term_months as f64;
    let factor = (1.0 + r).powf(n);
    let payment = principal * r * factor / (factor - 1.0);

    Ok(Money::from_rands_f64(payment))
}

/// Build the full amortization schedule for a loan
///
/// Each period charges interest on the opening balance, applies the
/// remainder of the fixed payment to principal, and advances the payment
/// date by one month. The final period settles the residual balance exactly,
/// so the closing balance is zero and principal payments sum to the
/// principal borrowed.
pub fn build_schedule(loan: &Loan) -> RigelResult<Vec<AmortizationEntry>> {
    let payment = monthly_payment(loan)?;
    let r = monthly_rate(loan);

    let mut entries = Vec::with_capacity(loan.term_months as usize);
    let mut balance = loan.principal;

    for period in 1..=loan.term_months {
        let interest_payment = balance.mul_rate(r);
        let mut principal_payment = payment - interest_payment;

        // Rounding drift never outruns the balance, and the final payment
        // settles whatever remains
        if principal_payment > balance || period == loan.term_months {
            principal_payment = balance;
        }

        balance -= principal_payment;

        let payment_date = loan
            .start_date
            .checked_add_months(Months::new(period - 1))
            .ok_or_else(|| RigelError::validation("payment date out of range"))?;

        entries.push(AmortizationEntry {
            payment_number: period,
            payment_date,
            principal_payment,
            interest_payment,
            total_payment: principal_payment + interest_payment,
            remaining_balance: balance,
        });
    }

    Ok(entries)
}

fn monthly_rate(loan: &Loan) -> f64 {
    loan.annual_rate_pct / 100.0 / 12.0
}
