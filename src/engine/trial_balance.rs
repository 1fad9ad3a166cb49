//! Trial balance aggregator
//!
//! Groups ledger postings by account and accumulates debit and credit sums
//! independently (never netted within a row). Totals are summed across rows
//! and checked for balance at exact cents.

use std::collections::BTreeMap;

use crate::models::{Money, Posting, TrialBalanceRow, TrialBalanceTotals};

/// The aggregated trial balance: one row per account plus grand totals
#[derive(Debug, Clone)]
pub struct TrialBalance {
    /// Rows ordered by statement classification, then account code
    pub rows: Vec<TrialBalanceRow>,
    /// Grand totals across all rows
    pub totals: TrialBalanceTotals,
}

/// Build a trial balance from a set of postings
///
/// Postings are grouped by account code; the first posting seen for a code
/// supplies the account name and classification. Period filtering is the
/// caller's concern.
pub fn build_trial_balance(postings: &[Posting]) -> TrialBalance {
    let mut accounts: BTreeMap<&str, TrialBalanceRow> = BTreeMap::new();

    for posting in postings {
        let row = accounts
            .entry(posting.account_code.as_str())
            .or_insert_with(|| TrialBalanceRow {
                code: posting.account_code.clone(),
                name: posting.account_name.clone(),
                kind: posting.account_kind,
                debit: Money::zero(),
                credit: Money::zero(),
            });
        row.debit += posting.debit;
        row.credit += posting.credit;
    }

    let mut rows: Vec<TrialBalanceRow> = accounts.into_values().collect();
    rows.sort_by(|a, b| {
        a.kind
            .sort_order()
            .cmp(&b.kind.sort_order())
            .then_with(|| a.code.cmp(&b.code))
    });

    let totals = TrialBalanceTotals {
        debit: rows.iter().map(|r| r.debit).sum(),
        credit: rows.iter().map(|r| r.credit).sum(),
    };

    TrialBalance { rows, totals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountKind;

    fn posting(code: &str, name: &str, kind: AccountKind, debit: i64, credit: i64) -> Posting {
        Posting {
            account_code: code.into(),
            account_name: name.into(),
            account_kind: kind,
            debit: Money::from_cents(debit),
            credit: Money::from_cents(credit),
            date: None,
        }
    }

    #[test]
    fn test_groups_by_account_and_sums_independently() {
        let postings = vec![
            posting("1000", "Bank", AccountKind::Asset, 50_000, 0),
            posting("1000", "Bank", AccountKind::Asset, 0, 20_000),
            posting("4000", "Sales", AccountKind::Revenue, 0, 30_000),
        ];
        let tb = build_trial_balance(&postings);

        assert_eq!(tb.rows.len(), 2);
        let bank = &tb.rows[0];
        assert_eq!(bank.code, "1000");
        // Debit and credit accumulate separately, no netting
        assert_eq!(bank.debit, Money::from_cents(50_000));
        assert_eq!(bank.credit, Money::from_cents(20_000));

        assert_eq!(tb.totals.debit, Money::from_cents(50_000));
        assert_eq!(tb.totals.credit, Money::from_cents(50_000));
        assert!(tb.totals.is_balanced());
    }

    #[test]
    fn test_rows_sorted_by_classification_then_code() {
        let postings = vec![
            posting("5000", "Rent", AccountKind::Expense, 10_000, 0),
            posting("4000", "Sales", AccountKind::Revenue, 0, 10_000),
            posting("2000", "Loan", AccountKind::Liability, 0, 0),
            posting("1100", "Debtors", AccountKind::Asset, 0, 0),
            posting("1000", "Bank", AccountKind::Asset, 0, 0),
        ];
        let tb = build_trial_balance(&postings);

        let codes: Vec<&str> = tb.rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["1000", "1100", "2000", "4000", "5000"]);
    }

    #[test]
    fn test_single_cent_mismatch_flips_balanced() {
        let mut postings = vec![
            posting("1000", "Bank", AccountKind::Asset, 100_000, 0),
            posting("4000", "Sales", AccountKind::Revenue, 0, 100_000),
        ];
        assert!(build_trial_balance(&postings).totals.is_balanced());

        // A posting out by more than a cent breaks the balance
        postings.push(posting("5000", "Rent", AccountKind::Expense, 5, 0));
        let tb = build_trial_balance(&postings);
        assert!(!tb.totals.is_balanced());
        assert_eq!(tb.totals.difference(), Money::from_cents(5));
    }

    #[test]
    fn test_empty_postings() {
        let tb = build_trial_balance(&[]);
        assert!(tb.rows.is_empty());
        assert!(tb.totals.is_balanced());
    }
}
