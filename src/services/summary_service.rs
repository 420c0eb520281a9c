//! Totals, category breakdowns and savings metrics over a transaction snapshot.

use std::collections::HashMap;

use crate::errors::{LedgerError, LedgerResult};
use crate::ledger::{
    BudgetConfig, CategoryAggregate, FinancialSummary, SavingsRate, Transaction, TransactionKind,
};

use super::BudgetService;

/// Stateless summary helpers. Every function is a pure function of its arguments.
pub struct SummaryService;

impl SummaryService {
    /// Sums the amounts of every transaction of `kind`.
    pub fn total_by_kind(snapshot: &[Transaction], kind: TransactionKind) -> f64 {
        snapshot
            .iter()
            .filter(|txn| txn.kind == kind)
            .map(|txn| txn.amount)
            .sum()
    }

    /// Income minus expenses. Negative when spending exceeds income.
    pub fn balance(snapshot: &[Transaction]) -> f64 {
        Self::total_by_kind(snapshot, TransactionKind::Income)
            - Self::total_by_kind(snapshot, TransactionKind::Expense)
    }

    /// Groups transactions of `kind` by exact category name.
    ///
    /// Categories appear in the order they are first seen in `snapshot`.
    pub fn aggregate_by_category(
        snapshot: &[Transaction],
        kind: TransactionKind,
    ) -> Vec<CategoryAggregate> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<(&str, f64)> = Vec::new();
        for txn in snapshot.iter().filter(|txn| txn.kind == kind) {
            match index.get(txn.category.as_str()) {
                Some(&slot) => totals[slot].1 += txn.amount,
                None => {
                    index.insert(txn.category.as_str(), totals.len());
                    totals.push((txn.category.as_str(), txn.amount));
                }
            }
        }

        let grand_total: f64 = totals.iter().map(|(_, total)| total).sum();
        totals
            .into_iter()
            .map(|(category, total)| CategoryAggregate {
                category: category.to_string(),
                total,
                share: if grand_total > 0.0 {
                    total / grand_total * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }

    /// Balance as a percentage of income; `Undefined` without income.
    ///
    /// A defined rate is always finite: ratios beyond `f64` range saturate so
    /// they never serialize like `Undefined`.
    pub fn savings_rate(snapshot: &[Transaction]) -> SavingsRate {
        let income = Self::total_by_kind(snapshot, TransactionKind::Income);
        if income == 0.0 {
            return SavingsRate::Undefined;
        }
        let rate = Self::balance(snapshot) / income * 100.0;
        SavingsRate::Defined(rate.clamp(f64::MIN, f64::MAX))
    }

    /// Expense total spread evenly over `period_days`.
    pub fn daily_average_expense(snapshot: &[Transaction], period_days: i64) -> LedgerResult<f64> {
        if period_days <= 0 {
            return Err(LedgerError::validation(format!(
                "period must be at least one day, got {period_days}"
            )));
        }
        Ok(Self::total_by_kind(snapshot, TransactionKind::Expense) / period_days as f64)
    }

    /// Builds the dashboard record in one pass over the public helpers.
    pub fn summarize(
        snapshot: &[Transaction],
        budget: &BudgetConfig,
        period_days: i64,
    ) -> LedgerResult<FinancialSummary> {
        Ok(FinancialSummary {
            total_income: Self::total_by_kind(snapshot, TransactionKind::Income),
            total_expense: Self::total_by_kind(snapshot, TransactionKind::Expense),
            balance: Self::balance(snapshot),
            savings_rate: Self::savings_rate(snapshot),
            budget_usage: BudgetService::overall_budget_usage(snapshot, budget),
            daily_average_expense: Self::daily_average_expense(snapshot, period_days)?,
            income_by_category: Self::aggregate_by_category(snapshot, TransactionKind::Income),
            expense_by_category: Self::aggregate_by_category(snapshot, TransactionKind::Expense),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Ledger, TransactionDraft};
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, day).unwrap()
    }

    fn scenario_ledger() -> Ledger {
        let mut ledger = Ledger::new("Summary");
        ledger.add(TransactionDraft::income("Salary", 50000.0, date(1))).unwrap();
        ledger.add(TransactionDraft::expense("Travel", 2500.0, date(2))).unwrap();
        ledger.add(TransactionDraft::expense("Travel", 500.0, date(2))).unwrap();
        ledger
    }

    #[test]
    fn totals_and_balance_for_scenario() {
        let ledger = scenario_ledger();
        let snapshot = ledger.list();
        assert_eq!(SummaryService::total_by_kind(snapshot, TransactionKind::Expense), 3000.0);
        assert_eq!(SummaryService::total_by_kind(snapshot, TransactionKind::Income), 50000.0);
        assert_eq!(SummaryService::balance(snapshot), 47000.0);

        let expenses = SummaryService::aggregate_by_category(snapshot, TransactionKind::Expense);
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].category, "Travel");
        assert_eq!(expenses[0].total, 3000.0);
        assert_eq!(expenses[0].share, 100.0);
    }

    #[test]
    fn empty_snapshot_yields_zeroes() {
        assert_eq!(SummaryService::total_by_kind(&[], TransactionKind::Income), 0.0);
        assert_eq!(SummaryService::balance(&[]), 0.0);
        assert!(SummaryService::aggregate_by_category(&[], TransactionKind::Expense).is_empty());
        assert!(SummaryService::savings_rate(&[]).is_undefined());
    }

    #[test]
    fn grouping_is_case_sensitive_and_first_seen_ordered() {
        let mut ledger = Ledger::new("Order");
        ledger.add(TransactionDraft::expense("food", 1.0, date(1))).unwrap();
        ledger.add(TransactionDraft::expense("Rent", 2.0, date(1))).unwrap();
        ledger.add(TransactionDraft::expense("Food", 3.0, date(2))).unwrap();
        ledger.add(TransactionDraft::expense("food", 4.0, date(3))).unwrap();

        let names: Vec<_> =
            SummaryService::aggregate_by_category(ledger.list(), TransactionKind::Expense)
                .into_iter()
                .map(|agg| (agg.category, agg.total))
                .collect();
        assert_eq!(
            names,
            vec![
                ("food".to_string(), 5.0),
                ("Rent".to_string(), 2.0),
                ("Food".to_string(), 3.0),
            ]
        );
    }

    #[test]
    fn savings_rate_is_defined_with_income() {
        let ledger = scenario_ledger();
        assert_eq!(SummaryService::savings_rate(ledger.list()), SavingsRate::Defined(94.0));
    }

    #[test]
    fn savings_rate_without_income_is_undefined_not_zero() {
        let mut ledger = Ledger::new("NoIncome");
        ledger.add(TransactionDraft::expense("Food", 10.0, date(1))).unwrap();
        let rate = SummaryService::savings_rate(ledger.list());
        assert_eq!(rate, SavingsRate::Undefined);
        assert_eq!(rate.value(), None);
    }

    #[test]
    fn daily_average_rejects_non_positive_period() {
        let ledger = scenario_ledger();
        assert_eq!(SummaryService::daily_average_expense(ledger.list(), 30).unwrap(), 100.0);
        for days in [0, -1] {
            let err = SummaryService::daily_average_expense(ledger.list(), days)
                .expect_err("non-positive period");
            assert!(err.is_validation());
        }
    }
}
