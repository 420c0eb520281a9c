//! Provides budget comparison helpers across a transaction snapshot.

use crate::ledger::{
    BudgetConfig, BudgetStatus, OverallBudgetUsage, SavingsGoalProgress, Transaction,
    TransactionKind,
};

use super::SummaryService;

/// Stateless budgeting utilities that operate over ledger snapshots.
pub struct BudgetService;

impl BudgetService {
    /// Expense spending in `category` against its configured limit.
    ///
    /// Unconfigured categories are measured against a limit of `0`.
    pub fn budget_status(
        snapshot: &[Transaction],
        budget: &BudgetConfig,
        category: &str,
    ) -> BudgetStatus {
        let spent = Self::spent_in(snapshot, category);
        BudgetStatus::new(category, spent, budget.limit_for(category))
    }

    /// Statuses for every configured category, in configuration order.
    pub fn category_budget_statuses(
        snapshot: &[Transaction],
        budget: &BudgetConfig,
    ) -> Vec<BudgetStatus> {
        budget
            .categories
            .iter()
            .map(|entry| {
                BudgetStatus::new(
                    entry.category.clone(),
                    Self::spent_in(snapshot, &entry.category),
                    entry.limit,
                )
            })
            .collect()
    }

    /// Total expenses against the monthly limit.
    pub fn overall_budget_usage(
        snapshot: &[Transaction],
        budget: &BudgetConfig,
    ) -> OverallBudgetUsage {
        let used = SummaryService::total_by_kind(snapshot, TransactionKind::Expense);
        OverallBudgetUsage::new(used, budget.monthly)
    }

    /// Current balance measured against a savings target.
    pub fn savings_goal_progress(snapshot: &[Transaction], goal: f64) -> SavingsGoalProgress {
        SavingsGoalProgress::new(SummaryService::balance(snapshot), goal)
    }

    fn spent_in(snapshot: &[Transaction], category: &str) -> f64 {
        snapshot
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Expense && txn.category == category)
            .map(|txn| txn.amount)
            .sum()
    }
}
