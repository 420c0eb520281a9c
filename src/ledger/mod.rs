//! Ledger domain models, derived report records, and budget configuration.

pub mod budget;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod report;
pub mod transaction;

pub use budget::{BudgetConfig, CategoryLimit, CategoryLimits};
pub use ledger::Ledger;
pub use report::{
    BudgetHealth, BudgetStatus, CategoryAggregate, FinancialSummary, OverallBudgetUsage,
    SavingsGoalProgress, SavingsRate,
};
pub use transaction::{Transaction, TransactionDraft, TransactionId, TransactionKind};
