#![doc(test(attr(deny(warnings))))]

//! Expense Core keeps a personal income/expense ledger and derives the totals,
//! category breakdowns and budget usage a presentation layer displays.
//!
//! ```
//! use chrono::NaiveDate;
//! use expense_core::services::{BudgetService, SummaryService};
//! use expense_core::ledger::{BudgetConfig, Ledger, TransactionDraft, TransactionKind};
//!
//! let mut ledger = Ledger::new("Household");
//! let day = NaiveDate::from_ymd_opt(2025, 8, 2).unwrap();
//! ledger.add(TransactionDraft::income("Salary", 50000.0, day)).unwrap();
//! ledger.add(TransactionDraft::expense("Travel", 2500.0, day)).unwrap();
//!
//! let budget = BudgetConfig::new(45000.0).with_category("Travel", 3000.0);
//! assert_eq!(SummaryService::total_by_kind(ledger.list(), TransactionKind::Expense), 2500.0);
//! assert_eq!(BudgetService::budget_status(ledger.list(), &budget, "Travel").remaining, 500.0);
//! ```

pub mod config;
pub mod errors;
pub mod ledger;
pub mod services;
pub mod utils;

pub use errors::{LedgerError, LedgerResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
