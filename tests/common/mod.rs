#![allow(dead_code)]

use chrono::NaiveDate;
use expense_core::ledger::{Ledger, TransactionDraft};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The household ledger shipped with the dashboard's demo data.
pub fn household_ledger() -> Ledger {
    let mut ledger = Ledger::new("Household");
    let drafts = [
        TransactionDraft::income("Salary", 50000.0, date(2025, 8, 1))
            .with_description("Monthly salary"),
        TransactionDraft::expense("Travel", 2500.0, date(2025, 8, 2))
            .with_description("Bus tickets"),
        TransactionDraft::expense("Utilities", 1200.0, date(2025, 8, 2))
            .with_description("Electricity bill"),
        TransactionDraft::expense("Food", 800.0, date(2025, 8, 3)).with_description("Restaurant"),
        TransactionDraft::expense("Groceries", 3500.0, date(2025, 8, 3))
            .with_description("Weekly shopping"),
        TransactionDraft::expense("Entertainment", 1500.0, date(2025, 8, 4))
            .with_description("Movie tickets"),
        TransactionDraft::expense("Healthcare", 900.0, date(2025, 8, 4))
            .with_description("Medical checkup"),
    ];
    for draft in drafts {
        ledger.add(draft).expect("seed transaction");
    }
    ledger
}

/// Salary plus two travel expenses totalling 3000.
pub fn travel_ledger() -> Ledger {
    let mut ledger = Ledger::new("Travel");
    ledger
        .add(TransactionDraft::income("Salary", 50000.0, date(2025, 8, 1)))
        .expect("salary");
    ledger
        .add(TransactionDraft::expense("Travel", 2500.0, date(2025, 8, 2)))
        .expect("bus");
    ledger
        .add(TransactionDraft::expense("Travel", 500.0, date(2025, 8, 2)))
        .expect("taxi");
    ledger
}
