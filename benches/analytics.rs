use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use expense_core::config::Config;
use expense_core::ledger::{Ledger, TransactionDraft, TransactionKind};
use expense_core::services::{BudgetService, SummaryService};

const CATEGORIES: [&str; 6] = [
    "Travel",
    "Food",
    "Groceries",
    "Utilities",
    "Entertainment",
    "Healthcare",
];

fn build_sample_ledger(txn_count: usize) -> Ledger {
    let mut ledger = Ledger::new("Benchmark");
    let start_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    for idx in 0..txn_count {
        let date = start_date + Duration::days((idx % 365) as i64);
        let draft = if idx % 10 == 0 {
            TransactionDraft::income("Salary", 5000.0, date)
        } else {
            let category = CATEGORIES[idx % CATEGORIES.len()];
            TransactionDraft::expense(category, 50.0 + (idx % 100) as f64, date)
        };
        ledger.add(draft).expect("valid draft");
    }
    ledger
}

fn bench_ledger_mutations(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    c.bench_function("ledger_update_middle_10k", |b| {
        b.iter_batched(
            || ledger.clone(),
            |mut ledger_clone| {
                let id = ledger_clone.list()[5_000].id;
                let updated = ledger_clone
                    .update(id, TransactionDraft::expense("Food", 12.0, date))
                    .expect("update");
                black_box(updated);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_analytics(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let config = Config::default();

    c.bench_function("aggregate_by_category_10k", |b| {
        b.iter(|| {
            let aggregates =
                SummaryService::aggregate_by_category(ledger.list(), TransactionKind::Expense);
            black_box(aggregates);
        })
    });

    c.bench_function("category_budget_statuses_10k", |b| {
        b.iter(|| {
            let statuses = BudgetService::category_budget_statuses(ledger.list(), &config.budget);
            black_box(statuses);
        })
    });

    c.bench_function("financial_summary_10k", |b| {
        b.iter(|| {
            let summary =
                SummaryService::summarize(ledger.list(), &config.budget, config.period_days())
                    .expect("summary");
            black_box(summary);
        })
    });
}

criterion_group!(benches, bench_ledger_mutations, bench_analytics);
criterion_main!(benches);
