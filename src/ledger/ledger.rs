use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{LedgerError, LedgerResult};

use super::transaction::{Transaction, TransactionDraft, TransactionId};

/// Insertion-ordered collection of transactions and the single source of truth
/// for the analytics services.
///
/// Only `Serialize` is derived: a ledger is handed to presentation code, never
/// rebuilt from external data, so the id counter cannot be forged.
#[derive(Debug, Clone, Serialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    transactions: Vec<Transaction>,
    next_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transactions: Vec::new(),
            next_id: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validates `draft`, assigns a fresh id and appends the transaction.
    pub fn add(&mut self, draft: TransactionDraft) -> LedgerResult<Transaction> {
        draft.validate()?;
        self.check_total(&draft, None)?;
        let id = TransactionId(self.next_id);
        self.next_id += 1;
        let transaction = Transaction::from_draft(id, draft);
        debug!(
            %id,
            kind = %transaction.kind,
            category = %transaction.category,
            "transaction added"
        );
        self.transactions.push(transaction.clone());
        self.touch();
        Ok(transaction)
    }

    /// Replaces every field of `id` except the id itself, keeping its position.
    pub fn update(
        &mut self,
        id: TransactionId,
        draft: TransactionDraft,
    ) -> LedgerResult<Transaction> {
        let index = self.position(id).ok_or(LedgerError::NotFound(id))?;
        draft.validate()?;
        self.check_total(&draft, Some(index))?;
        let transaction = &mut self.transactions[index];
        transaction.apply(draft);
        let updated = transaction.clone();
        debug!(%id, kind = %updated.kind, category = %updated.category, "transaction updated");
        self.touch();
        Ok(updated)
    }

    /// Removes `id` and returns it. Other transactions keep their ids and order.
    pub fn remove(&mut self, id: TransactionId) -> LedgerResult<Transaction> {
        let index = self.position(id).ok_or(LedgerError::NotFound(id))?;
        let removed = self.transactions.remove(index);
        debug!(%id, "transaction removed");
        self.touch();
        Ok(removed)
    }

    /// Read-only snapshot in insertion order.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Owned copy of [`Ledger::list`] for callers that cannot hold the borrow.
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Rejects a draft that would push its kind's total past `f64::MAX`.
    /// `replacing` is the index of the transaction an update overwrites.
    fn check_total(
        &self,
        draft: &TransactionDraft,
        replacing: Option<usize>,
    ) -> LedgerResult<()> {
        let total: f64 = self
            .transactions
            .iter()
            .enumerate()
            .filter(|(index, txn)| Some(*index) != replacing && txn.kind == draft.kind)
            .map(|(_, txn)| txn.amount)
            .sum::<f64>()
            + draft.amount;
        if !total.is_finite() {
            return Err(LedgerError::validation(format!(
                "{} total would overflow after adding {}",
                draft.kind, draft.amount
            )));
        }
        Ok(())
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|txn| txn.id == id)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new("Personal")
    }
}
