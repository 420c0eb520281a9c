use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, LedgerResult};

/// Ledger-assigned identifier. Strictly increasing and never reused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of money flow. Amounts are always stored unsigned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Caller-supplied transaction fields, validated by the ledger on `add` and `update`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            amount,
            date,
            description: String::new(),
        }
    }

    pub fn income(category: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Income, category, amount, date)
    }

    pub fn expense(category: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Expense, category, amount, date)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Rejects empty categories and amounts that are negative, NaN or infinite.
    ///
    /// The category is checked verbatim: no trimming or case folding happens here.
    pub fn validate(&self) -> LedgerResult<()> {
        if self.category.is_empty() {
            return Err(LedgerError::validation("category must not be empty"));
        }
        if !self.amount.is_finite() {
            return Err(LedgerError::validation(format!(
                "amount must be a finite number, got {}",
                self.amount
            )));
        }
        if self.amount < 0.0 {
            return Err(LedgerError::validation(format!(
                "amount must not be negative, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    pub(crate) fn from_draft(id: TransactionId, draft: TransactionDraft) -> Self {
        Self {
            id,
            kind: draft.kind,
            category: draft.category,
            amount: draft.amount,
            date: draft.date,
            description: draft.description,
        }
    }

    /// Replaces every field except the identifier.
    pub(crate) fn apply(&mut self, draft: TransactionDraft) {
        self.kind = draft.kind;
        self.category = draft.category;
        self.amount = draft.amount;
        self.date = draft.date;
        self.description = draft.description;
    }

    /// Returns the editable fields, e.g. to prefill an edit form.
    pub fn draft(&self) -> TransactionDraft {
        TransactionDraft {
            kind: self.kind,
            category: self.category.clone(),
            amount: self.amount,
            date: self.date,
            description: self.description.clone(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with the sign implied by `kind`.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}
