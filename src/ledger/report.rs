//! Derived, display-ready records produced by the analytics services.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Spending above this share of a limit is flagged as a warning.
pub const WARNING_THRESHOLD_PERCENT: f64 = 80.0;
/// Spending above this share of a limit is over budget.
pub const OVER_THRESHOLD_PERCENT: f64 = 100.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Classification of spending against a limit.
pub enum BudgetHealth {
    Good,
    Warning,
    Over,
}

impl BudgetHealth {
    /// Shared threshold rule for category and overall budgets.
    ///
    /// With a zero limit the percentage is meaningless: any spending is over.
    pub fn classify(spent: f64, limit: f64, percentage: f64) -> Self {
        if limit <= 0.0 {
            return if spent > 0.0 {
                BudgetHealth::Over
            } else {
                BudgetHealth::Good
            };
        }
        if percentage > OVER_THRESHOLD_PERCENT {
            BudgetHealth::Over
        } else if percentage > WARNING_THRESHOLD_PERCENT {
            BudgetHealth::Warning
        } else {
            BudgetHealth::Good
        }
    }
}

impl fmt::Display for BudgetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetHealth::Good => "good",
            BudgetHealth::Warning => "warning",
            BudgetHealth::Over => "over",
        };
        f.write_str(label)
    }
}

/// `spent / limit * 100`, or `0` when there is no positive limit. Saturates at
/// `f64::MAX` instead of reaching infinity.
pub fn usage_percentage(spent: f64, limit: f64) -> f64 {
    if limit > 0.0 {
        (spent / limit * 100.0).clamp(0.0, f64::MAX)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Sum of amounts for one kind and category.
pub struct CategoryAggregate {
    pub category: String,
    pub total: f64,
    /// Percentage of the kind's total carried by this category.
    pub share: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Spending against a single category limit.
pub struct BudgetStatus {
    pub category: String,
    pub spent: f64,
    pub limit: f64,
    pub remaining: f64,
    pub percentage: f64,
    pub status: BudgetHealth,
}

impl BudgetStatus {
    pub fn new(category: impl Into<String>, spent: f64, limit: f64) -> Self {
        let percentage = usage_percentage(spent, limit);
        Self {
            category: category.into(),
            spent,
            limit,
            remaining: limit - spent,
            percentage,
            status: BudgetHealth::classify(spent, limit, percentage),
        }
    }

    pub fn is_over(&self) -> bool {
        self.status == BudgetHealth::Over
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Total expenses measured against the monthly limit.
pub struct OverallBudgetUsage {
    pub used: f64,
    pub limit: f64,
    pub percentage: f64,
    pub remaining: f64,
    /// `100 - percentage`; negative once the budget is exceeded.
    pub remaining_percentage: f64,
    pub status: BudgetHealth,
}

impl OverallBudgetUsage {
    pub fn new(used: f64, limit: f64) -> Self {
        let percentage = usage_percentage(used, limit);
        Self {
            used,
            limit,
            percentage,
            remaining: limit - used,
            remaining_percentage: 100.0 - percentage,
            status: BudgetHealth::classify(used, limit, percentage),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
/// Share of income kept, or `Undefined` when there is no income to divide by.
pub enum SavingsRate {
    Defined(f64),
    Undefined,
}

impl SavingsRate {
    pub fn value(self) -> Option<f64> {
        match self {
            SavingsRate::Defined(rate) => Some(rate),
            SavingsRate::Undefined => None,
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, SavingsRate::Undefined)
    }
}

impl From<Option<f64>> for SavingsRate {
    fn from(value: Option<f64>) -> Self {
        value.map_or(SavingsRate::Undefined, SavingsRate::Defined)
    }
}

impl From<SavingsRate> for Option<f64> {
    fn from(rate: SavingsRate) -> Self {
        rate.value()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Progress of the current balance towards a savings target.
pub struct SavingsGoalProgress {
    pub goal: f64,
    pub saved: f64,
    pub percentage: f64,
    pub reached: bool,
}

impl SavingsGoalProgress {
    pub fn new(saved: f64, goal: f64) -> Self {
        let percentage = if goal > 0.0 {
            (saved / goal * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            goal,
            saved,
            percentage,
            reached: goal > 0.0 && saved >= goal,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Everything a dashboard needs, derived from one snapshot.
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub savings_rate: SavingsRate,
    pub budget_usage: OverallBudgetUsage,
    pub daily_average_expense: f64,
    pub income_by_category: Vec<CategoryAggregate>,
    pub expense_by_category: Vec<CategoryAggregate>,
}
