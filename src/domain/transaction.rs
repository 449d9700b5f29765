//! Domain models for recorded income and expense events.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single recorded income or expense event. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(
        rename = "incomeType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub income_type: Option<IncomeType>,
    #[serde(default)]
    pub recurring: bool,
}

impl Transaction {
    /// Completes a draft by assigning a fresh unique id.
    pub fn from_draft(draft: TransactionDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: draft.kind,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            notes: draft.notes,
            income_type: draft.income_type,
            recurring: draft.recurring,
        }
    }

    /// Signed effect of this transaction on a profile balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// Transaction awaiting an id, as collected from the input layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub income_type: Option<IncomeType>,
    pub recurring: bool,
}

impl TransactionDraft {
    pub fn income(
        amount: f64,
        income_type: Option<IncomeType>,
        category: impl Into<String>,
        recurring: bool,
    ) -> Self {
        Self {
            kind: TransactionKind::Income,
            amount,
            category: category.into(),
            date: Utc::now(),
            notes: None,
            income_type,
            recurring,
        }
    }

    pub fn expense(
        amount: f64,
        category: impl Into<String>,
        notes: Option<String>,
        recurring: bool,
    ) -> Self {
        Self {
            kind: TransactionKind::Expense,
            amount,
            category: category.into(),
            date: Utc::now(),
            notes,
            income_type: None,
            recurring,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Whether a transaction adds to or subtracts from the balance.
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

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Where an income came from. Informational only.
pub enum IncomeType {
    Allowance,
    Chore,
    Job,
    Gift,
}

impl IncomeType {
    pub const ALL: [IncomeType; 4] = [
        IncomeType::Allowance,
        IncomeType::Chore,
        IncomeType::Job,
        IncomeType::Gift,
    ];
}

impl fmt::Display for IncomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IncomeType::Allowance => "Allowance",
            IncomeType::Chore => "Chore",
            IncomeType::Job => "Job",
            IncomeType::Gift => "Gift",
        };
        f.write_str(label)
    }
}
