//! Transaction model
//!
//! A transaction is a single income or outgoing money movement. It is either
//! certain or still pending, and may be attached to one budget period.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{PeriodId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Outgoing,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Outgoing => write!(f, "Outgoing"),
        }
    }
}

/// Whether a transaction has been confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Certainty {
    /// The money movement has happened or is confirmed
    #[default]
    Certain,
    /// Expected but not yet confirmed
    Pending,
}

impl fmt::Display for Certainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Certain => write!(f, "Certain"),
            Self::Pending => write!(f, "Pending"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or outgoing
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Amount, never negative; the direction comes from `kind`
    pub amount: Money,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: String,

    /// Transaction date
    pub date: NaiveDate,

    /// Certain or pending
    #[serde(default)]
    pub status: Certainty,

    /// The budget period this transaction is attached to, if any
    #[serde(default)]
    pub period_id: Option<PeriodId>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new certain, unattached transaction
    pub fn new(kind: TransactionKind, amount: Money, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            description: String::new(),
            category: String::new(),
            date,
            status: Certainty::Certain,
            period_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a certain, unattached income transaction
    pub fn income(amount: Money, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Income, amount, date)
    }

    /// Create a certain, unattached outgoing transaction
    pub fn outgoing(amount: Money, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Outgoing, amount, date)
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the status without touching `updated_at`
    pub fn with_status(mut self, status: Certainty) -> Self {
        self.status = status;
        self
    }

    /// Attach to a budget period
    pub fn attached_to(mut self, period_id: PeriodId) -> Self {
        self.period_id = Some(period_id);
        self
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is still pending
    pub fn is_pending(&self) -> bool {
        self.status == Certainty::Pending
    }

    /// Check if this belongs to a budget period
    pub fn is_attached(&self) -> bool {
        self.period_id.is_some()
    }

    /// Amount with the direction applied: positive for income, negative for outgoing
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Outgoing => -self.amount,
        }
    }

    /// Set the status
    pub fn set_status(&mut self, status: Certainty) {
        if self.status != status {
            self.status = status;
            self.updated_at = Utc::now();
        }
    }

    /// Flip a pending transaction to certain; no-op when already certain.
    /// Returns whether anything changed.
    pub fn mark_certain(&mut self) -> bool {
        let changed = self.is_pending();
        self.set_status(Certainty::Certain);
        changed
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        if self.amount > Money::MAX {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }

    /// Case-insensitive substring match on description or category.
    /// `needle` must already be lowercase.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.description,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount cannot be negative (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Transaction amount exceeds {} (got {})", Money::MAX, amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
