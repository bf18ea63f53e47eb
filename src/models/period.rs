//! Budget period model
//!
//! A budget period is a named, inclusive date range. Its income and outgoing
//! totals are never stored; they are derived from the transactions attached
//! to it (see [`PeriodTotals`]).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PeriodId;
use super::money::Money;
use super::transaction::{Certainty, Transaction, TransactionKind};

/// A named budget period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPeriod {
    /// Unique identifier
    pub id: PeriodId,

    /// Display name, e.g. "January 2024"
    pub name: String,

    /// First day of the period (inclusive)
    pub start_date: NaiveDate,

    /// Last day of the period (inclusive)
    pub end_date: NaiveDate,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BudgetPeriod {
    /// Create a new period
    pub fn new(name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: PeriodId::new(),
            name: name.into(),
            start_date,
            end_date,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style notes setter
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Check if a date falls inside the period, both ends included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Length of the period in days, both ends included
    pub fn length_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Validate the period
    pub fn validate(&self) -> Result<(), PeriodValidationError> {
        if self.name.trim().is_empty() {
            return Err(PeriodValidationError::EmptyName);
        }
        if self.end_date < self.start_date {
            return Err(PeriodValidationError::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Sum the transactions attached to this period
    pub fn totals<'a, I>(&self, transactions: I) -> PeriodTotals
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        PeriodTotals::from_transactions(
            transactions
                .into_iter()
                .filter(|txn| txn.period_id == Some(self.id)),
        )
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} to {})",
            self.name,
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d")
        )
    }
}

/// Validation errors for budget periods
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodValidationError {
    EmptyName,
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for PeriodValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Budget period name cannot be empty"),
            Self::EndBeforeStart { start, end } => write!(
                f,
                "End date ({}) is before start date ({})",
                end.format("%Y-%m-%d"),
                start.format("%Y-%m-%d")
            ),
        }
    }
}

impl std::error::Error for PeriodValidationError {}

/// Totals derived from the transactions attached to a period
///
/// Certain and pending amounts are kept apart so callers can choose whether
/// pending transactions count towards income, outgoing and net.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub certain_income: Money,
    pub certain_outgoing: Money,
    pub pending_income: Money,
    pub pending_outgoing: Money,
    pub pending_count: usize,
}

impl PeriodTotals {
    /// Sum an already-selected set of transactions
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals = Self::default();
        for txn in transactions {
            match (txn.status, txn.kind) {
                (Certainty::Certain, TransactionKind::Income) => totals.certain_income += txn.amount,
                (Certainty::Certain, TransactionKind::Outgoing) => {
                    totals.certain_outgoing += txn.amount
                }
                (Certainty::Pending, TransactionKind::Income) => {
                    totals.pending_count += 1;
                    totals.pending_income += txn.amount;
                }
                (Certainty::Pending, TransactionKind::Outgoing) => {
                    totals.pending_count += 1;
                    totals.pending_outgoing += txn.amount;
                }
            }
        }
        totals
    }

    pub fn income(&self, include_pending: bool) -> Money {
        if include_pending {
            self.certain_income + self.pending_income
        } else {
            self.certain_income
        }
    }

    pub fn outgoing(&self, include_pending: bool) -> Money {
        if include_pending {
            self.certain_outgoing + self.pending_outgoing
        } else {
            self.certain_outgoing
        }
    }

    /// Income minus outgoing; negative when the period overspends
    pub fn net(&self, include_pending: bool) -> Money {
        self.income(include_pending) - self.outgoing(include_pending)
    }
}
