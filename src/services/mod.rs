//! Service layer
//!
//! Services add validation, period attachment and audit logging on top of a
//! [`BudgetStore`](crate::storage::BudgetStore). They never cache: every
//! operation reads what it needs from the store first.

pub mod period;
pub mod transaction;

pub use period::{NewPeriod, PeriodPatch, PeriodService};
pub use transaction::{
    DeletionReport, NewTransaction, PromotionReport, TransactionPatch, TransactionService,
};

use chrono::NaiveDate;
use tracing::warn;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::BudgetError;
use crate::models::{BudgetPeriod, PeriodId, TransactionId};

/// A single item of a batch operation that could not be processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    pub id: TransactionId,
    pub error: BudgetError,
}

/// The first period (in store order) whose range contains `date`
pub fn period_containing(periods: &[BudgetPeriod], date: NaiveDate) -> Option<PeriodId> {
    periods.iter().find(|p| p.contains(date)).map(|p| p.id)
}

/// Append audit entries once the store writes they describe are done.
///
/// The store is the source of truth: a failed audit write is logged and
/// never turns a completed mutation into an error.
fn record(audit: Option<&AuditLogger>, entries: &[AuditEntry]) {
    let Some(logger) = audit else {
        return;
    };
    if let Err(err) = logger.log_all(entries) {
        warn!(
            error = %err,
            entries = entries.len(),
            path = %logger.path().display(),
            "failed to write audit log"
        );
    }
}
