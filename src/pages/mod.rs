//! View state for the transactions, periods and pending pages
//!
//! Each page owns an immutable [`Snapshot`] of the store plus its own filter
//! and selection state. Tables and totals are recomputed from the snapshot on
//! demand; nothing changes until the page is reloaded.

pub mod pending;
pub mod periods;
pub mod transactions;

pub use pending::PendingPage;
pub use periods::{PeriodDetail, PeriodsPage};
pub use transactions::TransactionsPage;

use tracing::debug;

use crate::error::BudgetResult;
use crate::models::{BudgetPeriod, Transaction};
use crate::storage::BudgetStore;

/// Periods and transactions as read from a store at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub periods: Vec<BudgetPeriod>,
    pub transactions: Vec<Transaction>,
}

impl Snapshot {
    pub fn new(periods: Vec<BudgetPeriod>, transactions: Vec<Transaction>) -> Self {
        Self {
            periods,
            transactions,
        }
    }

    pub fn load<S: BudgetStore + ?Sized>(store: &S) -> BudgetResult<Self> {
        let periods = store.list_periods()?;
        let transactions = store.list_transactions()?;
        debug!(
            periods = periods.len(),
            transactions = transactions.len(),
            "loaded snapshot"
        );
        Ok(Self::new(periods, transactions))
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty() && self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BudgetError;
    use crate::models::{Certainty, Money, PeriodId, TransactionId};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    /// Store that cannot be read
    pub(crate) struct BrokenStore;

    impl BudgetStore for BrokenStore {
        fn list_periods(&self) -> BudgetResult<Vec<BudgetPeriod>> {
            Err(BudgetError::Persistence("unavailable".into()))
        }
        fn list_transactions(&self) -> BudgetResult<Vec<Transaction>> {
            Err(BudgetError::Persistence("unavailable".into()))
        }
        fn save_period(&self, _: BudgetPeriod) -> BudgetResult<BudgetPeriod> {
            Err(BudgetError::Persistence("unavailable".into()))
        }
        fn save_transaction(&self, _: Transaction) -> BudgetResult<Transaction> {
            Err(BudgetError::Persistence("unavailable".into()))
        }
        fn delete_period(&self, _: PeriodId) -> BudgetResult<()> {
            Err(BudgetError::Persistence("unavailable".into()))
        }
        fn delete_transaction(&self, _: TransactionId) -> BudgetResult<()> {
            Err(BudgetError::Persistence("unavailable".into()))
        }
        fn set_transaction_certainty(
            &self,
            _: TransactionId,
            _: Certainty,
        ) -> BudgetResult<Transaction> {
            Err(BudgetError::Persistence("unavailable".into()))
        }
    }

    #[test]
    fn test_load_snapshot() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let store = MemoryStore::with_data(
            vec![BudgetPeriod::new("January", day, day)],
            vec![Transaction::income(Money::from_units(1), day)],
        );

        let snapshot = Snapshot::load(&store).unwrap();
        assert_eq!(snapshot.periods.len(), 1);
        assert_eq!(snapshot.transactions.len(), 1);
        assert!(Snapshot::default().is_empty());
    }

    #[test]
    fn test_load_surfaces_store_errors() {
        assert!(Snapshot::load(&BrokenStore).unwrap_err().is_persistence());
    }
}
