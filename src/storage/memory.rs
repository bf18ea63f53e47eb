//! In-memory store
//!
//! Keeps periods and transactions in `RwLock`-guarded maps so the store can
//! be shared by reference. Lists are returned as sorted clones, so callers
//! always work on a snapshot.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetPeriod, Certainty, PeriodId, Transaction, TransactionId};

use super::BudgetStore;

/// Store that lives entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    periods: RwLock<HashMap<PeriodId, BudgetPeriod>>,
    transactions: RwLock<HashMap<TransactionId, Transaction>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with data
    pub fn with_data(periods: Vec<BudgetPeriod>, transactions: Vec<Transaction>) -> Self {
        Self {
            periods: RwLock::new(periods.into_iter().map(|p| (p.id, p)).collect()),
            transactions: RwLock::new(transactions.into_iter().map(|t| (t.id, t)).collect()),
        }
    }

    /// Number of stored transactions
    pub fn transaction_count(&self) -> BudgetResult<usize> {
        Ok(read(&self.transactions)?.len())
    }

    /// Number of stored periods
    pub fn period_count(&self) -> BudgetResult<usize> {
        Ok(read(&self.periods)?.len())
    }
}

fn read<T>(lock: &RwLock<T>) -> BudgetResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|e| BudgetError::Persistence(format!("Failed to acquire read lock: {}", e)))
}

fn write<T>(lock: &RwLock<T>) -> BudgetResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|e| BudgetError::Persistence(format!("Failed to acquire write lock: {}", e)))
}

impl BudgetStore for MemoryStore {
    fn list_periods(&self) -> BudgetResult<Vec<BudgetPeriod>> {
        let data = read(&self.periods)?;
        let mut periods: Vec<_> = data.values().cloned().collect();
        periods.sort_by(|a, b| {
            b.start_date
                .cmp(&a.start_date)
                .then(b.created_at.cmp(&a.created_at))
                .then(a.id.cmp(&b.id))
        });
        Ok(periods)
    }

    fn list_transactions(&self) -> BudgetResult<Vec<Transaction>> {
        let data = read(&self.transactions)?;
        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then(b.created_at.cmp(&a.created_at))
                .then(a.id.cmp(&b.id))
        });
        Ok(transactions)
    }

    fn save_period(&self, period: BudgetPeriod) -> BudgetResult<BudgetPeriod> {
        write(&self.periods)?.insert(period.id, period.clone());
        Ok(period)
    }

    fn save_transaction(&self, transaction: Transaction) -> BudgetResult<Transaction> {
        write(&self.transactions)?.insert(transaction.id, transaction.clone());
        Ok(transaction)
    }

    fn delete_period(&self, id: PeriodId) -> BudgetResult<()> {
        write(&self.periods)?
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| BudgetError::period_not_found(id.to_string()))
    }

    fn delete_transaction(&self, id: TransactionId) -> BudgetResult<()> {
        write(&self.transactions)?
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| BudgetError::transaction_not_found(id.to_string()))
    }

    fn set_transaction_certainty(
        &self,
        id: TransactionId,
        certainty: Certainty,
    ) -> BudgetResult<Transaction> {
        let mut data = write(&self.transactions)?;
        let txn = data
            .get_mut(&id)
            .ok_or_else(|| BudgetError::transaction_not_found(id.to_string()))?;
        txn.set_status(certainty);
        Ok(txn.clone())
    }

    fn get_period(&self, id: PeriodId) -> BudgetResult<Option<BudgetPeriod>> {
        Ok(read(&self.periods)?.get(&id).cloned())
    }

    fn get_transaction(&self, id: TransactionId) -> BudgetResult<Option<Transaction>> {
        Ok(read(&self.transactions)?.get(&id).cloned())
    }
}
