//! Storage layer
//!
//! [`BudgetStore`] is the contract every storage engine satisfies: plain
//! load/save/delete calls that return consistent snapshots. The services and
//! pages only ever talk to a store through this trait.
//!
//! [`MemoryStore`] is the in-memory implementation used by tests and by
//! callers that keep their own persistence elsewhere.

pub mod memory;

pub use memory::MemoryStore;

use crate::error::BudgetResult;
use crate::models::{BudgetPeriod, Certainty, PeriodId, Transaction, TransactionId};

/// Storage contract for budget periods and transactions
pub trait BudgetStore {
    /// All periods, most recent start date first
    fn list_periods(&self) -> BudgetResult<Vec<BudgetPeriod>>;

    /// All transactions, most recent date first
    fn list_transactions(&self) -> BudgetResult<Vec<Transaction>>;

    /// Insert or replace a period, returning what was stored
    fn save_period(&self, period: BudgetPeriod) -> BudgetResult<BudgetPeriod>;

    /// Insert or replace a transaction, returning what was stored
    fn save_transaction(&self, transaction: Transaction) -> BudgetResult<Transaction>;

    /// Delete a period; `NotFound` if it does not exist
    fn delete_period(&self, id: PeriodId) -> BudgetResult<()>;

    /// Delete a transaction; `NotFound` if it does not exist
    fn delete_transaction(&self, id: TransactionId) -> BudgetResult<()>;

    /// Change a transaction's certainty; `NotFound` if it does not exist
    fn set_transaction_certainty(
        &self,
        id: TransactionId,
        certainty: Certainty,
    ) -> BudgetResult<Transaction>;

    /// Look up a single period
    fn get_period(&self, id: PeriodId) -> BudgetResult<Option<BudgetPeriod>> {
        Ok(self.list_periods()?.into_iter().find(|p| p.id == id))
    }

    /// Look up a single transaction
    fn get_transaction(&self, id: TransactionId) -> BudgetResult<Option<Transaction>> {
        Ok(self.list_transactions()?.into_iter().find(|t| t.id == id))
    }
}
