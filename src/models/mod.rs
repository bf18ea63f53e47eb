//! Core data models
//!
//! Budget periods, transactions, and the id and money types they are built on.

pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use ids::{PeriodId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use period::{BudgetPeriod, PeriodTotals, PeriodValidationError};
pub use transaction::{Certainty, Transaction, TransactionKind, TransactionValidationError};
