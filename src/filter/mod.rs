//! Filter engine
//!
//! Pure functions from a snapshot plus filter criteria to the matching subset
//! and its aggregates.

pub mod period;
pub mod transaction;

pub use period::{PeriodFilter, PeriodOverview};
pub use transaction::{
    AttachmentFilter, FilteredTransactions, KindFilter, StatusFilter, TransactionFilter,
    TransactionSummary,
};
