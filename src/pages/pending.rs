//! Pending transactions page state
//!
//! Pending income and pending outgoing are listed separately, each with its
//! own search box. Promotion itself goes through
//! [`TransactionService::mark_certain`](crate::services::TransactionService::mark_certain)
//! with the ids from [`TableModel::selected_ids`].

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::filter::{FilteredTransactions, StatusFilter, TransactionFilter};
use crate::models::TransactionKind;
use crate::storage::BudgetStore;
use crate::table::{CellFormat, TableModel, TransactionRow};

use super::Snapshot;

#[derive(Debug, Clone, Default)]
pub struct PendingPage {
    snapshot: Snapshot,
    income_search: String,
    outgoing_search: String,
    format: CellFormat,
}

impl PendingPage {
    pub fn new(settings: &Settings) -> Self {
        Self {
            format: CellFormat::from_settings(settings),
            ..Self::default()
        }
    }

    pub fn reload<S: BudgetStore + ?Sized>(&mut self, store: &S) -> BudgetResult<()> {
        self.snapshot = Snapshot::load(store)?;
        Ok(())
    }

    pub fn set_income_search(&mut self, text: impl Into<String>) {
        self.income_search = text.into();
    }

    pub fn set_outgoing_search(&mut self, text: impl Into<String>) {
        self.outgoing_search = text.into();
    }

    pub fn income(&self) -> FilteredTransactions {
        self.pending(TransactionKind::Income, &self.income_search)
    }

    pub fn outgoing(&self) -> FilteredTransactions {
        self.pending(TransactionKind::Outgoing, &self.outgoing_search)
    }

    pub fn income_table(&self) -> TableModel<TransactionRow> {
        self.table(self.income())
    }

    pub fn outgoing_table(&self) -> TableModel<TransactionRow> {
        self.table(self.outgoing())
    }

    fn pending(&self, kind: TransactionKind, search: &str) -> FilteredTransactions {
        TransactionFilter::new()
            .kind(kind)
            .status(StatusFilter::Pending)
            .search(search)
            .apply(&self.snapshot.transactions)
    }

    fn table(&self, visible: FilteredTransactions) -> TableModel<TransactionRow> {
        TableModel::new(TransactionRow::build(
            &visible.transactions,
            &self.snapshot.periods,
            &self.format,
        ))
    }
}
