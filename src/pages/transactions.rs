//! Transactions page state

use tracing::debug;

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::filter::{FilteredTransactions, TransactionFilter, TransactionSummary};
use crate::storage::BudgetStore;
use crate::table::{CellFormat, TableModel, TransactionRow};

use super::Snapshot;

/// All transactions, narrowed by the page filter
#[derive(Debug, Clone, Default)]
pub struct TransactionsPage {
    snapshot: Snapshot,
    filter: TransactionFilter,
    format: CellFormat,
}

impl TransactionsPage {
    pub fn new(settings: &Settings) -> Self {
        Self {
            snapshot: Snapshot::default(),
            filter: TransactionFilter::default(),
            format: CellFormat::from_settings(settings),
        }
    }

    /// Replace the snapshot. On error the previous snapshot is kept.
    pub fn reload<S: BudgetStore + ?Sized>(&mut self, store: &S) -> BudgetResult<()> {
        self.snapshot = Snapshot::load(store)?;
        Ok(())
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn filter(&self) -> &TransactionFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: TransactionFilter) {
        debug!(?filter, "transactions page filter changed");
        self.filter = filter;
    }

    pub fn reset_filters(&mut self) {
        self.filter = TransactionFilter::default();
    }

    /// Matching transactions with their summary
    pub fn visible(&self) -> FilteredTransactions {
        self.filter.apply(&self.snapshot.transactions)
    }

    pub fn table(&self) -> TableModel<TransactionRow> {
        let visible = self.visible();
        TableModel::new(TransactionRow::build(
            &visible.transactions,
            &self.snapshot.periods,
            &self.format,
        ))
    }

    pub fn summary(&self) -> TransactionSummary {
        self.visible().summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::StatusFilter;
    use crate::models::{Certainty, Money, Transaction, TransactionKind};
    use crate::pages::tests::BrokenStore;
    use crate::storage::MemoryStore;
    use crate::table::{TableRow, TransactionColumn};
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn store() -> MemoryStore {
        MemoryStore::with_data(
            Vec::new(),
            vec![
                Transaction::income(Money::from_units(100), date(1, 5)),
                Transaction::outgoing(Money::from_units(40), date(1, 10))
                    .with_status(Certainty::Pending),
            ],
        )
    }

    #[test]
    fn test_filter_and_summary() {
        let mut page = TransactionsPage::new(&Settings::default());
        page.reload(&store()).unwrap();
        assert_eq!(page.table().len(), 2);

        page.set_filter(TransactionFilter::new().status(StatusFilter::Pending));
        let table = page.table();
        assert_eq!(table.len(), 1);
        let row = table.row(0).unwrap();
        assert_eq!(row.transaction.kind, TransactionKind::Outgoing);
        assert_eq!(row.cell(TransactionColumn::Amount), "40.00");

        let summary = page.summary();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.income, Money::zero());
        assert_eq!(summary.outgoing, Money::from_units(40));

        page.reset_filters();
        assert_eq!(page.summary().count, 2);
    }

    #[test]
    fn test_reload_failure_keeps_previous_snapshot() {
        let mut page = TransactionsPage::new(&Settings::default());
        page.reload(&store()).unwrap();

        assert!(page.reload(&BrokenStore).is_err());
        assert_eq!(page.snapshot().transactions.len(), 2);
    }

    #[test]
    fn test_page_does_not_see_writes_until_reload() {
        let store = store();
        let mut page = TransactionsPage::new(&Settings::default());
        page.reload(&store).unwrap();

        store
            .save_transaction(Transaction::income(Money::from_units(5), date(2, 1)))
            .unwrap();
        assert_eq!(page.table().len(), 2);

        page.reload(&store).unwrap();
        assert_eq!(page.table().len(), 3);
    }
}
