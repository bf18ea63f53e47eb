//! Budget periods page state

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::filter::{PeriodFilter, PeriodOverview, StatusFilter, TransactionFilter};
use crate::models::{BudgetPeriod, Money, PeriodId, PeriodTotals, TransactionKind};
use crate::storage::BudgetStore;
use crate::table::{CellFormat, PeriodRow, TableModel, TransactionRow};

use super::Snapshot;

/// One period opened in detail: its income and outgoing lists side by side
#[derive(Debug, Clone)]
pub struct PeriodDetail {
    pub period: BudgetPeriod,
    pub income: TableModel<TransactionRow>,
    pub outgoing: TableModel<TransactionRow>,
    /// Totals over every attached transaction, regardless of list filters
    pub totals: PeriodTotals,
    pub include_pending: bool,
}

impl PeriodDetail {
    pub fn income_total(&self) -> Money {
        self.totals.income(self.include_pending)
    }

    pub fn outgoing_total(&self) -> Money {
        self.totals.outgoing(self.include_pending)
    }

    pub fn net(&self) -> Money {
        self.totals.net(self.include_pending)
    }
}

/// Period list with a selection and a detail view
#[derive(Debug, Clone, Default)]
pub struct PeriodsPage {
    snapshot: Snapshot,
    filter: PeriodFilter,
    selected: Option<PeriodId>,
    include_pending: bool,
    income_status: StatusFilter,
    outgoing_status: StatusFilter,
    format: CellFormat,
}

impl PeriodsPage {
    pub fn new(settings: &Settings) -> Self {
        Self {
            include_pending: settings.include_pending_in_totals,
            format: CellFormat::from_settings(settings),
            ..Self::default()
        }
    }

    /// Replace the snapshot, dropping the selection if its period is gone
    pub fn reload<S: BudgetStore + ?Sized>(&mut self, store: &S) -> BudgetResult<()> {
        self.snapshot = Snapshot::load(store)?;
        if let Some(id) = self.selected {
            if !self.snapshot.periods.iter().any(|p| p.id == id) {
                self.selected = None;
            }
        }
        Ok(())
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn filter(&self) -> &PeriodFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: PeriodFilter) {
        self.filter = filter;
    }

    pub fn reset_filters(&mut self) {
        self.filter = PeriodFilter::default();
        self.income_status = StatusFilter::All;
        self.outgoing_status = StatusFilter::All;
    }

    pub fn include_pending(&self) -> bool {
        self.include_pending
    }

    pub fn set_include_pending(&mut self, include_pending: bool) {
        self.include_pending = include_pending;
    }

    pub fn set_income_status(&mut self, status: StatusFilter) {
        self.income_status = status;
    }

    pub fn set_outgoing_status(&mut self, status: StatusFilter) {
        self.outgoing_status = status;
    }

    /// Select a period; unknown ids clear the selection
    pub fn select(&mut self, id: PeriodId) -> bool {
        let known = self.snapshot.periods.iter().any(|p| p.id == id);
        self.selected = known.then_some(id);
        known
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<PeriodId> {
        self.selected
    }

    pub fn overviews(&self, today: NaiveDate) -> Vec<PeriodOverview> {
        self.filter
            .apply(&self.snapshot.periods, &self.snapshot.transactions, today)
    }

    pub fn table(&self, today: NaiveDate) -> TableModel<PeriodRow> {
        TableModel::new(PeriodRow::build(
            self.overviews(today),
            self.include_pending,
            &self.format,
        ))
    }

    /// Detail for any period in the snapshot, filter or not
    pub fn detail(&self, id: PeriodId) -> Option<PeriodDetail> {
        let period = self.snapshot.periods.iter().find(|p| p.id == id)?;
        let list = |kind: TransactionKind, status: StatusFilter| {
            let filter = TransactionFilter::new()
                .period(id)
                .kind(kind)
                .status(status);
            let visible = filter.apply(&self.snapshot.transactions);
            TableModel::new(TransactionRow::build(
                &visible.transactions,
                &self.snapshot.periods,
                &self.format,
            ))
        };

        Some(PeriodDetail {
            period: period.clone(),
            income: list(TransactionKind::Income, self.income_status),
            outgoing: list(TransactionKind::Outgoing, self.outgoing_status),
            totals: period.totals(&self.snapshot.transactions),
            include_pending: self.include_pending,
        })
    }

    pub fn selected_detail(&self) -> Option<PeriodDetail> {
        self.selected.and_then(|id| self.detail(id))
    }
}
