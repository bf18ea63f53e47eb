//! Budget period rows

use crate::filter::PeriodOverview;
use crate::models::PeriodId;

use super::{CellFormat, SortKey, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodColumn {
    Name,
    Start,
    End,
    Income,
    Outgoing,
    Net,
    Pending,
}

const COLUMNS: &[PeriodColumn] = &[
    PeriodColumn::Name,
    PeriodColumn::Start,
    PeriodColumn::End,
    PeriodColumn::Income,
    PeriodColumn::Outgoing,
    PeriodColumn::Net,
    PeriodColumn::Pending,
];

/// A period with its totals, rendered with or without pending amounts
#[derive(Debug, Clone)]
pub struct PeriodRow {
    pub overview: PeriodOverview,
    pub include_pending: bool,
    format: CellFormat,
}

impl PeriodRow {
    pub fn new(overview: PeriodOverview, include_pending: bool, format: CellFormat) -> Self {
        Self {
            overview,
            include_pending,
            format,
        }
    }

    pub fn build(
        overviews: Vec<PeriodOverview>,
        include_pending: bool,
        format: &CellFormat,
    ) -> Vec<Self> {
        overviews
            .into_iter()
            .map(|o| Self::new(o, include_pending, format.clone()))
            .collect()
    }
}

impl TableRow for PeriodRow {
    type Id = PeriodId;
    type Column = PeriodColumn;

    fn columns() -> &'static [PeriodColumn] {
        COLUMNS
    }

    fn header(column: PeriodColumn) -> &'static str {
        match column {
            PeriodColumn::Name => "Name",
            PeriodColumn::Start => "Start",
            PeriodColumn::End => "End",
            PeriodColumn::Income => "Income",
            PeriodColumn::Outgoing => "Outgoing",
            PeriodColumn::Net => "Net",
            PeriodColumn::Pending => "Pending",
        }
    }

    fn id(&self) -> PeriodId {
        self.overview.period.id
    }

    fn cell(&self, column: PeriodColumn) -> String {
        let period = &self.overview.period;
        let totals = &self.overview.totals;
        match column {
            PeriodColumn::Name => period.name.clone(),
            PeriodColumn::Start => self.format.date(period.start_date),
            PeriodColumn::End => self.format.date(period.end_date),
            PeriodColumn::Income => self.format.money(totals.income(self.include_pending)),
            PeriodColumn::Outgoing => self.format.money(totals.outgoing(self.include_pending)),
            PeriodColumn::Net => self.format.money(totals.net(self.include_pending)),
            PeriodColumn::Pending => totals.pending_count.to_string(),
        }
    }

    fn sort_key(&self, column: PeriodColumn) -> SortKey {
        let period = &self.overview.period;
        let totals = &self.overview.totals;
        match column {
            PeriodColumn::Name => SortKey::text(&period.name),
            PeriodColumn::Start => SortKey::Date(period.start_date),
            PeriodColumn::End => SortKey::Date(period.end_date),
            PeriodColumn::Income => SortKey::Money(totals.income(self.include_pending)),
            PeriodColumn::Outgoing => SortKey::Money(totals.outgoing(self.include_pending)),
            PeriodColumn::Net => SortKey::Money(totals.net(self.include_pending)),
            PeriodColumn::Pending => SortKey::Count(totals.pending_count),
        }
    }
}
