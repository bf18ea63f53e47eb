//! Transaction rows

use std::collections::HashMap;

use crate::models::{BudgetPeriod, PeriodId, Transaction, TransactionId};

use super::{CellFormat, SortKey, TableRow};

/// Placeholder for transactions without a (known) period
pub const NO_PERIOD: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionColumn {
    Status,
    Type,
    Date,
    Description,
    Amount,
    Category,
    BudgetPeriod,
}

const COLUMNS: &[TransactionColumn] = &[
    TransactionColumn::Status,
    TransactionColumn::Type,
    TransactionColumn::Date,
    TransactionColumn::Description,
    TransactionColumn::Amount,
    TransactionColumn::Category,
    TransactionColumn::BudgetPeriod,
];

/// A transaction with its period name resolved
#[derive(Debug, Clone)]
pub struct TransactionRow {
    pub transaction: Transaction,
    pub period_name: Option<String>,
    format: CellFormat,
}

impl TransactionRow {
    pub fn new(transaction: Transaction, period_name: Option<String>, format: CellFormat) -> Self {
        Self {
            transaction,
            period_name,
            format,
        }
    }

    /// Build rows, resolving each period id against `periods`
    pub fn build<'a, I>(transactions: I, periods: &[BudgetPeriod], format: &CellFormat) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let names: HashMap<PeriodId, &str> =
            periods.iter().map(|p| (p.id, p.name.as_str())).collect();

        transactions
            .into_iter()
            .map(|txn| {
                let period_name = txn
                    .period_id
                    .and_then(|pid| names.get(&pid))
                    .map(|name| name.to_string());
                Self::new(txn.clone(), period_name, format.clone())
            })
            .collect()
    }
}

impl TableRow for TransactionRow {
    type Id = TransactionId;
    type Column = TransactionColumn;

    fn columns() -> &'static [TransactionColumn] {
        COLUMNS
    }

    fn header(column: TransactionColumn) -> &'static str {
        match column {
            TransactionColumn::Status => "Status",
            TransactionColumn::Type => "Type",
            TransactionColumn::Date => "Date",
            TransactionColumn::Description => "Description",
            TransactionColumn::Amount => "Amount",
            TransactionColumn::Category => "Category",
            TransactionColumn::BudgetPeriod => "Budget Period",
        }
    }

    fn id(&self) -> TransactionId {
        self.transaction.id
    }

    fn cell(&self, column: TransactionColumn) -> String {
        let txn = &self.transaction;
        match column {
            TransactionColumn::Status => txn.status.to_string(),
            TransactionColumn::Type => txn.kind.to_string(),
            TransactionColumn::Date => self.format.date(txn.date),
            TransactionColumn::Description => txn.description.clone(),
            TransactionColumn::Amount => self.format.money(txn.amount),
            TransactionColumn::Category => txn.category.clone(),
            TransactionColumn::BudgetPeriod => self
                .period_name
                .clone()
                .unwrap_or_else(|| NO_PERIOD.to_string()),
        }
    }

    fn sort_key(&self, column: TransactionColumn) -> SortKey {
        let txn = &self.transaction;
        match column {
            TransactionColumn::Date => SortKey::Date(txn.date),
            TransactionColumn::Amount => SortKey::Money(txn.amount),
            TransactionColumn::Description => SortKey::text(&txn.description),
            TransactionColumn::Category => SortKey::text(&txn.category),
            _ => SortKey::text(&self.cell(column)),
        }
    }
}
