//! Table adaptation
//!
//! A [`TableModel`] keeps the domain rows in the order they were loaded and a
//! separate view order used for sorting and selection. Widgets only see view
//! indices; [`TableModel::selected_ids`] maps them back to domain ids.

pub mod period;
pub mod transaction;

pub use period::{PeriodColumn, PeriodRow};
pub use transaction::{TransactionColumn, TransactionRow};

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::config::Settings;
use crate::models::Money;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Typed value a column sorts by
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    /// Compared case-insensitively
    Text(String),
    Date(NaiveDate),
    Money(Money),
    Count(usize),
}

impl SortKey {
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_lowercase())
    }
}

/// A domain value that can be shown as a table row
pub trait TableRow {
    type Id: Copy;
    type Column: Copy + PartialEq + std::fmt::Debug + 'static;

    /// Columns in display order
    fn columns() -> &'static [Self::Column];

    fn header(column: Self::Column) -> &'static str;

    fn id(&self) -> Self::Id;

    fn cell(&self, column: Self::Column) -> String;

    fn sort_key(&self, column: Self::Column) -> SortKey;
}

/// Rendering options shared by every row of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellFormat {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for CellFormat {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl CellFormat {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Falls back to ISO dates when the configured format is invalid
    pub fn date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.format("%Y-%m-%d").to_string();
        }
        out
    }
}

/// Rows plus a sortable view over them
#[derive(Debug, Clone)]
pub struct TableModel<R: TableRow> {
    rows: Vec<R>,
    order: Vec<usize>,
    sort: Option<(R::Column, SortOrder)>,
}

impl<R: TableRow> TableModel<R> {
    pub fn new(rows: Vec<R>) -> Self {
        let order = (0..rows.len()).collect();
        Self {
            rows,
            order,
            sort: None,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in load order, unaffected by sorting
    pub fn source_rows(&self) -> &[R] {
        &self.rows
    }

    /// Rows in view order
    pub fn rows(&self) -> impl Iterator<Item = &R> + '_ {
        self.order.iter().map(move |&i| &self.rows[i])
    }

    pub fn row(&self, view_index: usize) -> Option<&R> {
        self.order.get(view_index).map(|&i| &self.rows[i])
    }

    pub fn cell(&self, view_index: usize, column: R::Column) -> Option<String> {
        self.row(view_index).map(|row| row.cell(column))
    }

    pub fn current_sort(&self) -> Option<(R::Column, SortOrder)> {
        self.sort
    }

    /// Reorder the view. Ties keep load order.
    pub fn sort_by(&mut self, column: R::Column, order: SortOrder) {
        let rows = &self.rows;
        self.order.sort_by(|&a, &b| {
            let ordering = rows[a].sort_key(column).cmp(&rows[b].sort_key(column));
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
            .then(a.cmp(&b))
        });
        self.sort = Some((column, order));
    }

    /// Restore load order
    pub fn clear_sort(&mut self) {
        self.order = (0..self.rows.len()).collect();
        self.sort = None;
    }

    /// Domain ids for the selected view rows; out-of-range rows are skipped
    pub fn selected_ids(&self, view_rows: &[usize]) -> Vec<R::Id> {
        view_rows
            .iter()
            .filter_map(|&v| self.row(v))
            .map(|row| row.id())
            .collect()
    }

    /// Text rendering in view order, header first
    pub fn render(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(R::columns().iter().map(|&c| R::header(c).to_string()));
        for row in self.rows() {
            builder.push_record(R::columns().iter().map(|&c| row.cell(c)));
        }

        let mut table = builder.build();
        table.with(Style::sharp());
        table.to_string()
    }
}
