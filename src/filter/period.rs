//! Period filtering with derived totals

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{BudgetPeriod, PeriodTotals, Transaction};

/// Filter configuration for the period list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodFilter {
    /// Case-insensitive substring of the period name
    pub name: Option<String>,
    /// Only periods whose range contains "today"
    pub active_only: bool,
}

impl PeriodFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, text: impl Into<String>) -> Self {
        self.name = Some(text.into());
        self
    }

    pub fn active_only(mut self, active_only: bool) -> Self {
        self.active_only = active_only;
        self
    }

    /// Check a single period; `today` is only consulted when `active_only` is set
    pub fn matches(&self, period: &BudgetPeriod, today: NaiveDate) -> bool {
        if let Some(needle) = self.name_needle() {
            if !period.name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        !self.active_only || period.contains(today)
    }

    fn name_needle(&self) -> Option<String> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Filter periods, keeping input order, and attach each one's totals
    pub fn apply(
        &self,
        periods: &[BudgetPeriod],
        transactions: &[Transaction],
        today: NaiveDate,
    ) -> Vec<PeriodOverview> {
        periods
            .iter()
            .filter(|period| self.matches(period, today))
            .map(|period| PeriodOverview {
                totals: period.totals(transactions),
                period: period.clone(),
            })
            .collect()
    }

    /// [`apply`](Self::apply) against the local calendar date
    pub fn apply_today(
        &self,
        periods: &[BudgetPeriod],
        transactions: &[Transaction],
    ) -> Vec<PeriodOverview> {
        self.apply(periods, transactions, Local::now().date_naive())
    }
}

/// A period together with the totals of its attached transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodOverview {
    pub period: BudgetPeriod,
    pub totals: PeriodTotals,
}
