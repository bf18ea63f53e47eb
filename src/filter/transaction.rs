//! Transaction filtering and visible-row aggregates
//!
//! A [`TransactionFilter`] is a plain value; applying it is a pure function
//! of the filter and the input slice. Input order is preserved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Certainty, Money, PeriodId, Transaction, TransactionKind};

/// Restriction on transaction kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Outgoing,
}

impl KindFilter {
    fn accepts(self, kind: TransactionKind) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionKind::Income,
            Self::Outgoing => kind == TransactionKind::Outgoing,
        }
    }
}

impl From<TransactionKind> for KindFilter {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => Self::Income,
            TransactionKind::Outgoing => Self::Outgoing,
        }
    }
}

/// Restriction on certainty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Certain,
    Pending,
}

impl StatusFilter {
    fn accepts(self, status: Certainty) -> bool {
        match self {
            Self::All => true,
            Self::Certain => status == Certainty::Certain,
            Self::Pending => status == Certainty::Pending,
        }
    }
}

impl From<Certainty> for StatusFilter {
    fn from(status: Certainty) -> Self {
        match status {
            Certainty::Certain => Self::Certain,
            Certainty::Pending => Self::Pending,
        }
    }
}

/// Restriction on whether a transaction belongs to a period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentFilter {
    #[default]
    All,
    Attached,
    Unattached,
}

impl AttachmentFilter {
    fn accepts(self, period_id: Option<PeriodId>) -> bool {
        match self {
            Self::All => true,
            Self::Attached => period_id.is_some(),
            Self::Unattached => period_id.is_none(),
        }
    }
}

/// Filter configuration for transaction lists
///
/// Every dimension left at `All` / `None` places no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub kind: KindFilter,
    pub status: StatusFilter,
    pub attachment: AttachmentFilter,
    /// Only transactions attached to this period
    pub period: Option<PeriodId>,
    /// Earliest date, inclusive
    pub date_from: Option<NaiveDate>,
    /// Latest date, inclusive
    pub date_to: Option<NaiveDate>,
    /// Case-insensitive substring of description or category
    pub search: Option<String>,
}

impl TransactionFilter {
    /// Create a filter that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to income or outgoing
    pub fn kind(mut self, kind: impl Into<KindFilter>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Restrict to certain or pending
    pub fn status(mut self, status: impl Into<StatusFilter>) -> Self {
        self.status = status.into();
        self
    }

    /// Restrict to attached or unattached transactions
    pub fn attachment(mut self, attachment: AttachmentFilter) -> Self {
        self.attachment = attachment;
        self
    }

    /// Only transactions attached to `period_id`
    pub fn period(mut self, period_id: PeriodId) -> Self {
        self.period = Some(period_id);
        self
    }

    /// Restrict to an inclusive date range
    pub fn date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    /// Set the earliest date, inclusive
    pub fn from_date(mut self, from: NaiveDate) -> Self {
        self.date_from = Some(from);
        self
    }

    /// Set the latest date, inclusive
    pub fn to_date(mut self, to: NaiveDate) -> Self {
        self.date_to = Some(to);
        self
    }

    /// Case-insensitive text search over description and category.
    /// Blank text places no restriction.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Lowercased, trimmed search text; `None` when blank
    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Check if nothing is restricted
    pub fn is_unrestricted(&self) -> bool {
        self.kind == KindFilter::All
            && self.status == StatusFilter::All
            && self.attachment == AttachmentFilter::All
            && self.period.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.search_needle().is_none()
    }

    /// Check a single transaction against the filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.matches_with_needle(txn, self.search_needle().as_deref())
    }

    fn matches_with_needle(&self, txn: &Transaction, needle: Option<&str>) -> bool {
        if !self.kind.accepts(txn.kind)
            || !self.status.accepts(txn.status)
            || !self.attachment.accepts(txn.period_id)
        {
            return false;
        }
        if let Some(period) = self.period {
            if txn.period_id != Some(period) {
                return false;
            }
        }
        if self.date_from.is_some_and(|from| txn.date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| txn.date > to) {
            return false;
        }
        match needle {
            Some(needle) => txn.matches_search(needle),
            None => true,
        }
    }

    /// Apply the filter, keeping input order, and summarize the result
    pub fn apply(&self, transactions: &[Transaction]) -> FilteredTransactions {
        let needle = self.search_needle();
        let transactions: Vec<Transaction> = transactions
            .iter()
            .filter(|txn| self.matches_with_needle(txn, needle.as_deref()))
            .cloned()
            .collect();
        let summary = TransactionSummary::from_transactions(&transactions);
        FilteredTransactions {
            transactions,
            summary,
        }
    }
}

/// Aggregates over a set of visible transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSummary {
    /// Number of visible transactions
    pub count: usize,
    /// Sum of every visible income amount, pending included
    pub income: Money,
    /// Sum of every visible outgoing amount, pending included
    pub outgoing: Money,
    /// Sum of visible certain income only
    pub certain_income: Money,
    /// Sum of visible certain outgoing only
    pub certain_outgoing: Money,
}

impl TransactionSummary {
    /// Count and sum an already-filtered set
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut summary = Self::default();
        for txn in transactions {
            summary.count += 1;
            let certain = txn.status == Certainty::Certain;
            match txn.kind {
                TransactionKind::Income => {
                    summary.income += txn.amount;
                    if certain {
                        summary.certain_income += txn.amount;
                    }
                }
                TransactionKind::Outgoing => {
                    summary.outgoing += txn.amount;
                    if certain {
                        summary.certain_outgoing += txn.amount;
                    }
                }
            }
        }
        summary
    }

    /// Visible income minus visible outgoing
    pub fn net(&self) -> Money {
        self.income - self.outgoing
    }
}

/// Result of applying a [`TransactionFilter`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredTransactions {
    pub transactions: Vec<Transaction>,
    pub summary: TransactionSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        let period = PeriodId::new();
        vec![
            Transaction::income(Money::from_units(100), date(2024, 1, 5))
                .with_description("Salary")
                .with_category("Work")
                .attached_to(period),
            Transaction::outgoing(Money::from_units(40), date(2024, 1, 10))
                .with_description("Electricity bill")
                .with_category("Utilities")
                .with_status(Certainty::Pending),
            Transaction::outgoing(Money::from_units(15), date(2024, 1, 20))
                .with_description("Cinema")
                .with_category("Fun")
                .attached_to(period),
        ]
    }

    #[test]
    fn test_default_filter_keeps_everything_in_order() {
        let txns = sample();
        let result = TransactionFilter::new().apply(&txns);
        assert_eq!(result.transactions, txns);
        assert_eq!(result.summary.count, 3);
        assert_eq!(result.summary.income, Money::from_units(100));
        assert_eq!(result.summary.outgoing, Money::from_units(55));
        assert_eq!(result.summary.certain_outgoing, Money::from_units(15));
        assert!(TransactionFilter::new().is_unrestricted());
    }

    #[test]
    fn test_pending_filter() {
        let txns = sample();
        let result = TransactionFilter::new().status(StatusFilter::Pending).apply(&txns);
        assert_eq!(result.transactions.len(), 1);
        assert_eq!(result.transactions[0].amount, Money::from_units(40));
        assert_eq!(
            result.summary,
            TransactionSummary {
                count: 1,
                income: Money::zero(),
                outgoing: Money::from_units(40),
                certain_income: Money::zero(),
                certain_outgoing: Money::zero(),
            }
        );
    }

    #[test]
    fn test_kind_and_attachment() {
        let txns = sample();
        let outgoing_attached = TransactionFilter::new()
            .kind(TransactionKind::Outgoing)
            .attachment(AttachmentFilter::Attached)
            .apply(&txns);
        assert_eq!(outgoing_attached.transactions.len(), 1);
        assert_eq!(outgoing_attached.transactions[0].description, "Cinema");

        let unattached = TransactionFilter::new()
            .attachment(AttachmentFilter::Unattached)
            .apply(&txns);
        assert_eq!(unattached.transactions.len(), 1);
        assert_eq!(unattached.transactions[0].description, "Electricity bill");
    }

    #[test]
    fn test_period_restriction() {
        let txns = sample();
        let period = txns[0].period_id.unwrap();
        let result = TransactionFilter::new().period(period).apply(&txns);
        assert_eq!(result.transactions.len(), 2);
        assert!(result.transactions.iter().all(|t| t.period_id == Some(period)));
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let txns = sample();
        let result = TransactionFilter::new()
            .date_range(date(2024, 1, 5), date(2024, 1, 10))
            .apply(&txns);
        assert_eq!(result.transactions.len(), 2);

        let open_ended = TransactionFilter::new().from_date(date(2024, 1, 10)).apply(&txns);
        assert_eq!(open_ended.transactions.len(), 2);

        let inverted = TransactionFilter::new()
            .date_range(date(2024, 1, 20), date(2024, 1, 1))
            .apply(&txns);
        assert!(inverted.transactions.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let txns = sample();
        let result = TransactionFilter::new().search("  UTIL ").apply(&txns);
        assert_eq!(result.transactions.len(), 1);

        let blank = TransactionFilter::new().search("   ");
        assert!(blank.is_unrestricted());
        assert_eq!(blank.apply(&txns).transactions.len(), 3);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let txns = sample();
        let filter = TransactionFilter::new()
            .kind(KindFilter::Outgoing)
            .search("i");
        let once = filter.apply(&txns);
        let twice = filter.apply(&once.transactions);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_summary_of_extreme_amounts_saturates() {
        let day = date(2024, 1, 1);
        let huge = Money::from_cents(i64::MAX / 2 + 1);
        let txns = vec![
            Transaction::income(huge, day),
            Transaction::income(huge, day),
            Transaction::outgoing(huge, day),
        ];

        let summary = TransactionFilter::new().apply(&txns).summary;
        assert_eq!(summary.income, Money::from_cents(i64::MAX));
        assert_eq!(summary.count, 3);
    }
}
