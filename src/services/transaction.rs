//! Transaction service
//!
//! CRUD for transactions, period attachment on save, batch deletion and the
//! "mark as certain" promotion of pending transactions.

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, Utc};
use tracing::{debug, error, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::filter::{FilteredTransactions, StatusFilter, TransactionFilter};
use crate::models::{
    BudgetPeriod, Certainty, Money, PeriodId, Transaction, TransactionId, TransactionKind,
};
use crate::storage::BudgetStore;

use super::{period_containing, record, ItemFailure};

/// Input for creating a transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: Money,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub status: Certainty,
    /// Explicit period; `None` lets auto-attachment decide
    pub period_id: Option<PeriodId>,
}

impl NewTransaction {
    pub fn new(kind: TransactionKind, amount: Money, date: NaiveDate) -> Self {
        Self {
            kind,
            amount,
            date,
            description: String::new(),
            category: String::new(),
            status: Certainty::Certain,
            period_id: None,
        }
    }

    /// Set the description; surrounding whitespace is trimmed on save
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category; surrounding whitespace is trimmed on save
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Record as pending instead of certain
    pub fn pending(mut self) -> Self {
        self.status = Certainty::Pending;
        self
    }

    /// Attach to this period; it must exist when the transaction is created
    pub fn period(mut self, period_id: PeriodId) -> Self {
        self.period_id = Some(period_id);
        self
    }
}

/// Changes to apply to an existing transaction; `None` fields are left alone
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub kind: Option<TransactionKind>,
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<Certainty>,
    /// `Some(None)` detaches, `Some(Some(id))` attaches to `id`
    pub period_id: Option<Option<PeriodId>>,
}

/// Outcome of [`TransactionService::mark_certain`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromotionReport {
    /// Flipped from pending to certain
    pub promoted: Vec<TransactionId>,
    /// Already certain; nothing was written
    pub unchanged: Vec<TransactionId>,
    /// Could not be promoted, typically because they were deleted
    pub failures: Vec<ItemFailure>,
}

impl PromotionReport {
    /// True when every requested id was either promoted or already certain
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcome of [`TransactionService::delete_many`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionReport {
    pub deleted: Vec<TransactionId>,
    pub failures: Vec<ItemFailure>,
}

/// Service for transaction management
pub struct TransactionService<'a, S: BudgetStore + ?Sized> {
    store: &'a S,
    audit: Option<&'a AuditLogger>,
    auto_attach: bool,
}

impl<'a, S: BudgetStore + ?Sized> TransactionService<'a, S> {
    /// Create a service with default settings and no audit log
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            audit: None,
            auto_attach: Settings::default().auto_attach,
        }
    }

    /// Take `auto_attach` from the user settings
    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.auto_attach = settings.auto_attach;
        self
    }

    /// Append every mutation to this audit log
    pub fn with_audit(mut self, logger: &'a AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Create a new transaction
    pub fn create(&self, input: NewTransaction) -> BudgetResult<Transaction> {
        let mut txn = Transaction::new(input.kind, input.amount, input.date);
        txn.description = input.description.trim().to_string();
        txn.category = input.category.trim().to_string();
        txn.status = input.status;

        txn.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let periods = self.store.list_periods()?;
        txn.period_id = match input.period_id {
            Some(id) => Some(require_period(&periods, id)?),
            None if self.auto_attach => period_containing(&periods, txn.date),
            None => None,
        };

        let txn = self.store.save_transaction(txn)?;
        info!(
            id = %txn.id,
            kind = %txn.kind,
            amount = %txn.amount,
            status = %txn.status,
            attached = txn.is_attached(),
            "created transaction"
        );
        record(self.audit, &[AuditEntry::created(&txn)]);
        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> BudgetResult<Option<Transaction>> {
        self.store.get_transaction(id)
    }

    /// Apply a patch to an existing transaction
    pub fn update(&self, id: TransactionId, patch: TransactionPatch) -> BudgetResult<Transaction> {
        let before = self
            .store
            .get_transaction(id)?
            .ok_or_else(|| BudgetError::transaction_not_found(id.to_string()))?;
        let mut txn = before.clone();

        if let Some(kind) = patch.kind {
            txn.kind = kind;
        }
        if let Some(amount) = patch.amount {
            txn.amount = amount;
        }
        if let Some(date) = patch.date {
            txn.date = date;
        }
        if let Some(description) = patch.description {
            txn.description = description.trim().to_string();
        }
        if let Some(category) = patch.category {
            txn.category = category.trim().to_string();
        }
        if let Some(status) = patch.status {
            txn.status = status;
        }

        txn.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let periods = self.store.list_periods()?;
        match patch.period_id {
            Some(Some(period_id)) => txn.period_id = Some(require_period(&periods, period_id)?),
            Some(None) => txn.period_id = None,
            None if self.auto_attach && txn.date != before.date => {
                let still_inside = txn
                    .period_id
                    .and_then(|pid| periods.iter().find(|p| p.id == pid))
                    .is_some_and(|p| p.contains(txn.date));
                if !still_inside {
                    txn.period_id = period_containing(&periods, txn.date);
                }
            }
            None => {}
        }

        let changes = describe_changes(&before, &txn);
        if changes.is_none() {
            debug!(id = %id, "transaction update with no changes");
            return Ok(before);
        }

        txn.updated_at = Utc::now();
        let txn = self.store.save_transaction(txn)?;
        info!(id = %txn.id, changes = changes.as_deref().unwrap_or(""), "updated transaction");
        record(self.audit, &[AuditEntry::updated(&before, &txn, changes)]);
        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> BudgetResult<Transaction> {
        let txn = self.remove(id)?;
        record(self.audit, &[AuditEntry::deleted(&txn)]);
        Ok(txn)
    }

    /// Delete several transactions. Missing ones are reported, not fatal.
    pub fn delete_many(&self, ids: &[TransactionId]) -> BudgetResult<DeletionReport> {
        let mut report = DeletionReport::default();
        let mut entries = Vec::new();
        for id in unique(ids) {
            match self.remove(id) {
                Ok(txn) => {
                    entries.push(AuditEntry::deleted(&txn));
                    report.deleted.push(id);
                }
                Err(err) if err.is_not_found() => {
                    warn!(id = %id, "skipping deletion of missing transaction");
                    report.failures.push(ItemFailure { id, error: err });
                }
                Err(err) => {
                    error!(id = %id, error = %err, "batch deletion aborted");
                    record(self.audit, &entries);
                    return Err(err);
                }
            }
        }
        record(self.audit, &entries);
        Ok(report)
    }

    fn remove(&self, id: TransactionId) -> BudgetResult<Transaction> {
        let txn = self
            .store
            .get_transaction(id)?
            .ok_or_else(|| BudgetError::transaction_not_found(id.to_string()))?;

        self.store.delete_transaction(id)?;
        info!(id = %id, "deleted transaction");
        Ok(txn)
    }

    /// Flip pending transactions to certain.
    ///
    /// Already-certain transactions are left untouched. Ids that no longer
    /// exist are collected in the report and the rest of the batch still
    /// runs; any other store error aborts the batch. Audit entries for the
    /// promotions that did happen are written either way.
    pub fn mark_certain(&self, ids: &[TransactionId]) -> BudgetResult<PromotionReport> {
        let snapshot: HashMap<TransactionId, Transaction> = self
            .store
            .list_transactions()?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        let mut report = PromotionReport::default();
        let mut entries = Vec::new();
        for id in unique(ids) {
            let Some(current) = snapshot.get(&id) else {
                warn!(id = %id, "cannot mark missing transaction as certain");
                report.failures.push(ItemFailure {
                    id,
                    error: BudgetError::transaction_not_found(id.to_string()),
                });
                continue;
            };

            if !current.is_pending() {
                debug!(id = %id, "transaction already certain");
                report.unchanged.push(id);
                continue;
            }

            match self.store.set_transaction_certainty(id, Certainty::Certain) {
                Ok(updated) => {
                    entries.push(AuditEntry::promoted(current, &updated));
                    report.promoted.push(id);
                }
                Err(err) if err.is_not_found() => {
                    warn!(id = %id, "transaction deleted before it could be marked certain");
                    report.failures.push(ItemFailure { id, error: err });
                }
                Err(err) => {
                    error!(id = %id, error = %err, "marking transactions certain aborted");
                    record(self.audit, &entries);
                    return Err(err);
                }
            }
        }

        record(self.audit, &entries);
        info!(
            promoted = report.promoted.len(),
            unchanged = report.unchanged.len(),
            failed = report.failures.len(),
            "marked transactions certain"
        );
        Ok(report)
    }

    /// List transactions matching a filter, with visible totals
    pub fn list(&self, filter: &TransactionFilter) -> BudgetResult<FilteredTransactions> {
        let transactions = self.store.list_transactions()?;
        Ok(filter.apply(&transactions))
    }

    /// Pending transactions of one kind
    pub fn pending(&self, kind: TransactionKind) -> BudgetResult<Vec<Transaction>> {
        let filter = TransactionFilter::new()
            .kind(kind)
            .status(StatusFilter::Pending);
        Ok(self.list(&filter)?.transactions)
    }

    /// Count transactions
    pub fn count(&self) -> BudgetResult<usize> {
        Ok(self.store.list_transactions()?.len())
    }
}

fn require_period(periods: &[BudgetPeriod], id: PeriodId) -> BudgetResult<PeriodId> {
    periods
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.id)
        .ok_or_else(|| BudgetError::period_not_found(id.to_string()))
}

/// Input order, duplicates removed
fn unique(ids: &[TransactionId]) -> Vec<TransactionId> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

fn describe_changes(before: &Transaction, after: &Transaction) -> Option<String> {
    let mut changes = Vec::new();
    if before.kind != after.kind {
        changes.push(format!("type: {} -> {}", before.kind, after.kind));
    }
    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }
    if before.date != after.date {
        changes.push(format!("date: {} -> {}", before.date, after.date));
    }
    if before.description != after.description {
        changes.push(format!(
            "description: '{}' -> '{}'",
            before.description, after.description
        ));
    }
    if before.category != after.category {
        changes.push(format!("category: '{}' -> '{}'", before.category, after.category));
    }
    if before.status != after.status {
        changes.push(format!("status: {} -> {}", before.status, after.status));
    }
    if before.period_id != after.period_id {
        changes.push("period changed".to_string());
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_january() -> (MemoryStore, BudgetPeriod) {
        let store = MemoryStore::new();
        let january = BudgetPeriod::new("January", date(2024, 1, 1), date(2024, 1, 31));
        store.save_period(january.clone()).unwrap();
        (store, january)
    }

    /// Store whose writes fail, for exercising persistence errors
    struct ReadOnlyStore(MemoryStore);

    impl BudgetStore for ReadOnlyStore {
        fn list_periods(&self) -> BudgetResult<Vec<BudgetPeriod>> {
            self.0.list_periods()
        }
        fn list_transactions(&self) -> BudgetResult<Vec<Transaction>> {
            self.0.list_transactions()
        }
        fn save_period(&self, _: BudgetPeriod) -> BudgetResult<BudgetPeriod> {
            Err(BudgetError::Persistence("read-only".into()))
        }
        fn save_transaction(&self, _: Transaction) -> BudgetResult<Transaction> {
            Err(BudgetError::Persistence("read-only".into()))
        }
        fn delete_period(&self, _: PeriodId) -> BudgetResult<()> {
            Err(BudgetError::Persistence("read-only".into()))
        }
        fn delete_transaction(&self, _: TransactionId) -> BudgetResult<()> {
            Err(BudgetError::Persistence("read-only".into()))
        }
        fn set_transaction_certainty(
            &self,
            _: TransactionId,
            _: Certainty,
        ) -> BudgetResult<Transaction> {
            Err(BudgetError::Persistence("read-only".into()))
        }
    }

    /// Store where one transaction is deleted between the snapshot and the
    /// certainty update
    struct VanishingStore {
        inner: MemoryStore,
        vanishing: TransactionId,
    }

    impl BudgetStore for VanishingStore {
        fn list_periods(&self) -> BudgetResult<Vec<BudgetPeriod>> {
            self.inner.list_periods()
        }
        fn list_transactions(&self) -> BudgetResult<Vec<Transaction>> {
            self.inner.list_transactions()
        }
        fn save_period(&self, period: BudgetPeriod) -> BudgetResult<BudgetPeriod> {
            self.inner.save_period(period)
        }
        fn save_transaction(&self, transaction: Transaction) -> BudgetResult<Transaction> {
            self.inner.save_transaction(transaction)
        }
        fn delete_period(&self, id: PeriodId) -> BudgetResult<()> {
            self.inner.delete_period(id)
        }
        fn delete_transaction(&self, id: TransactionId) -> BudgetResult<()> {
            self.inner.delete_transaction(id)
        }
        fn set_transaction_certainty(
            &self,
            id: TransactionId,
            certainty: Certainty,
        ) -> BudgetResult<Transaction> {
            if id == self.vanishing {
                self.inner.delete_transaction(id)?;
            }
            self.inner.set_transaction_certainty(id, certainty)
        }
    }

    fn pending_outgoing(units: i64) -> Transaction {
        Transaction::outgoing(Money::from_units(units), date(2024, 1, 10))
            .with_status(Certainty::Pending)
    }

    /// A logger pointed at a directory, so every write fails
    fn unwritable_logger(temp_dir: &TempDir) -> AuditLogger {
        AuditLogger::new(temp_dir.path())
    }

    #[test]
    fn test_create_auto_attaches_by_date() {
        let (store, january) = store_with_january();
        let service = TransactionService::new(&store);

        let inside = service
            .create(
                NewTransaction::new(TransactionKind::Income, Money::from_units(100), date(2024, 1, 31))
                    .description("  Salary  "),
            )
            .unwrap();
        assert_eq!(inside.period_id, Some(january.id));
        assert_eq!(inside.description, "Salary");

        let outside = service
            .create(NewTransaction::new(
                TransactionKind::Outgoing,
                Money::from_units(5),
                date(2024, 2, 1),
            ))
            .unwrap();
        assert_eq!(outside.period_id, None);
    }

    #[test]
    fn test_create_without_auto_attach() {
        let (store, _) = store_with_january();
        let settings = Settings {
            auto_attach: false,
            ..Settings::default()
        };
        let service = TransactionService::new(&store).with_settings(&settings);

        let txn = service
            .create(NewTransaction::new(
                TransactionKind::Income,
                Money::from_units(1),
                date(2024, 1, 10),
            ))
            .unwrap();
        assert!(!txn.is_attached());
    }

    #[test]
    fn test_create_rejects_negative_amount_without_saving() {
        let (store, _) = store_with_january();
        let service = TransactionService::new(&store);

        let err = service
            .create(NewTransaction::new(
                TransactionKind::Outgoing,
                Money::from_cents(-1),
                date(2024, 1, 10),
            ))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.transaction_count().unwrap(), 0);
    }

    #[test]
    fn test_create_with_unknown_period_is_not_found() {
        let (store, _) = store_with_january();
        let service = TransactionService::new(&store);

        let err = service
            .create(
                NewTransaction::new(TransactionKind::Income, Money::from_units(1), date(2024, 1, 10))
                    .period(PeriodId::new()),
            )
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_moves_period_when_date_leaves_it() {
        let (store, january) = store_with_january();
        let service = TransactionService::new(&store);
        let txn = service
            .create(NewTransaction::new(
                TransactionKind::Outgoing,
                Money::from_units(20),
                date(2024, 1, 15),
            ))
            .unwrap();
        assert_eq!(txn.period_id, Some(january.id));

        let moved = service
            .update(
                txn.id,
                TransactionPatch {
                    date: Some(date(2024, 3, 1)),
                    ..TransactionPatch::default()
                },
            )
            .unwrap();
        assert_eq!(moved.period_id, None);

        let detached_explicitly = service
            .update(
                txn.id,
                TransactionPatch {
                    date: Some(date(2024, 1, 2)),
                    period_id: Some(None),
                    ..TransactionPatch::default()
                },
            )
            .unwrap();
        assert_eq!(detached_explicitly.period_id, None);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let store = MemoryStore::new();
        let service = TransactionService::new(&store);
        let err = service
            .update(TransactionId::new(), TransactionPatch::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_mark_certain_collects_missing_ids() {
        let (store, _) = store_with_january();
        let service = TransactionService::new(&store);
        let pending = service
            .create(
                NewTransaction::new(TransactionKind::Outgoing, Money::from_units(40), date(2024, 1, 10))
                    .pending(),
            )
            .unwrap();
        let certain = service
            .create(NewTransaction::new(
                TransactionKind::Income,
                Money::from_units(100),
                date(2024, 1, 5),
            ))
            .unwrap();
        let gone = TransactionId::new();

        let report = service
            .mark_certain(&[gone, pending.id, certain.id, pending.id])
            .unwrap();

        assert_eq!(report.promoted, vec![pending.id]);
        assert_eq!(report.unchanged, vec![certain.id]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].id, gone);
        assert!(report.failures[0].error.is_not_found());
        assert!(!report.is_complete());

        let again = service.mark_certain(&[pending.id]).unwrap();
        assert!(again.promoted.is_empty());
        assert_eq!(again.unchanged, vec![pending.id]);
        assert!(again.is_complete());
    }

    #[test]
    fn test_mark_certain_surfaces_persistence_errors() {
        let pending = Transaction::outgoing(Money::from_units(40), date(2024, 1, 10))
            .with_status(Certainty::Pending);
        let store = ReadOnlyStore(MemoryStore::with_data(Vec::new(), vec![pending.clone()]));
        let service = TransactionService::new(&store);

        let err = service.mark_certain(&[pending.id]).unwrap_err();
        assert!(err.is_persistence());
        assert!(store.0.get_transaction(pending.id).unwrap().unwrap().is_pending());
    }

    #[test]
    fn test_delete_many_reports_missing() {
        let (store, _) = store_with_january();
        let service = TransactionService::new(&store);
        let txn = service
            .create(NewTransaction::new(
                TransactionKind::Income,
                Money::from_units(1),
                date(2024, 1, 1),
            ))
            .unwrap();
        let gone = TransactionId::new();

        let report = service.delete_many(&[txn.id, gone]).unwrap();
        assert_eq!(report.deleted, vec![txn.id]);
        assert_eq!(report.failures[0].id, gone);
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_pending_by_kind() {
        let (store, _) = store_with_january();
        let service = TransactionService::new(&store);
        for (kind, pending) in [
            (TransactionKind::Income, true),
            (TransactionKind::Income, false),
            (TransactionKind::Outgoing, true),
        ] {
            let mut input = NewTransaction::new(kind, Money::from_units(1), date(2024, 1, 3));
            if pending {
                input = input.pending();
            }
            service.create(input).unwrap();
        }

        assert_eq!(service.pending(TransactionKind::Income).unwrap().len(), 1);
        assert_eq!(service.pending(TransactionKind::Outgoing).unwrap().len(), 1);
    }

    #[test]
    fn test_mutations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let (store, _) = store_with_january();
        let service = TransactionService::new(&store).with_audit(&logger);

        let txn = service
            .create(
                NewTransaction::new(TransactionKind::Outgoing, Money::from_units(9), date(2024, 1, 9))
                    .pending(),
            )
            .unwrap();
        service.mark_certain(&[txn.id]).unwrap();
        service
            .update(
                txn.id,
                TransactionPatch {
                    category: Some("Food".into()),
                    ..TransactionPatch::default()
                },
            )
            .unwrap();
        service.delete(txn.id).unwrap();

        let operations: Vec<_> = logger
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(
            operations,
            vec![
                Operation::Create,
                Operation::Promote,
                Operation::Update,
                Operation::Delete
            ]
        );
    }

    #[test]
    fn test_mark_certain_reports_concurrently_deleted_and_continues() {
        let first = pending_outgoing(10);
        let gone = pending_outgoing(20);
        let last = pending_outgoing(30);
        let store = VanishingStore {
            inner: MemoryStore::with_data(
                Vec::new(),
                vec![first.clone(), gone.clone(), last.clone()],
            ),
            vanishing: gone.id,
        };
        let service = TransactionService::new(&store);

        let report = service.mark_certain(&[first.id, gone.id, last.id]).unwrap();

        assert_eq!(report.promoted, vec![first.id, last.id]);
        assert!(report.unchanged.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].id, gone.id);
        assert!(report.failures[0].error.is_not_found());
        assert!(!store.inner.get_transaction(last.id).unwrap().unwrap().is_pending());
    }

    #[test]
    fn test_mark_certain_finishes_batch_when_audit_log_is_unwritable() {
        let temp_dir = TempDir::new().unwrap();
        let logger = unwritable_logger(&temp_dir);
        let a = pending_outgoing(10);
        let b = pending_outgoing(20);
        let store = MemoryStore::with_data(Vec::new(), vec![a.clone(), b.clone()]);
        let service = TransactionService::new(&store).with_audit(&logger);

        let report = service.mark_certain(&[a.id, b.id]).unwrap();

        assert_eq!(report.promoted, vec![a.id, b.id]);
        for id in [a.id, b.id] {
            assert!(!store.get_transaction(id).unwrap().unwrap().is_pending());
        }
    }

    #[test]
    fn test_writes_succeed_when_audit_log_is_unwritable() {
        let temp_dir = TempDir::new().unwrap();
        let logger = unwritable_logger(&temp_dir);
        let (store, january) = store_with_january();
        let service = TransactionService::new(&store).with_audit(&logger);

        let txn = service
            .create(NewTransaction::new(
                TransactionKind::Income,
                Money::from_units(5),
                date(2024, 1, 3),
            ))
            .unwrap();
        assert_eq!(txn.period_id, Some(january.id));

        let updated = service
            .update(
                txn.id,
                TransactionPatch {
                    amount: Some(Money::from_units(6)),
                    ..TransactionPatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.amount, Money::from_units(6));

        let other = store.save_transaction(pending_outgoing(1)).unwrap();
        let report = service.delete_many(&[txn.id, other.id]).unwrap();
        assert_eq!(report.deleted, vec![txn.id, other.id]);
        assert_eq!(store.transaction_count().unwrap(), 0);
    }
}
