//! Budget period service

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::filter::{PeriodFilter, PeriodOverview};
use crate::models::{BudgetPeriod, PeriodId, Transaction};
use crate::storage::BudgetStore;

use super::{period_containing, record};

/// Input for creating a budget period
#[derive(Debug, Clone)]
pub struct NewPeriod {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: String,
}

impl NewPeriod {
    pub fn new(name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            start_date,
            end_date,
            notes: String::new(),
        }
    }

    /// Set free-form notes
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Changes to apply to an existing period
#[derive(Debug, Clone, Default)]
pub struct PeriodPatch {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Service for budget period management
pub struct PeriodService<'a, S: BudgetStore + ?Sized> {
    store: &'a S,
    audit: Option<&'a AuditLogger>,
    auto_attach: bool,
}

impl<'a, S: BudgetStore + ?Sized> PeriodService<'a, S> {
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

    pub fn with_audit(mut self, logger: &'a AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Create a period and, with auto-attach on, claim the unattached
    /// transactions dated inside it
    pub fn create(&self, input: NewPeriod) -> BudgetResult<BudgetPeriod> {
        let period = BudgetPeriod::new(input.name.trim(), input.start_date, input.end_date)
            .with_notes(input.notes.trim());
        period
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let period = self.store.save_period(period)?;
        info!(id = %period.id, name = %period.name, "created budget period");

        let mut entries = vec![AuditEntry::created(&period)];
        let synced = self.sync_if_enabled(&period, &mut entries);
        record(self.audit, &entries);
        synced?;
        Ok(period)
    }

    /// Get a period by ID
    pub fn get(&self, id: PeriodId) -> BudgetResult<Option<BudgetPeriod>> {
        self.store.get_period(id)
    }

    /// Find a period by name (case-insensitive, exact)
    pub fn find(&self, name: &str) -> BudgetResult<Option<BudgetPeriod>> {
        let name = name.trim().to_lowercase();
        Ok(self
            .store
            .list_periods()?
            .into_iter()
            .find(|p| p.name.to_lowercase() == name))
    }

    /// Apply a patch; with auto-attach on, attachments follow the new range
    pub fn update(&self, id: PeriodId, patch: PeriodPatch) -> BudgetResult<BudgetPeriod> {
        let before = self
            .store
            .get_period(id)?
            .ok_or_else(|| BudgetError::period_not_found(id.to_string()))?;
        let mut period = before.clone();

        if let Some(name) = patch.name {
            period.name = name.trim().to_string();
        }
        if let Some(start) = patch.start_date {
            period.start_date = start;
        }
        if let Some(end) = patch.end_date {
            period.end_date = end;
        }
        if let Some(notes) = patch.notes {
            period.notes = notes.trim().to_string();
        }

        period
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let mut changes = Vec::new();
        if before.name != period.name {
            changes.push(format!("name: '{}' -> '{}'", before.name, period.name));
        }
        if before.start_date != period.start_date || before.end_date != period.end_date {
            changes.push(format!(
                "range: {}..{} -> {}..{}",
                before.start_date, before.end_date, period.start_date, period.end_date
            ));
        }
        if before.notes != period.notes {
            changes.push("notes changed".to_string());
        }
        if changes.is_empty() {
            debug!(id = %id, "period update with no changes");
            return Ok(before);
        }

        period.updated_at = Utc::now();
        let period = self.store.save_period(period)?;
        let summary = changes.join(", ");
        info!(id = %period.id, changes = %summary, "updated budget period");

        let mut entries = vec![AuditEntry::updated(&before, &period, Some(summary))];
        let synced = self.sync_if_enabled(&period, &mut entries);
        record(self.audit, &entries);
        synced?;
        Ok(period)
    }

    /// Delete a period and detach its transactions
    pub fn delete(&self, id: PeriodId) -> BudgetResult<BudgetPeriod> {
        let period = self
            .store
            .get_period(id)?
            .ok_or_else(|| BudgetError::period_not_found(id.to_string()))?;

        self.store.delete_period(id)?;

        let mut entries = vec![AuditEntry::deleted(&period)];
        let detached = self.detach_all(id, &mut entries);
        record(self.audit, &entries);
        let detached = detached?;

        info!(id = %id, name = %period.name, detached, "deleted budget period");
        Ok(period)
    }

    fn detach_all(&self, id: PeriodId, entries: &mut Vec<AuditEntry>) -> BudgetResult<usize> {
        let mut detached = 0;
        for txn in self.store.list_transactions()? {
            if txn.period_id == Some(id) {
                entries.push(self.relink(txn, None)?);
                detached += 1;
            }
        }
        Ok(detached)
    }

    /// Periods matching a filter, each with its totals
    pub fn list(&self, filter: &PeriodFilter, today: NaiveDate) -> BudgetResult<Vec<PeriodOverview>> {
        let periods = self.store.list_periods()?;
        let transactions = self.store.list_transactions()?;
        Ok(filter.apply(&periods, &transactions, today))
    }

    /// Point every transaction at the first period containing its date.
    ///
    /// Links to periods that no longer exist or no longer contain the date
    /// are cleared. Returns the number of transactions changed.
    pub fn recalculate_attachments(&self) -> BudgetResult<usize> {
        let mut entries = Vec::new();
        let changed = self.reassign_all(&mut entries);
        record(self.audit, &entries);
        let changed = changed?;

        info!(changed, "recalculated period attachments");
        Ok(changed)
    }

    fn reassign_all(&self, entries: &mut Vec<AuditEntry>) -> BudgetResult<usize> {
        let periods = self.store.list_periods()?;
        let mut changed = 0;
        for txn in self.store.list_transactions()? {
            let target = period_containing(&periods, txn.date);
            if txn.period_id != target {
                entries.push(self.relink(txn, target)?);
                changed += 1;
            }
        }
        Ok(changed)
    }

    fn sync_if_enabled(
        &self,
        period: &BudgetPeriod,
        entries: &mut Vec<AuditEntry>,
    ) -> BudgetResult<usize> {
        if self.auto_attach {
            self.sync_attachments(period, entries)
        } else {
            Ok(0)
        }
    }

    /// Attach unattached transactions inside the period and release the
    /// ones that fell outside its range
    fn sync_attachments(
        &self,
        period: &BudgetPeriod,
        entries: &mut Vec<AuditEntry>,
    ) -> BudgetResult<usize> {
        let mut changed = 0;
        for txn in self.store.list_transactions()? {
            let inside = period.contains(txn.date);
            let target = match txn.period_id {
                None if inside => Some(period.id),
                Some(pid) if pid == period.id && !inside => None,
                current => current,
            };
            if target != txn.period_id {
                entries.push(self.relink(txn, target)?);
                changed += 1;
            }
        }
        if changed > 0 {
            debug!(id = %period.id, changed, "synced period attachments");
        }
        Ok(changed)
    }

    /// Save the new link and return the audit entry describing it
    fn relink(
        &self,
        mut txn: Transaction,
        period_id: Option<PeriodId>,
    ) -> BudgetResult<AuditEntry> {
        let before = txn.clone();
        txn.period_id = period_id;
        txn.updated_at = Utc::now();
        let txn = self.store.save_transaction(txn)?;
        Ok(AuditEntry::updated(
            &before,
            &txn,
            Some("period changed".to_string()),
        ))
    }
}
