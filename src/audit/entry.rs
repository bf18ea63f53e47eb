//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{BudgetPeriod, Transaction};

/// Kinds of audited operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
    /// A pending transaction was marked certain
    Promote,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Promote => write!(f, "PROMOTE"),
        }
    }
}

/// Kinds of audited entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    BudgetPeriod,
    Transaction,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::BudgetPeriod => write!(f, "BudgetPeriod"),
            EntityType::Transaction => write!(f, "Transaction"),
        }
    }
}

/// Something that can appear in the audit log
pub trait Audited: Serialize {
    const ENTITY_TYPE: EntityType;

    fn audit_id(&self) -> String;

    /// Short human-readable label
    fn audit_label(&self) -> String;
}

impl Audited for BudgetPeriod {
    const ENTITY_TYPE: EntityType = EntityType::BudgetPeriod;

    fn audit_id(&self) -> String {
        self.id.to_string()
    }

    fn audit_label(&self) -> String {
        self.name.clone()
    }
}

impl Audited for Transaction {
    const ENTITY_TYPE: EntityType = EntityType::Transaction;

    fn audit_id(&self) -> String {
        self.id.to_string()
    }

    fn audit_label(&self) -> String {
        format!("{} {} {}", self.date.format("%Y-%m-%d"), self.kind, self.description)
    }
}

/// A single audit log line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    pub entity_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Entity state before the operation (updates, deletes, promotions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Entity state after the operation (creates, updates, promotions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn for_entity<T: Audited>(operation: Operation, entity: &T) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type: T::ENTITY_TYPE,
            entity_id: entity.audit_id(),
            entity_name: Some(entity.audit_label()),
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    pub fn created<T: Audited>(entity: &T) -> Self {
        let mut entry = Self::for_entity(Operation::Create, entity);
        entry.after = serde_json::to_value(entity).ok();
        entry
    }

    pub fn updated<T: Audited>(before: &T, after: &T, diff_summary: Option<String>) -> Self {
        let mut entry = Self::for_entity(Operation::Update, after);
        entry.before = serde_json::to_value(before).ok();
        entry.after = serde_json::to_value(after).ok();
        entry.diff_summary = diff_summary;
        entry
    }

    pub fn deleted<T: Audited>(entity: &T) -> Self {
        let mut entry = Self::for_entity(Operation::Delete, entity);
        entry.before = serde_json::to_value(entity).ok();
        entry
    }

    pub fn promoted(before: &Transaction, after: &Transaction) -> Self {
        let mut entry = Self::for_entity(Operation::Promote, after);
        entry.before = serde_json::to_value(before).ok();
        entry.after = serde_json::to_value(after).ok();
        entry.diff_summary = Some(format!("status: {} -> {}", before.status, after.status));
        entry
    }

    /// One-line rendering, plus the change summary on a second line if present
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );
        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }
        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }
        output
    }
}
