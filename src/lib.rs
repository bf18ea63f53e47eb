//! budget-tracker - budget periods with income, outgoing and pending transactions
//!
//! This library provides the core of a personal budget tracker: named budget
//! periods, transactions that may still be pending, and the filtering and
//! table projections a user interface needs to present them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (periods, transactions, money, ids)
//! - `storage`: The `BudgetStore` contract and an in-memory store
//! - `filter`: Pure filtering and aggregation over snapshots
//! - `services`: Validation, period attachment and promotion of pending items
//! - `table`: Sortable table models and text rendering
//! - `pages`: View state for the transactions, periods and pending pages
//! - `audit`: Audit logging system
//! - `logging`: `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::{BudgetPaths, Settings};
//! use budget_tracker::services::{NewTransaction, TransactionService};
//! use budget_tracker::storage::MemoryStore;
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = MemoryStore::new();
//! let service = TransactionService::new(&store).with_settings(&settings);
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod pages;
pub mod services;
pub mod storage;
pub mod table;

pub use error::{BudgetError, BudgetResult};
