//! Persistence engine of the ledger.
//!
//! One generic [`Repository`]/[`Service`] pair implements CRUD for
//! every entity; each entity module contributes a sea-orm model plus an
//! [`EntityDescriptor`] naming its wire shapes, foreign keys and
//! filterable columns. The capability traits in [`crud`] keep read,
//! search and each write concern separately nameable.

pub mod crud;
pub mod descriptor;
pub mod error;
pub mod fk;
pub mod repository;
pub mod service;

pub mod accounts;
pub mod banks;
pub mod expense_categories;
pub mod expenses;
pub mod financial_summaries;
pub mod household_members;
pub mod households;
pub mod income_categories;
pub mod incomes;
pub mod investment_categories;
pub mod investment_logs;
pub mod investments;
pub mod saving_logs;
pub mod savings;
pub mod sources;
pub mod users;

pub use crud::{Creator, Crud, Deleter, Filters, Reader, Searcher, Updater};
pub use descriptor::{Change, EntityDescriptor, ModelOf};
pub use error::LedgerError;
pub use fk::{validate_foreign_keys, FkCheck, FkTarget};
pub use repository::Repository;
pub use service::Service;
