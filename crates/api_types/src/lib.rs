//! Wire shapes for the hucha API.
//!
//! One module per domain, each with the three shapes a CRUD resource
//! needs:
//!
//! - `*Create`: full payload accepted by `POST`.
//! - `*Update`: all-optional payload accepted by `PATCH`; an absent
//!   field means "leave unchanged".
//! - `*Read`: the stored record as returned to clients.
//!
//! Shapes validate themselves structurally via [`validate::Validate`];
//! nothing here performs I/O. Referential (foreign-key) checks belong
//! to the ledger crate.

pub mod account;
pub mod bank;
pub mod category;
pub mod enums;
pub mod expense;
pub mod household;
pub mod income;
pub mod investment;
pub mod saving;
pub mod source;
pub mod summary;
pub mod user;
pub mod validate;
