//! Domain model for employee records.
//!
//! # Responsibility
//! - Define the canonical record persisted to and loaded from the roster file.
//! - Own the single display rendering used by list and search output.
//!
//! # Invariants
//! - Field order on `Employee` is the stable key order of the persisted JSON.
//! - Ids are assigned by the repository, never by the model.

pub mod employee;
