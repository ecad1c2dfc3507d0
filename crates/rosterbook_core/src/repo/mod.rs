//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate JSON file I/O details from service/business orchestration.
//!
//! # Invariants
//! - The persisted file, when readable and well-formed, equals the exact
//!   serialization of the in-memory sequence as of the last successful
//!   mutation.
//! - Read failures never propagate out of `open`; the store degrades to an
//!   empty sequence.

pub mod employee_repo;
