//! Core use-case services.
//!
//! # Responsibility
//! - Coerce free-text shell input into typed values.
//! - Orchestrate repository calls into use-case level APIs.

pub mod employee_service;
