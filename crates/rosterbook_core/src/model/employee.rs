//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record shared by repository and services.
//! - Provide the single human-readable rendering for list/search output.
//!
//! # Invariants
//! - Struct field order is the persisted JSON key order:
//!   id, name, age, department, salary.
//! - The model performs no range validation; age and salary accept whatever
//!   the coercion layer produced.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier assigned to every employee record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Assigned by the repository as `len + 1`; after a non-trailing delete
/// followed by an add, an id can repeat.
pub type EmployeeId = u64;

/// Canonical employee record.
///
/// Name and department are free text with no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Repository-assigned sequence id.
    pub id: EmployeeId,
    /// Free-form display name.
    pub name: String,
    /// Coerced from text input; no range validation.
    pub age: i64,
    /// Free-form department label.
    pub department: String,
    /// Coerced from text input; no range validation.
    pub salary: f64,
}

impl Employee {
    /// Creates a record from already-coerced values.
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        age: i64,
        department: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            department: department.into(),
            salary,
        }
    }
}

impl Display for Employee {
    /// Renders the list/search line: salary to two decimals with `$` prefix.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, Department: {}, Salary: ${:.2}",
            self.id, self.name, self.age, self.department, self.salary
        )
    }
}
