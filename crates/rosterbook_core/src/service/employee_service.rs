//! Employee use-case service.
//!
//! # Responsibility
//! - Coerce text input (age, salary, id) into typed values.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Coercion failures abort the operation with no side effects and are
//!   logged to the diagnostic log.
//! - Callers can distinguish coercion from persistence failures through
//!   `ServiceError`; not-found is never an error.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoError};
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Text input that failed to coerce into the required numeric type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionError {
    /// Age text did not parse as an integer, or salary text as a float.
    AgeOrSalary,
    /// Id text did not parse as an integer.
    EmployeeId,
}

impl Display for CoercionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AgeOrSalary => write!(f, "Age must be an integer and salary a float."),
            Self::EmployeeId => write!(f, "Employee ID must be an integer."),
        }
    }
}

impl Error for CoercionError {}

/// Tagged outcome for employee operations.
#[derive(Debug)]
pub enum ServiceError {
    Coercion(CoercionError),
    Persistence(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coercion(err) => write!(f, "{err}"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Coercion(err) => Some(err),
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<CoercionError> for ServiceError {
    fn from(value: CoercionError) -> Self {
        Self::Coercion(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Persistence(value)
    }
}

/// Use-case service wrapper for employee CRUD operations.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds an employee from free-text shell input.
    ///
    /// # Contract
    /// - `age_text` must parse as an integer and `salary_text` as a float;
    ///   either failure rejects the whole input and appends nothing.
    /// - Returns the assigned id on success.
    pub fn add_employee(
        &mut self,
        name: &str,
        age_text: &str,
        department: &str,
        salary_text: &str,
    ) -> Result<EmployeeId, ServiceError> {
        let age = coerce_age(age_text)?;
        let salary = coerce_salary(salary_text)?;
        Ok(self.repo.add(name, age, department, salary)?)
    }

    /// All employees in insertion order.
    pub fn list_employees(&self) -> &[Employee] {
        self.repo.list()
    }

    /// Finds an employee by id text. `Ok(None)` is the normal not-found
    /// outcome.
    pub fn find_employee(&self, id_text: &str) -> Result<Option<&Employee>, ServiceError> {
        let id = coerce_id(id_text)?;
        Ok(self.repo.find_by_id(id))
    }

    /// Deletes an employee by id text.
    ///
    /// Returns `Ok(Some(id))` when a record was removed, `Ok(None)` when no
    /// record matched.
    pub fn delete_employee(&mut self, id_text: &str) -> Result<Option<EmployeeId>, ServiceError> {
        let id = coerce_id(id_text)?;
        Ok(self.repo.delete_by_id(id)?)
    }
}

fn coerce_age(text: &str) -> Result<i64, CoercionError> {
    text.trim().parse().map_err(|_| {
        error!("event=coerce module=service status=error field=age input={text}");
        CoercionError::AgeOrSalary
    })
}

fn coerce_salary(text: &str) -> Result<f64, CoercionError> {
    text.trim().parse().map_err(|_| {
        error!("event=coerce module=service status=error field=salary input={text}");
        CoercionError::AgeOrSalary
    })
}

fn coerce_id(text: &str) -> Result<EmployeeId, CoercionError> {
    text.trim().parse().map_err(|_| {
        error!("event=coerce module=service status=error field=id input={text}");
        CoercionError::EmployeeId
    })
}

#[cfg(test)]
mod tests {
    use super::{coerce_age, coerce_id, coerce_salary, CoercionError};

    #[test]
    fn coerce_age_accepts_integers_and_trims() {
        assert_eq!(coerce_age(" 30 "), Ok(30));
        assert_eq!(coerce_age("-1"), Ok(-1));
    }

    #[test]
    fn coerce_age_rejects_floats_and_words() {
        assert_eq!(coerce_age("30.5"), Err(CoercionError::AgeOrSalary));
        assert_eq!(coerce_age("thirty"), Err(CoercionError::AgeOrSalary));
    }

    #[test]
    fn coerce_salary_accepts_integers_and_floats() {
        assert_eq!(coerce_salary("40000"), Ok(40000.0));
        assert_eq!(coerce_salary("50000.5"), Ok(50000.5));
    }

    #[test]
    fn coerce_id_rejects_non_integers() {
        assert_eq!(coerce_id("abc"), Err(CoercionError::EmployeeId));
        assert_eq!(coerce_id("1.5"), Err(CoercionError::EmployeeId));
        assert_eq!(coerce_id("2"), Ok(2));
    }
}
