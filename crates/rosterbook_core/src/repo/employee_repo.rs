//! Employee repository contract and JSON-file implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the in-memory employee sequence.
//! - Mirror every mutation to the roster file as a whole-file overwrite.
//!
//! # Invariants
//! - Records keep insertion order; deletes never reorder survivors.
//! - Ids are assigned as `len + 1` at append time. After a non-trailing
//!   delete followed by an add, an id can repeat; this matches the historic
//!   on-disk format and is deliberately preserved.
//! - A failed flush leaves the appended/removed state in memory and reports
//!   the error; in-memory and on-disk state may diverge until the next
//!   successful mutation.

use crate::model::employee::{Employee, EmployeeId};
use log::error;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for roster file reads and writes.
#[derive(Debug)]
pub enum RepoError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "roster file I/O failed: {err}"),
            Self::Json(err) => write!(f, "roster serialization failed: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RepoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Repository interface for employee CRUD operations.
pub trait EmployeeRepository {
    /// Appends a record with id `len + 1` and flushes the roster file.
    ///
    /// On flush failure the record stays appended in memory and the error
    /// is returned.
    fn add(
        &mut self,
        name: &str,
        age: i64,
        department: &str,
        salary: f64,
    ) -> RepoResult<EmployeeId>;

    /// All records in insertion order. Iterating the slice is the lazy,
    /// restartable enumeration; calling again restarts it.
    fn list(&self) -> &[Employee];

    /// Linear scan for the first record with the given id.
    ///
    /// Absence is a normal outcome, not an error.
    fn find_by_id(&self, id: EmployeeId) -> Option<&Employee>;

    /// Removes the first record with the given id and flushes.
    ///
    /// Returns `Ok(Some(id))` when a record was removed, `Ok(None)` when no
    /// record matched (no flush is attempted in that case).
    fn delete_by_id(&mut self, id: EmployeeId) -> RepoResult<Option<EmployeeId>>;
}

/// JSON-file-backed employee repository.
///
/// Owns the in-memory sequence and its persisted mirror. Single-process,
/// no locking; concurrent external access to the file is unsupported.
#[derive(Debug)]
pub struct JsonEmployeeRepository {
    path: PathBuf,
    employees: Vec<Employee>,
}

impl JsonEmployeeRepository {
    /// Opens the roster at `path`, loading whatever records it holds.
    ///
    /// # Contract
    /// - Missing file or malformed/shape-mismatched JSON loads as an empty
    ///   sequence, silently.
    /// - Any other read failure is logged and also degrades to empty.
    /// - Never returns an error to the caller.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let employees = load_roster(&path);
        Self { path, employees }
    }

    /// Path of the persisted roster file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the roster file with the full in-memory sequence,
    /// 4-space indented.
    ///
    /// Plain overwrite, no temp-file rename: a crash mid-write can corrupt
    /// the file, and the next `open` recovers to an empty sequence.
    pub fn save(&self) -> RepoResult<()> {
        match write_roster(&self.path, &self.employees) {
            Ok(()) => Ok(()),
            Err(err) => {
                error!(
                    "event=roster_save module=repo status=error path={} error={err}",
                    self.path.display()
                );
                Err(err)
            }
        }
    }
}

impl EmployeeRepository for JsonEmployeeRepository {
    fn add(
        &mut self,
        name: &str,
        age: i64,
        department: &str,
        salary: f64,
    ) -> RepoResult<EmployeeId> {
        let id = self.employees.len() as EmployeeId + 1;
        self.employees
            .push(Employee::new(id, name, age, department, salary));
        self.save()?;
        Ok(id)
    }

    fn list(&self) -> &[Employee] {
        &self.employees
    }

    fn find_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    fn delete_by_id(&mut self, id: EmployeeId) -> RepoResult<Option<EmployeeId>> {
        let Some(position) = self
            .employees
            .iter()
            .position(|employee| employee.id == id)
        else {
            return Ok(None);
        };

        self.employees.remove(position);
        self.save()?;
        Ok(Some(id))
    }
}

fn load_roster(path: &Path) -> Vec<Employee> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            error!(
                "event=roster_load module=repo status=error path={} error={err}",
                path.display()
            );
            return Vec::new();
        }
    };

    // Any shape mismatch is treated the same as an absent file.
    serde_json::from_str(&raw).unwrap_or_default()
}

fn write_roster(path: &Path, employees: &[Employee]) -> RepoResult<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    employees.serialize(&mut serializer)?;
    fs::write(path, buf)?;
    Ok(())
}
