//! Interactive shell for the rosterbook employee record keeper.
//!
//! # Responsibility
//! - Present the numbered menu loop and collect free-text field input.
//! - Dispatch to `rosterbook_core` and render operation outcomes.
//!
//! # Invariants
//! - No operation failure is fatal; the loop always regains control.
//! - The loop terminates only via the explicit exit choice or end of input.

use rosterbook_core::{
    default_log_level, init_logging, EmployeeService, JsonEmployeeRepository, ServiceError,
};
use std::io::{self, BufRead, Lines, StdinLock, Write};

const ROSTER_FILE: &str = "employees.json";

fn main() {
    bootstrap_logging();

    let repo = JsonEmployeeRepository::open(ROSTER_FILE);
    let mut service = EmployeeService::new(repo);

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut input, "Enter your choice: ") else {
            break;
        };

        match choice.trim() {
            "1" => {
                if add_employee(&mut service, &mut input).is_none() {
                    break;
                }
            }
            "2" => display_employees(&service),
            "3" => {
                if search_employee(&service, &mut input).is_none() {
                    break;
                }
            }
            "4" => {
                if delete_employee(&mut service, &mut input).is_none() {
                    break;
                }
            }
            "5" => {
                println!("Exiting Employee Management System. Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please enter a number between 1 and 5."),
        }
    }
}

/// Best-effort logging init; a failed bootstrap must not keep the shell
/// from starting.
fn bootstrap_logging() {
    let log_dir = std::env::current_dir()
        .unwrap_or_else(|_| std::env::temp_dir())
        .join("logs");
    let Some(log_dir) = log_dir.to_str().map(str::to_string) else {
        eprintln!("warning: log directory path is not valid UTF-8; logging disabled");
        return;
    };
    if let Err(err) = init_logging(default_log_level(), &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn print_menu() {
    println!("\nEmployee Management System");
    println!("1. Add Employee");
    println!("2. Display Employees");
    println!("3. Search Employee by ID");
    println!("4. Delete Employee by ID");
    println!("5. Exit");
}

/// Prints `label`, then reads one line. Returns `None` on closed stdin or a
/// read error, which the caller treats as exit.
fn prompt(input: &mut Lines<StdinLock<'_>>, label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();
    match input.next() {
        Some(Ok(line)) => Some(line),
        Some(Err(_)) | None => None,
    }
}

fn add_employee(
    service: &mut EmployeeService<JsonEmployeeRepository>,
    input: &mut Lines<StdinLock<'_>>,
) -> Option<()> {
    let name = prompt(input, "Enter name: ")?;
    let age = prompt(input, "Enter age: ")?;
    let department = prompt(input, "Enter department: ")?;
    let salary = prompt(input, "Enter salary: ")?;

    match service.add_employee(name.trim(), &age, department.trim(), &salary) {
        Ok(_) => println!("Employee {} added successfully!", name.trim()),
        Err(ServiceError::Coercion(err)) => println!("Error: {err}"),
        Err(ServiceError::Persistence(_)) => {
            println!("An error occurred while adding the employee.");
        }
    }
    Some(())
}

fn display_employees(service: &EmployeeService<JsonEmployeeRepository>) {
    let employees = service.list_employees();
    if employees.is_empty() {
        println!("No employees found.");
        return;
    }
    println!("\nEmployee List:");
    for employee in employees {
        println!("{employee}");
    }
}

fn search_employee(
    service: &EmployeeService<JsonEmployeeRepository>,
    input: &mut Lines<StdinLock<'_>>,
) -> Option<()> {
    let id = prompt(input, "Enter employee ID: ")?;

    match service.find_employee(&id) {
        Ok(Some(employee)) => println!("\nEmployee Found: {employee}"),
        Ok(None) => println!("Employee not found."),
        Err(ServiceError::Coercion(err)) => println!("Error: {err}"),
        Err(ServiceError::Persistence(_)) => {
            println!("An error occurred while searching for the employee.");
        }
    }
    Some(())
}

fn delete_employee(
    service: &mut EmployeeService<JsonEmployeeRepository>,
    input: &mut Lines<StdinLock<'_>>,
) -> Option<()> {
    let id = prompt(input, "Enter employee ID: ")?;

    match service.delete_employee(&id) {
        Ok(Some(deleted_id)) => println!("Employee ID {deleted_id} deleted successfully!"),
        Ok(None) => println!("Employee not found."),
        Err(ServiceError::Coercion(err)) => println!("Error: {err}"),
        Err(ServiceError::Persistence(_)) => {
            println!("An error occurred while deleting the employee.");
        }
    }
    Some(())
}
