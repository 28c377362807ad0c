//! In-memory employee roster.
//!
//! Unlike records and shortcuts, the roster is never persisted: its initial
//! population comes from the external source and edits live only for the
//! process lifetime.

pub mod model;

pub use model::Employee;

use chrono::Utc;

/// In-memory employee collection.
#[derive(Debug, Clone, Default)]
pub struct EmployeeRoster {
    employees: Vec<Employee>,
}

impl EmployeeRoster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            employees: Vec::new(),
        }
    }

    /// Creates a roster from already-shaped entries.
    #[must_use]
    pub fn from_entries(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// Every employee, in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    /// The employee with `id`, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    /// Adds an active employee with a fresh millisecond-timestamp id.
    pub fn add(&mut self, name: impl Into<String>, email: impl Into<String>) -> Employee {
        let employee = Employee::new(self.next_id(), name, email);
        self.employees.push(employee.clone());
        employee
    }

    /// Replaces name and email of the employee with `id`.
    ///
    /// Returns the updated employee, or `None` if no employee has that id.
    pub fn update(
        &mut self,
        id: &str,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Option<Employee> {
        let employee = self.find_mut(id)?;
        employee.name = name.into();
        employee.email = email.into();
        Some(employee.clone())
    }

    /// Flips the active flag of the employee with `id`.
    ///
    /// Returns the updated employee, or `None` if no employee has that id.
    pub fn toggle_active(&mut self, id: &str) -> Option<Employee> {
        let employee = self.find_mut(id)?;
        employee.active = !employee.active;
        Some(employee.clone())
    }

    /// Bumps the sent-mail counter of the employee with `id`.
    ///
    /// Returns the updated employee, or `None` if no employee has that id.
    pub fn record_sent(&mut self, id: &str) -> Option<Employee> {
        let employee = self.find_mut(id)?;
        employee.total_emails = employee.total_emails.saturating_add(1);
        Some(employee.clone())
    }

    /// Removes the employee with `id`.
    ///
    /// Returns whether a removal occurred.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.employees.len();
        self.employees.retain(|employee| employee.id != id);
        self.employees.len() != before
    }

    /// The `limit` employees with the highest counters, best first.
    ///
    /// Ties keep insertion order.
    #[must_use]
    pub fn top(&self, limit: usize) -> Vec<Employee> {
        let mut ranked = self.employees.clone();
        ranked.sort_by(|a, b| b.total_emails.cmp(&a.total_emails));
        ranked.truncate(limit);
        ranked
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|employee| employee.id == id)
    }

    fn next_id(&self) -> String {
        let base = Utc::now().timestamp_millis().to_string();
        if self.employees.iter().all(|employee| employee.id != base) {
            return base;
        }

        let mut suffix = 1;
        loop {
            let candidate = format!("{base}-{suffix}");
            if self.employees.iter().all(|employee| employee.id != candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }
}
