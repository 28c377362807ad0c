//! Employee roster data model.

use serde::{Deserialize, Serialize};

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Informational sent-mail counter, not derived from the record
    /// collection.
    pub total_emails: u32,
    /// Whether the employee is active.
    pub active: bool,
}

impl Employee {
    /// Creates an active employee with a zeroed counter.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            total_emails: 0,
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let employee = Employee::new("1", "Maria Silva", "maria@empresa.com");

        assert!(employee.active);
        assert_eq!(employee.total_emails, 0);
    }
}
