//! Security-set changes between two consecutive universe selections.

use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityChanges {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl SecurityChanges {
    pub fn new(added: Vec<String>, removed: Vec<String>) -> Self {
        Self { added, removed }
    }

    /// Added symbols keep `current` order, removed symbols keep `previous` order.
    pub fn between(previous: &[String], current: &[String]) -> Self {
        let before: HashSet<&str> = previous.iter().map(String::as_str).collect();
        let after: HashSet<&str> = current.iter().map(String::as_str).collect();

        let added = current
            .iter()
            .filter(|s| !before.contains(s.as_str()))
            .cloned()
            .collect();
        let removed = previous
            .iter()
            .filter(|s| !after.contains(s.as_str()))
            .cloned()
            .collect();

        Self { added, removed }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

impl fmt::Display for SecurityChanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "SecurityChanges: None");
        }
        write!(f, "SecurityChanges:")?;
        if !self.added.is_empty() {
            write!(f, " Added: {}", self.added.join(","))?;
        }
        if !self.removed.is_empty() {
            write!(f, " Removed: {}", self.removed.join(","))?;
        }
        Ok(())
    }
}
