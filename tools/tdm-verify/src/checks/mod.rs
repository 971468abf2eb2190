pub mod content;
pub mod exists;
pub mod health;
pub mod structural;

/// Outcome of running a pattern set against one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentOutcome {
    AllFound,
    /// Names of every pattern that did not match, in table order.
    Missing(Vec<String>),
    /// The file could not be read or decoded; holds the error text.
    Unreadable(String),
}

impl ContentOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, ContentOutcome::AllFound)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthReport {
    pub issues: Vec<String>,
    /// Targets that exist but could not be read: (label, error). Any entry
    /// fails the phase.
    pub unreadable: Vec<(String, String)>,
}

impl HealthReport {
    pub fn healthy(&self) -> bool {
        self.issues.is_empty() && self.unreadable.is_empty()
    }
}
