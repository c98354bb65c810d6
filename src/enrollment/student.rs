//! The session's student record
//!
//! Created once per session from the name and ID entered at the welcome
//! prompts. The registered-course list mirrors the rosters held by the
//! courses themselves; the enrollment ledger keeps the two in sync and
//! guarantees the list holds no duplicates.

/// A student and their registered course codes
#[derive(Debug, Clone)]
pub struct Student {
    id: String,
    name: String,
    registered: Vec<String>,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Student {
            id: id.into(),
            name: name.into(),
            registered: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered course codes in registration order
    pub fn registered_courses(&self) -> &[String] {
        &self.registered
    }

    /// Whether a course code is in the registered list (case-insensitive)
    pub fn is_registered(&self, code: &str) -> bool {
        self.registered.iter().any(|c| c.eq_ignore_ascii_case(code))
    }

    /// Append a course code unconditionally.
    ///
    /// The caller must already have secured a seat on the course side;
    /// the ledger does this before calling here.
    pub fn register_course(&mut self, code: &str) {
        self.registered.push(code.to_string());
    }

    /// Remove the matching course code if present, returning whether
    /// removal occurred
    pub fn drop_course(&mut self, code: &str) -> bool {
        if let Some(pos) = self
            .registered
            .iter()
            .position(|c| c.eq_ignore_ascii_case(code))
        {
            self.registered.remove(pos);
            true
        } else {
            false
        }
    }
}
