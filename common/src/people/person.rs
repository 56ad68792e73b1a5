use std::fmt;

/// Base identity record for humans in the system.
///
/// Immutable once constructed; passengers and employees embed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    national_id: String,
}

impl Person {
    pub fn new(name: impl Into<String>, national_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            national_id: national_id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.national_id)
    }
}
