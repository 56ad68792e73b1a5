use std::fmt;
use std::rc::Rc;

use crate::identity::IdTag;
use crate::info;
use crate::log::Loggable;

use super::Person;

/// Handle under which flights share one crew member.
pub type SharedCrew = Rc<Employee>;

/// A person with a workplace role, capable of serving as crew.
///
/// The identity tag is minted once at construction and never changes.
#[derive(Debug)]
pub struct Employee {
    person: Person,
    role: String,
    badge_number: String,
    id: IdTag,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        national_id: impl Into<String>,
        role: impl Into<String>,
        badge_number: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(name, national_id),
            role: role.into(),
            badge_number: badge_number.into(),
            id: IdTag::mint(),
        }
    }

    /// Wraps a fresh employee in the shared handle flights expect.
    pub fn shared(
        name: impl Into<String>,
        national_id: impl Into<String>,
        role: impl Into<String>,
        badge_number: impl Into<String>,
    ) -> SharedCrew {
        Rc::new(Self::new(name, national_id, role, badge_number))
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn national_id(&self) -> &str {
        self.person.national_id()
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn badge_number(&self) -> &str {
        &self.badge_number
    }

    pub fn id(&self) -> &IdTag {
        &self.id
    }
}

impl Loggable for Employee {
    fn log_entry(&self) {
        info!("{} (Employee) entered the system.", self.name());
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.person, f)
    }
}
