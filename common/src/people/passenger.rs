use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use super::{Luggage, Person};

/// Handle under which flights and the driver share one passenger.
pub type SharedPassenger = Rc<Passenger>;

/// A person enrolled on flights, accumulating luggage.
///
/// Luggage sits behind a `RefCell` so bags can be attached while flights
/// hold shared handles to the passenger; everything runs on one thread.
#[derive(Debug)]
pub struct Passenger {
    person: Person,
    luggage: RefCell<Vec<Luggage>>,
}

impl Passenger {
    pub fn new(name: impl Into<String>, national_id: impl Into<String>) -> Self {
        Self {
            person: Person::new(name, national_id),
            luggage: RefCell::new(Vec::new()),
        }
    }

    /// Wraps a fresh passenger in the shared handle flights expect.
    pub fn shared(name: impl Into<String>, national_id: impl Into<String>) -> SharedPassenger {
        Rc::new(Self::new(name, national_id))
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn national_id(&self) -> &str {
        self.person.national_id()
    }

    /// Appends an item to the luggage sequence. Always succeeds, insertion
    /// order is preserved.
    pub fn add_luggage(&self, item: Luggage) {
        self.luggage.borrow_mut().push(item);
    }

    /// In-order view of the luggage items. Re-borrow to restart iteration.
    pub fn luggage(&self) -> Ref<'_, [Luggage]> {
        Ref::map(self.luggage.borrow(), Vec::as_slice)
    }

    pub fn luggage_count(&self) -> usize {
        self.luggage.borrow().len()
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.person, f)
    }
}
