/// A seating-capacity-bearing airframe, owned by exactly one flight.
///
/// `Clone` lets several flights be stamped from one base airframe while
/// each flight still holds the sole reference to its own value. Capacity
/// is fixed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aircraft {
    model: String,
    capacity: u32,
}

impl Aircraft {
    pub fn new(model: impl Into<String>, capacity: u32) -> Self {
        Self {
            model: model.into(),
            capacity,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// One-line summary composed into the flight rendering.
    pub fn summary(&self) -> String {
        format!("{} - Capacity {}", self.model, self.capacity)
    }
}
