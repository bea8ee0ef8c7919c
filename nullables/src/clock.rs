//! Nullable clock: deterministic time for testing.

use disperse_types::Timestamp;
use std::cell::Cell;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_millis: u64) -> Self {
        Self {
            current: Cell::new(initial_millis),
        }
    }

    pub fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.current.get())
    }

    pub fn advance(&self, millis: u64) {
        self.current.set(self.current.get() + millis);
    }

    pub fn set(&self, millis: u64) {
        self.current.set(millis);
    }
}
