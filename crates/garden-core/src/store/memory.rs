use std::cell::RefCell;

use super::backend::PlanBackend;
use crate::error::{GardenError, Result};

/// In-memory backend for tests and throwaway sessions.
///
/// Uses `RefCell` for interior mutability; the store is single-threaded.
#[derive(Default)]
pub struct MemoryBackend {
    payload: RefCell<Option<Vec<u8>>>,
    simulate_write_error: RefCell<bool>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an existing payload, as if it had been saved earlier.
    pub fn with_payload(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: RefCell::new(Some(bytes.into())),
            simulate_write_error: RefCell::new(false),
        }
    }

    /// Current payload, if any.
    pub fn payload(&self) -> Option<Vec<u8>> {
        self.payload.borrow().clone()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl PlanBackend for MemoryBackend {
    fn read_all(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.payload.borrow().clone())
    }

    fn write_all(&self, bytes: &[u8]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(GardenError::file_system(
                "<memory>",
                std::io::Error::new(std::io::ErrorKind::Other, "simulated write error"),
            ));
        }
        *self.payload.borrow_mut() = Some(bytes.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
