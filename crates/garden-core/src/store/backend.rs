use crate::error::Result;

/// Raw byte storage for the serialized plan set.
///
/// A backend only knows how to keep one opaque payload. Encoding, decoding
/// and all plan rules live in [`super::PlanStore`].
pub trait PlanBackend {
    /// Returns the saved payload, or `None` if nothing has been saved yet.
    fn read_all(&self) -> Result<Option<Vec<u8>>>;

    /// Replaces the saved payload. Implementations must not leave a partially
    /// written payload behind.
    fn write_all(&self, bytes: &[u8]) -> Result<()>;

    /// Human-readable location, used in log messages.
    fn describe(&self) -> String;
}

impl<B: PlanBackend + ?Sized> PlanBackend for Box<B> {
    fn read_all(&self) -> Result<Option<Vec<u8>>> {
        (**self).read_all()
    }

    fn write_all(&self, bytes: &[u8]) -> Result<()> {
        (**self).write_all(bytes)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
