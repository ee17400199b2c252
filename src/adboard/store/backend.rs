use crate::error::Result;

/// Abstract interface for the persistent key-value slot.
///
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`super::AdStore`] handles the "what" (the ad collection and
/// when it gets mirrored).
pub trait SlotBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing was ever written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Human-readable location of the slot, for diagnostics.
    fn describe(&self, key: &str) -> String;
}
