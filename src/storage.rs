//! Shadow buffer storage strategies
//!
//! Partial refresh relies on the controller diffing the previous image
//! against the new one, so the driver keeps a shadow copy of the last frame
//! it sent to the panel. Where that copy lives is a deployment decision:
//! plain RAM is fine for mains-powered builds, while deep-sleep builds want
//! a retained region that survives power cycles.
//!
//! The [`ShadowStore`] trait is that seam. The refresh counter lives in the
//! same store as the shadow bytes: the two must stay consistent across a
//! power-loss boundary or partial refresh correctness is undefined, so a
//! backing either retains both or neither.
//!
//! Two implementations are provided:
//! - [`VolatileStore`] — a fixed array, always available
//! - [`HeapStore`] — heap-backed (`alloc` feature), with fallible allocation
//!
//! A retained-memory backing (e.g. RTC RAM on ESP32-class chips) is left to
//! the integrator: implement [`ShadowStore`] over the retained region and
//! make [`init`](ShadowStore::init) skip the white-fill when the region
//! already holds a frame from before the power cycle.

use crate::BUFFER_SIZE;

/// Error raised when a shadow store cannot provide its backing memory
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreError {
    /// The backing allocation failed
    OutOfMemory,
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfMemory => write!(f, "Could not allocate shadow buffer"),
        }
    }
}

impl core::error::Error for StoreError {}

/// Backing storage for the shadow buffer and refresh counter
///
/// The driver calls [`init`](Self::init) once at construction, reads the
/// whole shadow during the previous-image transfer, and overwrites it with
/// the outgoing frame in the same pass as the current-image transfer.
pub trait ShadowStore {
    /// Prepare the backing memory
    ///
    /// On first use the shadow must come up fully white (`0xFF`) with the
    /// counter at zero, matching the panel RAM after a reset. A retained
    /// backing that already survived a power cycle must leave its contents
    /// untouched.
    fn init(&mut self) -> Result<(), StoreError>;

    /// The last frame physically written to the panel
    fn read(&self) -> &[u8];

    /// Record `frame` as the last frame written to the panel
    ///
    /// `frame` is at least [`BUFFER_SIZE`] bytes (the driver validates
    /// lengths before transfer).
    fn write(&mut self, frame: &[u8]);

    /// Partial refreshes performed since the last full refresh
    fn updates(&self) -> u8;

    /// Store the refresh counter
    fn set_updates(&mut self, value: u8);
}

/// Shadow store in plain RAM
///
/// Loses its contents on power loss; the first refresh after a reboot is a
/// full refresh again (counter restarts at zero), which is also the safe
/// choice when the panel state is unknown.
pub struct VolatileStore {
    buffer: [u8; BUFFER_SIZE],
    updates: u8,
}

impl VolatileStore {
    /// Create an uninitialized store; [`ShadowStore::init`] fills it
    pub fn new() -> Self {
        Self {
            buffer: [0; BUFFER_SIZE],
            updates: 0,
        }
    }
}

impl Default for VolatileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShadowStore for VolatileStore {
    fn init(&mut self) -> Result<(), StoreError> {
        self.buffer.fill(0xFF);
        self.updates = 0;
        Ok(())
    }

    fn read(&self) -> &[u8] {
        &self.buffer
    }

    fn write(&mut self, frame: &[u8]) {
        let n = self.buffer.len().min(frame.len());
        self.buffer[..n].copy_from_slice(&frame[..n]);
    }

    fn updates(&self) -> u8 {
        self.updates
    }

    fn set_updates(&mut self, value: u8) {
        self.updates = value;
    }
}

/// Heap-backed shadow store (`alloc` feature)
///
/// Allocation happens in [`ShadowStore::init`] and is fallible: on heap
/// exhaustion the driver constructor reports [`StoreError::OutOfMemory`]
/// instead of aborting.
#[cfg(feature = "alloc")]
pub struct HeapStore {
    buffer: alloc::vec::Vec<u8>,
    updates: u8,
}

#[cfg(feature = "alloc")]
impl HeapStore {
    /// Create an empty store; the buffer is allocated by [`ShadowStore::init`]
    pub fn new() -> Self {
        Self {
            buffer: alloc::vec::Vec::new(),
            updates: 0,
        }
    }
}

#[cfg(feature = "alloc")]
impl Default for HeapStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "alloc")]
impl ShadowStore for HeapStore {
    fn init(&mut self) -> Result<(), StoreError> {
        self.buffer.clear();
        self.buffer
            .try_reserve_exact(BUFFER_SIZE)
            .map_err(|_| StoreError::OutOfMemory)?;
        self.buffer.resize(BUFFER_SIZE, 0xFF);
        self.updates = 0;
        Ok(())
    }

    fn read(&self) -> &[u8] {
        &self.buffer
    }

    fn write(&mut self, frame: &[u8]) {
        let n = self.buffer.len().min(frame.len());
        self.buffer[..n].copy_from_slice(&frame[..n]);
    }

    fn updates(&self) -> u8 {
        self.updates
    }

    fn set_updates(&mut self, value: u8) {
        self.updates = value;
    }
}
