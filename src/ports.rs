//! Port allocation for test environments running in parallel workers.
//!
//! Each worker owns a block of a thousand ports starting at
//! `(worker_id + 3) * 1000`. Ports inside the block are handed out in
//! order, starting from one past the block start, until the block is
//! exhausted.

/// Offset added to the worker id to pick its port block.
pub const WORKER_BLOCK_OFFSET: u16 = 3;

/// Size of the port block owned by each worker.
pub const WORKER_BLOCK_SIZE: u16 = 1000;

/// Hands out ports for a single worker.
///
/// The counter lives in the allocator, so two allocators never share state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortAllocator {
    worker_id: u16,
    counter: u16,
}

impl PortAllocator {
    pub fn new(worker_id: u16) -> Self {
        Self::with_counter(worker_id, 1)
    }

    /// Resumes allocation at `counter`, e.g. after handing the allocator across a process boundary.
    pub fn with_counter(worker_id: u16, counter: u16) -> Self {
        Self { worker_id, counter }
    }

    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }

    /// The counter value the next port will be derived from.
    pub fn counter(&self) -> u16 {
        self.counter
    }

    fn port_for(&self, counter: u16) -> Option<u16> {
        self.worker_id
            .checked_add(WORKER_BLOCK_OFFSET)?
            .checked_mul(WORKER_BLOCK_SIZE)?
            .checked_add(counter)
    }
}

impl Iterator for PortAllocator {
    type Item = u16;

    /// Returns the next port, or `None` once the worker's block is used up
    /// or the port would not fit in a `u16`.
    fn next(&mut self) -> Option<u16> {
        if self.counter >= WORKER_BLOCK_SIZE {
            return None;
        }
        let port = self.port_for(self.counter)?;
        self.counter = self.counter.checked_add(1)?;
        Some(port)
    }
}
