//! Hardware Call Stack.
//!
//! A fixed-depth stack of return addresses. `CALL` pushes, `RET` pops. The
//! hardware never overflows: pushing onto a full stack shifts every entry down
//! one slot, discarding the oldest, and the new address lands on top. Popping an
//! empty stack yields nothing and is not an error.

use crate::common::constants::CALL_STACK_DEPTH;

/// Bounded return-address stack.
///
/// Invariant: `len <= CALL_STACK_DEPTH`. `entries[..len]` holds the live
/// addresses from oldest (index 0) to newest (index `len - 1`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallStack {
    entries: [u8; CALL_STACK_DEPTH],
    len: usize,
}

impl CallStack {
    /// Creates an empty call stack.
    pub const fn new() -> Self {
        Self {
            entries: [0; CALL_STACK_DEPTH],
            len: 0,
        }
    }

    /// Pushes a return address.
    ///
    /// # Returns
    ///
    /// The evicted oldest address when the stack was already full, `None` otherwise.
    pub fn push(&mut self, addr: u8) -> Option<u8> {
        if self.len < CALL_STACK_DEPTH {
            self.entries[self.len] = addr;
            self.len += 1;
            None
        } else {
            let evicted = self.entries[0];
            self.entries.copy_within(1.., 0);
            self.entries[CALL_STACK_DEPTH - 1] = addr;
            Some(evicted)
        }
    }

    /// Pops the most recently pushed address, or `None` if the stack is empty.
    pub const fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(self.entries[self.len])
        }
    }

    /// Returns the most recently pushed address without removing it.
    pub const fn top(&self) -> Option<u8> {
        if self.len == 0 {
            None
        } else {
            Some(self.entries[self.len - 1])
        }
    }

    /// Number of live entries.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no address is stored.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the next push will evict.
    pub const fn is_full(&self) -> bool {
        self.len == CALL_STACK_DEPTH
    }

    /// Live entries from oldest to newest.
    pub fn as_slice(&self) -> &[u8] {
        &self.entries[..self.len]
    }

    /// Iterates live entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.as_slice().iter().copied()
    }

    /// Drops every entry.
    pub const fn clear(&mut self) {
        self.len = 0;
    }
}
