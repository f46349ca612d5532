//! Wrapping id sequences for button element ids.
//!
//! Element ids end up in markup and in client-side command strings, so they
//! need to stay short. Ids are therefore drawn from a 15-bit sequence that
//! cycles back to `0` after [`MAX_SEQUENCE`] instead of overflowing.
//!
//! # Example
//!
//! ```rust
//! use trellis_core::sequence::{IdAllocator, SequenceAllocator};
//!
//! let allocator = SequenceAllocator::starting_at(0x7FFF);
//! assert_eq!(allocator.next().get(), 0x7FFF);
//! assert_eq!(allocator.next().get(), 0);
//! ```

use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Largest value handed out before the sequence wraps (15 bits)
pub const MAX_SEQUENCE: u16 = 0x7FFF;

/// Number of distinct ids in one cycle of the sequence
pub const SEQUENCE_LEN: usize = MAX_SEQUENCE as usize + 1;

/// Allocation-order identity of a button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(u16);

impl ButtonId {
    /// Create an id from a raw value, masked into the sequence range
    pub const fn new(raw: u16) -> Self {
        Self(raw & MAX_SEQUENCE)
    }

    /// Raw sequence value
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of button ids
///
/// Implementations must be safe to call from several request threads at
/// once and must never hand the same value to two overlapping calls.
pub trait IdAllocator: Send + Sync {
    /// Allocate the next id
    fn next(&self) -> ButtonId;
}

/// Mutex-guarded wrapping counter
pub struct SequenceAllocator {
    next: Mutex<u16>,
}

impl SequenceAllocator {
    /// Create an allocator starting at `0`
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create an allocator whose first id is `seed` (masked to 15 bits)
    pub fn starting_at(seed: u16) -> Self {
        Self {
            next: Mutex::new(seed & MAX_SEQUENCE),
        }
    }

    /// Rewind the sequence to `0`
    pub fn reset(&self) {
        *self.next.lock() = 0;
    }

    /// The id the next call to [`IdAllocator::next`] will return
    pub fn peek(&self) -> ButtonId {
        ButtonId(*self.next.lock())
    }
}

impl Default for SequenceAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SequenceAllocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceAllocator")
            .field("next", &self.peek())
            .finish()
    }
}

impl IdAllocator for SequenceAllocator {
    fn next(&self) -> ButtonId {
        let mut next = self.next.lock();
        let id = *next;
        *next = if id == MAX_SEQUENCE {
            tracing::trace!("button id sequence wrapped");
            0
        } else {
            id + 1
        };
        ButtonId(id)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Process-wide default
// ─────────────────────────────────────────────────────────────────────────────

static DEFAULT_ALLOCATOR: OnceLock<RwLock<Arc<dyn IdAllocator>>> = OnceLock::new();

fn default_slot() -> &'static RwLock<Arc<dyn IdAllocator>> {
    DEFAULT_ALLOCATOR.get_or_init(|| RwLock::new(Arc::new(SequenceAllocator::new())))
}

/// Replace the process-wide allocator used by the convenience constructors.
///
/// Returns the previously installed allocator.
pub fn install_allocator(allocator: Arc<dyn IdAllocator>) -> Arc<dyn IdAllocator> {
    std::mem::replace(&mut *default_slot().write(), allocator)
}

/// Get the process-wide allocator
pub fn default_allocator() -> Arc<dyn IdAllocator> {
    default_slot().read().clone()
}

/// Allocate an id from the process-wide allocator
pub fn next_id() -> ButtonId {
    default_slot().read().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequence_starts_at_zero() {
        let allocator = SequenceAllocator::new();
        assert_eq!(allocator.next().get(), 0);
        assert_eq!(allocator.next().get(), 1);
        assert_eq!(allocator.next().get(), 2);
    }

    #[test]
    fn test_sequence_wraps_after_full_cycle() {
        let allocator = SequenceAllocator::new();
        let first = allocator.next();
        for _ in 1..SEQUENCE_LEN {
            allocator.next();
        }
        // 32769th allocation
        assert_eq!(allocator.next(), first);
    }

    #[test]
    fn test_sequence_wraps_at_max() {
        let allocator = SequenceAllocator::starting_at(MAX_SEQUENCE);
        assert_eq!(allocator.next().get(), MAX_SEQUENCE);
        assert_eq!(allocator.next().get(), 0);
    }

    #[test]
    fn test_seed_is_masked() {
        let allocator = SequenceAllocator::starting_at(0x8005);
        assert_eq!(allocator.next().get(), 5);
        assert_eq!(ButtonId::new(0xFFFF).get(), MAX_SEQUENCE);
    }

    #[test]
    fn test_reset() {
        let allocator = SequenceAllocator::starting_at(40);
        allocator.next();
        allocator.reset();
        assert_eq!(allocator.peek().get(), 0);
        assert_eq!(allocator.next().get(), 0);
    }

    #[test]
    fn test_concurrent_ids_are_distinct() {
        let allocator = SequenceAllocator::new();
        let threads = 8;
        let per_thread = SEQUENCE_LEN / threads;

        let ids: Vec<ButtonId> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..threads)
                .map(|_| {
                    scope.spawn(|| {
                        (0..per_thread)
                            .map(|_| allocator.next())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect()
        });

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), SEQUENCE_LEN);
        assert_eq!(unique.len(), SEQUENCE_LEN);
    }

    #[test]
    fn test_install_allocator() {
        let previous = install_allocator(Arc::new(SequenceAllocator::starting_at(0x100)));
        assert_eq!(next_id().get(), 0x100);
        assert_eq!(default_allocator().next().get(), 0x101);
        install_allocator(previous);
    }
}
