//! Request lifetimes
//!
//! A panel issues a [`Ticket`] before every request and checks it when the
//! response arrives. Tickets go stale when the panel is unmounted, and read
//! tickets also go stale when a newer read for the same slot was issued, so
//! the last issued request wins rather than the last completed one.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Independent request streams of one panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Status,
    List,
}

impl Slot {
    const COUNT: usize = 2;

    fn index(self) -> usize {
        match self {
            Slot::Status => 0,
            Slot::List => 1,
        }
    }
}

/// Proof of when a request was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    slot: Option<(Slot, u64)>,
}

#[derive(Debug, Default)]
struct Inner {
    unmounted: AtomicBool,
    generations: [AtomicU64; Slot::COUNT],
}

/// Mounted lifetime of a panel
#[derive(Debug, Clone, Default)]
pub struct Lifetime {
    inner: Arc<Inner>,
}

impl Lifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for a read; supersedes earlier tickets of the same slot
    pub fn ticket(&self, slot: Slot) -> Ticket {
        let generation = self.inner.generations[slot.index()].fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            slot: Some((slot, generation)),
        }
    }

    /// Ticket for a write; only unmounting makes it stale
    pub fn guard(&self) -> Ticket {
        Ticket { slot: None }
    }

    /// Whether a response for this ticket may still be applied
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        if !self.is_mounted() {
            return false;
        }
        match ticket.slot {
            Some((slot, generation)) => {
                self.inner.generations[slot.index()].load(Ordering::SeqCst) == generation
            }
            None => true,
        }
    }

    pub fn is_mounted(&self) -> bool {
        !self.inner.unmounted.load(Ordering::SeqCst)
    }

    /// Make every outstanding ticket stale
    pub fn unmount(&self) {
        self.inner.unmounted.store(true, Ordering::SeqCst);
    }
}
