//! Batch sequence numbers for last-completed-wins result application.

use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence number handed to a batch when it is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BatchTicket(u64);

impl BatchTicket {
    /// Returns the sequence number.
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing batch tickets and tracks the newest
/// batch whose result was applied.
///
/// A completing batch is applied only when it is newer than every batch
/// applied before it; an older batch finishing late is discarded.
#[derive(Debug, Default)]
pub struct BatchSequencer {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl BatchSequencer {
    /// Creates a sequencer with no batches issued.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
            applied: AtomicU64::new(0),
        }
    }

    /// Issues the next ticket. The first ticket has sequence number 1.
    #[must_use]
    pub fn issue(&self) -> BatchTicket {
        BatchTicket(self.issued.fetch_add(1, Ordering::AcqRel).saturating_add(1))
    }

    /// Records completion of `ticket`.
    ///
    /// Returns `true` when the batch is the newest completed so far and its
    /// result should be applied.
    #[must_use]
    pub fn complete(&self, ticket: BatchTicket) -> bool {
        let previous = self.applied.fetch_max(ticket.0, Ordering::AcqRel);
        previous < ticket.0
    }

    /// Returns the newest ticket issued so far.
    #[must_use]
    pub fn latest_issued(&self) -> Option<BatchTicket> {
        let issued = self.issued.load(Ordering::Acquire);
        (issued > 0).then_some(BatchTicket(issued))
    }

    /// Returns the newest ticket whose result was applied.
    #[must_use]
    pub fn latest_applied(&self) -> Option<BatchTicket> {
        let applied = self.applied.load(Ordering::Acquire);
        (applied > 0).then_some(BatchTicket(applied))
    }
}
