//! Holder for the newest applied batch result of a view.

use crate::fetch::domain::{BatchSequencer, BatchTicket};
use std::sync::{Mutex, PoisonError};

#[derive(Debug)]
struct SlotState<T> {
    closed: bool,
    value: Option<T>,
}

/// Keeps the result of the most recently issued batch that has completed.
///
/// A view calls [`SequencedSlot::begin`] before issuing a batch and
/// [`SequencedSlot::publish`] when it settles. A result is applied only when
/// its batch is newer than every batch applied before it, so an older batch
/// finishing late cannot overwrite a newer one. Nothing is applied after
/// [`SequencedSlot::close`].
#[derive(Debug)]
pub struct SequencedSlot<T> {
    sequencer: BatchSequencer,
    state: Mutex<SlotState<T>>,
}

impl<T> Default for SequencedSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SequencedSlot<T> {
    /// Creates an open, empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sequencer: BatchSequencer::new(),
            state: Mutex::new(SlotState {
                closed: false,
                value: None,
            }),
        }
    }

    /// Issues the ticket for a new batch.
    #[must_use]
    pub fn begin(&self) -> BatchTicket {
        self.sequencer.issue()
    }

    /// Offers the result of `ticket`'s batch.
    ///
    /// Returns `true` when the result was applied.
    #[must_use]
    pub fn publish(&self, ticket: BatchTicket, value: T) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.closed {
            tracing::debug!(batch = ticket.sequence(), "discarding result for closed view");
            return false;
        }
        if !self.sequencer.complete(ticket) {
            tracing::debug!(
                batch = ticket.sequence(),
                applied = self.sequencer.latest_applied().map(BatchTicket::sequence),
                "discarding stale batch result"
            );
            return false;
        }
        state.value = Some(value);
        true
    }

    /// Stops accepting results, as when the view is torn down.
    pub fn close(&self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .closed = true;
    }

    /// Returns `true` once the slot was closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .closed
    }

    /// Returns the ticket whose result is currently applied.
    #[must_use]
    pub fn applied_ticket(&self) -> Option<BatchTicket> {
        self.sequencer.latest_applied()
    }
}

impl<T: Clone> SequencedSlot<T> {
    /// Returns a copy of the applied result.
    #[must_use]
    pub fn current(&self) -> Option<T> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .value
            .clone()
    }
}
