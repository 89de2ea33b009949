//! Sequenced loading of a screen's batch.

use crate::fetch::{
    domain::{BatchResults, NamedRequest},
    services::{ConcurrentFetcher, SequencedSlot},
};
use crate::gateway::{
    domain::{GatewayError, GatewayResult, RequestFailure},
    ports::HttpTransport,
};
use crate::reference::domain::User;
use crate::screens::domain::{LoadError, ScreenState};
use crate::session::ports::SessionStore;
use serde::de::DeserializeOwned;

/// The resources one screen needs and how they become its data.
pub trait ScreenBatch {
    /// Data shown by the screen.
    type Data: Clone;

    /// Named requests issued together.
    fn requests(&self) -> Vec<NamedRequest>;

    /// Applies per-resource roles to the settled batch and builds the data.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::SessionExpired`] when any member hit session
    /// expiry, or [`LoadError::Unavailable`] when a primary member failed.
    fn assemble(
        &self,
        results: BatchResults,
        viewer: Option<&User>,
    ) -> Result<Self::Data, LoadError>;
}

/// Loads screen batches and keeps the newest applied state.
pub struct ScreenLoader<T, S, B>
where
    T: HttpTransport,
    S: SessionStore,
    B: ScreenBatch,
{
    fetcher: ConcurrentFetcher<T, S>,
    slot: SequencedSlot<ScreenState<B::Data>>,
}

impl<T, S, B> ScreenLoader<T, S, B>
where
    T: HttpTransport,
    S: SessionStore,
    B: ScreenBatch,
{
    /// Creates a loader with nothing shown yet.
    #[must_use]
    pub const fn new(fetcher: ConcurrentFetcher<T, S>) -> Self {
        Self {
            fetcher,
            slot: SequencedSlot::new(),
        }
    }

    /// Issues `batch` under a fresh sequence number and applies its state if
    /// no newer batch completed first.
    ///
    /// Returns the applied state, or `None` when the result was stale or the
    /// screen was closed.
    pub async fn load(&self, batch: &B) -> Option<ScreenState<B::Data>> {
        let ticket = self.slot.begin();
        let viewer = self.viewer();
        let results = self.fetcher.fetch_all(batch.requests()).await;
        let state = ScreenState::from(batch.assemble(results, viewer.as_ref()));
        if let ScreenState::Failed(err) = &state {
            tracing::warn!(batch = ticket.sequence(), error = %err, "screen load failed");
        }
        self.slot.publish(ticket, state.clone()).then_some(state)
    }

    /// Re-issues `batch`; identical to [`ScreenLoader::load`].
    pub async fn retry(&self, batch: &B) -> Option<ScreenState<B::Data>> {
        self.load(batch).await
    }

    /// The state currently shown.
    #[must_use]
    pub fn state(&self) -> Option<ScreenState<B::Data>> {
        self.slot.current()
    }

    /// Tears the screen down; later results are discarded.
    pub fn close(&self) {
        self.slot.close();
    }

    fn viewer(&self) -> Option<User> {
        match self.fetcher.gateway().session().current_user() {
            Ok(viewer) => viewer,
            Err(err) => {
                tracing::warn!(error = %err, "signed-in user unreadable, loading without one");
                None
            }
        }
    }
}

/// Takes and decodes one batch member.
pub(super) fn settled<T: DeserializeOwned>(
    results: &mut BatchResults,
    name: &str,
) -> GatewayResult<T> {
    results.take(name).unwrap_or_else(|| {
        Err(RequestFailure::transport(format!("{name} was not requested")).into())
    })
}

/// Returns `true` when any failure is a session expiry.
pub(super) fn session_lost(errors: &[Option<&GatewayError>]) -> bool {
    errors
        .iter()
        .flatten()
        .any(|err| err.is_session_expired())
}
