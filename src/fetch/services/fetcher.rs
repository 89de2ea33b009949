//! Issues a batch of named calls concurrently and collects every result.

use crate::fetch::domain::{BatchResults, NamedRequest};
use crate::gateway::{domain::GatewayResult, ports::HttpTransport, services::AuthenticatedGateway};
use crate::session::ports::SessionStore;
use futures::future::join_all;
use std::collections::BTreeMap;
use std::future::Future;

/// Drives named futures to completion together and indexes their results.
///
/// All futures are polled on the calling task; none waits for another to
/// start. A failing member never cancels or hides its siblings. When two
/// members share a name the later one wins.
pub async fn join_named<K, T, F>(
    calls: impl IntoIterator<Item = (K, F)>,
) -> BTreeMap<K, GatewayResult<T>>
where
    K: Ord,
    F: Future<Output = GatewayResult<T>>,
{
    let (names, pending): (Vec<K>, Vec<F>) = calls.into_iter().unzip();
    let settled = join_all(pending).await;
    names.into_iter().zip(settled).collect()
}

/// Issues gateway requests as one concurrent batch.
pub struct ConcurrentFetcher<T, S>
where
    T: HttpTransport,
    S: SessionStore,
{
    gateway: AuthenticatedGateway<T, S>,
}

impl<T, S> Clone for ConcurrentFetcher<T, S>
where
    T: HttpTransport,
    S: SessionStore,
{
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
        }
    }
}

impl<T, S> ConcurrentFetcher<T, S>
where
    T: HttpTransport,
    S: SessionStore,
{
    /// Creates a fetcher sending through `gateway`.
    #[must_use]
    pub const fn new(gateway: AuthenticatedGateway<T, S>) -> Self {
        Self { gateway }
    }

    /// Returns the gateway requests are sent through.
    #[must_use]
    pub const fn gateway(&self) -> &AuthenticatedGateway<T, S> {
        &self.gateway
    }

    /// Sends every request at once and waits for all of them to settle.
    ///
    /// Each member's JSON body or error is stored under its name. The batch
    /// itself never fails; callers apply a [`crate::fetch::domain::ResourceRole`]
    /// policy per member.
    pub async fn fetch_all(&self, requests: Vec<NamedRequest>) -> BatchResults {
        let calls = requests.into_iter().map(|named| {
            let (name, request) = named.into_parts();
            let gateway = &self.gateway;
            let call = async move {
                let response = gateway.send(request).await?;
                Ok(response.body().clone())
            };
            (name, call)
        });
        let results: BatchResults = join_named(calls).await.into_iter().collect();
        tracing::debug!(
            members = results.len(),
            succeeded = results.success_count(),
            failed = results.failure_count(),
            "batch settled"
        );
        results
    }
}
