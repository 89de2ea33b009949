//! Shared world state for session eviction BDD scenarios.

use std::{collections::BTreeMap, sync::Arc};

use rstest::fixture;
use workasana::{
    fetch::services::ConcurrentFetcher,
    gateway::{
        adapters::{ScriptedReply, ScriptedTransport},
        services::AuthenticatedGateway,
    },
    screens::{
        domain::{DashboardData, ScreenState},
        services::{DashboardBatch, ScreenLoader},
    },
    session::{adapters::memory::InMemorySessionStore, services::SessionContext},
};

/// Loader type used by the BDD world.
pub type TestLoader = ScreenLoader<ScriptedTransport, InMemorySessionStore, DashboardBatch>;

/// Scenario world for session eviction behaviour tests.
pub struct SessionWorld {
    pub transport: ScriptedTransport,
    pub session: SessionContext<InMemorySessionStore>,
    pub loader: TestLoader,
    pub signed_in_user: Option<String>,
    pub overrides: BTreeMap<String, ScriptedReply>,
    pub last_state: Option<ScreenState<DashboardData>>,
}

impl SessionWorld {
    /// Creates a world with a signed-out session and no scripted routes.
    #[must_use]
    pub fn new() -> Self {
        let transport = ScriptedTransport::new();
        let session = SessionContext::new(Arc::new(InMemorySessionStore::new()));
        let gateway = AuthenticatedGateway::new(Arc::new(transport.clone()), session.clone());
        Self {
            transport,
            session,
            loader: ScreenLoader::new(ConcurrentFetcher::new(gateway)),
            signed_in_user: None,
            overrides: BTreeMap::new(),
            last_state: None,
        }
    }
}

impl Default for SessionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SessionWorld {
    SessionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
