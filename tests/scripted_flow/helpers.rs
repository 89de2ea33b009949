//! Shared fixtures for scripted flow tests.

use rstest::fixture;
use std::sync::Arc;
use workasana::{
    api::services::{AuthService, WorkasanaApi},
    fetch::services::ConcurrentFetcher,
    gateway::{
        adapters::{ScriptedReply, ScriptedTransport},
        domain::HttpMethod,
        services::AuthenticatedGateway,
    },
    screens::services::{ScreenBatch, ScreenLoader},
    session::{adapters::memory::InMemorySessionStore, services::SessionContext},
};

/// Gateway type used by the flow tests.
pub type TestGateway = AuthenticatedGateway<ScriptedTransport, InMemorySessionStore>;

/// A signed-out client wired to a scripted transport.
pub struct Client {
    pub transport: ScriptedTransport,
    pub session: SessionContext<InMemorySessionStore>,
}

impl Client {
    /// Scripts a reply for `method` and `route`.
    pub fn reply(
        &self,
        method: HttpMethod,
        route: &str,
        reply: ScriptedReply,
    ) -> eyre::Result<()> {
        self.transport.script(method, route, reply)?;
        Ok(())
    }

    /// Scripts the login exchange for `user_id`.
    pub fn accept_login(&self, user_id: &str, name: &str) -> eyre::Result<()> {
        self.reply(
            HttpMethod::Post,
            "/auth/login",
            ScriptedReply::ok(serde_json::json!({
                "token": "jwt-issued",
                "user": {"_id": user_id, "name": name, "email": "ada@example.com"}
            })),
        )
    }

    pub fn gateway(&self) -> TestGateway {
        AuthenticatedGateway::new(Arc::new(self.transport.clone()), self.session.clone())
    }

    pub fn auth(&self) -> AuthService<ScriptedTransport, InMemorySessionStore> {
        AuthService::new(self.gateway())
    }

    pub fn api(&self) -> WorkasanaApi<ScriptedTransport, InMemorySessionStore> {
        WorkasanaApi::new(self.gateway())
    }

    pub fn loader<B: ScreenBatch>(
        &self,
    ) -> ScreenLoader<ScriptedTransport, InMemorySessionStore, B> {
        ScreenLoader::new(ConcurrentFetcher::new(self.gateway()))
    }
}

/// Fixture providing a signed-out client.
#[fixture]
pub fn client() -> Client {
    Client {
        transport: ScriptedTransport::new(),
        session: SessionContext::new(Arc::new(InMemorySessionStore::new())),
    }
}
