//! Unit tests for screen loading.

mod reports_tests;

use crate::fetch::services::ConcurrentFetcher;
use crate::gateway::{
    adapters::{ScriptedReply, ScriptedTransport},
    domain::HttpMethod,
    services::AuthenticatedGateway,
};
use crate::reference::domain::RawUser;
use crate::screens::services::{ScreenBatch, ScreenLoader};
use crate::session::{
    adapters::memory::InMemorySessionStore, domain::BearerToken, services::SessionContext,
};
use std::sync::Arc;

/// Scripted transport and a session signed in as `u1` (Ada).
pub(super) struct Harness {
    pub(super) transport: ScriptedTransport,
    pub(super) session: SessionContext<InMemorySessionStore>,
}

#[expect(clippy::expect_used, reason = "Test helpers use expect for clarity")]
impl Harness {
    pub(super) fn signed_in() -> Self {
        let session = SessionContext::new(Arc::new(InMemorySessionStore::new()));
        session
            .sign_in(
                &BearerToken::new("jwt-1").expect("non-blank token"),
                &RawUser {
                    id: "u1".to_owned(),
                    name: Some("Ada".to_owned()),
                    email: None,
                },
            )
            .expect("sign in");
        Self {
            transport: ScriptedTransport::new(),
            session,
        }
    }

    pub(super) fn reply(&self, route: &str, reply: ScriptedReply) {
        self.transport
            .script(HttpMethod::Get, route, reply)
            .expect("script");
    }

    pub(super) fn loader<B: ScreenBatch>(
        &self,
    ) -> ScreenLoader<ScriptedTransport, InMemorySessionStore, B> {
        ScreenLoader::new(ConcurrentFetcher::new(AuthenticatedGateway::new(
            Arc::new(self.transport.clone()),
            self.session.clone(),
        )))
    }
}
