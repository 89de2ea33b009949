//! Tests for the session context transitions.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use crate::reference::domain::RawUser;
use crate::session::{
    adapters::memory::InMemorySessionStore,
    domain::{BearerToken, DisplayPreferences, SessionKey, Theme},
    ports::SessionStore,
    services::SessionContext,
};
use rstest::{fixture, rstest};

#[fixture]
fn store() -> InMemorySessionStore {
    InMemorySessionStore::new()
}

fn profile() -> RawUser {
    RawUser {
        id: "u1".to_owned(),
        name: Some("Ada".to_owned()),
        email: Some("ada@example.com".to_owned()),
    }
}

fn token() -> BearerToken {
    BearerToken::new("secret-token").expect("non-blank token")
}

#[rstest]
fn sign_in_stores_token_and_profile(store: InMemorySessionStore) {
    let session = SessionContext::new(Arc::new(store.clone()));

    session.sign_in(&token(), &profile()).expect("sign in");

    assert!(session.is_authenticated().expect("read token"));
    assert_eq!(session.token().expect("read token"), Some(token()));
    let user = session.current_user().expect("read user").expect("user present");
    assert_eq!(user.id(), "u1");
    assert_eq!(user.email(), Some("ada@example.com"));
    assert!(store.get(SessionKey::User).expect("raw read").is_some());
}

#[rstest]
fn evict_clears_credentials_but_keeps_preferences(store: InMemorySessionStore) {
    let session = SessionContext::new(Arc::new(store.clone()));
    let preferences = DisplayPreferences {
        theme: Theme::Dark,
        ..DisplayPreferences::default()
    };
    session.sign_in(&token(), &profile()).expect("sign in");
    session.save_preferences(&preferences).expect("save preferences");

    session.evict().expect("evict");

    assert_eq!(store.get(SessionKey::Token).expect("raw read"), None);
    assert_eq!(store.get(SessionKey::User).expect("raw read"), None);
    assert_eq!(session.preferences().expect("preferences"), preferences);
}

#[rstest]
fn sign_out_is_idempotent(store: InMemorySessionStore) {
    let session = SessionContext::new(Arc::new(store));

    session.sign_out().expect("first sign out");
    session.sign_out().expect("second sign out");

    assert!(!session.is_authenticated().expect("read token"));
}

#[rstest]
#[case("not json")]
#[case(r#"{"name": "No id"}"#)]
fn corrupt_profiles_read_as_absent(#[case] payload: &str) {
    let store = InMemorySessionStore::with_entries([(SessionKey::User, payload.to_owned())]);
    let session = SessionContext::new(Arc::new(store));

    assert_eq!(session.current_user().expect("read user"), None);
}

#[rstest]
fn blank_token_is_not_a_credential() {
    let store = InMemorySessionStore::with_entries([(SessionKey::Token, "   ".to_owned())]);
    let session = SessionContext::new(Arc::new(store));

    assert!(!session.is_authenticated().expect("read token"));
}

#[rstest]
fn preferences_default_when_missing_or_corrupt() {
    let store =
        InMemorySessionStore::with_entries([(SessionKey::UserPreferences, "{oops".to_owned())]);
    let session = SessionContext::new(Arc::new(store));

    assert_eq!(
        session.preferences().expect("preferences"),
        DisplayPreferences::default()
    );
}

#[rstest]
fn token_debug_output_hides_the_credential() {
    let rendered = format!("{:?}", token());

    assert!(!rendered.contains("secret-token"));
    assert_eq!(token().fingerprint().len(), 12);
    assert_eq!(token().header_value(), "Bearer secret-token");
}
