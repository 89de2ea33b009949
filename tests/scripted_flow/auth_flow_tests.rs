//! Sign-in and credential attachment across the public API.

use crate::scripted_flow::helpers::{Client, client};
use rstest::rstest;
use workasana::{
    api::{
        domain::{LoginForm, ValidationError},
        services::AuthError,
    },
    gateway::{adapters::ScriptedReply, domain::HttpMethod},
    session::domain::Theme,
};

#[rstest]
#[tokio::test]
async fn login_stores_session_and_authorizes_later_calls(client: Client) -> eyre::Result<()> {
    client.accept_login("u1", "Ada")?;
    client.reply(HttpMethod::Get, "/tasks", ScriptedReply::ok(serde_json::json!([])))?;

    let user = client
        .auth()
        .login(&LoginForm {
            email: "ada@example.com".to_owned(),
            password: "secret1".to_owned(),
        })
        .await?;
    let tasks = client.api().tasks().await?;

    assert_eq!(user.id(), "u1");
    assert!(tasks.is_empty());
    assert!(client.session.is_authenticated()?);
    let sent = client.transport.sent()?;
    let authorizations: Vec<Option<&str>> = sent
        .iter()
        .map(|outbound| outbound.authorization.as_deref())
        .collect();
    assert_eq!(authorizations, [None, Some("Bearer jwt-issued")]);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn rejected_login_surfaces_server_message(client: Client) -> eyre::Result<()> {
    client.reply(
        HttpMethod::Post,
        "/auth/login",
        ScriptedReply::error(401, "Invalid credentials"),
    )?;

    let result = client
        .auth()
        .login(&LoginForm {
            email: "ada@example.com".to_owned(),
            password: "wrong-password".to_owned(),
        })
        .await;

    let err = result.err().ok_or_else(|| eyre::eyre!("login should fail"))?;
    assert!(matches!(err, AuthError::Rejected { .. }));
    assert_eq!(err.user_message(), "Invalid credentials");
    assert!(!client.session.is_authenticated()?);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn invalid_form_never_reaches_the_server(client: Client) -> eyre::Result<()> {
    let result = client
        .auth()
        .login(&LoginForm {
            email: "ada@example.com".to_owned(),
            password: String::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AuthError::Validation(ValidationError::MissingCredentials))
    ));
    assert!(client.transport.sent()?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn sign_out_keeps_preferences(client: Client) -> eyre::Result<()> {
    client.accept_login("u1", "Ada")?;
    let auth = client.auth();
    auth.login(&LoginForm {
        email: "ada@example.com".to_owned(),
        password: "secret1".to_owned(),
    })
    .await?;
    let mut preferences = client.session.preferences()?;
    preferences.theme = Theme::Dark;
    client.session.save_preferences(&preferences)?;

    auth.sign_out()?;

    assert!(client.session.current_user()?.is_none());
    assert_eq!(client.session.preferences()?.theme, Theme::Dark);
    Ok(())
}
