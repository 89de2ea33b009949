//! Given steps for session eviction BDD scenarios.

use super::world::SessionWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use workasana::{
    gateway::adapters::ScriptedReply, reference::domain::RawUser, session::domain::BearerToken,
};

#[given(r#"a signed-in user "{user_id}""#)]
fn signed_in_user(world: &mut SessionWorld, user_id: String) -> Result<(), eyre::Report> {
    let token = BearerToken::new("jwt-1").ok_or_else(|| eyre::eyre!("blank token"))?;
    world
        .session
        .sign_in(
            &token,
            &RawUser {
                id: user_id.clone(),
                name: Some("Ada".to_owned()),
                email: None,
            },
        )
        .wrap_err("sign in scenario user")?;
    world.signed_in_user = Some(user_id);
    Ok(())
}

#[given(r#"the server rejects the credential on "{route}""#)]
fn server_rejects_credential(world: &mut SessionWorld, route: String) {
    world
        .overrides
        .insert(route, ScriptedReply::error(401, "jwt expired"));
}

#[given(r#"the server fails "{route}" with status {status:u16}"#)]
fn server_fails_route(world: &mut SessionWorld, route: String, status: u16) {
    world
        .overrides
        .insert(route, ScriptedReply::error(status, "unavailable"));
}
