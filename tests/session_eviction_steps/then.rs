//! Then steps for session eviction BDD scenarios.

use super::world::SessionWorld;
use rstest_bdd_macros::then;
use workasana::screens::domain::{DashboardData, LoadError, ScreenState};

fn loaded_state(world: &SessionWorld) -> Result<&ScreenState<DashboardData>, eyre::Report> {
    world
        .last_state
        .as_ref()
        .ok_or_else(|| eyre::eyre!("dashboard load was discarded or never ran"))
}

#[then("the dashboard reports an expired session")]
fn dashboard_reports_expiry(world: &SessionWorld) -> Result<(), eyre::Report> {
    match loaded_state(world)?.error() {
        Some(LoadError::SessionExpired) => Ok(()),
        other => Err(eyre::eyre!("expected session expiry, found {other:?}")),
    }
}

#[then("the dashboard shows {count:usize} task for the user")]
fn dashboard_shows_tasks(world: &SessionWorld, count: usize) -> Result<(), eyre::Report> {
    let data = loaded_state(world)?
        .data()
        .ok_or_else(|| eyre::eyre!("expected dashboard data"))?;
    let mine = data.my_tasks(&[]).len();
    if mine != count {
        return Err(eyre::eyre!("expected {count} tasks for the user, found {mine}"));
    }
    if !data.teams.is_empty() {
        return Err(eyre::eyre!("expected degraded teams to be empty"));
    }
    Ok(())
}

#[then(r#"the dashboard shows the retryable message "{message}""#)]
fn dashboard_shows_retryable(world: &SessionWorld, message: String) -> Result<(), eyre::Report> {
    let err = loaded_state(world)?
        .error()
        .ok_or_else(|| eyre::eyre!("expected a load failure"))?;
    if !err.is_retryable() || err.to_string() != message {
        return Err(eyre::eyre!("expected retryable \"{message}\", found {err:?}"));
    }
    Ok(())
}

#[then("the session holds no credential")]
fn session_cleared(world: &SessionWorld) -> Result<(), eyre::Report> {
    if world.session.is_authenticated()? || world.session.current_user()?.is_some() {
        return Err(eyre::eyre!("expected the session to be evicted"));
    }
    Ok(())
}

#[then("the session still holds the credential")]
fn session_kept(world: &SessionWorld) -> Result<(), eyre::Report> {
    if !world.session.is_authenticated()? {
        return Err(eyre::eyre!("expected the session to survive the failure"));
    }
    Ok(())
}
