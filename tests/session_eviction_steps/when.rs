//! When steps for session eviction BDD scenarios.

use super::world::{SessionWorld, run_async};
use rstest_bdd_macros::when;
use serde_json::json;
use workasana::{
    gateway::{adapters::ScriptedReply, domain::HttpMethod},
    screens::services::DashboardBatch,
};

#[when("the dashboard is loaded")]
fn load_dashboard(world: &mut SessionWorld) -> Result<(), eyre::Report> {
    let owner = world.signed_in_user.clone().unwrap_or_default();
    let defaults = [
        (
            "/tasks",
            json!([
                {"_id": "t1", "name": "Write docs", "owners": [owner], "project": "p1"},
                {"_id": "t2", "name": "Review", "owners": ["someone-else"], "project": "p1"}
            ]),
        ),
        ("/projects", json!([{"_id": "p1", "name": "Launch"}])),
        ("/teams", json!([])),
    ];
    for (route, body) in defaults {
        let reply = world
            .overrides
            .remove(route)
            .unwrap_or_else(|| ScriptedReply::ok(body));
        world.transport.script(HttpMethod::Get, route, reply)?;
    }
    if let Some(route) = world.overrides.keys().next() {
        return Err(eyre::eyre!("route {route} is not part of the dashboard batch"));
    }

    world.last_state = run_async(world.loader.load(&DashboardBatch));
    Ok(())
}
