//! API routes module

pub mod food_items;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Create all API routes.
///
/// The food item routes sit behind the session-auth middleware; health and
/// readiness stay open for probes.
pub fn routes(state: &AppState) -> eyre::Result<Router> {
    Ok(Router::new()
        .nest("/fooditem", food_items::router(state)?)
        .merge(health::router(state.clone())))
}
