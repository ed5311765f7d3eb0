//! Food item routes wired to Postgres, with session auth in front

use axum::{middleware, Router};
use axum_helpers::auth::{session_auth_middleware, SessionAuth};
use domain_food_items::{handlers, FoodItemService, HttpFileStore, PgFoodItemRepository};
use std::sync::Arc;

use crate::state::AppState;

pub fn router(state: &AppState) -> eyre::Result<Router> {
    let repository = PgFoodItemRepository::new(state.db.clone());
    let file_store = HttpFileStore::new(&state.config.file_store)
        .map_err(|e| eyre::eyre!("Failed to build file store client: {}", e))?;
    let service = FoodItemService::new(repository, Arc::new(file_store));

    let auth = SessionAuth::new(&state.config.session);

    Ok(handlers::router(service).layer(middleware::from_fn_with_state(
        auth,
        session_auth_middleware,
    )))
}
