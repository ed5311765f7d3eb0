use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use axum_helpers::{
    auth::SessionClaims,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
        UnauthorizedResponse,
    },
    AuditEvent, AuditOutcome, ValidatedJson,
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::FoodItemResult;
use crate::models::{
    CreateFoodItem, DeleteFoodItem, DeleteFoodItemResponse, FoodItem, FoodItemQuery, SortOrder,
    UpdateFoodItem,
};
use crate::repository::FoodItemRepository;
use crate::service::FoodItemService;

const TAG: &str = "fooditem";

/// OpenAPI documentation for the food item API
#[derive(OpenApi)]
#[openapi(
    paths(get_food_items, create_food_item, update_food_item, delete_food_item),
    components(
        schemas(
            FoodItem,
            CreateFoodItem,
            UpdateFoodItem,
            DeleteFoodItem,
            DeleteFoodItemResponse,
            SortOrder
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Pantry inventory endpoints")
    )
)]
pub struct ApiDoc;

/// Create the food item router.
///
/// All four verbs hang off the collection path; single-item reads use the
/// `id` query parameter, updates and deletes carry the id in the body.
pub fn router<R: FoodItemRepository + 'static>(service: FoodItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(get_food_items)
                .post(create_food_item)
                .put(update_food_item)
                .delete(delete_food_item),
        )
        .with_state(shared_service)
}

/// List visible food items, or fetch one by id.
///
/// Without `id`: every non-hidden item, soonest expiration first, optionally
/// narrowed by `search` and re-sorted by `sort`. With `id`: that single item,
/// hidden or not.
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(FoodItemQuery),
    responses(
        (status = 200, description = "Matching food items as an array. When `id` is given the body is the single FoodItem object, not an array", body = Vec<FoodItem>),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_food_items<R: FoodItemRepository>(
    State(service): State<Arc<FoodItemService<R>>>,
    Query(query): Query<FoodItemQuery>,
) -> FoodItemResult<Response> {
    if let Some(id) = query.id {
        let item = service.get_food_item(id).await?;
        return Ok(Json(item).into_response());
    }

    let items = service
        .list_food_items(query.search.as_deref(), query.sort)
        .await?;
    Ok(Json(items).into_response())
}

/// Create a new food item
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateFoodItem,
    responses(
        (status = 201, description = "Food item created successfully", body = FoodItem),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_food_item<R: FoodItemRepository>(
    State(service): State<Arc<FoodItemService<R>>>,
    claims: Option<Extension<SessionClaims>>,
    ValidatedJson(input): ValidatedJson<CreateFoodItem>,
) -> FoodItemResult<impl IntoResponse> {
    let item = service.create_food_item(input).await?;

    AuditEvent::new(
        claims.map(|Extension(c)| c.sub),
        "fooditem.create",
        Some(format!("fooditem:{}", item.id)),
        AuditOutcome::Success,
    )
    .with_details(json!({
        "name": item.name,
        "quantity": item.quantity,
        "categories": item.categories,
    }))
    .log();

    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an existing food item.
///
/// The body carries the target `id` plus any subset of fields to change;
/// absent fields keep their stored value. A supplied `category_names`
/// replaces the item's whole category set.
#[utoipa::path(
    put,
    path = "",
    tag = TAG,
    request_body = UpdateFoodItem,
    responses(
        (status = 200, description = "Food item updated successfully", body = FoodItem),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_food_item<R: FoodItemRepository>(
    State(service): State<Arc<FoodItemService<R>>>,
    claims: Option<Extension<SessionClaims>>,
    ValidatedJson(input): ValidatedJson<UpdateFoodItem>,
) -> FoodItemResult<Json<FoodItem>> {
    let item = service.update_food_item(input).await?;

    AuditEvent::new(
        claims.map(|Extension(c)| c.sub),
        "fooditem.update",
        Some(format!("fooditem:{}", item.id)),
        AuditOutcome::Success,
    )
    .log();

    Ok(Json(item))
}

/// Delete a food item.
///
/// The database row (and its category links) go atomically; cleanup of the
/// hosted photo is dispatched afterwards and never affects the outcome.
#[utoipa::path(
    delete,
    path = "",
    tag = TAG,
    request_body = DeleteFoodItem,
    responses(
        (status = 200, description = "Food item deleted successfully", body = DeleteFoodItemResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_food_item<R: FoodItemRepository>(
    State(service): State<Arc<FoodItemService<R>>>,
    claims: Option<Extension<SessionClaims>>,
    ValidatedJson(input): ValidatedJson<DeleteFoodItem>,
) -> FoodItemResult<Json<DeleteFoodItemResponse>> {
    let deleted = service.delete_food_item(input).await?;

    AuditEvent::new(
        claims.map(|Extension(c)| c.sub),
        "fooditem.delete",
        Some(format!("fooditem:{}", deleted.id)),
        AuditOutcome::Success,
    )
    .log();

    Ok(Json(DeleteFoodItemResponse {
        message: "Food item deleted".to_string(),
        deleted_id: deleted.id,
    }))
}
