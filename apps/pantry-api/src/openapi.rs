//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Pantry API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pantry API",
        version = "0.1.0",
        description = "Personal pantry inventory tracker: food items with expiration dates, categories, and hosted photos",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/fooditem", api = domain_food_items::handlers::ApiDoc)
    ),
    tags(
        (name = "fooditem", description = "Pantry inventory endpoints")
    )
)]
pub struct ApiDoc;
