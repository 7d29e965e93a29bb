use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{HealthStatus, Item, ItemInput};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        version = "v1",
        description = "CRUD service for to-do items backed by a relational database"
    ),
    paths(
        handlers::root::root_handler,
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Item,
            ItemInput,
            ErrorResponse,
            HealthStatus
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "items", description = "To-do item operations")
    )
)]
pub struct ApiDoc;
