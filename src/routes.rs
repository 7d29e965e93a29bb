// Route path constants - single source of truth for all API paths

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const ITEMS: &str = "/api/items";
pub const ITEM: &str = "/api/items/{id}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/swagger/v1/swagger.json";

/// Value of the `Location` header for a newly created item
pub fn item_location(id: i64) -> String {
    format!("{}/{}", ITEMS, id)
}
