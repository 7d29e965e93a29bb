use serde::{Deserialize, Serialize};

/// A persisted to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Assigned by the store on insert, never changed afterwards
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
}

/// Request body for creating or replacing an item
///
/// Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_complete: bool,
}

/// Body of `GET /health`; `error` is only present when the store is unreachable
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
