use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;

// -------------------------
// Request DTOs
// -------------------------

/// Raw `page` / `size` query parameters; parsed by `validation::bind_pagination`.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: ItemId,
}
