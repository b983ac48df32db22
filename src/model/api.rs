use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The uniform envelope applied to every successful API response.
///
/// Optional members are omitted from the JSON output when unset, so a plain
/// lookup serializes as `{success, data, message}` while a paginated listing
/// adds `pagination` and an admin listing adds `count`/`total`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationDto>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            total: None,
            count: None,
            pagination: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationDto) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

/// The response when an error occurs with an API request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    /// Human-readable description of the failure
    pub message: String,
    /// Underlying diagnostic detail, withheld in production for 5xx errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Pagination block attached to listing responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct PaginationDto {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    /// `ceil(total / limit)`
    pub pages: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_envelope_members_are_omitted() {
        let body = serde_json::to_value(ApiResponse::ok(42).with_message("ok")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": true, "data": 42, "message": "ok"})
        );
    }

    #[test]
    fn pagination_serializes_all_members() {
        let body = serde_json::to_value(ApiResponse::ok(Vec::<u32>::new()).with_pagination(
            PaginationDto {
                page: 2,
                limit: 10,
                total: 35,
                pages: 4,
            },
        ))
        .unwrap();
        assert_eq!(body["pagination"]["pages"], 4);
    }
}
