use serde::Serialize;
use utoipa::ToSchema;

/// Envelope of every `ApiResponse::success` body.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope of every error body.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code for programmatic handling
    #[schema(example = "MISSING_FIELDS")]
    pub code: String,

    #[schema(example = "Missing required fields: name, link")]
    pub message: String,
}
