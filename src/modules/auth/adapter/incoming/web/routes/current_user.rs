use actix_web::{get, Responder};
use serde::Serialize;

use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser, shared::api::ApiResponse,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub id: String,
    pub name: Option<String>,
}

#[get("/api/me")]
pub async fn current_user_handler(user: AuthenticatedUser) -> impl Responder {
    ApiResponse::success(CurrentUserResponse {
        id: user.user_id.into_inner(),
        name: user.name,
    })
}
