use actix_web::{get, web, Responder};

use super::UserResponse;
use crate::{
    auth::application::domain::entities::UserId, shared::api::ApiResponse,
    user::application::ports::incoming::use_cases::GetUserByIdError, AppState,
};

#[get("/api/users/{id}")]
pub async fn get_user_handler(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data.user.get_single.execute(&user_id).await {
        Ok(user) => ApiResponse::success(UserResponse::from(user)),
        Err(GetUserByIdError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(GetUserByIdError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}
