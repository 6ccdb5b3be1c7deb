use actix_web::{get, web, Responder};

use super::UserResponse;
use crate::{
    shared::api::ApiResponse, user::application::ports::incoming::use_cases::GetUsersError,
    AppState,
};

#[get("/api/users")]
pub async fn get_users_handler(data: web::Data<AppState>) -> impl Responder {
    match data.user.get_list.execute().await {
        Ok(users) => ApiResponse::success(
            users
                .into_iter()
                .map(UserResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(GetUsersError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}
