use std::sync::Arc;

use crate::user::application::ports::incoming::use_cases::{GetUserByIdUseCase, GetUsersUseCase};

#[derive(Clone)]
pub struct UserUseCases {
    pub get_list: Arc<dyn GetUsersUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetUserByIdUseCase + Send + Sync>,
}
