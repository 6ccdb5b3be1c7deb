mod get_user_by_id_service;
mod get_users_service;

pub use get_user_by_id_service::GetUserByIdService;
pub use get_users_service::GetUsersService;
