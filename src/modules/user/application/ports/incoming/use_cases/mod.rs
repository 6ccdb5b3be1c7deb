mod get_user_by_id;
mod get_users;

pub use get_user_by_id::{GetUserByIdError, GetUserByIdUseCase};
pub use get_users::{GetUsersError, GetUsersUseCase};
