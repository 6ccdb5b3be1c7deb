mod user_query;

pub use user_query::{UserQuery, UserQueryError};
