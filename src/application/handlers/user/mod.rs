//! User profile command and query handlers.

mod delete_user;
mod get_user;
mod list_users;
mod register_user;
mod update_user_profile;

pub use delete_user::DeleteUserHandler;
pub use get_user::GetUserHandler;
pub use list_users::ListUsersHandler;
pub use register_user::{RegisterUserCommand, RegisterUserHandler};
pub use update_user_profile::{UpdateUserProfileCommand, UpdateUserProfileHandler};
