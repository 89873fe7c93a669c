//! User module - registered user profiles.

mod errors;
mod profile;

pub use errors::UserError;
pub use profile::{ProfileUpdate, UserProfile, MAX_USERNAME_LENGTH};
