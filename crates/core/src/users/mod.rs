mod operations;
mod types;

pub use operations::validate_credentials;
pub use types::{Credentials, User, UserId};
