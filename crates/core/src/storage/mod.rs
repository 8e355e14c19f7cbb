mod error;
mod policy;
mod traits;

pub use error::{RepositoryError, Result};
pub use policy::{MissingRowPolicy, ParsePolicyError};
pub use traits::{EventRepository, UserRepository};
