use crate::error::ValidationError;

use super::types::Credentials;

/// Trims both fields and rejects the pair if either one is empty.
pub fn validate_credentials(
    username: &str,
    password: &str,
) -> Result<Credentials, ValidationError> {
    let username = username.trim();
    let password = password.trim();

    if username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }

    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
