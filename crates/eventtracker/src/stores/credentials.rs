use eventtracker_core::error::{Result, TrackerError};
use eventtracker_core::storage::UserRepository;
use eventtracker_core::users::{validate_credentials, UserId};

/// Username/password registration and login.
///
/// Passwords are stored as entered and compared by exact equality. That is
/// the behavior existing databases rely on; it is not real authentication.
pub struct CredentialStore<'a, R: ?Sized> {
    repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> CredentialStore<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Returns true if a user with exactly this username exists.
    pub async fn exists(&self, username: &str) -> Result<bool> {
        Ok(self.repo.get_user_by_username(username).await?.is_some())
    }

    /// Returns true if a user matches both username and password exactly.
    ///
    /// Both fields are trimmed first and must be non-empty.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<bool> {
        let credentials = validate_credentials(username, password)?;
        let matched = self
            .repo
            .get_user_by_credentials(&credentials)
            .await?
            .is_some();

        if matched {
            tracing::info!(username = %credentials.username, "Login succeeded");
        } else {
            tracing::info!(username = %credentials.username, "Login rejected");
        }
        Ok(matched)
    }

    /// Registers a new user, failing if the username is taken.
    pub async fn register(&self, username: &str, password: &str) -> Result<UserId> {
        let credentials = validate_credentials(username, password)?;

        if self.exists(&credentials.username).await? {
            tracing::debug!(username = %credentials.username, "Username already registered");
            return Err(TrackerError::AlreadyExists {
                entity_type: "User",
                id: credentials.username,
            });
        }

        let id = self.repo.create_user(&credentials).await?;
        tracing::info!(user_id = %id, username = %credentials.username, "User registered");
        Ok(id)
    }
}
