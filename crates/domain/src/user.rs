use crate::{AuthError, Name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub login: Name,
    /// Opaque credential compared by equality only.
    pub password_hash: String,
}

impl User {
    pub fn new(login: &str, password_hash: &str) -> Result<Self, AuthError> {
        if login.trim().is_empty() || password_hash.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        Ok(Self {
            login: Name::new(login)?,
            password_hash: password_hash.to_string(),
        })
    }

    #[must_use]
    pub fn verify(&self, password_hash: &str) -> bool {
        self.password_hash == password_hash
    }
}
