//! Credential rule for the session gate.

/// A username/password pair entered at login.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

const VALID_USERNAME: &str = "admin";
const VALID_PASSWORD: &str = "password";

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Fixed rule: exact, case-sensitive match.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.username == VALID_USERNAME && self.password == VALID_PASSWORD
    }
}
