use std::fmt::{Debug, Formatter};

use bon::Builder;

/// Everything needed to log in: the account and the pre-computed signature pair.
#[must_use]
#[derive(Clone, Builder)]
pub struct Credentials {
    #[builder(into)]
    username: String,

    #[builder(into)]
    password: String,

    #[builder(into)]
    auth_signature: String,

    #[builder(into)]
    auth_timestamp: String,
}

impl Credentials {
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn auth_signature(&self) -> &str {
        &self.auth_signature
    }

    #[must_use]
    pub fn auth_timestamp(&self) -> &str {
        &self.auth_timestamp
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("auth_signature", &self.auth_signature)
            .field("auth_timestamp", &self.auth_timestamp)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password() {
        let credentials = Credentials::builder()
            .username("user")
            .password("hunter2")
            .auth_signature("signature")
            .auth_timestamp("1700000000")
            .build();
        let debug = format!("{credentials:?}");
        assert!(debug.contains("user"));
        assert!(!debug.contains("hunter2"));
    }
}
