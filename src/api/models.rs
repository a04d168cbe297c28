use std::fmt::{Debug, Formatter};

use http::HeaderValue;
use serde::Serialize;
use serde_json::Value;

use crate::prelude::*;

/// Bearer token issued by the login endpoint.
#[must_use]
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn to_bearer(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// Latest power data of all the systems registered to the account.
///
/// Records are passed through as they come from the API.
#[must_use]
#[derive(
    Clone,
    Debug,
    PartialEq,
    Serialize,
    derive_more::Deref,
    derive_more::Index,
    derive_more::IntoIterator,
)]
pub struct BatteryData(pub Vec<Value>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_ok() -> Result {
        let header = AccessToken::from("t0k3n").to_bearer()?;
        assert_eq!(header, "Bearer t0k3n");
        assert!(header.is_sensitive());
        Ok(())
    }

    #[test]
    fn test_bearer_invalid() {
        let result = AccessToken::from("line\nbreak").to_bearer();
        assert!(matches!(result, Err(Error::InvalidHeader(_))));
    }

    #[test]
    fn test_debug_hides_token() {
        assert_eq!(format!("{:?}", AccessToken::from("t0k3n")), "AccessToken([REDACTED])");
    }
}
