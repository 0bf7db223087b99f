use std::fmt;

use crate::error::SigningError;

pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";
pub const SESSION_TOKEN_VAR: &str = "AWS_SESSION_TOKEN";
pub const REGION_VAR: &str = "AWS_REGION";
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Clone, PartialEq, Eq)]
pub struct AwsCredentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
}

impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "** redacted **"),
            )
            .finish()
    }
}

impl AwsCredentials {
    #[must_use]
    pub fn new(access_key_id: &str, secret_access_key: &str, session_token: Option<&str>) -> Self {
        Self {
            access_key_id: access_key_id.to_owned(),
            secret_access_key: secret_access_key.to_owned(),
            session_token: session_token.map(str::to_owned),
        }
    }

    /// Reads the standard `AWS_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`SigningError::MissingCredentials`] when the access key or
    /// secret key is unset or empty.
    pub fn from_env() -> Result<Self, SigningError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, SigningError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |variable: &'static str| {
            lookup(variable)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };
        let access_key_id = read(ACCESS_KEY_ID_VAR).ok_or(SigningError::MissingCredentials {
            variable: ACCESS_KEY_ID_VAR,
        })?;
        let secret_access_key =
            read(SECRET_ACCESS_KEY_VAR).ok_or(SigningError::MissingCredentials {
                variable: SECRET_ACCESS_KEY_VAR,
            })?;
        Ok(Self {
            access_key_id,
            secret_access_key,
            session_token: read(SESSION_TOKEN_VAR),
        })
    }

    pub(crate) fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub(crate) fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    pub(crate) fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }
}
