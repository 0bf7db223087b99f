use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

pub const DEFAULT_NAMESPACE: &str = "ALBAccessLog";
pub const MAX_NAMESPACE_LEN: usize = 255;
const RESERVED_PREFIX: &str = "AWS/";

/// A CloudWatch namespace that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// Validates a namespace.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the value is empty, longer than
    /// 255 characters, contains anything outside printable ASCII, or uses
    /// the reserved `AWS/` prefix.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::NamespaceEmpty);
        }
        let length = value.chars().count();
        if length > MAX_NAMESPACE_LEN {
            return Err(ValidationError::NamespaceTooLong {
                length,
                max: MAX_NAMESPACE_LEN,
            });
        }
        if !value.bytes().all(|byte| matches!(byte, 0x20..=0x7E)) {
            return Err(ValidationError::NamespaceNotPrintable);
        }
        if value.starts_with(RESERVED_PREFIX) {
            return Err(ValidationError::NamespaceReserved {
                prefix: RESERVED_PREFIX,
            });
        }
        Ok(Self(value.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self(DEFAULT_NAMESPACE.to_owned())
    }
}

impl FromStr for Namespace {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
