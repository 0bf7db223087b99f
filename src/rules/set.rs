use std::path::Path;

use regex::Regex;
use tracing::debug;

use super::config::RouteRuleConfig;
use crate::alblog::LogRecord;
use crate::error::RuleConfigError;

/// A validated, compiled rule.
#[derive(Debug, Clone)]
pub struct RouteRule {
    host: String,
    method: Option<String>,
    pattern: Regex,
    route: String,
}

impl RouteRule {
    fn compile(index: usize, config: &RouteRuleConfig) -> Result<Self, RuleConfigError> {
        let host = required(index, "host", config.host.as_deref())?;
        let path = required(index, "path", config.path.as_deref())?;
        let route = required(index, "route", config.route.as_deref())?;
        let pattern = Regex::new(path).map_err(|err| RuleConfigError::InvalidPattern {
            index,
            pattern: path.to_owned(),
            source: err,
        })?;
        let method = match config.method.as_deref() {
            None | Some("") => None,
            Some(method) => Some(not_blank(index, "method", method)?.to_ascii_uppercase()),
        };

        Ok(Self {
            host: host.to_owned(),
            method,
            pattern,
            route: route.to_owned(),
        })
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    #[must_use]
    pub fn matches(&self, record: &LogRecord) -> bool {
        if record.host != self.host {
            return false;
        }
        if let Some(method) = self.method.as_deref()
            && !method.eq_ignore_ascii_case(&record.method)
        {
            return false;
        }
        self.pattern.is_match(&record.path)
    }
}

fn required<'config>(
    index: usize,
    field: &'static str,
    value: Option<&'config str>,
) -> Result<&'config str, RuleConfigError> {
    let value = value
        .filter(|value| !value.is_empty())
        .ok_or(RuleConfigError::MissingField { index, field })?;
    not_blank(index, field, value)
}

/// Values are used as written. Whitespace-only values are rejected.
fn not_blank<'config>(
    index: usize,
    field: &'static str,
    value: &'config str,
) -> Result<&'config str, RuleConfigError> {
    if value.trim().is_empty() {
        return Err(RuleConfigError::BlankField { index, field });
    }
    Ok(value)
}

/// Ordered, immutable list of compiled rules.
///
/// A set with no rules is "disabled" and classifies nothing.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<RouteRule>,
}

impl RuleSet {
    #[must_use]
    pub const fn disabled() -> Self {
        Self { rules: Vec::new() }
    }

    /// Compiles rules from a JSON array. Blank text yields a disabled set.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is invalid or any rule fails to
    /// compile.
    pub fn from_json(text: &str) -> Result<Self, RuleConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::disabled());
        }
        let configs: Vec<RouteRuleConfig> = serde_json::from_str(text)
            .map_err(|err| RuleConfigError::InvalidJson { source: err })?;
        Self::from_configs(&configs)
    }

    /// Reads and compiles a JSON rules file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or its content is
    /// rejected by [`RuleSet::from_json`].
    pub fn from_file(path: &Path) -> Result<Self, RuleConfigError> {
        let text = std::fs::read_to_string(path).map_err(|err| RuleConfigError::ReadFile {
            path: path.to_path_buf(),
            source: err,
        })?;
        Self::from_json(&text)
    }

    /// Compiles already-deserialized rules, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns the first rule that is missing a required field or has an
    /// invalid pattern. Nothing is compiled in that case.
    pub fn from_configs(configs: &[RouteRuleConfig]) -> Result<Self, RuleConfigError> {
        let rules = configs
            .iter()
            .enumerate()
            .map(|(index, config)| RouteRule::compile(index, config))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(rules = rules.len(), "Compiled path rules");
        Ok(Self { rules })
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.rules.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    /// Returns the route of the first matching rule.
    #[must_use]
    pub fn classify(&self, record: &LogRecord) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(record))
            .map(RouteRule::route)
    }
}
