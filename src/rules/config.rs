use serde::{Deserialize, Serialize};

/// One rule as written in configuration, before validation.
///
/// `pattern` and `name` are accepted as older spellings of `path` and
/// `route`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteRuleConfig {
    pub host: Option<String>,
    #[serde(alias = "pattern")]
    pub path: Option<String>,
    #[serde(alias = "name")]
    pub route: Option<String>,
    pub method: Option<String>,
}

impl RouteRuleConfig {
    #[must_use]
    pub fn new(host: &str, path: &str, route: &str) -> Self {
        Self {
            host: Some(host.to_owned()),
            path: Some(path.to_owned()),
            route: Some(route.to_owned()),
            method: None,
        }
    }

    #[must_use]
    pub fn with_method(mut self, method: &str) -> Self {
        self.method = Some(method.to_owned());
        self
    }
}
