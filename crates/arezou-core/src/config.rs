//! Route manifest and render configuration.

use serde::{Deserialize, Serialize};

use crate::error::PageError;

/// Configuration for a single route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Exact request path (e.g., "/products/radiance-glow-face-oil").
    pub path: String,
    /// Handler name, used in logs and metrics.
    pub handler: String,
    /// HTTP methods this route accepts.
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,
}

fn default_methods() -> Vec<String> {
    vec!["GET".to_string(), "HEAD".to_string()]
}

impl RouteConfig {
    /// Create a new route configuration.
    pub fn new(path: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            handler: handler.into(),
            methods: default_methods(),
        }
    }

    /// Whether this route accepts the given method name.
    pub fn allows(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m.eq_ignore_ascii_case(method))
    }
}

/// Page manifest - the routes a deployable page answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageManifest {
    /// Unique name for this page.
    pub name: String,
    /// Semantic version.
    pub version: String,
    /// Routes this page handles.
    pub routes: Vec<RouteConfig>,
}

impl PageManifest {
    /// Create a new manifest.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            routes: Vec::new(),
        }
    }

    /// Add a route.
    pub fn with_route(mut self, route: RouteConfig) -> Self {
        self.routes.push(route);
        self
    }

    /// Find the route serving a path. A trailing slash is ignored.
    pub fn route_for(&self, path: &str) -> Option<&RouteConfig> {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        self.routes.iter().find(|r| r.path == trimmed)
    }

    /// The route serving `path` for `method`, or `NotFound`.
    pub fn resolve(&self, path: &str, method: &str) -> Result<&RouteConfig, PageError> {
        self.route_for(path)
            .filter(|route| route.allows(method))
            .ok_or_else(|| PageError::NotFound(path.to_string()))
    }
}

/// Render-time configuration shared by the HTTP component and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Path the page links back to (state links are relative to it).
    #[serde(default = "default_canonical_path")]
    pub canonical_path: String,

    /// Minimum log level: trace, debug, info, warn or error.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format: json or human.
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_title() -> String {
    "Radiance & Glow Face Oil | Are-zōu".to_string()
}

fn default_canonical_path() -> String {
    "/products/radiance-glow-face-oil".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            canonical_path: default_canonical_path(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

impl RenderConfig {
    /// Check field values that serde cannot.
    pub fn validate(&self) -> Result<(), PageError> {
        if self.title.trim().is_empty() {
            return Err(PageError::InvalidConfig("title must not be empty".to_string()));
        }
        if !self.canonical_path.starts_with('/') {
            return Err(PageError::InvalidConfig(format!(
                "canonical_path must start with '/': {}",
                self.canonical_path
            )));
        }
        if !matches!(
            self.log_level.as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(PageError::InvalidConfig(format!(
                "unknown log_level: {}",
                self.log_level
            )));
        }
        if !matches!(self.log_format.as_str(), "json" | "human") {
            return Err(PageError::InvalidConfig(format!(
                "unknown log_format: {}",
                self.log_format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_lookup_ignores_trailing_slash() {
        let manifest = PageManifest::new("pdp", "0.1.0")
            .with_route(RouteConfig::new("/", "pdp"))
            .with_route(RouteConfig::new("/products/oil", "pdp"));

        assert!(manifest.route_for("/").is_some());
        assert!(manifest.route_for("/products/oil/").is_some());
        assert!(manifest.route_for("/products/serum").is_none());
    }

    #[test]
    fn test_route_methods() {
        let route = RouteConfig::new("/", "pdp");
        assert!(route.allows("get"));
        assert!(route.allows("HEAD"));
        assert!(!route.allows("POST"));
    }

    #[test]
    fn test_resolve_rejects_unknown_path_and_method() {
        let manifest = PageManifest::new("pdp", "0.1.0").with_route(RouteConfig::new("/", "pdp"));

        assert_eq!(manifest.resolve("/", "GET").map(|r| r.handler.as_str()).ok(), Some("pdp"));
        assert!(matches!(
            manifest.resolve("/cart", "GET"),
            Err(PageError::NotFound(path)) if path == "/cart"
        ));
        assert!(matches!(manifest.resolve("/", "POST"), Err(PageError::NotFound(_))));
    }

    #[test]
    fn test_render_config_defaults_validate() {
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_render_config_rejects_bad_values() {
        let config = RenderConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RenderConfig {
            canonical_path: "products".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
