//! Backend endpoint configuration.

use serde::{Deserialize, Serialize};

/// Default base URL — the Django development server.
fn default_url() -> String {
    "http://localhost:8000".to_string()
}

/// Default wire flavor.
fn default_flavor() -> String {
    "django".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the content API, without the `/api` suffix
    /// (e.g. `http://localhost:8000` or `http://cms.example:1337`).
    #[serde(default = "default_url")]
    pub url: String,

    /// Wire flavor of the backend: `"django"` or `"strapi"`. The string is
    /// validated when the API client is constructed, not here, so a config
    /// file with a typo still loads and fails with a pointed error at use.
    #[serde(default = "default_flavor")]
    pub flavor: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            flavor: default_flavor(),
        }
    }
}

impl BackendConfig {
    /// Whether the configured flavor is the Django REST shape.
    #[must_use]
    pub fn is_django(&self) -> bool {
        self.flavor.eq_ignore_ascii_case("django")
    }
}
