//! General application configuration.

use parma_core::Lang;
use serde::{Deserialize, Serialize};

/// Default number of featured attractions on the home view.
const fn default_featured_limit() -> usize {
    4
}

/// Default number of list rows shown before the "more" marker.
const fn default_page_size() -> usize {
    8
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Display language for bilingual fields.
    #[serde(default)]
    pub lang: Lang,

    /// How many top-rated attractions the `featured` command fetches.
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,

    /// Visible-row threshold for list views; results beyond it are elided
    /// behind a cosmetic "more" marker.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            featured_limit: default_featured_limit(),
            page_size: default_page_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.lang, Lang::Ru);
        assert_eq!(config.featured_limit, 4);
        assert_eq!(config.page_size, 8);
    }
}
