//! Display-language selection for the bilingual entity fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of a bilingual field pair to render.
///
/// The catalog is Russian-first; backend records sometimes carry only one
/// language, so [`Lang::pick`] falls back to the other side rather than
/// rendering an empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lang {
    En,
    #[default]
    Ru,
}

impl Lang {
    /// Return the string representation used in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Pick the preferred side of a bilingual pair, falling back to the
    /// other side when the preferred one is empty.
    #[must_use]
    pub fn pick<'a>(self, en: &'a str, ru: &'a str) -> &'a str {
        let (preferred, fallback) = match self {
            Self::En => (en, ru),
            Self::Ru => (ru, en),
        };
        if preferred.is_empty() { fallback } else { preferred }
    }

    /// Like [`Lang::pick`] for the optional hours/fee field pairs.
    #[must_use]
    pub fn pick_opt<'a>(
        self,
        en: Option<&'a str>,
        ru: Option<&'a str>,
    ) -> Option<&'a str> {
        let (preferred, fallback) = match self {
            Self::En => (en, ru),
            Self::Ru => (ru, en),
        };
        preferred.filter(|s| !s.is_empty()).or(fallback)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_prefers_selected_language() {
        assert_eq!(Lang::Ru.pick("Museums", "Музеи"), "Музеи");
        assert_eq!(Lang::En.pick("Museums", "Музеи"), "Museums");
    }

    #[test]
    fn pick_falls_back_on_empty() {
        assert_eq!(Lang::Ru.pick("Museums", ""), "Museums");
        assert_eq!(Lang::En.pick("", "Музеи"), "Музеи");
    }

    #[test]
    fn pick_opt_skips_empty_strings() {
        assert_eq!(Lang::Ru.pick_opt(Some("Free"), Some("")), Some("Free"));
        assert_eq!(Lang::Ru.pick_opt(Some("Free"), None), Some("Free"));
        assert_eq!(Lang::En.pick_opt(None, None), None);
    }

    #[test]
    fn default_is_russian() {
        assert_eq!(Lang::default(), Lang::Ru);
        assert_eq!(Lang::default().as_str(), "ru");
    }
}
