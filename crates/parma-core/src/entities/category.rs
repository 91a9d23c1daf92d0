use serde::{Deserialize, Serialize};

/// A catalog category an attraction can belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub name_ru: String,
    pub slug: String,
}

impl Category {
    /// The synthetic "All" entry prepended to every category listing.
    ///
    /// It never comes from a backend; the adapter inserts it at index 0 so
    /// the list view always has an unfiltered choice, even when the category
    /// request itself failed.
    #[must_use]
    pub fn all() -> Self {
        Self {
            id: "0".to_string(),
            name: "All Places".to_string(),
            name_ru: "Все места".to_string(),
            slug: "all".to_string(),
        }
    }

    /// Whether this slug means "no category filter".
    #[must_use]
    pub fn is_all_slug(slug: &str) -> bool {
        slug == "all"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_all_entry() {
        let all = Category::all();
        assert_eq!(all.id, "0");
        assert_eq!(all.slug, "all");
        assert!(Category::is_all_slug(&all.slug));
        assert!(!Category::is_all_slug("nature"));
    }
}
