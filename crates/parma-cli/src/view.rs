//! List-view state: the selected category, the free-text query, and the
//! rows fetched for that combination.
//!
//! State changes mark the view stale; the owner re-requests the adapter and
//! re-renders. Results beyond the visible threshold stay fetched but are
//! elided behind a cosmetic "more" marker — there is no real pagination.

use parma_api::CatalogClient;
use parma_core::Attraction;

pub struct ListView {
    category: String,
    query: String,
    page_size: usize,
    attractions: Vec<Attraction>,
}

impl ListView {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            category: "all".to_string(),
            query: String::new(),
            page_size,
            attractions: Vec::new(),
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Select a category slug. Returns whether the selection changed (and a
    /// refresh is due). An empty slug resets to "all".
    pub fn set_category(&mut self, slug: &str) -> bool {
        let slug = if slug.is_empty() { "all" } else { slug };
        if self.category == slug {
            return false;
        }
        self.category = slug.to_string();
        true
    }

    /// Set the free-text query. Returns whether it changed.
    pub fn set_query(&mut self, query: &str) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query.to_string();
        true
    }

    /// The filter parameters as the adapter expects them: `None` for the
    /// "all" category and for an empty query.
    #[must_use]
    pub fn params(&self) -> (Option<&str>, Option<&str>) {
        let category = (self.category != "all").then_some(self.category.as_str());
        let query = (!self.query.is_empty()).then_some(self.query.as_str());
        (category, query)
    }

    /// Re-request the adapter with the current parameters.
    pub async fn refresh(&mut self, client: &CatalogClient) {
        let (category, query) = self.params();
        self.attractions = client.attractions(category, query).await;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attractions.is_empty()
    }

    /// Every fetched row, uncapped (JSON output wants all of them).
    #[must_use]
    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    /// The rows shown in the list, capped at the page size.
    #[must_use]
    pub fn visible(&self) -> &[Attraction] {
        let end = self.attractions.len().min(self.page_size);
        &self.attractions[..end]
    }

    /// How many fetched rows are elided behind the "more" marker.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.attractions.len().saturating_sub(self.page_size)
    }

    #[cfg(test)]
    fn set_attractions(&mut self, attractions: Vec<Attraction>) {
        self.attractions = attractions;
    }
}
