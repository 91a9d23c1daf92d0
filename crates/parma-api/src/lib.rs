//! # parma-api
//!
//! Backend HTTP adapters for the Parma catalog.
//!
//! Two headless-CMS flavors serve the same content with incompatible wire
//! shapes:
//! - Django REST (`django`) — flat snake_case records, optional DRF
//!   pagination envelope
//! - Strapi (`strapi`) — nested `data`/`attributes` envelopes with
//!   `populate`/`filters` query directives
//!
//! [`CatalogClient`] dispatches on the configured [`Flavor`] and maps both
//! shapes onto the normalized entities from `parma-core`. Every operation
//! exists twice: a fallible `try_*` method for callers that want the error,
//! and a swallowing counterpart that logs the failure and returns an empty
//! collection or `None` — the policy the frontend this client replaces ran
//! on.

pub mod django;
pub mod strapi;

mod error;
mod http;

pub use error::ApiError;

use parma_core::{Attraction, Category, NewReview, Review};

// ── Flavor ─────────────────────────────────────────────────────────

/// Wire flavor of the configured backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Django,
    Strapi,
}

impl Flavor {
    /// Parse a flavor name from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnsupportedFlavor`] for anything other than the
    /// recognized names.
    pub fn parse(name: &str) -> Result<Self, ApiError> {
        match name.to_ascii_lowercase().as_str() {
            "django" | "drf" => Ok(Self::Django),
            "strapi" | "cms" => Ok(Self::Strapi),
            _ => Err(ApiError::UnsupportedFlavor(name.to_string())),
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for one configured catalog backend.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    flavor: Flavor,
}

impl CatalogClient {
    /// Create a client against `base_url` (without the `/api` suffix).
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: &str, flavor: Flavor) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("parma/0.1")
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
            flavor,
        }
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Fallible operations ────────────────────────────────────────

    /// Fetch attractions, optionally filtered by category slug and/or a
    /// free-text query. The slug `"all"` is equivalent to no filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the payload cannot be parsed.
    pub async fn try_attractions(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Attraction>, ApiError> {
        let category = category.filter(|slug| !Category::is_all_slug(slug));
        let search = search.filter(|q| !q.is_empty());
        match self.flavor {
            Flavor::Django => self.django_attractions(category, search).await,
            Flavor::Strapi => self.strapi_attractions(category, search).await,
        }
    }

    /// Fetch one attraction by id. `Ok(None)` when the backend has no such
    /// record (404 or a null payload).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status (other than 404), or parse
    /// failures.
    pub async fn try_attraction(&self, id: &str) -> Result<Option<Attraction>, ApiError> {
        match self.flavor {
            Flavor::Django => self.django_attraction(id).await,
            Flavor::Strapi => self.strapi_attraction(id).await,
        }
    }

    /// Fetch the top-rated attractions, at most `limit` of them.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failures.
    pub async fn try_featured(&self, limit: usize) -> Result<Vec<Attraction>, ApiError> {
        match self.flavor {
            Flavor::Django => self.django_featured(limit).await,
            Flavor::Strapi => self.strapi_featured(limit).await,
        }
    }

    /// Fetch all categories, with the synthetic "All" entry prepended at
    /// index 0.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failures.
    pub async fn try_categories(&self) -> Result<Vec<Category>, ApiError> {
        let fetched = match self.flavor {
            Flavor::Django => self.django_categories().await?,
            Flavor::Strapi => self.strapi_categories().await?,
        };
        let mut categories = Vec::with_capacity(fetched.len() + 1);
        categories.push(Category::all());
        categories.extend(fetched);
        Ok(categories)
    }

    /// Fetch the reviews of one attraction, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failures.
    pub async fn try_reviews(&self, attraction_id: &str) -> Result<Vec<Review>, ApiError> {
        match self.flavor {
            Flavor::Django => self.django_reviews(attraction_id).await,
            Flavor::Strapi => self.strapi_reviews(attraction_id).await,
        }
    }

    /// Post a new review. Returns the created record as the backend stored
    /// it. This is the only outbound write in the system.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failures, and
    /// [`ApiError::Parse`] when the draft's `attraction_id` is not numeric.
    pub async fn try_create_review(&self, draft: &NewReview) -> Result<Review, ApiError> {
        match self.flavor {
            Flavor::Django => self.django_create_review(draft).await,
            Flavor::Strapi => self.strapi_create_review(draft).await,
        }
    }

    // ── Swallowing facade ──────────────────────────────────────────
    //
    // Failures are logged and converted to empty results. No retries, no
    // backoff; the caller renders an empty state instead of an error.

    /// [`CatalogClient::try_attractions`], with failures logged and turned
    /// into an empty list.
    pub async fn attractions(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Vec<Attraction> {
        self.try_attractions(category, search)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(endpoint = "places", %e, "catalog request failed");
                Vec::new()
            })
    }

    /// [`CatalogClient::try_attraction`], with failures logged and turned
    /// into `None`.
    pub async fn attraction(&self, id: &str) -> Option<Attraction> {
        self.try_attraction(id).await.unwrap_or_else(|e| {
            tracing::warn!(endpoint = "places/{id}", id, %e, "catalog request failed");
            None
        })
    }

    /// [`CatalogClient::try_featured`], with failures logged and turned into
    /// an empty list.
    pub async fn featured(&self, limit: usize) -> Vec<Attraction> {
        self.try_featured(limit).await.unwrap_or_else(|e| {
            tracing::warn!(endpoint = "places/featured", %e, "catalog request failed");
            Vec::new()
        })
    }

    /// [`CatalogClient::try_categories`], with failures logged and reduced
    /// to the synthetic "All" entry alone, so the list view always has its
    /// unfiltered choice.
    pub async fn categories(&self) -> Vec<Category> {
        self.try_categories().await.unwrap_or_else(|e| {
            tracing::warn!(endpoint = "categories", %e, "catalog request failed");
            vec![Category::all()]
        })
    }

    /// [`CatalogClient::try_reviews`], with failures logged and turned into
    /// an empty list.
    pub async fn reviews(&self, attraction_id: &str) -> Vec<Review> {
        self.try_reviews(attraction_id).await.unwrap_or_else(|e| {
            tracing::warn!(endpoint = "reviews", attraction_id, %e, "catalog request failed");
            Vec::new()
        })
    }

    /// [`CatalogClient::try_create_review`], with failures logged and turned
    /// into `None`.
    pub async fn create_review(&self, draft: &NewReview) -> Option<Review> {
        match self.try_create_review(draft).await {
            Ok(review) => Some(review),
            Err(e) => {
                tracing::warn!(endpoint = "reviews", %e, "review creation failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A loopback port nothing listens on: requests fail fast with a connect
    // error, which lets the swallowing facade be exercised without a network.
    const DEAD_BACKEND: &str = "http://127.0.0.1:9";

    #[test]
    fn flavor_parsing_and_aliases() {
        assert_eq!(Flavor::parse("django").unwrap(), Flavor::Django);
        assert_eq!(Flavor::parse("DRF").unwrap(), Flavor::Django);
        assert_eq!(Flavor::parse("Strapi").unwrap(), Flavor::Strapi);
        assert_eq!(Flavor::parse("cms").unwrap(), Flavor::Strapi);
        assert!(matches!(
            Flavor::parse("contentful"),
            Err(ApiError::UnsupportedFlavor(_))
        ));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = CatalogClient::new("http://localhost:8000/", Flavor::Django);
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn facade_swallows_into_empty_list() {
        let client = CatalogClient::new(DEAD_BACKEND, Flavor::Django);
        assert!(client.attractions(None, None).await.is_empty());
        assert!(client.featured(4).await.is_empty());
        assert!(client.reviews("1").await.is_empty());
    }

    #[tokio::test]
    async fn facade_swallows_into_none() {
        let client = CatalogClient::new(DEAD_BACKEND, Flavor::Strapi);
        assert!(client.attraction("1").await.is_none());
    }

    #[tokio::test]
    async fn categories_keep_the_all_entry_on_failure() {
        let client = CatalogClient::new(DEAD_BACKEND, Flavor::Django);
        let categories = client.categories().await;
        assert_eq!(categories, vec![Category::all()]);
    }

    #[tokio::test]
    async fn fallible_methods_do_surface_errors() {
        let client = CatalogClient::new(DEAD_BACKEND, Flavor::Django);
        assert!(client.try_attractions(None, None).await.is_err());
        assert!(client.try_categories().await.is_err());
    }

    #[tokio::test]
    #[ignore] // requires a running backend
    async fn live_list_and_detail() {
        let client = CatalogClient::new("http://localhost:8000", Flavor::Django);
        let attractions = client.try_attractions(None, None).await.unwrap();
        println!("── places ── {} results", attractions.len());
        if let Some(first) = attractions.first() {
            let detail = client.try_attraction(&first.id).await.unwrap();
            println!("  detail: {detail:#?}");
        }
    }
}
