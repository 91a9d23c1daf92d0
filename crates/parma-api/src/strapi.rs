//! Strapi wire module.
//!
//! Everything arrives wrapped: collections as `{"data": [{"id", "attributes":
//! {...}}]}`, single lookups as `{"data": {...}}` (with `data: null` for a
//! missing record), relations as another `data` envelope one level down, and
//! media as `data.attributes.url`. Attribute names are camelCase. Filtering
//! and relation population travel in query-string directives (`populate`,
//! `filters[...]`, `sort`, `pagination[limit]`).
//!
//! As with the Django flavor, missing or malformed fields map to documented
//! defaults instead of failing the record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::{ApiError, CatalogClient, http::ensure_success};
use parma_core::{Attraction, Category, NewReview, Review};

// ── Wire shapes ────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Collection<T> {
    // `data` can be absent or null as well as empty; all three mean no rows
    #[serde(default)]
    data: Option<Vec<Entry<T>>>,
}

impl<T> Collection<T> {
    fn into_entries(self) -> Vec<Entry<T>> {
        self.data.unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct Single<T> {
    data: Option<Entry<T>>,
}

#[derive(Deserialize)]
struct Entry<T> {
    #[serde(default)]
    id: i64,
    attributes: T,
}

/// A populated relation: one more `data` envelope around the related entry.
#[derive(Deserialize)]
struct Relation<T> {
    data: Option<Entry<T>>,
}

#[derive(Deserialize)]
struct MediaRelation {
    data: Option<MediaEntry>,
}

#[derive(Deserialize)]
struct MediaList {
    #[serde(default)]
    data: Option<Vec<MediaEntry>>,
}

#[derive(Deserialize)]
struct MediaEntry {
    attributes: MediaAttrs,
}

#[derive(Deserialize)]
struct MediaAttrs {
    #[serde(default)]
    url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceAttrs {
    #[serde(default)]
    name: String,
    #[serde(default)]
    name_ru: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    description_ru: String,
    #[serde(default)]
    category: Option<Relation<CategoryAttrs>>,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    image: Option<MediaRelation>,
    #[serde(default)]
    images: Option<MediaList>,
    #[serde(default)]
    address: String,
    #[serde(default)]
    address_ru: String,
    #[serde(default)]
    opening_hours: Option<String>,
    #[serde(default)]
    opening_hours_ru: Option<String>,
    #[serde(default)]
    entry_fee: Option<String>,
    #[serde(default)]
    entry_fee_ru: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    amenities: Vec<String>,
    #[serde(default)]
    is_open: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryAttrs {
    #[serde(default)]
    name: String,
    #[serde(default)]
    name_ru: String,
    #[serde(default)]
    slug: String,
}

#[derive(Deserialize)]
struct ReviewAttrs {
    #[serde(default)]
    author: String,
    #[serde(default)]
    rating: i64,
    #[serde(default)]
    comment: String,
    #[serde(default = "unix_epoch", deserialize_with = "lenient_datetime")]
    date: DateTime<Utc>,
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

fn lenient_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH))
}

// ── Mapping ────────────────────────────────────────────────────────

fn map_place(entry: Entry<PlaceAttrs>) -> Attraction {
    let attrs = entry.attributes;
    let (category_slug, category_name_ru) = attrs
        .category
        .and_then(|rel| rel.data)
        .map(|cat| (cat.attributes.slug, cat.attributes.name_ru))
        .unwrap_or_default();

    Attraction {
        id: entry.id.to_string(),
        name: attrs.name,
        name_ru: attrs.name_ru,
        description: attrs.description,
        description_ru: attrs.description_ru,
        category_slug,
        category_name_ru,
        rating: attrs.rating,
        image: attrs
            .image
            .and_then(|rel| rel.data)
            .map(|media| media.attributes.url)
            .unwrap_or_default(),
        images: attrs
            .images
            .and_then(|list| list.data)
            .map(|entries| {
                entries
                    .into_iter()
                    .map(|media| media.attributes.url)
                    .filter(|url| !url.is_empty())
                    .collect()
            })
            .unwrap_or_default(),
        address: attrs.address,
        address_ru: attrs.address_ru,
        opening_hours: attrs.opening_hours,
        opening_hours_ru: attrs.opening_hours_ru,
        entry_fee: attrs.entry_fee,
        entry_fee_ru: attrs.entry_fee_ru,
        latitude: attrs.latitude,
        longitude: attrs.longitude,
        amenities: attrs.amenities,
        is_open: attrs.is_open,
    }
}

fn map_category(entry: Entry<CategoryAttrs>) -> Category {
    Category {
        id: entry.id.to_string(),
        name: entry.attributes.name,
        name_ru: entry.attributes.name_ru,
        slug: entry.attributes.slug,
    }
}

/// Map a review entry. Strapi is not asked to populate the `place` relation;
/// the caller already knows which attraction it queried for.
fn map_review(entry: Entry<ReviewAttrs>, attraction_id: &str) -> Review {
    Review {
        id: entry.id.to_string(),
        attraction_id: attraction_id.to_string(),
        author: entry.attributes.author,
        rating: u8::try_from(entry.attributes.rating.clamp(0, 5)).unwrap_or(0),
        comment: entry.attributes.comment,
        date: entry.attributes.date,
    }
}

/// Build the place-list query directives: always populate relations and sort
/// by rating; add a slug filter and a four-way `$or` text filter (name and
/// description, both languages) when requested.
fn list_query(category: Option<&str>, search: Option<&str>) -> String {
    let mut query = String::from("?populate=*&sort=rating:desc");
    if let Some(slug) = category {
        query.push_str(&format!(
            "&filters[category][slug][$eq]={}",
            urlencoding::encode(slug)
        ));
    }
    if let Some(text) = search {
        let encoded = urlencoding::encode(text);
        for (idx, field) in ["name", "nameRu", "description", "descriptionRu"]
            .iter()
            .enumerate()
        {
            query.push_str(&format!("&filters[$or][{idx}][{field}][$containsi]={encoded}"));
        }
    }
    query
}

// ── Requests ───────────────────────────────────────────────────────

impl CatalogClient {
    pub(crate) async fn strapi_attractions(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Attraction>, ApiError> {
        let url = format!(
            "{}/api/places{}",
            self.base_url(),
            list_query(category, search)
        );
        let resp = ensure_success(self.http().get(&url).send().await?).await?;
        let collection: Collection<PlaceAttrs> = resp.json().await?;
        Ok(collection.into_entries().into_iter().map(map_place).collect())
    }

    pub(crate) async fn strapi_attraction(
        &self,
        id: &str,
    ) -> Result<Option<Attraction>, ApiError> {
        let url = format!(
            "{}/api/places/{}?populate=*",
            self.base_url(),
            urlencoding::encode(id)
        );
        let resp = match ensure_success(self.http().get(&url).send().await?).await {
            Ok(resp) => resp,
            Err(ApiError::NotFound) => return Ok(None),
            Err(e) => return Err(e),
        };
        let single: Single<PlaceAttrs> = resp.json().await?;
        Ok(single.data.map(map_place))
    }

    pub(crate) async fn strapi_featured(
        &self,
        limit: usize,
    ) -> Result<Vec<Attraction>, ApiError> {
        let url = format!(
            "{}/api/places?populate=*&sort=rating:desc&pagination[limit]={limit}",
            self.base_url()
        );
        let resp = ensure_success(self.http().get(&url).send().await?).await?;
        let collection: Collection<PlaceAttrs> = resp.json().await?;
        Ok(collection.into_entries().into_iter().map(map_place).collect())
    }

    pub(crate) async fn strapi_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = format!("{}/api/categories?sort=name:asc", self.base_url());
        let resp = ensure_success(self.http().get(&url).send().await?).await?;
        let collection: Collection<CategoryAttrs> = resp.json().await?;
        Ok(collection.into_entries().into_iter().map(map_category).collect())
    }

    pub(crate) async fn strapi_reviews(
        &self,
        attraction_id: &str,
    ) -> Result<Vec<Review>, ApiError> {
        let url = format!(
            "{}/api/reviews?filters[place][id][$eq]={}&sort=date:desc",
            self.base_url(),
            urlencoding::encode(attraction_id)
        );
        let resp = ensure_success(self.http().get(&url).send().await?).await?;
        let collection: Collection<ReviewAttrs> = resp.json().await?;
        Ok(collection
            .into_entries()
            .into_iter()
            .map(|entry| map_review(entry, attraction_id))
            .collect())
    }

    pub(crate) async fn strapi_create_review(
        &self,
        draft: &NewReview,
    ) -> Result<Review, ApiError> {
        let place: i64 = draft.attraction_id.parse().map_err(|_| {
            ApiError::Parse(format!(
                "attraction id '{}' is not numeric",
                draft.attraction_id
            ))
        })?;
        let body = serde_json::json!({
            "data": {
                "author": draft.author,
                "rating": draft.rating,
                "comment": draft.comment,
                "date": draft.date.to_rfc3339(),
                "place": place,
            }
        });
        let url = format!("{}/api/reviews", self.base_url());
        let resp = ensure_success(self.http().post(&url).json(&body).send().await?).await?;
        let single: Single<ReviewAttrs> = resp.json().await?;
        let entry = single
            .data
            .ok_or_else(|| ApiError::Parse("review creation returned no data".to_string()))?;
        Ok(map_review(entry, &draft.attraction_id))
    }
}
