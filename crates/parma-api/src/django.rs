//! Django REST wire module.
//!
//! Flat snake_case records. Two quirks of this flavor are handled here:
//! - list endpoints answer either a bare JSON array or a DRF pagination
//!   envelope `{"results": [...]}`, depending on backend settings;
//! - DRF serializes `DecimalField` (ratings, coordinates) as strings unless
//!   configured otherwise, so numeric fields accept both forms.
//!
//! Any missing or malformed field maps to its documented default (empty
//! string, empty list, `false`, `0.0`) instead of failing the record.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::{ApiError, CatalogClient, http::ensure_success};
use parma_core::{Attraction, Category, NewReview, Review};

// ── Wire shapes ────────────────────────────────────────────────────

/// Bare array or DRF pagination envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum Page<T> {
    Bare(Vec<T>),
    Paginated {
        #[serde(default = "Vec::new")]
        results: Vec<T>,
    },
}

impl<T> Page<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Paginated { results: items } => items,
        }
    }
}

#[derive(Deserialize)]
struct DjangoPlace {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    name_ru: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    description_ru: String,
    // List payloads flatten the category to these two fields...
    #[serde(default)]
    category_slug: String,
    #[serde(default)]
    category_name_ru: String,
    // ...detail payloads nest the whole object instead.
    #[serde(default)]
    category: Option<DjangoCategory>,
    #[serde(default, deserialize_with = "lenient_f64")]
    rating: f64,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    images: Vec<DjangoImage>,
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
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    longitude: Option<f64>,
    #[serde(default)]
    amenities: Vec<String>,
    #[serde(default)]
    is_open: bool,
}

#[derive(Deserialize)]
struct DjangoCategory {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    name_ru: String,
    #[serde(default)]
    slug: String,
}

#[derive(Deserialize)]
struct DjangoImage {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    order: i64,
}

#[derive(Deserialize)]
struct DjangoReview {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    place: i64,
    #[serde(default)]
    author: String,
    #[serde(default)]
    rating: i64,
    #[serde(default)]
    comment: String,
    #[serde(default, deserialize_with = "lenient_datetime")]
    date: DateTime<Utc>,
}

// ── Lenient field parsing ──────────────────────────────────────────

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_f64(deserializer)?.unwrap_or(0.0))
}

fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Str(s)) => s.trim().parse().ok(),
        None => None,
    })
}

fn lenient_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(parse_datetime(&raw))
}

/// Parse a backend timestamp, accepting RFC 3339 and the naive
/// `YYYY-MM-DDTHH:MM:SS` form DRF emits without `USE_TZ`. Unparseable input
/// maps to the Unix epoch rather than failing the record.
fn parse_datetime(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| naive.and_utc())
        })
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

// ── Mapping ────────────────────────────────────────────────────────

fn map_place(place: DjangoPlace) -> Attraction {
    // Detail payloads carry the nested category; lists carry the flattened
    // slug/name pair. Prefer whichever is present.
    let (category_slug, category_name_ru) = match place.category {
        Some(cat) => (cat.slug, cat.name_ru),
        None => (place.category_slug, place.category_name_ru),
    };

    let mut gallery = place.images;
    gallery.sort_by_key(|img| img.order);

    Attraction {
        id: place.id.to_string(),
        name: place.name,
        name_ru: place.name_ru,
        description: place.description,
        description_ru: place.description_ru,
        category_slug,
        category_name_ru,
        rating: place.rating,
        image: place.image_url.unwrap_or_default(),
        images: gallery.into_iter().filter_map(|img| img.url).collect(),
        address: place.address,
        address_ru: place.address_ru,
        opening_hours: place.opening_hours,
        opening_hours_ru: place.opening_hours_ru,
        entry_fee: place.entry_fee,
        entry_fee_ru: place.entry_fee_ru,
        latitude: place.latitude,
        longitude: place.longitude,
        amenities: place.amenities,
        is_open: place.is_open,
    }
}

fn map_category(category: DjangoCategory) -> Category {
    Category {
        id: category.id.to_string(),
        name: category.name,
        name_ru: category.name_ru,
        slug: category.slug,
    }
}

fn map_review(review: DjangoReview) -> Review {
    Review {
        id: review.id.to_string(),
        attraction_id: review.place.to_string(),
        author: review.author,
        rating: u8::try_from(review.rating.clamp(0, 5)).unwrap_or(0),
        comment: review.comment,
        date: review.date,
    }
}

/// Build the list query string (`?category=..&search=..`), empty when both
/// filters are absent.
fn list_query(category: Option<&str>, search: Option<&str>) -> String {
    let mut params = Vec::new();
    if let Some(slug) = category {
        params.push(format!("category={}", urlencoding::encode(slug)));
    }
    if let Some(query) = search {
        params.push(format!("search={}", urlencoding::encode(query)));
    }
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

// ── Requests ───────────────────────────────────────────────────────

impl CatalogClient {
    pub(crate) async fn django_attractions(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Attraction>, ApiError> {
        let url = format!(
            "{}/api/places/{}",
            self.base_url(),
            list_query(category, search)
        );
        let resp = ensure_success(self.http().get(&url).send().await?).await?;
        let page: Page<DjangoPlace> = resp.json().await?;
        Ok(page.into_items().into_iter().map(map_place).collect())
    }

    pub(crate) async fn django_attraction(
        &self,
        id: &str,
    ) -> Result<Option<Attraction>, ApiError> {
        let url = format!(
            "{}/api/places/{}/",
            self.base_url(),
            urlencoding::encode(id)
        );
        let resp = match ensure_success(self.http().get(&url).send().await?).await {
            Ok(resp) => resp,
            Err(ApiError::NotFound) => return Ok(None),
            Err(e) => return Err(e),
        };
        let place: DjangoPlace = resp.json().await?;
        Ok(Some(map_place(place)))
    }

    pub(crate) async fn django_featured(
        &self,
        limit: usize,
    ) -> Result<Vec<Attraction>, ApiError> {
        let url = format!("{}/api/places/featured/?limit={limit}", self.base_url());
        let resp = ensure_success(self.http().get(&url).send().await?).await?;
        let page: Page<DjangoPlace> = resp.json().await?;
        Ok(page.into_items().into_iter().map(map_place).collect())
    }

    pub(crate) async fn django_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = format!("{}/api/categories/", self.base_url());
        let resp = ensure_success(self.http().get(&url).send().await?).await?;
        let page: Page<DjangoCategory> = resp.json().await?;
        Ok(page.into_items().into_iter().map(map_category).collect())
    }

    pub(crate) async fn django_reviews(
        &self,
        attraction_id: &str,
    ) -> Result<Vec<Review>, ApiError> {
        let url = format!(
            "{}/api/reviews/?place={}",
            self.base_url(),
            urlencoding::encode(attraction_id)
        );
        let resp = ensure_success(self.http().get(&url).send().await?).await?;
        let page: Page<DjangoReview> = resp.json().await?;
        Ok(page.into_items().into_iter().map(map_review).collect())
    }

    pub(crate) async fn django_create_review(
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
            "place": place,
            "author": draft.author,
            "rating": draft.rating,
            "comment": draft.comment,
            "date": draft.date.to_rfc3339(),
        });
        let url = format!("{}/api/reviews/", self.base_url());
        let resp = ensure_success(self.http().post(&url).json(&body).send().await?).await?;
        let review: DjangoReview = resp.json().await?;
        Ok(map_review(review))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LIST_FIXTURE: &str = r#"{
        "count": 2,
        "next": null,
        "previous": null,
        "results": [
            {
                "id": 1,
                "name": "Manpupuner Rock Formations",
                "name_ru": "Маньпупунёр",
                "description": "Seven stone pillars west of the Urals",
                "description_ru": "Столбы выветривания",
                "category_slug": "nature",
                "category_name_ru": "Природа",
                "rating": "4.9",
                "image_url": "http://localhost:8000/media/places/images/manpupuner.jpg",
                "address": "Troitsko-Pechorsky District",
                "address_ru": "Троицко-Печорский район",
                "latitude": "62.254200",
                "longitude": "59.454200"
            },
            {
                "id": 2,
                "name": "National Gallery",
                "name_ru": "Национальная галерея",
                "description": "",
                "description_ru": "",
                "category_slug": "museums",
                "category_name_ru": "Музеи",
                "rating": 4.5,
                "image_url": null,
                "address": "Kirova St, 44",
                "address_ru": "ул. Кирова, 44",
                "latitude": null,
                "longitude": null
            }
        ]
    }"#;

    const DETAIL_FIXTURE: &str = r#"{
        "id": 1,
        "name": "Manpupuner Rock Formations",
        "name_ru": "Маньпупунёр",
        "description": "Seven stone pillars west of the Urals",
        "description_ru": "Столбы выветривания",
        "category": {
            "id": 3,
            "name": "Nature",
            "name_ru": "Природа",
            "slug": "nature"
        },
        "rating": "4.9",
        "image_url": "http://localhost:8000/media/places/images/manpupuner.jpg",
        "images": [
            {"id": 11, "url": "http://localhost:8000/media/places/gallery/b.jpg", "caption": "", "order": 2},
            {"id": 10, "url": "http://localhost:8000/media/places/gallery/a.jpg", "caption": "ridge", "order": 1}
        ],
        "address": "Troitsko-Pechorsky District",
        "address_ru": "Троицко-Печорский район",
        "opening_hours": "24/7 (permit required)",
        "opening_hours_ru": "Круглосуточно (требуется разрешение)",
        "entry_fee": "Free (permit required)",
        "entry_fee_ru": "Бесплатно (требуется разрешение)",
        "latitude": "62.254200",
        "longitude": "59.454200",
        "amenities": ["hiking", "photography", "camping"],
        "is_open": true,
        "created_at": "2024-01-10T08:00:00Z",
        "updated_at": "2024-06-02T14:30:00Z"
    }"#;

    #[test]
    fn paginated_envelope_and_bare_array_both_parse() {
        let page: Page<DjangoPlace> = serde_json::from_str(LIST_FIXTURE).unwrap();
        assert_eq!(page.into_items().len(), 2);

        let bare: Page<DjangoPlace> = serde_json::from_str(r#"[{"id": 5}]"#).unwrap();
        assert_eq!(bare.into_items().len(), 1);
    }

    #[test]
    fn list_record_maps_with_string_decimals() {
        let page: Page<DjangoPlace> = serde_json::from_str(LIST_FIXTURE).unwrap();
        let attractions: Vec<Attraction> =
            page.into_items().into_iter().map(map_place).collect();

        let first = &attractions[0];
        assert_eq!(first.id, "1");
        assert_eq!(first.name_ru, "Маньпупунёр");
        assert_eq!(first.category_slug, "nature");
        assert!((first.rating - 4.9).abs() < f64::EPSILON);
        assert_eq!(first.latitude, Some(62.2542));
        // list views never carry the gallery
        assert!(first.images.is_empty());

        let second = &attractions[1];
        assert!((second.rating - 4.5).abs() < f64::EPSILON);
        assert_eq!(second.image, "");
        assert!(second.latitude.is_none());
    }

    #[test]
    fn detail_record_uses_nested_category_and_ordered_gallery() {
        let place: DjangoPlace = serde_json::from_str(DETAIL_FIXTURE).unwrap();
        let attraction = map_place(place);

        assert_eq!(attraction.category_slug, "nature");
        assert_eq!(attraction.category_name_ru, "Природа");
        assert_eq!(
            attraction.images,
            vec![
                "http://localhost:8000/media/places/gallery/a.jpg",
                "http://localhost:8000/media/places/gallery/b.jpg",
            ]
        );
        assert_eq!(
            attraction.opening_hours.as_deref(),
            Some("24/7 (permit required)")
        );
        assert!(attraction.is_open);
    }

    #[test]
    fn minimal_record_gets_documented_defaults() {
        let place: DjangoPlace = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        let attraction = map_place(place);

        assert_eq!(attraction.id, "3");
        assert_eq!(attraction.name, "");
        assert_eq!(attraction.category_slug, "");
        assert!((attraction.rating - 0.0).abs() < f64::EPSILON);
        assert_eq!(attraction.image, "");
        assert!(attraction.images.is_empty());
        assert!(attraction.amenities.is_empty());
        assert!(!attraction.is_open);
        assert!(attraction.latitude.is_none());
    }

    #[test]
    fn malformed_numeric_strings_default_instead_of_failing() {
        let place: DjangoPlace =
            serde_json::from_str(r#"{"id": 4, "rating": "n/a", "latitude": "north"}"#).unwrap();
        let attraction = map_place(place);
        assert!((attraction.rating - 0.0).abs() < f64::EPSILON);
        assert!(attraction.latitude.is_none());
    }

    #[test]
    fn review_maps_and_clamps_rating() {
        let fixture = r#"[
            {"id": 7, "place": 1, "author": "Anna", "rating": 5,
             "comment": "Стоит каждого километра пути", "date": "2024-08-14T10:30:00Z"},
            {"id": 8, "place": 1, "author": "Bot", "rating": 99,
             "comment": "", "date": "2024-08-14T10:30:00"}
        ]"#;
        let page: Page<DjangoReview> = serde_json::from_str(fixture).unwrap();
        let reviews: Vec<Review> = page.into_items().into_iter().map(map_review).collect();

        assert_eq!(reviews[0].attraction_id, "1");
        assert_eq!(reviews[0].rating, 5);
        assert_eq!(reviews[1].rating, 5); // clamped
        assert_eq!(reviews[0].date, reviews[1].date); // naive form parsed as UTC
    }

    #[test]
    fn unparseable_date_falls_back_to_epoch() {
        assert_eq!(parse_datetime("yesterday"), DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(parse_datetime(""), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn list_query_building() {
        assert_eq!(list_query(None, None), "");
        assert_eq!(list_query(Some("nature"), None), "?category=nature");
        assert_eq!(
            list_query(Some("nature"), Some("rock pillars")),
            "?category=nature&search=rock%20pillars"
        );
        assert_eq!(list_query(None, Some("музей")), format!(
            "?search={}",
            urlencoding::encode("музей")
        ));
    }
}
