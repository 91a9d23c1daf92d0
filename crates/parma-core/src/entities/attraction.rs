use serde::{Deserialize, Serialize};

/// A point of interest shown to end users.
///
/// Every textual field is bilingual: the English value and its `*_ru`
/// counterpart. Either side may be empty when the backend record is
/// incomplete; [`crate::Lang::pick`] falls back to the other language at
/// render time. List endpoints leave `images`, `opening_hours`, `entry_fee`
/// and `amenities` empty — only detail lookups populate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: String,
    pub name: String,
    pub name_ru: String,
    pub description: String,
    pub description_ru: String,
    /// Slug of the category this attraction belongs to.
    pub category_slug: String,
    /// Localized category label, denormalized for list rendering.
    pub category_name_ru: String,
    /// Average rating, 0.0 when the backend has none.
    pub rating: f64,
    /// Primary image URL, empty string when absent.
    pub image: String,
    /// Gallery image URLs (detail views only).
    pub images: Vec<String>,
    pub address: String,
    pub address_ru: String,
    pub opening_hours: Option<String>,
    pub opening_hours_ru: Option<String>,
    pub entry_fee: Option<String>,
    pub entry_fee_ru: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenities: Vec<String>,
    pub is_open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn attraction_serialization_roundtrip() {
        let attraction = Attraction {
            id: "12".to_string(),
            name: "Manpupuner Rock Formations".to_string(),
            name_ru: "Маньпупунёр".to_string(),
            description: "Seven stone pillars west of the Urals".to_string(),
            description_ru: String::new(),
            category_slug: "nature".to_string(),
            category_name_ru: "Природа".to_string(),
            rating: 4.9,
            image: "https://cdn.example/manpupuner.jpg".to_string(),
            images: vec!["https://cdn.example/manpupuner-2.jpg".to_string()],
            address: "Troitsko-Pechorsky District".to_string(),
            address_ru: "Троицко-Печорский район".to_string(),
            opening_hours: Some("24/7 (permit required)".to_string()),
            opening_hours_ru: None,
            entry_fee: None,
            entry_fee_ru: None,
            latitude: Some(62.2542),
            longitude: Some(59.4542),
            amenities: vec!["hiking".to_string(), "camping".to_string()],
            is_open: true,
        };

        let json = serde_json::to_string(&attraction).unwrap();
        let back: Attraction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attraction);
        assert!(back.entry_fee.is_none());
    }
}
