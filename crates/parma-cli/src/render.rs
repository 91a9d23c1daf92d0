//! Plain-text rendering of catalog entities.
//!
//! All functions return strings rather than printing, so they can be asserted
//! on directly. Bilingual fields go through [`Lang::pick`], which falls back
//! to the other language when a side is empty.

use parma_core::{Attraction, Category, Lang, Review};

/// The spinner message while a fetch is in flight.
#[must_use]
pub fn loading(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "Loading…",
        Lang::Ru => "Загрузка…",
    }
}

/// The empty-state line for list views.
#[must_use]
pub fn empty_state(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "Nothing found.",
        Lang::Ru => "Ничего не найдено.",
    }
}

/// One list row: `#id  ★rating  name — category`.
#[must_use]
pub fn attraction_row(attraction: &Attraction, lang: Lang) -> String {
    let name = lang.pick(&attraction.name, &attraction.name_ru);
    let category = lang.pick(&attraction.category_slug, &attraction.category_name_ru);
    if category.is_empty() {
        format!("#{:<4} ★{:.1}  {name}", attraction.id, attraction.rating)
    } else {
        format!(
            "#{:<4} ★{:.1}  {name} — {category}",
            attraction.id, attraction.rating
        )
    }
}

/// Render a list: capped rows, then a cosmetic "more" marker, or the
/// empty-state line when there is nothing to show.
#[must_use]
pub fn attraction_list(
    visible: &[Attraction],
    hidden_count: usize,
    lang: Lang,
) -> String {
    if visible.is_empty() {
        return empty_state(lang).to_string();
    }
    let mut out: Vec<String> = visible
        .iter()
        .map(|attraction| attraction_row(attraction, lang))
        .collect();
    if hidden_count > 0 {
        out.push(match lang {
            Lang::En => format!("… {hidden_count} more"),
            Lang::Ru => format!("… ещё {hidden_count}"),
        });
    }
    out.join("\n")
}

/// Full detail view of one attraction.
#[must_use]
pub fn attraction_detail(attraction: &Attraction, lang: Lang) -> String {
    let mut out = vec![
        format!(
            "{}  (★{:.1})",
            lang.pick(&attraction.name, &attraction.name_ru),
            attraction.rating
        ),
        lang.pick(&attraction.description, &attraction.description_ru)
            .to_string(),
        lang.pick(&attraction.address, &attraction.address_ru)
            .to_string(),
    ];
    if let Some(hours) = lang.pick_opt(
        attraction.opening_hours.as_deref(),
        attraction.opening_hours_ru.as_deref(),
    ) {
        out.push(match lang {
            Lang::En => format!("Hours: {hours}"),
            Lang::Ru => format!("Часы работы: {hours}"),
        });
    }
    if let Some(fee) = lang.pick_opt(
        attraction.entry_fee.as_deref(),
        attraction.entry_fee_ru.as_deref(),
    ) {
        out.push(match lang {
            Lang::En => format!("Entry: {fee}"),
            Lang::Ru => format!("Вход: {fee}"),
        });
    }
    if let (Some(lat), Some(lon)) = (attraction.latitude, attraction.longitude) {
        out.push(format!("{lat:.4}, {lon:.4}"));
    }
    if !attraction.amenities.is_empty() {
        out.push(attraction.amenities.join(", "));
    }
    out.retain(|line| !line.is_empty());
    out.join("\n")
}

/// The not-found line for detail views. Rendered, not errored: a missing id
/// is an empty state.
#[must_use]
pub fn not_found(id: &str, lang: Lang) -> String {
    match lang {
        Lang::En => format!("No attraction with id {id}."),
        Lang::Ru => format!("Достопримечательность с id {id} не найдена."),
    }
}

/// One category row: `slug — localized name`.
#[must_use]
pub fn category_row(category: &Category, lang: Lang) -> String {
    format!(
        "{:<16} {}",
        category.slug,
        lang.pick(&category.name, &category.name_ru)
    )
}

/// One review row: `date  ★rating  author: comment`.
#[must_use]
pub fn review_row(review: &Review) -> String {
    format!(
        "{}  ★{}  {}: {}",
        review.date.format("%Y-%m-%d"),
        review.rating,
        review.author,
        review.comment
    )
}
