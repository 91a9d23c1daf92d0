use anyhow::ensure;
use chrono::Utc;

use parma_core::{Lang, NewReview};

use super::App;
use crate::progress::Spinner;
use crate::render;

/// Handle `parma review`. The rating range is checked here too so an obvious
/// typo fails before the request goes out.
pub async fn handle(
    app: &App,
    attraction_id: &str,
    author: String,
    rating: u8,
    comment: String,
) -> anyhow::Result<()> {
    ensure!((1..=5).contains(&rating), "rating must be between 1 and 5");

    let draft = NewReview {
        attraction_id: attraction_id.to_string(),
        author,
        rating,
        comment,
        date: Utc::now(),
    };

    let spinner = Spinner::start(render::loading(app.lang), app.show_spinner);
    let created = app.client.create_review(&draft).await;
    spinner.finish();

    if app.json {
        println!("{}", serde_json::to_string_pretty(&created)?);
        return Ok(());
    }

    match created {
        Some(review) => println!("{}", render::review_row(&review)),
        None => println!(
            "{}",
            match app.lang {
                Lang::En => "Review was not saved.",
                Lang::Ru => "Отзыв не сохранён.",
            }
        ),
    }
    Ok(())
}
