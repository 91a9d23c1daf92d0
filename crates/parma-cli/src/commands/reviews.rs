use super::App;
use crate::progress::Spinner;
use crate::render;

/// Handle `parma reviews`.
pub async fn handle(app: &App, attraction_id: &str) -> anyhow::Result<()> {
    let spinner = Spinner::start(render::loading(app.lang), app.show_spinner);
    let reviews = app.client.reviews(attraction_id).await;
    spinner.finish();

    if app.json {
        println!("{}", serde_json::to_string_pretty(&reviews)?);
        return Ok(());
    }

    if reviews.is_empty() {
        println!("{}", render::empty_state(app.lang));
        return Ok(());
    }
    for review in &reviews {
        println!("{}", render::review_row(review));
    }
    Ok(())
}
