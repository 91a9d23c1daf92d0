use super::App;
use crate::progress::Spinner;
use crate::render;

/// Handle `parma featured`.
pub async fn handle(app: &App, limit: Option<usize>) -> anyhow::Result<()> {
    let limit = limit.unwrap_or(app.featured_limit);

    let spinner = Spinner::start(render::loading(app.lang), app.show_spinner);
    let attractions = app.client.featured(limit).await;
    spinner.finish();

    if app.json {
        println!("{}", serde_json::to_string_pretty(&attractions)?);
    } else {
        println!("{}", render::attraction_list(&attractions, 0, app.lang));
    }
    Ok(())
}
