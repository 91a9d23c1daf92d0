use super::App;
use crate::progress::Spinner;
use crate::render;

/// Handle `parma categories`. The synthetic "All" entry is part of the list
/// by contract, so it prints too.
pub async fn handle(app: &App) -> anyhow::Result<()> {
    let spinner = Spinner::start(render::loading(app.lang), app.show_spinner);
    let categories = app.client.categories().await;
    spinner.finish();

    if app.json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    for category in &categories {
        println!("{}", render::category_row(category, app.lang));
    }
    Ok(())
}
