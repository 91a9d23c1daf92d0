use super::App;
use crate::progress::Spinner;
use crate::render;

/// Handle `parma show`. A missing id is an empty state, not an error: the
/// command renders a not-found line and exits zero.
pub async fn handle(app: &App, id: &str) -> anyhow::Result<()> {
    let spinner = Spinner::start(render::loading(app.lang), app.show_spinner);
    let attraction = app.client.attraction(id).await;
    spinner.finish();

    if app.json {
        println!("{}", serde_json::to_string_pretty(&attraction)?);
        return Ok(());
    }

    match attraction {
        Some(attraction) => println!("{}", render::attraction_detail(&attraction, app.lang)),
        None => println!("{}", render::not_found(id, app.lang)),
    }
    Ok(())
}
