use super::App;
use crate::progress::Spinner;
use crate::render;
use crate::view::ListView;

/// Handle `parma list`.
pub async fn handle(
    app: &App,
    category: Option<&str>,
    search: Option<&str>,
) -> anyhow::Result<()> {
    let mut view = ListView::new(app.page_size);
    if let Some(slug) = category {
        view.set_category(slug);
    }
    if let Some(text) = search {
        view.set_query(text);
    }

    let spinner = Spinner::start(render::loading(app.lang), app.show_spinner);
    view.refresh(&app.client).await;
    spinner.finish();

    if app.json {
        println!("{}", serde_json::to_string_pretty(view.attractions())?);
    } else {
        println!(
            "{}",
            render::attraction_list(view.visible(), view.hidden_count(), app.lang)
        );
    }
    Ok(())
}
