//! Interactive catalog browser: the list view with live category and search
//! filtering. Every state change re-requests the adapter and re-renders; an
//! empty result set shows the empty-state line. If a slow response arrived
//! after a newer one it would overwrite it, but the loop holds only one
//! request in flight at a time, so the race cannot occur here.

use std::io::{BufRead, Write};

use parma_core::Lang;

use super::App;
use crate::progress::Spinner;
use crate::render;
use crate::view::ListView;

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    Help,
    Categories,
    Category(String),
    Show(String),
    Query(String),
    Noop,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line {
        "" => return Input::Noop,
        ":q" | ":quit" => return Input::Quit,
        ":h" | ":help" => return Input::Help,
        ":categories" => return Input::Categories,
        ":c" => return Input::Category(String::new()),
        ":clear" => return Input::Query(String::new()),
        _ => {}
    }
    if let Some(slug) = line.strip_prefix(":c ") {
        return Input::Category(slug.trim().to_string());
    }
    if let Some(id) = line.strip_prefix(":show ") {
        return Input::Show(id.trim().to_string());
    }
    // anything else is a search query
    Input::Query(line.to_string())
}

fn help_text(lang: Lang) -> &'static str {
    match lang {
        Lang::En => {
            "  <text>        search by text        :clear   drop the search\n  \
             :c <slug>     filter by category    :c       back to all\n  \
             :show <id>    attraction details    :categories  list categories\n  \
             :q            quit"
        }
        Lang::Ru => {
            "  <текст>       поиск по тексту       :clear   сбросить поиск\n  \
             :c <slug>     фильтр по категории   :c       все категории\n  \
             :show <id>    подробности места     :categories  список категорий\n  \
             :q            выход"
        }
    }
}

async fn refresh_and_render(app: &App, view: &mut ListView) {
    let spinner = Spinner::start(render::loading(app.lang), app.show_spinner);
    view.refresh(&app.client).await;
    spinner.finish();
    println!(
        "\n[{}] {}",
        view.category(),
        if view.query().is_empty() {
            "—"
        } else {
            view.query()
        }
    );
    println!(
        "{}",
        render::attraction_list(view.visible(), view.hidden_count(), app.lang)
    );
}

fn prompt() -> std::io::Result<()> {
    print!("parma> ");
    std::io::stdout().flush()
}

/// Handle `parma browse`.
pub async fn handle(app: &App) -> anyhow::Result<()> {
    let mut view = ListView::new(app.page_size);

    println!("{}", help_text(app.lang));
    refresh_and_render(app, &mut view).await;
    prompt()?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_input(&line) {
            Input::Quit => break,
            Input::Help => println!("{}", help_text(app.lang)),
            Input::Categories => {
                let spinner = Spinner::start(render::loading(app.lang), app.show_spinner);
                let categories = app.client.categories().await;
                spinner.finish();
                for category in &categories {
                    println!("{}", render::category_row(category, app.lang));
                }
            }
            Input::Category(slug) => {
                if view.set_category(&slug) {
                    refresh_and_render(app, &mut view).await;
                }
            }
            Input::Query(text) => {
                if view.set_query(&text) {
                    refresh_and_render(app, &mut view).await;
                }
            }
            Input::Show(id) => {
                let spinner = Spinner::start(render::loading(app.lang), app.show_spinner);
                let attraction = app.client.attraction(&id).await;
                spinner.finish();
                match attraction {
                    Some(attraction) => {
                        println!("{}", render::attraction_detail(&attraction, app.lang));
                    }
                    None => println!("{}", render::not_found(&id, app.lang)),
                }
            }
            Input::Noop => {}
        }
        prompt()?;
    }
    Ok(())
}
