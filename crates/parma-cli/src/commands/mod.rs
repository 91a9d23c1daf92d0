//! One handler per subcommand.

mod browse;
mod categories;
mod featured;
mod list;
mod review;
mod reviews;
mod show;

use parma_api::CatalogClient;
use parma_core::Lang;

use crate::cli::Commands;

/// Everything a command handler needs: the configured client plus the
/// resolved presentation settings.
pub struct App {
    pub client: CatalogClient,
    pub lang: Lang,
    pub page_size: usize,
    pub featured_limit: usize,
    pub json: bool,
    pub show_spinner: bool,
}

pub async fn dispatch(command: Commands, app: &App) -> anyhow::Result<()> {
    match command {
        Commands::List { category, search } => {
            list::handle(app, category.as_deref(), search.as_deref()).await
        }
        Commands::Show { id } => show::handle(app, &id).await,
        Commands::Featured { limit } => featured::handle(app, limit).await,
        Commands::Categories => categories::handle(app).await,
        Commands::Reviews { attraction_id } => reviews::handle(app, &attraction_id).await,
        Commands::Review {
            attraction_id,
            author,
            rating,
            comment,
        } => review::handle(app, &attraction_id, author, rating, comment).await,
        Commands::Browse => browse::handle(app).await,
    }
}
