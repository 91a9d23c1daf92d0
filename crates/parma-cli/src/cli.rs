use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `parma` binary.
#[derive(Debug, Parser)]
#[command(name = "parma", version, about = "Parma — browse a regional attraction catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit the internal model as JSON instead of rendered text
    #[arg(long, global = true)]
    pub json: bool,

    /// Display language for bilingual fields: ru, en
    #[arg(long, global = true, value_parser = ["ru", "en"])]
    pub lang: Option<String>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List attractions, optionally filtered by category and text search
    List {
        /// Category slug ("all" means no filter)
        #[arg(short, long)]
        category: Option<String>,

        /// Free-text search across names and descriptions
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one attraction in full
    Show {
        /// Attraction id
        id: String,
    },

    /// Show the top-rated attractions
    Featured {
        /// How many to fetch (defaults to the configured featured_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List categories
    Categories,

    /// List the reviews of an attraction, newest first
    Reviews {
        /// Attraction id
        attraction_id: String,
    },

    /// Post a review for an attraction
    Review {
        /// Attraction id
        attraction_id: String,

        /// Reviewer name
        #[arg(long)]
        author: String,

        /// Star rating, 1-5
        #[arg(long)]
        rating: u8,

        /// Review text
        #[arg(long)]
        comment: String,
    },

    /// Browse the catalog interactively (category + search filtering)
    Browse,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_flags_parse() {
        let cli = Cli::parse_from(["parma", "list", "-c", "nature", "-s", "rock"]);
        match cli.command {
            Commands::List { category, search } => {
                assert_eq!(category.as_deref(), Some("nature"));
                assert_eq!(search.as_deref(), Some("rock"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::parse_from(["parma", "show", "12", "--json", "--lang", "en"]);
        assert!(cli.json);
        assert_eq!(cli.lang.as_deref(), Some("en"));
    }

    #[test]
    fn review_requires_its_flags() {
        let result = Cli::try_parse_from(["parma", "review", "12"]);
        assert!(result.is_err());
    }
}
