use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process;

mod errors;
mod handlers;
mod operations;
mod state;
mod ui;

use handlers::{handle_filters, handle_groups, handle_items, ItemQuery};
use state::AppState;

/// Landscape Facets - Explore a landscape through faceted filters
///
/// Examples:
///   # List groups
///   landscape-facets landscape.json groups
///
///   # Show the filters available in every group
///   landscape-facets landscape.json filters
///
///   # Filter items (OR within a category)
///   landscape-facets landscape.json items --filter maturity=graduated --filter maturity=incubating
///
///   # Combine categories (AND between categories)
///   landscape-facets landscape.json items --group projects \
///       --filter license=MIT --filter country=DE
#[derive(Parser, Debug)]
#[command(name = "landscape-facets")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Multiple --filter values for the SAME category are combined with OR\n  \
    - Different categories are combined with AND\n\n\
Filter Categories:\n  \
    maturity, tag, tags, organization, category, license, country, industry, org-type, extra\n\n\
Items without a maturity match maturity=non-<foundation>, e.g. maturity=non-cncf")]
struct Cli {
    /// Path to the landscape JSON file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List groups and their item counts
    Groups {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the filter sections derived from the items
    Filters {
        /// Only show this group
        #[arg(short, long, value_name = "GROUP")]
        group: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the items matching the given filters
    Items {
        /// Group to list (defaults to the first group)
        #[arg(short, long, value_name = "GROUP")]
        group: Option<String>,

        /// Filter (format: category=value, can be specified multiple times)
        #[arg(short, long = "filter", value_name = "CATEGORY=VALUE")]
        filters: Vec<String>,

        /// Sort results by name
        #[arg(short, long)]
        sort: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut state = AppState::new();
    operations::load_file(&mut state, &cli.file)?;

    match cli.command {
        Command::Groups { json } => handle_groups(&state, json),
        Command::Filters { group, json } => handle_filters(&mut state, group.as_deref(), json),
        Command::Items {
            group,
            filters,
            sort,
            json,
        } => handle_items(
            &mut state,
            &ItemQuery {
                group,
                filters,
                sort_by_name: sort,
                json,
            },
        ),
    }
}
