use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::query::SearchRequest;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the home page rows as JSON.
    Home(HomeArgs),
    /// Print the detail of one book as JSON.
    Show(ShowArgs),
    /// Print one page of filtered search results as JSON.
    Search(SearchArgs),
    /// Load the dataset and report counts and dangling home references.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct DatasetArgs {
    /// Tab-delimited book table (one header row).
    #[arg(long, default_value = "books.tsv")]
    pub books: PathBuf,

    /// Base URL for cover and synopsis assets.
    #[arg(long)]
    pub asset_base_url: Option<String>,
}

#[derive(Debug, Args)]
pub struct HomeArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// JSON list of home groups (`[{"titulo", "libros"}]`).
    #[arg(long, default_value = "frontpage_categories.json")]
    pub home: PathBuf,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Simplified identifier of the book.
    pub simplified_name: String,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub request: SearchRequest,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Home groups file to check against the books.
    #[arg(long)]
    pub home: Option<PathBuf>,
}
