use std::io::Write as _;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;
use serde::Serialize;

use catalogo::assets::resolve_asset_urls;
use catalogo::cli::{Cli, Command, DatasetArgs};
use catalogo::home::{compose_home_rows, unresolved};
use catalogo::loader::{load_catalog, load_home_groups};
use catalogo::query::QueryEngine;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    catalogo::logging::init("warn").context("init logging")?;

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        Command::Home(args) => {
            let (catalog, assets) = open(&args.dataset)?;
            let groups = load_home_groups(&args.home)?;
            let engine = QueryEngine::new(&catalog, &assets);
            print_json(&compose_home_rows(&groups, &engine))?;
        }
        Command::Show(args) => {
            let (catalog, assets) = open(&args.dataset)?;
            let detail = QueryEngine::new(&catalog, &assets)
                .detail(&args.simplified_name)
                .ok_or_else(|| anyhow::anyhow!("book not found: {}", args.simplified_name))?;
            print_json(&detail)?;
        }
        Command::Search(args) => {
            let (catalog, assets) = open(&args.dataset)?;
            let results = QueryEngine::new(&catalog, &assets)
                .search(&args.request.filter(), args.request.start_index());
            print_json(&results)?;
        }
        Command::Validate(args) => {
            let (catalog, _) = open(&args.dataset)?;
            let groups = match &args.home {
                Some(path) => load_home_groups(path)?,
                None => Vec::new(),
            };

            let dangling: Vec<Dangling<'_>> = unresolved(&groups, &catalog)
                .into_iter()
                .map(|(titulo, simplified_name)| {
                    tracing::warn!(
                        group = titulo,
                        simplified_name,
                        "home group references unknown book"
                    );
                    Dangling {
                        titulo,
                        simplified_name,
                    }
                })
                .collect();

            print_json(&ValidationReport {
                books: catalog.len(),
                home_groups: groups.len(),
                unresolved: dangling,
            })?;
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    books: usize,
    home_groups: usize,
    unresolved: Vec<Dangling<'a>>,
}

#[derive(Debug, Serialize)]
struct Dangling<'a> {
    titulo: &'a str,
    simplified_name: &'a str,
}

fn open(
    args: &DatasetArgs,
) -> anyhow::Result<(catalogo::catalog::Catalog, catalogo::assets::AssetUrls)> {
    let assets = resolve_asset_urls(args.asset_base_url.as_deref())?;
    let catalog = load_catalog(&args.books)?;
    tracing::info!(books = catalog.len(), "loaded catalog");
    Ok((catalog, assets))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("serialize output")?;
    out.write_all(b"\n").context("write output newline")?;
    Ok(())
}
