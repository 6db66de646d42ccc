use std::path::Path;

use anyhow::Context as _;

use crate::app::state::Snapshot;
use crate::assets::AssetUrls;
use crate::catalog::Catalog;
use crate::formats::{BookRecord, HomeGroup};

const BOOK_COLUMNS: usize = 15;

pub fn load_books_tsv(path: &Path) -> anyhow::Result<Vec<BookRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read books file: {}", path.display()))?;
    parse_books_tsv(&contents).with_context(|| format!("parse books file: {}", path.display()))
}

/// Parses the tab-delimited book table.
///
/// The first row is a header and fixes the column count for every other row;
/// it must cover at least the 15 book columns. Fields may be quoted.
pub fn parse_books_tsv(contents: &str) -> anyhow::Result<Vec<BookRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_bytes());
    let width = reader.headers().context("read header row")?.len();

    let mut books = Vec::new();
    for result in reader.records() {
        let record = result.context("read book row")?;
        let line = record.position().map_or(0, |position| position.line());
        if record.len() != width {
            anyhow::bail!(
                "line {line}: expected {width} tab-separated columns, found {}",
                record.len()
            );
        }
        if record.len() < BOOK_COLUMNS {
            anyhow::bail!(
                "line {line}: expected at least {BOOK_COLUMNS} tab-separated columns, found {}",
                record.len()
            );
        }
        let field = |i: usize| record[i].to_owned();

        books.push(BookRecord {
            simplified_name: field(0),
            titulo: field(1),
            autor: field(2),
            nivel_educativo: field(3),
            materia: field(4),
            tipo: field(5),
            idioma: field(6),
            ilustraciones: field(7),
            genero: field(8),
            paginas: field(9),
            tamano: field(10),
            deposito_legal: field(11),
            isbn: field(12),
            edad: field(13),
            ficha_didactica: field(14),
        });
    }
    Ok(books)
}

pub fn load_home_groups(path: &Path) -> anyhow::Result<Vec<HomeGroup>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read home groups file: {}", path.display()))?;
    parse_home_groups(&bytes)
        .with_context(|| format!("parse home groups file: {}", path.display()))
}

pub fn parse_home_groups(bytes: &[u8]) -> anyhow::Result<Vec<HomeGroup>> {
    serde_json::from_slice(bytes).context("deserialize home groups")
}

pub fn load_catalog(books_path: &Path) -> anyhow::Result<Catalog> {
    let books = load_books_tsv(books_path)?;
    Catalog::new(books).with_context(|| format!("index books: {}", books_path.display()))
}

/// Loads everything the service needs. Any failure here is fatal to startup.
pub fn load_snapshot(
    books_path: &Path,
    home_path: &Path,
    assets: AssetUrls,
) -> anyhow::Result<Snapshot> {
    let catalog = load_catalog(books_path)?;
    tracing::info!(books = catalog.len(), path = %books_path.display(), "loaded books");

    let home_groups = load_home_groups(home_path)?;
    tracing::info!(groups = home_groups.len(), path = %home_path.display(), "loaded home groups");

    Ok(Snapshot::new(catalog, home_groups, assets))
}
