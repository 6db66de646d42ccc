use serde::Deserialize;

use crate::assets::{AssetUrls, TEXTO_EDUCATIVO};
use crate::catalog::Catalog;
use crate::formats::{BookDetail, BookRecord, BookSummary};
use crate::matcher::{SearchFilter, split_options};

/// Number of summaries returned per search page.
pub const PAGE_SIZE: usize = 9;

/// Read-only queries over a [`Catalog`] snapshot.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    catalog: &'a Catalog,
    assets: &'a AssetUrls,
}

impl<'a> QueryEngine<'a> {
    pub fn new(catalog: &'a Catalog, assets: &'a AssetUrls) -> Self {
        Self { catalog, assets }
    }

    pub fn summary(&self, book: &BookRecord) -> BookSummary {
        BookSummary {
            titulo: book.titulo.clone(),
            simplified_name: book.simplified_name.clone(),
            tapa_small: self.assets.small_cover(&book.simplified_name),
        }
    }

    pub fn summary_of(&self, simplified_name: &str) -> Option<BookSummary> {
        self.catalog
            .lookup(simplified_name)
            .map(|book| self.summary(book))
    }

    pub fn detail(&self, simplified_name: &str) -> Option<BookDetail> {
        let book = self.catalog.lookup(simplified_name)?;
        let sinopsis_url = if book.tipo == TEXTO_EDUCATIVO {
            String::new()
        } else {
            self.assets.synopsis(&book.simplified_name)
        };

        Some(BookDetail {
            titulo: book.titulo.clone(),
            tapa_original_url: self.assets.original_cover(&book.simplified_name),
            autor: book.autor.clone(),
            ilustraciones: book.ilustraciones.clone(),
            materia: book.materia.clone(),
            nivel_educativo: book.nivel_educativo.clone(),
            genero: book.genero.clone(),
            guia_didactica: book.ficha_didactica.clone(),
            tamano: book.tamano.clone(),
            paginas: book.paginas.clone(),
            isbn: book.isbn.clone(),
            deposito_legal: book.deposito_legal.clone(),
            sinopsis_url,
            tipo: book.tipo.clone(),
            idioma: book.idioma.clone(),
        })
    }

    /// Returns up to [`PAGE_SIZE`] matches, skipping the first `start_index`
    /// matches in catalog order. Scanning stops once the page is full.
    pub fn search(&self, filter: &SearchFilter, start_index: usize) -> Vec<BookSummary> {
        self.catalog
            .scan()
            .filter(|book| filter.matches(book))
            .skip(start_index)
            .take(PAGE_SIZE)
            .map(|book| self.summary(book))
            .collect()
    }
}

/// Raw search parameters, shared by the HTTP query string and the CLI flags.
///
/// Everything is optional and lenient: list values are comma-separated and a
/// malformed `startIndex` reads as 0.
#[derive(Debug, Default, Deserialize, clap::Args)]
pub struct SearchRequest {
    /// Comma-separated educational levels.
    #[arg(long)]
    pub nivel: Option<String>,

    /// Comma-separated subjects.
    #[arg(long)]
    pub materia: Option<String>,

    /// Comma-separated type codes.
    #[arg(long)]
    pub tipo: Option<String>,

    /// Comma-separated languages.
    #[arg(long)]
    pub idioma: Option<String>,

    /// Text matched against title and author.
    #[arg(long)]
    pub busqueda: Option<String>,

    /// Number of matches to skip (negative or non-numeric reads as 0).
    #[arg(long, allow_hyphen_values = true)]
    #[serde(rename = "startIndex")]
    pub start_index: Option<String>,
}

impl SearchRequest {
    pub fn filter(&self) -> SearchFilter {
        SearchFilter::new()
            .niveles(split_options(self.nivel.as_deref()))
            .materias(split_options(self.materia.as_deref()))
            .tipos(split_options(self.tipo.as_deref()))
            .idiomas(split_options(self.idioma.as_deref()))
            .busqueda(self.busqueda.as_deref().unwrap_or_default())
    }

    pub fn start_index(&self) -> usize {
        parse_start_index(self.start_index.as_deref())
    }
}

/// Parses the raw pagination offset of a search request.
///
/// Missing or non-numeric input is 0 and negative values clamp to 0. Integer
/// literals beyond the representable range saturate.
pub fn parse_start_index(raw: Option<&str>) -> usize {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return 0;
    };
    if let Ok(value) = raw.parse::<i64>() {
        return usize::try_from(value.max(0)).unwrap_or(usize::MAX);
    }

    let (negative, digits) = match raw.as_bytes()[0] {
        b'-' => (true, &raw[1..]),
        b'+' => (false, &raw[1..]),
        _ => (false, raw),
    };
    let is_integer = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
    if is_integer && !negative {
        usize::MAX
    } else {
        0
    }
}
