use serde::{Deserialize, Deserializer, Serialize};

/// One cataloged book, as loaded from the tab-delimited dataset.
///
/// Absent values are empty strings; only `simplified_name` is required to be
/// non-empty (enforced by [`crate::catalog::Catalog::new`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub simplified_name: String,
    pub titulo: String,
    pub autor: String,
    pub nivel_educativo: String,
    pub materia: String,
    pub tipo: String,
    pub idioma: String,
    pub ilustraciones: String,
    pub genero: String,
    pub paginas: String,
    pub tamano: String,
    pub deposito_legal: String,
    pub isbn: String,
    pub edad: String,
    pub ficha_didactica: String,
}

/// A named, ordered row definition for the home page.
///
/// Missing or `null` fields read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeGroup {
    #[serde(default, deserialize_with = "null_as_default")]
    pub titulo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub libros: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub titulo: String,
    pub simplified_name: String,
    pub tapa_small: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetail {
    pub titulo: String,
    pub tapa_original_url: String,
    pub autor: String,
    pub ilustraciones: String,
    pub materia: String,
    pub nivel_educativo: String,
    pub genero: String,
    pub guia_didactica: String,
    pub tamano: String,
    pub paginas: String,
    pub isbn: String,
    pub deposito_legal: String,
    /// Synopsis URL. Empty for educational texts, which have no synopsis asset.
    #[serde(rename = "descripcion", default)]
    pub sinopsis_url: String,
    pub tipo: String,
    pub idioma: String,
}

impl BookDetail {
    pub fn has_synopsis(&self) -> bool {
        !self.sinopsis_url.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeRow {
    pub titulo: String,
    pub book_responses: Vec<BookSummary>,
}
