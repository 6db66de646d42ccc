use crate::formats::BookRecord;

pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Categorical match: `value` equals one of `options` after normalization.
/// An empty option set leaves the field unconstrained.
pub fn matches_any(value: &str, options: &[String]) -> bool {
    if options.is_empty() {
        return true;
    }
    let value = normalize(value);
    options.iter().any(|option| normalize(option) == value)
}

/// Free-text match on title or author. `term` must already be normalized; an
/// empty term matches every book.
pub fn matches_search(book: &BookRecord, term: &str) -> bool {
    term.is_empty()
        || normalize(&book.titulo).contains(term)
        || normalize(&book.autor).contains(term)
}

/// Splits a comma-separated request value into option strings.
///
/// Absent or empty input yields no options. Empty pieces are kept, so
/// `"primaria,"` also accepts books whose field is empty.
pub fn split_options(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(raw) if !raw.is_empty() => raw.split(',').map(str::to_owned).collect(),
        _ => Vec::new(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub niveles: Vec<String>,
    pub materias: Vec<String>,
    pub tipos: Vec<String>,
    pub idiomas: Vec<String>,
    busqueda: String,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn niveles(mut self, options: Vec<String>) -> Self {
        self.niveles = options;
        self
    }

    pub fn materias(mut self, options: Vec<String>) -> Self {
        self.materias = options;
        self
    }

    pub fn tipos(mut self, options: Vec<String>) -> Self {
        self.tipos = options;
        self
    }

    pub fn idiomas(mut self, options: Vec<String>) -> Self {
        self.idiomas = options;
        self
    }

    pub fn busqueda(mut self, term: &str) -> Self {
        self.busqueda = normalize(term);
        self
    }

    /// Normalized search term.
    pub fn term(&self) -> &str {
        &self.busqueda
    }

    pub fn matches(&self, book: &BookRecord) -> bool {
        matches_any(&book.nivel_educativo, &self.niveles)
            && matches_any(&book.materia, &self.materias)
            && matches_any(&book.tipo, &self.tipos)
            && matches_any(&book.idioma, &self.idiomas)
            && matches_search(book, &self.busqueda)
    }
}
