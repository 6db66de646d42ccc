use std::collections::HashMap;

use crate::formats::BookRecord;

/// Immutable snapshot of every book, in load order.
///
/// Built once at startup and shared read-only afterwards; the identifier index
/// is derived from `books` at construction and never diverges from it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<BookRecord>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(books: Vec<BookRecord>) -> anyhow::Result<Self> {
        let mut by_name = HashMap::with_capacity(books.len());
        for (position, book) in books.iter().enumerate() {
            if book.simplified_name.trim().is_empty() {
                anyhow::bail!("book at position {position} has an empty identifier");
            }
            if let Some(previous) = by_name.insert(book.simplified_name.clone(), position) {
                anyhow::bail!(
                    "duplicate identifier {:?} at positions {previous} and {position}",
                    book.simplified_name
                );
            }
        }
        Ok(Self { books, by_name })
    }

    pub fn lookup(&self, simplified_name: &str) -> Option<&BookRecord> {
        self.by_name
            .get(simplified_name)
            .map(|&position| &self.books[position])
    }

    pub fn scan(&self) -> impl Iterator<Item = &BookRecord> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(name: &str, titulo: &str) -> BookRecord {
        BookRecord {
            simplified_name: name.to_owned(),
            titulo: titulo.to_owned(),
            ..BookRecord::default()
        }
    }

    #[test]
    fn lookup_finds_known_identifier() -> anyhow::Result<()> {
        let catalog = Catalog::new(vec![book("a", "Alpha"), book("b", "Beta")])?;

        assert_eq!(catalog.lookup("b").map(|b| b.titulo.as_str()), Some("Beta"));
        assert!(catalog.lookup("c").is_none());
        assert!(catalog.lookup("").is_none());
        Ok(())
    }

    #[test]
    fn lookup_is_exact_match() -> anyhow::Result<()> {
        let catalog = Catalog::new(vec![book("don-quijote", "Don Quijote")])?;

        assert!(catalog.lookup("Don-Quijote").is_none());
        assert!(catalog.lookup(" don-quijote").is_none());
        Ok(())
    }

    #[test]
    fn scan_preserves_load_order() -> anyhow::Result<()> {
        let catalog = Catalog::new(vec![book("z", "Z"), book("a", "A"), book("m", "M")])?;
        let names: Vec<&str> = catalog
            .scan()
            .map(|b| b.simplified_name.as_str())
            .collect();

        assert_eq!(names, vec!["z", "a", "m"]);
        assert_eq!(catalog.len(), 3);
        Ok(())
    }

    #[test]
    fn rejects_duplicate_identifier() {
        let err = Catalog::new(vec![book("a", "One"), book("a", "Two")])
            .unwrap_err()
            .to_string();
        assert!(err.contains("duplicate identifier"));
    }

    #[test]
    fn rejects_empty_identifier() {
        let err = Catalog::new(vec![book("  ", "Blank")])
            .unwrap_err()
            .to_string();
        assert!(err.contains("empty identifier"));
    }
}
