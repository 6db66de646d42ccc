use crate::catalog::Catalog;
use crate::formats::{HomeGroup, HomeRow};
use crate::query::QueryEngine;

/// Resolves each home group into a display row, in configured order.
///
/// Resolution is lenient: identifiers missing from the catalog are dropped
/// from their row without error. Use [`unresolved`] to report them.
pub fn compose_home_rows(groups: &[HomeGroup], engine: &QueryEngine<'_>) -> Vec<HomeRow> {
    groups
        .iter()
        .map(|group| HomeRow {
            titulo: group.titulo.clone(),
            book_responses: group
                .libros
                .iter()
                .filter_map(|name| engine.summary_of(name))
                .collect(),
        })
        .collect()
}

/// `(group title, identifier)` pairs that do not resolve in `catalog`.
pub fn unresolved<'g>(groups: &'g [HomeGroup], catalog: &Catalog) -> Vec<(&'g str, &'g str)> {
    groups
        .iter()
        .flat_map(|group| {
            group
                .libros
                .iter()
                .filter(|name| catalog.lookup(name).is_none())
                .map(move |name| (group.titulo.as_str(), name.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetUrls;
    use crate::formats::BookRecord;

    fn catalog() -> Catalog {
        let books = ["a", "b", "c", "d"]
            .into_iter()
            .map(|name| BookRecord {
                simplified_name: name.to_owned(),
                titulo: name.to_uppercase(),
                ..BookRecord::default()
            })
            .collect();
        Catalog::new(books).expect("valid catalog")
    }

    fn group(titulo: &str, libros: &[&str]) -> HomeGroup {
        HomeGroup {
            titulo: titulo.to_owned(),
            libros: libros.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    #[test]
    fn unknown_identifiers_are_dropped_in_order() {
        let catalog = catalog();
        let assets = AssetUrls::default();
        let engine = QueryEngine::new(&catalog, &assets);
        let groups = vec![group("Novedades", &["c", "missing", "a"])];

        let rows = compose_home_rows(&groups, &engine);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].titulo, "Novedades");
        let names: Vec<&str> = rows[0]
            .book_responses
            .iter()
            .map(|s| s.simplified_name.as_str())
            .collect();
        assert_eq!(names, vec!["c", "a"]);
        assert_eq!(rows[0].book_responses[0].titulo, "C");
    }

    #[test]
    fn rows_follow_group_order_even_when_empty() {
        let catalog = catalog();
        let assets = AssetUrls::default();
        let engine = QueryEngine::new(&catalog, &assets);
        let groups = vec![
            group("Primero", &["d"]),
            group("Vacío", &["nope"]),
            group("Último", &["b", "a"]),
        ];

        let rows = compose_home_rows(&groups, &engine);
        let titles: Vec<&str> = rows.iter().map(|r| r.titulo.as_str()).collect();
        assert_eq!(titles, vec!["Primero", "Vacío", "Último"]);
        assert!(rows[1].book_responses.is_empty());
        assert_eq!(rows[2].book_responses.len(), 2);
    }

    #[test]
    fn unresolved_lists_dangling_references() {
        let catalog = catalog();
        let groups = vec![group("Uno", &["a", "x"]), group("Dos", &["y", "b"])];

        assert_eq!(unresolved(&groups, &catalog), vec![("Uno", "x"), ("Dos", "y")]);
    }
}
