use crate::assets::AssetUrls;
use crate::catalog::Catalog;
use crate::formats::{BookDetail, BookSummary, HomeGroup, HomeRow};
use crate::home::compose_home_rows;
use crate::matcher::SearchFilter;
use crate::query::QueryEngine;

/// Everything loaded at startup. Immutable once built; request handlers share
/// it behind an `Arc` and read it without locking.
#[derive(Debug, Clone)]
pub struct Snapshot {
    catalog: Catalog,
    home_groups: Vec<HomeGroup>,
    assets: AssetUrls,
}

impl Snapshot {
    pub fn new(catalog: Catalog, home_groups: Vec<HomeGroup>, assets: AssetUrls) -> Self {
        Self {
            catalog,
            home_groups,
            assets,
        }
    }

    pub fn engine(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.catalog, &self.assets)
    }

    pub fn home_rows(&self) -> Vec<HomeRow> {
        compose_home_rows(&self.home_groups, &self.engine())
    }

    pub fn detail(&self, simplified_name: &str) -> Option<BookDetail> {
        self.engine().detail(simplified_name)
    }

    pub fn search(&self, filter: &SearchFilter, start_index: usize) -> Vec<BookSummary> {
        self.engine().search(filter, start_index)
    }
}
