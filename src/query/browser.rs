// ==========================================
// Danuferd Vehicle Catalog - catalog browser
// ==========================================
// Stateful owner of the listing page's selection and pagination.
// Whatever changes the filtered set also resets the page to 1.
// ==========================================

use crate::domain::types::CatalogTab;
use crate::normalizer::CatalogEntry;
use crate::query::engine::{self, FilterOptions};
use crate::query::filter::{CatalogSelection, FilterSet};
use crate::query::pagination::{paginate, Page};

pub struct CatalogBrowser {
    entries: Vec<CatalogEntry>,
    selection: CatalogSelection,
    current_page: usize,
    page_size: usize,
}

impl CatalogBrowser {
    /// Start on the landing tab with an empty filter set.
    pub fn new(entries: Vec<CatalogEntry>, page_size: usize) -> Self {
        Self {
            entries,
            selection: CatalogSelection::default(),
            current_page: 1,
            page_size,
        }
    }

    pub fn selection(&self) -> &CatalogSelection {
        &self.selection
    }

    /// Switch tabs. This is a hard reset: brand chip and filters are
    /// dropped with the old tab, page returns to 1.
    pub fn select_tab(&mut self, tab: CatalogTab) {
        self.selection = CatalogSelection::for_tab(tab);
        self.current_page = 1;
    }

    /// Pick a brand chip (None = all brands).
    pub fn select_brand_tab(&mut self, brand: Option<String>) {
        self.selection.brand_tab = brand;
        self.current_page = 1;
    }

    /// Replace the advanced-filter panel state.
    pub fn set_filters(&mut self, filters: FilterSet) {
        self.selection.filters = filters;
        self.current_page = 1;
    }

    /// Clear the filter panel and the brand chip, keep the tab.
    pub fn reset_filters(&mut self) {
        self.selection.brand_tab = None;
        self.selection.filters = FilterSet::default();
        self.current_page = 1;
    }

    /// Jump to a page. Out-of-range requests are served as an empty
    /// page by `current_page()`, never as an error.
    pub fn goto_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Swap in a freshly loaded entry set.
    pub fn replace_entries(&mut self, entries: Vec<CatalogEntry>) {
        self.entries = entries;
        self.current_page = 1;
    }

    /// The filtered set under the active selection.
    pub fn filtered(&self) -> Vec<CatalogEntry> {
        engine::apply(&self.entries, &self.selection)
    }

    /// The page currently on display.
    pub fn current_page(&self) -> Page<CatalogEntry> {
        paginate(&self.filtered(), self.current_page, self.page_size)
    }

    pub fn brand_options(&self) -> Vec<String> {
        engine::brand_options(&self.entries, self.selection.tab)
    }

    pub fn filter_options(&self) -> FilterOptions {
        engine::filter_options(&self.entries, self.selection.tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Category, Condition};

    fn entry(
        id: &str,
        category: Category,
        condition: Condition,
        year: i32,
        price: i64,
    ) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            brand: "Toyota".to_string(),
            model: "Avanza".to_string(),
            vehicle_type: "MPV".to_string(),
            color: "Hitam".to_string(),
            year: Some(year),
            engine_capacity: String::new(),
            transmission: "Manual".to_string(),
            location: "Jakarta".to_string(),
            price: Some(price),
            category,
            condition,
        }
    }

    #[test]
    fn test_tab_switch_clears_price_filter() {
        let entries = vec![
            entry("v1", Category::Car, Condition::New, 2020, 100),
            entry("v2", Category::Car, Condition::Used, 2019, 50),
            entry("v3", Category::Motorcycle, Condition::New, 2021, 20),
        ];
        let mut browser = CatalogBrowser::new(entries, 10);

        browser.set_filters(FilterSet {
            price_max: Some(150),
            ..FilterSet::default()
        });
        let page = browser.current_page();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "v1");

        browser.select_tab(CatalogTab::new(Category::Motorcycle, Condition::New));
        let page = browser.current_page();
        assert!(browser.selection().filters.is_empty());
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "v3");
    }

    #[test]
    fn test_filter_change_resets_page() {
        let entries: Vec<CatalogEntry> = (0..25)
            .map(|i| entry(&format!("v{i}"), Category::Car, Condition::New, 2020, 100))
            .collect();
        let mut browser = CatalogBrowser::new(entries, 10);

        browser.goto_page(3);
        assert_eq!(browser.current_page().items.len(), 5);

        browser.set_filters(FilterSet::default());
        assert_eq!(browser.current_page().page, 1);
        assert_eq!(browser.current_page().items.len(), 10);
    }

    #[test]
    fn test_page_past_the_end_is_empty_not_an_error() {
        let entries: Vec<CatalogEntry> = (0..25)
            .map(|i| entry(&format!("v{i}"), Category::Car, Condition::New, 2020, 100))
            .collect();
        let mut browser = CatalogBrowser::new(entries, 10);

        browser.goto_page(4);
        let page = browser.current_page();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_brand_tab_narrows_and_resets_page() {
        let mut entries: Vec<CatalogEntry> = (0..12)
            .map(|i| entry(&format!("v{i}"), Category::Car, Condition::New, 2020, 100))
            .collect();
        entries[0].brand = "Suzuki".to_string();
        let mut browser = CatalogBrowser::new(entries, 10);

        browser.goto_page(2);
        browser.select_brand_tab(Some("Suzuki".to_string()));
        let page = browser.current_page();
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].brand, "Suzuki");
    }
}
