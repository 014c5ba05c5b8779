use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use super::item::MenuItem;
use crate::errors::MenuError;

/// Read-only, ordered list of menu items.
///
/// The catalog never changes during a session; consumers copy items into the
/// selection ledger rather than holding indices into it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items belonging to the given course, in catalog order.
    pub fn items_in(&self, course: &str) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.course == course)
            .collect()
    }

    /// Case-insensitive substring match on item names.
    ///
    /// An empty query returns the full catalog; result order follows the
    /// catalog.
    pub fn filter_by_name(&self, query: &str) -> Vec<&MenuItem> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Exact (case-insensitive) name lookup.
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }

    /// Loads a packaged catalog file, returning structured errors on failure.
    pub fn load_from_file(path: &Path) -> Result<Self, MenuError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Writes the catalog to disk atomically by staging to a temporary file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), MenuError> {
        let tmp = path.with_extension("tmp");
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&tmp, json)?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    /// Distinct course labels in order of first appearance.
    pub fn courses(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.course.as_str()) {
                seen.push(&item.course);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            MenuItem::new("Cappuccino", "R25", "Foamy.", "images/cap.jpg", "Drinks"),
            MenuItem::new("Coffee", "R29.99", "Hot brewed coffee.", "images/coffee.jpg", "Drinks"),
            MenuItem::new("Salad", "R59.99", "Fresh garden salad.", "images/salad.jpg", "Starters"),
        ])
    }

    #[test]
    fn filter_matches_substrings_not_tokens() {
        let catalog = sample();
        let hits = catalog.filter_by_name("cof");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Coffee");
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let catalog = sample();
        let hits = catalog.filter_by_name("");
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].name, "Cappuccino");
        assert_eq!(hits[2].name, "Salad");
    }

    #[test]
    fn find_is_case_insensitive_and_exact() {
        let catalog = sample();
        assert!(catalog.find("coffee").is_some());
        assert!(catalog.find("coff").is_none());
    }

    #[test]
    fn courses_preserve_first_appearance_order() {
        let catalog = sample();
        assert_eq!(catalog.courses(), vec!["Drinks", "Starters"]);
    }
}
