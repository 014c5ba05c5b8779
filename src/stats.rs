//! Display statistics derived from the static catalog.

use crate::{catalog::Catalog, errors::MenuError, pricing};

/// Average price for one course, ready for the averages table.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseAverage {
    pub course: String,
    pub item_count: usize,
    pub average: f64,
}

/// Stateless aggregation over a read-only catalog.
pub struct CourseStats;

impl CourseStats {
    /// Arithmetic mean of the parsed prices in a course.
    ///
    /// A course with no items averages to `0.0` so the averages table always
    /// has something to render.
    pub fn average_price(catalog: &Catalog, course: &str) -> Result<f64, MenuError> {
        Self::average_price_with_prefix(catalog, course, pricing::DEFAULT_PREFIX)
    }

    /// Course average for a catalog tagged with a non-default prefix.
    pub fn average_price_with_prefix(
        catalog: &Catalog,
        course: &str,
        prefix: &str,
    ) -> Result<f64, MenuError> {
        let items = catalog.items_in(course);
        if items.is_empty() {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for item in &items {
            total += pricing::parse_price_with_prefix(&item.price, prefix)?;
        }
        Ok(total / items.len() as f64)
    }

    /// One row per distinct course, in catalog order of first appearance.
    pub fn course_averages(catalog: &Catalog) -> Result<Vec<CourseAverage>, MenuError> {
        Self::course_averages_with_prefix(catalog, pricing::DEFAULT_PREFIX)
    }

    /// Averages table for a catalog tagged with a non-default prefix.
    pub fn course_averages_with_prefix(
        catalog: &Catalog,
        prefix: &str,
    ) -> Result<Vec<CourseAverage>, MenuError> {
        let mut rows = Vec::new();
        for course in catalog.courses() {
            rows.push(CourseAverage {
                course: course.to_string(),
                item_count: catalog.items_in(course).len(),
                average: Self::average_price_with_prefix(catalog, course, prefix)?,
            });
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuItem;

    fn dessert(name: &str, price: &str) -> MenuItem {
        MenuItem::new(name, price, "", "images/none.jpg", "Desserts")
    }

    #[test]
    fn averages_a_single_course() {
        let catalog = Catalog::new(vec![
            dessert("Cheesecake", "R49.99"),
            dessert("Brownie", "R39.99"),
            dessert("Ice Cream", "R29.99"),
            dessert("Apple Pie", "R59.99"),
        ]);
        let average = CourseStats::average_price(&catalog, "Desserts").unwrap();
        assert!((average - 44.99).abs() < 1e-9);
    }

    #[test]
    fn empty_course_averages_to_zero() {
        let catalog = Catalog::new(vec![dessert("Brownie", "R39.99")]);
        let average = CourseStats::average_price(&catalog, "Mains").unwrap();
        assert_eq!(average, 0.0);
        assert!(!average.is_nan());
    }

    #[test]
    fn malformed_price_in_course_is_an_error() {
        let catalog = Catalog::new(vec![dessert("Broken", "notaprice")]);
        assert!(CourseStats::average_price(&catalog, "Desserts").is_err());
    }

    #[test]
    fn averages_follow_the_catalog_prefix() {
        let catalog = Catalog::new(vec![
            MenuItem::new("Latte", "$30", "", "images/latte.jpg", "Drinks"),
            MenuItem::new("Mocha", "$40", "", "images/mocha.jpg", "Drinks"),
        ]);
        let average = CourseStats::average_price_with_prefix(&catalog, "Drinks", "$").unwrap();
        assert!((average - 35.0).abs() < 1e-9);
        assert!(CourseStats::average_price(&catalog, "Drinks").is_err());
    }

    #[test]
    fn table_rows_follow_catalog_order() {
        let catalog = Catalog::new(vec![
            MenuItem::new("Salad", "R59.99", "", "images/salad.jpg", "Starters"),
            dessert("Brownie", "R39.99"),
            MenuItem::new("Soup", "R49.99", "", "images/soup.jpg", "Starters"),
        ]);
        let rows = CourseStats::course_averages(&catalog).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].course, "Starters");
        assert_eq!(rows[0].item_count, 2);
        assert!((rows[0].average - 54.99).abs() < 1e-9);
        assert_eq!(rows[1].course, "Desserts");
    }
}
