use crate::{
    catalog::{self, Catalog, MenuItem, Recommendation},
    config::{Config, ConfigManager},
    errors::MenuError,
    pricing,
    selection::{OrderReceipt, SelectionLedger},
};

/// Session-scoped state shared by every screen.
///
/// Owns the one `SelectionLedger` instance; the browsing and review screens
/// both mutate it through here instead of passing state between each other.
/// The configured currency prefix flows from here into the ledger and every
/// price the screens render.
pub struct Session {
    catalog: Catalog,
    recommendations: Vec<Recommendation>,
    config: Config,
    ledger: SelectionLedger,
    orders: Vec<OrderReceipt>,
}

impl Session {
    /// Builds a session from the user's configuration.
    ///
    /// A configured catalog file replaces the builtin menu. The builtin
    /// recommendations board is tagged with the default prefix, so it only
    /// appears when the session uses that convention.
    pub fn new() -> Result<Self, MenuError> {
        let config = ConfigManager::new()?.load()?;
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load_from_file(path)?,
            None => catalog::builtin_catalog().clone(),
        };
        Ok(Self::with_parts(catalog, config))
    }

    pub fn with_parts(catalog: Catalog, config: Config) -> Self {
        let recommendations = if config.currency_prefix == pricing::DEFAULT_PREFIX {
            catalog::chef_recommendations().to_vec()
        } else {
            Vec::new()
        };
        let ledger = SelectionLedger::with_prefix(config.currency_prefix.clone());
        Self {
            catalog,
            recommendations,
            config,
            ledger,
            orders: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// The recommendations board as a catalog, for search and averages.
    pub fn recommendation_catalog(&self) -> Catalog {
        Catalog::new(
            self.recommendations
                .iter()
                .map(|rec| rec.item.clone())
                .collect(),
        )
    }

    /// Currency prefix of the active catalog.
    pub fn prefix(&self) -> &str {
        &self.config.currency_prefix
    }

    /// Renders an amount with the session's currency prefix.
    pub fn format_price(&self, amount: f64) -> String {
        pricing::format_price_with_prefix(amount, self.prefix())
    }

    pub fn ledger(&self) -> &SelectionLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut SelectionLedger {
        &mut self.ledger
    }

    /// Exact name lookup across the catalog and the recommendations board.
    pub fn find_item(&self, name: &str) -> Option<&MenuItem> {
        self.catalog.find(name).or_else(|| {
            self.recommendations
                .iter()
                .map(|rec| &rec.item)
                .find(|item| item.name.eq_ignore_ascii_case(name))
        })
    }

    /// Places the current selection as an order and records the receipt.
    pub fn place_order(&mut self) -> Result<OrderReceipt, MenuError> {
        let receipt = self.ledger.place_order()?;
        self.orders.push(receipt.clone());
        Ok(receipt)
    }

    pub fn orders(&self) -> &[OrderReceipt] {
        &self.orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    fn session() -> Session {
        Session::with_parts(builtin_catalog().clone(), Config::default())
    }

    #[test]
    fn finds_items_on_the_recommendations_board() {
        let session = session();
        assert!(session.find_item("Salad").is_some());
        assert!(session.find_item("cappuccino").is_some());
        assert!(session.find_item("Nonexistent").is_none());
    }

    #[test]
    fn placing_an_order_records_the_receipt_and_resets() {
        let mut session = session();
        let salad = session.find_item("Salad").cloned().unwrap();
        session.ledger_mut().add(&salad).unwrap();
        let receipt = session.place_order().unwrap();
        assert_eq!(receipt.item_count(), 1);
        assert!(session.ledger().is_empty());
        assert_eq!(session.orders().len(), 1);
    }

    #[test]
    fn configured_prefix_reaches_the_ledger_and_display() {
        let catalog = Catalog::new(vec![MenuItem::new(
            "Latte",
            "$10.00",
            "House latte.",
            "images/latte.jpg",
            "Drinks",
        )]);
        let config = Config {
            currency_prefix: "$".into(),
            catalog_path: None,
        };
        let mut session = Session::with_parts(catalog, config);

        let latte = session.find_item("Latte").cloned().unwrap();
        session.ledger_mut().add(&latte).unwrap();
        assert_eq!(session.format_price(session.ledger().total()), "$10.00");

        // The builtin board uses the default prefix, so it stays out of
        // non-default sessions.
        assert!(session.recommendations().is_empty());
    }
}
