use std::fmt;

use crate::{catalog::MenuItem, errors::MenuError, pricing};

use super::order::OrderReceipt;

/// User-facing acknowledgement emitted by a ledger mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionNotice {
    Added { name: String },
    Removed { name: String },
}

impl fmt::Display for SelectionNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionNotice::Added { name } => {
                write!(f, "{name} has been added to your selection.")
            }
            SelectionNotice::Removed { name } => {
                write!(f, "{name} has been removed from your selection.")
            }
        }
    }
}

/// Ordered record of the items a user has picked this session.
///
/// Insertion order is selection order and duplicates are allowed. The running
/// total is maintained incrementally; after every mutation it equals the
/// parse-and-sum over the current items. Prices are parsed before any state
/// changes, so a failed operation leaves the ledger untouched.
///
/// The ledger carries the currency prefix of the catalog it serves; an item
/// tagged with any other prefix is rejected on `add`.
#[derive(Debug, Clone)]
pub struct SelectionLedger {
    items: Vec<MenuItem>,
    total: f64,
    prefix: String,
}

impl Default for SelectionLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionLedger {
    pub fn new() -> Self {
        Self::with_prefix(pricing::DEFAULT_PREFIX)
    }

    /// Ledger for a catalog tagged with a non-default currency prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            total: 0.0,
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Appends an item and grows the total by its parsed price.
    pub fn add(&mut self, item: &MenuItem) -> Result<SelectionNotice, MenuError> {
        let price = pricing::parse_price_with_prefix(&item.price, &self.prefix)?;
        self.items.push(item.clone());
        self.total += price;
        tracing::debug!(name = %item.name, price, total = self.total, "item added to selection");
        Ok(SelectionNotice::Added {
            name: item.name.clone(),
        })
    }

    /// Removes the item at `index`, shifting later items down by one.
    ///
    /// Callers holding positions past `index` must not reuse them afterwards.
    pub fn remove(&mut self, index: usize) -> Result<(MenuItem, SelectionNotice), MenuError> {
        if index >= self.items.len() {
            return Err(MenuError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let price = pricing::parse_price_with_prefix(&self.items[index].price, &self.prefix)?;
        let removed = self.items.remove(index);
        self.total -= price;
        tracing::debug!(name = %removed.name, price, total = self.total, "item removed from selection");
        let notice = SelectionNotice::Removed {
            name: removed.name.clone(),
        };
        Ok((removed, notice))
    }

    /// Current selection, in selection order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The incrementally maintained running total.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Re-derives the total from scratch, for reconciliation against `total`.
    pub fn recompute_total(&self) -> Result<f64, MenuError> {
        let mut sum = 0.0;
        for item in &self.items {
            sum += pricing::parse_price_with_prefix(&item.price, &self.prefix)?;
        }
        Ok(sum)
    }

    /// Empties the selection and resets the total to zero.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = 0.0;
        tracing::debug!("selection cleared");
    }

    /// Turns the current selection into an order receipt and resets the ledger.
    pub fn place_order(&mut self) -> Result<OrderReceipt, MenuError> {
        if self.items.is_empty() {
            return Err(MenuError::EmptySelection);
        }
        let receipt = OrderReceipt::new(std::mem::take(&mut self.items), self.total);
        self.total = 0.0;
        tracing::info!(order = %receipt.id, total = receipt.total, "order placed");
        Ok(receipt)
    }
}
