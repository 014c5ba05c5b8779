//! Session selection state: the ledger of picked items and its running total.

pub mod ledger;
pub mod order;

pub use ledger::{SelectionLedger, SelectionNotice};
pub use order::OrderReceipt;
