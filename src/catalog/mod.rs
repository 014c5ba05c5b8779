//! Catalog domain models: immutable menu data grouped by course.

pub mod builtin;
#[allow(clippy::module_inception)]
pub mod catalog;
pub mod item;

pub use builtin::{builtin_catalog, chef_recommendations};
pub use catalog::Catalog;
pub use item::{MenuItem, Recommendation};
