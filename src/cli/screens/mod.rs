//! Screen flows and the shared rendering helpers they use.
//!
//! The same helpers back both the interactive screens and script-mode
//! commands, so the two modes print identical output. All prices render
//! through the session so the configured currency prefix applies everywhere.

pub mod home;
pub mod menu;
pub mod review;

use crate::{catalog::Catalog, errors::MenuError, stats::CourseStats};

use super::{output, session::Session};

/// Full menu grouped by course, with the per-course average under each group.
pub fn print_menu(session: &Session) -> Result<(), MenuError> {
    let catalog = session.catalog();
    for course in catalog.courses() {
        output::section(course);
        for item in catalog.items_in(course) {
            output::info(format!("{} - {}  {}", item.name, item.price, item.description));
        }
        let average = CourseStats::average_price_with_prefix(catalog, course, session.prefix())?;
        output::info(format!("Average Price: {}", session.format_price(average)));
    }
    Ok(())
}

/// The chef's recommendations board with its per-course averages.
pub fn print_board(session: &Session) -> Result<(), MenuError> {
    output::section("Chef's Recommendations");
    if session.recommendations().is_empty() {
        output::info("No recommendations for this catalog.");
        return Ok(());
    }
    for rec in session.recommendations() {
        output::info(format!("{} - {}", rec.item.name, rec.item.price));
        output::info(format!("  Rating: {:.1} ({} reviews)", rec.rating, rec.reviews));
        output::info(format!("  By {}", rec.chef));
    }
    output::blank_line();
    let board = session.recommendation_catalog();
    for row in CourseStats::course_averages_with_prefix(&board, session.prefix())? {
        output::info(format!(
            "Average {} Price: {}",
            row.course,
            session.format_price(row.average)
        ));
    }
    Ok(())
}

/// Case-insensitive name search over the given catalog.
pub fn print_search(catalog: &Catalog, query: &str) {
    let hits = catalog.filter_by_name(query);
    if hits.is_empty() {
        output::info(format!("No items match `{query}`."));
        return;
    }
    for item in hits {
        output::info(format!("{} - {}  {}", item.name, item.price, item.description));
    }
}

/// Numbered selection listing with the running total.
pub fn print_selection(session: &Session) {
    output::section("Your Selected Items");
    let ledger = session.ledger();
    if ledger.is_empty() {
        output::info("No items selected yet!");
    } else {
        for (position, item) in ledger.items().iter().enumerate() {
            output::info(format!(
                "{}. {} - {}  {}",
                position + 1,
                item.name,
                item.price,
                item.description
            ));
        }
    }
    output::info(format!("Total: {}", session.format_price(ledger.total())));
}

/// Averages table for the whole catalog.
pub fn print_averages(session: &Session) -> Result<(), MenuError> {
    for row in CourseStats::course_averages_with_prefix(session.catalog(), session.prefix())? {
        output::info(format!(
            "{}: {} ({} items)",
            row.course,
            session.format_price(row.average),
            row.item_count
        ));
    }
    Ok(())
}
