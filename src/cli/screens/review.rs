use crate::selection::order::ORDER_RECEIVED;

use crate::cli::{
    io as cli_io,
    nav::{NavItem, Navigator},
    output,
    session::Session,
    shell::CliError,
};

/// Review screen: inspect the selection, remove items, and place the order.
pub fn run(session: &mut Session) -> Result<(), CliError> {
    loop {
        let item_count = session.ledger().len();
        let title = format!(
            "Your Selected Items · Total: {}",
            session.format_price(session.ledger().total())
        );

        let mut rows: Vec<NavItem> = session
            .ledger()
            .items()
            .iter()
            .enumerate()
            .map(|(position, item)| {
                NavItem::new(
                    format!("{}. {} - {}", position + 1, item.name, item.price),
                    "Select to remove".to_string(),
                )
            })
            .collect();
        if item_count == 0 {
            rows.push(NavItem::new("(empty)", "No items selected yet!"));
        }
        rows.push(NavItem::new("order", "Place the order"));
        rows.push(NavItem::new("clear", "Empty the selection"));
        rows.push(NavItem::new("back", "Return to the main menu"));

        let empty_row = if item_count == 0 { 1 } else { 0 };
        let order_row = item_count + empty_row;

        let mut nav = Navigator::new(title, rows);
        let Some(index) = nav.show()? else {
            return Ok(());
        };

        if index < item_count {
            let (_, notice) = session.ledger_mut().remove(index)?;
            output::success(notice);
            output::info(format!(
                "Total: {}",
                session.format_price(session.ledger().total())
            ));
            cli_io::pause()?;
        } else if index == order_row {
            place_order(session)?;
        } else if index == order_row + 1 {
            clear_selection(session)?;
        } else if index == order_row + 2 {
            return Ok(());
        }
    }
}

fn place_order(session: &mut Session) -> Result<(), CliError> {
    if session.ledger().is_empty() {
        output::warning("No items selected yet!");
        cli_io::pause()?;
        return Ok(());
    }
    let total = session.format_price(session.ledger().total());
    if !cli_io::confirm_action(&format!("Place order for {total}?"), true)? {
        return Ok(());
    }
    let receipt = session.place_order()?;
    output::success(ORDER_RECEIVED);
    output::info(format!(
        "Order {} · {} item(s) · {}",
        receipt.id,
        receipt.item_count(),
        session.format_price(receipt.total)
    ));
    cli_io::pause()?;
    Ok(())
}

fn clear_selection(session: &mut Session) -> Result<(), CliError> {
    if session.ledger().is_empty() {
        return Ok(());
    }
    if cli_io::confirm_action("Empty the current selection?", false)? {
        session.ledger_mut().clear();
        output::info("Selection cleared.");
        cli_io::pause()?;
    }
    Ok(())
}
