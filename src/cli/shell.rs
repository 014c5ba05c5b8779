use std::io::{self, BufRead};

use crate::{errors::MenuError, selection::order::ORDER_RECEIVED};

use super::{
    nav::{NavError, NavItem, Navigator},
    output::{self, OutputPreferences},
    screens,
    session::Session,
};

/// Top-level CLI failures.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("input interrupted")]
    Interrupted,
}

impl From<NavError> for CliError {
    fn from(err: NavError) -> Self {
        match err {
            NavError::Interrupted | NavError::EndOfInput => CliError::Interrupted,
            NavError::Io(io_err) => CliError::Io(io_err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("MENU_CORE_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    // Scripted output must stay stable for piping, so styling is off there.
    output::set_preferences(OutputPreferences {
        plain_mode: mode == CliMode::Script || std::env::var_os("MENU_CORE_PLAIN").is_some(),
        quiet_mode: std::env::var_os("MENU_CORE_QUIET").is_some(),
    });

    let mut session = Session::new()?;

    match mode {
        CliMode::Interactive => run_interactive(&mut session),
        CliMode::Script => run_script(&mut session),
    }
}

fn run_interactive(session: &mut Session) -> Result<(), CliError> {
    loop {
        let selected = session.format_price(session.ledger().total());
        let mut nav = Navigator::new(
            format!("Restaurant Menu · Selection total: {selected}"),
            vec![
                NavItem::new("home", "Chef's recommendations and search"),
                NavItem::new("menu", "Browse the menu by course"),
                NavItem::new("review", "Review your selection and place the order"),
                NavItem::new("exit", "Leave the restaurant"),
            ],
        );
        let outcome = match nav.show() {
            Ok(choice) => choice,
            Err(NavError::Interrupted) | Err(NavError::EndOfInput) => return Ok(()),
            Err(NavError::Io(err)) => return Err(err.into()),
        };
        match outcome {
            Some(0) => screens::home::run(session)?,
            Some(1) => screens::menu::run(session)?,
            Some(2) => screens::review::run(session)?,
            Some(_) | None => {
                output::info("Goodbye!");
                return Ok(());
            }
        }
    }
}

fn run_script(session: &mut Session) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match dispatch(session, &line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => output::error(err),
        }
    }
    Ok(())
}

fn dispatch(session: &mut Session, line: &str) -> Result<LoopControl, MenuError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(LoopControl::Continue);
    }
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (trimmed, ""),
    };

    tracing::debug!(command, args = rest, "script command");

    match command.to_lowercase().as_str() {
        "menu" => screens::print_menu(session)?,
        "board" => screens::print_board(session)?,
        "search" => screens::print_search(session.catalog(), rest),
        "add" => match session.find_item(rest).cloned() {
            Some(item) => {
                let notice = session.ledger_mut().add(&item)?;
                output::success(notice);
            }
            None => return Err(MenuError::UnknownItem(rest.to_string())),
        },
        "items" => screens::print_selection(session),
        "remove" => match rest.parse::<usize>() {
            Ok(position) if position >= 1 => {
                let (_, notice) = session.ledger_mut().remove(position - 1)?;
                output::success(notice);
                output::info(format!(
                    "Total: {}",
                    session.format_price(session.ledger().total())
                ));
            }
            _ => output::warning("Usage: remove <position> (positions start at 1)"),
        },
        "total" => output::info(format!(
            "Total: {}",
            session.format_price(session.ledger().total())
        )),
        "averages" => screens::print_averages(session)?,
        "order" => {
            let receipt = session.place_order()?;
            output::success(ORDER_RECEIVED);
            output::info(format!(
                "Order {} · {} item(s) · {}",
                receipt.id,
                receipt.item_count(),
                session.format_price(receipt.total)
            ));
        }
        "help" => print_help(),
        "exit" | "quit" => return Ok(LoopControl::Exit),
        other => output::warning(format!("Unknown command `{other}`. Type `help`.")),
    }

    Ok(LoopControl::Continue)
}

fn print_help() {
    output::section("Commands");
    output::info("menu                Show the full menu with course averages");
    output::info("board               Show the chef's recommendations");
    output::info("search <query>      Search menu items by name");
    output::info("add <name>          Add a menu item to your selection");
    output::info("items               List your selection and total");
    output::info("remove <position>   Remove the item at a listed position");
    output::info("total               Show the running total");
    output::info("averages            Show average prices per course");
    output::info("order               Place the order and reset the selection");
    output::info("exit                Quit");
}
