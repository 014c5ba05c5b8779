use crate::cli::{
    io as cli_io,
    nav::{NavItem, Navigator},
    session::Session,
    shell::CliError,
};

/// Home screen: the recommendations board and name search.
pub fn run(session: &mut Session) -> Result<(), CliError> {
    loop {
        let mut nav = Navigator::new(
            "Home",
            vec![
                NavItem::new("board", "Show the chef's recommendations"),
                NavItem::new("search", "Search recommendations by name"),
                NavItem::new("back", "Return to the main menu"),
            ],
        );
        match nav.show()? {
            Some(0) => {
                super::print_board(session)?;
                cli_io::pause()?;
            }
            Some(1) => {
                let query = cli_io::prompt_text("Search")?;
                super::print_search(&session.recommendation_catalog(), query.trim());
                cli_io::pause()?;
            }
            Some(_) | None => return Ok(()),
        }
    }
}
