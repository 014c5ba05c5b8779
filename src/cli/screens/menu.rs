use crate::{catalog::MenuItem, stats::CourseStats};

use crate::cli::{
    io as cli_io,
    nav::{NavItem, Navigator},
    output,
    session::Session,
    shell::CliError,
};

/// Menu screen: browse courses and add items to the selection.
pub fn run(session: &mut Session) -> Result<(), CliError> {
    loop {
        let courses: Vec<String> = session
            .catalog()
            .courses()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut rows: Vec<NavItem> = Vec::new();
        for course in &courses {
            let items = session.catalog().items_in(course);
            let average =
                CourseStats::average_price_with_prefix(session.catalog(), course, session.prefix())?;
            rows.push(NavItem::new(
                course.clone(),
                format!(
                    "{} items · Average Price: {}",
                    items.len(),
                    session.format_price(average)
                ),
            ));
        }
        rows.push(NavItem::new("back", "Return to the main menu"));

        let mut nav = Navigator::new("Menu", rows);
        let Some(index) = nav.show()? else {
            return Ok(());
        };
        match courses.get(index) {
            Some(course) => browse_course(session, course)?,
            None => return Ok(()),
        }
    }
}

fn browse_course(session: &mut Session, course: &str) -> Result<(), CliError> {
    let items: Vec<MenuItem> = session
        .catalog()
        .items_in(course)
        .into_iter()
        .cloned()
        .collect();

    loop {
        let mut rows: Vec<NavItem> = items
            .iter()
            .map(|item| {
                NavItem::new(
                    format!("{} - {}", item.name, item.price),
                    item.description.clone(),
                )
            })
            .collect();
        rows.push(NavItem::new("back", "Return to the course list"));

        let mut nav = Navigator::new(course, rows);
        let Some(index) = nav.show()? else {
            return Ok(());
        };
        match items.get(index) {
            Some(item) => {
                let notice = session.ledger_mut().add(item)?;
                output::success(notice);
                output::info(format!(
                    "Total so far: {}",
                    session.format_price(session.ledger().total())
                ));
                cli_io::pause()?;
            }
            None => return Ok(()),
        }
    }
}
