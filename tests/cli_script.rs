use assert_cmd::Command;
use menu_core::{
    catalog::{Catalog, MenuItem},
    config::{Config, ConfigManager},
};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

fn script_cmd(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("menu_core_cli").unwrap();
    cmd.env("MENU_CORE_CLI_SCRIPT", "1")
        .env("MENU_CORE_HOME", home);
    cmd
}

#[test]
fn script_mode_runs_an_ordering_flow() {
    let home = tempfile::tempdir().unwrap();
    let input = "add Cappuccino\nadd Sandwich\ntotal\norder\nexit\n";

    script_cmd(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("SUCCESS: Cappuccino has been added to your selection."))
        .stdout(contains("Total: R75.00"))
        .stdout(contains("Your order has been received and will be prepared soon!"));
}

#[test]
fn script_mode_reports_errors_and_continues() {
    let home = tempfile::tempdir().unwrap();
    let input = "add Unobtainium\nadd Salad\nremove 5\nitems\nexit\n";

    script_cmd(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("no menu item named `Unobtainium`"))
        .stdout(contains("Salad has been added to your selection."))
        .stdout(contains("out of range"))
        .stdout(contains("Total: R59.99"));
}

#[test]
fn removal_shifts_displayed_positions() {
    let home = tempfile::tempdir().unwrap();
    let input = "add Salad\nadd Soup\nadd Pizza\nremove 2\nitems\nexit\n";

    script_cmd(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Soup has been removed from your selection."))
        .stdout(contains("2. Pizza - R99.99"));
}

#[test]
fn ordering_an_empty_selection_fails() {
    let home = tempfile::tempdir().unwrap();

    script_cmd(home.path())
        .write_stdin("order\nexit\n")
        .assert()
        .success()
        .stdout(contains("cannot place an order with an empty selection"));
}

#[test]
fn configured_catalog_and_prefix_drive_the_session() {
    let home = tempfile::tempdir().unwrap();
    let catalog_path = home.path().join("menu.json");
    let catalog = Catalog::new(vec![MenuItem::new(
        "Latte",
        "$10.00",
        "House latte.",
        "images/latte.jpg",
        "Drinks",
    )]);
    catalog.save_to_file(&catalog_path).unwrap();

    let manager = ConfigManager::with_base_dir(home.path().to_path_buf()).unwrap();
    manager
        .save(&Config {
            currency_prefix: "$".into(),
            catalog_path: Some(catalog_path),
        })
        .unwrap();

    script_cmd(home.path())
        .write_stdin("add Latte\ntotal\naverages\nexit\n")
        .assert()
        .success()
        .stdout(contains("Latte has been added to your selection."))
        .stdout(contains("Total: $10.00"))
        .stdout(contains("Drinks: $10.00 (1 items)"));
}

#[test]
fn quiet_mode_suppresses_info_output() {
    let home = tempfile::tempdir().unwrap();

    script_cmd(home.path())
        .env("MENU_CORE_QUIET", "1")
        .write_stdin("add Salad\ntotal\nexit\n")
        .assert()
        .success()
        .stdout(contains("SUCCESS: Salad has been added to your selection."))
        .stdout(contains("Total:").not());
}

#[test]
fn menu_lists_courses_with_averages() {
    let home = tempfile::tempdir().unwrap();

    script_cmd(home.path())
        .write_stdin("menu\naverages\nexit\n")
        .assert()
        .success()
        .stdout(contains("=== Starters ==="))
        .stdout(contains("Average Price: R64.99"))
        .stdout(contains("Mains: R112.49 (4 items)"));
}
