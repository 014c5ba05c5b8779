use menu_core::{
    catalog::{builtin_catalog, chef_recommendations, Catalog},
    stats::CourseStats,
};

#[test]
fn builtin_course_averages() {
    let catalog = builtin_catalog();
    let cases = [
        ("Starters", 64.99),
        ("Mains", 112.49),
        ("Desserts", 44.99),
        ("Drinks", 24.99),
    ];
    for (course, expected) in cases {
        let average = CourseStats::average_price(catalog, course).unwrap();
        assert!(
            (average - expected).abs() < 1e-9,
            "{course}: expected {expected}, got {average}"
        );
    }
}

#[test]
fn unknown_course_averages_to_zero_not_nan() {
    let average = CourseStats::average_price(builtin_catalog(), "Brunch").unwrap();
    assert_eq!(average, 0.0);
    assert!(!average.is_nan());
}

#[test]
fn recommendation_board_averages() {
    let board = Catalog::new(
        chef_recommendations()
            .iter()
            .map(|rec| rec.item.clone())
            .collect(),
    );
    let rows = CourseStats::course_averages(&board).unwrap();
    assert_eq!(rows.len(), 3);

    let starters = rows.iter().find(|row| row.course == "Starters").unwrap();
    assert!((starters.average - 50.0).abs() < 1e-9);

    let mains = rows.iter().find(|row| row.course == "Main Food").unwrap();
    assert_eq!(mains.item_count, 3);
    assert!((mains.average - (60.0 + 88.0 + 79.0) / 3.0).abs() < 1e-9);

    let drinks = rows.iter().find(|row| row.course == "Drinks").unwrap();
    assert!((drinks.average - 25.0).abs() < 1e-9);
}
