//! Compiled-in menu data used when no catalog file is configured.

use once_cell::sync::Lazy;

use super::{Catalog, MenuItem, Recommendation};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(vec![
        MenuItem::new("Salad", "R59.99", "Fresh garden salad.", "images/salad.jpg", "Starters"),
        MenuItem::new("Soup", "R49.99", "Tomato basil soup.", "images/soup.jpg", "Starters"),
        MenuItem::new(
            "Bruschetta",
            "R69.99",
            "Grilled bread with tomatoes.",
            "images/bruschetta.jpg",
            "Starters",
        ),
        MenuItem::new(
            "Spring Rolls",
            "R79.99",
            "Crispy vegetable spring rolls.",
            "images/rolls.jpg",
            "Starters",
        ),
        MenuItem::new("Steak", "R149.99", "Grilled rib-eye steak.", "images/steak.jpg", "Mains"),
        MenuItem::new(
            "Pasta",
            "R119.99",
            "Pasta in creamy Alfredo sauce.",
            "images/pasta.jpg",
            "Mains",
        ),
        MenuItem::new("Pizza", "R99.99", "Wood-fired Margherita pizza.", "images/pizza.jpg", "Mains"),
        MenuItem::new(
            "Burger",
            "R79.99",
            "Classic beef burger with fries.",
            "images/burger.jpg",
            "Mains",
        ),
        MenuItem::new(
            "Cheesecake",
            "R49.99",
            "Creamy New York cheesecake.",
            "images/cheese.jpg",
            "Desserts",
        ),
        MenuItem::new("Brownie", "R39.99", "Chocolate fudge brownie.", "images/brown.jpg", "Desserts"),
        MenuItem::new("Ice Cream", "R29.99", "Vanilla bean ice cream.", "images/ice.jpg", "Desserts"),
        MenuItem::new("Apple Pie", "R59.99", "Homemade apple pie.", "images/apple.jpg", "Desserts"),
        MenuItem::new("Coffee", "R29.99", "Hot brewed coffee.", "images/coffee.jpg", "Drinks"),
        MenuItem::new("Tea", "R19.99", "Green tea with lemon.", "images/tea.jpg", "Drinks"),
        MenuItem::new("Soda", "R19.99", "Chilled soda with ice.", "images/soda.jpg", "Drinks"),
        MenuItem::new("Juice", "R29.99", "Fresh orange juice.", "images/juice.png", "Drinks"),
    ])
});

static RECOMMENDATIONS: Lazy<Vec<Recommendation>> = Lazy::new(|| {
    vec![
        Recommendation::new(
            MenuItem::new("Cappuccino", "R25", "Foamy house cappuccino.", "images/cappuccino.jpg", "Drinks"),
            5.0,
            120,
            "Christoffel",
        ),
        Recommendation::new(
            MenuItem::new("Sandwich", "R50", "Toasted club sandwich.", "images/sandwich.jpg", "Starters"),
            4.4,
            105,
            "Christoffel",
        ),
        Recommendation::new(
            MenuItem::new(
                "Oysters & Greens",
                "R60",
                "Fresh oysters over greens.",
                "images/oysters.jpg",
                "Main Food",
            ),
            4.5,
            110,
            "Christoffel",
        ),
        Recommendation::new(
            MenuItem::new("Lasagna", "R88", "Layered beef lasagna.", "images/lasagna.jpg", "Main Food"),
            4.7,
            123,
            "Christoffel",
        ),
        Recommendation::new(
            MenuItem::new("Burgers", "R79", "Flame-grilled burgers.", "images/burgers.jpg", "Main Food"),
            5.0,
            200,
            "Christoffel",
        ),
    ]
});

/// The default restaurant menu: four courses, four items each.
pub fn builtin_catalog() -> &'static Catalog {
    &BUILTIN
}

/// Rated items featured on the home screen board.
pub fn chef_recommendations() -> &'static [Recommendation] {
    &RECOMMENDATIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::parse_price;

    #[test]
    fn builtin_catalog_covers_four_courses() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.courses(), vec!["Starters", "Mains", "Desserts", "Drinks"]);
        for course in catalog.courses() {
            assert_eq!(catalog.items_in(course).len(), 4);
        }
    }

    #[test]
    fn every_builtin_price_parses() {
        for item in builtin_catalog().items() {
            assert!(parse_price(&item.price).is_ok(), "bad price on {}", item.name);
        }
        for rec in chef_recommendations() {
            assert!(parse_price(&rec.item.price).is_ok(), "bad price on {}", rec.item.name);
        }
    }
}
