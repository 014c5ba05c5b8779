use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// The price stays in its currency-tagged string form; `pricing` parses it
/// whenever a total or average is computed. The image field is an opaque
/// asset handle resolved by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub course: String,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: description.into(),
            image: image.into(),
            course: course.into(),
        }
    }
}

/// A menu item featured on the chef's recommendation board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub item: MenuItem,
    pub rating: f32,
    pub reviews: u32,
    pub chef: String,
}

impl Recommendation {
    pub fn new(item: MenuItem, rating: f32, reviews: u32, chef: impl Into<String>) -> Self {
        Self {
            item,
            rating,
            reviews,
            chef: chef.into(),
        }
    }
}
