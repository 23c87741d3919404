use std::fmt;

/// A dish on a restaurant menu. Immutable once loaded into the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price,
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub user: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
}

/// A restaurant with its menu and reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub logo_url: String,
    pub cuisines: Vec<String>,
    pub rating: f32,
    pub reviews_count: u32,
    pub delivery_time: String,
    pub address: String,
    pub phone: String,
    pub opening_hours: String,
    pub description: String,
    pub menu: Vec<MenuItem>,
    pub reviews: Vec<Review>,
}

/// Catalog entry without an id. The catalog actor assigns one on load.
#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub image_url: String,
    pub logo_url: String,
    pub cuisines: Vec<String>,
    pub rating: f32,
    pub reviews_count: u32,
    pub delivery_time: String,
    pub address: String,
    pub phone: String,
    pub opening_hours: String,
    pub description: String,
    pub menu: Vec<MenuItem>,
    pub reviews: Vec<Review>,
}

impl Restaurant {
    pub fn menu_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == item_id)
    }

    pub fn serves(&self, cuisine: &str) -> bool {
        self.cuisines.iter().any(|c| c == cuisine)
    }

    /// Case-insensitive name search combined with the cuisine filter.
    pub fn matches(&self, term: &str, filter: &CuisineFilter) -> bool {
        let name_matches = self.name.to_lowercase().contains(&term.trim().to_lowercase());
        let cuisine_matches = match filter {
            CuisineFilter::All => true,
            CuisineFilter::Cuisine(cuisine) => self.serves(cuisine),
        };
        name_matches && cuisine_matches
    }
}

/// Cuisine tags offered by the home page filter, in display order.
pub const CUISINE_TYPES: [&str; 7] = ["Italian", "American", "Japanese", "Mexican", "Indian", "Pizza", "Burgers"];

/// Single-selection cuisine filter. Selecting a tag replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CuisineFilter {
    #[default]
    All,
    Cuisine(String),
}

impl CuisineFilter {
    /// Parses a filter tag. "All" (any case) clears the filter.
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Cuisine(tag.to_string())
        }
    }

    pub fn is_active(&self, tag: &str) -> bool {
        *self == Self::from_tag(tag)
    }
}

impl fmt::Display for CuisineFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CuisineFilter::All => write!(f, "All"),
            CuisineFilter::Cuisine(cuisine) => write!(f, "{}", cuisine),
        }
    }
}
