use std::fmt;

/// Client-side routes. Unknown and stub paths resolve to `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Restaurant(String),
    Cart,
    Checkout,
    Orders,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["restaurant", id] => Route::Restaurant((*id).to_string()),
            ["cart"] => Route::Cart,
            ["checkout"] => Route::Checkout,
            ["orders"] => Route::Orders,
            _ => Route::NotFound,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Restaurant(id) => write!(f, "/restaurant/{}", id),
            Route::Cart => write!(f, "/cart"),
            Route::Checkout => write!(f, "/checkout"),
            Route::Orders => write!(f, "/orders"),
            Route::NotFound => write!(f, "/404"),
        }
    }
}
