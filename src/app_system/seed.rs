//! Static mock data loaded into the catalog and order history at startup.

use chrono::NaiveDate;

use crate::domain::{MenuItem, OrderCreate, OrderItem, OrderStatus, RestaurantCreate, Review};

fn image(query: &str, size: &str) -> String {
    format!("https://source.unsplash.com/random/{}?{}", size, query)
}

fn dish(id: &str, name: &str, description: &str, price: f64, query: &str) -> MenuItem {
    MenuItem::new(id, name, price)
        .with_description(description)
        .with_image(image(query, "300x200"))
}

struct Listing {
    name: &'static str,
    query: &'static str,
    cuisines: &'static [&'static str],
    rating: f32,
    delivery_time: &'static str,
}

fn restaurant(listing: Listing, details: (&str, &str, &str, &str), menu: Vec<MenuItem>, reviews: Vec<Review>) -> RestaurantCreate {
    let (address, phone, opening_hours, description) = details;
    RestaurantCreate {
        name: listing.name.to_string(),
        image_url: image(listing.query, "400x300"),
        logo_url: image(&format!("{}-logo", listing.query), "100x100"),
        cuisines: listing.cuisines.iter().map(|c| c.to_string()).collect(),
        rating: listing.rating,
        reviews_count: reviews.len() as u32,
        delivery_time: listing.delivery_time.to_string(),
        address: address.to_string(),
        phone: phone.to_string(),
        opening_hours: opening_hours.to_string(),
        description: description.to_string(),
        menu,
        reviews,
    }
}

/// The home page restaurants, in listing order. The catalog assigns ids "1".."6".
pub(crate) fn restaurants() -> Vec<RestaurantCreate> {
    let mut pizza_heaven = restaurant(
        Listing { name: "Pizza Heaven", query: "pizza", cuisines: &["Italian", "Pizza"], rating: 4.5, delivery_time: "25-35 min" },
        (
            "123 Pizza St, Food City",
            "555-123-4567",
            "11:00 AM - 10:00 PM",
            "Serving the best authentic Italian pizzas in town. Fresh ingredients, traditional recipes.",
        ),
        vec![
            dish("m1", "Margherita Pizza", "Classic cheese and tomato", 12.99, "margherita-pizza"),
            dish("m2", "Pepperoni Pizza", "Loaded with pepperoni", 14.99, "pepperoni-pizza"),
            dish("m3", "Garlic Bread", "With cheese and herbs", 5.99, "garlic-bread"),
            dish("m4", "Coke", "Chilled soft drink", 2.50, "coke-can"),
        ],
        vec![
            Review { id: "r1".into(), user: "Alice".into(), rating: 5, comment: "Best pizza ever!".into(), date: "2024-07-15".into() },
            Review { id: "r2".into(), user: "Bob".into(), rating: 4, comment: "Good, but a bit pricey.".into(), date: "2024-07-10".into() },
        ],
    );
    pizza_heaven.reviews_count = 120;

    vec![
        pizza_heaven,
        restaurant(
            Listing { name: "Burger Palace", query: "burger", cuisines: &["American", "Burgers"], rating: 4.2, delivery_time: "20-30 min" },
            ("45 Grill Ave, Food City", "555-234-5678", "10:00 AM - 11:00 PM", "Stacked burgers and crispy fries."),
            vec![
                dish("b1", "Deluxe Burger", "Double patty with cheese", 15.00, "burger"),
                dish("s1", "Large Fries", "Salted and crispy", 5.50, "fries"),
            ],
            Vec::new(),
        ),
        restaurant(
            Listing { name: "Sushi World", query: "sushi", cuisines: &["Japanese", "Sushi"], rating: 4.8, delivery_time: "30-40 min" },
            ("8 Harbor Rd, Food City", "555-345-6789", "12:00 PM - 10:00 PM", "Fresh nigiri and rolls."),
            vec![
                dish("j1", "Salmon Nigiri", "Two pieces", 6.50, "salmon-nigiri"),
                dish("j2", "Dragon Roll", "Eel and avocado", 13.75, "sushi-roll"),
            ],
            Vec::new(),
        ),
        restaurant(
            Listing { name: "Taco Town", query: "taco", cuisines: &["Mexican"], rating: 4.3, delivery_time: "20-30 min" },
            ("19 Salsa Blvd, Food City", "555-456-7890", "11:00 AM - 11:00 PM", "Street-style tacos."),
            vec![dish("c1", "Chicken Tacos (3)", "Corn tortillas, salsa verde", 10.75, "tacos")],
            Vec::new(),
        ),
        restaurant(
            Listing { name: "Curry House", query: "curry", cuisines: &["Indian"], rating: 4.6, delivery_time: "35-45 min" },
            ("72 Spice Ln, Food City", "555-567-8901", "5:00 PM - 11:00 PM", "Slow-cooked curries."),
            vec![
                dish("i1", "Butter Chicken", "Creamy tomato curry", 14.50, "butter-chicken"),
                dish("i2", "Garlic Naan", "Fresh from the tandoor", 3.25, "naan"),
            ],
            Vec::new(),
        ),
        restaurant(
            Listing { name: "Pasta Place", query: "pasta", cuisines: &["Italian", "Pasta"], rating: 4.4, delivery_time: "25-35 min" },
            ("3 Noodle Way, Food City", "555-678-9012", "11:30 AM - 9:30 PM", "Handmade pasta daily."),
            vec![dish("p1", "Spaghetti Carbonara", "Guanciale and pecorino", 13.50, "carbonara")],
            Vec::new(),
        ),
    ]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn item(name: &str, quantity: u32, price: f64) -> OrderItem {
    OrderItem { name: name.to_string(), quantity, price }
}

/// Past and current orders. The order store assigns ids ORD001..ORD003.
pub(crate) fn order_history() -> Vec<OrderCreate> {
    vec![
        OrderCreate {
            date: date(2024, 7, 20),
            total: 31.97,
            status: OrderStatus::OutForDelivery,
            items: vec![item("Margherita Pizza", 1, 12.99), item("Garlic Bread", 2, 5.99)],
            delivery: None,
        },
        OrderCreate {
            date: date(2024, 7, 15),
            total: 45.50,
            status: OrderStatus::Delivered,
            items: vec![item("Deluxe Burger", 2, 15.00), item("Large Fries", 1, 5.50)],
            delivery: None,
        },
        OrderCreate {
            date: date(2024, 6, 10),
            total: 18.75,
            status: OrderStatus::Cancelled,
            items: vec![item("Chicken Tacos (3)", 1, 10.75)],
            delivery: None,
        },
    ]
}
