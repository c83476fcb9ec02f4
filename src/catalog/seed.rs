//! Demo catalog loaded at startup

use super::models::{Customer, Flower};

pub fn seed_flowers() -> Vec<Flower> {
    vec![
        Flower::new(
            1,
            "Pink Tulips",
            450,
            10,
            "https://images.unsplash.com/photo-1561181226-e8a7edd504c6?q=80&w=687&auto=format&fit=crop",
        ),
        Flower::new(
            2,
            "White Rice Flower Bouquet",
            320,
            5,
            "https://plus.unsplash.com/premium_photo-1668790459193-95f86452a5dc?q=80&w=735&auto=format&fit=crop",
        ),
        Flower::new(
            3,
            "Royal Red Rose",
            500,
            8,
            "https://plus.unsplash.com/premium_photo-1669997827506-e8e7aa33e7e3?q=80&w=687&auto=format&fit=crop",
        ),
        Flower::new(
            4,
            "Sunflower Bundle",
            280,
            15,
            "https://plus.unsplash.com/premium_photo-1676068244464-59294c6ff008?q=80&w=1170&auto=format&fit=crop",
        ),
    ]
}

pub fn seed_customers() -> Vec<Customer> {
    vec![
        Customer::new(101, "Otani Trading HQ", "admin@otanitrading.com"),
        Customer::new(102, "Dubai Floral Shop", "buyer@dubaifloral.com"),
        Customer::new(103, "Events UAE", "manager@eventsuae.ae"),
    ]
}
