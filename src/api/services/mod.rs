pub mod catalog;
pub mod health;
pub mod links;
pub mod orders;
pub mod redirect;

pub use catalog::{CatalogService, catalog_routes};
pub use health::{AppStartTime, HealthService, health_routes};
pub use links::{LinkService, link_routes};
pub use orders::{OrderService, order_routes, parse_order_items};
pub use redirect::{RedirectService, redirect_routes};
