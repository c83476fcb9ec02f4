//! Flower catalog and customer directory
//!
//! The catalog owns every flower's stock ledger. Stock only ever moves from
//! `available_stock` to `committed_stock` through [`Flower::reserve`].

mod models;
mod seed;
mod store;

pub use models::{Customer, Flower};
pub use seed::{seed_customers, seed_flowers};
pub use store::Catalog;
