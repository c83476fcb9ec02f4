//! petalshop - a flower shop ordering backend
//!
//! Catalog browsing, batch order placement with stock reservation, and
//! content-addressed short links for sharing order tracking pages.
//!
//! # Architecture
//! - `catalog`: flowers, customers and the available/committed stock ledger
//! - `orders`: batch order processing and the order log
//! - `links`: short link registry (MD5 + Base62) with click counting
//! - `context`: the application context owning all aggregates
//! - `api`: HTTP services and middleware
//! - `config`: static configuration
//! - `runtime`: application lifecycle and server mode
//! - `system`: logging

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod errors;
pub mod links;
pub mod orders;
pub mod runtime;
pub mod system;
