use parking_lot::RwLock;
use tracing::{debug, trace};

use super::models::{Customer, Flower};
use super::seed::{seed_customers, seed_flowers};
use crate::errors::{Result, ShopError};

/// Catalog aggregate
///
/// Flowers sit behind one lock so a reservation's check-and-move is a single
/// critical section. Customers are immutable and need no lock.
#[derive(Debug)]
pub struct Catalog {
    flowers: RwLock<Vec<Flower>>,
    customers: Vec<Customer>,
}

impl Catalog {
    pub fn new(flowers: Vec<Flower>, customers: Vec<Customer>) -> Self {
        Self {
            flowers: RwLock::new(flowers),
            customers,
        }
    }

    /// Catalog preloaded with the shop's demo flowers and customers
    pub fn seeded() -> Self {
        Self::new(seed_flowers(), seed_customers())
    }

    /// Current state of every flower, in catalog order
    pub fn list_flowers(&self) -> Vec<Flower> {
        self.flowers.read().clone()
    }

    pub fn get_flower(&self, id: u64) -> Result<Flower> {
        self.flowers
            .read()
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or_else(|| ShopError::not_found(format!("Flower not found: {}", id)))
    }

    /// Reserve stock on one flower.
    ///
    /// `Ok(false)` means the flower exists but has too little available stock.
    pub fn reserve(&self, id: u64, quantity: u32) -> Result<bool> {
        let mut flowers = self.flowers.write();
        let flower = flowers
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| ShopError::not_found(format!("Flower not found: {}", id)))?;

        let reserved = flower.reserve(quantity);
        if reserved {
            trace!(
                "Catalog: reserved {} x {} (available {}, committed {})",
                quantity, flower.name, flower.available_stock, flower.committed_stock
            );
        } else {
            debug!(
                "Catalog: cannot reserve {} x {}, only {} available",
                quantity, flower.name, flower.available_stock
            );
        }
        Ok(reserved)
    }

    pub fn list_customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn get_customer(&self, id: u64) -> Result<Customer> {
        self.customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ShopError::not_found(format!("Customer not found: {}", id)))
    }

    pub fn flower_count(&self) -> usize {
        self.flowers.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();

        assert_eq!(catalog.flower_count(), 4);
        assert_eq!(catalog.list_customers().len(), 3);
        let rose = catalog.get_flower(3).unwrap();
        assert_eq!(rose.name, "Royal Red Rose");
        assert_eq!(rose.price, 500);
        assert_eq!(rose.available_stock, 8);
    }

    #[test]
    fn test_reserve_through_catalog() {
        let catalog = Catalog::seeded();

        assert!(catalog.reserve(3, 3).unwrap());
        let rose = catalog.get_flower(3).unwrap();
        assert_eq!(rose.available_stock, 5);
        assert_eq!(rose.committed_stock, 3);

        assert!(!catalog.reserve(3, 6).unwrap());
        assert_eq!(catalog.get_flower(3).unwrap(), rose);
    }

    #[test]
    fn test_unknown_ids() {
        let catalog = Catalog::seeded();

        assert!(matches!(catalog.get_flower(99), Err(ShopError::NotFound(_))));
        assert!(matches!(catalog.reserve(99, 1), Err(ShopError::NotFound(_))));
        assert!(matches!(
            catalog.get_customer(999),
            Err(ShopError::NotFound(_))
        ));
    }

    #[test]
    fn test_concurrent_reservations_never_oversell() {
        use std::sync::Arc;

        let catalog = Arc::new(Catalog::seeded());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let catalog = Arc::clone(&catalog);
                std::thread::spawn(move || {
                    (0..5).filter(|_| catalog.reserve(4, 1).unwrap()).count()
                })
            })
            .collect();

        let reserved: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        let sunflower = catalog.get_flower(4).unwrap();

        assert_eq!(reserved, 15);
        assert_eq!(sunflower.available_stock, 0);
        assert_eq!(sunflower.committed_stock, 15);
    }
}
