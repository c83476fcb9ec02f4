use serde::{Deserialize, Serialize};

/// 商品（花束）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flower {
    pub id: u64,
    pub name: String,
    /// Unit price in the shop's single currency
    pub price: u64,
    pub image_url: String,
    /// Physical stock ready to be sold
    pub available_stock: u32,
    /// Sold but not yet shipped
    pub committed_stock: u32,
}

impl Flower {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        price: u64,
        initial_stock: u32,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image_url: image_url.into(),
            available_stock: initial_stock,
            committed_stock: 0,
        }
    }

    /// Move `quantity` units from available to committed stock.
    ///
    /// Returns `false` and leaves both pools untouched when fewer than
    /// `quantity` units are available. Callers validate that `quantity` is
    /// positive.
    pub fn reserve(&mut self, quantity: u32) -> bool {
        if self.available_stock < quantity {
            return false;
        }

        self.available_stock -= quantity;
        self.committed_stock += quantity;
        true
    }

    /// Units held in either pool; constant across reservations.
    #[inline]
    pub fn total_stock(&self) -> u64 {
        u64::from(self.available_stock) + u64::from(self.committed_stock)
    }
}

/// 客户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
