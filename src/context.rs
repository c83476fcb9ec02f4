//! Application context
//!
//! Owns the catalog, link registry and order processor for one process and
//! hands them out as shared handles; nothing here is a global.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::config::StaticConfig;
use crate::errors::Result;
use crate::links::LinkRegistry;
use crate::orders::OrderProcessor;

/// Builds the public URLs embedded in API responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUrls {
    base_url: String,
}

impl PublicUrls {
    /// `base_url` is normalized to end with `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}orders/details/{id}`
    pub fn tracking_url(&self, order_id: u64) -> String {
        format!("{}orders/details/{}", self.base_url, order_id)
    }

    /// `{base}t/{code}`
    pub fn share_link(&self, short_code: &str) -> String {
        format!("{}t/{}", self.base_url, short_code)
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<Catalog>,
    pub links: Arc<LinkRegistry>,
    pub orders: Arc<OrderProcessor>,
    pub urls: PublicUrls,
    pub started_at: DateTime<Utc>,
}

impl AppContext {
    /// Context over the seeded catalog, configured from `config`.
    pub fn from_config(config: &StaticConfig) -> Result<Self> {
        Self::new(
            Catalog::seeded(),
            config.base_url(),
            config.shop.default_customer_id,
        )
    }

    pub fn new(
        catalog: Catalog,
        base_url: impl Into<String>,
        default_customer_id: u64,
    ) -> Result<Self> {
        let catalog = Arc::new(catalog);
        let links = Arc::new(LinkRegistry::new());
        let urls = PublicUrls::new(base_url);
        let orders = Arc::new(OrderProcessor::new(
            Arc::clone(&catalog),
            Arc::clone(&links),
            urls.clone(),
            default_customer_id,
        )?);

        Ok(Self {
            catalog,
            links,
            orders,
            urls,
            started_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_urls() {
        let urls = PublicUrls::new("http://localhost:5000");

        assert_eq!(urls.base_url(), "http://localhost:5000/");
        assert_eq!(
            urls.tracking_url(12),
            "http://localhost:5000/orders/details/12"
        );
        assert_eq!(urls.share_link("cDvN6J"), "http://localhost:5000/t/cDvN6J");
    }

    #[test]
    fn test_context_shares_registry_with_processor() {
        let ctx = AppContext::from_config(&StaticConfig::default()).unwrap();

        let tracking = ctx.orders.tracking_link(1);

        assert_eq!(ctx.links.len(), 1);
        assert_eq!(
            ctx.links.expand(&tracking.short_code).unwrap(),
            "http://127.0.0.1:8080/orders/details/1"
        );
    }
}
