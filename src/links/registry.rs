use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use super::base62::{SHORT_CODE_MAX_LEN, encode_base62};
use crate::errors::{Result, ShopError};

/// Purpose tag used when the caller gives none.
pub const DEFAULT_PURPOSE: &str = "general";

/// Purpose tag attached to order tracking links.
pub const PURPOSE_ORDER_TRACKING: &str = "order_tracking";

/// A stored short link and its usage counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub short_code: String,
    pub original_url: String,
    pub purpose: String,
    pub created_at: DateTime<Utc>,
    pub click_count: u64,
}

/// In-memory short link registry keyed by short code.
///
/// `DashMap` shards the map, and the entry API makes insert-if-absent and the
/// click increment atomic per code.
#[derive(Debug, Default)]
pub struct LinkRegistry {
    links: DashMap<String, LinkRecord>,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the short code for a URL without touching the registry.
    ///
    /// MD5 of the UTF-8 bytes, first 32 bits (the first 8 hex digits) read
    /// big-endian, Base62 encoded and capped at 7 symbols.
    pub fn short_code_for(url: &str) -> String {
        let digest = Md5::digest(url.as_bytes());
        let prefix = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);

        let mut code = encode_base62(prefix);
        code.truncate(SHORT_CODE_MAX_LEN);
        code
    }

    /// Shorten a URL and return its code.
    ///
    /// An existing record under the computed code is never overwritten, even
    /// when it belongs to a different URL that collided on the 32-bit prefix.
    pub fn shorten(&self, url: &str, purpose: &str) -> String {
        let code = Self::short_code_for(url);

        match self.links.entry(code.clone()) {
            Entry::Occupied(existing) => {
                if existing.get().original_url == url {
                    trace!("LinkRegistry: reusing code {} for {}", code, url);
                } else {
                    warn!(
                        "LinkRegistry: code {} already maps to {}, keeping it for {}",
                        code,
                        existing.get().original_url,
                        url
                    );
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(LinkRecord {
                    short_code: code.clone(),
                    original_url: url.to_string(),
                    purpose: purpose.to_string(),
                    created_at: Utc::now(),
                    click_count: 0,
                });
                info!("LinkRegistry: created {} -> {} ({})", code, url, purpose);
            }
        }

        code
    }

    /// Resolve a code to its URL, counting one click.
    pub fn expand(&self, code: &str) -> Result<String> {
        let Some(mut record) = self.links.get_mut(code) else {
            debug!("LinkRegistry: unknown code {}", code);
            return Err(ShopError::not_found(format!("Short code not found: {}", code)));
        };

        record.click_count += 1;
        trace!(
            "LinkRegistry: {} expanded, {} clicks",
            code, record.click_count
        );
        Ok(record.original_url.clone())
    }

    /// Snapshot of a link's record. Does not count as a click.
    pub fn get_stats(&self, code: &str) -> Result<LinkRecord> {
        self.links
            .get(code)
            .map(|record| record.value().clone())
            .ok_or_else(|| ShopError::not_found(format!("Short code not found: {}", code)))
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
