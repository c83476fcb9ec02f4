//! Link registry
//!
//! Content-addressed short links: the code for a URL is derived from the URL
//! itself (MD5 → first 32 bits → Base62), so shortening the same URL twice
//! yields the same code without any counter or coordination.

pub mod base62;
mod registry;

pub use base62::{ALPHABET, SHORT_CODE_MAX_LEN, encode_base62, is_valid_short_code};
pub use registry::{DEFAULT_PURPOSE, LinkRecord, LinkRegistry, PURPOSE_ORDER_TRACKING};
