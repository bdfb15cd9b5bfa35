//! SHA-256 (FIPS 180-4) computed from first principles: padding, block
//! segmentation, schedule expansion, 64-round compression and digest
//! assembly, each in its own module.

pub mod blocks;
pub mod compress;
pub mod consts;
pub mod error;
pub mod files;
pub mod logger;
pub mod padding;
pub mod schedule;
pub mod sha256;

pub use consts::DIGEST_LEN;
pub use error::HashError;
pub use sha256::{digest, digests_match, verify, Digest};
