//! Cryptographic primitives for Lynx

pub mod hash;

pub use hash::{calculate_merkle_root, calculate_sha256, calculate_sha256d};
