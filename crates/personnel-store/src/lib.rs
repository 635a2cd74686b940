//! Personnel Store - dataset loading for the personnel ledger
//!
//! Provides:
//! - Seed Format v0 schema
//! - YAML parser with validation
//! - Digest canonicalization
//! - Importer that populates a fresh `StoreContext`

pub mod errors;
pub mod seed;

// Re-export key types
pub use errors::Result;
