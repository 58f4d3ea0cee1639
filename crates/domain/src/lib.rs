//! Domain model for liquidity-vault status documents.
//!
//! This crate provides:
//! - Raw status documents as returned by a vault status endpoint
//! - Typed sections: vault data, liquidity overview, liquidity positions
//! - Value objects for prices, price ranges and optional leaf fields

/// Entities parsed from document sections.
pub mod entities;
/// Section and field identifiers.
pub mod enums;
/// Status documents and snapshots.
pub mod document;
/// Value objects.
pub mod value_objects;

pub use document::{StatusDocument, VaultSnapshot};
pub use enums::{OverviewField, SectionKind, VaultField};
