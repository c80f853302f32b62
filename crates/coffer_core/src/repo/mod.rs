//! Account directory abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the keyed account directory contract.
//! - Isolate storage details (in-memory map, SQLite) from the service layer.
//!
//! # Invariants
//! - Directories assign identifiers; entities never invent their own.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`) in
//!   addition to storage transport errors.

pub mod account_repo;
pub mod memory_repo;
