//! Domain model for the account core.
//!
//! # Responsibility
//! - Define the account entity and its failure taxonomy.
//!
//! # Invariants
//! - Entities enforce their own invariants; storage never mutates fields
//!   directly except to bind a directory-assigned identifier.

pub mod account;
