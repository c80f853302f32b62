//! Core use-case services.
//!
//! # Responsibility
//! - Expose directory operations to callers (CLI, embedding apps).
//! - Keep callers decoupled from storage details.

pub mod account_service;
