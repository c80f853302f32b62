//! Core domain logic for Coffer.
//! This crate is the single source of truth for account invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::account::{is_valid_owner_name, Account, AccountError, AccountId};
pub use repo::account_repo::{AccountRepository, RepoError, RepoResult, SqliteAccountRepository};
pub use repo::memory_repo::InMemoryAccountRepository;
pub use service::account_service::AccountService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
