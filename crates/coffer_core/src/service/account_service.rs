//! Account use-case service.
//!
//! # Responsibility
//! - Provide stable directory entry points for core callers.
//! - Delegate storage to the repository passed in at construction.
//!
//! # Invariants
//! - Every method forwards arguments and results unchanged.
//! - Service layer remains storage-agnostic.

use crate::model::account::{Account, AccountId};
use crate::repo::account_repo::{AccountRepository, RepoResult};

/// Use-case service wrapper over an account directory.
pub struct AccountService<R: AccountRepository> {
    repo: R,
}

impl<R: AccountRepository> AccountService<R> {
    /// Creates a service owning the provided directory implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds an account and returns its directory identifier.
    pub fn add_account(&self, account: &Account) -> RepoResult<AccountId> {
        self.repo.add_account(account)
    }

    /// Gets one account by ID; `None` when no account has that ID.
    pub fn find_by_id(&self, id: AccountId) -> RepoResult<Option<Account>> {
        self.repo.find_by_id(id)
    }

    pub fn find_all(&self) -> RepoResult<Vec<Account>> {
        self.repo.find_all()
    }

    /// Persists a mutated account by ID.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn update_account(&self, account: &Account) -> RepoResult<()> {
        self.repo.update_account(account)
    }
}
