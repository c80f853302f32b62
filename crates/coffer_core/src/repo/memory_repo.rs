//! In-memory account directory.
//!
//! # Responsibility
//! - Own an account collection without any external storage.
//! - Assign monotonic identifiers to accounts inserted without one.
//!
//! # Invariants
//! - The whole collection is guarded by one lock; every call is atomic.
//! - Generated ids are strictly greater than any id ever stored.

use crate::model::account::{Account, AccountId};
use crate::repo::account_repo::{AccountRepository, RepoError, RepoResult};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct DirectoryState {
    accounts: BTreeMap<AccountId, Account>,
    last_id: AccountId,
}

/// Process-local account directory.
///
/// Each instance owns its own collection; there is no shared global store.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    state: Mutex<DirectoryState>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, DirectoryState>> {
        self.state.lock().map_err(|_| RepoError::LockPoisoned)
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn add_account(&self, account: &Account) -> RepoResult<AccountId> {
        let mut state = self.lock()?;

        let id = match account.id() {
            Some(id) if state.accounts.contains_key(&id) => {
                warn!("event=account_add module=repo status=error error_code=duplicate_id id={id}");
                return Err(RepoError::DuplicateId(id));
            }
            Some(id) => id,
            None => state.last_id.checked_add(1).ok_or_else(|| {
                warn!("event=account_add module=repo status=error error_code=id_space_exhausted");
                RepoError::IdSpaceExhausted
            })?,
        };

        let mut stored = account.clone();
        stored.assign_id(id);
        state.accounts.insert(id, stored);
        state.last_id = state.last_id.max(id);

        debug!("event=account_add module=repo status=ok backend=memory id={id}");
        Ok(id)
    }

    fn find_by_id(&self, id: AccountId) -> RepoResult<Option<Account>> {
        Ok(self.lock()?.accounts.get(&id).cloned())
    }

    fn find_all(&self) -> RepoResult<Vec<Account>> {
        Ok(self.lock()?.accounts.values().cloned().collect())
    }

    fn update_account(&self, account: &Account) -> RepoResult<()> {
        let id = account.id().ok_or(RepoError::MissingId)?;
        let mut state = self.lock()?;

        let slot = state.accounts.get_mut(&id).ok_or(RepoError::NotFound(id))?;
        *slot = account.clone();

        debug!("event=account_update module=repo status=ok backend=memory id={id}");
        Ok(())
    }
}
