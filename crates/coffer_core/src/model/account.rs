//! Account domain model.
//!
//! # Responsibility
//! - Define the bank account entity and its guarded state transitions.
//! - Enforce the owner-name character policy at construction.
//!
//! # Invariants
//! - `balance >= 0` at all times.
//! - `owner_name` contains only letters and spaces, with at least one letter.
//! - A blocked account rejects deposits and withdrawals.
//! - A failed operation never leaves a partial mutation.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static OWNER_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L} ]*\p{L}[\p{L} ]*$").expect("valid owner name regex"));

/// Directory-scoped account identifier.
///
/// Assigned by the directory on insertion unless supplied via
/// [`Account::with_id`].
pub type AccountId = i64;

/// Failure kinds for account construction and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountError {
    /// Owner name violates the character policy.
    InvalidArgument,
    /// Amount is zero or negative.
    InvalidAmount,
    /// Account is blocked for deposits and withdrawals.
    AccountBlocked,
    /// Withdrawal exceeds the current balance.
    InsufficientFunds,
}

impl Display for AccountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "name contains invalid characters"),
            Self::InvalidAmount => write!(f, "invalid amount"),
            Self::AccountBlocked => write!(f, "account is blocked"),
            Self::InsufficientFunds => write!(f, "insufficient balance"),
        }
    }
}

impl Error for AccountError {}

/// Bank account owned by a single person.
///
/// Fields are private so every mutation goes through the guarded methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AccountRecord")]
pub struct Account {
    id: Option<AccountId>,
    owner_name: String,
    balance: Decimal,
    blocked: bool,
}

/// Unvalidated wire shape; converted through `TryFrom` so decoding cannot
/// bypass the entity invariants.
#[derive(Deserialize)]
struct AccountRecord {
    id: Option<AccountId>,
    owner_name: String,
    balance: Decimal,
    blocked: bool,
}

impl TryFrom<AccountRecord> for Account {
    type Error = String;

    fn try_from(value: AccountRecord) -> Result<Self, Self::Error> {
        let mut account =
            Account::build(value.id, value.owner_name).map_err(|err| err.to_string())?;
        if value.balance < Decimal::ZERO {
            return Err("balance cannot be negative".to_string());
        }
        account.balance = value.balance;
        account.blocked = value.blocked;
        Ok(account)
    }
}

impl Account {
    /// Creates an unblocked, zero-balance account without an identifier.
    ///
    /// # Errors
    /// - [`AccountError::InvalidArgument`] when `owner_name` is empty or has
    ///   anything other than letters and spaces.
    pub fn new(owner_name: impl Into<String>) -> Result<Self, AccountError> {
        Self::build(None, owner_name.into())
    }

    /// Creates an account with a caller-provided identifier.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: AccountId, owner_name: impl Into<String>) -> Result<Self, AccountError> {
        Self::build(Some(id), owner_name.into())
    }

    /// Rebuilds a persisted account, re-checking every invariant.
    pub(crate) fn restore(
        id: AccountId,
        owner_name: String,
        balance: Decimal,
        blocked: bool,
    ) -> Result<Self, String> {
        Self::try_from(AccountRecord {
            id: Some(id),
            owner_name,
            balance,
            blocked,
        })
    }

    fn build(id: Option<AccountId>, owner_name: String) -> Result<Self, AccountError> {
        if !is_valid_owner_name(&owner_name) {
            return Err(AccountError::InvalidArgument);
        }

        Ok(Self {
            id,
            owner_name,
            balance: Decimal::ZERO,
            blocked: false,
        })
    }

    /// Adds `amount` to the balance.
    ///
    /// # Errors
    /// - [`AccountError::InvalidAmount`] when `amount <= 0`, or when the new
    ///   balance would exceed [`Decimal::MAX`].
    /// - [`AccountError::AccountBlocked`] when the account is blocked.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount);
        }
        if self.blocked {
            return Err(AccountError::AccountBlocked);
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::InvalidAmount)?;
        Ok(())
    }

    /// Subtracts `amount` from the balance.
    ///
    /// # Errors
    /// - [`AccountError::AccountBlocked`] when the account is blocked.
    /// - [`AccountError::InvalidAmount`] when `amount <= 0`.
    /// - [`AccountError::InsufficientFunds`] when `amount` exceeds the balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if self.blocked {
            return Err(AccountError::AccountBlocked);
        }
        // A non-positive withdrawal would otherwise grow the balance.
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount);
        }
        if self.balance < amount {
            return Err(AccountError::InsufficientFunds);
        }

        self.balance -= amount;
        Ok(())
    }

    pub fn block(&mut self) {
        self.blocked = true;
    }

    pub fn unblock(&mut self) {
        self.blocked = false;
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn id(&self) -> Option<AccountId> {
        self.id
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Binds a directory-assigned identifier. Only the directory calls this.
    pub(crate) fn assign_id(&mut self, id: AccountId) {
        self.id = Some(id);
    }
}

/// Returns whether `name` satisfies the owner-name character policy.
pub fn is_valid_owner_name(name: &str) -> bool {
    OWNER_NAME_RE.is_match(name)
}
