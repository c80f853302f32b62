//! Account directory contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable add/find/update APIs over keyed account storage.
//! - Keep SQL details inside core persistence boundary.
//!
//! # Invariants
//! - Stored accounts always carry an identifier.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Balances are persisted as exact decimal text, never as floating point.

use crate::db::DbError;
use crate::model::account::{Account, AccountError, AccountId};
use log::{debug, warn};
use rusqlite::{params, Connection, ErrorCode, Row};
use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const ACCOUNT_SELECT_SQL: &str = "SELECT
    id,
    owner_name,
    balance,
    blocked
FROM accounts";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for account storage and lookup operations.
#[derive(Debug)]
pub enum RepoError {
    Account(AccountError),
    Db(DbError),
    NotFound(AccountId),
    MissingId,
    DuplicateId(AccountId),
    IdSpaceExhausted,
    InvalidData(String),
    LockPoisoned,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Account(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "account not found: {id}"),
            Self::MissingId => write!(f, "account has no identifier"),
            Self::DuplicateId(id) => write!(f, "account id already exists: {id}"),
            Self::IdSpaceExhausted => write!(f, "no account ids left to assign"),
            Self::InvalidData(message) => write!(f, "invalid persisted account data: {message}"),
            Self::LockPoisoned => write!(f, "account directory lock poisoned"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Account(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AccountError> for RepoError {
    fn from(value: AccountError) -> Self {
        Self::Account(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Keyed directory of accounts.
///
/// Lookups return owned copies; use [`AccountRepository::update_account`]
/// to persist mutations made on a copy.
pub trait AccountRepository {
    /// Stores `account`, returning its identifier.
    ///
    /// A caller-supplied id is kept as-is; otherwise the directory assigns
    /// the next monotonic id.
    fn add_account(&self, account: &Account) -> RepoResult<AccountId>;
    fn find_by_id(&self, id: AccountId) -> RepoResult<Option<Account>>;
    /// Returns every stored account. Callers must not rely on ordering.
    fn find_all(&self) -> RepoResult<Vec<Account>>;
    fn update_account(&self, account: &Account) -> RepoResult<()>;
}

/// SQLite-backed account directory.
pub struct SqliteAccountRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAccountRepository<'conn> {
    /// Wraps a connection returned by [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AccountRepository for SqliteAccountRepository<'_> {
    fn add_account(&self, account: &Account) -> RepoResult<AccountId> {
        let result = self.conn.execute(
            "INSERT INTO accounts (
                id,
                owner_name,
                balance,
                blocked
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                account.id(),
                account.owner_name(),
                account.balance().to_string(),
                bool_to_int(account.is_blocked()),
            ],
        );

        if let Err(err) = result {
            match (account.id(), err.sqlite_error_code()) {
                (Some(id), Some(ErrorCode::ConstraintViolation)) => {
                    warn!("event=account_add module=repo status=error error_code=duplicate_id id={id}");
                    return Err(RepoError::DuplicateId(id));
                }
                // AUTOINCREMENT reports SQLITE_FULL once the largest rowid was used.
                (None, Some(ErrorCode::DiskFull)) => {
                    warn!("event=account_add module=repo status=error error_code=id_space_exhausted");
                    return Err(RepoError::IdSpaceExhausted);
                }
                _ => return Err(err.into()),
            }
        }

        let id = account.id().unwrap_or_else(|| self.conn.last_insert_rowid());
        debug!("event=account_add module=repo status=ok backend=sqlite id={id}");
        Ok(id)
    }

    fn find_by_id(&self, id: AccountId) -> RepoResult<Option<Account>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ACCOUNT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_account_row(row)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Account>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ACCOUNT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut accounts = Vec::new();

        while let Some(row) = rows.next()? {
            accounts.push(parse_account_row(row)?);
        }

        Ok(accounts)
    }

    fn update_account(&self, account: &Account) -> RepoResult<()> {
        let id = account.id().ok_or(RepoError::MissingId)?;

        let changed = self.conn.execute(
            "UPDATE accounts
             SET
                balance = ?1,
                blocked = ?2
             WHERE id = ?3;",
            params![
                account.balance().to_string(),
                bool_to_int(account.is_blocked()),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        debug!("event=account_update module=repo status=ok backend=sqlite id={id}");
        Ok(())
    }
}

fn parse_account_row(row: &Row<'_>) -> RepoResult<Account> {
    let id: AccountId = row.get("id")?;

    let balance_text: String = row.get("balance")?;
    let balance = Decimal::from_str(&balance_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid balance `{balance_text}` in accounts.balance"
        ))
    })?;

    let blocked = match row.get::<_, i64>("blocked")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid blocked value `{other}` in accounts.blocked"
            )));
        }
    };

    Account::restore(id, row.get("owner_name")?, balance, blocked)
        .map_err(|message| RepoError::InvalidData(format!("account {id}: {message}")))
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
