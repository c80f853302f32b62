//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `coffer_core` wiring end to end.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `coffer_cli [DB_PATH]`. Without a path the SQLite directory lives
//! in memory for the duration of the run. Set `COFFER_LOG_DIR` to an
//! absolute directory to enable file logging.

use coffer_core::db::{open_db, open_db_in_memory};
use coffer_core::{
    core_version, default_log_level, init_logging, Account, AccountService, RepoError,
    SqliteAccountRepository,
};
use rust_decimal::Decimal;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "COFFER_LOG_DIR";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("coffer_cli: logging disabled: {err}");
        }
    }

    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_run module=cli status=error error={err}");
            eprintln!("coffer_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(db_path: Option<String>) -> Result<(), RepoError> {
    println!("coffer_core version={}", core_version());

    let conn = match db_path.as_deref() {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let service = AccountService::new(SqliteAccountRepository::new(&conn));

    let id = service.add_account(&Account::new("Edgar")?)?;
    let mut account = service.find_by_id(id)?.ok_or(RepoError::NotFound(id))?;
    account.deposit(Decimal::new(13297, 2))?;
    account.withdraw(Decimal::new(2997, 2))?;
    service.update_account(&account)?;

    for account in service.find_all()? {
        println!(
            "account id={} balance={} blocked={}",
            account.id().unwrap_or_default(),
            account.balance(),
            account.is_blocked()
        );
    }

    Ok(())
}
