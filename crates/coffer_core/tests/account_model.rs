use coffer_core::{Account, AccountError};
use rust_decimal::Decimal;
use std::str::FromStr;

fn amount(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

fn edgar() -> Account {
    Account::new("Edgar").unwrap()
}

#[test]
fn new_account_starts_empty_and_unblocked() {
    let account = edgar();

    assert_eq!(account.id(), None);
    assert_eq!(account.owner_name(), "Edgar");
    assert_eq!(account.balance(), Decimal::ZERO);
    assert!(!account.is_blocked());
}

#[test]
fn valid_names_construct() {
    for name in ["Edgar", "Maria da Silva", "ANA", "joão pedro"] {
        let account = Account::new(name).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
        assert!(!account.is_blocked());
    }
}

#[test]
fn name_with_digit_is_rejected() {
    let err = Account::new("Edgar4 ").unwrap_err();
    assert_eq!(err, AccountError::InvalidArgument);
    assert_eq!(err.to_string(), "name contains invalid characters");
}

#[test]
fn names_with_disallowed_characters_are_rejected() {
    for name in ["", " ", "Edgar!", "ed_gar", "Ana.", "R2D2", "Ana\tMaria"] {
        assert_eq!(
            Account::new(name).unwrap_err(),
            AccountError::InvalidArgument,
            "name `{name}` should be rejected"
        );
    }
    assert_eq!(
        Account::with_id(7, "Edgar4").unwrap_err(),
        AccountError::InvalidArgument
    );
}

#[test]
fn deposit_adds_exact_amount() {
    let mut account = edgar();

    account.deposit(amount("132.97")).unwrap();

    assert_eq!(account.balance(), amount("132.97"));
}

#[test]
fn repeated_small_deposits_do_not_drift() {
    let mut account = edgar();

    for _ in 0..10 {
        account.deposit(amount("0.1")).unwrap();
    }

    assert_eq!(account.balance(), amount("1"));
}

#[test]
fn deposit_negative_amount_fails_with_invalid_amount() {
    let mut account = edgar();

    let err = account.deposit(amount("-5000")).unwrap_err();

    assert_eq!(err, AccountError::InvalidAmount);
    assert_eq!(err.to_string(), "invalid amount");
    assert_eq!(account.balance(), Decimal::ZERO);
}

#[test]
fn deposit_zero_fails_with_invalid_amount() {
    let mut account = edgar();
    assert_eq!(
        account.deposit(Decimal::ZERO).unwrap_err(),
        AccountError::InvalidAmount
    );
}

#[test]
fn deposit_into_blocked_account_fails() {
    let mut account = edgar();
    account.block();

    let err = account.deposit(amount("1500.30")).unwrap_err();

    assert_eq!(err, AccountError::AccountBlocked);
    assert_eq!(err.to_string(), "account is blocked");
    assert_eq!(account.balance(), Decimal::ZERO);
}

#[test]
fn invalid_amount_is_checked_before_blocked_state_on_deposit() {
    let mut account = edgar();
    account.block();

    assert_eq!(
        account.deposit(amount("-1")).unwrap_err(),
        AccountError::InvalidAmount
    );
}

#[test]
fn deposit_overflowing_balance_fails_without_mutation() {
    let mut account = edgar();
    account.deposit(Decimal::MAX - amount("1")).unwrap();

    account.deposit(amount("1")).unwrap();
    assert_eq!(account.balance(), Decimal::MAX);

    let err = account.deposit(amount("1")).unwrap_err();
    assert_eq!(err, AccountError::InvalidAmount);
    assert_eq!(account.balance(), Decimal::MAX);

    account.withdraw(amount("1")).unwrap();
    assert_eq!(account.balance(), Decimal::MAX - amount("1"));
}

#[test]
fn withdraw_subtracts_exact_amount() {
    let mut account = edgar();

    account.deposit(amount("1000")).unwrap();
    account.withdraw(amount("500")).unwrap();

    assert_eq!(account.balance(), amount("500"));
}

#[test]
fn withdraw_entire_balance_leaves_zero() {
    let mut account = edgar();
    account.deposit(amount("250.55")).unwrap();

    account.withdraw(amount("250.55")).unwrap();

    assert_eq!(account.balance(), Decimal::ZERO);
}

#[test]
fn withdraw_from_empty_account_fails_with_insufficient_funds() {
    let mut account = edgar();

    let err = account.withdraw(amount("500")).unwrap_err();

    assert_eq!(err, AccountError::InsufficientFunds);
    assert_eq!(err.to_string(), "insufficient balance");
    assert_eq!(account.balance(), Decimal::ZERO);
}

#[test]
fn withdraw_from_blocked_account_fails_even_with_funds() {
    let mut account = edgar();
    account.deposit(amount("1000")).unwrap();
    account.block();

    let err = account.withdraw(amount("500")).unwrap_err();

    assert_eq!(err, AccountError::AccountBlocked);
    assert_eq!(account.balance(), amount("1000"));
}

#[test]
fn blocked_state_wins_over_insufficient_funds() {
    let mut account = edgar();
    account.block();

    assert_eq!(
        account.withdraw(amount("500")).unwrap_err(),
        AccountError::AccountBlocked
    );
}

#[test]
fn withdraw_negative_amount_does_not_grow_balance() {
    let mut account = edgar();
    account.deposit(amount("10")).unwrap();

    assert_eq!(
        account.withdraw(amount("-90")).unwrap_err(),
        AccountError::InvalidAmount
    );
    assert_eq!(account.balance(), amount("10"));
}

#[test]
fn unblock_restores_operations_without_touching_balance() {
    let mut account = edgar();
    account.deposit(amount("100")).unwrap();

    account.block();
    assert!(account.is_blocked());
    assert_eq!(account.balance(), amount("100"));

    account.unblock();
    assert!(!account.is_blocked());
    assert_eq!(account.balance(), amount("100"));

    account.deposit(amount("50")).unwrap();
    account.withdraw(amount("30")).unwrap();
    assert_eq!(account.balance(), amount("120"));
}

#[test]
fn block_and_unblock_are_idempotent() {
    let mut account = edgar();

    account.block();
    account.block();
    assert!(account.is_blocked());

    account.unblock();
    account.unblock();
    assert!(!account.is_blocked());
}

#[test]
fn account_serialization_uses_expected_wire_fields() {
    let mut account = Account::with_id(42, "Edgar").unwrap();
    account.deposit(amount("132.97")).unwrap();
    account.block();

    let json = serde_json::to_value(&account).unwrap();
    assert_eq!(json["id"], 42);
    assert_eq!(json["owner_name"], "Edgar");
    assert_eq!(json["balance"], "132.97");
    assert_eq!(json["blocked"], true);

    let decoded: Account = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, account);
}

#[test]
fn deserialize_rejects_invalid_owner_name() {
    let value = serde_json::json!({
        "id": null,
        "owner_name": "Edgar4",
        "balance": "0",
        "blocked": false
    });

    let err = serde_json::from_value::<Account>(value).unwrap_err();
    assert!(
        err.to_string().contains("name contains invalid characters"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_negative_balance() {
    let value = serde_json::json!({
        "id": 1,
        "owner_name": "Edgar",
        "balance": "-0.01",
        "blocked": false
    });

    let err = serde_json::from_value::<Account>(value).unwrap_err();
    assert!(
        err.to_string().contains("balance cannot be negative"),
        "unexpected error: {err}"
    );
}
