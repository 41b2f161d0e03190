//! Statement and balance integration tests.

mod common;

use account_service::models::{EntryKind, LedgerEntry};
use chrono::{TimeZone, Utc};
use common::{error_of, TestApp};
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

#[tokio::test]
async fn deposit_acknowledges_and_appears_in_statement() {
    let app = TestApp::spawn().await;
    let id = app.register_customer("111", "Alice").await;

    let response = app.post_deposit(&id, "salary", 1000).await;

    assert_eq!(201, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Deposit successfully made!");

    let statement: Value = app.get_statement(&id, None).await.json().await.unwrap();
    assert_eq!(statement["balance"], "1000");
    let entries = statement["statements"].as_array().unwrap();
    assert_eq!(1, entries.len());
    assert_eq!(entries[0]["type"], "credit");
    assert_eq!(entries[0]["description"], "salary");
    assert!(
        entries[0]["created_at"].as_str().is_some(),
        "timestamp is assigned by the service"
    );
}

#[tokio::test]
async fn withdraw_with_insufficient_balance_leaves_history_unchanged() {
    let app = TestApp::spawn().await;
    let id = app.register_customer("111", "Alice").await;
    app.post_deposit(&id, "salary", 1000).await;

    let response = app.post_withdraw(&id, "rent", 1200).await;

    assert_eq!(400, response.status().as_u16());
    assert_eq!("Insuficient balance.", error_of(response).await);

    let statement: Value = app.get_statement(&id, None).await.json().await.unwrap();
    assert_eq!(statement["balance"], "1000");
    assert_eq!(1, statement["statements"].as_array().unwrap().len());
}

#[tokio::test]
async fn withdraw_within_balance_appends_debit() {
    let app = TestApp::spawn().await;
    let id = app.register_customer("111", "Alice").await;
    app.post_deposit(&id, "salary", 1000).await;

    let response = app.post_withdraw(&id, "rent", 800).await;

    assert_eq!(201, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Withdraw successfully made!");

    let statement: Value = app.get_statement(&id, None).await.json().await.unwrap();
    assert_eq!(statement["balance"], "200");
    let entries = statement["statements"].as_array().unwrap();
    assert_eq!(2, entries.len());
    assert_eq!(entries[1]["type"], "debit");
}

#[tokio::test]
async fn withdraw_of_exact_balance_is_allowed() {
    let app = TestApp::spawn().await;
    let id = app.register_customer("111", "Alice").await;
    app.post_deposit(&id, "salary", 500).await;

    let response = app.post_withdraw(&id, "everything", 500).await;

    assert_eq!(201, response.status().as_u16());
    assert_eq!("0", app.balance(&id).await);
}

#[tokio::test]
async fn negative_amounts_are_rejected() {
    let app = TestApp::spawn().await;
    let id = app.register_customer("111", "Alice").await;

    let response = app.post_deposit(&id, "oops", -10).await;
    assert_eq!(400, response.status().as_u16());
    assert_eq!("Amount must not be negative.", error_of(response).await);

    let response = app.post_withdraw(&id, "oops", -10).await;
    assert_eq!(400, response.status().as_u16());
    assert_eq!("Amount must not be negative.", error_of(response).await);

    assert_eq!("0", app.balance(&id).await);
}

#[tokio::test]
async fn statement_rejects_unparseable_date() {
    let app = TestApp::spawn().await;
    let id = app.register_customer("111", "Alice").await;

    let response = app.get_statement(&id, Some("13/01/2024")).await;

    assert_eq!(400, response.status().as_u16());
    assert_eq!("Invalid date.", error_of(response).await);
}

#[tokio::test]
async fn statement_filters_by_calendar_day() {
    let app = TestApp::spawn().await;
    let id = app.register_customer("111", "Alice").await;

    // Seed entries on two distinct days directly through the store; the
    // HTTP surface always stamps the current time.
    let handle = app.state.store.find(Uuid::parse_str(&id).unwrap()).unwrap();
    {
        let mut customer = handle.write().await;
        customer.statements.push(LedgerEntry::new(
            EntryKind::Credit,
            "day one",
            Decimal::from(100),
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        ));
        customer.statements.push(LedgerEntry::new(
            EntryKind::Debit,
            "day two",
            Decimal::from(30),
            Utc.with_ymd_and_hms(2024, 1, 2, 8, 30, 0).unwrap(),
        ));
    }

    let statement: Value = app
        .get_statement(&id, Some("2024-01-01"))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(statement["balance"], "100");
    let entries = statement["statements"].as_array().unwrap();
    assert_eq!(1, entries.len());
    assert_eq!(entries[0]["description"], "day one");

    let statement: Value = app
        .get_statement(&id, Some("2024-01-02"))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(statement["balance"], "-30");
    assert_eq!(1, statement["statements"].as_array().unwrap().len());

    // A day with no entries filters everything out.
    let statement: Value = app
        .get_statement(&id, Some("2024-01-03"))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(statement["balance"], "0");
    assert!(statement["statements"].as_array().unwrap().is_empty());

    // No date: the whole history and the full balance.
    let statement: Value = app.get_statement(&id, None).await.json().await.unwrap();
    assert_eq!(statement["balance"], "70");
    assert_eq!(2, statement["statements"].as_array().unwrap().len());
}

#[tokio::test]
async fn statement_for_today_includes_fresh_entries() {
    let app = TestApp::spawn().await;
    let id = app.register_customer("111", "Alice").await;
    app.post_deposit(&id, "salary", 100).await;

    let today = Utc::now().date_naive().to_string();
    let statement: Value = app
        .get_statement(&id, Some(&today))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(statement["balance"], "100");
    assert_eq!(1, statement["statements"].as_array().unwrap().len());
}

#[tokio::test]
async fn statements_preserve_insertion_order() {
    let app = TestApp::spawn().await;
    let id = app.register_customer("111", "Alice").await;

    app.post_deposit(&id, "first", 10).await;
    app.post_deposit(&id, "second", 20).await;
    app.post_withdraw(&id, "third", 5).await;

    let statement: Value = app.get_statement(&id, None).await.json().await.unwrap();
    let descriptions: Vec<&str> = statement["statements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["description"].as_str().unwrap())
        .collect();

    assert_eq!(vec!["first", "second", "third"], descriptions);
}
