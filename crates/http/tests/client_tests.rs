//! Integration tests for the TonTax session client

use std::cell::Cell;
use std::rc::Rc;

use serde_json::json;
use tontax_http::{ClientError, Credentials, MemoryTokenStore, SessionClient, TokenStore};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_with_store(base_url: &str, store: Rc<MemoryTokenStore>) -> SessionClient {
    SessionClient::builder()
        .base_url(base_url)
        .token_store(store)
        .build()
        .expect("client should build")
}

fn balance_body() -> serde_json::Value {
    json!({
        "address": "UQabc",
        "balance": 12.5,
        "is_active": true,
        "balance_ton": "12.500000000"
    })
}

#[tokio::test]
async fn test_client_builder() {
    let client = SessionClient::builder()
        .base_url("http://localhost:8080/")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = SessionClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_login_stores_token_pair() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login/"))
        .and(body_json(json!({
            "email": "user@example.com",
            "password": "hunter22"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "email": "user@example.com",
            "tokens": {"access": "A1", "refresh": "R1"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Rc::new(MemoryTokenStore::new());
    let client = client_with_store(&mock_server.uri(), store.clone());

    let response = client.login("user@example.com", "hunter22").await.unwrap();
    assert_eq!(response.tokens.access, "A1");

    assert_eq!(store.load(), Credentials::new("A1", "R1"));
    assert_eq!(client.credentials(), Credentials::new("A1", "R1"));
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_register_sends_password_confirm() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register/"))
        .and(body_json(json!({
            "email": "new@example.com",
            "password": "hunter22",
            "password_confirm": "hunter22"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 2,
            "email": "new@example.com",
            "tokens": {"access": "A1", "refresh": "R1"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Rc::new(MemoryTokenStore::new());
    let client = client_with_store(&mock_server.uri(), store.clone());

    client
        .register("new@example.com", "hunter22", "hunter22")
        .await
        .unwrap();

    assert_eq!(store.load(), Credentials::new("A1", "R1"));
}

#[tokio::test]
async fn test_authorized_request_carries_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet/balance/"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(balance_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Rc::new(MemoryTokenStore::new());
    store.save(&Credentials::new("A1", "R1"));
    let client = client_with_store(&mock_server.uri(), store);

    let balance = client.balance().await.unwrap();
    assert_eq!(balance.balance_ton, "12.500000000");
    assert!(balance.is_active);
}

#[tokio::test]
async fn test_expired_token_renews_and_retries_once() {
    let mock_server = MockServer::start().await;

    // The stale token is rejected once...
    Mock::given(method("GET"))
        .and(path("/wallet/balance/"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "token expired"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    // ...renewal hands out a fresh pair...
    Mock::given(method("POST"))
        .and(path("/refresh/"))
        .and(body_json(json!({"refresh_token": "R1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tokens": {"access": "A2", "refresh": "R2"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // ...and the single retry carries the fresh token.
    Mock::given(method("GET"))
        .and(path("/wallet/balance/"))
        .and(header("authorization", "Bearer A2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(balance_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Rc::new(MemoryTokenStore::new());
    store.save(&Credentials::new("A1", "R1"));
    let client = client_with_store(&mock_server.uri(), store.clone());

    let balance = client.balance().await.unwrap();
    assert_eq!(balance.address, "UQabc");

    // Both halves of the pair were replaced together.
    assert_eq!(store.load(), Credentials::new("A2", "R2"));
    assert_eq!(client.credentials(), Credentials::new("A2", "R2"));
}

#[tokio::test]
async fn test_failed_renewal_tears_down_and_notifies_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet/balance/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "token expired"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/refresh/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "invalid refresh"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Rc::new(MemoryTokenStore::new());
    store.save(&Credentials::new("A1", "R1"));

    let notifications = Rc::new(Cell::new(0usize));
    let seen = notifications.clone();
    let client = SessionClient::builder()
        .base_url(mock_server.uri())
        .token_store(store.clone())
        .on_session_end(Rc::new(move || seen.set(seen.get() + 1)))
        .build()
        .unwrap();

    let result = client.balance().await;

    // The original failed response surfaces; no second attempt was made.
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
    assert_eq!(notifications.get(), 1);

    // Teardown cleared both copies of the pair.
    assert!(store.load().is_empty());
    assert!(client.credentials().is_empty());
}

#[tokio::test]
async fn test_renew_without_refresh_token_makes_no_network_call() {
    let mock_server = MockServer::start().await;

    let store = Rc::new(MemoryTokenStore::new());
    store.save(&Credentials {
        access: Some("A1".into()),
        refresh: None,
    });
    let client = client_with_store(&mock_server.uri(), store);

    let result = client.renew().await;

    assert!(matches!(result, Err(ClientError::NoRefreshToken)));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
    // A missing refresh token is not a renewal rejection; nothing is torn down.
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_renewal_overwrites_both_tokens() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/refresh/"))
        .and(body_json(json!({"refresh_token": "R1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tokens": {"access": "A2", "refresh": "R2"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Rc::new(MemoryTokenStore::new());
    store.save(&Credentials::new("A1", "R1"));
    let client = client_with_store(&mock_server.uri(), store.clone());

    client.renew().await.unwrap();

    // Never a mix of old and new.
    assert_eq!(store.load(), Credentials::new("A2", "R2"));
    assert_eq!(client.credentials(), Credentials::new("A2", "R2"));
}

#[tokio::test]
async fn test_malformed_renewal_body_tears_down() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/refresh/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Rc::new(MemoryTokenStore::new());
    store.save(&Credentials::new("A1", "R1"));
    let client = client_with_store(&mock_server.uri(), store.clone());

    let result = client.renew().await;

    assert!(matches!(result, Err(ClientError::RenewalRejected(_))));
    assert!(store.load().is_empty());
    assert!(client.credentials().is_empty());
}

#[tokio::test]
async fn test_logout_clears_pair_and_drops_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Wallet/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "connected": false,
            "message": "wallet is not connected"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Rc::new(MemoryTokenStore::new());
    store.save(&Credentials::new("A1", "R1"));
    let client = client_with_store(&mock_server.uri(), store.clone());

    client.logout();
    assert!(store.load().is_empty());
    assert!(client.credentials().is_empty());

    // Idempotent with nothing left to clear.
    client.logout();

    let wallet = client.wallet().await.unwrap();
    assert!(!wallet.connected);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_domain_error_passes_through_without_renewal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet/balance/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "wallet is not connected"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/refresh/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let store = Rc::new(MemoryTokenStore::new());
    store.save(&Credentials::new("A1", "R1"));
    let client = client_with_store(&mock_server.uri(), store.clone());

    let result = client.balance().await;

    match result {
        Err(ClientError::BadRequest(message)) => {
            assert_eq!(message, "wallet is not connected");
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }
    // A domain error is not an auth failure; the session is untouched.
    assert_eq!(store.load(), Credentials::new("A1", "R1"));
}

#[tokio::test]
async fn test_transactions_refresh_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet/transactions/"))
        .and(query_param("refresh", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [{
                "tx_hash": "abc123",
                "timestamp": "2024-03-01T10:00:00",
                "amount": 1.5,
                "amount_ton": "1.500000000",
                "from_address": "UQabc",
                "to_address": "UQdef",
                "status": "completed",
                "created_at": "2024-03-01T10:05:00"
            }],
            "count": 1,
            "loaded_from_blockchain": 1,
            "saved_to_db": 1,
            "from_cache": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Rc::new(MemoryTokenStore::new());
    store.save(&Credentials::new("A1", "R1"));
    let client = client_with_store(&mock_server.uri(), store);

    let history = client.transactions(true).await.unwrap();
    assert_eq!(history.count, 1);
    assert_eq!(history.transactions[0].tx_hash, "abc123");
    assert!(!history.from_cache);
}

#[tokio::test]
async fn test_tax_filters_appended_only_when_present() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tax/all/"))
        .and(query_param("start_year", "2024"))
        .and(query_param_is_missing("start_month"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "monthly_taxes": [],
            "count": 0
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tax/total/"))
        .and(query_param_is_missing("start_year"))
        .and(query_param_is_missing("start_month"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_tax_ton": 0.0,
            "total_tax_usd": 0.0,
            "total_sent_ton": 0.0,
            "total_sent_usd": 0.0,
            "total_transactions": 0,
            "ton_price_usd": 5.0,
            "monthly_taxes": [],
            "period": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Rc::new(MemoryTokenStore::new());
    store.save(&Credentials::new("A1", "R1"));
    let client = client_with_store(&mock_server.uri(), store);

    let months = client.tax_for_all_months(Some(2024), None).await.unwrap();
    assert!(months.monthly_taxes.is_empty());

    let total = client.total_tax(None, None).await.unwrap();
    assert_eq!(total.total_transactions, 0);
    assert!(total.period.is_none());
}

#[tokio::test]
async fn test_tax_for_month_query_and_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tax/month/"))
        .and(query_param("year", "2024"))
        .and(query_param("month", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "year": 2024,
            "month": 3,
            "total_sent_ton": 10.0,
            "total_sent_usd": 50.0,
            "total_tax_ton": 0.5,
            "total_tax_usd": 2.5,
            "transactions_count": 2,
            "transactions": [{
                "tx_hash": "abc123",
                "timestamp": "2024-03-02T12:00:00",
                "operation_type": "sell",
                "amount_ton": 10.0,
                "amount_usd": 50.0,
                "matched_buy_amount_ton": 10.0,
                "profit_ton": 2.0,
                "profit_usd": 10.0,
                "tax_rate": 0.05,
                "tax_amount_ton": 0.5,
                "tax_amount_usd": 2.5
            }],
            "demo_deals": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Rc::new(MemoryTokenStore::new());
    store.save(&Credentials::new("A1", "R1"));
    let client = client_with_store(&mock_server.uri(), store);

    let summary = client.tax_for_month(2024, 3).await.unwrap();
    assert_eq!(summary.month, 3);
    assert_eq!(summary.transactions.len(), 1);
    assert_eq!(summary.transactions[0].operation_type, "sell");
}
