use account_sdk::io::network::TransportError;
use account_sdk::model::account::AccountStatus;
use account_sdk::model::api::{AccountInfoRequest, Request};
use account_sdk::model::errors::RemoteErrorKind;
use account_sdk::AccountErrKind;
use test_utils::*;

const ACCOUNTS: &str = r#"[
    {"accountId":11,"orgId":1,"userId":100,"currency":"BTC","availAmount":"0.00000001",
     "freezeAmount":"3","status":1,"createTime":1690000000,"updateTime":1690000100},
    {"accountId":12,"orgId":1,"userId":100,"currency":"ETH","availAmount":"0",
     "freezeAmount":"0","status":2,"createTime":1690000000,"updateTime":1690000100}
]"#;

#[tokio::test]
async fn create_account_success() {
    let client = test_client(SpyTransport::replying(ACCOUNTS));
    let accounts = client.create_account(1, 100, &["BTC", "ETH"]).await.unwrap();

    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].avail_amount.as_str(), "0.00000001");
    assert_eq!(accounts[1].status, AccountStatus::Frozen);

    let call = client.transport.last_call();
    assert_eq!(call.host, TEST_HOST);
    assert_eq!(call.service, "account");
    assert_eq!(call.method, "createAccount");
    assert_eq!(call.param("orgId"), "1");
    assert_eq!(call.param("userId"), "100");
    assert_eq!(call.param("currency"), "BTC,ETH");
}

#[tokio::test]
async fn create_account_no_currencies() {
    let client = test_client(SpyTransport::replying(ACCOUNTS));
    let err = client.create_account(1, 100, &[]).await.unwrap_err();

    assert_eq!(err.kind, AccountErrKind::InvalidParams);
    assert_eq!(client.transport.call_count(), 0);
}

#[tokio::test]
async fn create_account_non_positive_ids() {
    let client = test_client(SpyTransport::replying(ACCOUNTS));

    for (org_id, user_id) in [(0, 100), (-1, 100), (1, 0), (1, -5)] {
        let err = client
            .create_account(org_id, user_id, &["BTC"])
            .await
            .unwrap_err();
        assert!(err.is_invalid_params(), "({org_id}, {user_id}) gave {err:?}");
    }
    assert_eq!(client.transport.call_count(), 0);
}

#[tokio::test]
async fn create_account_exists() {
    let client = test_client(SpyTransport::remote_failure(2001, "account exists"));
    let err = client.create_account(1, 100, &["BTC"]).await.unwrap_err();

    assert_eq!(err.remote_kind(), Some(RemoteErrorKind::AccountExists));
    assert_eq!(client.transport.call_count(), 1);
}

#[tokio::test]
async fn account_info_success() {
    let client = test_client(SpyTransport::replying(ACCOUNTS));
    let accounts = client.account_info(1, &[100, 200], "").await.unwrap();

    assert_eq!(accounts.len(), 2);
    let call = client.transport.last_call();
    assert_eq!(call.method, "accountInfo");
    assert_eq!(call.param("userIds"), "[100,200]");
    assert_eq!(call.param_json("userIds"), serde_json::json!([100, 200]));
    assert_eq!(call.param("currency"), "");
}

#[tokio::test]
async fn account_info_no_users() {
    let client = test_client(SpyTransport::replying(ACCOUNTS));
    let err = client.account_info(1, &[], "BTC").await.unwrap_err();

    assert!(err.is_invalid_params());
    assert_eq!(client.transport.call_count(), 0);
}

#[tokio::test]
async fn account_info_malformed_body() {
    let (logs, _guard) = capture_logs();
    let client = test_client(SpyTransport::replying("{\"accountId\": oops"));

    let err = client.account_info(1, &[100], "BTC").await.unwrap_err();
    assert_eq!(err.kind, AccountErrKind::ServiceBusy);

    let errors = logs.errors();
    assert_eq!(errors.len(), 1, "{errors:#?}");
    assert!(errors[0].contains("accountInfo"));
}

#[tokio::test]
async fn account_info_malformed_body_is_not_exposed() {
    let client = test_client(SpyTransport::replying("secret-internal-body"));
    let err = client.account_info(1, &[100], "").await.unwrap_err();

    assert!(!err.to_string().contains("secret-internal-body"));
}

#[tokio::test]
async fn account_info_not_found() {
    let client = test_client(SpyTransport::remote_failure(2003, "account not found"));
    let err = client.account_info(1, &[100], "").await.unwrap_err();

    assert_eq!(err.remote_kind(), Some(RemoteErrorKind::AccountNotFound));
}

#[tokio::test]
async fn transport_failure_forwarded_verbatim() {
    let failure = TransportError::SendFailed("connection refused".to_string());
    let client = test_client(SpyTransport::failing(failure.clone()));
    let err = client.account_info(1, &[100], "").await.unwrap_err();

    assert_eq!(err.kind, AccountErrKind::Transport(failure));
}

#[tokio::test]
async fn request_can_be_sent_directly() {
    let client = test_client(SpyTransport::replying("[]"));
    let request = AccountInfoRequest { org_id: 3, user_ids: vec![7], currency: "USD".into() };
    let accounts = client.request(request).await.unwrap();

    assert!(accounts.is_empty());
    assert_eq!(client.transport.last_call().method, AccountInfoRequest::METHOD);
}

#[tokio::test]
async fn update_status_success() {
    let client = test_client(SpyTransport::echoing_success());
    client.update_status(1, 11, AccountStatus::Frozen).await.unwrap();

    let call = client.transport.last_call();
    assert_eq!(call.method, "updateStatus");
    assert_eq!(call.param("accountId"), "11");
    assert_eq!(call.param("status"), "2");
}

#[tokio::test]
async fn update_status_non_positive_ids() {
    let client = test_client(SpyTransport::echoing_success());

    assert!(client
        .update_status(0, 11, AccountStatus::Normal)
        .await
        .unwrap_err()
        .is_invalid_params());
    assert!(client
        .update_status(1, 0, AccountStatus::Normal)
        .await
        .unwrap_err()
        .is_invalid_params());
    assert_eq!(client.transport.call_count(), 0);
}

#[test]
fn update_status_invalid_status_code() {
    let err = AccountStatus::try_from(0).unwrap_err();
    assert!(err.is_invalid_params());
}

#[tokio::test]
async fn update_status_failed_remotely() {
    let client = test_client(SpyTransport::remote_failure(2004, "update failed"));
    let err = client
        .update_status(1, 11, AccountStatus::Normal)
        .await
        .unwrap_err();

    assert_eq!(err.remote_kind(), Some(RemoteErrorKind::UpdateStatusFailed));
}
