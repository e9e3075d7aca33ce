use account_sdk::blocking::AccountClient;
use account_sdk::model::account::{AccountStatus, OperationType};
use account_sdk::model::api::{AmountOperation, LogFilter};
use test_utils::*;

#[test]
fn blocking_operate_amount() {
    let client = AccountClient::new(test_config(), SpyTransport::echoing_success()).unwrap();
    let op = AmountOperation::new(11, OperationType::FreezeSubtract, 4, "3");
    client.operate_amount(1, op).unwrap();
    client.update_status(1, 11, AccountStatus::Normal).unwrap();
}

#[test]
fn blocking_validation_short_circuits() {
    let client = AccountClient::new(test_config(), SpyTransport::echoing_success()).unwrap();
    assert!(client.create_account(0, 1, &["BTC"]).unwrap_err().is_invalid_params());
    assert!(client
        .account_log_list(1, 1, LogFilter::default(), 1, 1001)
        .unwrap_err()
        .is_invalid_params());
}

#[test]
fn blocking_sum_log() {
    let client = AccountClient::new(test_config(), SpyTransport::replying("\"42\"")).unwrap();
    assert_eq!(client.sum_log(1, 1, LogFilter::default()).unwrap().as_str(), "42");
    assert_eq!(client.get_config().account_host, TEST_HOST);
}
