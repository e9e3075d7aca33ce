use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::io::network::{Network, Transport};
use crate::model::account::{Account, AccountStatus, LogEntry, TaskCallback, TaskDetail};
use crate::model::amount::Amount;
use crate::model::api::{AmountOperation, LogFilter, Request};
use crate::model::config::Config;
use crate::model::errors::{AccResult, Unexpected};

#[derive(Clone)]
pub struct AccountClient<T: Transport = Network> {
    client: crate::AccountClient<T>,
    rt: Arc<Runtime>,
}

impl AccountClient<Network> {
    pub fn init(config: Config) -> AccResult<Self> {
        let rt = Arc::new(Runtime::new().map_unexpected()?);
        let client = crate::AccountClient::init(config)?;
        Ok(Self { client, rt })
    }
}

impl<T: Transport> AccountClient<T> {
    pub fn new(config: Config, transport: T) -> AccResult<Self> {
        let rt = Arc::new(Runtime::new().map_unexpected()?);
        Ok(Self { client: crate::AccountClient::new(config, transport), rt })
    }

    pub fn get_config(&self) -> Config {
        self.client.config.clone()
    }

    pub fn request<R: Request>(&self, request: R) -> AccResult<R::Response> {
        self.rt.block_on(self.client.request(request))
    }

    pub fn create_account(
        &self, org_id: i32, user_id: i64, currencies: &[&str],
    ) -> AccResult<Vec<Account>> {
        self.rt
            .block_on(self.client.create_account(org_id, user_id, currencies))
    }

    pub fn account_info(
        &self, org_id: i32, user_ids: &[i64], currency: &str,
    ) -> AccResult<Vec<Account>> {
        self.rt
            .block_on(self.client.account_info(org_id, user_ids, currency))
    }

    pub fn update_status(
        &self, org_id: i32, account_id: i64, status: AccountStatus,
    ) -> AccResult<()> {
        self.rt
            .block_on(self.client.update_status(org_id, account_id, status))
    }

    pub fn operate_amount(&self, org_id: i32, operation: AmountOperation) -> AccResult<()> {
        self.rt
            .block_on(self.client.operate_amount(org_id, operation))
    }

    pub fn account_log_list(
        &self, org_id: i32, user_id: i64, filter: LogFilter, page: i32, limit: i32,
    ) -> AccResult<Vec<LogEntry>> {
        self.rt
            .block_on(self.client.account_log_list(org_id, user_id, filter, page, limit))
    }

    pub fn sum_log(&self, org_id: i32, user_id: i64, filter: LogFilter) -> AccResult<Amount> {
        self.rt
            .block_on(self.client.sum_log(org_id, user_id, filter))
    }

    pub fn batch_operate_amount(
        &self, org_id: i32, is_async: bool, details: Vec<TaskDetail>,
        callback: Option<TaskCallback>,
    ) -> AccResult<()> {
        self.rt.block_on(
            self.client
                .batch_operate_amount(org_id, is_async, details, callback),
        )
    }
}
