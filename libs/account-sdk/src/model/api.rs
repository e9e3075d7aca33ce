use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::account::{wire_flag, AccountStatus, OperationType, TaskCallback, TaskDetail};
use super::account::{Account, LogEntry};
use super::amount::Amount;
use super::errors::{AccResult, AccountErrKind};
use super::params::Params;

/// Service name every account request is routed to.
pub const SERVICE: &str = "account";

/// Largest page [AccountLogListRequest] may ask for.
pub const MAX_LOG_PAGE_SIZE: i32 = 1000;

pub trait Request: Debug {
    type Response: Decode + Debug;
    const METHOD: &'static str;

    /// Checked before anything is sent.
    fn validate(&self) -> AccResult<()>;

    fn params(&self) -> AccResult<Params>;
}

/// How a response body becomes a typed result.
pub trait Decode: Sized {
    fn decode(body: &[u8]) -> serde_json::Result<Self>;
}

impl<T: DeserializeOwned> Decode for Vec<T> {
    fn decode(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

impl Decode for Amount {
    fn decode(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

/// Mutations carry no payload worth reading.
impl Decode for () {
    fn decode(_body: &[u8]) -> serde_json::Result<Self> {
        Ok(())
    }
}

fn require(condition: bool) -> AccResult<()> {
    if condition {
        Ok(())
    } else {
        Err(AccountErrKind::InvalidParams.into())
    }
}

fn op_type_filter(op_type: Option<OperationType>) -> i32 {
    op_type.map(i32::from).unwrap_or(0)
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct CreateAccountRequest {
    pub org_id: i32,
    pub user_id: i64,
    pub currencies: Vec<String>,
}

impl Request for CreateAccountRequest {
    type Response = Vec<Account>;
    const METHOD: &'static str = "createAccount";

    fn validate(&self) -> AccResult<()> {
        require(self.org_id > 0 && self.user_id > 0 && !self.currencies.is_empty())
    }

    fn params(&self) -> AccResult<Params> {
        Ok(Params::new()
            .with("orgId", self.org_id)
            .with("userId", self.user_id)
            .with("currency", self.currencies.join(",")))
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct AccountInfoRequest {
    pub org_id: i32,
    pub user_ids: Vec<i64>,
    /// Empty means every currency.
    pub currency: String,
}

impl Request for AccountInfoRequest {
    type Response = Vec<Account>;
    const METHOD: &'static str = "accountInfo";

    fn validate(&self) -> AccResult<()> {
        require(self.org_id > 0 && !self.user_ids.is_empty())
    }

    fn params(&self) -> AccResult<Params> {
        Params::new()
            .with("orgId", self.org_id)
            .with_json("userIds", &self.user_ids)
            .map(|params| params.with("currency", &self.currency))
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct UpdateStatusRequest {
    pub org_id: i32,
    pub account_id: i64,
    pub status: AccountStatus,
}

impl Request for UpdateStatusRequest {
    type Response = ();
    const METHOD: &'static str = "updateStatus";

    fn validate(&self) -> AccResult<()> {
        require(self.org_id > 0 && self.account_id > 0)
    }

    fn params(&self) -> AccResult<Params> {
        Ok(Params::new()
            .with("orgId", self.org_id)
            .with("accountId", self.account_id)
            .with("status", i32::from(self.status)))
    }
}

/// A single balance mutation on one account.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct AmountOperation {
    pub account_id: i64,
    pub op_type: OperationType,
    pub bs_type: i32,
    pub allow_negative: bool,
    pub amount: Amount,
    pub detail: String,
    pub ext: String,
    pub callback: String,
}

impl AmountOperation {
    pub fn new(
        account_id: i64, op_type: OperationType, bs_type: i32, amount: impl Into<Amount>,
    ) -> Self {
        Self {
            account_id,
            op_type,
            bs_type,
            allow_negative: false,
            amount: amount.into(),
            detail: String::new(),
            ext: String::new(),
            callback: String::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct OperateAmountRequest {
    pub org_id: i32,
    pub operation: AmountOperation,
}

impl Request for OperateAmountRequest {
    type Response = ();
    const METHOD: &'static str = "operateAmount";

    fn validate(&self) -> AccResult<()> {
        let op = &self.operation;
        require(self.org_id > 0 && op.account_id > 0 && op.bs_type > 0 && !op.amount.is_empty())
    }

    fn params(&self) -> AccResult<Params> {
        let op = &self.operation;
        Ok(Params::new()
            .with("orgId", self.org_id)
            .with("accountId", op.account_id)
            .with("opType", i32::from(op.op_type))
            .with("bsType", op.bs_type)
            .with("allowNegative", wire_flag(op.allow_negative))
            .with("amount", &op.amount)
            .with("detail", &op.detail)
            .with("ext", &op.ext)
            .with("callback", &op.callback))
    }
}

/// Narrows log queries. `op_type: None` matches every operation type.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
pub struct LogFilter {
    pub op_type: Option<OperationType>,
    pub bs_type: i32,
    pub currency: String,
    pub begin_time: i64,
    pub end_time: i64,
}

impl LogFilter {
    fn params(&self, org_id: i32, user_id: i64) -> Params {
        Params::new()
            .with("orgId", org_id)
            .with("userId", user_id)
            .with("opType", op_type_filter(self.op_type))
            .with("bsType", self.bs_type)
            .with("currency", &self.currency)
            .with("beginTime", self.begin_time)
            .with("endTime", self.end_time)
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct AccountLogListRequest {
    pub org_id: i32,
    pub user_id: i64,
    pub filter: LogFilter,
    pub page: i32,
    pub limit: i32,
}

impl Request for AccountLogListRequest {
    type Response = Vec<LogEntry>;
    const METHOD: &'static str = "accountLogList";

    fn validate(&self) -> AccResult<()> {
        require(
            self.org_id > 0
                && self.user_id > 0
                && self.page >= 1
                && (1..=MAX_LOG_PAGE_SIZE).contains(&self.limit),
        )
    }

    fn params(&self) -> AccResult<Params> {
        Ok(self
            .filter
            .params(self.org_id, self.user_id)
            .with("page", self.page)
            .with("limit", self.limit))
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct SumLogRequest {
    pub org_id: i32,
    pub user_id: i64,
    pub filter: LogFilter,
}

impl Request for SumLogRequest {
    type Response = Amount;
    const METHOD: &'static str = "sumLog";

    fn validate(&self) -> AccResult<()> {
        require(self.org_id > 0 && self.user_id > 0)
    }

    fn params(&self) -> AccResult<Params> {
        Ok(self.filter.params(self.org_id, self.user_id))
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct BatchOperateAmountRequest {
    pub org_id: i32,
    pub is_async: bool,
    pub details: Vec<TaskDetail>,
    pub callback: Option<TaskCallback>,
}

impl Request for BatchOperateAmountRequest {
    type Response = ();
    const METHOD: &'static str = "batchOperateAmount";

    fn validate(&self) -> AccResult<()> {
        require(self.org_id > 0 && !self.details.is_empty())
    }

    fn params(&self) -> AccResult<Params> {
        Params::new()
            .with("orgId", self.org_id)
            .with("isAsync", wire_flag(self.is_async))
            .with_json("detail", &self.details)?
            .with_json("callback", &self.callback)
    }
}
