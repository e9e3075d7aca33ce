use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::amount::Amount;
use super::errors::{AccountErr, AccountErrKind};

/// How a balance mutation moves funds. The integer values are part of the wire contract.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "i32", into = "i32")]
pub enum OperationType {
    AvailableAdd = 1,
    AvailableSubtract = 2,
    FreezeAdd = 3,
    FreezeSubtract = 4,
    /// Moves frozen funds back into the available amount.
    Unfreeze = 5,
}

impl TryFrom<i32> for OperationType {
    type Error = AccountErr;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::AvailableAdd),
            2 => Ok(Self::AvailableSubtract),
            3 => Ok(Self::FreezeAdd),
            4 => Ok(Self::FreezeSubtract),
            5 => Ok(Self::Unfreeze),
            _ => Err(AccountErrKind::InvalidParams.into()),
        }
    }
}

impl From<OperationType> for i32 {
    fn from(op: OperationType) -> Self {
        op as i32
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "i32", into = "i32")]
pub enum AccountStatus {
    Normal = 1,
    Frozen = 2,
}

impl TryFrom<i32> for AccountStatus {
    type Error = AccountErr;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Normal),
            2 => Ok(Self::Frozen),
            _ => Err(AccountErrKind::InvalidParams.into()),
        }
    }
}

impl From<AccountStatus> for i32 {
    fn from(status: AccountStatus) -> Self {
        status as i32
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: i64,
    pub org_id: i32,
    pub user_id: i64,
    pub currency: String,
    pub avail_amount: Amount,
    pub freeze_amount: Amount,
    pub status: AccountStatus,
    pub create_time: i64,
    pub update_time: i64,
}

impl Account {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.create_time, 0)
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.update_time, 0)
    }

    pub fn is_frozen(&self) -> bool {
        self.status == AccountStatus::Frozen
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub log_id: i64,
    pub user_id: i64,
    pub currency: String,
    pub log_type: OperationType,
    pub amount: Amount,
    pub create_time: i64,
}

impl LogEntry {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.create_time, 0)
    }
}

/// One balance mutation inside a batch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    pub op_type: OperationType,
    pub bs_type: i32,
    pub account_id: i64,
    pub user_id: i64,
    pub currency: String,
    #[serde(serialize_with = "bool_as_int", deserialize_with = "bool_from_int")]
    pub allow_negative: bool,
    pub amount: Amount,
    pub detail: String,
    pub ext: String,
}

/// Where the service reports completion of an asynchronous batch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskCallback {
    #[serde(rename = "callBackUrl")]
    pub url: String,
    pub data: HashMap<String, String>,
}

pub fn wire_flag(flag: bool) -> &'static str {
    if flag {
        "1"
    } else {
        "0"
    }
}

fn bool_as_int<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i32(*flag as i32)
}

fn bool_from_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(i32::deserialize(deserializer)? != 0)
}
