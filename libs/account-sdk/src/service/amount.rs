use crate::io::network::Transport;
use crate::model::account::{TaskCallback, TaskDetail};
use crate::model::api::{AmountOperation, BatchOperateAmountRequest, OperateAmountRequest};
use crate::model::errors::AccResult;
use crate::AccountClient;

impl<T: Transport> AccountClient<T> {
    /// RemoteErrorKind::AccountNotFound,
    /// RemoteErrorKind::LedgerWriteFailed,
    /// RemoteErrorKind::AvailableAddFailed,
    /// RemoteErrorKind::InsufficientAvailable,
    /// RemoteErrorKind::UnfreezeFailed,
    /// RemoteErrorKind::AvailableSubtractFailed,
    /// RemoteErrorKind::FreezeSubtractFailed,
    /// RemoteErrorKind::LogCreateFailed,
    #[instrument(level = "debug", skip(self))]
    pub async fn operate_amount(&self, org_id: i32, operation: AmountOperation) -> AccResult<()> {
        self.request(OperateAmountRequest { org_id, operation })
            .await
    }

    /// Submits every detail as one request. With `is_async` the service answers immediately and
    /// reports completion to `callback`; a failing item fails the whole batch.
    #[instrument(level = "debug", skip(self, details, callback), fields(items = details.len()))]
    pub async fn batch_operate_amount(
        &self, org_id: i32, is_async: bool, details: Vec<TaskDetail>,
        callback: Option<TaskCallback>,
    ) -> AccResult<()> {
        self.request(BatchOperateAmountRequest { org_id, is_async, details, callback })
            .await
    }
}
