use crate::io::network::Transport;
use crate::model::account::LogEntry;
use crate::model::amount::Amount;
use crate::model::api::{AccountLogListRequest, LogFilter, SumLogRequest};
use crate::model::errors::AccResult;
use crate::AccountClient;

impl<T: Transport> AccountClient<T> {
    /// One page of a user's account log. `limit` is capped at
    /// [crate::model::api::MAX_LOG_PAGE_SIZE]; walking pages is up to the caller.
    ///
    /// RemoteErrorKind::AccountNotFound,
    #[instrument(level = "debug", skip(self))]
    pub async fn account_log_list(
        &self, org_id: i32, user_id: i64, filter: LogFilter, page: i32, limit: i32,
    ) -> AccResult<Vec<LogEntry>> {
        self.request(AccountLogListRequest { org_id, user_id, filter, page, limit })
            .await
    }

    /// Total of the matching log amounts. Callers that want the service's "0" fallback on
    /// failure can use `unwrap_or_default()`.
    #[instrument(level = "debug", skip(self))]
    pub async fn sum_log(&self, org_id: i32, user_id: i64, filter: LogFilter) -> AccResult<Amount> {
        self.request(SumLogRequest { org_id, user_id, filter }).await
    }
}
