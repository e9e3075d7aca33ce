use crate::io::network::Transport;
use crate::model::account::{Account, AccountStatus};
use crate::model::api::{AccountInfoRequest, CreateAccountRequest, UpdateStatusRequest};
use crate::model::errors::AccResult;
use crate::AccountClient;

impl<T: Transport> AccountClient<T> {
    /// Opens one account per currency for `user_id`.
    ///
    /// RemoteErrorKind::AccountExists,
    /// RemoteErrorKind::CreateFailed,
    #[instrument(level = "debug", skip(self))]
    pub async fn create_account(
        &self, org_id: i32, user_id: i64, currencies: &[&str],
    ) -> AccResult<Vec<Account>> {
        let currencies = currencies.iter().map(|c| c.to_string()).collect();
        self.request(CreateAccountRequest { org_id, user_id, currencies })
            .await
    }

    /// An empty `currency` returns accounts in every currency.
    ///
    /// RemoteErrorKind::AccountNotFound,
    #[instrument(level = "debug", skip(self))]
    pub async fn account_info(
        &self, org_id: i32, user_ids: &[i64], currency: &str,
    ) -> AccResult<Vec<Account>> {
        self.request(AccountInfoRequest {
            org_id,
            user_ids: user_ids.to_vec(),
            currency: currency.to_string(),
        })
        .await
    }

    /// RemoteErrorKind::AccountNotFound,
    /// RemoteErrorKind::UpdateStatusFailed,
    #[instrument(level = "debug", skip(self))]
    pub async fn update_status(
        &self, org_id: i32, account_id: i64, status: AccountStatus,
    ) -> AccResult<()> {
        self.request(UpdateStatusRequest { org_id, account_id, status })
            .await
    }
}
