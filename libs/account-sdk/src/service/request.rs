use crate::io::network::Transport;
use crate::model::api::{Decode, Request, SERVICE};
use crate::model::errors::{AccResult, AccountErrKind};
use crate::AccountClient;

impl<T: Transport> AccountClient<T> {
    /// Validates, encodes and sends any account request, then decodes the answer.
    ///
    /// Errors:
    /// - [AccountErrKind::InvalidParams] before anything is sent
    /// - [AccountErrKind::Transport] exactly as the transport reported it
    /// - [AccountErrKind::ServiceBusy] when the body does not decode; the body is logged
    #[instrument(level = "debug", skip(self, request), fields(method = R::METHOD))]
    pub async fn request<R: Request>(&self, request: R) -> AccResult<R::Response> {
        request.validate()?;
        let params = request.params()?;

        let data = self
            .transport
            .call(&self.config.account_host, SERVICE, R::METHOD, &params)
            .await?;

        R::Response::decode(&data).map_err(|err| {
            error!(
                method = R::METHOD,
                params = ?params,
                body = %String::from_utf8_lossy(&data),
                "unmarshal {} response failed: {err}",
                R::METHOD
            );
            AccountErrKind::ServiceBusy.into()
        })
    }
}
