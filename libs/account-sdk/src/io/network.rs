use std::future::Future;
use std::time::{Duration, Instant};

use reqwest::Client;
use serde::Deserialize;
use serde_json::value::RawValue;
use tokio::time::sleep;

use crate::model::errors::RemoteError;
use crate::model::params::Params;

const MAX_SEND_RETRIES: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The service answered with a non-zero code.
    Endpoint(RemoteError),
    SendFailed(String),
    ReceiveFailed(String),
    /// The response envelope itself was unreadable.
    Deserialize(String),
}

/// Moves a parameter map to a service method and brings back the raw response payload.
///
/// Connection handling, retries and host resolution all live behind this trait; callers of
/// [crate::AccountClient] never see them.
pub trait Transport: Send + Sync {
    fn call(
        &self, host: &str, service: &str, method: &str, params: &Params,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;
}

#[derive(Deserialize)]
struct Envelope<'a> {
    code: i32,
    #[serde(default)]
    msg: String,
    #[serde(borrow, default)]
    data: Option<&'a RawValue>,
}

/// HTTP transport: form-encoded POST to `{host}/{service}/{method}`, answered with a
/// `{"code", "msg", "data"}` envelope.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub client: Client,
}

impl Network {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for Network {
    #[instrument(level = "debug", skip(self, host, params), err(Debug))]
    async fn call(
        &self, host: &str, service: &str, method: &str, params: &Params,
    ) -> Result<Vec<u8>, TransportError> {
        let url = format!("{}/{service}/{method}", host.trim_end_matches('/'));

        let mut retries = 0;
        let start = Instant::now();
        let sent = loop {
            match self.client.post(&url).form(params.as_map()).send().await {
                Ok(o) => {
                    if start.elapsed() > Duration::from_millis(1000) {
                        warn!("network request took {:?}", start.elapsed());
                    }
                    break o;
                }
                Err(e) => {
                    if retries < MAX_SEND_RETRIES {
                        warn!(
                            "network request send failed; retrying after {}ms; error = {:?}",
                            retries * 100,
                            e.to_string()
                        );
                        sleep(Duration::from_millis(retries * 100)).await;
                        retries += 1;
                        continue;
                    } else {
                        return Err(TransportError::SendFailed(e.to_string()));
                    }
                }
            }
        };

        let status = sent.status();
        let serialized_response = sent
            .bytes()
            .await
            .map_err(|err| TransportError::ReceiveFailed(err.to_string()))?;

        open_envelope(&serialized_response)
            .map_err(|err| TransportError::Deserialize(format!("http {status}: {err}")))?
    }
}

fn open_envelope(body: &[u8]) -> serde_json::Result<Result<Vec<u8>, TransportError>> {
    let envelope: Envelope = serde_json::from_slice(body)?;
    if envelope.code != 0 {
        return Ok(Err(TransportError::Endpoint(RemoteError {
            code: envelope.code,
            msg: envelope.msg,
        })));
    }
    Ok(Ok(envelope
        .data
        .map(|data| data.get().as_bytes().to_vec())
        .unwrap_or_default()))
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn success_yields_data_verbatim() {
        let body = br#"{"code":0,"msg":"ok","data":[{"amount":"1.10"}]}"#;
        let data = open_envelope(body).unwrap().unwrap();
        assert_eq!(data, br#"[{"amount":"1.10"}]"#.to_vec());
    }

    #[test]
    fn null_data_is_empty() {
        assert!(open_envelope(br#"{"code":0,"data":null}"#).unwrap().unwrap().is_empty());
        assert!(open_envelope(br#"{"code":0}"#).unwrap().unwrap().is_empty());
    }

    #[test]
    fn non_zero_code_is_endpoint_error() {
        let err = open_envelope(br#"{"code":2003,"msg":"account not found"}"#)
            .unwrap()
            .unwrap_err();
        assert_eq!(
            err,
            TransportError::Endpoint(RemoteError { code: 2003, msg: "account not found".into() })
        );
    }

    #[test]
    fn garbage_envelope() {
        assert!(open_envelope(b"<html>502</html>").is_err());
    }
}
