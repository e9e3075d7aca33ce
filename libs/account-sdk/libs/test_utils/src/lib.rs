use std::future::{ready, Future};
use std::io;
use std::sync::{Arc, Mutex};

use account_sdk::io::network::{Transport, TransportError};
use account_sdk::model::errors::RemoteError;
use account_sdk::model::params::Params;
use account_sdk::{AccountClient, Config};
use serde_json::Value;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

pub static TEST_HOST: &str = "http://account.test";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub host: String,
    pub service: String,
    pub method: String,
    pub params: Params,
}

impl RecordedCall {
    pub fn param(&self, key: &str) -> &str {
        self.params
            .get(key)
            .unwrap_or_else(|| panic!("{} sent without {key}: {:?}", self.method, self.params))
    }

    pub fn param_json(&self, key: &str) -> Value {
        serde_json::from_str(self.param(key)).unwrap()
    }
}

/// Records every call and answers each one with the same canned reply.
#[derive(Debug)]
pub struct SpyTransport {
    calls: Mutex<Vec<RecordedCall>>,
    reply: Result<Vec<u8>, TransportError>,
}

impl SpyTransport {
    pub fn replying(body: impl Into<Vec<u8>>) -> Self {
        Self { calls: Mutex::default(), reply: Ok(body.into()) }
    }

    /// Success with no payload, what the service sends for mutations.
    pub fn echoing_success() -> Self {
        Self::replying(Vec::new())
    }

    pub fn failing(err: TransportError) -> Self {
        Self { calls: Mutex::default(), reply: Err(err) }
    }

    pub fn remote_failure(code: i32, msg: &str) -> Self {
        Self::failing(TransportError::Endpoint(RemoteError { code, msg: msg.to_string() }))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("transport was never called")
    }
}

impl Transport for SpyTransport {
    fn call(
        &self, host: &str, service: &str, method: &str, params: &Params,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send {
        self.calls.lock().unwrap().push(RecordedCall {
            host: host.to_string(),
            service: service.to_string(),
            method: method.to_string(),
            params: params.clone(),
        });
        ready(self.reply.clone())
    }
}

pub fn test_config() -> Config {
    Config::quiet(TEST_HOST)
}

pub fn test_client(transport: SpyTransport) -> AccountClient<SpyTransport> {
    AccountClient::new(test_config(), transport)
}

/// Collects formatted log output so tests can assert on what was logged.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.contains("ERROR"))
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Routes this thread's events into a [LogCapture] until the guard drops.
pub fn capture_logs() -> (LogCapture, DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}
