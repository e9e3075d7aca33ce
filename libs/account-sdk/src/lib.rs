//! Typed client for the remote account service.
//!
//! Every operation validates its arguments, flattens them into a string keyed parameter map,
//! hands that map to a [Transport] and decodes the JSON answer into typed structures. The client
//! keeps no state of its own, so one [AccountClient] can be cloned and shared freely.
//!
//! - Most integrators will be interested in the functions attached to the [AccountClient] struct.
//!   See the [service] module for the operations themselves.
//! - The [model] module contains the wire data types and the contract of every request.
//! - The [blocking] module contains blocking variants of all [AccountClient] functions for
//!   consumers without async runtimes.
//! - The [io] module contains the transport seam and the bundled HTTP transport.

#[macro_use]
extern crate tracing;

pub mod blocking;
pub mod io;
pub mod model;
pub mod service;

#[derive(Clone, Debug)]
pub struct AccountClient<T: Transport = Network> {
    pub config: Config,
    pub transport: T,
}

impl AccountClient<Network> {
    /// Sets up logging per `config` and talks to the service over HTTP.
    pub fn init(config: Config) -> AccResult<Self> {
        logging::init(&config)?;
        info!(host = %config.account_host, "account client initialized");
        Ok(Self::new(config, Network::default()))
    }
}

impl<T: Transport> AccountClient<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }
}

pub use io::network::{Network, Transport};
pub use model::config::Config;
pub use model::errors::{AccResult, AccountErr, AccountErrKind};
use service::logging;
