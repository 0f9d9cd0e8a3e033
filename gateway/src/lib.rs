pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod payload;
pub mod proxy;
pub mod routes;
pub mod translate;

pub use config::Config;
pub use error::GatewayError;
pub use payload::{EndpointKind, InboundPayload, MultipartFile};
pub use proxy::{Dispatcher, ProxyResult};
pub use routes::{ForwardMode, Route, RouteTable};

use std::time::Duration;

/// Shared application state. Built once at startup and read-only after:
/// handlers get it injected, never through globals.
pub struct AppState {
    pub config: Config,
    pub routes: RouteTable,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let routes = RouteTable::new(&config);
        let dispatcher = Dispatcher::new(config.request_timeout_secs.map(Duration::from_secs))?;
        Ok(Self {
            config,
            routes,
            dispatcher,
        })
    }
}
