// src/server.rs
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Config;
use crate::routes;
use crate::services::prices::{ElprisClient, PriceSource};

/// The web front-end, built once at startup and then run.
pub struct Server {
    addr: SocketAddr,
    source: Arc<dyn PriceSource>,
}

impl Server {
    pub fn new(config: &Config, source: Arc<dyn PriceSource>) -> Self {
        // Bind to all interfaces so the app is reachable inside containers
        let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
        Server { addr, source }
    }

    /// Server backed by the real pricing API at the configured base URL.
    pub fn from_config(config: &Config) -> Self {
        let client = ElprisClient::new(config.price_api_base_url.clone());
        Server::new(config, Arc::new(client))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub async fn run(self) {
        let api = routes::routes(self.source);
        info!("Starting server on {}", self.addr);
        warp::serve(api).run(self.addr).await;
    }
}
