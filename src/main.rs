use dotenv::dotenv;
use env_logger;
use log::{error, info};
use std::process;

use elpris_web::config::Config;
use elpris_web::server::Server;

#[tokio::main]
async fn main() {
    dotenv().ok();
    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let server = Server::from_config(&config);
    info!("Will bind to: {}", server.addr());
    server.run().await;
}
