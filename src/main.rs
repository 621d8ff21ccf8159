use chrono::Utc;
use std::sync::Arc;
use tracing::error;
use tracing::Level;

mod config;
mod market;
mod menu;
mod quote;
mod render;
mod useragent;

use crate::config::Config;
use crate::quote::client::QuoteClient;
use crate::quote::fetch::fetch_all;

#[tokio::main]
async fn main() {
    // stdout belongs to the status-bar markup, so logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let plugin = run(&config).await;
    print!("{}", plugin);
}

async fn run(config: &Config) -> menu::Plugin {
    if !market::is_open_at(Utc::now(), config.timezone, &config.time_start, &config.time_end) {
        return render::closed_menu();
    }

    let client = match QuoteClient::new(config) {
        Ok(client) => client,
        Err(err) => {
            error!("failed to build HTTP client: {}", err);
            return render::error_menu(&format!("{}", err));
        }
    };

    let outcomes = fetch_all(Arc::new(client), &config.assets).await;
    render::build_menu(&outcomes)
}
