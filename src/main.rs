use tracing::error;

use portfolio_page::build;
use portfolio_page::config::{Config, CONFIG_FILE};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match Config::get_config() {
        Ok(c) => c,
        Err(e) => {
            error!("Error reading {}: {}", CONFIG_FILE, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = build(&config) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
