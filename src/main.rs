mod app;
mod card;
mod config;
mod debounce;
mod model;
mod page;
mod render;
mod search;
mod source;
mod utils;

use app::FileSink;
use config::{config_path, load_config};
use source::SupabaseSource;
use tokio::io::BufReader;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let path = config_path();
    let config = match load_config(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error ({}): {}", path, e);
            return;
        }
    };

    let source = match SupabaseSource::from_config(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize product source: {}", e);
            return;
        }
    };

    let mut sink = FileSink::new(config.output_path.clone());
    let input = BufReader::new(tokio::io::stdin());

    info!("⌨️  Type a search query and press Enter (Ctrl-D to quit)");
    app::run(input, &source, &mut sink, config.debounce_delay()).await;
    info!("👋 Deals hub stopped.");
}
