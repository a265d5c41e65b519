//! Server command implementation

use std::sync::Arc;

use anyhow::Result;
use spendwise_core::Config;

use super::open_engine;

pub async fn cmd_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    println!("🚀 Starting Spendwise engine...");
    println!("   Model: {}", config.model.path.display());
    println!("   Listening: http://{}", config.bind_address());
    if config.server.allowed_origins.is_empty() {
        println!("   CORS: same-origin only");
    } else {
        println!("   CORS: {}", config.server.allowed_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    // Training the seed corpus is CPU-bound; keep it off the async workers
    let engine = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || open_engine(&config)).await??
    };

    spendwise_server::serve(Arc::new(engine), config.server).await
}
