use std::net::SocketAddr;

use metro_server::network;
use metro_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

/// Network description file used when none is given.
const DEFAULT_NETWORK_FILE: &str = "data/network.txt";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Network file: CLI argument, then environment, then the bundled sample.
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("METRO_NETWORK_FILE").ok())
        .unwrap_or_else(|| DEFAULT_NETWORK_FILE.to_string());

    // A load failure is fatal: no partial network is served.
    let network = match network::load(&path) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("Failed to load network from {path}: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "Loaded {} stations, {} segments from {path}",
        network.station_count(),
        network.segment_count()
    );

    // Build app state
    let state = AppState::new(network);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Metro route query server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health  - Health check");
    println!("  GET /route   - Route lookup (?from=<station>&to=<station>)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
