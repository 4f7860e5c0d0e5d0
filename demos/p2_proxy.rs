//! Pattern 2: Proxy
//! Example: Caching and rate limiting in front of a slow service
//!
//! Run with: cargo run --example p2_proxy
//!
//! Set RUST_LOG=debug to see cache hits and misses as they happen.

use patterns::config::Config;
use patterns::demo;
use patterns::output::Console;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> patterns::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Proxy ===");
    let out = Console::shared();
    demo::proxy(&Config::default(), &out).await
}
