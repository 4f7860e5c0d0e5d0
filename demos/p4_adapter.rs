//! Pattern 4: Adapter
//! Example: Old payment interface over a new gateway
//!
//! Run with: cargo run --example p4_adapter

use patterns::demo;
use patterns::output::Console;

fn main() {
    println!("=== Adapter ===");
    let out = Console::shared();
    demo::adapter(&out);
}
