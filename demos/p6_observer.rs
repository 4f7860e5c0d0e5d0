//! Pattern 6: Observer
//! Example: A stock price with a display and an alert attached
//!
//! Run with: cargo run --example p6_observer

use patterns::config::Config;
use patterns::demo;
use patterns::output::Console;

fn main() {
    println!("=== Observer ===");
    let out = Console::shared();
    demo::observer(&Config::default(), &out);
}
