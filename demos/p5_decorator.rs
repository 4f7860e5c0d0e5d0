//! Pattern 5: Decorator
//! Example: Stacking notification channels
//!
//! Run with: cargo run --example p5_decorator

use patterns::demo;
use patterns::output::Console;

fn main() {
    println!("=== Decorator ===");
    let out = Console::shared();
    demo::decorator(&out);
}
