//! Pattern 3: Strategy
//! Example: Swapping payment methods on one context
//!
//! Run with: cargo run --example p3_strategy

use patterns::demo;
use patterns::output::Console;

fn main() -> patterns::Result<()> {
    println!("=== Strategy ===");
    let out = Console::shared();
    demo::strategy(&out)
}
