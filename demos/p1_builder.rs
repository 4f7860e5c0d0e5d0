//! Pattern 1: Builder
//! Example: Assembling computers from director presets
//!
//! Run with: cargo run --example p1_builder

use patterns::demo;
use patterns::output::Console;

fn main() {
    println!("=== Builder ===");
    let out = Console::shared();
    demo::builder(&out);
}
