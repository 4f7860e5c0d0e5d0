//! Pattern 7: Visitor
//! Example: Printing names and summing sizes over a folder tree
//!
//! Run with: cargo run --example p7_visitor

use patterns::demo;
use patterns::output::Console;

fn main() {
    println!("=== Visitor ===");
    let out = Console::shared();
    demo::visitor(&out);
}
