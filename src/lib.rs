//! # Design Patterns
//!
//! Classic object-oriented design patterns expressed with Rust traits,
//! enums and ownership instead of class hierarchies.
//!
//! ## Patterns Covered
//!
//! 1. **Builder** - chained setters on a trait, a director replaying presets
//! 2. **Proxy** - async data fetch behind a caching, rate-limiting stand-in
//! 3. **Strategy** - payment algorithms swapped at runtime behind a trait object
//! 4. **Adapter** - a renaming layer over an incompatible payment gateway
//! 5. **Decorator** - notifier layers that delegate inward, then add a channel
//! 6. **Observer** - a stock price broadcast to registered listeners
//! 7. **Visitor** - operations over a file/folder tree without touching the nodes
//!
//! Side effects that would normally go to stdout are written to an injected
//! [`output::Output`] so every pattern can be asserted on in tests.
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --example p1_builder
//! cargo run --example p2_proxy
//! cargo run --example p3_strategy
//! cargo run --example p4_adapter
//! cargo run --example p5_decorator
//! cargo run --example p6_observer
//! cargo run --example p7_visitor
//!
//! # Everything at once, or a subset
//! cargo run --bin patterns-demo -- all
//! cargo run --bin patterns-demo -- --config patterns.toml proxy strategy
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - the crate [`Error`] type
//! - `tokio` / `async-trait` - the async data service behind the proxy
//! - `serde` / `toml` - [`config::Config`] loading
//! - `tracing` - internal event logging

pub mod adapter;
pub mod builder;
pub mod config;
pub mod decorator;
pub mod demo;
pub mod error;
pub mod observer;
pub mod output;
pub mod proxy;
pub mod strategy;
pub mod visitor;

pub use error::{Error, Result};
