//! Walkthroughs of each pattern, shared by the `patterns-demo` binary and
//! the per-pattern examples.

use std::fmt;
use std::rc::Rc;

use crate::adapter::{process_payment, NewPaymentGateway, PaymentAdapter};
use crate::builder::{build_computer, ComputerDirector, GamingComputerBuilder, Preset};
use crate::config::Config;
use crate::decorator::{stack, BaseNotifier, Channel, EmailNotifier, Notifier, SmsNotifier};
use crate::error::Result;
use crate::observer::{PriceAlert, PriceDisplay, Stock};
use crate::output::SharedOutput;
use crate::proxy::{DataServiceProxy, RealDataService};
use crate::strategy::{
    BankTransferStrategy, CreditCardStrategy, CryptoStrategy, PayPalStrategy, PaymentContext,
};
use crate::visitor::{Element, NamePrinter, SizeCalculator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Builder,
    Proxy,
    Strategy,
    Adapter,
    Decorator,
    Observer,
    Visitor,
}

impl Pattern {
    pub const ALL: [Pattern; 7] = [
        Pattern::Builder,
        Pattern::Proxy,
        Pattern::Strategy,
        Pattern::Adapter,
        Pattern::Decorator,
        Pattern::Observer,
        Pattern::Visitor,
    ];
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pattern::Builder => "Builder",
            Pattern::Proxy => "Proxy",
            Pattern::Strategy => "Strategy",
            Pattern::Adapter => "Adapter",
            Pattern::Decorator => "Decorator",
            Pattern::Observer => "Observer",
            Pattern::Visitor => "Visitor",
        };
        f.write_str(name)
    }
}

pub async fn run(pattern: Pattern, config: &Config, out: &SharedOutput) -> Result<()> {
    tracing::info!(%pattern, "running demo");
    match pattern {
        Pattern::Builder => builder(out),
        Pattern::Proxy => proxy(config, out).await?,
        Pattern::Strategy => strategy(out)?,
        Pattern::Adapter => adapter(out),
        Pattern::Decorator => decorator(out),
        Pattern::Observer => observer(config, out),
        Pattern::Visitor => visitor(out),
    }
    Ok(())
}

pub fn builder(out: &SharedOutput) {
    let director = ComputerDirector::new(out.clone());
    let mut builder = GamingComputerBuilder::new(out.clone());

    for preset in Preset::ALL {
        let computer = build_computer(&director, &mut builder, preset);
        out.emit(&computer.specs());
    }
}

/// A few lookups against a slow service, then a burst that trips the
/// rate limit. The burst uses a zero-latency service so it fits inside
/// one window.
pub async fn proxy(config: &Config, out: &SharedOutput) -> Result<()> {
    let proxy = DataServiceProxy::with_config(
        RealDataService::from_config(&config.proxy),
        config.proxy.clone(),
    );

    for id in ["user-1", "user-1", "user-2"] {
        let data = proxy.fetch_data(id).await?;
        out.emit(&format!("{id} -> {data}"));
    }

    let info = proxy.cache_info();
    out.emit(&format!("Cache holds {} entries", info.size));
    for entry in &info.entries {
        out.emit(&format!("  {} cached {}s ago", entry.id, entry.age_secs));
    }

    let mut burst_config = config.proxy.clone();
    burst_config.fetch_latency_ms = 0;
    let burst = DataServiceProxy::with_config(
        RealDataService::from_config(&burst_config),
        burst_config,
    );
    for n in 0..=burst.config().max_requests + 1 {
        if let Err(err) = burst.fetch_data(&format!("burst-{n}")).await {
            out.emit(&format!("Request {} refused: {err}", n + 1));
            break;
        }
    }

    let log = proxy.access_log();
    out.emit(&format!(
        "Access log: {} entries, {} served from cache",
        log.len(),
        log.iter().filter(|entry| entry.cached).count()
    ));
    Ok(())
}

pub fn strategy(out: &SharedOutput) -> Result<()> {
    let mut context = PaymentContext::new();
    if let Err(err) = context.execute_payment(10_000) {
        out.emit(&format!("Before choosing: {err}"));
    }

    context.set_strategy(CreditCardStrategy::new("1234567890123456", "Hong Gildong"));
    out.emit(&context.execute_payment(50_000)?);

    context.set_strategy(PayPalStrategy::new("user@example.com"));
    out.emit(&context.execute_payment(30_000)?);

    context.set_strategy(BankTransferStrategy::new("KB Bank", "110-234-567890"));
    out.emit(&context.execute_payment(100_000)?);

    context.set_strategy(CryptoStrategy::new("0xABCDEF1234567890"));
    out.emit(&context.execute_payment(75_000)?);

    if let Some(current) = context.current_strategy() {
        out.emit(&format!("Current method: {} {}", current.icon(), current.name()));
    }
    Ok(())
}

pub fn adapter(out: &SharedOutput) {
    let adapter = PaymentAdapter::new(NewPaymentGateway::new(out.clone()));
    process_payment(&adapter, 15_000);
}

pub fn decorator(out: &SharedOutput) {
    let notifier = SmsNotifier::new(
        EmailNotifier::new(BaseNotifier::new(out.clone()), out.clone()),
        out.clone(),
    );
    notifier.send("Server restarted");

    stack(&[Channel::Slack, Channel::Email], out).send("Deploy finished");
}

pub fn observer(config: &Config, out: &SharedOutput) {
    let display = Rc::new(PriceDisplay::new(out.clone()));
    let alert = Rc::new(PriceAlert::with_config(&config.observer, out.clone()));

    let mut stock = Stock::new();
    stock.register(display.clone());
    stock.register(alert.clone());

    for price in [95.0, 105.0] {
        stock.set_price(price);
    }

    stock.unregister(&alert);
    stock.set_price(150.0);
    out.emit(&format!(
        "Display saw {}, alert last saw {}",
        display.last_price(),
        alert.last_price()
    ));
}

pub fn visitor(out: &SharedOutput) {
    let tree = Element::folder(
        "project",
        vec![
            Element::file("README.md", 10),
            Element::file("main.rs", 20),
            Element::folder("assets", vec![Element::file("logo.png", 5)]),
        ],
    );

    tree.accept(&mut NamePrinter::new(out.clone()));

    let mut sizes = SizeCalculator::new();
    tree.accept(&mut sizes);
    out.emit(&format!("Total size: {}", sizes.total_size()));
}
