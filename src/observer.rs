// Pattern 6: Observer
// A stock price pushed synchronously to every registered listener.

use std::cell::Cell;
use std::ptr;
use std::rc::Rc;

use crate::config::ObserverConfig;
use crate::output::SharedOutput;

#[cfg_attr(test, mockall::automock)]
pub trait Observer {
    fn update(&self, price: f64);
}

/// The subject. Listeners are kept in registration order and the same
/// listener may appear more than once.
#[derive(Default)]
pub struct Stock {
    observers: Vec<Rc<dyn Observer>>,
    price: f64,
}

impl Stock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Removes every registration of this exact observer instance.
    pub fn unregister<O: Observer + ?Sized>(&mut self, observer: &Rc<O>) {
        let target = Rc::as_ptr(observer);
        self.observers
            .retain(|registered| !ptr::addr_eq(Rc::as_ptr(registered), target));
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
        self.notify();
    }

    pub fn notify(&self) {
        tracing::debug!(price = self.price, observers = self.observers.len(), "notifying");
        for observer in &self.observers {
            observer.update(self.price);
        }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

pub struct PriceDisplay {
    last_price: Cell<f64>,
    out: SharedOutput,
}

impl PriceDisplay {
    pub fn new(out: SharedOutput) -> Self {
        Self {
            last_price: Cell::new(0.0),
            out,
        }
    }

    pub fn last_price(&self) -> f64 {
        self.last_price.get()
    }
}

impl Observer for PriceDisplay {
    fn update(&self, price: f64) {
        self.last_price.set(price);
        self.out.emit(&format!("📺 Display: current price = {price}"));
    }
}

/// Stays quiet unless the price goes strictly above its threshold.
pub struct PriceAlert {
    threshold: f64,
    last_price: Cell<f64>,
    out: SharedOutput,
}

impl PriceAlert {
    pub fn new(out: SharedOutput) -> Self {
        Self::with_config(&ObserverConfig::default(), out)
    }

    pub fn with_config(config: &ObserverConfig, out: SharedOutput) -> Self {
        Self {
            threshold: config.alert_threshold,
            last_price: Cell::new(0.0),
            out,
        }
    }

    pub fn last_price(&self) -> f64 {
        self.last_price.get()
    }
}

impl Observer for PriceAlert {
    fn update(&self, price: f64) {
        self.last_price.set(price);
        if price > self.threshold {
            self.out
                .emit(&format!("🚨 Alert: price {price} is above {}!", self.threshold));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Transcript;
    use mockall::predicate::eq;

    #[test]
    fn test_duplicate_registration_notifies_twice() {
        let mut observer = MockObserver::new();
        observer.expect_update().with(eq(150.0)).times(2).return_const(());
        let observer: Rc<dyn Observer> = Rc::new(observer);

        let mut stock = Stock::new();
        stock.register(observer.clone());
        stock.register(observer);
        stock.set_price(150.0);
    }

    #[test]
    fn test_notify_in_registration_order() {
        let transcript = Transcript::new();
        let alert = Rc::new(PriceAlert::new(transcript.shared()));
        let display = Rc::new(PriceDisplay::new(transcript.shared()));

        let mut stock = Stock::new();
        stock.register(alert.clone());
        stock.register(display.clone());
        stock.set_price(120.0);

        assert_eq!(
            transcript.lines(),
            vec![
                "🚨 Alert: price 120 is above 100!",
                "📺 Display: current price = 120",
            ]
        );
        assert_eq!(alert.last_price(), 120.0);
        assert_eq!(display.last_price(), 120.0);
        assert_eq!(stock.price(), 120.0);
    }

    #[test]
    fn test_alert_threshold_is_exclusive() {
        let transcript = Transcript::new();
        let alert = Rc::new(PriceAlert::new(transcript.shared()));

        let mut stock = Stock::new();
        stock.register(alert.clone());
        stock.set_price(100.0);

        assert!(transcript.is_empty());
        assert_eq!(alert.last_price(), 100.0);
    }

    #[test]
    fn test_unregister_removes_every_copy() {
        let transcript = Transcript::new();
        let display = Rc::new(PriceDisplay::new(transcript.shared()));
        let other = Rc::new(PriceDisplay::new(transcript.shared()));

        let mut stock = Stock::new();
        stock.register(display.clone());
        stock.register(other.clone());
        stock.register(display.clone());
        stock.unregister(&display);

        assert_eq!(stock.observer_count(), 1);
        stock.set_price(42.0);
        assert_eq!(display.last_price(), 0.0);
        assert_eq!(other.last_price(), 42.0);
    }

    #[test]
    fn test_custom_threshold() {
        let transcript = Transcript::new();
        let config = ObserverConfig {
            alert_threshold: 10.0,
        };
        let mut stock = Stock::new();
        stock.register(Rc::new(PriceAlert::with_config(&config, transcript.shared())));

        stock.set_price(11.0);
        assert_eq!(transcript.lines(), vec!["🚨 Alert: price 11 is above 10!"]);
    }
}
