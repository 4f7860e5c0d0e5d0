// Pattern 4: Adapter
// Lets callers written against the old processor interface use the new gateway.

use crate::output::SharedOutput;

/// The interface existing callers were written against.
#[cfg_attr(test, mockall::automock)]
pub trait PaymentProcessor {
    fn pay(&self, amount: u64);
}

/// Same job as a [`PaymentProcessor`], different method name and argument.
pub struct NewPaymentGateway {
    out: SharedOutput,
}

impl NewPaymentGateway {
    pub fn new(out: SharedOutput) -> Self {
        Self { out }
    }

    pub fn make_payment(&self, value: u64) {
        self.out
            .emit(&format!("Processed {value} through the new payment gateway"));
    }
}

pub struct PaymentAdapter {
    gateway: NewPaymentGateway,
}

impl PaymentAdapter {
    pub fn new(gateway: NewPaymentGateway) -> Self {
        Self { gateway }
    }
}

impl PaymentProcessor for PaymentAdapter {
    fn pay(&self, amount: u64) {
        self.gateway.make_payment(amount);
    }
}

/// Client code that only knows the old interface.
pub fn process_payment(processor: &dyn PaymentProcessor, amount: u64) {
    tracing::debug!(amount, "processing payment");
    processor.pay(amount);
}
