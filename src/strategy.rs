// Pattern 3: Strategy
// Interchangeable payment methods chosen at runtime behind one trait.

use std::fmt;

use itertools::Itertools;
use tracing::info;

use crate::error::{Error, Result};

pub trait PaymentStrategy: Send + Sync {
    /// Confirmation text naming the amount and a masked identifier.
    fn pay(&self, amount: u64) -> String;
    fn name(&self) -> &str;
    fn icon(&self) -> &str;
}

/// Replaces all but the last four characters with `*`, keeping the length.
/// Inputs of four characters or fewer come back unchanged.
pub fn mask_tail(value: &str) -> String {
    let len = value.chars().count();
    let hidden = len.saturating_sub(4);
    "*".repeat(hidden) + &value.chars().skip(hidden).collect::<String>()
}

/// `first6...last4`, whatever the input length.
pub fn mask_wallet(address: &str) -> String {
    let head: String = address.chars().take(6).collect();
    let len = address.chars().count();
    let tail: String = address.chars().skip(len.saturating_sub(4)).collect();
    format!("{head}...{tail}")
}

/// `1234567` -> `1,234,567`.
pub fn format_amount(amount: u64) -> String {
    let digits: Vec<char> = amount.to_string().chars().rev().collect();
    digits
        .chunks(3)
        .map(|chunk| chunk.iter().rev().collect::<String>())
        .rev()
        .join(",")
}

// ============================================================================
// Concrete strategies
// ============================================================================

#[derive(Debug, Clone)]
pub struct CreditCardStrategy {
    card_number: String,
    card_holder: String,
}

impl CreditCardStrategy {
    pub fn new(card_number: impl Into<String>, card_holder: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
            card_holder: card_holder.into(),
        }
    }
}

impl PaymentStrategy for CreditCardStrategy {
    fn pay(&self, amount: u64) -> String {
        format!(
            "💳 Paid {} with credit card ({})\nCardholder: {}",
            format_amount(amount),
            mask_tail(&self.card_number),
            self.card_holder
        )
    }

    fn name(&self) -> &str {
        "Credit card"
    }

    fn icon(&self) -> &str {
        "💳"
    }
}

#[derive(Debug, Clone)]
pub struct PayPalStrategy {
    email: String,
}

impl PayPalStrategy {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }
}

impl PaymentStrategy for PayPalStrategy {
    fn pay(&self, amount: u64) -> String {
        format!("🅿️ Paid {} with PayPal ({})", format_amount(amount), self.email)
    }

    fn name(&self) -> &str {
        "PayPal"
    }

    fn icon(&self) -> &str {
        "🅿️"
    }
}

#[derive(Debug, Clone)]
pub struct BankTransferStrategy {
    bank_name: String,
    account_number: String,
}

impl BankTransferStrategy {
    pub fn new(bank_name: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self {
            bank_name: bank_name.into(),
            account_number: account_number.into(),
        }
    }
}

impl PaymentStrategy for BankTransferStrategy {
    fn pay(&self, amount: u64) -> String {
        format!(
            "🏦 Transferred {} from {} account ({})",
            format_amount(amount),
            self.bank_name,
            mask_tail(&self.account_number)
        )
    }

    fn name(&self) -> &str {
        "Bank transfer"
    }

    fn icon(&self) -> &str {
        "🏦"
    }
}

#[derive(Debug, Clone)]
pub struct CryptoStrategy {
    wallet_address: String,
}

impl CryptoStrategy {
    pub fn new(wallet_address: impl Into<String>) -> Self {
        Self {
            wallet_address: wallet_address.into(),
        }
    }
}

impl PaymentStrategy for CryptoStrategy {
    fn pay(&self, amount: u64) -> String {
        format!(
            "₿ Paid the equivalent of {} from crypto wallet ({})",
            format_amount(amount),
            mask_wallet(&self.wallet_address)
        )
    }

    fn name(&self) -> &str {
        "Cryptocurrency"
    }

    fn icon(&self) -> &str {
        "₿"
    }
}

// ============================================================================
// Context
// ============================================================================

#[derive(Default)]
pub struct PaymentContext {
    strategy: Option<Box<dyn PaymentStrategy>>,
}

impl PaymentContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever strategy was active.
    pub fn set_strategy(&mut self, strategy: impl PaymentStrategy + 'static) {
        info!(strategy = strategy.name(), "payment strategy selected");
        self.strategy = Some(Box::new(strategy));
    }

    pub fn execute_payment(&self, amount: u64) -> Result<String> {
        let strategy = self.strategy.as_deref().ok_or(Error::NoStrategySelected)?;
        Ok(strategy.pay(amount))
    }

    pub fn current_strategy(&self) -> Option<&dyn PaymentStrategy> {
        self.strategy.as_deref()
    }
}

impl fmt::Debug for PaymentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentContext")
            .field("strategy", &self.current_strategy().map(|s| s.name()))
            .finish()
    }
}
