// Pattern 5: Decorator
// Notification channels layered around a base notifier.

use crate::output::SharedOutput;

pub trait Notifier {
    fn send(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn send(&self, message: &str) {
        (**self).send(message);
    }
}

/// The innermost layer every chain starts from.
pub struct BaseNotifier {
    out: SharedOutput,
}

impl BaseNotifier {
    pub fn new(out: SharedOutput) -> Self {
        Self { out }
    }
}

impl Notifier for BaseNotifier {
    fn send(&self, message: &str) {
        self.out.emit(&format!("Base notification: {message}"));
    }
}

// Each decorator owns the notifier it wraps. `send` forwards inward first,
// then adds its own channel, so the outermost layer reports last.
macro_rules! channel_decorator {
    ($(#[$meta:meta])* $name:ident, $channel:literal) => {
        $(#[$meta])*
        pub struct $name<N> {
            inner: N,
            out: SharedOutput,
        }

        impl<N: Notifier> $name<N> {
            pub fn new(inner: N, out: SharedOutput) -> Self {
                Self { inner, out }
            }
        }

        impl<N: Notifier> Notifier for $name<N> {
            fn send(&self, message: &str) {
                self.inner.send(message);
                tracing::trace!(channel = $channel, "sending");
                self.out.emit(&format!(concat!($channel, " sent: {}"), message));
            }
        }
    };
}

channel_decorator!(
    /// Adds an email after whatever it wraps has sent.
    EmailNotifier,
    "Email"
);
channel_decorator!(
    /// Adds a text message.
    SmsNotifier,
    "SMS"
);
channel_decorator!(SlackNotifier, "Slack");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Sms,
    Slack,
}

/// Builds a chain at runtime: `channels[0]` wraps the base notifier,
/// each later channel wraps the one before it.
pub fn stack(channels: &[Channel], out: &SharedOutput) -> Box<dyn Notifier> {
    channels.iter().fold(
        Box::new(BaseNotifier::new(out.clone())) as Box<dyn Notifier>,
        |inner: Box<dyn Notifier>, channel| -> Box<dyn Notifier> {
            match channel {
                Channel::Email => Box::new(EmailNotifier::new(inner, out.clone())),
                Channel::Sms => Box::new(SmsNotifier::new(inner, out.clone())),
                Channel::Slack => Box::new(SlackNotifier::new(inner, out.clone())),
            }
        },
    )
}
