//! Lifecycle notifications forwarded to the embedding application.
//!
//! The bridge holds no state of its own: it builds one payload per event and
//! hands it to whichever callbacks the application registered.

use crate::adapter::{Session, WalletAdapter};

/// How many characters of the public key survive on each side of the
/// ellipsis in [`short_address`].
const SHORT_ADDRESS_EDGE: usize = 4;

/// Identity of the wallet an event is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletMetadata {
    pub name: String,
    pub url: String,
    pub icon: String,
    pub features: Vec<String>,
}

impl WalletMetadata {
    fn of(adapter: &dyn WalletAdapter) -> Self {
        Self {
            name: adapter.name(),
            url: adapter.url(),
            icon: adapter.icon(),
            features: adapter.features(),
        }
    }
}

/// Payload handed to every notification callback.
///
/// `public_key` and `short_address` are empty for events raised before a
/// session exists (connecting, not-installed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletNotification {
    /// base58 form of the connected account, or empty
    pub public_key: String,
    /// abridged form for display, e.g. `AbCn…x9sL`
    pub short_address: String,
    pub wallet_name: String,
    pub metadata: WalletMetadata,
}

/// Truncate a public key's textual form for display: `AbCn…x9sL`.
///
/// Inputs short enough to display whole are returned unchanged.
pub fn short_address(public_key: &str) -> String {
    if public_key.len() <= 2 * SHORT_ADDRESS_EDGE {
        return public_key.to_owned();
    }

    format!(
        "{}…{}",
        &public_key[..SHORT_ADDRESS_EDGE],
        &public_key[public_key.len() - SHORT_ADDRESS_EDGE..]
    )
}

pub type NotificationHandler = Box<dyn Fn(&WalletNotification)>;

/// The four callbacks an application can register; all optional.
#[derive(Default)]
pub struct WalletNotifications {
    pub on_connect: Option<NotificationHandler>,
    pub on_connecting: Option<NotificationHandler>,
    pub on_disconnect: Option<NotificationHandler>,
    pub on_not_installed: Option<NotificationHandler>,
}

/// Forwards lifecycle events to the registered callbacks.
pub struct NotificationBridge {
    callbacks: WalletNotifications,
}

impl NotificationBridge {
    pub fn new(callbacks: WalletNotifications) -> Self {
        Self { callbacks }
    }

    fn payload(adapter: &dyn WalletAdapter, session: Option<&Session>) -> WalletNotification {
        let public_key = session
            .map(|session| session.public_key.to_base58())
            .unwrap_or_default();

        WalletNotification {
            short_address: short_address(&public_key),
            public_key,
            wallet_name: adapter.name(),
            metadata: WalletMetadata::of(adapter),
        }
    }

    pub fn connecting(&self, adapter: &dyn WalletAdapter) {
        if let Some(callback) = &self.callbacks.on_connecting {
            callback(&Self::payload(adapter, None));
        }
    }

    pub fn connected(&self, adapter: &dyn WalletAdapter, session: &Session) {
        if let Some(callback) = &self.callbacks.on_connect {
            callback(&Self::payload(adapter, Some(session)));
        }
    }

    pub fn disconnected(&self, adapter: &dyn WalletAdapter, session: &Session) {
        if let Some(callback) = &self.callbacks.on_disconnect {
            callback(&Self::payload(adapter, Some(session)));
        }
    }

    pub fn not_installed(&self, adapter: &dyn WalletAdapter) {
        if let Some(callback) = &self.callbacks.on_not_installed {
            callback(&Self::payload(adapter, None));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{ConnectFuture, DisconnectFuture, ReadyState};
    use crate::error::ConnectError;
    use crate::solana::Pubkey;
    use std::{cell::RefCell, rc::Rc};

    struct StubWallet;

    impl WalletAdapter for StubWallet {
        fn name(&self) -> String {
            "Phantom".to_owned()
        }

        fn url(&self) -> String {
            "https://phantom.app".to_owned()
        }

        fn ready_state(&self) -> ReadyState {
            ReadyState::Installed
        }

        fn connect(&self) -> ConnectFuture<'_> {
            Box::pin(async { Err(ConnectError::Unexpected("stub wallet".to_owned())) })
        }

        fn disconnect(&self) -> DisconnectFuture<'_> {
            Box::pin(async {})
        }
    }

    #[test]
    fn short_address_truncates_long_keys() {
        let key = Pubkey::new([42; 32]).to_base58();
        let short = short_address(&key);

        assert_eq!(short.chars().count(), 9);
        assert!(short.starts_with(&key[..4]));
        assert!(short.ends_with(&key[key.len() - 4..]));
        assert!(short.contains('…'));
    }

    #[test]
    fn short_address_keeps_short_inputs() {
        assert_eq!(short_address(""), "");
        assert_eq!(short_address("AbCnx9sL"), "AbCnx9sL");
    }

    #[test]
    fn connected_payload_carries_the_session() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let bridge = NotificationBridge::new(WalletNotifications {
            on_connect: Some(Box::new(move |notification: &WalletNotification| {
                sink.borrow_mut().push(notification.clone());
            })),
            ..WalletNotifications::default()
        });

        let session = Session {
            wallet_name: "Phantom".to_owned(),
            public_key: Pubkey::new([42; 32]),
        };
        bridge.connected(&StubWallet, &session);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].public_key, session.public_key.to_base58());
        assert_eq!(seen[0].short_address, short_address(&seen[0].public_key));
        assert_eq!(seen[0].wallet_name, "Phantom");
        assert_eq!(seen[0].metadata.url, "https://phantom.app");
    }

    #[test]
    fn sessionless_events_have_empty_key() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let bridge = NotificationBridge::new(WalletNotifications {
            on_not_installed: Some(Box::new(move |notification: &WalletNotification| {
                sink.borrow_mut().push(notification.clone());
            })),
            ..WalletNotifications::default()
        });

        bridge.not_installed(&StubWallet);
        // no callback registered for connecting: forwarding is a no-op
        bridge.connecting(&StubWallet);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].public_key, "");
        assert_eq!(seen[0].short_address, "");
        assert_eq!(seen[0].wallet_name, "Phantom");
    }
}
