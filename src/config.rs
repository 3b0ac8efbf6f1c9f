//! Options recognized by the selection surface.

use crate::notify::WalletNotifications;
use std::collections::HashMap;

/// Visual theme of the selection surface. Presentational only: the core
/// never branches on it, the renderer does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Jupiter,
}

/// External link explaining what a wallet list is, shown next to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletlistExplanation {
    pub href: String,
}

/// Configuration supplied by the embedding application for one modal
/// session.
#[derive(Default)]
pub struct WalletKitConfig {
    /// ordering preference applied to the trailing wallet list, see
    /// [`crate::classify::classify`]
    pub wallet_precedence: Vec<String>,
    pub walletlist_explanation: Option<WalletlistExplanation>,
    pub theme: Theme,
    /// wallet name to HTML fragment rendered next to that wallet's entry;
    /// presentational only
    pub wallet_attachments: HashMap<String, String>,
    /// lifecycle callbacks, consumed by the notification bridge
    pub notifications: WalletNotifications,
}
