/*!

# Unified wallet selector for Solana dApps

This library is the headless core of a unified wallet-selection surface for
web applications: it classifies and ranks the available wallets, remembers
which ones the user connected before, and drives the interactive flow from
picking a wallet to an established session. Rendering, translations and the
wallet wire protocol stay with the embedding application.

## Features

- Rank wallets into a recommended slot, a highlighted row and the
  remaining list
- Remember previously connected wallets across sessions
- Drive the connect / not-installed / onboarding flow
- Notify the application of wallet lifecycle events

## Usage

Open a modal session and rank the wallets available on the page:

```no_run
use solana_wallet_kit::{
    InjectedWallet, LocalStorage, ModalSession, PreviouslyConnectedStore, WalletKitConfig,
};

let modal = ModalSession::new(
    WalletKitConfig::default(),
    PreviouslyConnectedStore::new(LocalStorage),
);

let adapters: Vec<_> = solana_wallet_kit::wallets()
    .into_iter()
    .map(InjectedWallet::into_adapter)
    .collect();

let classification = modal.classify(&adapters);
println!("{}", classification.highlighted_by.label());
for wallet in &classification.highlight {
    println!("{}", wallet.name());
}
```

Only the wallets the kit knows where to look for are listed; a wallet whose
provider is not injected in this browser shows up as
[`ReadyState::NotDetected`] so the selection surface can offer install help.

Then drive the user's selection:

```no_run
# use solana_wallet_kit::{AdapterRef, ModalSession, SelectOutcome};
#
# async fn test(modal: ModalSession, adapter: AdapterRef) -> anyhow::Result<()> {
match modal.select(adapter).await? {
    SelectOutcome::Connected(session) => println!("connected as {}", session.public_key),
    SelectOutcome::NotInstalled => { /* render the install-help view */ }
    SelectOutcome::Dismissed => {}
}
# Ok(()) }
```

*/

mod adapter;
pub mod classify;
pub mod config;
pub mod error;
pub mod ffi;
mod flow;
mod history;
mod injected;
mod modal;
mod notify;
pub mod solana;

pub use self::{
    adapter::{AdapterRef, ConnectFuture, DisconnectFuture, ReadyState, Session, WalletAdapter},
    classify::{Classification, HighlightedBy, RECOMMENDED_WALLETS, TOP_WALLETS, classify},
    config::{Theme, WalletKitConfig, WalletlistExplanation},
    error::{ConnectError, ProviderError, ProviderErrorCode},
    flow::{ConnectionFlow, FlowState, SelectOutcome},
    history::{LocalStorage, MemoryStorage, PreviouslyConnectedStore, StorageBackend},
    injected::{InjectedWallet, phantom, wallet, wallets},
    modal::ModalSession,
    notify::{
        NotificationBridge, NotificationHandler, WalletMetadata, WalletNotification,
        WalletNotifications, short_address,
    },
};
