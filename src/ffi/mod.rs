//! Raw bindings to the wallet providers injected into the page.

pub mod provider;

pub use self::provider::WalletProvider;
