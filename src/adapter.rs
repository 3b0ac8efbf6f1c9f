use crate::{error::ConnectError, solana::Pubkey};
use core::fmt;
use std::{future::Future, pin::Pin, rc::Rc};

/// How directly a wallet can be engaged from the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReadyState {
    /// The wallet backend is present and can be connected to right away.
    Installed,
    /// The wallet can be loaded on demand (e.g. a web wallet reachable
    /// without a browser extension).
    Loadable,
    /// We know about this wallet but found no backend for it here.
    NotDetected,
    /// The wallet cannot be used in this environment at all.
    Unsupported,
}

/// A successfully established wallet session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// name of the wallet the session was established with
    pub wallet_name: String,
    /// the account the wallet exposed to us
    pub public_key: Pubkey,
}

pub type ConnectFuture<'a> = Pin<Box<dyn Future<Output = Result<Session, ConnectError>> + 'a>>;
pub type DisconnectFuture<'a> = Pin<Box<dyn Future<Output = ()> + 'a>>;

/// Shared handle to a wallet adapter.
///
/// The kit runs in the browser's single-threaded event model so adapters are
/// reference counted rather than sent across threads.
pub type AdapterRef = Rc<dyn WalletAdapter>;

/// Capability interface over one wallet backend.
///
/// The selection surface only ever talks to wallets through this trait: the
/// concrete backend may be an injected browser provider (see
/// [`crate::InjectedWallet`]), a loadable web wallet, or anything else able
/// to produce a [`Session`].
pub trait WalletAdapter {
    /// name of the wallet application, e.g. `"Phantom"`
    ///
    /// Names identify a wallet within one registry snapshot; the classifier
    /// drops same-name duplicates.
    fn name(&self) -> String;

    /// HTML ready icon for this wallet, usable as an `img src`
    fn icon(&self) -> String {
        String::new()
    }

    /// homepage of the wallet application, where a user can install it
    fn url(&self) -> String {
        String::new()
    }

    /// feature identifiers advertised by this wallet,
    /// e.g. `"solana:signTransaction"`
    fn features(&self) -> Vec<String> {
        Vec::new()
    }

    fn ready_state(&self) -> ReadyState;

    /// Establish a session, prompting the user if needed.
    ///
    /// The kit awaits at most one connect at a time; see
    /// [`crate::ConnectionFlow::select`].
    fn connect(&self) -> ConnectFuture<'_>;

    /// Tear the session down. Backend errors are swallowed here: there is
    /// nothing the selection surface could do with them.
    fn disconnect(&self) -> DisconnectFuture<'_>;
}

impl fmt::Debug for dyn WalletAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletAdapter")
            .field("name", &self.name())
            .field("ready_state", &self.ready_state())
            .finish()
    }
}
