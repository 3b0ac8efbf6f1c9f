//! Context object tying one opening of the selection surface together.

use crate::{
    adapter::{AdapterRef, Session},
    classify::{Classification, classify},
    config::WalletKitConfig,
    error::ConnectError,
    flow::{ConnectionFlow, FlowState, SelectOutcome},
    history::PreviouslyConnectedStore,
    notify::NotificationBridge,
};
use std::rc::Rc;

/// One wallet-selection session: configuration, history and the interactive
/// flow, with a lifetime scoped to the surface being open.
///
/// The session owns no adapters; the embedding application passes its
/// current registry snapshot to [`ModalSession::classify`] on every render.
pub struct ModalSession {
    config: WalletKitConfig,
    history: Rc<PreviouslyConnectedStore>,
    flow: ConnectionFlow,
}

impl ModalSession {
    /// Open a session over the given history store.
    ///
    /// The notification callbacks are taken out of `config` and wired into
    /// the flow; the presentational options stay readable through
    /// [`ModalSession::config`].
    pub fn new(mut config: WalletKitConfig, history: PreviouslyConnectedStore) -> Self {
        let history = Rc::new(history);
        let bridge = NotificationBridge::new(std::mem::take(&mut config.notifications));

        Self {
            flow: ConnectionFlow::new(Rc::clone(&history), bridge),
            history,
            config,
        }
    }

    /// the presentational options this session was opened with
    pub fn config(&self) -> &WalletKitConfig {
        &self.config
    }

    /// the persisted history, most recent first
    pub fn previously_connected(&self) -> Vec<String> {
        self.history.list()
    }

    /// Rank the registry snapshot for display.
    ///
    /// Also applies the automatic onboarding transition: an idle session
    /// whose snapshot yields nothing to list moves to
    /// [`FlowState::Onboarding`].
    pub fn classify(&self, adapters: &[AdapterRef]) -> Classification {
        let classification = classify(
            adapters,
            &self.history.list(),
            &self.config.wallet_precedence,
        );
        self.flow.sync_classification(&classification);
        classification
    }

    pub fn state(&self) -> FlowState {
        self.flow.state()
    }

    /// see [`ConnectionFlow::select`]
    pub async fn select(&self, adapter: AdapterRef) -> Result<SelectOutcome, ConnectError> {
        self.flow.select(adapter).await
    }

    /// see [`ConnectionFlow::go_onboarding`]
    pub fn go_onboarding(&self) {
        self.flow.go_onboarding()
    }

    /// see [`ConnectionFlow::close`]
    pub fn close(&self) {
        self.flow.close()
    }

    /// see [`ConnectionFlow::disconnect`]
    pub async fn disconnect(&self, adapter: AdapterRef, session: &Session) {
        self.flow.disconnect(adapter, session).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{ConnectFuture, DisconnectFuture, ReadyState, WalletAdapter};
    use crate::classify::HighlightedBy;
    use crate::history::MemoryStorage;
    use crate::solana::Pubkey;

    struct StubWallet {
        name: &'static str,
        state: ReadyState,
    }

    impl WalletAdapter for StubWallet {
        fn name(&self) -> String {
            self.name.to_owned()
        }

        fn ready_state(&self) -> ReadyState {
            self.state
        }

        fn connect(&self) -> ConnectFuture<'_> {
            let session = Session {
                wallet_name: self.name.to_owned(),
                public_key: Pubkey::new([1; 32]),
            };
            Box::pin(async move { Ok(session) })
        }

        fn disconnect(&self) -> DisconnectFuture<'_> {
            Box::pin(async {})
        }
    }

    fn stub(name: &'static str, state: ReadyState) -> AdapterRef {
        Rc::new(StubWallet { name, state })
    }

    fn session() -> ModalSession {
        ModalSession::new(
            WalletKitConfig::default(),
            PreviouslyConnectedStore::new(MemoryStorage::default()),
        )
    }

    #[tokio::test]
    async fn history_feeds_the_next_classification() {
        let modal = session();
        let adapters = [
            stub("Phantom", ReadyState::Installed),
            stub("Solflare", ReadyState::Installed),
        ];

        let first = modal.classify(&adapters);
        assert_eq!(first.highlighted_by, HighlightedBy::Installed);

        modal.select(adapters[1].clone()).await.unwrap();
        assert_eq!(modal.previously_connected(), ["Solflare"]);

        let second = modal.classify(&adapters);
        assert_eq!(second.highlighted_by, HighlightedBy::PreviouslyConnected);
        assert_eq!(second.highlight[0].name(), "Solflare");
    }

    #[test]
    fn empty_snapshot_moves_the_session_to_onboarding() {
        let modal = session();

        let classification = modal.classify(&[]);

        assert!(classification.is_onboarding());
        assert!(modal.state().is_onboarding());

        modal.close();
        assert!(modal.state().is_idle());
    }
}
