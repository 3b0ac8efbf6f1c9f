//! The interactive flow driven after the user picks a wallet.
//!
//! One [`ConnectionFlow`] lives for one opening of the selection surface.
//! It is re-entrant for the modal's lifetime: every path resolves back to
//! [`FlowState::Idle`], nothing here is fatal to the host application.

use crate::{
    adapter::{AdapterRef, ReadyState, Session},
    classify::Classification,
    error::ConnectError,
    history::PreviouslyConnectedStore,
    notify::NotificationBridge,
};
use core::fmt;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// What the selection surface is currently showing.
///
/// Exactly one state is active at a time; the state is created fresh when
/// the surface opens and discarded when it closes.
#[derive(Clone, Default)]
pub enum FlowState {
    #[default]
    Idle,
    /// awaiting the wallet's connect call
    Connecting(AdapterRef),
    /// the picked wallet has no backend here; offer install help
    NotInstalled(AdapterRef),
    /// no usable wallet at all; offer the install-a-wallet flow
    Onboarding,
}

impl FlowState {
    pub fn is_idle(&self) -> bool {
        matches!(self, FlowState::Idle)
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, FlowState::Connecting(_))
    }

    pub fn is_onboarding(&self) -> bool {
        matches!(self, FlowState::Onboarding)
    }

    /// the wallet the state is about, when there is one
    pub fn wallet(&self) -> Option<AdapterRef> {
        match self {
            FlowState::Connecting(adapter) | FlowState::NotInstalled(adapter) => {
                Some(Rc::clone(adapter))
            }
            FlowState::Idle | FlowState::Onboarding => None,
        }
    }
}

impl fmt::Debug for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowState::Idle => write!(f, "Idle"),
            FlowState::Connecting(adapter) => write!(f, "Connecting({})", adapter.name()),
            FlowState::NotInstalled(adapter) => write!(f, "NotInstalled({})", adapter.name()),
            FlowState::Onboarding => write!(f, "Onboarding"),
        }
    }
}

/// How a [`ConnectionFlow::select`] call came out, short of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// the wallet produced a session; the modal can close
    Connected(Session),
    /// routed to the not-installed view instead of connecting
    NotInstalled,
    /// the modal closed while the connect was pending; the settled result
    /// was dropped
    Dismissed,
}

/// State machine driving what the user sees after picking a wallet.
///
/// Runs in the browser's single-threaded event model: state lives behind
/// `RefCell`/`Cell` and the only suspension point is the adapter's connect
/// call. At most one connect is awaited at a time.
pub struct ConnectionFlow {
    state: RefCell<FlowState>,
    /// generation of the pending connect; bumped to orphan a stale result
    attempt: Cell<u64>,
    history: Rc<PreviouslyConnectedStore>,
    bridge: NotificationBridge,
}

impl ConnectionFlow {
    pub fn new(history: Rc<PreviouslyConnectedStore>, bridge: NotificationBridge) -> Self {
        Self {
            state: RefCell::new(FlowState::Idle),
            attempt: Cell::new(0),
            history,
            bridge,
        }
    }

    /// a snapshot of the current state
    pub fn state(&self) -> FlowState {
        self.state.borrow().clone()
    }

    /// The user picked a wallet.
    ///
    /// A wallet with no detected backend routes to the not-installed view
    /// without any connect call. Otherwise the flow enters
    /// [`FlowState::Connecting`], emits the connecting notification and
    /// awaits the adapter. While a connect is pending, further selections
    /// are rejected with [`ConnectError::InFlight`].
    ///
    /// On success the wallet is recorded in the history and the connect
    /// notification fires; on failure the error is returned to the caller
    /// once and the history stays untouched. Either way the flow is back to
    /// [`FlowState::Idle`].
    pub async fn select(&self, adapter: AdapterRef) -> Result<SelectOutcome, ConnectError> {
        {
            let mut state = self.state.borrow_mut();
            if state.is_connecting() {
                return Err(ConnectError::InFlight);
            }

            if adapter.ready_state() == ReadyState::NotDetected {
                log::debug!("no backend detected for {}, offering install help", adapter.name());
                *state = FlowState::NotInstalled(Rc::clone(&adapter));
                drop(state);
                self.bridge.not_installed(&*adapter);
                return Ok(SelectOutcome::NotInstalled);
            }

            *state = FlowState::Connecting(Rc::clone(&adapter));
        }

        let attempt = self.attempt.get().wrapping_add(1);
        self.attempt.set(attempt);
        self.bridge.connecting(&*adapter);

        let result = adapter.connect().await;

        if self.attempt.get() != attempt {
            // the modal closed while we were waiting; nobody listens to
            // this result anymore and the history must not change
            log::debug!("dropping settled connect for {}", adapter.name());
            return Ok(SelectOutcome::Dismissed);
        }

        *self.state.borrow_mut() = FlowState::Idle;

        match result {
            Ok(session) => {
                self.history.record_connected(&session.wallet_name);
                self.bridge.connected(&*adapter, &session);
                Ok(SelectOutcome::Connected(session))
            }
            Err(error) => {
                log::warn!("connecting to {} failed: {error}", adapter.name());
                Err(error)
            }
        }
    }

    /// From the not-installed view, move on to the install-a-wallet flow.
    /// A no-op from any other state.
    pub fn go_onboarding(&self) {
        let mut state = self.state.borrow_mut();
        if matches!(&*state, FlowState::NotInstalled(_)) {
            *state = FlowState::Onboarding;
        }
    }

    /// The surface was dismissed.
    ///
    /// A pending connect is not cancelled (that capability belongs to the
    /// adapter); its result is orphaned and will be dropped when it settles.
    pub fn close(&self) {
        self.attempt.set(self.attempt.get().wrapping_add(1));
        *self.state.borrow_mut() = FlowState::Idle;
    }

    /// Apply a fresh classification: an idle surface with nothing to list
    /// moves to onboarding. Never fires while a non-idle view is showing.
    pub fn sync_classification(&self, classification: &Classification) {
        let mut state = self.state.borrow_mut();
        if state.is_idle() && classification.is_onboarding() {
            *state = FlowState::Onboarding;
        }
    }

    /// Tear an established session down and notify the application.
    pub async fn disconnect(&self, adapter: AdapterRef, session: &Session) {
        adapter.disconnect().await;
        self.bridge.disconnected(&*adapter, session);
    }
}
