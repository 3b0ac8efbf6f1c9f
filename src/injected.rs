use crate::{
    adapter::{AdapterRef, ConnectFuture, DisconnectFuture, ReadyState, Session, WalletAdapter},
    error::{ConnectError, ProviderError},
    ffi,
    solana::Pubkey,
};
use std::rc::Rc;
use wasm_bindgen::JsValue;

/// Features every injected Solana provider in the slot table implements.
const PROVIDER_FEATURES: &[&str] = &[
    "solana:signAndSendTransaction",
    "solana:signTransaction",
    "solana:signMessage",
];

/// A wallet we know where to look for in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ProviderSlot {
    name: &'static str,
    url: &'static str,
    /// property path below `window` where the provider gets injected
    path: &'static [&'static str],
}

const PROVIDER_SLOTS: &[ProviderSlot] = &[
    ProviderSlot {
        name: "Phantom",
        url: "https://phantom.app",
        path: &["phantom", "solana"],
    },
    ProviderSlot {
        name: "Solflare",
        url: "https://solflare.com",
        path: &["solflare"],
    },
    ProviderSlot {
        name: "Backpack",
        url: "https://backpack.app",
        path: &["backpack"],
    },
];

/// A wallet backed by a provider injected into the page, or the known slot
/// for one that is not injected here (so the not-installed flow has a
/// wallet to talk about).
#[derive(Clone, PartialEq)]
pub struct InjectedWallet {
    slot: ProviderSlot,
    provider: Option<ffi::WalletProvider>,
}

/// attempt to find the wallet by name
///
/// This function is equivalent to
///
/// `wallets().into_iter().find(|wallet| wallet.name() == name)`
///
pub fn wallet(name: &str) -> Option<InjectedWallet> {
    wallets().into_iter().find(|wallet| wallet.name() == name)
}

pub fn phantom() -> Option<InjectedWallet> {
    ffi::provider::PHANTOM.with(|provider| {
        provider.clone().map(|provider| InjectedWallet {
            slot: PROVIDER_SLOTS[0],
            provider: Some(provider),
        })
    })
}

/// List the wallets we know how to reach from this page.
///
/// One entry is returned per known wallet, whether or not its provider is
/// injected: a missing provider shows up as [`ReadyState::NotDetected`] and
/// selecting it routes the user to install help instead of a connect.
///
/// Extensions inject their provider after the initial page load; refresh
/// the list from time to time rather than calling it once.
///
pub fn wallets() -> Vec<InjectedWallet> {
    PROVIDER_SLOTS
        .iter()
        .map(|slot| InjectedWallet {
            slot: *slot,
            provider: provider_at(slot.path),
        })
        .collect()
}

/// Walk a property path below `window`, accepting the value only when it
/// quacks like a wallet provider.
fn provider_at(path: &[&str]) -> Option<ffi::WalletProvider> {
    let window = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("window")).ok()?;

    let mut value = window;
    for segment in path {
        value = js_sys::Reflect::get(&value, &JsValue::from_str(segment)).ok()?;
    }

    looks_like_wallet_provider(&value).then(|| ffi::WalletProvider::from(value))
}

fn looks_like_wallet_provider(value: &JsValue) -> bool {
    if !value.is_object() {
        return false;
    }

    let has_function_property = |prop: &str| {
        js_sys::Reflect::get(value, &JsValue::from_str(prop))
            .ok()
            .map(|v| v.is_function())
            .unwrap_or(false)
    };

    has_function_property("connect") && has_function_property("disconnect")
}

impl InjectedWallet {
    /// box the wallet up for the selection surface
    pub fn into_adapter(self) -> AdapterRef {
        Rc::new(self)
    }

    fn decode_session(&self, provider: &ffi::WalletProvider, response: JsValue) -> Result<Session, ConnectError> {
        // the account rides on the resolved object; older providers only
        // set it on themselves
        let key = js_sys::Reflect::get(&response, &JsValue::from_str("publicKey"))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
            .unwrap_or_else(|| provider.public_key());

        Ok(Session {
            wallet_name: self.name(),
            public_key: pubkey_from_js(&key)?,
        })
    }
}

impl WalletAdapter for InjectedWallet {
    fn name(&self) -> String {
        self.slot.name.to_owned()
    }

    fn icon(&self) -> String {
        self.provider
            .as_ref()
            .and_then(|provider| provider.icon())
            .unwrap_or_default()
    }

    fn url(&self) -> String {
        self.slot.url.to_owned()
    }

    fn features(&self) -> Vec<String> {
        PROVIDER_FEATURES.iter().map(|f| (*f).to_owned()).collect()
    }

    fn ready_state(&self) -> ReadyState {
        if self.provider.is_some() {
            ReadyState::Installed
        } else {
            ReadyState::NotDetected
        }
    }

    fn connect(&self) -> ConnectFuture<'_> {
        Box::pin(async move {
            let Some(provider) = &self.provider else {
                // the flow controller routes NotDetected wallets away from
                // connect; reaching this is a caller error, not a user one
                return Err(ConnectError::Unexpected(format!(
                    "no provider detected for {}",
                    self.name()
                )));
            };

            match provider.connect().await {
                Ok(response) => self.decode_session(provider, response),
                Err(error) => Err(decode_provider_error(error)),
            }
        })
    }

    fn disconnect(&self) -> DisconnectFuture<'_> {
        Box::pin(async move {
            if let Some(provider) = &self.provider {
                let _ = provider.disconnect().await;
            }
        })
    }
}

fn pubkey_from_js(value: &JsValue) -> Result<Pubkey, ConnectError> {
    if value.is_undefined() || value.is_null() {
        return Err(ConnectError::Unexpected(
            "the provider exposed no publicKey".to_owned(),
        ));
    }

    let text = value
        .as_string()
        .unwrap_or_else(|| String::from(js_sys::Object::from(value.clone()).to_string()));

    text.parse()
        .map_err(|error| ConnectError::Unexpected(format!("Invalid publicKey `{text}': {error}")))
}

fn decode_provider_error(error: JsValue) -> ConnectError {
    match serde_wasm_bindgen::from_value::<ProviderError>(error) {
        Ok(provider_error) => ConnectError::Rejected(provider_error),
        Err(decode_error) => ConnectError::Unexpected(format!(
            "Couldn't decode the error content: {decode_error}"
        )),
    }
}
