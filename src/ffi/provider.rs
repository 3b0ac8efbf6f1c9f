use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_namespace = ["window", "phantom"], js_name = "solana")]
    pub static PHANTOM: Option<WalletProvider>;
    #[wasm_bindgen(thread_local_v2, js_namespace = ["window"], js_name = "solflare")]
    pub static SOLFLARE: Option<WalletProvider>;
    #[wasm_bindgen(thread_local_v2, js_namespace = ["window"], js_name = "backpack")]
    pub static BACKPACK: Option<WalletProvider>;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, PartialEq)]
    pub type WalletProvider;

    /// Whether the provider already holds an approved session for this
    /// origin. If `true`, calling [`WalletProvider::connect`] resolves
    /// without prompting the user.
    #[wasm_bindgen(method, getter, js_name = "isConnected")]
    pub fn is_connected(this: &WalletProvider) -> bool;

    /// The account object the provider currently exposes, or
    /// null/undefined when no session is established. The object
    /// stringifies to the base58 form of the key.
    #[wasm_bindgen(method, getter, js_name = "publicKey")]
    pub fn public_key(this: &WalletProvider) -> JsValue;

    /// A URI image for the wallet, when the provider advertises one
    /// (wallet-standard providers do).
    #[wasm_bindgen(method, getter)]
    pub fn icon(this: &WalletProvider) -> Option<String>;

    /// Establishes the connection with the user's wallet, prompting for
    /// permission on first connect. Resolves to an object carrying the
    /// exposed `publicKey`; subsequent connects may use cached permissions
    /// and resolve without a prompt.
    ///
    /// Rejects with an error object `{ code, message }` when the user or
    /// the wallet declines; see [`crate::error::ProviderErrorCode`] for the
    /// codes providers raise.
    #[wasm_bindgen(method, catch)]
    pub async fn connect(this: &WalletProvider) -> Result<JsValue, JsValue>;

    /// Revokes the connection. Providers resolve this even when no session
    /// was established.
    #[wasm_bindgen(method, catch)]
    pub async fn disconnect(this: &WalletProvider) -> Result<JsValue, JsValue>;
}
