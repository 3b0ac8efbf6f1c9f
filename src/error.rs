/// Error codes raised by injected Solana providers.
///
/// Providers follow the EIP-1193 numbering for user facing failures; codes
/// outside the table are preserved in [`ProviderErrorCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum ProviderErrorCode {
    #[error("The user rejected the request.")]
    UserRejected,
    #[error("The requested method and/or account has not been authorized.")]
    Unauthorized,
    #[error("The provider does not support the requested method.")]
    UnsupportedMethod,
    #[error("The provider is disconnected from all chains.")]
    Disconnected,
    #[error("The provider is not connected to the requested chain.")]
    ChainDisconnected,
    #[error("Unknown error code `{0}'")]
    Unknown(i64),
}

/// An error object as raised by a wallet provider, decoded from JavaScript.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error, serde::Deserialize,
)]
#[error("{code}. {message}.")]
pub struct ProviderError {
    pub code: ProviderErrorCode,
    #[serde(default)]
    pub message: String,
}

/// Why a connection attempt did not produce a session.
///
/// A wallet without a detected backend is not an error: selecting it routes
/// the flow to the not-installed state instead (see
/// [`crate::ConnectionFlow::select`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectError {
    /// Another connect is being awaited; the new selection is rejected until
    /// the pending one resolves or the modal closes.
    #[error("A connection attempt is already in flight.")]
    InFlight,
    /// The user or the wallet declined the handshake.
    #[error(transparent)]
    Rejected(#[from] ProviderError),
    /// The provider settled with something we could not make sense of.
    #[error("Unexpected response from the wallet provider: {0}")]
    Unexpected(String),
}

impl ConnectError {
    /// `true` when the failure came from the user (or wallet) declining,
    /// rather than from a broken provider.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ConnectError::Rejected(ProviderError {
                code: ProviderErrorCode::UserRejected | ProviderErrorCode::Unauthorized,
                ..
            })
        )
    }
}

impl<'de> serde::Deserialize<'de> for ProviderErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = ProviderErrorCode;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "Expecting an integer ProviderErrorCode")
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match v {
                    4001 => Ok(ProviderErrorCode::UserRejected),
                    4100 => Ok(ProviderErrorCode::Unauthorized),
                    4200 => Ok(ProviderErrorCode::UnsupportedMethod),
                    4900 => Ok(ProviderErrorCode::Disconnected),
                    4901 => Ok(ProviderErrorCode::ChainDisconnected),
                    unknown => Ok(ProviderErrorCode::Unknown(unknown)),
                }
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_i64(v as i64)
            }
        }

        deserializer.deserialize_i64(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn provider_error_code_json() {
        assert_eq!(
            serde_json::from_value::<ProviderErrorCode>(json! { 4001 }).unwrap(),
            ProviderErrorCode::UserRejected
        );
        assert_eq!(
            serde_json::from_value::<ProviderErrorCode>(json! { 4100 }).unwrap(),
            ProviderErrorCode::Unauthorized
        );
        assert_eq!(
            serde_json::from_value::<ProviderErrorCode>(json! { 4200 }).unwrap(),
            ProviderErrorCode::UnsupportedMethod
        );
        assert_eq!(
            serde_json::from_value::<ProviderErrorCode>(json! { 4900 }).unwrap(),
            ProviderErrorCode::Disconnected
        );
        assert_eq!(
            serde_json::from_value::<ProviderErrorCode>(json! { 4901 }).unwrap(),
            ProviderErrorCode::ChainDisconnected
        );
        assert_eq!(
            serde_json::from_value::<ProviderErrorCode>(json! { -32603 }).unwrap(),
            ProviderErrorCode::Unknown(-32603)
        );
    }

    #[test]
    fn provider_error_json() {
        assert_eq!(
            serde_json::from_value::<ProviderError>(json! { {
                "code": 4001,
                "message": "User rejected the request.",
            }})
            .unwrap(),
            ProviderError {
                code: ProviderErrorCode::UserRejected,
                message: "User rejected the request.".to_owned()
            }
        );

        // providers do not always attach a message
        assert_eq!(
            serde_json::from_value::<ProviderError>(json! { {
                "code": 4900,
            }})
            .unwrap(),
            ProviderError {
                code: ProviderErrorCode::Disconnected,
                message: String::new()
            }
        );
    }

    #[test]
    fn rejection_classification() {
        let declined = ConnectError::Rejected(ProviderError {
            code: ProviderErrorCode::UserRejected,
            message: String::new(),
        });
        assert!(declined.is_rejection());

        let broken = ConnectError::Unexpected("no publicKey in response".to_owned());
        assert!(!broken.is_rejection());
        assert!(!ConnectError::InFlight.is_rejection());
    }
}
