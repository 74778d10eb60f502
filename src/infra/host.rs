//! Host credential capability.
//!
//! Credential selection and inspection are delegated to the surrounding
//! environment. The application only ever talks to the [`CredentialHost`]
//! trait, so tests can substitute a deterministic host and production wires
//! in the OS keychain plus a native file dialog.

use async_trait::async_trait;

use crate::domain::CredentialHostError;

const KEYRING_SERVICE: &str = "storyweave";
const KEYRING_USER: &str = "api-key";

/// Host-environment capability for API key selection and inspection.
///
/// Both operations may fail or be entirely absent; neither condition is
/// fatal to the application.
#[async_trait]
pub trait CredentialHost: Send + Sync {
    /// Whether a usable API key has already been selected.
    async fn has_selected_api_key(&self) -> Result<bool, CredentialHostError>;

    /// Run the interactive key-selection flow.
    ///
    /// Resolving without error does not guarantee a key was stored: the user
    /// dismissing the flow is indistinguishable from completing it.
    async fn open_select_key(&self) -> Result<(), CredentialHostError>;

    /// Current key material, if any.
    async fn api_key(&self) -> Result<Option<String>, CredentialHostError>;
}

/// Production host: key material lives in the OS keychain, and selection
/// imports a key from a file picked in a native dialog.
pub struct KeychainHost {
    service: String,
}

impl KeychainHost {
    pub fn new() -> Self {
        Self {
            service: KEYRING_SERVICE.to_string(),
        }
    }

    fn read_key_blocking(service: &str) -> Result<Option<String>, CredentialHostError> {
        let entry =
            keyring::Entry::new(service, KEYRING_USER).map_err(|_| CredentialHostError::Unavailable)?;
        match entry.get_password() {
            Ok(key) => Ok(Some(key)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(CredentialHostError::OperationFailed(err.into())),
        }
    }

    fn store_key_blocking(service: &str, key: &str) -> Result<(), CredentialHostError> {
        let entry =
            keyring::Entry::new(service, KEYRING_USER).map_err(|_| CredentialHostError::Unavailable)?;
        entry
            .set_password(key)
            .map_err(|err| CredentialHostError::OperationFailed(err.into()))
    }
}

impl Default for KeychainHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialHost for KeychainHost {
    async fn has_selected_api_key(&self) -> Result<bool, CredentialHostError> {
        let key = self.api_key().await?;
        Ok(key.is_some_and(|key| !key.trim().is_empty()))
    }

    async fn open_select_key(&self) -> Result<(), CredentialHostError> {
        let picked = rfd::AsyncFileDialog::new()
            .set_title("Select a file containing your API key")
            .pick_file()
            .await;

        // Dismissal resolves cleanly; the host contract cannot tell it apart
        // from completion.
        let Some(handle) = picked else {
            return Ok(());
        };

        let contents = handle.read().await;
        let key = String::from_utf8_lossy(&contents).trim().to_string();
        if key.is_empty() {
            return Err(CredentialHostError::OperationFailed(anyhow::anyhow!(
                "selected key file is empty"
            )));
        }

        let service = self.service.clone();
        tokio::task::spawn_blocking(move || Self::store_key_blocking(&service, &key))
            .await
            .map_err(|err| CredentialHostError::OperationFailed(err.into()))?
    }

    async fn api_key(&self) -> Result<Option<String>, CredentialHostError> {
        let service = self.service.clone();
        tokio::task::spawn_blocking(move || Self::read_key_blocking(&service))
            .await
            .map_err(|err| CredentialHostError::OperationFailed(err.into()))?
    }
}
