//! The facts document injected into every prompt.

use std::{fmt, io::ErrorKind, ops::Deref, path::Path, sync::Arc};

use tracing::{info, instrument, warn};

use super::types::Res;

/// Text used when no facts document exists.
pub const NO_FACTS_PLACEHOLDER: &str = "No facts available.";

/// Immutable background text about Lannz.
///
/// Loaded once at startup and shared by every request; cloning is cheap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Facts {
    inner: Arc<str>,
}

impl Deref for Facts {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl fmt::Display for Facts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl Default for Facts {
    fn default() -> Self {
        Self::new(NO_FACTS_PLACEHOLDER)
    }
}

impl Facts {
    pub fn new(text: impl Into<String>) -> Self {
        Self { inner: Arc::from(text.into()) }
    }

    /// Read the facts document from `path`.
    ///
    /// A missing file is not an error: the placeholder text is used instead.
    #[instrument(name = "Facts::load", skip_all, fields(path = %path.display()))]
    pub async fn load(path: &Path) -> Res<Self> {
        match tokio::fs::read_to_string(path).await {
            Ok(text) => {
                info!("Loaded {} bytes of facts.", text.len());
                Ok(Self::new(text))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Facts file not found, using placeholder.");
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!("Failed to read facts file `{}`: {e}", path.display())),
        }
    }
}
