//! Async wrapper around [`DeckSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the backend.
//!
//! # Example
//!
//! ```no_run
//! use mtgdeck_sdk::AsyncDeckSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncDeckSdk::builder().build().await.unwrap();
//!
//!     let result = sdk.validate("65f1c0ffee").await.unwrap();
//!     println!("{}", result.message);
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{DeckError, Result};
use crate::models::{Deck, DeckStatsSummary, ItemSummary, ValidationResult};
use crate::{DeckSdk, FormatCatalog};

// ---------------------------------------------------------------------------
// AsyncDeckSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncDeckSdk`] instance.
#[derive(Default)]
pub struct AsyncDeckSdkBuilder {
    base_url: Option<String>,
    session_token: Option<String>,
    timeout: Option<Duration>,
    catalog: Option<FormatCatalog>,
}

impl AsyncDeckSdkBuilder {
    /// Set the collection backend root URL.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Session token sent as the backend's session cookie.
    pub fn session_token(mut self, token: &str) -> Self {
        self.session_token = Some(token.to_string());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the format catalog used for validation.
    pub fn catalog(mut self, catalog: FormatCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build the async SDK on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncDeckSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = DeckSdk::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(&url);
            }
            if let Some(token) = self.session_token {
                builder = builder.session_token(&token);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(catalog) = self.catalog {
                builder = builder.catalog(catalog);
            }
            let sdk = builder.build()?;
            Ok(AsyncDeckSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| DeckError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncDeckSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`DeckSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`].
pub struct AsyncDeckSdk {
    inner: Arc<Mutex<DeckSdk>>,
}

impl AsyncDeckSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncDeckSdkBuilder {
        AsyncDeckSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// ```no_run
    /// # use mtgdeck_sdk::AsyncDeckSdk;
    /// # async fn example() -> mtgdeck_sdk::Result<()> {
    /// # let sdk = AsyncDeckSdk::builder().build().await?;
    /// let decks = sdk.run(|s| s.items().decks()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DeckSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| DeckError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| DeckError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch a deck asynchronously.
    pub async fn get(&self, item_id: &str) -> Result<Deck> {
        let id = item_id.to_string();
        self.run(move |s| s.items().get(&id)).await
    }

    /// List every deck asynchronously.
    pub async fn decks(&self) -> Result<Vec<ItemSummary>> {
        self.run(|s| s.items().decks()).await
    }

    /// Fetch and validate a deck asynchronously.
    pub async fn validate(&self, item_id: &str) -> Result<ValidationResult> {
        let id = item_id.to_string();
        self.run(move |s| s.items().validate(&id)).await
    }

    /// Fetch a deck and compute its statistics asynchronously.
    pub async fn stats(&self, item_id: &str, include_colorless: bool) -> Result<DeckStatsSummary> {
        let id = item_id.to_string();
        self.run(move |s| s.items().stats(&id, include_colorless)).await
    }
}
