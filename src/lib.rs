//! MTG deck-building SDK for Rust.
//!
//! Validates decks against format rules (Commander, Standard, Legacy, ...),
//! computes deck statistics (mana curve, type and color distribution,
//! mean/median mana value), parses text decklists, and talks to the
//! collection backend's REST API to fetch and edit decks.
//!
//! Validation and statistics are pure functions over an in-memory card list
//! and never touch the network.
//!
//! # Quick start
//!
//! ```no_run
//! use mtgdeck_sdk::DeckSdk;
//!
//! let sdk = DeckSdk::builder().session_token("secret").build().unwrap();
//!
//! // Fetch a deck and check it against its format
//! let deck = sdk.items().get("65f1c0ffee").unwrap();
//! let result = sdk.validator().validate_cards(deck.format_id(), &deck.cards);
//!
//! // Statistics for display
//! let curve = sdk.stats(&deck.cards).mana_curve(mtgdeck_sdk::models::CurveMode::Type);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod connection;
pub mod error;
pub mod import;
pub mod mana;
pub mod models;
pub mod queries;
pub mod rules;
pub mod stats;

#[cfg(feature = "async")]
pub use async_client::AsyncDeckSdk;
pub use connection::Connection;
pub use error::{DeckError, Result};
pub use import::{parse_decklist, parse_import_line};
pub use models::{CardStackEntry, Deck, DeckInput, ValidationResult};
pub use rules::{DeckFormatRule, DeckValidator, FormatCatalog};
pub use stats::DeckStatsAggregator;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// DeckSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`DeckSdk`] instance.
///
/// Use [`DeckSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DeckSdkBuilder::build) to create the SDK.
pub struct DeckSdkBuilder {
    base_url: String,
    session_token: Option<String>,
    timeout: Duration,
    catalog: FormatCatalog,
}

impl Default for DeckSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            session_token: None,
            timeout: config::default_timeout(),
            catalog: FormatCatalog::standard(),
        }
    }
}

impl DeckSdkBuilder {
    /// Start from the environment.
    ///
    /// Reads the backend URL from `MTGDECK_BASE_URL` and the session token
    /// from `MTGDECK_SESSION_TOKEN`; unset variables keep the defaults.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Ok(url) = std::env::var(config::BASE_URL_ENV) {
            if !url.trim().is_empty() {
                builder.base_url = url;
            }
        }
        if let Ok(token) = std::env::var(config::SESSION_TOKEN_ENV) {
            if !token.trim().is_empty() {
                builder.session_token = Some(token);
            }
        }
        builder
    }

    /// Set the collection backend root URL.
    ///
    /// Defaults to `http://localhost:8000`.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Session token sent as the backend's session cookie.
    pub fn session_token(mut self, token: &str) -> Self {
        self.session_token = Some(token.to_string());
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the format catalog used for validation.
    pub fn catalog(mut self, catalog: FormatCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Build the SDK.
    ///
    /// Only checks the base URL; the HTTP client is created lazily on the
    /// first backend request.
    pub fn build(self) -> Result<DeckSdk> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DeckError::InvalidArgument(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        let conn = Connection::new(url, self.session_token, self.timeout);
        Ok(DeckSdk {
            conn,
            catalog: self.catalog,
        })
    }
}

// ---------------------------------------------------------------------------
// DeckSdk
// ---------------------------------------------------------------------------

/// The main entry point for the SDK.
///
/// Owns the format catalog and the backend [`Connection`], and hands out
/// lightweight borrowing wrappers for validation, statistics and backend
/// queries.
pub struct DeckSdk {
    conn: Connection,
    catalog: FormatCatalog,
}

impl DeckSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> DeckSdkBuilder {
        DeckSdkBuilder::default()
    }

    // -- Accessors ---------------------------------------------------------

    /// Access the deck validator bound to this SDK's format catalog.
    pub fn validator(&self) -> DeckValidator<'_> {
        DeckValidator::new(&self.catalog)
    }

    /// Statistics over a card list.
    pub fn stats<'c>(&self, cards: &'c [CardStackEntry]) -> DeckStatsAggregator<'c> {
        DeckStatsAggregator::new(cards)
    }

    /// Access the folder/deck query interface.
    pub fn items(&self) -> queries::items::ItemsClient<'_> {
        queries::items::ItemsClient::new(&self.conn, &self.catalog)
    }

    /// The format catalog used for validation.
    pub fn catalog(&self) -> &FormatCatalog {
        &self.catalog
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for DeckSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DeckSdk(base_url={}, formats=[{}], session={})",
            self.conn.base_url,
            self.catalog.ids().join(", "),
            self.conn.has_session()
        )
    }
}
